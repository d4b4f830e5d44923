//! Promit Compiler front-end
//!
//! Drives the scanner over a module and turns lexical errors into
//! diagnostics. Includes the source line index used to show the offending
//! line, the swappable reallocator it draws line storage from, and the
//! token window that coalesces runs of error tokens into one report.

pub mod alloc;
pub mod compiler;
pub mod config;
pub mod diagnostic;
pub mod line_index;
pub mod token_stream;

pub use alloc::{Reallocator, SystemReallocator};
pub use compiler::{compile, CompileReport};
pub use config::Configuration;
pub use diagnostic::{Diagnostic, DiagnosticSink, Reporter};
pub use line_index::LineIndex;
pub use token_stream::TokenStream;

/// Compilation error for a whole module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("{module}: source is {len} bytes, limit is {limit}")]
    SourceTooLarge {
        module: String,
        len: usize,
        limit: usize,
    },
    #[error("Allocation of {size} bytes failed while indexing source lines")]
    AllocationFailed { size: usize },
    #[error("{module}: aborting due to {errors} lexical error(s)")]
    Lexical { module: String, errors: usize },
}
