//! Compilation driver for one Promit module.
//!
//! ```text
//! source → LineIndex::build ─┐
//!        → Scanner ──────────┴→ TokenStream → diagnostics → CompileReport
//! ```
//!
//! The grammar is not parsed yet: the driver walks the token window to the
//! end of input, which is where a parser will hook in.

use crate::config::Configuration;
use crate::diagnostic::Reporter;
use crate::line_index::LineIndex;
use crate::token_stream::TokenStream;
use crate::CompileError;

/// Summary of a successful compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileReport {
    /// Tokens consumed, excluding the final `Eof`.
    pub tokens: usize,
    /// Lines in the source.
    pub lines: usize,
}

/// Compile `source` as the module named in `config`.
///
/// Lexical errors are delivered to the configured sink as they are found,
/// one per run of consecutive error tokens, and then surface as
/// [`CompileError::Lexical`].
pub fn compile(source: &str, config: &mut Configuration<'_>) -> Result<CompileReport, CompileError> {
    if source.len() > config.max_source_len {
        return Err(CompileError::SourceTooLarge {
            module: config.module.clone(),
            len: source.len(),
            limit: config.max_source_len,
        });
    }

    let _span = tracing::debug_span!("compile", module = %config.module).entered();

    let lines = LineIndex::build(source, config.reallocator.as_ref())?;
    tracing::debug!(bytes = source.len(), lines = lines.len(), "indexed source lines");

    let reporter = Reporter::new(&config.module, &lines, config.error.as_deref_mut());
    let mut stream = TokenStream::new(source, reporter);

    let mut tokens = 0;
    while !stream.is_at_end() {
        tokens += 1;
        stream.advance();
    }

    let errors = stream.reported();
    tracing::debug!(
        tokens,
        errors,
        suppressed = stream.suppressed(),
        "finished scanning"
    );

    if errors > 0 {
        return Err(CompileError::Lexical {
            module: config.module.clone(),
            errors,
        });
    }

    Ok(CompileReport {
        tokens,
        lines: lines.len(),
    })
}
