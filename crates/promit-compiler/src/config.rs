use crate::alloc::{Reallocator, SystemReallocator};
use crate::diagnostic::DiagnosticSink;

/// Largest source accepted by default, in bytes.
pub const DEFAULT_MAX_SOURCE_LEN: usize = 16 * 1024 * 1024;

/// Module name used when none is configured.
pub const DEFAULT_MODULE: &str = "main";

/// Host-facing configuration for one compilation unit.
///
/// ```
/// use promit_compiler::{Configuration, Diagnostic};
///
/// let mut messages = Vec::new();
/// let config = Configuration::new()
///     .with_module("script.pmt")
///     .with_error_sink(|d: &Diagnostic<'_>| messages.push(d.message.to_string()));
/// assert_eq!(config.module(), "script.pmt");
/// ```
pub struct Configuration<'c> {
    pub(crate) module: String,
    pub(crate) error: Option<Box<dyn DiagnosticSink + 'c>>,
    pub(crate) reallocator: Box<dyn Reallocator + 'c>,
    pub(crate) max_source_len: usize,
}

impl<'c> Configuration<'c> {
    /// Defaults: module `main`, no error sink, the system reallocator and
    /// a 16 MiB source limit.
    pub fn new() -> Self {
        Self {
            module: DEFAULT_MODULE.to_string(),
            error: None,
            reallocator: Box::new(SystemReallocator),
            max_source_len: DEFAULT_MAX_SOURCE_LEN,
        }
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn with_error_sink(mut self, sink: impl DiagnosticSink + 'c) -> Self {
        self.error = Some(Box::new(sink));
        self
    }

    pub fn with_reallocator(mut self, reallocator: impl Reallocator + 'c) -> Self {
        self.reallocator = Box::new(reallocator);
        self
    }

    pub fn with_max_source_len(mut self, max_source_len: usize) -> Self {
        self.max_source_len = max_source_len;
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn max_source_len(&self) -> usize {
        self.max_source_len
    }

    pub fn has_error_sink(&self) -> bool {
        self.error.is_some()
    }
}

impl Default for Configuration<'_> {
    fn default() -> Self {
        Self::new()
    }
}
