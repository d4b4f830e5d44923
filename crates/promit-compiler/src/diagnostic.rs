//! Diagnostic records and the sink they are delivered to.

use std::fmt;

use promit_lexer::Token;

use crate::line_index::LineIndex;

/// Everything needed to show one lexical error with a caret under it.
///
/// The record borrows its text and only lives for the duration of the
/// [`DiagnosticSink::report`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    pub module: &'a str,
    pub message: &'a str,
    pub line_text: &'a str,
    pub line: usize,
    /// 1-based byte column of the offending text.
    pub column: usize,
    /// Length of the offending text in bytes.
    pub length: usize,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gutter = self.line.to_string().len();
        let start = self.column.saturating_sub(1).min(self.line_text.len());
        let end = (start + self.length).min(self.line_text.len());

        let indent: String = self
            .line_text
            .get(..start)
            .unwrap_or_default()
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let carets = self
            .line_text
            .get(start..end)
            .map_or(0, |s| s.chars().count())
            .max(1);

        writeln!(f, "error: {}", self.message)?;
        writeln!(
            f,
            "{:gutter$}--> {}:{}:{}",
            "", self.module, self.line, self.column
        )?;
        writeln!(f, "{:gutter$} |", "")?;
        writeln!(f, "{} | {}", self.line, self.line_text)?;
        write!(f, "{:gutter$} | {indent}{}", "", "^".repeat(carets))
    }
}

/// Receives diagnostics as they are reported.
///
/// Implemented for every `FnMut(&Diagnostic)` closure.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic<'_>);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic<'_>),
{
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        self(diagnostic)
    }
}

/// Turns error tokens of one compilation unit into diagnostics.
///
/// Without a sink, diagnostics are dropped.
pub struct Reporter<'a, 'c> {
    module: &'a str,
    lines: &'a LineIndex<'a>,
    sink: Option<&'a mut (dyn DiagnosticSink + 'c)>,
}

impl<'a, 'c> Reporter<'a, 'c> {
    pub fn new(
        module: &'a str,
        lines: &'a LineIndex<'a>,
        sink: Option<&'a mut (dyn DiagnosticSink + 'c)>,
    ) -> Self {
        Self {
            module,
            lines,
            sink,
        }
    }

    /// Report an error token, attaching the text of the line it starts on.
    pub fn report(&mut self, token: &Token<'_>) {
        let Some(sink) = self.sink.as_deref_mut() else {
            return;
        };

        let diagnostic = Diagnostic {
            module: self.module,
            message: &token.lexeme,
            line_text: self.lines.line_text(token.span.line).unwrap_or_default(),
            line: token.span.line,
            column: token.span.column,
            length: token.span.len(),
        };
        sink.report(&diagnostic);
    }
}
