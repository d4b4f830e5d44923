//! One-token lookahead window over the scanner.
//!
//! The window keeps the `previous`, `current` and `next` tokens. Every
//! [`TokenStream::advance`] pulls a new `next` from the scanner; when that
//! token is an error it is reported, unless `current` is an error too. A
//! run of consecutive error tokens therefore produces a single diagnostic.

use promit_lexer::{Scanner, Span, Token, TokenKind};

use crate::diagnostic::Reporter;

pub struct TokenStream<'src, 'a, 'c> {
    scanner: Scanner<'src>,
    reporter: Reporter<'a, 'c>,
    previous: Token<'src>,
    current: Token<'src>,
    next: Token<'src>,
    reported: usize,
    suppressed: usize,
}

impl<'src, 'a, 'c> TokenStream<'src, 'a, 'c> {
    /// Start a stream over `source` and load `current` and `next`.
    pub fn new(source: &'src str, reporter: Reporter<'a, 'c>) -> Self {
        let placeholder = Token::new(TokenKind::Eof, "", Span::new(0, 0, 1, 1));
        let mut stream = Self {
            scanner: Scanner::new(source),
            reporter,
            previous: placeholder.clone(),
            current: placeholder.clone(),
            next: placeholder,
            reported: 0,
            suppressed: 0,
        };
        stream.advance();
        stream.advance();
        stream
    }

    /// Shift the window by one token.
    pub fn advance(&mut self) {
        let next = self.scanner.next_token();
        let current = std::mem::replace(&mut self.next, next);
        self.previous = std::mem::replace(&mut self.current, current);

        if !self.next.is_error() {
            return;
        }

        if self.current.is_error() {
            self.suppressed += 1;
            tracing::trace!(
                line = self.next.span.line,
                column = self.next.span.column,
                message = %self.next.lexeme,
                "suppressed follow-on lexical error"
            );
            return;
        }

        self.reported += 1;
        self.reporter.report(&self.next);
    }

    pub fn previous(&self) -> &Token<'src> {
        &self.previous
    }

    pub fn current(&self) -> &Token<'src> {
        &self.current
    }

    pub fn peek(&self) -> &Token<'src> {
        &self.next
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Number of diagnostics handed to the reporter.
    pub fn reported(&self) -> usize {
        self.reported
    }

    /// Number of error tokens swallowed because they followed another error.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::SystemReallocator;
    use crate::diagnostic::Diagnostic;
    use crate::line_index::LineIndex;
    use pretty_assertions::assert_eq;

    /// Helper: drain a stream over `source`, returning reported messages
    /// and the number of suppressed errors.
    fn drain(source: &str) -> (Vec<(String, usize, usize)>, usize) {
        let lines = LineIndex::build(source, &SystemReallocator).unwrap();
        let mut reported = Vec::new();
        let mut sink =
            |d: &Diagnostic<'_>| reported.push((d.message.to_string(), d.line, d.column));

        let suppressed = {
            let reporter = Reporter::new("main", &lines, Some(&mut sink));
            let mut stream = TokenStream::new(source, reporter);
            while !stream.is_at_end() {
                stream.advance();
            }
            stream.suppressed()
        };
        (reported, suppressed)
    }

    #[test]
    fn test_window_shifts() {
        let lines = LineIndex::build("a b c", &SystemReallocator).unwrap();
        let mut stream = TokenStream::new("a b c", Reporter::new("main", &lines, None));
        assert_eq!(stream.current().lexeme, "a");
        assert_eq!(stream.peek().lexeme, "b");

        stream.advance();
        assert_eq!(stream.previous().lexeme, "a");
        assert_eq!(stream.current().lexeme, "b");
        assert_eq!(stream.peek().lexeme, "c");

        stream.advance();
        stream.advance();
        assert!(stream.is_at_end());
    }

    #[test]
    fn test_adjacent_errors_report_once() {
        let (reported, suppressed) = drain("@@");
        assert_eq!(
            reported,
            vec![("Unexpected character '@'!".to_string(), 1, 1)]
        );
        assert_eq!(suppressed, 1);
    }

    #[test]
    fn test_long_error_run_reports_once() {
        let (reported, suppressed) = drain("x = @`@ + 1");
        assert_eq!(reported.len(), 1);
        assert_eq!(suppressed, 2);
    }

    #[test]
    fn test_separated_errors_each_reported() {
        let (reported, suppressed) = drain("@ x\n`");
        assert_eq!(
            reported,
            vec![
                ("Unexpected character '@'!".to_string(), 1, 1),
                ("Unexpected character '`'!".to_string(), 2, 1),
            ]
        );
        assert_eq!(suppressed, 0);
    }

    #[test]
    fn test_error_as_first_token_is_reported() {
        let (reported, _) = drain("1e + 2");
        assert_eq!(
            reported,
            vec![("Unterminated scientific notation!".to_string(), 1, 1)]
        );
    }

    #[test]
    fn test_error_counts() {
        let lines = LineIndex::build("@@ x @", &SystemReallocator).unwrap();
        let mut stream = TokenStream::new("@@ x @", Reporter::new("main", &lines, None));
        while !stream.is_at_end() {
            stream.advance();
        }
        assert_eq!(stream.reported(), 2);
        assert_eq!(stream.suppressed(), 1);
    }
}
