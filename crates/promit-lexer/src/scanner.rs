use std::iter::FusedIterator;

use crate::keywords;
use crate::token::{Span, Token, TokenKind};
use crate::LexError;

/// Promit source scanner.
///
/// A pull-based tokenizer: every call to [`Scanner::next_token`] skips
/// whitespace and comments, then produces exactly one token. Once the
/// source is exhausted it keeps returning `Eof` tokens; scanning the same
/// text again needs a fresh scanner (or [`Scanner::reset`]).
///
/// - Byte cursor over the borrowed source, no allocation on the hot path
/// - Lexemes borrow the source, so it must outlive every token
/// - Line counter advances on every newline, including those inside
///   strings and block comments
pub struct Scanner<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    line: usize,
    line_start: usize,
    start_line: usize,
    start_column: usize,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner positioned at the start of `source`, line 1.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            line_start: 0,
            start_line: 1,
            start_column: 1,
            finished: false,
        }
    }

    /// Restart scanning from the beginning of `source`.
    pub fn reset(&mut self, source: &'src str) {
        *self = Self::new(source);
    }

    /// Tokenize the entire source, up to and including the first `Eof`.
    pub fn tokenize(source: &'src str) -> Vec<Token<'src>> {
        Scanner::new(source).collect()
    }

    /// The line the cursor is currently on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        if let Err(error) = self.skip_trivia() {
            return self.error_token(error);
        }
        self.begin_token();

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let c = self.advance();

        let kind = match c {
            b'0'..=b'9' => return self.scan_number(c),
            b'"' | b'\'' => return self.scan_string(c),
            c if is_identifier_start(c) => return self.scan_identifier(),

            // Braces
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b'<' => {
                if self.eat(b'=') {
                    TokenKind::LeftAngleEqual
                } else if self.eat(b'<') {
                    TokenKind::LeftAngleAngle
                } else {
                    TokenKind::LeftAngle
                }
            }
            b'>' => {
                if self.eat(b'=') {
                    TokenKind::RightAngleEqual
                } else if self.eat(b'>') {
                    TokenKind::RightAngleAngle
                } else {
                    TokenKind::RightAngle
                }
            }

            // Operators
            b'+' => {
                if self.eat(b'+') {
                    TokenKind::PlusPlus
                } else if self.eat(b'=') {
                    TokenKind::PlusEqual
                } else {
                    TokenKind::Plus
                }
            }
            b'-' => {
                if self.eat(b'-') {
                    TokenKind::MinusMinus
                } else if self.eat(b'=') {
                    TokenKind::MinusEqual
                } else if self.eat(b'>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            b'!' => {
                if self.eat(b'=') {
                    TokenKind::BangEqual
                } else if self.eat(b'&') {
                    if self.eat(b'=') {
                        TokenKind::BangAmpersandEqual
                    } else {
                        TokenKind::BangAmpersand
                    }
                } else if self.eat(b'|') {
                    if self.eat(b'=') {
                        TokenKind::BangPipeEqual
                    } else {
                        TokenKind::BangPipe
                    }
                } else {
                    TokenKind::Bang
                }
            }
            b'/' => self.pick(b'=', TokenKind::SlashEqual, TokenKind::Slash),
            b'*' => self.pick(b'=', TokenKind::AsteriskEqual, TokenKind::Asterisk),
            b'%' => self.pick(b'=', TokenKind::PercentEqual, TokenKind::Percent),
            b'&' => {
                if self.eat(b'&') {
                    TokenKind::AmpersandAmpersand
                } else if self.eat(b'=') {
                    TokenKind::AmpersandEqual
                } else {
                    TokenKind::Ampersand
                }
            }
            b'|' => {
                if self.eat(b'|') {
                    TokenKind::PipePipe
                } else if self.eat(b'=') {
                    TokenKind::PipeEqual
                } else {
                    TokenKind::Pipe
                }
            }
            b'^' => self.pick(b'=', TokenKind::CaretEqual, TokenKind::Caret),
            b'~' => TokenKind::Tilde,
            b'\\' => TokenKind::Backslash,

            // Punctuation
            b'.' => TokenKind::Period,
            b'=' => self.pick(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'?' => TokenKind::Question,
            b';' => TokenKind::Semicolon,
            b':' => self.pick(b':', TokenKind::ColonColon, TokenKind::Colon),
            b',' => TokenKind::Comma,

            _ => return self.unexpected_character(),
        };

        self.make_token(kind)
    }

    // --- Trivia ---

    /// Skip whitespace, line comments (`//` and `#`) and block comments.
    ///
    /// An unterminated block comment is reported with the token start set
    /// to the comment's opening `/*`.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                b' ' | b'\t' | b'\r' => {
                    self.advance();
                }
                b'\n' => self.newline(),
                b'#' => self.skip_line_comment(),
                b'/' if self.peek_next() == b'/' => self.skip_line_comment(),
                b'/' if self.peek_next() == b'*' => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != b'\n' {
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        self.begin_token();
        self.advance_n(2); // consume `/*`

        loop {
            if self.is_at_end() {
                return Err(LexError::UnterminatedComment);
            }
            match self.peek() {
                b'*' if self.peek_next() == b'/' => {
                    self.advance_n(2);
                    return Ok(());
                }
                b'\n' => self.newline(),
                _ => {
                    self.advance();
                }
            }
        }
    }

    // --- Scanners ---

    /// Scan an identifier and classify it against the keyword table.
    fn scan_identifier(&mut self) -> Token<'src> {
        self.eat_while(is_identifier_char);
        let kind = keywords::keyword_or_ident(self.lexeme());
        self.make_token(kind)
    }

    /// Scan a decimal, hexadecimal (`0x`) or binary (`0b`) number.
    fn scan_number(&mut self, first: u8) -> Token<'src> {
        if first == b'0' {
            match self.peek() {
                b'x' | b'X' => {
                    self.advance();
                    return self.scan_radix_number(16, "0x");
                }
                b'b' | b'B' => {
                    self.advance();
                    return self.scan_radix_number(2, "0b");
                }
                _ => {}
            }
        }

        self.eat_while(|c| c.is_ascii_digit());

        // A period only starts a fraction when a digit follows it.
        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance();
            self.eat_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek(), b'e' | b'E') {
            self.advance();
            if matches!(self.peek(), b'+' | b'-') {
                self.advance();
            }
            if !self.peek().is_ascii_digit() {
                return self.error_token(LexError::UnterminatedScientificNotation);
            }
            self.eat_while(|c| c.is_ascii_digit());
        }

        match self.lexeme().parse::<f64>() {
            Ok(value) if value.is_finite() => self.number_token(value),
            _ => self.error_token(LexError::NumericOverflow),
        }
    }

    fn scan_radix_number(&mut self, radix: u32, prefix: &'static str) -> Token<'src> {
        let digits_start = self.current;
        self.eat_while(|c| char::from(c).is_digit(radix));
        let digits = &self.source[digits_start..self.current];

        if digits.is_empty() {
            return self.error_token(LexError::MissingDigits { prefix });
        }

        match u64::from_str_radix(digits, radix) {
            Ok(value) => self.number_token(value as f64),
            Err(_) => self.error_token(LexError::NumericOverflow),
        }
    }

    /// Scan a string literal delimited by `quote`. Raw newlines are part of
    /// the literal. The token runs from the opening quote up to, but not
    /// including, the closing one.
    fn scan_string(&mut self, quote: u8) -> Token<'src> {
        while !self.is_at_end() && self.peek() != quote {
            if self.peek() == b'\n' {
                self.newline();
            } else {
                self.advance();
            }
        }

        if self.is_at_end() {
            return self.error_token(LexError::UnterminatedString);
        }

        let token = self.make_token(TokenKind::String);
        self.advance(); // closing quote
        token
    }

    /// Consume the whole character at the token start and report it.
    fn unexpected_character(&mut self) -> Token<'src> {
        let ch = self.source[self.start..].chars().next().unwrap_or('\0');
        self.current = self.start + ch.len_utf8();
        self.error_token(LexError::UnexpectedCharacter(ch))
    }

    // --- Helpers ---

    fn begin_token(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.start - self.line_start + 1;
    }

    fn span(&self) -> Span {
        Span::new(self.start, self.current, self.start_line, self.start_column)
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn make_token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.lexeme(), self.span())
    }

    fn number_token(&self, value: f64) -> Token<'src> {
        Token::number(self.lexeme(), value, self.span())
    }

    fn error_token(&self, error: LexError) -> Token<'src> {
        Token::error(error, self.span())
    }

    /// Consume `expected` and return `matched`, or return `otherwise`.
    fn pick(&mut self, expected: u8, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.eat(expected) {
            matched
        } else {
            otherwise
        }
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_at_end() && pred(self.peek()) {
            self.current += 1;
        }
    }

    fn newline(&mut self) {
        self.current += 1;
        self.line += 1;
        self.line_start = self.current;
    }

    fn peek(&self) -> u8 {
        self.byte_at(self.current)
    }

    fn peek_next(&self) -> u8 {
        self.byte_at(self.current + 1)
    }

    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(b'\0')
    }

    fn advance(&mut self) -> u8 {
        let c = self.peek();
        if !self.is_at_end() {
            self.current += 1;
        }
        c
    }

    fn advance_n(&mut self, n: usize) {
        self.current = (self.current + n).min(self.source.len());
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'$'
}

fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$'
}
