use std::borrow::Cow;

use crate::LexError;

/// A region of source text, tracking line and column for error reporting.
///
/// `start` and `end` are byte offsets into the source. `line` is 1-based,
/// `column` is the 1-based byte column of `start` within its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token classification for Promit source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Braces
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    LeftAngle,
    RightAngle,

    // Operators
    Plus,
    Minus,
    Bang,
    Slash,
    Asterisk,
    Percent,
    Ampersand,
    Tilde,
    Caret,
    Pipe,
    Backslash,

    // Punctuation
    Period,
    Equal,
    Question,
    Semicolon,
    Colon,
    Comma,

    // Two-character operators
    EqualEqual,
    PipePipe,
    AmpersandAmpersand,
    LeftAngleAngle,
    RightAngleAngle,
    BangEqual,
    LeftAngleEqual,
    RightAngleEqual,
    BangAmpersand, // !& (nand)
    BangPipe,      // !| (nor)
    PlusPlus,
    MinusMinus,
    PlusEqual,
    MinusEqual,
    SlashEqual,
    AsteriskEqual,
    PercentEqual,
    PipeEqual,
    AmpersandEqual,
    CaretEqual,
    ColonColon,
    Arrow,

    // Three-character compound assignments
    BangAmpersandEqual, // x !&= y -> x = x nand y
    BangPipeEqual,      // x !|= y -> x = x nor y

    // Variables
    Take,
    Final,

    // Classes
    Class,
    Getter,
    Setter,
    Public,
    Private,
    Protected,
    Static,
    SelfKw,
    Parent,
    Instof,
    Catalog,

    // Fibers and functions
    Fiber,
    Fn,
    Return,
    Yield,

    // Pattern matching
    Match,
    Next,
    Case,
    Previous,
    Exception,

    // Loops
    Break,
    For,
    While,
    Do,
    Continue,
    Enum,

    // Literals
    Identifier,
    String,
    Number,
    True,
    False,
    Nan,
    Infinity,
    Null,

    /// Marks a string interpolation boundary. The scanner itself never
    /// produces it; clients splitting string contents do.
    Interpolation,

    Error,
    Eof,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Take
                | TokenKind::Final
                | TokenKind::Class
                | TokenKind::Getter
                | TokenKind::Setter
                | TokenKind::Public
                | TokenKind::Private
                | TokenKind::Protected
                | TokenKind::Static
                | TokenKind::SelfKw
                | TokenKind::Parent
                | TokenKind::Instof
                | TokenKind::Catalog
                | TokenKind::Fiber
                | TokenKind::Fn
                | TokenKind::Return
                | TokenKind::Yield
                | TokenKind::Match
                | TokenKind::Next
                | TokenKind::Case
                | TokenKind::Previous
                | TokenKind::Exception
                | TokenKind::Break
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Continue
                | TokenKind::Enum
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nan
                | TokenKind::Infinity
                | TokenKind::Null
        )
    }
}

/// The value carried by a token besides its lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Number(f64),
    Error(LexError),
}

/// A token produced by the Promit scanner.
///
/// The lexeme borrows from the scanned source for every token except
/// errors, whose lexeme is the owned diagnostic message.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: Cow<'src, str>,
    pub span: Span,
    pub value: TokenValue,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self {
            kind,
            lexeme: Cow::Borrowed(lexeme),
            span,
            value: TokenValue::None,
        }
    }

    pub fn number(lexeme: &'src str, value: f64, span: Span) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme: Cow::Borrowed(lexeme),
            span,
            value: TokenValue::Number(value),
        }
    }

    pub fn error(error: LexError, span: Span) -> Self {
        Self {
            kind: TokenKind::Error,
            lexeme: Cow::Owned(error.to_string()),
            span,
            value: TokenValue::Error(error),
        }
    }

    /// The line the token starts on.
    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The parsed value of a number token.
    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&LexError> {
        match &self.value {
            TokenValue::Error(e) => Some(e),
            _ => None,
        }
    }
}
