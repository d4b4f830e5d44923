//! Promit Lexer
//!
//! Tokenizes Promit source text on demand, one token per call.
//! Handles maximal-munch operators, keywords, decimal/hex/binary numbers,
//! multi-line strings with either quote, and line/block comments.
//!
//! Malformed input never aborts scanning: every lexical failure comes back
//! as a token of kind [`TokenKind::Error`] whose lexeme is the message.
//!
//! # Example
//!
//! ```
//! use promit_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("take x = 0xFF;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Take);
//! assert_eq!(scanner.next_token().lexeme, "x");
//! assert_eq!(scanner.next_token().kind, TokenKind::Equal);
//! assert_eq!(scanner.next_token().as_number(), Some(255.0));
//! ```

pub mod keywords;
pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind, TokenValue};

/// A lexical failure, carried by an error token.
///
/// The `Display` text is what the error token exposes as its lexeme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Unexpected character '{0}'!")]
    UnexpectedCharacter(char),
    #[error("Unterminated string!")]
    UnterminatedString,
    #[error("Unterminated scientific notation!")]
    UnterminatedScientificNotation,
    #[error("Expected digits after numeric prefix '{prefix}'!")]
    MissingDigits { prefix: &'static str },
    #[error("Numeric literal overflow!")]
    NumericOverflow,
    #[error("Unterminated block comment!")]
    UnterminatedComment,
}
