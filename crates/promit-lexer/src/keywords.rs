//! Reserved words of the Promit language.
//!
//! Classification happens after the full identifier span is known and
//! only on an exact match: `class` is a keyword, `classroom` and `clas`
//! are identifiers.

use crate::token::TokenKind;

/// Every reserved word, in declaration order of [`TokenKind`].
pub const KEYWORDS: &[&str] = &[
    "take",
    "final",
    "class",
    "getter",
    "setter",
    "public",
    "private",
    "protected",
    "static",
    "self",
    "parent",
    "instof",
    "catalog",
    "fiber",
    "fn",
    "return",
    "yield",
    "match",
    "next",
    "case",
    "previous",
    "exception",
    "break",
    "for",
    "while",
    "do",
    "continue",
    "enum",
    "true",
    "false",
    "nan",
    "infinity",
    "null",
];

/// Look up the reserved kind for an identifier, if it is a keyword.
pub fn lookup(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "take" => TokenKind::Take,
        "final" => TokenKind::Final,
        "class" => TokenKind::Class,
        "getter" => TokenKind::Getter,
        "setter" => TokenKind::Setter,
        "public" => TokenKind::Public,
        "private" => TokenKind::Private,
        "protected" => TokenKind::Protected,
        "static" => TokenKind::Static,
        "self" => TokenKind::SelfKw,
        "parent" => TokenKind::Parent,
        "instof" => TokenKind::Instof,
        "catalog" => TokenKind::Catalog,
        "fiber" => TokenKind::Fiber,
        "fn" => TokenKind::Fn,
        "return" => TokenKind::Return,
        "yield" => TokenKind::Yield,
        "match" => TokenKind::Match,
        "next" => TokenKind::Next,
        "case" => TokenKind::Case,
        "previous" => TokenKind::Previous,
        "exception" => TokenKind::Exception,
        "break" => TokenKind::Break,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "continue" => TokenKind::Continue,
        "enum" => TokenKind::Enum,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "nan" => TokenKind::Nan,
        "infinity" => TokenKind::Infinity,
        "null" => TokenKind::Null,
        _ => return None,
    };
    Some(kind)
}

/// Classify an identifier span as a keyword or a plain identifier.
pub fn keyword_or_ident(ident: &str) -> TokenKind {
    lookup(ident).unwrap_or(TokenKind::Identifier)
}

pub fn is_keyword(ident: &str) -> bool {
    lookup(ident).is_some()
}
