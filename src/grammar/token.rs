//! Core token types shared across the lexer, parser, and tooling.
//!
//! Tokens are immutable once produced by the lexer. The parser never
//! retypes them; it emits an explicit classification projection per pass
//! (see [`crate::grammar::model::GrammarModel::classes`]), which keeps
//! failed speculative matches from leaving partial annotations behind.

use serde::Serialize;
use std::ops::Range;

/// Raw lexical category of a token, assigned by the lexer and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RawKind {
    /// Plain identifier: rule names, references, labels, keywords.
    Identifier,
    /// An `@name` or `@section::name` block label, lexed as one token.
    AtLabel,
    /// Single-quoted literal, e.g. `'then'`.
    SingleQuoteString,
    /// Double-quoted literal.
    DoubleQuoteString,
    /// `//` comment running to end of line.
    SingleComment,
    /// `/* ... */` comment, possibly spanning several lines.
    ComplexComment,
    /// The rewrite arrow `->`.
    Rewrite,
    /// A run of digits.
    Number,
    /// Any other single character: punctuation, delimiters, operators.
    Char,
}

/// Semantic classification assigned to a token during a parse pass.
///
/// Classifications drive syntax highlighting and symbol indexing. They are
/// produced as `(token index, class)` assignments and projected into a
/// per-token table when the pass commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenClass {
    /// A rule name at its definition site, or a declared token identifier.
    Declaration,
    /// An identifier that refers to another rule or token.
    Reference,
    /// A rule-local label introduced by `x=` / `x+=` assignment syntax.
    Label,
    /// The name token of a named block (`options`, `tokens`, `@header`, ...).
    BlockLabel,
    /// An opening or closing delimiter of a block or action body.
    BlockLimit,
}

/// A single lexical token with its source span and line numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Lexical category.
    pub kind: RawKind,
    /// The exact source text of the token.
    pub text: String,
    /// Byte span within the source.
    pub span: Range<usize>,
    /// 0-based line the token starts on.
    pub start_line: usize,
    /// 0-based line the token ends on (differs for multi-line comments).
    pub end_line: usize,
}

impl Token {
    /// True for plain identifiers.
    pub fn is_identifier(&self) -> bool {
        self.kind == RawKind::Identifier
    }

    /// True for either comment kind.
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, RawKind::SingleComment | RawKind::ComplexComment)
    }
}
