//! Grammar header: `grammar [kind] Name ;`

use serde::Serialize;
use std::ops::Range;

/// The kind keyword that may follow `grammar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrammarKind {
    Lexer,
    Parser,
    Tree,
    Combined,
}

impl GrammarKind {
    /// Parse a known grammar kind keyword.
    pub fn parse(text: &str) -> Option<GrammarKind> {
        match text {
            "lexer" => Some(GrammarKind::Lexer),
            "parser" => Some(GrammarKind::Parser),
            "tree" => Some(GrammarKind::Tree),
            "combined" => Some(GrammarKind::Combined),
            _ => None,
        }
    }
}

/// The grammar name record. At most one per file; re-parses overwrite it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarName {
    /// The grammar identifier.
    pub name: String,
    /// Optional kind (`lexer`, `parser`, ...).
    pub kind: Option<GrammarKind>,
    /// Byte span of the whole header, `grammar` through `;`.
    pub span: Range<usize>,
    /// Token index of the name identifier.
    pub name_token: usize,
}
