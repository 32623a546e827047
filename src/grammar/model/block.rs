//! Named curly-delimited regions: `options {}`, `tokens {}`, `@header {}`.

use crate::grammar::vocab::TOKENS_BLOCK_NAME;
use serde::Serialize;
use std::ops::Range;

/// A named `{ ... }` region carrying auxiliary grammar metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarBlock {
    /// Block name, lower-cased at match time.
    pub name: String,
    /// Byte span from the name through the closing brace.
    pub span: Range<usize>,
    /// Index of the first token (the name).
    pub start_token: usize,
    /// Index of the closing brace token.
    pub end_token: usize,
    /// 0-based start line.
    pub start_line: usize,
    /// 0-based end line.
    pub end_line: usize,
    /// For `tokens` blocks: token indices of the declared identifiers.
    pub declared_tokens: Vec<usize>,
    /// Fold state.
    pub expanded: bool,
}

impl GrammarBlock {
    /// True for the `tokens {}` block, whose entries declare token names.
    pub fn is_token_block(&self) -> bool {
        self.name == TOKENS_BLOCK_NAME
    }
}
