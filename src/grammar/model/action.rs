//! Embedded `{ ... }` action bodies attached to rules.

use serde::Serialize;
use std::ops::Range;

/// One action body inside a rule.
///
/// Actions are recreated on every parse pass, so fold state is carried
/// across passes by a content-derived identity instead of object identity:
/// the `(owner rule name, literal text, ordinal)` triple stays stable while
/// unrelated parts of the file are edited, even though spans shift.
#[derive(Debug, Clone, Serialize)]
pub struct Action {
    /// Name of the owning rule.
    pub rule_name: String,
    /// Index of the owning rule in the pass's rule list.
    pub rule_index: usize,
    /// Byte span from the opening brace through the closing brace.
    pub span: Range<usize>,
    /// Index of the opening brace token.
    pub start_token: usize,
    /// Index of the closing brace token.
    pub end_token: usize,
    /// 0-based start line.
    pub start_line: usize,
    /// 0-based end line.
    pub end_line: usize,
    /// The literal action text, braces included.
    pub text: String,
    /// Ordinal among all actions of the pass, in source order.
    pub ordinal: usize,
    /// Fold state; defaults to expanded.
    pub expanded: bool,
}

impl Action {
    /// The persistent identity key.
    pub fn identity(&self) -> (&str, &str, usize) {
        (&self.rule_name, &self.text, self.ordinal)
    }

    /// True if the byte `index` falls inside this action.
    pub fn contains_index(&self, index: usize) -> bool {
        index >= self.span.start && index < self.span.end
    }
}

/// Two actions are equal iff their identity keys match.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}
