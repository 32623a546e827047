//! A named grammar production.

use serde::Serialize;
use std::ops::Range;

/// One rule, spanning its modifier/name through its terminating `;`
/// (including any trailing `exception`/`catch` group).
///
/// Equality compares spans, not names: names are not unique across
/// malformed input, but a span identifies one occurrence.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    /// Rule name.
    pub name: String,
    /// Byte span of the whole definition.
    pub span: Range<usize>,
    /// Index of the first token of the definition.
    pub start_token: usize,
    /// Index of the last token of the definition.
    pub end_token: usize,
    /// 0-based start line.
    pub start_line: usize,
    /// 0-based end line.
    pub end_line: usize,
    /// Inclusive `[first, last]` range into the pass's reference list, or
    /// `None` if the rule body produced no references. Only valid against
    /// the reference list of the same pass.
    pub references: Option<(usize, usize)>,
    /// True only when the terminating `;` was reached during the match.
    /// Consumers must not treat incomplete rules as valid definitions.
    pub completed: bool,
    /// Fold state; persisted across passes by rule name.
    pub expanded: bool,
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span
    }
}
