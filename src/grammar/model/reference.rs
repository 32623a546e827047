//! Identifier occurrences that refer to other rules or tokens.

use serde::Serialize;

/// One identifier occurrence inside a rule body that resolves to another
/// rule or token (never to a rule-local label).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reference {
    /// Index of the owning rule in the pass's rule list.
    pub rule_index: usize,
    /// Name of the owning rule.
    pub rule_name: String,
    /// Token index of the occurrence.
    pub token: usize,
    /// The referenced name.
    pub name: String,
}
