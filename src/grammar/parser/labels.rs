//! Rule-local label scope tracking.
//!
//! A stack of label-name sets. `begin` is called when the rule body enters
//! a parenthesized group and `end` when it leaves one, but `end` is
//! intentionally a no-op: labels stay visible for the rest of the rule once
//! declared. This gives whole-rule flat label visibility despite the
//! lexical bracketing, matching how ANTLR treats labels in practice. The
//! quirk is load-bearing; `tests::flat_label_visibility` pins it down.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct LabelScope {
    frames: Vec<HashSet<String>>,
}

impl LabelScope {
    pub fn new() -> Self {
        LabelScope::default()
    }

    /// Push a fresh frame on entering a parenthesized group.
    pub fn begin(&mut self) {
        self.frames.push(HashSet::new());
    }

    /// Leaving a group. Deliberately does not pop; see the module docs.
    pub fn end(&mut self) {}

    /// Add a label to the innermost frame. Returns false when no frame is
    /// open, which is an internal invariant violation the caller reports.
    #[must_use]
    pub fn declare(&mut self, label: &str) -> bool {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.insert(label.to_string());
                true
            }
            None => false,
        }
    }

    /// True if the label is declared in any frame on the stack.
    pub fn is_declared(&self, label: &str) -> bool {
        self.frames.iter().any(|frame| frame.contains(label))
    }
}
