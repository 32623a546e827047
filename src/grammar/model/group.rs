//! Visual rule groups delimited by `// $<` and `// $>` marker comments.

use serde::Serialize;

/// Which end of a group a marker comment opens or closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GroupMarker {
    /// `// $<name` (an optional trailing `;` is stripped from the name).
    Begin { name: String },
    /// `// $>`
    End,
}

/// A group marker, anchored at the rule list as it stood when the marker
/// was seen. Groups are purely visual (folding and outline organization);
/// they carry no grammar semantics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleGroup {
    pub marker: GroupMarker,
    /// Index of the last rule seen before the marker; `None` when the
    /// marker precedes every rule.
    pub anchor: Option<usize>,
    /// Token index of the marker comment.
    pub token: usize,
}

impl RuleGroup {
    /// Index of the first rule belonging to a group opened here.
    pub fn first_rule(&self) -> usize {
        match self.anchor {
            Some(i) => i + 1,
            None => 0,
        }
    }
}
