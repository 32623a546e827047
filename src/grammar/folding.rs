//! Fold region extraction for editor folding.
//!
//! Rules, actions, and named blocks each fold on their own line range.
//! Group marker comments fold the run of rules between a begin marker and
//! its matching end marker. Markers pair up like brackets: a stack of open
//! begins, closed innermost-first.

use crate::grammar::model::{Action, GrammarBlock, GrammarModel, GroupMarker, Rule};
use serde::Serialize;

/// Anything the editor can collapse to a one-line placeholder.
pub trait FoldingEntity {
    fn fold_start_line(&self) -> usize;
    fn fold_end_line(&self) -> usize;
    fn placeholder(&self) -> String;
    fn is_expanded(&self) -> bool;
    fn set_expanded(&mut self, expanded: bool);

    /// Single-line entities have nothing to collapse.
    fn can_fold(&self) -> bool {
        self.fold_end_line() > self.fold_start_line()
    }
}

impl FoldingEntity for Rule {
    fn fold_start_line(&self) -> usize {
        self.start_line
    }

    fn fold_end_line(&self) -> usize {
        self.end_line
    }

    fn placeholder(&self) -> String {
        format!("{} : ... ;", self.name)
    }

    fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}

impl FoldingEntity for Action {
    fn fold_start_line(&self) -> usize {
        self.start_line
    }

    fn fold_end_line(&self) -> usize {
        self.end_line
    }

    fn placeholder(&self) -> String {
        "{ ... }".to_string()
    }

    fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}

impl FoldingEntity for GrammarBlock {
    fn fold_start_line(&self) -> usize {
        self.start_line
    }

    fn fold_end_line(&self) -> usize {
        self.end_line
    }

    fn placeholder(&self) -> String {
        format!("{} {{ ... }}", self.name)
    }

    fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FoldKind {
    Rule { index: usize },
    Action { ordinal: usize },
    Block { index: usize },
    Group { name: String },
}

/// One collapsible line range, ready to hand to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldRegion {
    pub kind: FoldKind,
    pub start_line: usize,
    pub end_line: usize,
    pub placeholder: String,
    pub expanded: bool,
}

impl FoldRegion {
    fn of(entity: &dyn FoldingEntity, kind: FoldKind) -> Self {
        FoldRegion {
            kind,
            start_line: entity.fold_start_line(),
            end_line: entity.fold_end_line(),
            placeholder: entity.placeholder(),
            expanded: entity.is_expanded(),
        }
    }
}

/// Collect every collapsible region in the model: multi-line rules,
/// actions, named blocks, and paired rule groups.
pub fn fold_regions(model: &GrammarModel) -> Vec<FoldRegion> {
    let mut regions = Vec::new();

    for (index, block) in model.blocks.iter().enumerate() {
        if block.can_fold() {
            regions.push(FoldRegion::of(block, FoldKind::Block { index }));
        }
    }
    for (index, rule) in model.rules.iter().enumerate() {
        if rule.can_fold() {
            regions.push(FoldRegion::of(rule, FoldKind::Rule { index }));
        }
    }
    for action in &model.actions {
        if action.can_fold() {
            regions.push(FoldRegion::of(
                action,
                FoldKind::Action {
                    ordinal: action.ordinal,
                },
            ));
        }
    }
    for (first, last, name) in paired_groups(model) {
        let start_line = model.rules[first].start_line;
        let end_line = model.rules[last].end_line;
        if end_line > start_line {
            regions.push(FoldRegion {
                kind: FoldKind::Group { name },
                start_line,
                end_line,
                placeholder: "...".to_string(),
                expanded: true,
            });
        }
    }

    regions.sort_by_key(|r| (r.start_line, r.end_line));
    regions
}

/// Pair begin and end markers bracket-style, yielding the inclusive rule
/// index range each group covers. Unbalanced markers are dropped.
fn paired_groups(model: &GrammarModel) -> Vec<(usize, usize, String)> {
    let mut open: Vec<(&str, usize)> = Vec::new();
    let mut pairs = Vec::new();
    for group in &model.groups {
        match &group.marker {
            GroupMarker::Begin { name } => open.push((name, group.first_rule())),
            GroupMarker::End => {
                if let (Some((name, first)), Some(last)) = (open.pop(), group.anchor) {
                    if first <= last && last < model.rules.len() {
                        pairs.push((first, last, name.to_string()));
                    }
                }
            }
        }
    }
    pairs
}
