//! Structural model produced by a parse pass.
//!
//! Every collection here is rebuilt from scratch on each pass; the only
//! state that survives an edit is the fold expand/collapse flag, which is
//! re-attached to the fresh entities by identity matching (see
//! [`GrammarModel::assign_persistent_state`]).

pub mod action;
pub mod block;
pub mod group;
pub mod name;
pub mod reference;
pub mod rule;

pub use action::Action;
pub use block::GrammarBlock;
pub use group::{GroupMarker, RuleGroup};
pub use name::{GrammarKind, GrammarName};
pub use reference::Reference;
pub use rule::Rule;

use crate::grammar::token::TokenClass;
use serde::Serialize;

/// A non-fatal condition noticed during a parse pass.
///
/// The parser never fails outright; internal invariant violations are
/// recorded here for the integration layer to surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    /// Token index the condition was noticed at, when known.
    pub token: Option<usize>,
}

/// The full output of one parse pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GrammarModel {
    /// Grammar name and kind; at most one, the last header wins.
    pub name: Option<GrammarName>,
    /// Rules in source order.
    pub rules: Vec<Rule>,
    /// Named blocks (`options {}`, `tokens {}`, `@header {}`, ...).
    pub blocks: Vec<GrammarBlock>,
    /// Embedded `{ ... }` actions, in source order across all rules.
    pub actions: Vec<Action>,
    /// Cross-rule identifier references.
    pub references: Vec<Reference>,
    /// Visual rule-group markers.
    pub groups: Vec<RuleGroup>,
    /// Token indices retyped as declarations (rule names, declared tokens).
    pub decls: Vec<usize>,
    /// Per-token semantic classification, aligned with the token stream.
    pub classes: Vec<Option<TokenClass>>,
    /// Non-fatal conditions noticed during the pass.
    pub diagnostics: Vec<Diagnostic>,
}

impl GrammarModel {
    /// Classification of token `index`, if the pass assigned one.
    pub fn class_of(&self, index: usize) -> Option<TokenClass> {
        self.classes.get(index).copied().flatten()
    }

    /// The rule whose span contains token `index`, if any.
    pub fn rule_at_token(&self, index: usize) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|r| index >= r.start_token && index <= r.end_token)
    }

    /// The action whose token range contains token `index`, if any.
    pub fn action_at_token(&self, index: usize) -> Option<&Action> {
        self.actions
            .iter()
            .find(|a| index >= a.start_token && index <= a.end_token)
    }

    /// The references recorded while parsing `rule`, as a slice.
    pub fn references_of(&self, rule: &Rule) -> &[Reference] {
        match rule.references {
            Some((first, last)) => &self.references[first..=last],
            None => &[],
        }
    }

    /// Carry fold expand/collapse state over from the previous pass.
    ///
    /// Actions match by their content identity (owner rule name, literal
    /// text, ordinal), which stays stable while unrelated parts of the file
    /// are edited. Rules match by name.
    pub fn assign_persistent_state(&mut self, previous: &GrammarModel) {
        for action in &mut self.actions {
            let expanded = previous
                .actions
                .iter()
                .find(|a| a.identity() == action.identity())
                .map(|a| a.expanded);
            if let Some(expanded) = expanded {
                action.expanded = expanded;
            }
        }
        for rule in &mut self.rules {
            let expanded = previous
                .rules
                .iter()
                .find(|r| r.name == rule.name)
                .map(|r| r.expanded);
            if let Some(expanded) = expanded {
                rule.expanded = expanded;
            }
        }
    }
}
