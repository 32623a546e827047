//! Re-parse lifecycle around the parser.
//!
//! The engine owns the latest token stream and structural model, and runs
//! one full pass per edit. Passes are synchronous and must not interleave;
//! the owning editor serializes its re-parse-on-change calls. Fold state is
//! the only thing carried across passes, re-attached by identity matching.

use crate::grammar::lexer::tokenize;
use crate::grammar::model::GrammarModel;
use crate::grammar::parser::GrammarParser;
use crate::grammar::token::Token;

/// Incremental front end: feed it the full source after every edit.
#[derive(Debug, Default)]
pub struct SyntaxEngine {
    source: String,
    tokens: Vec<Token>,
    model: GrammarModel,
}

impl SyntaxEngine {
    pub fn new() -> Self {
        SyntaxEngine::default()
    }

    /// Tokenize and parse `source`, replacing the current model. Fold
    /// expand/collapse flags from the previous pass are carried over to
    /// matching entities.
    pub fn parse(&mut self, source: &str) -> &GrammarModel {
        let tokens = tokenize(source);
        let mut model = GrammarParser::new(source, &tokens).parse();
        model.assign_persistent_state(&self.model);

        self.source = source.to_string();
        self.tokens = tokens;
        self.model = model;
        &self.model
    }

    /// The model from the most recent pass.
    pub fn model(&self) -> &GrammarModel {
        &self.model
    }

    /// The token stream from the most recent pass.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The source text from the most recent pass.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Toggle the fold state of the action with the given ordinal.
    pub fn set_action_expanded(&mut self, ordinal: usize, expanded: bool) {
        if let Some(action) = self.model.actions.get_mut(ordinal) {
            action.expanded = expanded;
        }
    }

    /// Toggle the fold state of the rule with the given index.
    pub fn set_rule_expanded(&mut self, index: usize, expanded: bool) {
        if let Some(rule) = self.model.rules.get_mut(index) {
            rule.expanded = expanded;
        }
    }
}
