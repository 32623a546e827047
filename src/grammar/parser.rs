//! Backtracking, token-level parser for ANTLR grammar source.
//!
//! The driver walks the token stream once, attempting structural matchers
//! in a fixed priority order at each position: grammar header, scope
//! clause, named block, rule, then group marker comments. The first
//! matcher to commit wins; when none do, the driver advances one token and
//! tries again. Scope clauses must be attempted before named blocks, since
//! both start with an identifier and `scope` would otherwise be taken as a
//! block name.
//!
//! Every matcher is speculative. A checkpoint covers the cursor position
//! and every speculative write (classification assignments, actions,
//! references, declarations, diagnostics), so a failed match rewinds to a
//! clean slate and can never leave partial annotations behind. There is no
//! hard-failure mode: malformed input simply matches nothing and is left
//! unstructured until the user finishes typing it.

mod labels;
mod matchers;

pub use labels::LabelScope;

use crate::grammar::cursor::TokenCursor;
use crate::grammar::model::{
    Action, Diagnostic, GrammarBlock, GrammarModel, GrammarName, Reference, Rule, RuleGroup,
};
use crate::grammar::token::{RawKind, Token, TokenClass};
use std::ops::Range;

/// Snapshot of every speculative output buffer, taken at `mark()` and
/// truncated back to on `rewind()`.
struct Checkpoint {
    tags: usize,
    actions: usize,
    references: usize,
    decls: usize,
    diagnostics: usize,
}

/// One parse pass over a token stream.
///
/// The parser borrows the tokens and the source text; it owns the output
/// collections until [`GrammarParser::parse`] hands them over as a
/// [`GrammarModel`]. Single-threaded and non-reentrant: one pass runs to
/// completion before the next begins.
pub struct GrammarParser<'t> {
    source: &'t str,
    tokens: &'t [Token],
    cursor: TokenCursor<'t>,
    name: Option<GrammarName>,
    rules: Vec<Rule>,
    blocks: Vec<GrammarBlock>,
    actions: Vec<Action>,
    references: Vec<Reference>,
    groups: Vec<RuleGroup>,
    decls: Vec<usize>,
    tags: Vec<(usize, TokenClass)>,
    diagnostics: Vec<Diagnostic>,
    checkpoints: Vec<Checkpoint>,
}

impl<'t> GrammarParser<'t> {
    pub fn new(source: &'t str, tokens: &'t [Token]) -> Self {
        GrammarParser {
            source,
            tokens,
            cursor: TokenCursor::new(tokens),
            name: None,
            rules: Vec::new(),
            blocks: Vec::new(),
            actions: Vec::new(),
            references: Vec::new(),
            groups: Vec::new(),
            decls: Vec::new(),
            tags: Vec::new(),
            diagnostics: Vec::new(),
            checkpoints: Vec::new(),
        }
    }

    /// Run the pass to completion and return the structural model.
    pub fn parse(mut self) -> GrammarModel {
        while !self.cursor.at_end() {
            if self.is_kind(0, RawKind::ComplexComment) {
                self.cursor.advance();
                continue;
            }

            if self.try_match_name()
                || self.try_match_scope()
                || self.try_match_block()
                || self.try_match_rule()
            {
                self.cursor.advance();
                continue;
            }

            if self.is_kind(0, RawKind::SingleComment) {
                if let Some(group) = self.match_rule_group() {
                    self.groups.push(group);
                }
            }

            self.cursor.advance();
        }

        self.finish()
    }

    fn try_match_name(&mut self) -> bool {
        self.mark();
        match self.match_name() {
            Some(name) => {
                self.name = Some(name);
                self.commit();
                true
            }
            None => {
                self.rewind();
                false
            }
        }
    }

    fn try_match_scope(&mut self) -> bool {
        self.mark();
        if self.match_scope() {
            self.commit();
            true
        } else {
            self.rewind();
            false
        }
    }

    fn try_match_block(&mut self) -> bool {
        self.mark();
        match self.match_block() {
            Some(block) => {
                self.blocks.push(block);
                self.commit();
                true
            }
            None => {
                self.rewind();
                false
            }
        }
    }

    fn try_match_rule(&mut self) -> bool {
        self.mark();
        match self.match_rule() {
            Some(rule) => {
                self.rules.push(rule);
                self.commit();
                true
            }
            None => {
                self.rewind();
                false
            }
        }
    }

    fn finish(self) -> GrammarModel {
        let mut classes = vec![None; self.tokens.len()];
        for (index, class) in self.tags {
            classes[index] = Some(class);
        }
        GrammarModel {
            name: self.name,
            rules: self.rules,
            blocks: self.blocks,
            actions: self.actions,
            references: self.references,
            groups: self.groups,
            decls: self.decls,
            classes,
            diagnostics: self.diagnostics,
        }
    }

    // ---- checkpointing -------------------------------------------------

    fn mark(&mut self) {
        self.cursor.mark();
        self.checkpoints.push(Checkpoint {
            tags: self.tags.len(),
            actions: self.actions.len(),
            references: self.references.len(),
            decls: self.decls.len(),
            diagnostics: self.diagnostics.len(),
        });
    }

    fn commit(&mut self) {
        self.cursor.commit();
        self.checkpoints.pop();
    }

    fn rewind(&mut self) {
        self.cursor.rewind();
        if let Some(cp) = self.checkpoints.pop() {
            self.tags.truncate(cp.tags);
            self.actions.truncate(cp.actions);
            self.references.truncate(cp.references);
            self.decls.truncate(cp.decls);
            self.diagnostics.truncate(cp.diagnostics);
        }
    }

    // ---- lookahead helpers ---------------------------------------------

    fn t(&self, offset: usize) -> Option<&'t Token> {
        self.cursor.current_at(offset)
    }

    fn text_at(&self, offset: usize) -> Option<&'t str> {
        self.t(offset).map(|t| t.text.as_str())
    }

    fn is_kind(&self, offset: usize, kind: RawKind) -> bool {
        self.t(offset).map(|t| t.kind == kind).unwrap_or(false)
    }

    fn is_id(&self, offset: usize) -> bool {
        self.is_kind(offset, RawKind::Identifier)
    }

    fn is_id_text(&self, offset: usize, text: &str) -> bool {
        self.is_id(offset) && self.text_at(offset) == Some(text)
    }

    /// Compare the token text at `offset`, regardless of kind.
    fn is_chr(&self, offset: usize, text: &str) -> bool {
        self.text_at(offset) == Some(text)
    }

    fn is_semi(&self, offset: usize) -> bool {
        self.is_chr(offset, ";")
    }

    fn is_colon(&self, offset: usize) -> bool {
        self.is_chr(offset, ":")
    }

    fn is_lparen(&self, offset: usize) -> bool {
        self.is_chr(offset, "(")
    }

    fn is_rparen(&self, offset: usize) -> bool {
        self.is_chr(offset, ")")
    }

    fn is_open_block(&self, offset: usize) -> bool {
        self.is_chr(offset, "{")
    }

    // ---- output helpers ------------------------------------------------

    /// Record a speculative classification for token `index`.
    fn tag(&mut self, index: usize, class: TokenClass) {
        self.tags.push((index, class));
    }

    fn report(&mut self, message: impl Into<String>, token: Option<usize>) {
        self.diagnostics.push(Diagnostic {
            message: message.into(),
            token,
        });
    }

    /// Byte span covering tokens `start..=end`.
    fn span_of(&self, start: usize, end: usize) -> Range<usize> {
        let lo = self.tokens[start].span.start;
        let hi = self.tokens[end].span.end;
        lo..hi
    }
}
