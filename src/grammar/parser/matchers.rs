//! Structural matchers.
//!
//! Each matcher tries to recognize one construct starting at the current
//! cursor position, recording classification assignments and entities as it
//! goes. Matchers are free to consume tokens and write output
//! speculatively; the driver's checkpoint discards everything when a match
//! fails. Inner matcher calls (a scope clause inside a rule prelude, say)
//! are not individually checkpointed; a failure there cascades into the
//! enclosing match failing and rewinding the lot, which mirrors how the
//! constructs nest in the grammar language.

use super::{GrammarParser, LabelScope};
use crate::grammar::model::{
    Action, GrammarBlock, GrammarKind, GrammarName, GroupMarker, Reference, Rule, RuleGroup,
};
use crate::grammar::token::{RawKind, TokenClass};
use crate::grammar::vocab;

impl<'t> GrammarParser<'t> {
    /// Match the grammar header:
    ///
    /// `grammar lexer JavaLexer;`
    ///
    /// The kind keyword is optional; the name runs up to the terminating
    /// semicolon.
    pub(super) fn match_name(&mut self) -> Option<GrammarName> {
        if !self.is_id_text(0, "grammar") {
            return None;
        }
        let start = self.cursor.position();
        if !self.cursor.advance() {
            return None;
        }

        let mut kind = None;
        if let Some(text) = self.text_at(0) {
            if vocab::is_known_grammar_kind(text) {
                kind = GrammarKind::parse(text);
                if !self.cursor.advance() {
                    return None;
                }
            }
        }

        let name_token = self.cursor.position();
        let name = self.text_at(0)?.to_string();

        while self.cursor.advance() {
            if self.is_semi(0) {
                return Some(GrammarName {
                    name,
                    kind,
                    span: self.span_of(start, self.cursor.position()),
                    name_token,
                });
            }
        }
        None
    }

    /// Match a scope clause:
    ///
    /// `scope name? ( '{' ... '}' | ';' )`
    ///
    /// Recognition only; no entity is produced, but the label and brace
    /// tokens are classified when a body is present.
    pub(super) fn match_scope(&mut self) -> bool {
        if !self.is_id_text(0, "scope") {
            return false;
        }
        let start = self.cursor.position();
        if !self.cursor.advance() {
            return false;
        }

        if self.is_id(0) && !self.cursor.advance() {
            return false;
        }

        if self.is_open_block(0) {
            let begin = self.cursor.position();
            if !self.match_balanced("{", "}") {
                return false;
            }
            self.tag(begin, TokenClass::BlockLimit);
            self.tag(self.cursor.position(), TokenClass::BlockLimit);
            self.tag(start, TokenClass::BlockLabel);
            true
        } else {
            self.is_semi(0)
        }
    }

    /// Match a named block:
    ///
    /// `LABEL '{' ... '}'` where `LABEL` is an identifier or an `@name` /
    /// `@section::name` token.
    ///
    /// The block name is not validated against the known-name vocabulary;
    /// rule-scoped blocks carry arbitrary labels. For `tokens` blocks the
    /// declared identifiers are extracted and classified as declarations.
    pub(super) fn match_block(&mut self) -> Option<GrammarBlock> {
        let start = self.cursor.position();
        if !(self.is_id(0) || self.is_kind(0, RawKind::AtLabel)) {
            return None;
        }
        let name = self.text_at(0)?.to_lowercase();
        if !self.cursor.advance() {
            return None;
        }

        let begin = self.cursor.position();
        if !self.match_balanced("{", "}") {
            return None;
        }
        let end = self.cursor.position();
        self.tag(begin, TokenClass::BlockLimit);
        self.tag(end, TokenClass::BlockLimit);
        self.tag(start, TokenClass::BlockLabel);

        let mut block = GrammarBlock {
            name,
            span: self.span_of(start, end),
            start_token: start,
            end_token: end,
            start_line: self.tokens[start].start_line,
            end_line: self.tokens[end].end_line,
            declared_tokens: Vec::new(),
            expanded: true,
        };
        if block.is_token_block() {
            self.extract_declared_tokens(&mut block);
        }
        Some(block)
    }

    /// Declared token names sit in entry position inside a `tokens` block:
    /// right after the opening brace or after the `;` ending the previous
    /// entry. Comments between entries are transparent.
    fn extract_declared_tokens(&mut self, block: &mut GrammarBlock) {
        let tokens = self.tokens;
        let mut entry = true;
        for index in block.start_token + 2..block.end_token {
            let token = &tokens[index];
            if token.is_comment() {
                continue;
            }
            if token.text == ";" {
                entry = true;
            } else {
                if entry && token.kind == RawKind::Identifier {
                    self.tag(index, TokenClass::Declaration);
                    self.decls.push(index);
                    block.declared_tokens.push(index);
                }
                entry = false;
            }
        }
    }

    /// Match a rule:
    ///
    /// `MODIFIER? name ARGS? '!'? COMMENT* (SCOPE | BLOCK)* ':' body ';'`
    ///
    /// The body scan classifies labels and references, collects embedded
    /// actions, and skips rewrite clauses. A rule only exists once its
    /// terminating `;` is reached; anything short of that fails the whole
    /// match.
    pub(super) fn match_rule(&mut self) -> Option<Rule> {
        let start = self.cursor.position();

        if let Some(text) = self.text_at(0) {
            if vocab::is_rule_modifier(text) && !self.cursor.advance() {
                return None;
            }
        }

        if !self.is_id(0) {
            return None;
        }
        let name_token = self.cursor.position();
        let name = self.text_at(0)?.to_string();
        if !self.cursor.advance() {
            return None;
        }

        if self.match_arguments() && !self.cursor.advance() {
            return None;
        }

        if self.is_chr(0, "!") && !self.cursor.advance() {
            return None;
        }

        while self.is_kind(0, RawKind::SingleComment) || self.is_kind(0, RawKind::ComplexComment) {
            if !self.cursor.advance() {
                return None;
            }
        }

        // Any number of scope clauses and blocks may precede the colon.
        // Failed inner matches leave the cursor wherever they stopped; the
        // colon check below then fails the rule, and the driver rewinds.
        loop {
            if self.match_scope() {
                if !self.cursor.advance() {
                    return None;
                }
                continue;
            }
            if self.match_block().is_some() {
                if !self.cursor.advance() {
                    return None;
                }
                continue;
            }
            if self.is_colon(0) {
                break;
            }
            return None;
        }

        let ref_start = self.references.len();
        let rule_index = self.rules.len();
        let mut labels = LabelScope::new();
        labels.begin();

        while self.cursor.advance() {
            if self.is_semi(0) {
                // End of the rule. An exception/catch group may trail it;
                // its scan can run the cursor past the last token.
                self.match_rule_exception_group();
                let end_token = self.cursor.position().min(self.tokens.len() - 1);

                self.tag(name_token, TokenClass::Declaration);
                self.decls.push(name_token);

                let references = if self.references.len() > ref_start {
                    Some((ref_start, self.references.len() - 1))
                } else {
                    None
                };

                return Some(Rule {
                    name,
                    span: self.span_of(start, end_token),
                    start_token: start,
                    end_token,
                    start_line: self.tokens[start].start_line,
                    end_line: self.tokens[end_token].end_line,
                    references,
                    completed: true,
                    expanded: true,
                });
            } else if self.is_id(0) {
                // Label assignment: `label=x`, `label+=x`, `label='str'`.
                // The operand is bound to the label, not a reference.
                if self.is_chr(1, "=") {
                    if !self.declare_label(&mut labels, 2) {
                        return None;
                    }
                    continue;
                } else if self.is_chr(1, "+") && self.is_chr(2, "=") {
                    if !self.declare_label(&mut labels, 3) {
                        return None;
                    }
                    continue;
                }

                let ref_token = self.cursor.position();
                let ref_name = self.text_at(0)?.to_string();

                // Reserved keywords never produce references.
                if vocab::is_keyword(&ref_name) {
                    continue;
                }

                // Optional option arguments attached to the reference.
                // Stay on the closing bracket; the loop advances past it.
                if self.is_chr(1, "[") {
                    if !self.cursor.advance() {
                        return None;
                    }
                    self.match_arguments();
                }

                if labels.is_declared(&ref_name) {
                    self.tag(ref_token, TokenClass::Label);
                } else {
                    self.tag(ref_token, TokenClass::Reference);
                    self.references.push(Reference {
                        rule_index,
                        rule_name: name.clone(),
                        token: ref_token,
                        name: ref_name,
                    });
                }
            } else if self.is_open_block(0) {
                // Embedded action. An unterminated body fails quietly here;
                // the loop then runs off the stream and fails the rule.
                let action_start = self.cursor.position();
                if self.match_balanced("{", "}") {
                    let action_end = self.cursor.position();
                    self.tag(action_start, TokenClass::BlockLimit);
                    self.tag(action_end, TokenClass::BlockLimit);
                    let span = self.span_of(action_start, action_end);
                    let text = self.source[span.clone()].to_string();
                    self.actions.push(Action {
                        rule_name: name.clone(),
                        rule_index,
                        start_token: action_start,
                        end_token: action_end,
                        start_line: self.tokens[action_start].start_line,
                        end_line: self.tokens[action_end].end_line,
                        text,
                        ordinal: self.actions.len(),
                        expanded: true,
                        span,
                    });
                }
            } else if self.is_kind(0, RawKind::Rewrite) {
                if !self.cursor.advance() {
                    return None;
                }
                self.match_rewrite_syntax();
            } else if self.is_lparen(0) {
                labels.begin();
            } else if self.is_rparen(0) {
                labels.end();
            }
        }

        None
    }

    /// Handle a `label=` / `label+=` form: classify the label, register
    /// it, and skip the assignment tokens and operand (`skip_n` covers the
    /// operator tokens plus the operand's position). Returns false if the
    /// stream ends first.
    fn declare_label(&mut self, labels: &mut LabelScope, skip_n: usize) -> bool {
        let label_token = self.cursor.position();
        self.tag(label_token, TokenClass::Label);
        let label = match self.text_at(0) {
            Some(text) => text.to_string(),
            None => return false,
        };
        if !labels.declare(&label) {
            self.report("label declared with no open scope frame", Some(label_token));
        }
        self.cursor.skip(skip_n)
    }

    /// `'[' ... ']'` argument list at the current position.
    pub(super) fn match_arguments(&mut self) -> bool {
        self.is_chr(0, "[") && self.match_balanced("[", "]")
    }

    /// Best-effort consumption of a trailing exception group after a
    /// rule's `;`:
    ///
    /// `exception ARG_ACTION? ( catch ARG_ACTION ACTION )*`
    pub(super) fn match_rule_exception_group(&mut self) {
        if !self.match_optional("exception") {
            return;
        }

        if self.is_open_block(1) {
            self.cursor.advance();
        }

        while self.match_optional("catch") {
            self.cursor.advance(); // argument list
            self.cursor.advance(); // handler body
        }
    }

    /// Rewrite clauses (`-> ...`) are recognized and skipped; their
    /// structure is deliberately not analyzed. Consumers only need the
    /// arrow token itself.
    pub(super) fn match_rewrite_syntax(&mut self) {}

    /// Consume tokens until the open/close balance returns to zero at a
    /// close delimiter. The token the cursor starts on is not counted.
    pub(super) fn match_balanced(&mut self, open: &str, close: &str) -> bool {
        let mut balance = 0usize;
        while self.cursor.advance() {
            match self.text_at(0) {
                Some(text) if text == open => balance += 1,
                Some(text) if text == close => {
                    if balance == 0 {
                        return true;
                    }
                    balance -= 1;
                }
                _ => {}
            }
        }
        false
    }

    /// Match a group marker comment: `// $<name` or `// $>`. The marker is
    /// anchored at the last rule seen so far.
    pub(super) fn match_rule_group(&mut self) -> Option<RuleGroup> {
        let token = self.cursor.position();
        let text = self.text_at(0)?;

        if let Some(rest) = text.strip_prefix(vocab::BEGIN_GROUP) {
            let rest = rest.trim();
            let name = rest.strip_suffix(';').unwrap_or(rest).trim_end().to_string();
            Some(RuleGroup {
                marker: GroupMarker::Begin { name },
                anchor: self.rules.len().checked_sub(1),
                token,
            })
        } else if text.starts_with(vocab::END_GROUP) {
            Some(RuleGroup {
                marker: GroupMarker::End,
                anchor: self.rules.len().checked_sub(1),
                token,
            })
        } else {
            None
        }
    }

    /// Consume `text` if it is the identifier right after the current
    /// token, leaving the cursor on it.
    fn match_optional(&mut self, text: &str) -> bool {
        if self.is_id_text(1, text) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }
}
