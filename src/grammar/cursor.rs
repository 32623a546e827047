//! Movable read position over an immutable token stream.
//!
//! The cursor supports lookahead by offset and strict mark/rewind
//! checkpoints for speculative matching. Marks must be used in push +
//! (rewind | commit) pairs; a dangling mark is a caller bug.

use crate::grammar::token::Token;

/// A cursor over a borrowed token slice.
///
/// The cursor only does position bookkeeping; it never inspects or alters
/// token content beyond handing out references.
#[derive(Debug)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
    marks: Vec<usize>,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        TokenCursor {
            tokens,
            pos: 0,
            marks: Vec::new(),
        }
    }

    /// The token `offset` positions ahead of the cursor, without consuming.
    /// Returns `None` past the end of the stream.
    pub fn current_at(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True once the cursor has moved past the last token.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Move forward one token. Returns false once the stream is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.pos < self.tokens.len()
    }

    /// Advance `n` tokens, short-circuiting to false if the stream ends.
    pub fn skip(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if !self.advance() {
                return false;
            }
        }
        true
    }

    /// Push the current position onto the checkpoint stack.
    pub fn mark(&mut self) {
        self.marks.push(self.pos);
    }

    /// Pop the most recent checkpoint and restore the position.
    pub fn rewind(&mut self) {
        if let Some(pos) = self.marks.pop() {
            self.pos = pos;
        }
    }

    /// Pop the most recent checkpoint without moving.
    pub fn commit(&mut self) {
        self.marks.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::lexer::tokenize;

    #[test]
    fn test_lookahead_and_advance() {
        let tokens = tokenize("a b c");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.current_at(0).map(|t| t.text.as_str()), Some("a"));
        assert_eq!(cursor.current_at(2).map(|t| t.text.as_str()), Some("c"));
        assert_eq!(cursor.current_at(3), None);
        assert!(cursor.advance());
        assert_eq!(cursor.current_at(0).map(|t| t.text.as_str()), Some("b"));
    }

    #[test]
    fn test_advance_returns_false_at_end() {
        let tokens = tokenize("a b");
        let mut cursor = TokenCursor::new(&tokens);
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert!(cursor.at_end());
        assert_eq!(cursor.current_at(0), None);
    }

    #[test]
    fn test_skip_short_circuits() {
        let tokens = tokenize("a b c");
        let mut cursor = TokenCursor::new(&tokens);
        assert!(cursor.skip(2));
        assert_eq!(cursor.current_at(0).map(|t| t.text.as_str()), Some("c"));
        assert!(!cursor.skip(5));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_mark_rewind_restores_position() {
        let tokens = tokenize("a b c d");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.mark();
        cursor.advance();
        cursor.advance();
        cursor.rewind();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_nested_marks() {
        let tokens = tokenize("a b c d");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.mark();
        cursor.advance();
        cursor.mark();
        cursor.advance();
        cursor.rewind();
        assert_eq!(cursor.position(), 1);
        cursor.commit();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_empty_stream() {
        let tokens = tokenize("");
        let mut cursor = TokenCursor::new(&tokens);
        assert!(cursor.at_end());
        assert!(!cursor.advance());
    }
}
