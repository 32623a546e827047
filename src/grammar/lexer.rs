//! Lexer for ANTLR grammar source text.
//!
//! The tokenization itself is handled entirely by logos; this module maps
//! the raw matches into [`Token`] values carrying byte spans and line
//! numbers, ready for the token cursor.
//!
//! The lexer never fails: characters that fit no rule are dropped, and
//! unterminated strings or comments simply lex as far as they can. The
//! parser is expected to degrade gracefully around whatever comes out.

use crate::grammar::token::{RawKind, Token};
use logos::Logos;

/// Raw logos rules for grammar source.
///
/// Multi-character operators are not grouped: `+=` lexes as `+` then `=`,
/// and the parser matches the pair by lookahead. The only exceptions are
/// the rewrite arrow `->` and `@header`-style block labels, which the
/// parser needs as single tokens.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    SingleComment,

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    ComplexComment,

    #[token("->")]
    Rewrite,

    #[regex(r"@[a-zA-Z_][a-zA-Z0-9_]*(::[a-zA-Z_][a-zA-Z0-9_]*)?")]
    AtLabel,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    // Closing quote optional so that a string being typed still lexes; the
    // priority resolves the lone-quote overlap with the Char fallback.
    #[regex(r"'([^'\\\n]|\\[^\n])*'?", priority = 3)]
    SingleQuoteString,

    #[regex(r#""([^"\\\n]|\\[^\n])*"?"#, priority = 3)]
    DoubleQuoteString,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[^ \t\r\n\fa-zA-Z0-9_]")]
    Char,
}

impl RawToken {
    fn kind(self) -> RawKind {
        match self {
            RawToken::SingleComment => RawKind::SingleComment,
            RawToken::ComplexComment => RawKind::ComplexComment,
            RawToken::Rewrite => RawKind::Rewrite,
            RawToken::AtLabel => RawKind::AtLabel,
            RawToken::Identifier => RawKind::Identifier,
            RawToken::SingleQuoteString => RawKind::SingleQuoteString,
            RawToken::DoubleQuoteString => RawKind::DoubleQuoteString,
            RawToken::Number => RawKind::Number,
            RawToken::Char => RawKind::Char,
        }
    }
}

/// Byte offsets of line starts, for O(log n) offset-to-line conversion.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                starts.push(i + 1);
            }
        }
        LineIndex { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }
}

/// Tokenize grammar source into parser-ready tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let lines = LineIndex::new(source);
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(raw) = result {
            let span = lexer.span();
            let end_offset = span.end.saturating_sub(1).max(span.start);
            tokens.push(Token {
                kind: raw.kind(),
                text: lexer.slice().to_string(),
                start_line: lines.line_of(span.start),
                end_line: lines.line_of(end_offset),
                span,
            });
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<RawKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_identifiers_and_punctuation() {
        assert_eq!(
            kinds("foo : bar ;"),
            vec![
                RawKind::Identifier,
                RawKind::Char,
                RawKind::Identifier,
                RawKind::Char
            ]
        );
    }

    #[test]
    fn test_at_label_is_one_token() {
        let tokens = tokenize("@lexer::header { }");
        assert_eq!(tokens[0].kind, RawKind::AtLabel);
        assert_eq!(tokens[0].text, "@lexer::header");
    }

    #[test]
    fn test_rewrite_arrow() {
        assert_eq!(
            kinds("a -> b"),
            vec![RawKind::Identifier, RawKind::Rewrite, RawKind::Identifier]
        );
    }

    #[test]
    fn test_plus_equals_lexes_as_two_tokens() {
        let tokens = tokenize("ids+=ID");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ids", "+", "=", "ID"]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            kinds("// line\n/* multi\nline */ x"),
            vec![
                RawKind::SingleComment,
                RawKind::ComplexComment,
                RawKind::Identifier
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            kinds(r#"'a' "b\"c" 'unterminated"#),
            vec![
                RawKind::SingleQuoteString,
                RawKind::DoubleQuoteString,
                RawKind::SingleQuoteString
            ]
        );
    }

    #[test]
    fn test_lone_quote_lexes_as_string() {
        assert_eq!(kinds("'"), vec![RawKind::SingleQuoteString]);
        assert_eq!(kinds("\""), vec![RawKind::DoubleQuoteString]);
    }

    #[test]
    fn test_single_line_complex_comment() {
        assert_eq!(
            kinds("/* one line */ x"),
            vec![RawKind::ComplexComment, RawKind::Identifier]
        );
    }

    #[test]
    fn test_complex_comment_with_inner_stars() {
        assert_eq!(kinds("/* a * b **/"), vec![RawKind::ComplexComment]);
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("a\nb\n/* x\ny */");
        assert_eq!(tokens[0].start_line, 0);
        assert_eq!(tokens[1].start_line, 1);
        assert_eq!(tokens[2].start_line, 2);
        assert_eq!(tokens[2].end_line, 3);
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").is_empty());
    }
}
