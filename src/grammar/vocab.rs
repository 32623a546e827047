//! Fixed vocabularies of the ANTLR grammar language.
//!
//! These tables are process-wide constants initialized once; nothing in the
//! crate mutates them after startup.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Marker prefix opening a visual rule group: `// $<name`.
pub const BEGIN_GROUP: &str = "// $<";

/// Marker prefix closing a visual rule group: `// $>`.
pub const END_GROUP: &str = "// $>";

pub const TOKENS_BLOCK_NAME: &str = "tokens";
pub const OPTIONS_BLOCK_NAME: &str = "options";
pub const PARSER_HEADER_BLOCK_NAME: &str = "@header";
pub const LEXER_HEADER_BLOCK_NAME: &str = "@lexer::header";
pub const PARSER_MEMBERS_BLOCK_NAME: &str = "@members";
pub const LEXER_MEMBERS_BLOCK_NAME: &str = "@lexer::members";

/// Names of the well-known top-level blocks.
pub static BLOCK_IDENTIFIERS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        OPTIONS_BLOCK_NAME,
        TOKENS_BLOCK_NAME,
        PARSER_HEADER_BLOCK_NAME,
        LEXER_HEADER_BLOCK_NAME,
        PARSER_MEMBERS_BLOCK_NAME,
        LEXER_MEMBERS_BLOCK_NAME,
    ]
});

/// Modifiers allowed in front of a rule name.
pub static RULE_MODIFIERS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["protected", "public", "private", "fragment"]);

/// Reserved words that never count as rule or token references.
pub static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set: HashSet<&'static str> = BLOCK_IDENTIFIERS.iter().copied().collect();
    set.extend(RULE_MODIFIERS.iter().copied());
    set.insert("returns");
    set.insert("init");
    set
});

/// References that are always defined, even without a declaration.
pub static PREDEFINED_REFERENCES: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["EOF"]);

/// Grammar kinds that may follow the `grammar` keyword.
pub static KNOWN_GRAMMAR_KINDS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["lexer", "parser", "tree", "combined"]);

/// True if `name` is a rule modifier.
pub fn is_rule_modifier(name: &str) -> bool {
    RULE_MODIFIERS.contains(&name)
}

/// True if `name` is a reserved keyword.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(name)
}

/// True if `name` is a known grammar kind.
pub fn is_known_grammar_kind(name: &str) -> bool {
    KNOWN_GRAMMAR_KINDS.contains(&name)
}

/// True if `name` is predefined (e.g. `EOF`).
pub fn is_predefined_reference(name: &str) -> bool {
    PREDEFINED_REFERENCES.contains(&name)
}
