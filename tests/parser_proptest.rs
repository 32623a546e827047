//! Property-based tests for the grammar parser.
//!
//! These ensure the parser never panics, keeps its model internally
//! consistent, and behaves deterministically on arbitrary input, not just
//! on well-formed grammars.

use proptest::prelude::*;

use grammarlens::grammar::vocab;
use grammarlens::grammar::{tokenize, GrammarModel, GrammarParser};

fn parse(source: &str) -> GrammarModel {
    let tokens = tokenize(source);
    GrammarParser::new(source, &tokens).parse()
}

/// Generate identifier-shaped rule and reference names.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
}

/// Rule names that do not collide with the reserved vocabulary. A rule
/// legitimately named `grammar` or `exception` parses differently, which
/// is not what the well-formed-grammar properties are probing.
fn rule_name_strategy() -> impl Strategy<Value = String> {
    name_strategy().prop_filter("reserved name", |name| {
        !vocab::is_keyword(name)
            && !vocab::is_rule_modifier(name)
            && name != "grammar"
            && name != "scope"
            && name != "exception"
            && name != "catch"
    })
}

/// Generate a simple well-formed rule.
fn rule_strategy() -> impl Strategy<Value = String> {
    (rule_name_strategy(), prop::collection::vec(name_strategy(), 0..4))
        .prop_map(|(name, refs)| format!("{} : {} ;", name, refs.join(" ")))
}

/// Generate a well-formed grammar from simple rules.
fn grammar_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(rule_strategy(), 0..8).prop_map(|rules| rules.join("\n"))
}

/// Generate arbitrary token soup, drawing from the character classes the
/// lexer actually distinguishes.
fn soup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            name_strategy(),
            Just(":".to_string()),
            Just(";".to_string()),
            Just("{".to_string()),
            Just("}".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("=".to_string()),
            Just("+=".to_string()),
            Just("->".to_string()),
            Just("grammar".to_string()),
            Just("scope".to_string()),
            Just("tokens".to_string()),
            Just("exception".to_string()),
            Just("catch".to_string()),
            Just("'lit'".to_string()),
            Just("\"str\"".to_string()),
            Just("// comment".to_string()),
            Just("/* block */".to_string()),
            Just("// $<group".to_string()),
            Just("// $>".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,200}") {
        let _ = parse(&source);
    }

    #[test]
    fn token_soup_never_panics(source in soup_strategy()) {
        let _ = parse(&source);
    }

    #[test]
    fn classes_align_with_the_token_stream(source in soup_strategy()) {
        let tokens = tokenize(&source);
        let model = GrammarParser::new(&source, &tokens).parse();
        prop_assert_eq!(model.classes.len(), tokens.len());
    }

    #[test]
    fn parsing_is_deterministic(source in soup_strategy()) {
        let first = parse(&source);
        let second = parse(&source);
        prop_assert_eq!(first.rules, second.rules);
        prop_assert_eq!(first.blocks, second.blocks);
        prop_assert_eq!(first.references, second.references);
        prop_assert_eq!(first.groups, second.groups);
        prop_assert_eq!(first.classes, second.classes);
    }

    #[test]
    fn model_indices_stay_in_bounds(source in soup_strategy()) {
        let tokens = tokenize(&source);
        let model = GrammarParser::new(&source, &tokens).parse();
        for rule in &model.rules {
            prop_assert!(rule.start_token <= rule.end_token);
            prop_assert!(rule.end_token < tokens.len());
            if let Some((first, last)) = rule.references {
                prop_assert!(first <= last);
                prop_assert!(last < model.references.len());
            }
        }
        for action in &model.actions {
            prop_assert!(action.start_token < action.end_token);
            prop_assert!(action.end_token < tokens.len());
        }
        for reference in &model.references {
            prop_assert!(reference.token < tokens.len());
        }
        for &decl in &model.decls {
            prop_assert!(decl < tokens.len());
        }
    }

    #[test]
    fn committed_actions_are_brace_balanced(source in soup_strategy()) {
        let model = parse(&source);
        for action in &model.actions {
            prop_assert!(
                action.text.starts_with('{'),
                "action text opens with a brace: {:?}",
                action.text
            );
            prop_assert!(
                action.text.ends_with('}'),
                "action text closes with a brace: {:?}",
                action.text
            );
        }
    }

    #[test]
    fn well_formed_rules_are_all_found(grammar in grammar_strategy()) {
        let expected = grammar.lines().filter(|l| !l.trim().is_empty()).count();
        let model = parse(&grammar);
        prop_assert_eq!(model.rules.len(), expected);
        prop_assert!(model.rules.iter().all(|r| r.completed));
    }
}
