//! Integration tests for named blocks, tokens-block declarations, and
//! embedded actions.

use rstest::rstest;

use grammarlens::grammar::{tokenize, GrammarModel, GrammarParser, TokenClass};

const JAVA_LIKE: &str = r#"grammar Simple;

options {
    k=2;
}

tokens {
    IF='if';
    ELSE='else';
    ID;
}

@header {
    package org.example.parser;
}

@members {
    int count = 0;
}

stat : IF expr { count++; } ( ELSE stat { count++; } )? ;

expr : ID ;
"#;

fn parse(source: &str) -> GrammarModel {
    let tokens = tokenize(source);
    GrammarParser::new(source, &tokens).parse()
}

#[test]
fn top_level_blocks_are_collected_in_order() {
    let model = parse(JAVA_LIKE);
    let names: Vec<&str> = model.blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["options", "tokens", "@header", "@members"]);
}

#[test]
fn only_the_tokens_block_declares() {
    let model = parse(JAVA_LIKE);
    for block in &model.blocks {
        if block.is_token_block() {
            assert_eq!(block.declared_tokens.len(), 3);
        } else {
            assert!(block.declared_tokens.is_empty());
        }
    }
}

#[test]
fn declared_token_names() {
    let source = JAVA_LIKE;
    let tokens = tokenize(source);
    let model = GrammarParser::new(source, &tokens).parse();
    let block = model
        .blocks
        .iter()
        .find(|b| b.is_token_block())
        .expect("tokens block");
    let names: Vec<&str> = block
        .declared_tokens
        .iter()
        .map(|&i| tokens[i].text.as_str())
        .collect();
    assert_eq!(names, vec!["IF", "ELSE", "ID"]);
}

#[test]
fn block_delimiters_are_classified() {
    let model = parse(JAVA_LIKE);
    for block in &model.blocks {
        assert_eq!(
            model.class_of(block.start_token),
            Some(TokenClass::BlockLabel)
        );
        assert_eq!(model.class_of(block.end_token), Some(TokenClass::BlockLimit));
    }
}

#[test]
fn actions_belong_to_their_rule() {
    let model = parse(JAVA_LIKE);
    assert_eq!(model.actions.len(), 2);
    for action in &model.actions {
        assert_eq!(action.rule_name, "stat");
        assert_eq!(action.rule_index, 0);
        assert!(action.text.starts_with('{'));
        assert!(action.text.ends_with('}'));
    }
    assert_eq!(model.actions[0].ordinal, 0);
    assert_eq!(model.actions[1].ordinal, 1);
}

#[test]
fn action_lookup_by_token() {
    let model = parse(JAVA_LIKE);
    let first = &model.actions[0];
    let found = model
        .action_at_token(first.start_token + 1)
        .expect("action at token");
    assert_eq!(found.ordinal, 0);
}

#[test]
fn nested_braces_inside_action() {
    let model = parse("r : { if (x) { y(); } } a ;");
    assert_eq!(model.actions.len(), 1);
    assert_eq!(model.references.len(), 1);
    assert_eq!(model.references[0].name, "a");
}

#[test]
fn braces_inside_action_strings_do_not_count() {
    let model = parse(r#"r : { print("}"); } a ;"#);
    assert_eq!(model.actions.len(), 1);
    assert_eq!(model.references[0].name, "a");
}

#[test]
fn rule_prelude_blocks_stay_out_of_the_block_list() {
    let source = "r\n@init { int depth = 0; }\n: a ;\ns : b ;";
    let model = parse(source);
    assert!(model.blocks.is_empty());
    assert_eq!(model.rules.len(), 2);
}

#[rstest]
#[case("options { k=2; }", "options", false)]
#[case("tokens { A; }", "tokens", true)]
#[case("TOKENS { A; }", "tokens", true)]
#[case("@header { x }", "@header", false)]
#[case("@lexer::members { x }", "@lexer::members", false)]
#[case("custom { x }", "custom", false)]
fn block_names_and_token_blocks(
    #[case] source: &str,
    #[case] name: &str,
    #[case] is_token_block: bool,
) {
    let model = parse(source);
    assert_eq!(model.blocks.len(), 1);
    assert_eq!(model.blocks[0].name, name);
    assert_eq!(model.blocks[0].is_token_block(), is_token_block);
}

#[test]
fn identifiers_inside_actions_are_not_references() {
    let model = parse("r : { helper(other_rule); } a ;");
    let names: Vec<&str> = model.references.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a"]);
}
