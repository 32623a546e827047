//! Cross-reference checks over a parsed model.
//!
//! These run after a pass, on the finished model plus its token stream.
//! Findings point at token indices so the editor can underline the exact
//! occurrence.

use crate::grammar::model::GrammarModel;
use crate::grammar::token::Token;
use crate::grammar::vocab;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A name declared more than once, with every occurrence listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateDeclaration {
    pub name: String,
    pub tokens: Vec<usize>,
}

/// A reference whose name resolves to no rule, declared token, or
/// predefined name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndefinedReference {
    pub name: String,
    pub token: usize,
}

/// Find names declared more than once, across rule names and tokens-block
/// entries alike. Occurrences keep stream order.
pub fn duplicate_declarations(model: &GrammarModel, tokens: &[Token]) -> Vec<DuplicateDeclaration> {
    let mut occurrences: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for &index in &model.decls {
        let name = tokens[index].text.as_str();
        let entry = occurrences.entry(name).or_default();
        if entry.is_empty() {
            order.push(name);
        }
        entry.push(index);
    }

    order
        .into_iter()
        .filter_map(|name| {
            let indices = &occurrences[name];
            (indices.len() > 1).then(|| DuplicateDeclaration {
                name: name.to_string(),
                tokens: indices.clone(),
            })
        })
        .collect()
}

/// Find references that resolve to nothing. Resolution targets are rule
/// names, tokens-block entries, and the predefined names.
pub fn undefined_references(model: &GrammarModel, tokens: &[Token]) -> Vec<UndefinedReference> {
    let mut defined: HashSet<&str> = model.rules.iter().map(|r| r.name.as_str()).collect();
    for &index in &model.decls {
        defined.insert(tokens[index].text.as_str());
    }

    model
        .references
        .iter()
        .filter(|r| !defined.contains(r.name.as_str()) && !vocab::is_predefined_reference(&r.name))
        .map(|r| UndefinedReference {
            name: r.name.clone(),
            token: r.token,
        })
        .collect()
}
