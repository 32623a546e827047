//! # grammarlens
//!
//! Incremental syntax analysis for ANTLR grammar files.
//!
//! The crate tokenizes grammar source text and runs a backtracking,
//! token-level parser over it, producing a structural model (grammar name,
//! rules, named blocks, embedded actions, symbol references, rule groups)
//! that editor front ends use for highlighting, folding, and navigation.
//!
//! The parser is deliberately forgiving: it re-runs on every keystroke of a
//! live editing session, so malformed or half-typed input never fails a
//! parse pass; unrecognized regions are simply left unstructured.

pub mod grammar;
