//! Main module for grammar syntax analysis

pub mod analysis;
pub mod cursor;
pub mod engine;
pub mod folding;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod token;
pub mod vocab;

pub use engine::SyntaxEngine;
pub use lexer::tokenize;
pub use model::GrammarModel;
pub use parser::GrammarParser;
pub use token::{RawKind, Token, TokenClass};
