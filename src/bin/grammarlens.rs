//! Command-line interface for grammarlens
//! Parses an ANTLR grammar file and prints the structural model, the raw
//! token stream, the fold regions, or cross-reference findings as JSON.
//!
//! Usage:
//!   grammarlens model `<path>`   - Print the structural model
//!   grammarlens tokens `<path>`  - Print the token stream
//!   grammarlens folds `<path>`   - Print the collapsible regions
//!   grammarlens check `<path>`   - Print duplicate declarations and undefined references

use clap::{Arg, Command};
use grammarlens::grammar::analysis::{duplicate_declarations, undefined_references};
use grammarlens::grammar::folding::fold_regions;
use grammarlens::grammar::SyntaxEngine;
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "i/o error: {}", err),
            CliError::Json(err) => write!(f, "json error: {}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

fn main() {
    let path_arg = || {
        Arg::new("path")
            .help("Path to the grammar file")
            .required(true)
            .index(1)
    };

    let matches = Command::new("grammarlens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Structural analysis of ANTLR grammar files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("model")
                .about("Print the structural model")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("folds")
                .about("Print the collapsible regions")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Print duplicate declarations and undefined references")
                .arg(path_arg()),
        )
        .get_matches();

    let (name, sub) = match matches.subcommand() {
        Some(pair) => pair,
        None => unreachable!(),
    };
    let path = match sub.get_one::<String>("path") {
        Some(path) => path,
        None => unreachable!(),
    };

    if let Err(err) = run(name, Path::new(path)) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(command: &str, path: &Path) -> Result<(), CliError> {
    let source = std::fs::read_to_string(path)?;
    let mut engine = SyntaxEngine::new();
    engine.parse(&source);

    match command {
        "model" => print_json(engine.model())?,
        "tokens" => print_json(&engine.tokens())?,
        "folds" => print_json(&fold_regions(engine.model()))?,
        "check" => {
            #[derive(Serialize)]
            struct Report<T: Serialize, U: Serialize> {
                duplicate_declarations: T,
                undefined_references: U,
            }
            print_json(&Report {
                duplicate_declarations: duplicate_declarations(engine.model(), engine.tokens()),
                undefined_references: undefined_references(engine.model(), engine.tokens()),
            })?;
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
