//! Parsing of SpaceEngine `.sc`/`.se` catalog scripts.
//!
//! The pipeline is a tokenizer ([`Lexer`]) feeding a table-driven LALR(1)
//! shift-reduce parser ([`Parser`]) that produces an [`SCSTable`] tree of
//! `(key, values, sub-table)` records. Lexer and parser errors always carry a
//! 1-based (line, column) position.
//!
//! ```
//! use cse_rs::scstream;
//!
//! let table = scstream::parse_catalog(
//!     "Planet \"Earth\" { MassKg 5.9722e24 }",
//! ).unwrap();
//! let planet = table.find("Planet").unwrap();
//! assert_eq!(planet.values[0].as_string().unwrap(), "Earth");
//! ```

use thiserror::Error;

mod lexer;
mod parser;
mod table;
mod tables;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use table::{ElementKind, SCKeyValue, SCSTable, Value, ValueTag};

/// Errors raised while lexing or parsing a catalog.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The tokenizer rejected a character or literal.
    #[error("Error at ({line}, {column}): {reason}")]
    Lex {
        /// 1-based source line.
        line: u64,
        /// 1-based source column.
        column: u64,
        /// Which lexical substructure failed.
        reason: String,
    },
    /// The parser rejected the token stream.
    #[error("Syntax error at ({line}, {column}): {reason}")]
    Syntax {
        /// 1-based source line.
        line: u64,
        /// 1-based source column.
        column: u64,
        /// The automaton state that rejected.
        state: usize,
        /// The state's expectation, or the semantic complaint.
        reason: String,
    },
    /// A value could not be converted to the requested kind.
    #[error("{reason}")]
    Value {
        /// What went wrong.
        reason: String,
    },
}

/// Lexes and parses a catalog script.
pub fn parse_catalog(source: &str) -> Result<SCSTable, ParseError> {
    let tokens = Lexer::new().run(source)?;
    Parser::new(tokens).run()
}

/// Lexes and parses a catalog script with caller-registered variables (the
/// `.se` `LogLevel` directive needs its name registered).
pub fn parse_catalog_with_variables<S, I>(source: &str, variables: I) -> Result<SCSTable, ParseError>
where
    S: Into<String>,
    I: IntoIterator<Item = S>,
{
    let tokens = Lexer::new().add_variables(variables).run(source)?;
    Parser::new(tokens).run()
}
