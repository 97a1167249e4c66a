//! Pattern text front end: lexer, parser and parse errors.
//!
//! Turns `add [-f | --force] <file>...` into nodes of a `PatternTree`.

mod error;
mod lexer;
mod parser;

#[cfg(test)]
mod lexer_tests;

use clasp_core::{PatternTree, SeqId};

pub use error::{ParseError, ParseErrorPrinter};
pub use lexer::{Span, Token, TokenKind, lex, token_text};
pub use parser::{DEFAULT_NESTING_LIMIT, Parser};

/// Parse `source` into `tree` with the default nesting limit.
pub fn parse(tree: &mut PatternTree, source: &str) -> Result<SeqId, ParseError> {
    Parser::new(source, lex(source)).parse(tree)
}
