//! clasp compiler: pattern text to position automaton.
//!
//! This crate provides the compilation pipeline for CLI argument patterns:
//! - `syntax` - lexer and parser from pattern text into a `PatternTree`
//! - `nfa` - position set arena, automaton sink, Glushkov-style compiler,
//!   tracing, dump and verification
//! - `patterns` - high-level `PatternSet` facade

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod nfa;
pub mod patterns;
pub mod syntax;

#[cfg(test)]
mod patterns_tests;
#[cfg(test)]
pub mod test_utils;

pub use nfa::{Automaton, AutomatonPrinter, Compiler, PrintTracer, Tracer, Verbosity};
pub use patterns::{CompiledPattern, PatternSet, PatternSetBuilder};
pub use syntax::{ParseError, Span};

/// Errors that can occur while registering patterns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("pattern `{name}`: {source}")]
    Parse { name: String, source: ParseError },

    #[error("pattern `{0}` is defined more than once")]
    DuplicatePattern(String),
}

/// Result type for pattern registration.
pub type Result<T> = std::result::Result<T, Error>;
