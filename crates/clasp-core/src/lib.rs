//! Core data structures for clasp argument patterns.
//!
//! - `tree`: the pattern tree consumed by the automaton compiler
//! - `ids`: typed indices into the tree and the automaton
//! - `interner`: string interning for token text
//! - `colors`: ANSI palette shared by printers

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod colors;
mod ids;
mod interner;
mod invariants;
mod tree;

#[cfg(test)]
mod interner_tests;
#[cfg(test)]
mod tree_tests;

pub use colors::Colors;
pub use ids::{AltId, LeafId, PatternId, PositionId, SeqId, SymbolId};
pub use interner::{Interner, Name};
pub use tree::{Alternation, Element, Leaf, PatternTree, Sequence, Symbol, SymbolKind};
