//! Invariant checks excluded from coverage reports.
//!
//! A foreign or stale id reaching the tree means the tree builder is broken,
//! not that user input was bad, so these panic instead of returning errors.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::ids::{AltId, LeafId, SeqId, SymbolId};
use crate::tree::{Alternation, Leaf, PatternTree, Sequence, Symbol};

impl PatternTree {
    pub(crate) fn ensure_sequence(&self, id: SeqId) -> &Sequence {
        self.sequences().get(id.index()).unwrap_or_else(|| {
            panic!(
                "PatternTree: sequence {id} not found ({} sequences)",
                self.sequence_count()
            )
        })
    }

    pub(crate) fn ensure_alternation(&self, id: AltId) -> &Alternation {
        self.alternations().get(id.index()).unwrap_or_else(|| {
            panic!(
                "PatternTree: alternation {id} not found ({} alternations)",
                self.alternation_count()
            )
        })
    }

    pub(crate) fn ensure_leaf(&self, id: LeafId) -> &Leaf {
        self.leaves().get(id.index()).unwrap_or_else(|| {
            panic!(
                "PatternTree: leaf {id} not found ({} leaves)",
                self.leaf_count()
            )
        })
    }

    pub(crate) fn ensure_symbol(&self, id: SymbolId) -> &Symbol {
        self.symbols().get_index(id.index()).unwrap_or_else(|| {
            panic!(
                "PatternTree: symbol {id} not found ({} symbols)",
                self.symbol_count()
            )
        })
    }
}
