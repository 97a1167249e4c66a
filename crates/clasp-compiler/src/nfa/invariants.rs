//! Invariant checks excluded from coverage reports.
//!
//! Every failure here means the pattern tree handed to the compiler is
//! internally inconsistent, which is a bug in whoever built it.

#![cfg_attr(coverage_nightly, coverage(off))]

use clasp_core::{AltId, SeqId};

use super::builder::Subexpr;

pub(super) fn ensure_nullable_matches(seq: SeqId, folded: bool, declared: bool) {
    assert_eq!(
        folded, declared,
        "Compiler: {seq} folds to nullable={folded} but the tree declares nullable={declared} \
         (tree builder computed a stale nullable flag)"
    );
}

pub(super) fn ensure_alternation_result(alt: AltId, acc: Option<Subexpr>) -> Subexpr {
    acc.unwrap_or_else(|| panic!("Compiler: {alt} has no alternatives"))
}

pub(super) fn symbol_never_suspends(seq: SeqId, index: usize) -> ! {
    panic!("Compiler: unwound into {seq}[{index}], which is a symbol and never suspends its frame")
}

pub(super) fn frame_mismatch(state: &str) -> ! {
    panic!("Compiler: state {state} reached with the wrong kind of current frame")
}
