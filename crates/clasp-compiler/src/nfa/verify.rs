//! Debug-only structural verification of a finished automaton.
//!
//! Checks the properties every compiled pattern set must have, independent
//! of the patterns themselves. Zero-cost in release builds.

#[cfg(debug_assertions)]
use std::collections::BTreeMap;

use super::automaton::Automaton;

/// Panics if the automaton violates a structural invariant:
/// - every pattern owns exactly one terminal position
/// - terminal positions have no followpos successors
/// - no followpos edge connects positions of different patterns
/// - every start position exists
#[cfg(debug_assertions)]
pub fn debug_verify(automaton: &Automaton) {
    let mut terminals = BTreeMap::new();

    for (id, position) in automaton.positions() {
        if position.is_terminal() {
            if let Some(previous) = terminals.insert(position.pattern, id) {
                panic!(
                    "Automaton: {} has two terminal positions ({previous}, {id})",
                    position.pattern
                );
            }
            if let Some(next) = automaton.followpos(id).next() {
                panic!("Automaton: terminal {id} has successor {next}");
            }
        }

        for next in automaton.followpos(id) {
            let target = automaton.position(next).pattern;
            assert_eq!(
                position.pattern, target,
                "Automaton: edge {id} → {next} crosses from {} to {target}",
                position.pattern
            );
        }
    }

    for start in automaton.startpos() {
        assert!(
            start.index() < automaton.len(),
            "Automaton: start position {start} not found ({} positions)",
            automaton.len()
        );
    }

    for pattern in automaton.patterns() {
        assert!(
            terminals.contains_key(&pattern),
            "Automaton: {pattern} has no terminal position"
        );
    }
}

#[cfg(not(debug_assertions))]
#[inline(always)]
pub fn debug_verify(_automaton: &Automaton) {}
