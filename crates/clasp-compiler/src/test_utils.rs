//! Test utilities and snapshot macros.

use clasp_core::Colors;

use crate::patterns::{PatternSet, PatternSetBuilder};

impl PatternSet {
    /// Compile `name: pattern` lines, panicking on any error.
    pub fn expect_valid(text: &str) -> PatternSet {
        let mut builder = PatternSetBuilder::new();
        for line in text.lines() {
            let (name, pattern) = line
                .split_once(": ")
                .unwrap_or_else(|| panic!("expected `name: pattern`, got {line:?}"));
            if let Err(err) = builder.add(name, pattern) {
                panic!("expected valid pattern, got error:\n{err}");
            }
        }
        builder.build()
    }

    pub fn expect_valid_dump(text: &str) -> String {
        Self::expect_valid(text).dump(Colors::OFF)
    }
}

/// Inline snapshot of the automaton compiled from `name: pattern` lines.
#[macro_export]
macro_rules! shot_nfa {
    ($patterns:literal, @$snapshot:literal) => {{
        let patterns = indoc::indoc!($patterns).trim();
        let output = $crate::PatternSet::expect_valid_dump(patterns);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}
