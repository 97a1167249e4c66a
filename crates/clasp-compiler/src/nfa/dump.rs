//! Text rendering of a position automaton.
//!
//! One block per pattern: its start set, then every position in creation
//! order with its followpos successors.
//!
//! ```text
//! P0 copy:
//!   start: #0
//!   #0 cp@0 → #1
//!   #1 <src>@3 → #2
//!   #2 <dst>@9 → #3
//!   #3 ⊤@14
//! ```
//!
//! Terminal positions print as `⊤`. Offsets follow `@` and refer to the
//! pattern text.

use std::fmt::Write;

use clasp_core::{Colors, PatternTree};

use super::automaton::Automaton;

/// Printer for `Automaton` with configurable output options.
pub struct AutomatonPrinter<'a> {
    automaton: &'a Automaton,
    tree: &'a PatternTree,
    /// Indexed by `PatternId`.
    names: Vec<&'a str>,
    colors: Colors,
}

impl<'a> AutomatonPrinter<'a> {
    pub fn new(automaton: &'a Automaton, tree: &'a PatternTree) -> Self {
        Self {
            automaton,
            tree,
            names: Vec::new(),
            colors: Colors::OFF,
        }
    }

    /// Pattern names in `PatternId` order, shown in block headers.
    pub fn names(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.names = names.into_iter().collect();
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;

        for (i, pattern) in self.automaton.patterns().into_iter().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }

            write!(w, "{}{pattern}{}", c.blue, c.reset)?;
            if let Some(name) = self.names.get(pattern.index()) {
                write!(w, " {name}")?;
            }
            writeln!(w, ":")?;

            write!(w, "  {}start:{}", c.dim, c.reset)?;
            let mut starts = self.automaton.startpos_of(pattern).peekable();
            if starts.peek().is_none() {
                write!(w, " ∅")?;
            }
            for id in starts {
                write!(w, " {id}")?;
            }
            writeln!(w)?;

            for id in self.automaton.positions_of(pattern) {
                let position = self.automaton.position(id);

                write!(w, "  {}{id}{} ", c.blue, c.reset)?;
                match position.symbol {
                    Some(symbol) => {
                        write!(w, "{}{}{}", c.green, self.tree.symbol_label(symbol), c.reset)?
                    }
                    None => write!(w, "{}⊤{}", c.green, c.reset)?,
                }
                write!(w, "{}@{}{}", c.dim, position.offset, c.reset)?;

                let mut successors = self.automaton.followpos(id).peekable();
                if successors.peek().is_some() {
                    write!(w, " {}→{}", c.dim, c.reset)?;
                    for next in successors {
                        write!(w, " {next}")?;
                    }
                }
                writeln!(w)?;
            }
        }

        Ok(())
    }
}
