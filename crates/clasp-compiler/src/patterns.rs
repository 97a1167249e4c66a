//! High-level facade: register named patterns, compile them together.
//!
//! ```text
//! let mut builder = PatternSetBuilder::new();
//! builder.add("add", "add [-f | --force] <file>...")?;
//! builder.add("rm", "rm [-r] <path>...")?;
//! let set = builder.build();
//! ```
//!
//! All patterns share one `PatternTree` and one `Automaton`. Pattern ids
//! follow registration order.

use indexmap::IndexMap;

use clasp_core::{Colors, PatternId, PatternTree, SeqId};

use crate::nfa::{Automaton, AutomatonPrinter, Compiler, NoopTracer, Tracer, debug_verify};
use crate::syntax;
use crate::{Error, Result};

struct Registered {
    root: SeqId,
    source: String,
}

/// Collects patterns before compilation.
#[derive(Default)]
pub struct PatternSetBuilder {
    tree: PatternTree,
    /// Keyed by name, in registration order.
    patterns: IndexMap<String, Registered>,
}

impl PatternSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and register it under `name`.
    ///
    /// The id is final: `build` compiles patterns in registration order.
    pub fn add(&mut self, name: impl Into<String>, text: &str) -> Result<PatternId> {
        let name = name.into();
        if self.patterns.contains_key(&name) {
            return Err(Error::DuplicatePattern(name));
        }

        let root = syntax::parse(&mut self.tree, text).map_err(|source| Error::Parse {
            name: name.clone(),
            source,
        })?;

        let id = PatternId::next_of(self.patterns.len());
        self.patterns.insert(
            name,
            Registered {
                root,
                source: text.to_owned(),
            },
        );
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn build(self) -> PatternSet {
        self.build_with_tracer(NoopTracer)
    }

    /// Compile every registered pattern, reporting compiler events to `tracer`.
    ///
    /// Pass `&mut tracer` to read the tracer afterwards.
    pub fn build_with_tracer<T: Tracer>(self, tracer: T) -> PatternSet {
        let mut automaton = Automaton::new();
        let mut compiled = IndexMap::with_capacity(self.patterns.len());

        let mut compiler = Compiler::new(&self.tree, &mut automaton).with_tracer(tracer);
        for (i, (name, registered)) in self.patterns.into_iter().enumerate() {
            compiler.compile(registered.root, PatternId::next_of(i));
            compiled.insert(
                name,
                CompiledPattern {
                    root: registered.root,
                    source: registered.source,
                    max_depth: compiler.max_depth(),
                },
            );
        }
        drop(compiler);

        debug_verify(&automaton);

        PatternSet {
            tree: self.tree,
            automaton,
            patterns: compiled,
        }
    }
}

/// Per-pattern compilation record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledPattern {
    pub root: SeqId,
    /// Pattern text as registered.
    pub source: String,
    /// Deepest frame stack the compiler reached for this pattern.
    pub max_depth: usize,
}

/// Compiled patterns with their shared tree and automaton.
pub struct PatternSet {
    tree: PatternTree,
    automaton: Automaton,
    patterns: IndexMap<String, CompiledPattern>,
}

impl PatternSet {
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn tree(&self) -> &PatternTree {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<PatternId> {
        self.patterns.get_index_of(name).map(PatternId::next_of)
    }

    pub fn name(&self, id: PatternId) -> Option<&str> {
        self.patterns
            .get_index(id.index())
            .map(|(name, _)| name.as_str())
    }

    pub fn pattern(&self, id: PatternId) -> Option<&CompiledPattern> {
        self.patterns.get_index(id.index()).map(|(_, p)| p)
    }

    /// All patterns in id order.
    pub fn patterns(&self) -> impl Iterator<Item = (PatternId, &str, &CompiledPattern)> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, (name, p))| (PatternId::next_of(i), name.as_str(), p))
    }

    /// Printer with pattern names filled in.
    pub fn printer(&self) -> AutomatonPrinter<'_> {
        AutomatonPrinter::new(&self.automaton, &self.tree)
            .names(self.patterns.keys().map(String::as_str))
    }

    pub fn dump(&self, colors: Colors) -> String {
        self.printer().colors(colors).dump()
    }
}
