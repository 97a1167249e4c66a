//! Pattern tree: the structured form of a CLI argument pattern.
//!
//! The tree is a set of flat, index-addressed arrays shared by every pattern
//! registered with it. Children are always added before their parents, so a
//! parent can only reference ids that already exist and the tree is acyclic
//! by construction.
//!
//! ```text
//! add [-f | --force] <file>...
//!
//! S0 = [Symbol(-f)]
//! S1 = [Symbol(--force)]
//! A0 = S0 | S1
//! S2 = [Choice(A0)]
//! S3 = [Symbol(<file>)]
//! S4 = [Symbol(add), Optional(S2), Repeated(S3)]     root, end = 28
//! ```
//!
//! Element and alternative lists live in shared pools; a `Sequence` or
//! `Alternation` only stores the range it owns in that pool.

use indexmap::IndexSet;

use crate::ids::{AltId, LeafId, SeqId, SymbolId};
use crate::interner::{Interner, Name};

/// What kind of argument token a symbol stands for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub enum SymbolKind {
    /// Token must equal the symbol text (`add`, `--force`).
    Literal,
    /// Any token, later converted to a value (`<file>`, `<n:int>`).
    Placeholder,
}

/// Token descriptor. Only identity matters to the automaton compiler.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: Name,
    /// Declared value type of a placeholder (`<n:int>`).
    pub ty: Option<Name>,
}

/// One occurrence of a symbol in pattern text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Leaf {
    pub symbol: SymbolId,
    /// Byte offset of the token in the pattern text.
    pub offset: u32,
}

/// A sequence item.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Element {
    Symbol(LeafId),
    /// `[body]`: zero or one occurrence.
    Optional(SeqId),
    /// `body...`: one or more occurrences.
    Repeated(SeqId),
    /// `(a | b)`: exactly one of the alternatives.
    Choice(AltId),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct PoolRange {
    start: u32,
    len: u32,
}

impl PoolRange {
    fn as_range(self) -> std::ops::Range<usize> {
        self.start as usize..(self.start + self.len) as usize
    }
}

/// Ordered list of elements.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sequence {
    elements: PoolRange,
    nullable: bool,
    end: u32,
}

impl Sequence {
    /// Whether the sequence can match zero tokens. Computed when the
    /// sequence is added, from its elements.
    #[inline]
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Pattern-internal offset marking the end of the sequence. For a root
    /// sequence this tags the pattern's terminal position.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.len == 0
    }
}

/// Set of alternative sequences.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Alternation {
    alternatives: PoolRange,
}

impl Alternation {
    #[inline]
    pub fn len(&self) -> usize {
        self.alternatives.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alternatives.len == 0
    }
}

/// Append-only store of pattern trees.
#[derive(Debug, Clone, Default)]
pub struct PatternTree {
    interner: Interner,
    symbols: IndexSet<Symbol>,
    leaves: Vec<Leaf>,
    elements: Vec<Element>,
    sequences: Vec<Sequence>,
    alternatives: Vec<SeqId>,
    alternations: Vec<Alternation>,
}

impl PatternTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    // ─────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────

    /// Add a symbol, returning the existing id for an identical one.
    pub fn add_symbol(&mut self, kind: SymbolKind, name: &str, ty: Option<&str>) -> SymbolId {
        let name = self.interner.intern(name);
        let ty = ty.map(|t| self.interner.intern(t));
        let (index, _) = self.symbols.insert_full(Symbol { kind, name, ty });
        SymbolId::next_of(index)
    }

    pub fn literal(&mut self, text: &str) -> SymbolId {
        self.add_symbol(SymbolKind::Literal, text, None)
    }

    pub fn placeholder(&mut self, name: &str, ty: Option<&str>) -> SymbolId {
        self.add_symbol(SymbolKind::Placeholder, name, ty)
    }

    pub fn add_leaf(&mut self, symbol: SymbolId, offset: u32) -> LeafId {
        self.ensure_symbol(symbol);
        let id = LeafId::next_of(self.leaves.len());
        self.leaves.push(Leaf { symbol, offset });
        id
    }

    /// Add a sequence over `elements`, ending at pattern offset `end`.
    ///
    /// Every id referenced by `elements` must already exist in this tree.
    pub fn add_sequence(&mut self, elements: &[Element], end: u32) -> SeqId {
        let mut nullable = true;
        for &element in elements {
            nullable &= self.element_nullable(element);
        }

        let start = self.elements.len();
        self.elements.extend_from_slice(elements);

        let id = SeqId::next_of(self.sequences.len());
        self.sequences.push(Sequence {
            elements: pool_range(start, elements.len()),
            nullable,
            end,
        });
        id
    }

    /// Add an alternation over already-added sequences.
    ///
    /// # Panics
    /// Panics if `alternatives` is empty: an alternation must offer at least
    /// one branch.
    pub fn add_alternation(&mut self, alternatives: &[SeqId]) -> AltId {
        assert!(
            !alternatives.is_empty(),
            "PatternTree: alternation needs at least one alternative"
        );
        for &seq in alternatives {
            self.ensure_sequence(seq);
        }

        let start = self.alternatives.len();
        self.alternatives.extend_from_slice(alternatives);

        let id = AltId::next_of(self.alternations.len());
        self.alternations.push(Alternation {
            alternatives: pool_range(start, alternatives.len()),
        });
        id
    }

    fn element_nullable(&self, element: Element) -> bool {
        match element {
            Element::Symbol(leaf) => {
                self.ensure_leaf(leaf);
                false
            }
            Element::Optional(seq) => {
                self.ensure_sequence(seq);
                true
            }
            Element::Repeated(seq) => self.ensure_sequence(seq).nullable,
            Element::Choice(alt) => self
                .alternatives(alt)
                .iter()
                .any(|&seq| self.sequences[seq.index()].nullable),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────

    #[inline]
    pub fn sequence(&self, id: SeqId) -> &Sequence {
        self.ensure_sequence(id)
    }

    #[inline]
    pub fn alternation(&self, id: AltId) -> &Alternation {
        self.ensure_alternation(id)
    }

    #[inline]
    pub fn leaf(&self, id: LeafId) -> Leaf {
        *self.ensure_leaf(id)
    }

    #[inline]
    pub fn symbol(&self, id: SymbolId) -> Symbol {
        *self.ensure_symbol(id)
    }

    pub fn elements(&self, seq: SeqId) -> &[Element] {
        &self.elements[self.ensure_sequence(seq).elements.as_range()]
    }

    /// Element `index` of `seq`.
    pub fn element(&self, seq: SeqId, index: usize) -> Element {
        let elements = self.elements(seq);
        *elements.get(index).unwrap_or_else(|| {
            panic!(
                "PatternTree: element {index} out of range for {seq} (len {})",
                elements.len()
            )
        })
    }

    pub fn alternatives(&self, alt: AltId) -> &[SeqId] {
        &self.alternatives[self.ensure_alternation(alt).alternatives.as_range()]
    }

    /// Alternative `index` of `alt`.
    pub fn alternative(&self, alt: AltId, index: usize) -> SeqId {
        let alternatives = self.alternatives(alt);
        *alternatives.get(index).unwrap_or_else(|| {
            panic!(
                "PatternTree: alternative {index} out of range for {alt} (len {})",
                alternatives.len()
            )
        })
    }

    /// Human-readable form of a symbol: `add`, `<file>`, `<n:int>`.
    pub fn symbol_label(&self, id: SymbolId) -> String {
        let symbol = self.symbol(id);
        let name = self.interner.resolve(symbol.name);
        match (symbol.kind, symbol.ty) {
            (SymbolKind::Literal, _) => name.to_owned(),
            (SymbolKind::Placeholder, None) => format!("<{name}>"),
            (SymbolKind::Placeholder, Some(ty)) => {
                format!("<{name}:{}>", self.interner.resolve(ty))
            }
        }
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    pub fn alternation_count(&self) -> usize {
        self.alternations.len()
    }

    pub(crate) fn symbols(&self) -> &IndexSet<Symbol> {
        &self.symbols
    }

    pub(crate) fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    pub(crate) fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub(crate) fn alternations(&self) -> &[Alternation] {
        &self.alternations
    }
}

fn pool_range(start: usize, len: usize) -> PoolRange {
    let start = u32::try_from(start).expect("PatternTree pool exceeds u32 range");
    let len = u32::try_from(len).expect("PatternTree list exceeds u32 range");
    PoolRange { start, len }
}
