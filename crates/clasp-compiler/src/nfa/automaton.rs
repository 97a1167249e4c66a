//! Position automaton: the sink the compiler writes into.
//!
//! The compiler only needs three mutations (create a position, add a
//! followpos edge, mark a start position), captured by `AutomatonSink`.
//! `Automaton` is the reference implementation used by `PatternSet`, the
//! printer and the CLI.
//!
//! Both are append-only: positions, edges and start marks accumulate across
//! compile calls and are never rewritten or removed.

use std::collections::BTreeSet;

use clasp_core::{PatternId, PositionId, SymbolId};

/// Mutation interface the compiler drives.
pub trait AutomatonSink {
    /// Create a position. `symbol == None` creates the pattern's terminal.
    fn create_position(
        &mut self,
        pattern: PatternId,
        offset: u32,
        symbol: Option<SymbolId>,
    ) -> PositionId;

    /// Record that `to` may immediately follow `from`.
    fn register_followpos(&mut self, from: PositionId, to: PositionId);

    /// Record that a match of the position's pattern may begin at `position`.
    fn register_startpos(&mut self, position: PositionId);
}

/// One automaton state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize)]
pub struct Position {
    pub pattern: PatternId,
    /// Pattern-internal offset (token start, or pattern end for terminals).
    pub offset: u32,
    /// Matched symbol. `None` marks the terminal position.
    pub symbol: Option<SymbolId>,
}

impl Position {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.symbol.is_none()
    }
}

/// Dense position table with a followpos relation and start marks.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Automaton {
    positions: Vec<Position>,
    /// Indexed by `PositionId`. Ordered sets give a deterministic dump and
    /// make re-registering an existing edge a no-op.
    followpos: Vec<BTreeSet<PositionId>>,
    startpos: BTreeSet<PositionId>,
}

impl Automaton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of followpos edges.
    pub fn edge_count(&self) -> usize {
        self.followpos.iter().map(BTreeSet::len).sum()
    }

    /// Get position by id.
    ///
    /// # Panics
    /// Panics if the id was not created by this automaton.
    pub fn position(&self, id: PositionId) -> Position {
        self.positions[id.index()]
    }

    /// All positions with their ids, in creation order.
    pub fn positions(&self) -> impl Iterator<Item = (PositionId, Position)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &p)| (PositionId::next_of(i), p))
    }

    /// Positions of one pattern, in creation order.
    pub fn positions_of(&self, pattern: PatternId) -> impl Iterator<Item = PositionId> + '_ {
        self.positions()
            .filter(move |(_, p)| p.pattern == pattern)
            .map(|(id, _)| id)
    }

    /// Positions that may follow `id`, ascending.
    pub fn followpos(&self, id: PositionId) -> impl Iterator<Item = PositionId> + '_ {
        self.followpos[id.index()].iter().copied()
    }

    pub fn has_edge(&self, from: PositionId, to: PositionId) -> bool {
        self.followpos
            .get(from.index())
            .is_some_and(|succ| succ.contains(&to))
    }

    /// Start positions of every pattern, ascending.
    pub fn startpos(&self) -> impl Iterator<Item = PositionId> + '_ {
        self.startpos.iter().copied()
    }

    pub fn is_start(&self, id: PositionId) -> bool {
        self.startpos.contains(&id)
    }

    /// Start positions of one pattern, ascending.
    pub fn startpos_of(&self, pattern: PatternId) -> impl Iterator<Item = PositionId> + '_ {
        self.startpos()
            .filter(move |&id| self.positions[id.index()].pattern == pattern)
    }

    /// The terminal position of `pattern`, once it has been compiled.
    pub fn terminal_of(&self, pattern: PatternId) -> Option<PositionId> {
        self.positions_of(pattern)
            .find(|&id| self.positions[id.index()].is_terminal())
    }

    pub fn is_terminal(&self, id: PositionId) -> bool {
        self.positions[id.index()].is_terminal()
    }

    /// Distinct pattern ids in order of first appearance.
    pub fn patterns(&self) -> Vec<PatternId> {
        let mut seen = BTreeSet::new();
        self.positions
            .iter()
            .map(|p| p.pattern)
            .filter(|&pattern| seen.insert(pattern))
            .collect()
    }
}

impl AutomatonSink for Automaton {
    fn create_position(
        &mut self,
        pattern: PatternId,
        offset: u32,
        symbol: Option<SymbolId>,
    ) -> PositionId {
        let id = PositionId::next_of(self.positions.len());
        self.positions.push(Position {
            pattern,
            offset,
            symbol,
        });
        self.followpos.push(BTreeSet::new());
        id
    }

    fn register_followpos(&mut self, from: PositionId, to: PositionId) {
        self.ensure_position(to);
        self.ensure_successors_mut(from).insert(to);
    }

    fn register_startpos(&mut self, position: PositionId) {
        self.ensure_position(position);
        self.startpos.insert(position);
    }
}

impl Automaton {
    fn ensure_position(&self, id: PositionId) -> &Position {
        self.positions.get(id.index()).unwrap_or_else(|| {
            panic!(
                "Automaton: position {id} not found ({} positions)",
                self.positions.len()
            )
        })
    }

    fn ensure_successors_mut(&mut self, id: PositionId) -> &mut BTreeSet<PositionId> {
        let len = self.followpos.len();
        self.followpos
            .get_mut(id.index())
            .unwrap_or_else(|| panic!("Automaton: position {id} not found ({len} positions)"))
    }
}
