//! Position automaton construction (Glushkov-style).
//!
//! Every symbol occurrence in a pattern becomes one position. For each
//! subexpression the compiler computes `(firstpos, lastpos, nullable)` and
//! wires followpos edges wherever one subexpression may be followed by
//! another. A final terminal position per pattern marks acceptance.
//!
//! # Traversal
//!
//! The tree is walked without native recursion. One frame is *current*; the
//! suspended parents live on an explicit stack, so the maximum nesting depth
//! is a number the caller can inspect (`max_depth`) instead of a limit of the
//! thread's call stack.
//!
//! ```text
//!             ┌──────────────┐ symbol: fold in place
//!             ▼              │
//!   ──▶ SeqEnter ────────▶ SeqAdvance ──(elements left)──▶ SeqEnter
//!        │   │                 │
//!        │   │ [x] / x...      └──(done)──▶ Unwind ──(stack empty)──▶ Finalize
//!        │   └──push──▶ SeqEnter (body)        │
//!        │ (a | b)                             ├──(parent seq)──▶ SeqAdvance
//!        └──push──▶ AltEnter ──push──▶ SeqEnter (branch)
//!                     ▲                        └──(parent alt)──▶ AltAdvance
//!                     └───────────────────────────────────────────────┘
//! ```

use clasp_core::{AltId, Element, LeafId, PatternId, PatternTree, PositionId, SeqId, SymbolId};

use super::arena::{PosSet, PositionSetArena};
use super::automaton::{AutomatonSink, Position};
use super::invariants;
use super::trace::{NoopTracer, Tracer};

/// Result of compiling one subexpression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Subexpr {
    pub first: PosSet,
    pub last: PosSet,
    pub nullable: bool,
}

impl Subexpr {
    /// Identity of sequence folding: matches the empty token list.
    const EMPTY: Self = Self {
        first: PosSet::EMPTY,
        last: PosSet::EMPTY,
        nullable: true,
    };
}

#[derive(Clone, Copy, Debug)]
struct SeqFrame {
    seq: SeqId,
    /// Element being entered, or the one whose body is being compiled while
    /// this frame is suspended.
    index: usize,
    /// Fold of elements `0..index`.
    acc: Subexpr,
}

#[derive(Clone, Copy, Debug)]
struct AltFrame {
    alt: AltId,
    index: usize,
    /// Union of branches `0..index`. `None` until the first branch finishes.
    acc: Option<Subexpr>,
}

#[derive(Clone, Copy, Debug)]
enum Frame {
    Seq(SeqFrame),
    Alt(AltFrame),
}

impl Frame {
    fn seq(seq: SeqId) -> Self {
        Frame::Seq(SeqFrame {
            seq,
            index: 0,
            acc: Subexpr::EMPTY,
        })
    }

    fn alt(alt: AltId) -> Self {
        Frame::Alt(AltFrame {
            alt,
            index: 0,
            acc: None,
        })
    }
}

#[derive(Clone, Copy, Debug)]
enum State {
    SeqEnter,
    SeqAdvance,
    AltEnter,
    AltAdvance,
    /// The current frame finished with this result.
    Unwind(Subexpr),
    /// The root sequence finished with this result.
    Finalize(Subexpr),
}

/// Compiles patterns from a `PatternTree` into a shared automaton.
///
/// One instance can compile any number of patterns, one call at a time. The
/// frame stack and the position set arena are scratch space: both are
/// cleared at the start of every call and only their capacity carries over.
pub struct Compiler<'a, A: AutomatonSink, T: Tracer = NoopTracer> {
    tree: &'a PatternTree,
    automaton: &'a mut A,
    sets: PositionSetArena,
    /// Suspended parents of the current frame.
    stack: Vec<Frame>,
    max_depth: usize,
    tracer: T,
}

impl<'a, A: AutomatonSink> Compiler<'a, A> {
    pub fn new(tree: &'a PatternTree, automaton: &'a mut A) -> Self {
        Self {
            tree,
            automaton,
            sets: PositionSetArena::new(),
            stack: Vec::new(),
            max_depth: 0,
            tracer: NoopTracer,
        }
    }
}

impl<'a, A: AutomatonSink, T: Tracer> Compiler<'a, A, T> {
    /// Replace the tracer.
    pub fn with_tracer<U: Tracer>(self, tracer: U) -> Compiler<'a, A, U> {
        Compiler {
            tree: self.tree,
            automaton: self.automaton,
            sets: self.sets,
            stack: self.stack,
            max_depth: self.max_depth,
            tracer,
        }
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Deepest frame stack reached by the last `compile` call.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Compile the pattern rooted at `root`, tagging its positions with `pattern`.
    ///
    /// Appends the pattern's positions, its terminal position, its followpos
    /// edges and its start positions to the automaton.
    ///
    /// # Panics
    /// Panics if the tree is inconsistent: a foreign id, an alternation
    /// without branches, or a sequence whose declared `nullable` flag
    /// disagrees with its elements.
    pub fn compile(&mut self, root: SeqId, pattern: PatternId) {
        self.sets.clear();
        self.stack.clear();
        self.max_depth = 0;

        self.tracer.trace_compile(pattern, root);
        self.tracer.trace_enter_sequence(root, 0);

        let mut current = Frame::seq(root);
        let mut state = State::SeqEnter;
        loop {
            state = match state {
                State::SeqEnter => self.seq_enter(&mut current, pattern),
                State::SeqAdvance => self.seq_advance(&mut current),
                State::AltEnter => self.alt_enter(&mut current),
                State::AltAdvance => self.alt_advance(&mut current),
                State::Unwind(child) => self.unwind(&mut current, child),
                State::Finalize(result) => {
                    self.finalize(root, pattern, result);
                    return;
                }
            };
        }
    }

    fn seq_enter(&mut self, current: &mut Frame, pattern: PatternId) -> State {
        let Frame::Seq(frame) = current else {
            invariants::frame_mismatch("SeqEnter")
        };

        if frame.index == self.tree.sequence(frame.seq).len() {
            return self.finish_sequence(*frame);
        }

        match self.tree.element(frame.seq, frame.index) {
            Element::Symbol(leaf) => {
                let sub = self.symbol(leaf, pattern);
                frame.acc = self.concat(frame.acc, sub);
                State::SeqAdvance
            }
            Element::Optional(body) | Element::Repeated(body) => {
                self.suspend(current, Frame::seq(body));
                self.tracer.trace_enter_sequence(body, self.stack.len());
                State::SeqEnter
            }
            Element::Choice(alt) => {
                self.suspend(current, Frame::alt(alt));
                self.tracer.trace_enter_alternation(alt, self.stack.len());
                State::AltEnter
            }
        }
    }

    fn seq_advance(&mut self, current: &mut Frame) -> State {
        let Frame::Seq(frame) = current else {
            invariants::frame_mismatch("SeqAdvance")
        };

        frame.index += 1;
        if frame.index < self.tree.sequence(frame.seq).len() {
            State::SeqEnter
        } else {
            self.finish_sequence(*frame)
        }
    }

    fn finish_sequence(&self, frame: SeqFrame) -> State {
        let declared = self.tree.sequence(frame.seq).nullable();
        invariants::ensure_nullable_matches(frame.seq, frame.acc.nullable, declared);
        State::Unwind(frame.acc)
    }

    fn alt_enter(&mut self, current: &mut Frame) -> State {
        let Frame::Alt(frame) = current else {
            invariants::frame_mismatch("AltEnter")
        };

        if frame.index == self.tree.alternation(frame.alt).len() {
            return State::Unwind(invariants::ensure_alternation_result(frame.alt, frame.acc));
        }

        let branch = self.tree.alternative(frame.alt, frame.index);
        self.suspend(current, Frame::seq(branch));
        self.tracer.trace_enter_sequence(branch, self.stack.len());
        State::SeqEnter
    }

    fn alt_advance(&mut self, current: &mut Frame) -> State {
        let Frame::Alt(frame) = current else {
            invariants::frame_mismatch("AltAdvance")
        };

        frame.index += 1;
        State::AltEnter
    }

    /// Hand the finished current frame's result to its parent.
    fn unwind(&mut self, current: &mut Frame, child: Subexpr) -> State {
        self.tracer.trace_unwind(self.stack.len(), child.nullable);

        let Some(parent) = self.stack.pop() else {
            return State::Finalize(child);
        };
        *current = parent;

        match current {
            Frame::Seq(frame) => {
                let child = match self.tree.element(frame.seq, frame.index) {
                    Element::Optional(_) => Subexpr {
                        nullable: true,
                        ..child
                    },
                    Element::Repeated(_) => {
                        // Loop back: the body may start again right after it ends.
                        self.connect(child.last, child.first);
                        child
                    }
                    Element::Choice(_) => child,
                    Element::Symbol(_) => invariants::symbol_never_suspends(frame.seq, frame.index),
                };
                frame.acc = self.concat(frame.acc, child);
                State::SeqAdvance
            }
            Frame::Alt(frame) => {
                frame.acc = Some(match frame.acc {
                    None => child,
                    Some(acc) => self.alternate(acc, child),
                });
                State::AltAdvance
            }
        }
    }

    fn finalize(&mut self, root: SeqId, pattern: PatternId, result: Subexpr) {
        for &p in self.sets.get(result.first) {
            self.automaton.register_startpos(p);
            self.tracer.trace_startpos(p);
        }

        let end = self.tree.sequence(root).end();
        let terminal = self.create_position(pattern, end, None);
        for &p in self.sets.get(result.last) {
            self.automaton.register_followpos(p, terminal);
            self.tracer.trace_followpos(p, terminal);
        }

        // The empty argument list matches this pattern.
        if result.nullable {
            self.automaton.register_startpos(terminal);
            self.tracer.trace_startpos(terminal);
        }

        self.tracer.trace_finalize(pattern, terminal, self.max_depth);
    }

    fn suspend(&mut self, current: &mut Frame, child: Frame) {
        let parent = std::mem::replace(current, child);
        self.stack.push(parent);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Subexpression algebra
    // ─────────────────────────────────────────────────────────────────────

    fn symbol(&mut self, leaf: LeafId, pattern: PatternId) -> Subexpr {
        let leaf = self.tree.leaf(leaf);
        let p = self.create_position(pattern, leaf.offset, Some(leaf.symbol));
        let set = self.sets.singleton(p);
        Subexpr {
            first: set,
            last: set,
            nullable: false,
        }
    }

    /// `a · b`
    fn concat(&mut self, a: Subexpr, b: Subexpr) -> Subexpr {
        self.connect(a.last, b.first);

        let first = if a.nullable {
            self.sets.union(a.first, b.first)
        } else {
            a.first
        };
        let last = if b.nullable {
            self.sets.union(a.last, b.last)
        } else {
            b.last
        };

        Subexpr {
            first,
            last,
            nullable: a.nullable && b.nullable,
        }
    }

    /// `a | b`
    fn alternate(&mut self, a: Subexpr, b: Subexpr) -> Subexpr {
        Subexpr {
            first: self.sets.union(a.first, b.first),
            last: self.sets.union(a.last, b.last),
            nullable: a.nullable || b.nullable,
        }
    }

    /// followpos edges for the full cross product `from × to`.
    fn connect(&mut self, from: PosSet, to: PosSet) {
        for &f in self.sets.get(from) {
            for &t in self.sets.get(to) {
                self.automaton.register_followpos(f, t);
                self.tracer.trace_followpos(f, t);
            }
        }
    }

    fn create_position(
        &mut self,
        pattern: PatternId,
        offset: u32,
        symbol: Option<SymbolId>,
    ) -> PositionId {
        let id = self.automaton.create_position(pattern, offset, symbol);
        let position = Position {
            pattern,
            offset,
            symbol,
        };
        self.tracer.trace_position(self.tree, id, &position);
        id
    }
}
