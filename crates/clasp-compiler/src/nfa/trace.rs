//! Tracing hooks for automaton construction.
//!
//! The compiler is generic over a `Tracer`. With `NoopTracer` every hook is
//! an `#[inline(always)]` empty method and the calls vanish from the
//! compiled code, so compile-time instrumentation costs nothing unless asked
//! for. `PrintTracer` collects human-readable lines for the `trace` command
//! and for debugging tests.

use clasp_core::{AltId, Colors, PatternId, PatternTree, PositionId, SeqId};

use super::automaton::Position;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Positions, start marks, completion.
    #[default]
    Default,
    /// (-v): also followpos edges.
    Verbose,
    /// (-vv): also frame enter/unwind with stack depth.
    VeryVerbose,
}

/// Compiler instrumentation.
///
/// `depth` is the number of suspended parent frames at the time of the event.
pub trait Tracer {
    /// Called once per compile call, before anything is emitted.
    fn trace_compile(&mut self, pattern: PatternId, root: SeqId);

    /// Called when a sequence frame becomes current.
    fn trace_enter_sequence(&mut self, seq: SeqId, depth: usize);

    /// Called when an alternation frame becomes current.
    fn trace_enter_alternation(&mut self, alt: AltId, depth: usize);

    /// Called when a finished frame hands its result to its parent.
    fn trace_unwind(&mut self, depth: usize, nullable: bool);

    /// Called after a position is created.
    fn trace_position(&mut self, tree: &PatternTree, id: PositionId, position: &Position);

    /// Called after a followpos edge is registered.
    fn trace_followpos(&mut self, from: PositionId, to: PositionId);

    /// Called after a start position is registered.
    fn trace_startpos(&mut self, id: PositionId);

    /// Called when the pattern is complete.
    fn trace_finalize(&mut self, pattern: PatternId, terminal: PositionId, max_depth: usize);
}

/// Tracer that records nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_compile(&mut self, _pattern: PatternId, _root: SeqId) {}

    #[inline(always)]
    fn trace_enter_sequence(&mut self, _seq: SeqId, _depth: usize) {}

    #[inline(always)]
    fn trace_enter_alternation(&mut self, _alt: AltId, _depth: usize) {}

    #[inline(always)]
    fn trace_unwind(&mut self, _depth: usize, _nullable: bool) {}

    #[inline(always)]
    fn trace_position(&mut self, _tree: &PatternTree, _id: PositionId, _position: &Position) {}

    #[inline(always)]
    fn trace_followpos(&mut self, _from: PositionId, _to: PositionId) {}

    #[inline(always)]
    fn trace_startpos(&mut self, _id: PositionId) {}

    #[inline(always)]
    fn trace_finalize(&mut self, _pattern: PatternId, _terminal: PositionId, _max_depth: usize) {}
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn trace_compile(&mut self, pattern: PatternId, root: SeqId) {
        (**self).trace_compile(pattern, root)
    }

    fn trace_enter_sequence(&mut self, seq: SeqId, depth: usize) {
        (**self).trace_enter_sequence(seq, depth)
    }

    fn trace_enter_alternation(&mut self, alt: AltId, depth: usize) {
        (**self).trace_enter_alternation(alt, depth)
    }

    fn trace_unwind(&mut self, depth: usize, nullable: bool) {
        (**self).trace_unwind(depth, nullable)
    }

    fn trace_position(&mut self, tree: &PatternTree, id: PositionId, position: &Position) {
        (**self).trace_position(tree, id, position)
    }

    fn trace_followpos(&mut self, from: PositionId, to: PositionId) {
        (**self).trace_followpos(from, to)
    }

    fn trace_startpos(&mut self, id: PositionId) {
        (**self).trace_startpos(id)
    }

    fn trace_finalize(&mut self, pattern: PatternId, terminal: PositionId, max_depth: usize) {
        (**self).trace_finalize(pattern, terminal, max_depth)
    }
}

/// Tracer that collects formatted lines.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, one per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn shows(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    fn frame_indent(depth: usize) -> String {
        "  ".repeat(depth + 1)
    }
}

impl Tracer for PrintTracer {
    fn trace_compile(&mut self, pattern: PatternId, root: SeqId) {
        let c = self.colors;
        self.lines
            .push(format!("{}{pattern}{} compile {root}", c.blue, c.reset));
    }

    fn trace_enter_sequence(&mut self, seq: SeqId, depth: usize) {
        if self.shows(Verbosity::VeryVerbose) {
            let c = self.colors;
            let indent = Self::frame_indent(depth);
            self.lines
                .push(format!("{indent}{}enter {seq}{}", c.dim, c.reset));
        }
    }

    fn trace_enter_alternation(&mut self, alt: AltId, depth: usize) {
        if self.shows(Verbosity::VeryVerbose) {
            let c = self.colors;
            let indent = Self::frame_indent(depth);
            self.lines
                .push(format!("{indent}{}enter {alt}{}", c.dim, c.reset));
        }
    }

    fn trace_unwind(&mut self, depth: usize, nullable: bool) {
        if self.shows(Verbosity::VeryVerbose) {
            let c = self.colors;
            let indent = Self::frame_indent(depth);
            let mark = if nullable { " nullable" } else { "" };
            self.lines
                .push(format!("{indent}{}unwind{mark}{}", c.dim, c.reset));
        }
    }

    fn trace_position(&mut self, tree: &PatternTree, id: PositionId, position: &Position) {
        let c = self.colors;
        let label = match position.symbol {
            Some(symbol) => tree.symbol_label(symbol),
            None => "⊤".to_owned(),
        };
        self.lines.push(format!(
            "  new {}{id}{} {}{label}{}{}@{}{}",
            c.blue, c.reset, c.green, c.reset, c.dim, position.offset, c.reset
        ));
    }

    fn trace_followpos(&mut self, from: PositionId, to: PositionId) {
        if self.shows(Verbosity::Verbose) {
            let c = self.colors;
            self.lines
                .push(format!("  edge {from} {}→{} {to}", c.dim, c.reset));
        }
    }

    fn trace_startpos(&mut self, id: PositionId) {
        self.lines.push(format!("  start {id}"));
    }

    fn trace_finalize(&mut self, pattern: PatternId, terminal: PositionId, max_depth: usize) {
        let c = self.colors;
        self.lines.push(format!(
            "{}{pattern}{} done {}(terminal {terminal}, depth {max_depth}){}",
            c.blue, c.reset, c.dim, c.reset
        ));
    }
}
