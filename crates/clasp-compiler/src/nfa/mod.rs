//! Position automaton construction for CLI argument patterns.
//!
//! - `arena`: position sets as ranges into an append-only buffer
//! - `automaton`: the `AutomatonSink` trait and the reference `Automaton`
//! - `builder`: the explicit-stack compiler from pattern tree to automaton
//! - `trace`: compiler instrumentation (`Tracer`, `PrintTracer`)
//! - `dump`: text rendering for snapshots and the CLI
//! - `verify`: debug-only structural checks

mod arena;
mod automaton;
mod builder;
mod dump;
mod invariants;
mod trace;
mod verify;

#[cfg(test)]
mod trace_tests;

pub use arena::{PosSet, PositionSetArena};
pub use automaton::{Automaton, AutomatonSink, Position};
pub use builder::Compiler;
pub use dump::AutomatonPrinter;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use verify::debug_verify;
