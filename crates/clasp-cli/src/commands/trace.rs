//! Trace automaton construction for debugging.

use clasp_compiler::{PrintTracer, Verbosity};
use clasp_core::Colors;

use super::run_common::{PatternInput, prepare_patterns};

pub struct TraceArgs {
    pub input: PatternInput,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let builder = prepare_patterns(&args.input, args.color);

    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(args.verbosity, colors);
    let set = builder.build_with_tracer(&mut tracer);

    print!("{}", tracer.dump());
    println!(
        "{}---{} {} patterns, {} positions, {} edges",
        colors.dim,
        colors.reset,
        set.len(),
        set.automaton().len(),
        set.automaton().edge_count()
    );
}
