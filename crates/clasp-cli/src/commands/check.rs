use super::run_common::{PatternInput, prepare_patterns};

pub struct CheckArgs {
    pub input: PatternInput,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let builder = prepare_patterns(&args.input, args.color);

    // Compiling runs the structural checks in debug builds.
    builder.build();

    // Silent on success (like cargo check)
}
