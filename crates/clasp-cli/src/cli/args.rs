//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! This allows the same arg definition to be reused across commands with
//! different visibility settings (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern file (positional).
pub fn patterns_path_arg() -> Arg {
    Arg::new("patterns_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Pattern file, one pattern per line (use \"-\" for stdin)")
}

/// Inline pattern text (-p/--pattern), repeatable.
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .short('p')
        .long("pattern")
        .value_name("TEXT")
        .action(ArgAction::Append)
        .help("Inline pattern text (repeatable)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format (text, json)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for edges, -vv for frames)")
}
