//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Every command accepts every flag, with the ones it ignores hidden from
//! `--help`, so switching `dump` to `trace` never breaks a command line.

use clap::Command;

use super::args::*;

/// Add hidden dump args (for commands that don't dump).
fn with_hidden_dump_args(cmd: Command) -> Command {
    cmd.arg(format_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("clasp")
        .about("Compile CLI argument patterns into position automata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
}

/// Validate patterns.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate patterns")
        .override_usage(
            "\
  clasp check <FILE>
  clasp check -p <TEXT> [-p <TEXT>]...",
        )
        .after_help(
            r#"EXAMPLES:
  clasp check git.pat                       # pattern file
  clasp check -p 'add [-f] <file>...'       # inline pattern
  cat git.pat | clasp check -               # stdin"#,
        )
        .arg(patterns_path_arg())
        .arg(pattern_text_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_trace_args(with_hidden_dump_args(cmd))
}

/// Show the compiled automaton.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled position automaton")
        .override_usage(
            "\
  clasp dump <FILE> [--format <FORMAT>]
  clasp dump -p <TEXT> [-p <TEXT>]...",
        )
        .after_help(
            r#"EXAMPLES:
  clasp dump git.pat                        # text dump
  clasp dump git.pat --format json          # machine-readable
  clasp dump -p 'add <file>' -p 'rm <file>' # several inline patterns"#,
        )
        .arg(patterns_path_arg())
        .arg(pattern_text_arg())
        .arg(format_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_trace_args(cmd)
}

/// Trace automaton construction.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace automaton construction for debugging")
        .override_usage(
            "\
  clasp trace <FILE> [-v | -vv]
  clasp trace -p <TEXT> [-v | -vv]",
        )
        .after_help(
            r#"EXAMPLES:
  clasp trace -p '[a]...'                   # positions and starts
  clasp trace -p '[a]...' -v                # plus followpos edges
  clasp trace git.pat -vv                   # plus frame enter/unwind"#,
        )
        .arg(patterns_path_arg())
        .arg(pattern_text_arg())
        .arg(color_arg())
        .arg(verbose_arg());

    // Hidden unified flags
    with_hidden_dump_args(cmd)
}
