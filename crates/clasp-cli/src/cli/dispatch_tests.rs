//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: every command accepts every other command's flags
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use clasp_compiler::Verbosity;

use super::*;
use crate::cli::commands::{check_command, dump_command, trace_command};
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::trace::TraceArgs;

#[test]
fn check_accepts_dump_and_trace_flags() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from(["check", "git.pat", "--format", "json", "-vv"]);
    assert!(
        result.is_ok(),
        "check should accept unified flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.patterns_path, Some(PathBuf::from("git.pat")));
    assert!(params.pattern_text.is_empty());
}

#[test]
fn dump_accepts_trace_flags() {
    let cmd = dump_command();
    let result = cmd.try_get_matches_from(["dump", "git.pat", "-v"]);
    assert!(
        result.is_ok(),
        "dump should accept trace flags: {:?}",
        result.err()
    );
}

#[test]
fn trace_accepts_dump_flags() {
    let cmd = trace_command();
    let result = cmd.try_get_matches_from(["trace", "git.pat", "--format", "json"]);
    assert!(
        result.is_ok(),
        "trace should accept dump flags: {:?}",
        result.err()
    );
}

#[test]
fn pattern_flag_is_repeatable() {
    let m = dump_command()
        .try_get_matches_from(["dump", "-p", "add <file>", "--pattern", "rm <file>"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.patterns_path, None);
    assert_eq!(params.pattern_text, vec!["add <file>", "rm <file>"]);
}

#[test]
fn dump_format_defaults_to_text() {
    let m = dump_command().try_get_matches_from(["dump", "git.pat"]).unwrap();
    assert_eq!(DumpParams::from_matches(&m).format, DumpFormat::Text);

    let m = dump_command()
        .try_get_matches_from(["dump", "git.pat", "--format", "json"])
        .unwrap();
    let args: DumpArgs = DumpParams::from_matches(&m).into();
    assert_eq!(args.format, DumpFormat::Json);
}

#[test]
fn dump_rejects_unknown_format() {
    let result = dump_command().try_get_matches_from(["dump", "git.pat", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn color_choice_is_parsed() {
    let m = check_command()
        .try_get_matches_from(["check", "git.pat", "--color", "never"])
        .unwrap();
    assert_eq!(CheckParams::from_matches(&m).color, ColorChoice::Never);

    let m = check_command().try_get_matches_from(["check", "git.pat"]).unwrap();
    assert_eq!(CheckParams::from_matches(&m).color, ColorChoice::Auto);
}

#[test]
fn trace_verbosity_levels() {
    let levels = [
        (vec!["trace", "git.pat"], Verbosity::Default),
        (vec!["trace", "git.pat", "-v"], Verbosity::Verbose),
        (vec!["trace", "git.pat", "-vv"], Verbosity::VeryVerbose),
        (vec!["trace", "git.pat", "-vvv"], Verbosity::VeryVerbose),
    ];

    for (argv, expected) in levels {
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        assert_eq!(args.verbosity, expected);
    }
}

#[test]
fn check_help_hides_unified_flags() {
    let mut cmd = check_command();
    let help = cmd.render_help().to_string();

    assert!(!help.contains("--format"), "check help should not show --format");
    assert!(
        !help.contains("Verbosity level"),
        "check help should not show -v description"
    );
}

#[test]
fn dump_help_hides_trace_flags() {
    let mut cmd = dump_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("--format"));
    assert!(
        !help.contains("Verbosity level"),
        "dump help should not show -v description"
    );
}

#[test]
fn trace_help_hides_dump_flags() {
    let mut cmd = trace_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("Verbosity level"));
    assert!(!help.contains("--format"), "trace help should not show --format");
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["clasp"]);
    assert!(result.is_err());
}
