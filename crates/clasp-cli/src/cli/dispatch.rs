//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use clasp_compiler::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::run_common::PatternInput;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub patterns_path: Option<PathBuf>,
    pub pattern_text: Vec<String>,
    pub color: ColorChoice,
    // Note: format and verbose are parsed but not extracted (unified flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns_path: m.get_one::<PathBuf>("patterns_path").cloned(),
            pattern_text: parse_pattern_text(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: PatternInput {
                patterns_path: p.patterns_path,
                pattern_text: p.pattern_text,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub patterns_path: Option<PathBuf>,
    pub pattern_text: Vec<String>,
    pub format: DumpFormat,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("json") => DumpFormat::Json,
            _ => DumpFormat::Text,
        };

        Self {
            patterns_path: m.get_one::<PathBuf>("patterns_path").cloned(),
            pattern_text: parse_pattern_text(m),
            format,
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: PatternInput {
                patterns_path: p.patterns_path,
                pattern_text: p.pattern_text,
            },
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub patterns_path: Option<PathBuf>,
    pub pattern_text: Vec<String>,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            patterns_path: m.get_one::<PathBuf>("patterns_path").cloned(),
            pattern_text: parse_pattern_text(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            input: PatternInput {
                patterns_path: p.patterns_path,
                pattern_text: p.pattern_text,
            },
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_pattern_text(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("pattern_text")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
