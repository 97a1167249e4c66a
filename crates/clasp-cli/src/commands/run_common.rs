//! Shared pattern loading and registration for all commands.

use std::path::PathBuf;

use clasp_compiler::{Error, ParseError, PatternSetBuilder};

use super::pattern_loader::{PatternSource, load_patterns};

pub struct PatternInput {
    pub patterns_path: Option<PathBuf>,
    pub pattern_text: Vec<String>,
}

/// Load and register every pattern. Reports every error, then exits if any.
pub fn prepare_patterns(input: &PatternInput, color: bool) -> PatternSetBuilder {
    let patterns = match load_patterns(input.patterns_path.as_deref(), &input.pattern_text) {
        Ok(patterns) => patterns,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    if patterns.is_empty() {
        eprintln!("error: no patterns found");
        std::process::exit(1);
    }

    let mut builder = PatternSetBuilder::new();
    let mut failed = false;
    for pattern in &patterns {
        if let Err(err) = builder.add(pattern.name.as_str(), &pattern.text) {
            report(pattern, &err, color);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }

    builder
}

fn report(pattern: &PatternSource, err: &Error, color: bool) {
    match err {
        Error::Parse { source, .. } => eprintln!("{}", render_parse_error(pattern, source, color)),
        Error::DuplicatePattern(_) => {
            eprintln!("error: {}", err);
            if let Some(location) = &pattern.location {
                eprintln!(" --> {}:{}", location.path, location.line);
            }
        }
    }
}

fn render_parse_error(pattern: &PatternSource, err: &ParseError, color: bool) -> String {
    match &pattern.location {
        Some(location) => err
            .printer(&location.line_text)
            .path(&location.path)
            .line_start(location.line)
            .embedded_at(location.column)
            .colored(color)
            .render(),
        None => err.printer(&pattern.text).colored(color).render(),
    }
}
