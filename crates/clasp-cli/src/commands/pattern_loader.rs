//! Reads patterns from a pattern file, stdin, and `-p` flags.
//!
//! Pattern file format, one pattern per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! add: add [-f | --force] <file>...
//! rm [-r] <path>...
//! ```
//!
//! `name: pattern` names a pattern; a bare line is named by its own text.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Where a file pattern sits, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// 1-based.
    pub line: usize,
    /// Byte offset of the pattern text within `line_text`.
    pub column: usize,
    pub line_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSource {
    pub name: String,
    pub text: String,
    /// `None` for inline patterns.
    pub location: Option<Location>,
}

pub fn load_patterns(
    patterns_path: Option<&Path>,
    pattern_text: &[String],
) -> Result<Vec<PatternSource>, String> {
    if patterns_path.is_none() && pattern_text.is_empty() {
        return Err("patterns are required: use positional argument or -p/--pattern".to_string());
    }

    let mut patterns = Vec::new();

    if let Some(path) = patterns_path {
        let (origin, content) = if path.as_os_str() == "-" {
            ("<stdin>".to_string(), load_stdin()?)
        } else {
            (path.display().to_string(), load_file(path)?)
        };
        patterns.extend(parse_pattern_file(&origin, &content));
    }

    patterns.extend(pattern_text.iter().map(|text| PatternSource {
        name: text.clone(),
        text: text.clone(),
        location: None,
    }));

    Ok(patterns)
}

pub fn parse_pattern_file(origin: &str, content: &str) -> Vec<PatternSource> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }

            let indent = raw.len() - raw.trim_start().len();
            let (name, text, skip) = split_name(line);
            Some(PatternSource {
                name: name.to_string(),
                text: text.to_string(),
                location: Some(Location {
                    path: origin.to_string(),
                    line: i + 1,
                    column: indent + skip,
                    line_text: raw.to_string(),
                }),
            })
        })
        .collect()
}

/// Split `name: pattern` into name, pattern text and the prefix length.
fn split_name(line: &str) -> (&str, &str, usize) {
    if let Some((name, text)) = line.split_once(": ")
        && is_identifier(name)
    {
        return (name, text, name.len() + 2);
    }
    // `name:` alone names the empty pattern.
    if let Some(name) = line.strip_suffix(':')
        && is_identifier(name)
    {
        return (name, "", line.len());
    }
    (line, line, 0)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}
