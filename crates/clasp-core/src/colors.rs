//! ANSI color codes for terminal output.
//!
//! Three semantic colors with orthogonal dim modifier:
//! - Blue: pattern names, position ids
//! - Green: literal tokens, terminal markers
//! - Dim: offsets, arrows, metadata
//! - Reset: return to default

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes so it reads in light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }
}
