//! Parse errors and their rendering.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use super::lexer::Span;

/// First error found in a pattern. Parsing stops there.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: &'static str,
        span: Span,
    },

    #[error("unrecognized characters")]
    Garbage { span: Span },

    #[error("unclosed `{open}`")]
    Unclosed { open: char, span: Span },

    #[error("empty group")]
    EmptyGroup { span: Span },

    #[error("empty alternative")]
    EmptyAlternative { span: Span },

    #[error("`...` must follow an item")]
    DanglingEllipsis { span: Span },

    #[error("groups nested deeper than {limit} levels")]
    TooDeep { limit: u32, span: Span },

    #[error("pattern is {len} bytes long; offsets are limited to 32 bits")]
    TooLong { len: usize },
}

impl ParseError {
    /// Where the error points in the pattern text.
    pub fn span(&self) -> Span {
        match *self {
            ParseError::Unexpected { span, .. }
            | ParseError::Garbage { span }
            | ParseError::Unclosed { span, .. }
            | ParseError::EmptyGroup { span }
            | ParseError::EmptyAlternative { span }
            | ParseError::DanglingEllipsis { span }
            | ParseError::TooDeep { span, .. } => span,
            ParseError::TooLong { .. } => Span::empty(0),
        }
    }

    pub fn printer<'e, 's>(&'e self, source: &'s str) -> ParseErrorPrinter<'e, 's> {
        ParseErrorPrinter::new(self, source)
    }
}

/// Builder for rendering a parse error against its pattern text.
pub struct ParseErrorPrinter<'e, 's> {
    error: &'e ParseError,
    source: &'s str,
    path: Option<&'s str>,
    line_start: usize,
    /// Byte offset of the pattern text within `source`.
    offset: usize,
    colored: bool,
}

impl<'e, 's> ParseErrorPrinter<'e, 's> {
    pub fn new(error: &'e ParseError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            line_start: 1,
            offset: 0,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    /// Number shown for the first line of `source`.
    pub fn line_start(mut self, line: usize) -> Self {
        self.line_start = line;
        self
    }

    /// Render against a larger `source` that embeds the pattern at `offset`,
    /// such as a whole `name: pattern` line.
    pub fn embedded_at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.to_string();
        let span = self.error.span().range();
        let span = span.start + self.offset..span.end + self.offset;
        let range = adjust_range(span, self.source.len());

        let mut snippet = Snippet::source(self.source)
            .line_start(self.line_start)
            .annotation(AnnotationKind::Primary.span(range));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.is_empty() {
        return range.start..(range.start + 1).min(limit);
    }
    range
}
