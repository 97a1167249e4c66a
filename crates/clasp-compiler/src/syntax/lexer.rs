//! Lexer for pattern text.
//!
//! Produces span-based tokens without storing text. Text is sliced from the
//! source only when needed.
//!
//! ## Error handling
//!
//! Consecutive characters no token accepts are coalesced into a single
//! `Garbage` token rather than one error per character, so the parser can
//! report the whole fragment at once.
//!
//! ## Repetition suffix
//!
//! Words may contain dots (`a.txt`), so a word greedily swallows trailing
//! dots. `lex` splits a trailing `...` back off into an `Ellipsis` token:
//! `file...` lexes as `file` followed by `...`.

use logos::Logos;

/// Byte range in pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn empty(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("|")]
    Pipe,

    /// Repetition suffix: `<file>...`
    #[token("...")]
    Ellipsis,

    /// `<name>` or `<name:type>`
    #[regex(r"<[A-Za-z_][A-Za-z0-9_\-]*(:[A-Za-z_][A-Za-z0-9_]*)?>")]
    Placeholder,

    /// Literal argument text: `add`, `-v`, `--force`, `--out=json`, `a.txt`.
    #[regex(r"[A-Za-z0-9_\-+=@%,/:][A-Za-z0-9_\-+=@%,/:.]*")]
    Word,

    /// Coalesced unrecognized characters. Never produced by logos directly.
    Garbage,
}

impl TokenKind {
    /// Display form used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::BracketOpen => "`[`",
            TokenKind::BracketClose => "`]`",
            TokenKind::ParenOpen => "`(`",
            TokenKind::ParenClose => "`)`",
            TokenKind::Pipe => "`|`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Placeholder => "placeholder",
            TokenKind::Word => "word",
            TokenKind::Garbage => "unrecognized text",
        }
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes pattern text.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, (start..end).into()));
                }
                push_token(&mut tokens, kind, lexer.span(), lexer.slice());
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, (start..source.len()).into()));
                }
                break;
            }
        }
    }

    tokens
}

fn push_token(
    tokens: &mut Vec<Token>,
    kind: TokenKind,
    span: std::ops::Range<usize>,
    text: &str,
) {
    const ELLIPSIS: &str = "...";

    if kind == TokenKind::Word && text.len() > ELLIPSIS.len() && text.ends_with(ELLIPSIS) {
        let split = span.end - ELLIPSIS.len();
        tokens.push(Token::new(TokenKind::Word, (span.start..split).into()));
        tokens.push(Token::new(TokenKind::Ellipsis, (split..span.end).into()));
        return;
    }

    tokens.push(Token::new(kind, span.into()));
}

/// Text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.range()]
}
