//! Recursive-descent parser from pattern text into a `PatternTree`.
//!
//! ```text
//! pattern     := alternation EOF
//! alternation := sequence ('|' sequence)*
//! sequence    := item*
//! item        := atom '...'?
//! atom        := WORD | PLACEHOLDER | '[' alternation ']' | '(' alternation ')'
//! ```
//!
//! Every sequence records where it ends in the pattern text: the root ends
//! at the end of the text, a branch ends where the `|` or closing bracket
//! after it starts. The compiler places terminal positions at the root's end.
//!
//! Grouping only nests as deep as the nesting limit allows; the compiler
//! itself has no depth limit.

use clasp_core::{Element, PatternTree, SeqId};

use super::error::ParseError;
use super::lexer::{Span, Token, TokenKind, token_text};

/// Nesting limit used unless the caller sets one.
pub const DEFAULT_NESTING_LIMIT: u32 = 256;

/// Parsed item before it is placed into a sequence.
enum Atom {
    Element(Element),
    /// `( ... )`, kept open so `(a b)...` can repeat the branch directly.
    Group(Vec<SeqId>),
}

impl Atom {
    fn into_element(self, tree: &mut PatternTree) -> Element {
        match self {
            Atom::Element(element) => element,
            Atom::Group(branches) => Element::Choice(tree.add_alternation(&branches)),
        }
    }
}

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
    nesting_limit: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            nesting_limit: DEFAULT_NESTING_LIMIT,
        }
    }

    pub fn with_nesting_limit(mut self, limit: u32) -> Self {
        self.nesting_limit = limit;
        self
    }

    /// Parse the whole pattern into `tree`, returning its root sequence.
    ///
    /// On error the tree may hold nodes of the partial parse; nothing
    /// references them.
    pub fn parse(mut self, tree: &mut PatternTree) -> Result<SeqId, ParseError> {
        let len = self.source.len();
        let end = u32::try_from(len).map_err(|_| ParseError::TooLong { len })?;

        let branches = self.alternation(tree)?;
        if let Some(token) = self.peek() {
            return Err(unexpected("end of pattern", token));
        }

        Ok(match branches.as_slice() {
            [only] => *only,
            _ => {
                let alt = tree.add_alternation(&branches);
                tree.add_sequence(&[Element::Choice(alt)], end)
            }
        })
    }

    fn alternation(&mut self, tree: &mut PatternTree) -> Result<Vec<SeqId>, ParseError> {
        let mut branches = Vec::new();
        let mut previous_pipe: Option<Span> = None;

        loop {
            let elements = self.sequence(tree)?;
            let end = self.offset();
            let next_pipe = self.peek().filter(|t| t.kind == TokenKind::Pipe);

            if elements.is_empty()
                && let Some(pipe) = previous_pipe.or(next_pipe.map(|t| t.span))
            {
                return Err(ParseError::EmptyAlternative { span: pipe });
            }
            branches.push(tree.add_sequence(&elements, end));

            let Some(pipe) = next_pipe else {
                return Ok(branches);
            };
            self.bump();
            previous_pipe = Some(pipe.span);
        }
    }

    fn sequence(&mut self, tree: &mut PatternTree) -> Result<Vec<Element>, ParseError> {
        let mut elements = Vec::new();

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Word
                | TokenKind::Placeholder
                | TokenKind::BracketOpen
                | TokenKind::ParenOpen => elements.push(self.item(tree)?),
                TokenKind::Ellipsis => {
                    return Err(ParseError::DanglingEllipsis { span: token.span });
                }
                TokenKind::Garbage => return Err(ParseError::Garbage { span: token.span }),
                TokenKind::Pipe | TokenKind::BracketClose | TokenKind::ParenClose => break,
            }
        }

        Ok(elements)
    }

    fn item(&mut self, tree: &mut PatternTree) -> Result<Element, ParseError> {
        let atom = self.atom(tree)?;

        let Some(ellipsis) = self.eat(TokenKind::Ellipsis) else {
            return Ok(atom.into_element(tree));
        };

        let body = match atom {
            Atom::Group(branches) if branches.len() == 1 => branches[0],
            atom => {
                let element = atom.into_element(tree);
                tree.add_sequence(&[element], ellipsis.span.start)
            }
        };
        Ok(Element::Repeated(body))
    }

    fn atom(&mut self, tree: &mut PatternTree) -> Result<Atom, ParseError> {
        let token = self.bump();
        let text = token_text(self.source, &token);
        let offset = token.span.start;

        match token.kind {
            TokenKind::Word => {
                let symbol = tree.literal(text);
                Ok(Atom::Element(Element::Symbol(tree.add_leaf(symbol, offset))))
            }
            TokenKind::Placeholder => {
                let inner = &text[1..text.len() - 1];
                let (name, ty) = match inner.split_once(':') {
                    Some((name, ty)) => (name, Some(ty)),
                    None => (inner, None),
                };
                let symbol = tree.placeholder(name, ty);
                Ok(Atom::Element(Element::Symbol(tree.add_leaf(symbol, offset))))
            }
            TokenKind::BracketOpen => {
                let (branches, close) = self.group(tree, token, TokenKind::BracketClose, '[')?;
                let body = match branches.as_slice() {
                    [only] => *only,
                    _ => {
                        let alt = tree.add_alternation(&branches);
                        tree.add_sequence(&[Element::Choice(alt)], close.span.start)
                    }
                };
                Ok(Atom::Element(Element::Optional(body)))
            }
            TokenKind::ParenOpen => {
                let (branches, _) = self.group(tree, token, TokenKind::ParenClose, '(')?;
                Ok(Atom::Group(branches))
            }
            _ => Err(unexpected("an item", token)),
        }
    }

    /// Parse a bracketed alternation after its opening token.
    fn group(
        &mut self,
        tree: &mut PatternTree,
        open: Token,
        close_kind: TokenKind,
        open_char: char,
    ) -> Result<(Vec<SeqId>, Token), ParseError> {
        if self.depth >= self.nesting_limit {
            return Err(ParseError::TooDeep {
                limit: self.nesting_limit,
                span: open.span,
            });
        }

        self.depth += 1;
        let branches = self.alternation(tree)?;
        self.depth -= 1;

        let close = match self.peek() {
            Some(token) if token.kind == close_kind => self.bump(),
            Some(token) => return Err(unexpected(close_kind.describe(), token)),
            None => {
                return Err(ParseError::Unclosed {
                    open: open_char,
                    span: open.span,
                });
            }
        };

        if let [only] = branches.as_slice()
            && tree.sequence(*only).is_empty()
        {
            return Err(ParseError::EmptyGroup {
                span: Span::new(open.span.start, close.span.end),
            });
        }

        Ok((branches, close))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Token cursor
    // ─────────────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume the current token. Callers check `peek` first.
    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.peek().filter(|t| t.kind == kind)?;
        self.pos += 1;
        Some(token)
    }

    /// Start of the current token, or the end of the text.
    fn offset(&self) -> u32 {
        self.peek()
            .map_or(self.source.len() as u32, |token| token.span.start)
    }
}

fn unexpected(expected: &'static str, token: Token) -> ParseError {
    ParseError::Unexpected {
        expected,
        found: token.kind.describe(),
        span: token.span,
    }
}
