use crate::types::{role, RuleNode};

use super::error::{ParseError, ParseErrorKind};
use super::lexer::{Token, TokenKind};

const OPERAND: &str = "role name or '('";

/// Recursive-descent parser over a token slice.
///
/// ```text
/// expr     := or_expr
/// or_expr  := and_expr ( "OR" and_expr )*
/// and_expr := not_expr ( "AND" not_expr )*
/// not_expr := "NOT" primary | primary
/// primary  := ROLE | "(" expr ")"
/// ```
///
/// Each `(` group and each `NOT` counts as one nesting level. `AND` and `OR`
/// chains are collected into a single n-ary node, so their length never adds
/// to the depth of the tree or of the recursion.
pub(crate) struct Grammar<'t, 'i> {
    tokens: &'t [Token<'i>],
    pos: usize,
    depth: usize,
    max_depth: usize,
    end: usize,
}

impl<'t, 'i> Grammar<'t, 'i> {
    /// `end` is the byte length of the source, used as the offset of
    /// errors detected at end of input.
    pub(crate) fn new(tokens: &'t [Token<'i>], end: usize, max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
            end,
        }
    }

    pub(crate) fn parse(mut self) -> Result<RuleNode, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::new(ParseErrorKind::Empty, 0));
        }

        let node = self.or_expr()?;
        match self.peek() {
            None => Ok(node),
            Some(tok) => Err(leftover(tok, "end of expression")),
        }
    }

    fn peek(&self) -> Option<Token<'i>> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token<'i>> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn next_is(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn enter(&mut self, offset: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    limit: self.max_depth,
                },
                offset,
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // -- Expressions (precedence: OR < AND < NOT < primary) -----------------

    fn or_expr(&mut self) -> Result<RuleNode, ParseError> {
        let mut node = self.and_expr()?;
        while self.next_is(TokenKind::Or) {
            self.advance();
            node = node.or(self.and_expr()?);
        }
        Ok(node)
    }

    fn and_expr(&mut self) -> Result<RuleNode, ParseError> {
        let mut node = self.not_expr()?;
        while self.next_is(TokenKind::And) {
            self.advance();
            node = node.and(self.not_expr()?);
        }
        Ok(node)
    }

    fn not_expr(&mut self) -> Result<RuleNode, ParseError> {
        if !self.next_is(TokenKind::Not) {
            return self.primary();
        }
        let offset = self.pos_offset();
        self.advance();
        self.enter(offset)?;
        let inner = self.primary()?;
        self.leave();
        Ok(!inner)
    }

    fn primary(&mut self) -> Result<RuleNode, ParseError> {
        match self.advance() {
            None => Err(ParseError::new(
                ParseErrorKind::UnexpectedEnd { expected: OPERAND },
                self.end,
            )),
            Some(tok) => match tok.kind {
                TokenKind::Role => Ok(role(tok.text)),
                TokenKind::LParen => self.group(tok),
                _ => Err(unexpected(tok, OPERAND)),
            },
        }
    }

    fn group(&mut self, open: Token<'i>) -> Result<RuleNode, ParseError> {
        self.enter(open.offset)?;
        if self.next_is(TokenKind::RParen) {
            return Err(ParseError::new(ParseErrorKind::EmptyGroup, open.offset));
        }

        let inner = self.or_expr()?;
        match self.advance() {
            Some(tok) if tok.kind == TokenKind::RParen => {
                self.leave();
                Ok(inner)
            }
            Some(tok) => Err(leftover(tok, "')'")),
            None => Err(ParseError::new(ParseErrorKind::UnclosedParen, open.offset)),
        }
    }

    fn pos_offset(&self) -> usize {
        self.peek().map_or(self.end, |t| t.offset)
    }
}

fn unexpected(tok: Token<'_>, expected: &'static str) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken {
            found: tok.text.to_owned(),
            expected,
        },
        tok.offset,
    )
}

/// Classify a token left over after a complete sub-expression.
fn leftover(tok: Token<'_>, expected: &'static str) -> ParseError {
    let kind = match tok.kind {
        TokenKind::RParen => ParseErrorKind::UnmatchedCloseParen,
        TokenKind::Role | TokenKind::LParen | TokenKind::Not => ParseErrorKind::MissingOperator {
            found: tok.text.to_owned(),
        },
        TokenKind::And | TokenKind::Or => return unexpected(tok, expected),
    };
    ParseError::new(kind, tok.offset)
}
