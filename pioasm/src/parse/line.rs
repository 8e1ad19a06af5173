use crate::lex::{Token, TokenKind};

use super::{Error, ErrorKind};

/// The tokens of one logical line, read once from left to right.
#[derive(Debug)]
pub struct Line<'a> {
    tokens: Vec<Token<'a>>,
    cursor: usize,
    /// The end of line or end of file that closed this line.
    end: Token<'a>,
}

impl<'a> Line<'a> {
    pub fn new(tokens: Vec<Token<'a>>, end: Token<'a>) -> Self {
        Self {
            tokens,
            cursor: 0,
            end,
        }
    }
    /// The next token, or the line's terminator once exhausted.
    pub fn peek(&self) -> Token<'a> {
        self.tokens.get(self.cursor).copied().unwrap_or(self.end)
    }
    pub fn bump(&mut self) -> Token<'a> {
        let token = self.peek();
        self.cursor = (self.cursor + 1).min(self.tokens.len());
        token
    }
    pub fn bump_if(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        (self.peek().kind == kind).then(|| self.bump())
    }
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.tokens.len()
    }
    /// Fails on the first token left unread.
    pub fn finish(self) -> Result<(), Error> {
        match self.is_empty() {
            true => Ok(()),
            false => Err(Error::new(ErrorKind::TrailingToken, self.peek().span.from)),
        }
    }
}
