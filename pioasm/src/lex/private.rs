use std::str::Chars;

use super::{LineIndex, Span, Token, TokenKind};

#[derive(Debug)]
pub struct Lexer<'a> {
    src: &'a str,
    chars: Chars<'a>,
    lines: LineIndex,
    start: u32,
    pos: u32,
    after_eol: bool,
    done: bool,
}

const EOF_CHAR: char = '\0';

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.chars(),
            lines: LineIndex::default(),
            start: 0,
            pos: 0,
            // a leading end of line is never emitted
            after_eol: true,
            done: false,
        }
    }
    pub fn src(&self) -> &'a str {
        self.src
    }
    /// Maps a byte offset to its `(line, column)`.
    ///
    /// Only newlines already consumed are known, which always covers every
    /// token handed out so far.
    pub fn position(&self, offset: u32) -> (u32, u32) {
        self.lines.position(offset)
    }
    pub(super) fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }
    pub(super) fn rest(&self) -> &'a str {
        self.chars.as_str()
    }
    pub(super) fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.lines.push(self.pos);
        }
        self.pos += ch.len_utf8() as u32;
        Some(ch)
    }
    /// Skips `len` bytes that are known not to contain a newline.
    pub(super) fn skip(&mut self, len: usize) {
        self.chars = self.chars.as_str()[len..].chars();
        self.pos += len as u32;
    }
    pub(super) fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }
    pub(super) fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }
    pub(super) fn pos(&self) -> u32 {
        self.pos
    }
    pub(super) fn start(&self) -> u32 {
        self.start
    }
    /// Drops everything consumed since the last token.
    pub(super) fn ignore(&mut self) {
        self.start = self.pos;
    }
    pub(super) fn finish(&mut self) {
        self.done = true;
    }
    pub(super) fn is_done(&self) -> bool {
        self.done
    }
    /// Cuts the next token, or `None` when it is a collapsed end of line.
    pub(super) fn emit(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        let span = Span::new(self.start, self.pos);
        self.start = self.pos;
        let collapsed = kind == TokenKind::Eol && self.after_eol;
        self.after_eol = kind == TokenKind::Eol;
        if collapsed {
            return None;
        }
        Some(Token {
            kind,
            text: span.slice(self.src),
            span,
        })
    }
}
