use crate::parse::{Error, ErrorKind};

#[cfg(test)]
mod test;

mod private;

pub use private::Lexer;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl std::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {:?} {:?}", self.kind, self.span, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Eol,
    Number,
    Symbol,
    /// A symbol directly followed by `:`, the colon included.
    Label,
    Directive(Directive),
    Instruction(Instruction),
    Qualifier(Qualifier),
    Comma,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Plus,
    Minus,
    Star,
    Slash,
    Ampersand,
    Pipe,
    Caret,
    Bang,
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Define,
    Program,
    Origin,
    SideSet,
    WrapTarget,
    Wrap,
    LangOpt,
    Word,
}

impl Directive {
    fn from_name(name: &str) -> Option<Self> {
        use Directive::*;
        Some(match name {
            "define" => Define,
            "program" => Program,
            "origin" => Origin,
            "side_set" => SideSet,
            "wrap_target" => WrapTarget,
            "wrap" => Wrap,
            "lang_opt" => LangOpt,
            "word" => Word,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Jmp,
    Wait,
    In,
    Out,
    Push,
    Pull,
    Mov,
    Irq,
    Set,
    Nop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Public,
    Optional,
    Side,
    Pin,
    Gpio,
    Osre,
}

/// Case insensitive words, tried in order at every token start.
const KEYWORDS: &[(&str, TokenKind)] = {
    use Instruction::*;
    use Qualifier::*;
    use TokenKind::{Instruction as I, Qualifier as Q};
    &[
        ("jmp", I(Jmp)),
        ("wait", I(Wait)),
        ("in", I(In)),
        ("out", I(Out)),
        ("push", I(Push)),
        ("pull", I(Pull)),
        ("mov", I(Mov)),
        ("irq", I(Irq)),
        ("set", I(Set)),
        ("nop", I(Nop)),
        ("public", Q(Public)),
        ("optional", Q(Optional)),
        ("opt", Q(Optional)),
        ("side", Q(Side)),
        ("sideset", Q(Side)),
        ("side_set", Q(Side)),
        ("pin", Q(Pin)),
        ("gpio", Q(Gpio)),
        ("osre", Q(Osre)),
    ]
};

#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    // NOTE: 'from' must come before 'to' for proper ordering
    pub from: u32,
    pub to: u32,
}

impl std::fmt::Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

impl Span {
    pub fn slice(self, src: &str) -> &str {
        &src[self.from as usize..self.to as usize]
    }
    pub fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }
}

/// Byte offsets of every newline seen, in increasing order.
#[derive(Debug, Default, Clone)]
pub struct LineIndex {
    newlines: Vec<u32>,
}

impl LineIndex {
    fn push(&mut self, offset: u32) {
        if self.newlines.last().map_or(true, |&last| last < offset) {
            self.newlines.push(offset);
        }
    }
    /// Returns the 1-based `(line, column)` of `offset`.
    ///
    /// The column is measured from the preceding newline itself, with one
    /// added whenever that newline sits at offset zero or there is none.
    /// A newline belongs to the line it terminates.
    pub fn position(&self, offset: u32) -> (u32, u32) {
        let line = self.newlines.partition_point(|&nl| nl < offset);
        let line_start = match line {
            0 => 0,
            n => self.newlines[n - 1],
        };
        let mut column = offset - line_start;
        if line_start == 0 {
            column += 1;
        }
        (line as u32 + 1, column)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        loop {
            match self.advance() {
                Ok(Some(token)) => {
                    if token.kind == TokenKind::Eof {
                        self.finish();
                    }
                    return Some(Ok(token));
                }
                Ok(None) => (),
                Err(err) => {
                    self.finish();
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<'a> Lexer<'a> {
    /// Runs one step of the state machine, yielding a token when one is cut.
    fn advance(&mut self) -> Result<Option<Token<'a>>, Error> {
        if let Some(kind) = self.keyword() {
            return Ok(self.emit(kind));
        }
        let Some(ch) = self.bump() else {
            return Ok(self.emit(TokenKind::Eof));
        };
        use TokenKind::*;
        let kind = match ch {
            '\n' => Eol,
            ';' => return Ok(self.comment()),
            '/' if self.first() == '/' => return Ok(self.comment()),
            _ if is_blank(ch) => {
                self.ignore();
                return Ok(None);
            }
            _ if is_symbol_start(ch) => self.symbol_or_label(),
            '.' => return Ok(self.directive()),
            '0'..='9' => self.number()?,
            '[' => OpenBracket,
            ']' => CloseBracket,
            '(' => OpenParen,
            ')' => CloseParen,
            '+' => Plus,
            '-' => Minus,
            '*' => Star,
            '/' => Slash,
            '&' => Ampersand,
            '|' => Pipe,
            '^' => Caret,
            '!' => Bang,
            '=' => Equal,
            ',' => Comma,
            _ => return Err(Error::new(ErrorKind::UnexpectedChar(ch), self.start())),
        };
        Ok(self.emit(kind))
    }

    fn keyword(&mut self) -> Option<TokenKind> {
        let rest = self.rest();
        let (word, kind) = KEYWORDS.iter().copied().find(|(word, _)| {
            rest.get(..word.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(word))
                && rest[word.len()..].chars().next().map_or(true, is_word_end)
        })?;
        self.skip(word.len());
        Some(kind)
    }

    fn comment(&mut self) -> Option<Token<'a>> {
        self.eat_while(|ch| ch != '\n');
        self.ignore();
        None
    }

    fn symbol_or_label(&mut self) -> TokenKind {
        self.eat_while(is_symbol_continue);
        if self.first() == ':' {
            self.bump();
            TokenKind::Label
        } else {
            TokenKind::Symbol
        }
    }

    fn directive(&mut self) -> Option<Token<'a>> {
        let name_start = self.pos();
        self.eat_while(is_symbol_start);
        let name = &self.src()[name_start as usize..self.pos() as usize];
        match Directive::from_name(name) {
            Some(directive) => self.emit(TokenKind::Directive(directive)),
            None => {
                tracing::trace!(directive = %name, "skipping unknown directive");
                self.ignore();
                None
            }
        }
    }

    fn number(&mut self) -> Result<TokenKind, Error> {
        self.eat_while(|ch| ch.is_ascii_digit());
        if is_symbol_start(self.first()) {
            self.bump();
            return Err(Error::new(ErrorKind::MalformedNumber, self.start()));
        }
        Ok(TokenKind::Number)
    }
}

/// Folds a run of decimal digits, wrapping at 32 bits.
pub fn parse_number(digits: &str) -> i32 {
    digits.bytes().fold(0i32, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(i32::from(b - b'0'))
    })
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r')
}
fn is_word_end(ch: char) -> bool {
    is_blank(ch) || ch == '\n'
}
fn is_symbol_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
fn is_symbol_continue(ch: char) -> bool {
    is_symbol_start(ch) || ch.is_numeric() || ch == '.'
}
