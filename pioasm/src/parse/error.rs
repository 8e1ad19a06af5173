use std::fmt;

/// An error raised somewhere in the pipeline, positioned by byte offset.
///
/// It is turned into a [`CompileError`] once, when compilation aborts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub at: u32,
}

impl Error {
    pub fn new(kind: ErrorKind, at: u32) -> Self {
        Self { kind, at }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedNumber,
    UnexpectedChar(char),
    UnexpectedItem,
    ProgramSyntax,
    DefineSyntax,
    ExpressionSyntax,
    UnclosedParen,
    TrailingToken,
    UnknownIdentifier(String),
    DuplicateDefine(String),
    DuplicateProgram(String),
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Lexical,
    Syntax,
    UnknownIdentifier,
    DuplicateDefinition,
    DuplicateProgram,
    Arithmetic,
}

impl ErrorKind {
    pub fn class(&self) -> ErrorClass {
        use ErrorKind::*;
        match self {
            MalformedNumber | UnexpectedChar(_) => ErrorClass::Lexical,
            UnexpectedItem | ProgramSyntax | DefineSyntax | ExpressionSyntax | UnclosedParen
            | TrailingToken => ErrorClass::Syntax,
            UnknownIdentifier(_) => ErrorClass::UnknownIdentifier,
            DuplicateDefine(_) => ErrorClass::DuplicateDefinition,
            DuplicateProgram(_) => ErrorClass::DuplicateProgram,
            DivisionByZero => ErrorClass::Arithmetic,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        match self {
            MalformedNumber => write!(f, "malformed number literal"),
            UnexpectedChar(ch) => write!(f, "unexpected character {ch:?}"),
            UnexpectedItem => write!(f, "expected `.program` or `.define`"),
            ProgramSyntax => write!(f, "syntax error near `.program`"),
            DefineSyntax => write!(f, "syntax error near `.define`"),
            ExpressionSyntax => write!(f, "syntax error in expression"),
            UnclosedParen => write!(f, "expected `)`"),
            TrailingToken => write!(f, "unexpected token at end of line"),
            UnknownIdentifier(name) => write!(f, "unknown identifier `{name}`"),
            DuplicateDefine(name) => write!(f, "symbol `{name}` already defined"),
            DuplicateProgram(name) => write!(f, "program `{name}` already exists"),
            DivisionByZero => write!(f, "division by zero"),
        }
    }
}

/// The single error a failed compilation reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub kind: ErrorKind,
    /// 1-based
    pub line: u32,
    /// 1-based
    pub column: u32,
}

impl CompileError {
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}:{}", self.kind, self.line, self.column)
    }
}

impl std::error::Error for CompileError {}
