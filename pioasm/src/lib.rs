use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

pub mod lex;
pub mod parse;
pub mod source;

pub use self::parse::{compile, CompileError, CompileOptions, ErrorClass, ErrorKind};
pub use self::source::WriteSource;

pub type Interner = StringInterner<DefaultBackend>;

/// The root of a compiled source file.
#[derive(Debug, Default)]
pub struct File {
    pub si: Interner,
    pub defines: Vec<Define>,
    pub programs: Vec<Program>,
}

impl File {
    pub fn resolve(&self, sym: DefaultSymbol) -> &str {
        self.si.resolve(sym).unwrap_or_default()
    }
    /// Finds a file level define by name.
    pub fn global(&self, name: &str) -> Option<&Define> {
        let sym = self.si.get(name)?;
        self.defines.iter().find(|d| d.name == sym)
    }
    pub fn program(&self, name: &str) -> Option<&Program> {
        let sym = self.si.get(name)?;
        self.programs.iter().find(|p| p.name == sym)
    }
    /// Finds a define declared inside `program`; globals are not searched.
    pub fn local<'p>(&self, program: &'p Program, name: &str) -> Option<&'p Define> {
        let sym = self.si.get(name)?;
        program.defines.iter().find(|d| d.name == sym)
    }
}

#[derive(Debug, Clone)]
pub struct Program {
    pub name: DefaultSymbol,
    pub defines: Vec<Define>,
    // NOTE: both are left empty until an instruction encoder exists
    pub side_set: u8,
    pub instructions: Vec<u16>,
}

impl Program {
    pub fn new(name: DefaultSymbol) -> Self {
        Self {
            name,
            defines: Vec::new(),
            side_set: 0,
            instructions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Define {
    pub name: DefaultSymbol,
    /// Set by the `PUBLIC` qualifier, never rendered back.
    pub public: bool,
    pub expr: Expr,
    pub value: Option<i32>,
}

impl Define {
    pub fn evaluated(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(i32),
    Identifier(DefaultSymbol),
    Binary(Box<Binary>),
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr, parenthesized: bool) -> Self {
        Self::Binary(Box::new(Binary {
            op,
            left,
            right,
            parenthesized,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    pub op: BinOp,
    pub left: Expr,
    pub right: Expr,
    /// Only affects regeneration.
    pub parenthesized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
}

impl BinOp {
    /// Returns `None` on division by zero.
    pub fn apply(self, left: i32, right: i32) -> Option<i32> {
        use BinOp::*;
        Some(match self {
            Add => left.wrapping_add(right),
            Sub => left.wrapping_sub(right),
            Mul => left.wrapping_mul(right),
            Div if right == 0 => return None,
            Div => left.wrapping_div(right),
            And => left & right,
            Or => left | right,
            Xor => left ^ right,
        })
    }
    pub fn as_str(self) -> &'static str {
        use BinOp::*;
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            And => "&",
            Or => "|",
            Xor => "^",
        }
    }
}
