use std::fmt;

use crate::{Binary, Define, Expr, File, Interner, Program};


/// Renders a node back to canonical source.
pub trait WriteSource {
    fn write_source(&self, si: &Interner, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn source<'a>(&'a self, si: &'a Interner) -> Source<'a, Self> {
        Source { node: self, si }
    }
}

/// A node paired with the interner its names resolve in.
pub struct Source<'a, T: ?Sized> {
    node: &'a T,
    si: &'a Interner,
}

impl<T: WriteSource + ?Sized> fmt::Display for Source<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.write_source(self.si, f)
    }
}

impl WriteSource for Expr {
    fn write_source(&self, si: &Interner, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Identifier(name) => f.write_str(si.resolve(*name).unwrap_or_default()),
            Expr::Binary(bin) => bin.write_source(si, f),
        }
    }
}

impl WriteSource for Binary {
    fn write_source(&self, si: &Interner, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, op, right) = (self.left.source(si), self.op.as_str(), self.right.source(si));
        match self.parenthesized {
            true => write!(f, "({left} {op} {right})"),
            false => write!(f, "{left} {op} {right}"),
        }
    }
}

impl WriteSource for Define {
    fn write_source(&self, si: &Interner, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = si.resolve(self.name).unwrap_or_default();
        write!(f, ".define {name} {}", self.expr.source(si))?;
        // bare literals and identifiers carry no value annotation
        if let (Expr::Binary(_), Some(value)) = (&self.expr, self.value) {
            write!(f, " ; = {value}")?;
        }
        Ok(())
    }
}

impl WriteSource for Program {
    fn write_source(&self, si: &Interner, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = si.resolve(self.name).unwrap_or_default();
        writeln!(f, ".program {name}")?;
        for define in &self.defines {
            writeln!(f, "{}", define.source(si))?;
        }
        Ok(())
    }
}

impl WriteSource for File {
    fn write_source(&self, si: &Interner, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for define in &self.defines {
            writeln!(f, "{}", define.source(si))?;
        }
        for program in &self.programs {
            program.write_source(si, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_source(&self.si, f)
    }
}
