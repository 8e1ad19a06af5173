use string_interner::DefaultSymbol;

use crate::Expr;

use super::{Error, ErrorKind, Parser};

impl Parser<'_> {
    /// Folds `expr` to a constant, walking the whole tree every time.
    ///
    /// Errors are positioned at `at`, the directive the expression belongs to.
    pub(super) fn eval(&mut self, expr: &Expr, at: u32) -> Result<i32, Error> {
        match expr {
            Expr::Literal(value) => Ok(*value),
            Expr::Identifier(name) => self.resolve(*name, at),
            Expr::Binary(bin) => {
                let left = self.eval(&bin.left, at)?;
                let right = self.eval(&bin.right, at)?;
                bin.op
                    .apply(left, right)
                    .ok_or(Error::new(ErrorKind::DivisionByZero, at))
            }
        }
    }

    /// Looks a define up, evaluating and caching it on first use.
    fn resolve(&mut self, name: DefaultSymbol, at: u32) -> Result<i32, Error> {
        let Some(define) = self.scopes.lookup(name) else {
            let name = self.file.resolve(name).to_owned();
            return Err(Error::new(ErrorKind::UnknownIdentifier(name), at));
        };
        if let Some(value) = define.get(&self.file).value {
            return Ok(value);
        }
        let expr = define.get(&self.file).expr.clone();
        let value = self.eval(&expr, at)?;
        define.get_mut(&mut self.file).value = Some(value);
        tracing::trace!(name = self.file.resolve(name), value, "evaluated lazily");
        Ok(value)
    }
}
