use crate::lex::{self, TokenKind};
use crate::{BinOp, Expr};

use super::line::Line;
use super::{Error, ErrorKind, Parser};

/// Binary precedence levels, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Or,
    Xor,
    And,
    Additive,
    Multiplicative,
}

impl Level {
    fn tighter(self) -> Option<Self> {
        use Level::*;
        match self {
            Or => Some(Xor),
            Xor => Some(And),
            And => Some(Additive),
            Additive => Some(Multiplicative),
            Multiplicative => None,
        }
    }
    fn op(self, kind: TokenKind) -> Option<BinOp> {
        use Level::*;
        use TokenKind::*;
        match (self, kind) {
            (Or, Pipe) => Some(BinOp::Or),
            (Xor, Caret) => Some(BinOp::Xor),
            (And, Ampersand) => Some(BinOp::And),
            (Additive, Plus) => Some(BinOp::Add),
            (Additive, Minus) => Some(BinOp::Sub),
            (Multiplicative, Star) => Some(BinOp::Mul),
            (Multiplicative, Slash) => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl Parser<'_> {
    /// Parses an expression from the rest of `line`.
    pub(super) fn expression(&self, line: &mut Line<'_>) -> Result<Expr, Error> {
        self.binary(line, Level::Or, false)
    }

    /// Parses a left associative chain at `level`.
    ///
    /// Nodes built inside parentheses are marked so they render with them,
    /// except products and quotients, which always render bare.
    fn binary(&self, line: &mut Line<'_>, level: Level, in_parens: bool) -> Result<Expr, Error> {
        let parenthesized = in_parens && level != Level::Multiplicative;
        let mut left = self.operand(line, level, in_parens)?;
        while let Some(op) = level.op(line.peek().kind) {
            line.bump();
            let right = self.operand(line, level, in_parens)?;
            left = Expr::binary(op, left, right, parenthesized);
        }
        Ok(left)
    }

    fn operand(&self, line: &mut Line<'_>, level: Level, in_parens: bool) -> Result<Expr, Error> {
        match level.tighter() {
            Some(tighter) => self.binary(line, tighter, in_parens),
            None => self.primary(line),
        }
    }

    fn primary(&self, line: &mut Line<'_>) -> Result<Expr, Error> {
        let token = line.bump();
        match token.kind {
            TokenKind::Number => Ok(Expr::Literal(lex::parse_number(token.text))),
            TokenKind::Symbol => {
                let declared = self.file.si.get(token.text);
                match declared.filter(|&sym| self.scopes.is_visible(sym)) {
                    Some(sym) => Ok(Expr::Identifier(sym)),
                    None => Err(Error::new(
                        ErrorKind::UnknownIdentifier(token.text.to_owned()),
                        token.span.from,
                    )),
                }
            }
            TokenKind::OpenParen => {
                let inner = self.binary(line, Level::Or, true)?;
                let close = line.bump();
                if close.kind != TokenKind::CloseParen {
                    return Err(Error::new(ErrorKind::UnclosedParen, close.span.from));
                }
                Ok(inner)
            }
            _ => Err(Error::new(ErrorKind::ExpressionSyntax, token.span.from)),
        }
    }
}
