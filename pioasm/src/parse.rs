use crate::lex::{Directive, Lexer, Qualifier, Token, TokenKind};
use crate::{Define, File, Program};

use self::line::Line;
use self::scope::Scopes;

pub use self::error::{CompileError, Error, ErrorClass, ErrorKind};

pub mod error;
mod eval;
mod expr;
mod line;
mod scope;


#[derive(Debug, Default, Clone, Copy)]
pub struct CompileOptions {
    /// Accepted for compatibility; defines are always evaluated eagerly.
    pub eval_define: bool,
}

/// Compiles `src` into a [`File`], or the first error encountered.
pub fn compile(src: &str, options: CompileOptions) -> Result<File, CompileError> {
    tracing::debug!(eval_define = options.eval_define, "compiling {} bytes", src.len());
    let mut parser = Parser::new(src);
    match parser.file() {
        Ok(()) => Ok(parser.finish()),
        Err(err) => {
            let (line, column) = parser.lexer.position(err.at);
            let err = CompileError {
                kind: err.kind,
                line,
                column,
            };
            tracing::debug!(%err, "compilation failed");
            Err(err)
        }
    }
}

/// The state of one compilation, dropped once it returns.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    file: File,
    scopes: Scopes,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            lexer: Lexer::new(src),
            file: File::default(),
            scopes: Scopes::default(),
        }
    }
    pub fn finish(self) -> File {
        self.file
    }

    /// Collects the tokens up to the next end of line, or `None` at the end
    /// of the file.
    fn next_line(&mut self) -> Result<Option<Line<'a>>, Error> {
        let mut tokens = Vec::new();
        for token in self.lexer.by_ref() {
            let token = token?;
            match token.kind {
                TokenKind::Eol => return Ok(Some(Line::new(tokens, token))),
                TokenKind::Eof if tokens.is_empty() => return Ok(None),
                TokenKind::Eof => return Ok(Some(Line::new(tokens, token))),
                _ => tokens.push(token),
            }
        }
        Ok(None)
    }

    fn file(&mut self) -> Result<(), Error> {
        while let Some(mut line) = self.next_line()? {
            let first = line.bump();
            tracing::trace!(?first, "line");
            match first.kind {
                TokenKind::Directive(Directive::Program) => self.program(first, line)?,
                TokenKind::Directive(Directive::Define) => self.define(first, line)?,
                _ => return Err(Error::new(ErrorKind::UnexpectedItem, first.span.from)),
            }
        }
        Ok(())
    }

    fn program(&mut self, directive: Token<'a>, mut line: Line<'a>) -> Result<(), Error> {
        let at = directive.span.from;
        let Some(name) = line.bump_if(TokenKind::Symbol) else {
            return Err(Error::new(ErrorKind::ProgramSyntax, at));
        };
        line.finish()?;
        let sym = self.file.si.get_or_intern(name.text);
        let Some(index) = self.scopes.open_program(sym) else {
            return Err(Error::new(
                ErrorKind::DuplicateProgram(name.text.to_owned()),
                at,
            ));
        };
        debug_assert_eq!(index, self.file.programs.len());
        tracing::debug!(program = name.text, "registered program");
        self.file.programs.push(Program::new(sym));
        Ok(())
    }

    fn define(&mut self, directive: Token<'a>, mut line: Line<'a>) -> Result<(), Error> {
        let at = directive.span.from;
        let public = line
            .bump_if(TokenKind::Qualifier(Qualifier::Public))
            .is_some();
        let Some(name) = line.bump_if(TokenKind::Symbol) else {
            return Err(Error::new(ErrorKind::DefineSyntax, at));
        };
        let expr = self.expression(&mut line)?;
        line.finish()?;

        // NOTE: evaluating before declaring keeps a define from seeing itself
        let value = self.eval(&expr, at)?;
        let sym = self.file.si.get_or_intern(name.text);
        let defines = match self.scopes.current() {
            Some(p) => &mut self.file.programs[p].defines,
            None => &mut self.file.defines,
        };
        if self.scopes.declare(sym, defines.len()).is_none() {
            return Err(Error::new(
                ErrorKind::DuplicateDefine(name.text.to_owned()),
                at,
            ));
        }
        tracing::debug!(define = name.text, value, public, "registered define");
        defines.push(Define {
            name: sym,
            public,
            expr,
            value: Some(value),
        });
        Ok(())
    }
}
