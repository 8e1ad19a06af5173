use ahash::AHashMap;
use string_interner::DefaultSymbol;

use crate::{Define, File};

type Scope = AHashMap<DefaultSymbol, usize>;

/// Where a define lives inside the [`File`] being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefineRef {
    program: Option<usize>,
    index: usize,
}

impl DefineRef {
    pub fn get(self, file: &File) -> &Define {
        match self.program {
            None => &file.defines[self.index],
            Some(p) => &file.programs[p].defines[self.index],
        }
    }
    pub fn get_mut(self, file: &mut File) -> &mut Define {
        match self.program {
            None => &mut file.defines[self.index],
            Some(p) => &mut file.programs[p].defines[self.index],
        }
    }
}

/// The global scope and one scope per program.
///
/// Program scopes only ever see their own names and the global ones.
#[derive(Debug, Default)]
pub struct Scopes {
    global: Scope,
    programs: AHashMap<DefaultSymbol, usize>,
    locals: Vec<Scope>,
    current: Option<usize>,
}

impl Scopes {
    pub fn lookup(&self, name: DefaultSymbol) -> Option<DefineRef> {
        if let Some(&index) = self.global.get(&name) {
            return Some(DefineRef {
                program: None,
                index,
            });
        }
        let program = self.current?;
        self.locals[program]
            .get(&name)
            .map(|&index| DefineRef {
                program: Some(program),
                index,
            })
    }
    pub fn is_visible(&self, name: DefaultSymbol) -> bool {
        self.lookup(name).is_some()
    }
    /// Index of the program new defines are attached to.
    pub fn current(&self) -> Option<usize> {
        self.current
    }
    /// Registers `name` in the current scope, or `None` if it is already visible.
    pub fn declare(&mut self, name: DefaultSymbol, index: usize) -> Option<DefineRef> {
        if self.is_visible(name) {
            return None;
        }
        let scope = match self.current {
            Some(p) => &mut self.locals[p],
            None => &mut self.global,
        };
        scope.insert(name, index);
        Some(DefineRef {
            program: self.current,
            index,
        })
    }
    /// Opens a new program scope and makes it current, or `None` if the
    /// name is taken.
    pub fn open_program(&mut self, name: DefaultSymbol) -> Option<usize> {
        if self.programs.contains_key(&name) {
            return None;
        }
        let index = self.locals.len();
        self.programs.insert(name, index);
        self.locals.push(Scope::default());
        self.current = Some(index);
        Some(index)
    }
}
