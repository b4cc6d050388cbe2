//! Pre-interned built-in function names.
//!
//! Interned once at `Interpreter` construction so call dispatch compares
//! `Name`s (`u32 == u32`) instead of looking up strings.

use tally_ir::{Name, StringInterner};

use crate::builtins::Builtin;

#[derive(Clone, Copy)]
pub(crate) struct BuiltinNames {
    entries: [(Name, Builtin); Builtin::ALL.len()],
}

impl BuiltinNames {
    pub(crate) fn new(interner: &StringInterner) -> Self {
        Self {
            entries: Builtin::ALL.map(|builtin| (interner.intern(builtin.name()), builtin)),
        }
    }

    /// The built-in called `name`, if any.
    #[inline]
    pub(crate) fn resolve(&self, name: Name) -> Option<Builtin> {
        self.entries
            .iter()
            .find_map(|&(candidate, builtin)| (candidate == name).then_some(builtin))
    }
}
