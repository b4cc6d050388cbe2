//! `InterpreterBuilder` for creating Interpreter instances.

use tally_ir::{ExprArena, StringInterner};

use super::interned_names::BuiltinNames;
use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Output goes to stdout unless a print handler is supplied.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    /// Create a new builder over a parsed program's arena.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            print_handler: None,
        }
    }

    /// Set where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            builtin_names: BuiltinNames::new(self.interner),
        }
    }
}
