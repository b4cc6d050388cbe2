//! Evaluator tests that run source text through the lexer and parser.


use tally_ir::{Name, SharedInterner};

use crate::print_handler::{buffer_handler, SharedPrintHandler};
use crate::{Environment, EvalResult, InterpreterBuilder};

/// One interner and one captured output buffer shared by a test's runs.
struct Harness {
    interner: SharedInterner,
    output: SharedPrintHandler,
}

impl Harness {
    fn new() -> Self {
        Harness {
            interner: SharedInterner::default(),
            output: buffer_handler(),
        }
    }

    fn name(&self, name: &str) -> Name {
        self.interner.intern(name)
    }

    #[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
    fn eval_in(&self, source: &str, env: &mut Environment<'_>) -> EvalResult {
        let tokens = tally_lexer::lex(source, &self.interner).unwrap();
        let parsed = tally_parse::parse(&tokens, &self.interner).unwrap();
        InterpreterBuilder::new(&self.interner, &parsed.arena)
            .print_handler(self.output.clone())
            .build()
            .eval(parsed.program, env)
    }

    fn eval(&self, source: &str) -> EvalResult {
        self.eval_in(source, &mut Environment::new())
    }
}
