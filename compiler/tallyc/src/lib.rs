//! Tally - scanner, parser and evaluator behind one entry point.
//!
//! ```text
//! source text
//!     │
//!     ▼
//! tally_lexer::lex() ──► TokenList
//!     │
//!     ▼
//! tally_parse::parse() ──► ParseOutput { arena, program }
//!     │
//!     ▼
//! Interpreter::eval(program, &mut Environment) ──► Value
//! ```
//!
//! A [`Session`] owns the string interner shared by every stage, so an
//! environment built against one session can be reused across calls.

use std::sync::Once;

use tally_eval::{
    stdout_handler, Environment, EvalError, InterpreterBuilder, SharedPrintHandler, Value,
};
use tally_ir::{Name, SharedInterner, StringInterner};
use tally_lexer::LexError;
use tally_parse::ParseError;
use thiserror::Error;
use tracing::debug;

pub use tally_eval as eval;
pub use tally_ir as ir;

/// Failure from any stage of the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Interner and output destination for a series of evaluations.
pub struct Session {
    interner: SharedInterner,
    print_handler: SharedPrintHandler,
}

impl Session {
    /// A session that prints to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// A session that prints through `handler`.
    pub fn with_print_handler(handler: SharedPrintHandler) -> Self {
        Session {
            interner: SharedInterner::new(),
            print_handler: handler,
        }
    }

    /// Intern a variable name, for seeding an environment.
    pub fn intern(&self, name: &str) -> Name {
        self.interner.intern(name)
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Scan, parse and evaluate `source` against `env`.
    ///
    /// `env` is mutated in place. Assignments and output that happen before
    /// an evaluation error are kept.
    pub fn evaluate(&self, source: &str, env: &mut Environment<'_>) -> Result<Value, Error> {
        let tokens = tally_lexer::lex(source, &self.interner)?;
        let parsed = tally_parse::parse(&tokens, &self.interner)?;
        debug!(
            tokens = tokens.len(),
            nodes = parsed.arena.expr_count(),
            "evaluating"
        );

        let interpreter = InterpreterBuilder::new(&self.interner, &parsed.arena)
            .print_handler(self.print_handler.clone())
            .build();
        Ok(interpreter.eval(parsed.program, env)?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=tally_eval=trace` or
/// any other `EnvFilter` directive; without `RUST_LOG` nothing is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
