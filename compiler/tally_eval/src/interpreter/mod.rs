//! Tree-walking interpreter for Tally.
//!
//! `eval(ExprId, &mut Environment)` dispatches on the node kind copied out
//! of the arena. Helper modules in `crate::exec` hold the pieces shared
//! across node kinds:
//!
//! - `exec::expr` - identifier lookup
//! - `exec::control` - if/else, while, do-while
//!
//! The environment belongs to the caller and is mutated in place; nothing is
//! rolled back when evaluation fails part way through.

mod builder;
mod interned_names;

pub use builder::InterpreterBuilder;

use tally_ir::{BinaryOp, ExprArena, ExprId, ExprKind, ExprRange, Name, StringInterner};
use tally_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::{invalid_assignment_target, unknown_function};
use crate::exec::{control, expr};
use crate::print_handler::SharedPrintHandler;
use crate::{evaluate_binary, evaluate_unary, Environment, EvalResult, Value};
use interned_names::BuiltinNames;

/// Tree-walking interpreter over one parsed program.
pub struct Interpreter<'a> {
    /// Resolves identifier names for diagnostics and tracing.
    interner: &'a StringInterner,
    /// The program being evaluated.
    arena: &'a ExprArena,
    /// Destination of `print` output.
    print_handler: SharedPrintHandler,
    builtin_names: BuiltinNames,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter that prints to stdout.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// The handler `print` statements write to.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate a node against `env`.
    ///
    /// Pass the program root to run a whole program; its result is the value
    /// of the last statement.
    #[tracing::instrument(level = "trace", skip(self, env))]
    pub fn eval(&self, id: ExprId, env: &mut Environment<'_>) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    /// Inner evaluation dispatch. Exhaustive over `ExprKind`.
    fn eval_inner(&self, id: ExprId, env: &mut Environment<'_>) -> EvalResult {
        // ExprKind is Copy; no borrow of the arena outlives this line.
        let kind = self.arena.get_expr(id).kind;

        match kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Float(bits) => Ok(Value::Float(f64::from_bits(bits))),
            ExprKind::Ident(name) => expr::eval_ident(name, env, self.interner),

            ExprKind::Binary { op, left, right } => self.eval_binary(op, left, right, env),
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand, env)?;
                evaluate_unary(value, op)
            }

            ExprKind::Assign { target, value } => self.eval_assign(target, value, env),
            ExprKind::Call { func, args } => self.eval_call(func, args, env),
            ExprKind::Print(value) => self.eval_print(value, env),

            ExprKind::Block(stmts) => {
                for &stmt in self.arena.get_expr_list(stmts) {
                    self.eval(stmt, env)?;
                }
                Ok(Value::Void)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => control::eval_if(cond, then_branch, else_branch, |id| self.eval(id, env)),
            ExprKind::While { cond, body } => {
                control::eval_while(cond, body, |id| self.eval(id, env))
            }
            ExprKind::DoWhile { body, cond } => {
                control::eval_do_while(body, cond, |id| self.eval(id, env))
            }

            ExprKind::Program(stmts) => self.eval_program(stmts, env),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(statements = stmts.len()))]
    fn eval_program(&self, stmts: ExprRange, env: &mut Environment<'_>) -> EvalResult {
        let mut last = Value::Void;
        for &stmt in self.arena.get_expr_list(stmts) {
            last = self.eval(stmt, env)?;
        }
        Ok(last)
    }

    /// Binary operators. `&&` and `||` skip the right operand when the left
    /// one decides the result.
    fn eval_binary(
        &self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        env: &mut Environment<'_>,
    ) -> EvalResult {
        let left_val = self.eval(left, env)?;
        match op {
            BinaryOp::And if !left_val.is_truthy() => return Ok(left_val),
            BinaryOp::Or if left_val.is_truthy() => return Ok(left_val),
            _ => {}
        }
        let right_val = self.eval(right, env)?;
        evaluate_binary(left_val, right_val, op)
    }

    fn eval_assign(&self, target: ExprId, value: ExprId, env: &mut Environment<'_>) -> EvalResult {
        let target_kind = self.arena.get_expr(target).kind;
        let ExprKind::Ident(name) = target_kind else {
            return Err(invalid_assignment_target(target_kind.tag()));
        };
        let value = self.eval(value, env)?;
        trace!(name = self.interner.lookup(name), %value, "assign");
        env.assign(name, value.clone());
        Ok(value)
    }

    /// Built-in calls. Arguments are evaluated left to right before the name
    /// is resolved.
    fn eval_call(&self, func: Name, args: ExprRange, env: &mut Environment<'_>) -> EvalResult {
        let args = self
            .arena
            .get_expr_list(args)
            .iter()
            .map(|&arg| self.eval(arg, env))
            .collect::<Result<Vec<_>, _>>()?;
        let builtin = self
            .builtin_names
            .resolve(func)
            .ok_or_else(|| unknown_function(self.interner.lookup(func)))?;
        builtin.call(&args)
    }

    fn eval_print(&self, value: Option<ExprId>, env: &mut Environment<'_>) -> EvalResult {
        let line = match value {
            Some(id) => self.eval(id, env)?.to_string(),
            None => String::new(),
        };
        self.print_handler.println(&line);
        Ok(Value::Void)
    }
}
