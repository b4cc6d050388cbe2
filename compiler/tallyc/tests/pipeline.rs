//! End-to-end tests: source text in, value and printed lines out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use tallyc::eval::{buffer_handler, Environment, EvalError, Value, FACTORIAL_NEGATIVE};
use tallyc::{Error, Session};

fn session() -> Session {
    tallyc::init_tracing();
    Session::with_print_handler(buffer_handler())
}

fn eval(source: &str) -> Result<Value, Error> {
    session().evaluate(source, &mut Environment::new())
}

#[test]
fn numeric_results() {
    assert_eq!(eval("(1.0+2.1)*3").unwrap(), Value::Float(9.3));
    assert_eq!(eval("8/2").unwrap(), Value::Float(4.0));
    assert_eq!(eval("1+2*4").unwrap(), Value::Int(9));
}

#[test]
fn print_output_is_captured() {
    let session = session();
    let mut env = Environment::new();

    assert_eq!(session.evaluate("print 16", &mut env).unwrap(), Value::Void);
    assert_eq!(session.evaluate("print 3.14159", &mut env).unwrap(), Value::Void);
    assert_eq!(session.print_handler().lines(), vec!["16", "3.14159"]);
}

#[test]
fn parent_chain_lookup() {
    let session = session();
    let mut parent = Environment::new();
    parent.assign(session.intern("x"), Value::Int(4));
    let mut env = Environment::with_parent(&parent);
    env.assign(session.intern("y"), Value::Int(5));

    assert_eq!(session.evaluate("x+y", &mut env).unwrap(), Value::Int(9));
}

#[test]
fn assignment_updates_caller_environment() {
    let session = session();
    let x = session.intern("x");
    let mut env = Environment::new();
    env.assign(x, Value::Int(14));

    assert_eq!(session.evaluate("x=7", &mut env).unwrap(), Value::Int(7));
    assert_eq!(env.get_local(x), Some(&Value::Int(7)));
}

#[test]
fn do_while_counts_to_three() {
    let session = session();
    let x = session.intern("x");
    let mut env = Environment::new();
    env.assign(x, Value::Int(0));

    session
        .evaluate("do { x = x + 1; print x } while (x < 3)", &mut env)
        .unwrap();

    assert_eq!(env.get_local(x), Some(&Value::Int(3)));
    assert_eq!(session.print_handler().lines(), vec!["1", "2", "3"]);
}

#[test]
fn builtins() {
    assert_eq!(eval("root(-32, 5)").unwrap(), Value::Int(-2));
    assert_eq!(eval("factorial(5)").unwrap(), Value::Int(120));
    assert_eq!(
        eval("factorial(-1)").unwrap(),
        Value::Error(FACTORIAL_NEGATIVE.to_owned())
    );
    assert_eq!(eval("gcf(24, 12, 18)").unwrap(), Value::Int(6));
    assert_eq!(eval("sqrt(9)").unwrap(), Value::Int(3));
}

#[test]
fn environment_is_reused_across_calls() {
    let session = session();
    let mut env = Environment::new();
    session.evaluate("n = 5; acc = 1", &mut env).unwrap();
    session
        .evaluate("while (n > 1) { acc = acc * n; n = n - 1 }", &mut env)
        .unwrap();

    assert_eq!(session.evaluate("acc", &mut env).unwrap(), Value::Int(120));
    assert_eq!(
        session.evaluate("acc == factorial(5)", &mut env).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn stage_errors_are_distinguished() {
    assert!(matches!(eval("1 $ 2"), Err(Error::Lex(_))));
    assert!(matches!(eval("(1 + 2"), Err(Error::Parse(_))));
    assert!(matches!(eval("1 2"), Err(Error::Parse(_))));
    assert_eq!(
        eval("nope(1)"),
        Err(Error::Eval(EvalError::UnknownFunction {
            name: "nope".to_owned()
        }))
    );
}

#[test]
fn error_messages_name_the_stage() {
    let err = eval("y + 1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "evaluation error: undefined variable `y` in environment {}"
    );
}

#[test]
fn output_before_an_error_is_kept() {
    let session = session();
    let result = session.evaluate("print 1; print 2 / 0; print 3", &mut Environment::new());

    assert_eq!(result, Err(Error::Eval(EvalError::DivisionByZero)));
    assert_eq!(session.print_handler().lines(), vec!["1"]);
}
