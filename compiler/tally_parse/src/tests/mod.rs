//! Parser tests.
//!
//! - `expr`: precedence, associativity, factors and calls
//! - `stmt`: statements, blocks, programs and error reporting


use tally_ir::{ExprId, ExprKind, StringInterner};

use crate::{parse, ParseError, ParseOutput};

pub(super) fn parse_source(
    source: &str,
    interner: &StringInterner,
) -> Result<ParseOutput, ParseError> {
    let tokens =
        tally_lexer::lex(source, interner).unwrap_or_else(|e| panic!("lex failed: {e}"));
    parse(&tokens, interner)
}

/// Render a parsed program as an S-expression, one statement per line.
pub(super) fn render_program(source: &str) -> String {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner).unwrap_or_else(|e| panic!("parse failed: {e}"));
    let ExprKind::Program(stmts) = output.arena.get_expr(output.program).kind else {
        panic!("root is not a program");
    };
    output
        .arena
        .get_expr_list(stmts)
        .iter()
        .map(|&stmt| render(&output, stmt, &interner))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_list(output: &ParseOutput, ids: &[ExprId], interner: &StringInterner) -> String {
    ids.iter()
        .map(|&id| render(output, id, interner))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render(output: &ParseOutput, id: ExprId, interner: &StringInterner) -> String {
    let arena = &output.arena;
    match arena.get_expr(id).kind {
        ExprKind::Int(n) => n.to_string(),
        ExprKind::Float(bits) => format!("{:?}", f64::from_bits(bits)),
        ExprKind::Ident(name) => interner.lookup(name).to_owned(),
        ExprKind::Binary { op, left, right } => format!(
            "({} {} {})",
            op.as_symbol(),
            render(output, left, interner),
            render(output, right, interner)
        ),
        ExprKind::Unary { op, operand } => {
            format!("({} {})", op.as_symbol(), render(output, operand, interner))
        }
        ExprKind::Assign { target, value } => format!(
            "(= {} {})",
            render(output, target, interner),
            render(output, value, interner)
        ),
        ExprKind::Call { func, args } => format!(
            "({} {})",
            interner.lookup(func),
            render_list(output, arena.get_expr_list(args), interner)
        ),
        ExprKind::Print(None) => "(print)".to_owned(),
        ExprKind::Print(Some(value)) => format!("(print {})", render(output, value, interner)),
        ExprKind::Block(stmts) => format!(
            "{{{}}}",
            render_list(output, arena.get_expr_list(stmts), interner)
        ),
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => match else_branch {
            Some(else_branch) => format!(
                "(if {} {} {})",
                render(output, cond, interner),
                render(output, then_branch, interner),
                render(output, else_branch, interner)
            ),
            None => format!(
                "(if {} {})",
                render(output, cond, interner),
                render(output, then_branch, interner)
            ),
        },
        ExprKind::While { cond, body } => format!(
            "(while {} {})",
            render(output, cond, interner),
            render(output, body, interner)
        ),
        ExprKind::DoWhile { body, cond } => format!(
            "(do {} {})",
            render(output, body, interner),
            render(output, cond, interner)
        ),
        ExprKind::Program(stmts) => render_list(output, arena.get_expr_list(stmts), interner),
    }
}
