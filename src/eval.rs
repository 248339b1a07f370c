//! Expression evaluation for algebraic arguments (`x2=2*pi`)

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::errors::EvalError;
use crate::log::warn;
use crate::parse::parse_expression;

/// Evaluate an expression, reporting syntax errors.
pub fn try_evaluate(source: &str) -> Result<f64, EvalError> {
    let expr = parse_expression(source)?;
    Ok(eval_expr(&expr))
}

/// Evaluate an expression, returning NaN when it does not parse.
///
/// Callers decide whether NaN means "use the default" or propagates.
pub fn evaluate(source: &str) -> f64 {
    match try_evaluate(source) {
        Ok(value) => value,
        Err(_err) => {
            warn!(expression = source, error = %_err, "invalid expression");
            f64::NAN
        }
    }
}

/// Evaluate a parsed expression with IEEE-754 semantics (x/0 is infinite).
pub fn eval_expr(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(n) => *n,
        Expr::Constant(c) => c.value(),
        Expr::UnaryOp(UnaryOp::Neg, inner) => -eval_expr(inner),
        Expr::UnaryOp(UnaryOp::Pos, inner) => eval_expr(inner),
        Expr::BinaryOp(lhs, op, rhs) => {
            let l = eval_expr(lhs);
            let r = eval_expr(rhs);
            match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => l / r,
                BinaryOp::Pow => l.powf(r),
            }
        }
    }
}
