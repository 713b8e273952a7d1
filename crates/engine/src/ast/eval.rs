use crate::ast::{Expr, Op};
use crate::error::{CalcError, CalcResult};

pub trait Eval {
    /// Reduces the expression to a single floating-point value.
    fn eval(&self) -> CalcResult<f64>;
}

impl Eval for Expr {
    fn eval(&self) -> CalcResult<f64> {
        match self {
            Expr::Literal(value) => Ok(*value),
            Expr::Binary(op, lhs, rhs) => binary_expr(*op, lhs, rhs),
            Expr::Grouped(inner) => inner.eval(),
        }
    }
}

fn binary_expr(op: Op, lhs: &Expr, rhs: &Expr) -> CalcResult<f64> {
    let left = lhs.eval()?;
    let right = rhs.eval()?;

    match op {
        Op::Add => Ok(left + right),
        Op::Sub => Ok(left - right),
        Op::Mul => Ok(left * right),
        // IEEE division: a zero divisor yields infinity or NaN
        Op::Div => Ok(left / right),
        Op::Mod => mod_expr(left, right),
    }
}

/// Modulus truncates both operands toward zero and takes the integer
/// remainder, so `7.9 % 2` equals `7 % 2`.
fn mod_expr(left: f64, right: f64) -> CalcResult<f64> {
    match (left as i64).checked_rem(right as i64) {
        Some(rem) => Ok(rem as f64),
        None => Err(CalcError::evaluator(
            0..0,
            format!("cannot take modulus of {left} by {right}"),
        )),
    }
}
