//! Checked evaluation of symbolic expressions.
//!
//! The solvers call the compiled function thousands of times at points they
//! do not control, so evaluation follows a strict contract: every point where
//! the function is mathematically undefined (log of a non-positive value,
//! division by zero, square root of a negative, overflow to inf/NaN) comes
//! back as an `EvalError` instead of a silent NaN that would poison the
//! iteration trace.

use crate::symbolic::symbolic_engine::Expr;
use thiserror::Error;

/// A compiled single-variable function with the checked evaluation contract.
pub type CompiledFunction = Box<dyn Fn(f64) -> Result<f64, EvalError> + Send + Sync>;

/// Evaluation failure at a concrete point of the domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero at x = {0}")]
    DivisionByZero(f64),
    #[error("logarithm of non-positive value {arg} at x = {x}")]
    LogNonPositive { arg: f64, x: f64 },
    #[error("square root of negative value {arg} at x = {x}")]
    SqrtNegative { arg: f64, x: f64 },
    #[error("overflow or undefined value at x = {0}")]
    NonFinite(f64),
}

impl Expr {
    /// Evaluates the expression at a point of its single free variable.
    ///
    /// Every variable node takes the value `x`; the compile step guarantees
    /// the tree holds at most one distinct variable name.
    pub fn eval1D(&self, x: f64) -> Result<f64, EvalError> {
        let val = match self {
            Expr::Var(_) => x,
            Expr::Const(c) => *c,
            Expr::Add(lhs, rhs) => lhs.eval1D(x)? + rhs.eval1D(x)?,
            Expr::Sub(lhs, rhs) => lhs.eval1D(x)? - rhs.eval1D(x)?,
            Expr::Mul(lhs, rhs) => lhs.eval1D(x)? * rhs.eval1D(x)?,
            Expr::Div(lhs, rhs) => {
                let denom = rhs.eval1D(x)?;
                if denom == 0.0 {
                    return Err(EvalError::DivisionByZero(x));
                }
                lhs.eval1D(x)? / denom
            }
            Expr::Pow(base, exp) => base.eval1D(x)?.powf(exp.eval1D(x)?),
            Expr::Exp(expr) => expr.eval1D(x)?.exp(),
            Expr::Ln(expr) => {
                let arg = expr.eval1D(x)?;
                if arg <= 0.0 {
                    return Err(EvalError::LogNonPositive { arg, x });
                }
                arg.ln()
            }
            Expr::sin(expr) => expr.eval1D(x)?.sin(),
            Expr::cos(expr) => expr.eval1D(x)?.cos(),
            Expr::tg(expr) => expr.eval1D(x)?.tan(),
            Expr::sqrt(expr) => {
                let arg = expr.eval1D(x)?;
                if arg < 0.0 {
                    return Err(EvalError::SqrtNegative { arg, x });
                }
                arg.sqrt()
            }
            Expr::abs(expr) => expr.eval1D(x)?.abs(),
        };
        if val.is_finite() {
            Ok(val)
        } else {
            Err(EvalError::NonFinite(x))
        }
    }

    /// Converts the expression into an executable checked function of one
    /// variable. The closure owns a clone of the tree, so the returned
    /// function outlives the expression it came from.
    pub fn lambdify1D_checked(&self) -> CompiledFunction {
        let expr = self.clone();
        Box::new(move |x| expr.eval1D(x))
    }
}
