//! # Symbolic Engine Derivatives Module
//!
//! Exact analytical differentiation of symbolic expressions. The derivative
//! is computed as a recursive tree transform applying the standard calculus
//! rules (sum, product, quotient, chain), and is what the Newton-Raphson
//! solver consumes - no numerical finite-difference fallback is ever used,
//! since quadratic convergence depends on the derivative being exact.
//!
//! The power rule distinguishes a constant exponent (n * u^(n-1) * u') from
//! the general case u^v with a variable exponent, which differentiates as
//! u^v * (v' * ln(u) + v * u' / u).

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// # Arguments
    /// * `var` - Variable name to differentiate with respect to
    ///
    /// # Returns
    /// New symbolic expression representing the derivative
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.clone().pow(Expr::Const(2.0)); // x^2
    /// let df_dx = f.diff("x"); // 2*x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                if exp.contains_variable(var) {
                    // general rule: d(u^v) = u^v * (v' * ln(u) + v * u' / u)
                    Expr::Mul(
                        Box::new(Expr::Pow(base.clone(), exp.clone())),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(
                                Box::new(exp.diff(var)),
                                Box::new(Expr::Ln(base.clone())),
                            )),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), Box::new(base.diff(var)))),
                                base.clone(),
                            )),
                        )),
                    )
                } else {
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::Pow(
                                base.clone(),
                                Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                            )),
                        )),
                        Box::new(base.diff(var)),
                    )
                }
            }
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::cos(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::sqrt(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(2.0)),
                    Box::new(Expr::sqrt(expr.clone())),
                )),
            ),
            // d(|u|) = u/|u| * u', undefined at u = 0 which surfaces as a
            // division-by-zero domain error on evaluation
            Expr::abs(expr) => Expr::Mul(
                Box::new(Expr::Div(expr.clone(), Box::new(Expr::abs(expr.clone())))),
                Box::new(expr.diff(var)),
            ),
        }
    } // end of diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::utils::{linspace, numerical_derivative};
    use approx::assert_relative_eq;

    fn check_against_numeric(expr: &Expr, start: f64, end: f64) {
        let f = expr.lambdify1D_checked();
        let df = expr.diff("x").lambdify1D_checked();
        let x_values = linspace(start, end, 25);
        let numeric = numerical_derivative(|x| f(x).unwrap(), x_values.clone(), 1e-6);
        for (x, expected) in x_values.iter().zip(numeric.iter()) {
            let analytic = df(*x).unwrap();
            assert_relative_eq!(analytic, *expected, epsilon = 1e-4, max_relative = 1e-4);
        }
    }

    #[test]
    fn test_diff_polynomial() {
        let expr = Expr::parse_expression("x^2 - 2").unwrap();
        let df = expr.diff("x").lambdify1D_checked();
        assert_relative_eq!(df(3.0).unwrap(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diff_constant_is_zero() {
        let expr = Expr::Const(42.0);
        assert_eq!(expr.diff("x"), Expr::Const(0.0));
    }

    #[test]
    fn test_diff_transcendental_against_numeric() {
        let expr = Expr::parse_expression("sin(x) * exp(x) + cos(x^2)").unwrap();
        check_against_numeric(&expr, 0.1, 2.0);
    }

    #[test]
    fn test_diff_quotient_against_numeric() {
        let expr = Expr::parse_expression("ln(x) / (x + 1)").unwrap();
        check_against_numeric(&expr, 0.5, 3.0);
    }

    #[test]
    fn test_diff_sqrt_against_numeric() {
        let expr = Expr::parse_expression("sqrt(x^2 + 1)").unwrap();
        check_against_numeric(&expr, -2.0, 2.0);
    }

    #[test]
    fn test_diff_variable_exponent() {
        // d(x^x) = x^x * (ln(x) + 1)
        let expr = Expr::parse_expression("x^x").unwrap();
        let df = expr.diff("x").lambdify1D_checked();
        let x: f64 = 1.5;
        let expected = x.powf(x) * (x.ln() + 1.0);
        assert_relative_eq!(df(x).unwrap(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_diff_abs_sign() {
        let expr = Expr::parse_expression("abs(x)").unwrap();
        let df = expr.diff("x").lambdify1D_checked();
        assert_relative_eq!(df(2.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(df(-2.0).unwrap(), -1.0, epsilon = 1e-12);
        assert!(df(0.0).is_err());
    }
}
