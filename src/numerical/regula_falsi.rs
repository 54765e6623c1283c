//! Regula falsi (false position): like bisection the bracket keeps a sign
//! change, but the new estimate is the x-intercept of the chord through
//! `(a, f(a))` and `(b, f(b))`. The error metric is the residual `|f(c)|`,
//! not the bracket width, since one endpoint may stall.

use crate::numerical::errors::ZeroFinderError;
use crate::numerical::zero_types::{IterationRecord, ZeroOutcome};
use crate::symbolic::symbolic_eval::EvalError;
use log::{info, warn};

/// Runs the false-position iteration on the bracket `[a, b]`.
pub fn regula_falsi<F>(
    f: F,
    a: f64,
    b: f64,
    tol: f64,
    max_iter: usize,
) -> Result<ZeroOutcome, ZeroFinderError>
where
    F: Fn(f64) -> Result<f64, EvalError>,
{
    crate::numerical::zero_api::check_common_params(tol, max_iter)?;
    let (mut a, mut b) = (a, b);
    let fa0 = f(a)?;
    let fb0 = f(b)?;
    if fa0 * fb0 >= 0.0 {
        return Err(ZeroFinderError::BracketingError(format!(
            "f(a) and f(b) must have opposite signs: f({}) = {}, f({}) = {}",
            a, fa0, b, fb0
        )));
    }

    let mut trace: Vec<IterationRecord> = Vec::new();
    let mut root = a;
    for i in 1..=max_iter {
        let fa = f(a)?;
        let fb = f(b)?;
        if fb - fa == 0.0 {
            return Err(ZeroFinderError::SingularUpdate(format!(
                "f(b) - f(a) is zero at iteration {}: chord has no x-intercept",
                i
            )));
        }
        let c = (a * fb - b * fa) / (fb - fa);
        let fc = f(c)?;
        let error = fc.abs();
        trace.push(IterationRecord::Bracketing {
            iter: i,
            a,
            b,
            root: c,
            f_root: fc,
            error,
        });
        info!("iteration = {}, c = {}, error = {}", i, c, error);
        if error < tol {
            return Ok(ZeroOutcome {
                root: c,
                trace,
                iterations_used: i,
            });
        }
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
        }
        root = c;
    }
    warn!("maximum number of iterations reached, returning last estimate");
    Ok(ZeroOutcome {
        root,
        trace,
        iterations_used: max_iter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic(x: f64) -> Result<f64, EvalError> {
        Ok(x * x * x - x - 2.0)
    }

    #[test]
    fn test_regula_falsi_cubic() {
        let outcome = regula_falsi(cubic, 1.0, 2.0, 1e-6, 100).unwrap();
        assert_relative_eq!(outcome.root, 1.5213797, epsilon = 1e-5);
        assert!(outcome.trace.last().unwrap().error() < 1e-6);
    }

    #[test]
    fn test_regula_falsi_error_is_residual() {
        let outcome = regula_falsi(cubic, 1.0, 2.0, 1e-8, 200).unwrap();
        for record in &outcome.trace {
            if let IterationRecord::Bracketing { f_root, error, .. } = record {
                assert_eq!(*error, f_root.abs());
            } else {
                panic!("regula falsi must emit bracketing records");
            }
        }
    }

    #[test]
    fn test_regula_falsi_no_sign_change_fails() {
        let no_zero = |x: f64| Ok(x * x + 1.0);
        assert!(matches!(
            regula_falsi(no_zero, 0.0, 1.0, 1e-6, 50),
            Err(ZeroFinderError::BracketingError(_))
        ));
    }

    #[test]
    fn test_regula_falsi_exhaustion_is_success() {
        let outcome = regula_falsi(cubic, 1.0, 2.0, 1e-15, 3).unwrap();
        assert_eq!(outcome.iterations_used, 3);
        assert_eq!(outcome.trace.len(), 3);
    }
}
