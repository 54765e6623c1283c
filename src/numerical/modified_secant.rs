//! Modified secant: a single-guess secant variant that approximates the
//! derivative with a fixed perturbation, `(f(x + delta) - f(x)) / delta`.
//! Trades the second initial guess for a user-chosen step size.

use crate::numerical::errors::ZeroFinderError;
use crate::numerical::zero_types::{IterationRecord, ZeroOutcome};
use crate::symbolic::symbolic_eval::EvalError;
use log::{info, warn};

/// Runs the modified secant iteration from `x0` with perturbation `delta`.
pub fn modified_secant<F>(
    f: F,
    x0: f64,
    delta: f64,
    tol: f64,
    max_iter: usize,
) -> Result<ZeroOutcome, ZeroFinderError>
where
    F: Fn(f64) -> Result<f64, EvalError>,
{
    crate::numerical::zero_api::check_common_params(tol, max_iter)?;
    if delta == 0.0 || !delta.is_finite() {
        return Err(ZeroFinderError::InvalidParameter(format!(
            "perturbation delta must be a nonzero finite number, got {}",
            delta
        )));
    }
    let mut x_curr = x0;
    let mut trace: Vec<IterationRecord> = Vec::new();
    for i in 1..=max_iter {
        let fx = f(x_curr)?;
        let fx_delta = f(x_curr + delta)?;
        if fx_delta - fx == 0.0 {
            return Err(ZeroFinderError::SingularUpdate(format!(
                "f(x + delta) - f(x) is zero at x = {} (iteration {})",
                x_curr, i
            )));
        }
        let x_next = x_curr - (delta * fx) / (fx_delta - fx);
        let error = (x_next - x_curr).abs();
        trace.push(IterationRecord::ModifiedSecant {
            iter: i,
            x_curr,
            root: x_next,
            error,
        });
        info!("iteration = {}, x = {}, error = {}", i, x_next, error);
        if error < tol {
            return Ok(ZeroOutcome {
                root: x_next,
                trace,
                iterations_used: i,
            });
        }
        x_curr = x_next;
    }
    warn!("maximum number of iterations reached, returning last estimate");
    Ok(ZeroOutcome {
        root: x_curr,
        trace,
        iterations_used: max_iter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_modified_secant_sqrt_two() {
        let f = |x: f64| Ok(x * x - 2.0);
        let outcome = modified_secant(f, 1.0, 0.01, 1e-8, 50).unwrap();
        assert_relative_eq!(outcome.root, 2.0_f64.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_modified_secant_zero_delta_fails() {
        let f = |x: f64| Ok(x * x - 2.0);
        assert!(matches!(
            modified_secant(f, 1.0, 0.0, 1e-6, 50),
            Err(ZeroFinderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_modified_secant_flat_function_fails() {
        // constant function: the perturbed difference is always zero
        let f = |_x: f64| Ok(1.0);
        assert!(matches!(
            modified_secant(f, 0.0, 0.01, 1e-6, 50),
            Err(ZeroFinderError::SingularUpdate(_))
        ));
    }

    #[test]
    fn test_modified_secant_exhaustion_is_success() {
        let f = |x: f64| Ok(x * x - 2.0);
        let outcome = modified_secant(f, 50.0, 0.01, 1e-15, 3).unwrap();
        assert_eq!(outcome.iterations_used, 3);
        assert_eq!(outcome.trace.len(), 3);
    }
}
