//! Secant method: derivative-free Newton variant driven by a sliding pair of
//! guesses. No bracketing requirement, superlinear convergence near a simple
//! root; the error metric is the step size `|x_new - x_curr|`.

use crate::numerical::errors::ZeroFinderError;
use crate::numerical::zero_types::{IterationRecord, ZeroOutcome};
use crate::symbolic::symbolic_eval::EvalError;
use log::{info, warn};

/// Runs the secant iteration from the guess pair `(x0, x1)`.
pub fn secant<F>(
    f: F,
    x0: f64,
    x1: f64,
    tol: f64,
    max_iter: usize,
) -> Result<ZeroOutcome, ZeroFinderError>
where
    F: Fn(f64) -> Result<f64, EvalError>,
{
    crate::numerical::zero_api::check_common_params(tol, max_iter)?;
    let (mut x0, mut x1) = (x0, x1);
    let mut trace: Vec<IterationRecord> = Vec::new();
    for i in 1..=max_iter {
        let fx0 = f(x0)?;
        let fx1 = f(x1)?;
        if fx1 - fx0 == 0.0 {
            return Err(ZeroFinderError::SingularUpdate(format!(
                "f(x1) - f(x0) is zero at iteration {}: secant line is horizontal",
                i
            )));
        }
        let x2 = x1 - (fx1 * (x1 - x0)) / (fx1 - fx0);
        let error = (x2 - x1).abs();
        trace.push(IterationRecord::Secant {
            iter: i,
            x_prev: x0,
            x_curr: x1,
            root: x2,
            error,
        });
        info!("iteration = {}, x = {}, error = {}", i, x2, error);
        if error < tol {
            return Ok(ZeroOutcome {
                root: x2,
                trace,
                iterations_used: i,
            });
        }
        x0 = x1;
        x1 = x2;
    }
    warn!("maximum number of iterations reached, returning last estimate");
    Ok(ZeroOutcome {
        root: x1,
        trace,
        iterations_used: max_iter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_secant_sqrt_two() {
        let f = |x: f64| Ok(x * x - 2.0);
        let outcome = secant(f, 1.0, 2.0, 1e-8, 50).unwrap();
        assert_relative_eq!(outcome.root, 2.0_f64.sqrt(), epsilon = 1e-7);
        assert!(outcome.iterations_used < 15);
    }

    #[test]
    fn test_secant_equal_function_values_fails() {
        // x^2 is symmetric, f(-1) == f(1) makes the first chord horizontal
        let f = |x: f64| Ok(x * x);
        let result = secant(f, -1.0, 1.0, 1e-6, 50);
        assert!(matches!(result, Err(ZeroFinderError::SingularUpdate(_))));
    }

    #[test]
    fn test_secant_trace_slides_guess_pair() {
        let f = |x: f64| Ok(x * x * x - x - 2.0);
        let outcome = secant(f, 1.0, 2.0, 1e-10, 50).unwrap();
        for window in outcome.trace.windows(2) {
            let (prev, next) = (&window[0], &window[1]);
            if let (
                IterationRecord::Secant {
                    x_curr, root: new, ..
                },
                IterationRecord::Secant {
                    x_prev: next_prev,
                    x_curr: next_curr,
                    ..
                },
            ) = (prev, next)
            {
                assert_eq!(next_prev, x_curr);
                assert_eq!(next_curr, new);
            } else {
                panic!("secant must emit secant records");
            }
        }
    }

    #[test]
    fn test_secant_exhaustion_is_success() {
        let f = |x: f64| Ok(x * x - 2.0);
        let outcome = secant(f, 1.0, 2.0, 1e-15, 4).unwrap();
        assert_eq!(outcome.iterations_used, 4);
        assert_eq!(outcome.trace.len(), 4);
    }
}
