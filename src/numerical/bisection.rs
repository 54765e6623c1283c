//! Bisection method: repeatedly halves a bracket `[a, b]` known to contain a
//! sign change. Converges unconditionally once the strict sign-change
//! precondition `f(a) * f(b) < 0` holds; the error metric is the bracket
//! width `|b - a|`.

use crate::numerical::errors::ZeroFinderError;
use crate::numerical::zero_types::{IterationRecord, ZeroOutcome};
use crate::symbolic::symbolic_eval::EvalError;
use log::{info, warn};

/// Runs the bisection iteration on the bracket `[a, b]`.
///
/// Convergence test: `|f(c)| < tol` or `|b - a| < tol`. Exhausting the
/// iteration cap is a success path returning the last midpoint; only the
/// violated sign precondition or a domain error of `f` fails the run.
pub fn bisection<F>(
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
    let mut root = (a + b) / 2.0;
    for i in 1..=max_iter {
        let c = (a + b) / 2.0;
        let fc = f(c)?;
        let error = (b - a).abs();
        trace.push(IterationRecord::Bracketing {
            iter: i,
            a,
            b,
            root: c,
            f_root: fc,
            error,
        });
        info!("iteration = {}, c = {}, error = {}", i, c, error);
        if fc.abs() < tol || error < tol {
            return Ok(ZeroOutcome {
                root: c,
                trace,
                iterations_used: i,
            });
        }
        // ties f(a)*f(c) == 0 fall to the else branch, replacing a
        if f(a)? * fc < 0.0 {
            b = c;
        } else {
            a = c;
        }
        root = (a + b) / 2.0;
    }
    warn!("maximum number of iterations reached, returning last estimate");
    Ok(ZeroOutcome {
        root,
        trace,
        iterations_used: max_iter,
    })
}
