//! Newton-Raphson: follows the tangent line from the current guess. Needs the
//! derivative alongside the function - here both arrive as compiled closures,
//! the derivative usually produced by `Expr::diff` upstream. Quadratic
//! convergence near a simple root; the error metric is the step size.

use crate::numerical::errors::ZeroFinderError;
use crate::numerical::zero_types::{IterationRecord, ZeroOutcome};
use crate::symbolic::symbolic_eval::EvalError;
use log::{info, warn};

/// Runs the Newton-Raphson iteration from the initial guess `x0`.
///
/// A derivative that is exactly zero at the current guess stops the run with
/// `SingularUpdate` - the tangent is horizontal and has no x-intercept.
pub fn newton_raphson<F, D>(
    f: F,
    df: D,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<ZeroOutcome, ZeroFinderError>
where
    F: Fn(f64) -> Result<f64, EvalError>,
    D: Fn(f64) -> Result<f64, EvalError>,
{
    crate::numerical::zero_api::check_common_params(tol, max_iter)?;
    let mut x_curr = x0;
    let mut trace: Vec<IterationRecord> = Vec::new();
    for i in 1..=max_iter {
        let fx = f(x_curr)?;
        let dfx = df(x_curr)?;
        if dfx == 0.0 {
            return Err(ZeroFinderError::SingularUpdate(format!(
                "derivative is zero at x = {} (iteration {})",
                x_curr, i
            )));
        }
        let x_next = x_curr - fx / dfx;
        let error = (x_next - x_curr).abs();
        trace.push(IterationRecord::Newton {
            iter: i,
            x_curr,
            f_x: fx,
            df_x: dfx,
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
