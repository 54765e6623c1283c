//! Fixed-point iteration: the user supplies `g(x)` and the solver iterates
//! `x_next = g(x_curr)` toward a point where `x = g(x)`. Converges only when
//! `|g'| < 1` near the fixed point, so a divergence bound guards against
//! runaway iterates.

use crate::numerical::errors::ZeroFinderError;
use crate::numerical::zero_types::{IterationRecord, ZeroOutcome};
use crate::symbolic::symbolic_eval::EvalError;
use log::{info, warn};

/// Step sizes past this bound abort the run as divergent.
const DIVERGENCE_BOUND: f64 = 1e10;

/// Runs the fixed-point iteration `x_next = g(x_curr)` from `x0`.
///
/// The divergence check runs after the record is appended and the convergence
/// test has failed, so the trace always holds the offending step.
pub fn fixed_point<G>(
    g: G,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<ZeroOutcome, ZeroFinderError>
where
    G: Fn(f64) -> Result<f64, EvalError>,
{
    crate::numerical::zero_api::check_common_params(tol, max_iter)?;
    let mut x_curr = x0;
    let mut trace: Vec<IterationRecord> = Vec::new();
    for i in 1..=max_iter {
        let x_next = g(x_curr)?;
        let error = (x_next - x_curr).abs();
        trace.push(IterationRecord::FixedPoint {
            iter: i,
            x_curr,
            g_x: x_next,
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
        if error > DIVERGENCE_BOUND {
            return Err(ZeroFinderError::Divergence(format!(
                "step size {} exceeded the divergence bound at iteration {}",
                error, i
            )));
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
