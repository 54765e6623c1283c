//! Shared data model of the zero-finding engine: the closed method set, the
//! numeric parameters of a run, per-iteration records and the solver outcome.

use crate::numerical::errors::ZeroFinderError;
use strum_macros::{Display, EnumIter};

/// The closed set of root-finding methods, dispatched through
/// `zero_api::solve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum Method {
    Bisection,
    RegulaFalsi,
    Secant,
    NewtonRaphson,
    FixedPoint,
    ModifiedSecant,
}

impl Method {
    /// Maps the numeric identifiers used by the front ends (menu choice,
    /// form field) onto the method set.
    pub fn from_id(id: usize) -> Result<Method, ZeroFinderError> {
        match id {
            1 => Ok(Method::Bisection),
            2 => Ok(Method::RegulaFalsi),
            3 => Ok(Method::Secant),
            4 => Ok(Method::NewtonRaphson),
            5 => Ok(Method::FixedPoint),
            6 => Ok(Method::ModifiedSecant),
            _ => Err(ZeroFinderError::InvalidParameter(format!(
                "unknown method id {}, expected 1..=6",
                id
            ))),
        }
    }
}

/// Numeric parameters of a solver run. `tolerance` and `max_iterations` are
/// common to all methods; the rest are method-specific and stay `None` when a
/// method does not use them.
#[derive(Debug, Clone)]
pub struct SolverParams {
    pub tolerance: f64,
    pub max_iterations: usize,
    /// lower bracket endpoint (bisection, regula falsi)
    pub a: Option<f64>,
    /// upper bracket endpoint (bisection, regula falsi)
    pub b: Option<f64>,
    /// initial guess (secant, Newton-Raphson, fixed point, modified secant)
    pub x0: Option<f64>,
    /// second initial guess (secant)
    pub x1: Option<f64>,
    /// perturbation (modified secant)
    pub delta: Option<f64>,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            tolerance: 1e-6,
            max_iterations: 100,
            a: None,
            b: None,
            x0: None,
            x1: None,
            delta: None,
        }
    }
}

impl SolverParams {
    /// Checks the parameters common to every method before any iteration runs.
    pub fn validate(&self) -> Result<(), ZeroFinderError> {
        if !(self.tolerance > 0.0) || !self.tolerance.is_finite() {
            return Err(ZeroFinderError::InvalidParameter(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations < 1 {
            return Err(ZeroFinderError::InvalidParameter(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One row of the iteration trace. The field set differs per method, so the
/// record is a tagged union rather than a dynamic map - column sets are
/// statically known at the formatter boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum IterationRecord {
    /// bisection and regula falsi: bracket endpoints and the new estimate
    Bracketing {
        iter: usize,
        a: f64,
        b: f64,
        root: f64,
        f_root: f64,
        error: f64,
    },
    /// secant: the sliding pair of guesses and the new estimate
    Secant {
        iter: usize,
        x_prev: f64,
        x_curr: f64,
        root: f64,
        error: f64,
    },
    /// Newton-Raphson: current point, function and derivative values
    Newton {
        iter: usize,
        x_curr: f64,
        f_x: f64,
        df_x: f64,
        root: f64,
        error: f64,
    },
    /// fixed point: current point and g(x)
    FixedPoint {
        iter: usize,
        x_curr: f64,
        g_x: f64,
        error: f64,
    },
    /// modified secant: current point and the new estimate
    ModifiedSecant {
        iter: usize,
        x_curr: f64,
        root: f64,
        error: f64,
    },
}

impl IterationRecord {
    /// The error metric of this step - the quantity compared against the
    /// tolerance by the convergence test.
    pub fn error(&self) -> f64 {
        match self {
            IterationRecord::Bracketing { error, .. }
            | IterationRecord::Secant { error, .. }
            | IterationRecord::Newton { error, .. }
            | IterationRecord::FixedPoint { error, .. }
            | IterationRecord::ModifiedSecant { error, .. } => *error,
        }
    }

    /// 1-based iteration index of this step.
    pub fn iter_index(&self) -> usize {
        match self {
            IterationRecord::Bracketing { iter, .. }
            | IterationRecord::Secant { iter, .. }
            | IterationRecord::Newton { iter, .. }
            | IterationRecord::FixedPoint { iter, .. }
            | IterationRecord::ModifiedSecant { iter, .. } => *iter,
        }
    }
}

/// Successful outcome of a solver run. Failures travel separately as
/// `ZeroFinderError`, so exactly one of the two is ever populated.
///
/// Invariants: `trace.len()` equals the number of completed iterations, and
/// the last record's error metric is the one that decided between
/// convergence and exhausting `max_iterations`.
#[derive(Debug, Clone)]
pub struct ZeroOutcome {
    pub root: f64,
    pub trace: Vec<IterationRecord>,
    pub iterations_used: usize,
}
