//! Public entry points of the zero-finding engine: expression compilation,
//! analytic derivative construction, the method dispatcher and the
//! struct-based `ZeroFinder` facade with logging and run statistics.

use crate::numerical::bisection::bisection;
use crate::numerical::errors::ZeroFinderError;
use crate::numerical::fixed_point::fixed_point;
use crate::numerical::modified_secant::modified_secant;
use crate::numerical::newton_raphson::newton_raphson;
use crate::numerical::regula_falsi::regula_falsi;
use crate::numerical::reporting::{format_outcome, format_trace};
use crate::numerical::secant::secant;
use crate::numerical::zero_types::{Method, SolverParams, ZeroOutcome};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_eval::CompiledFunction;
use log::info;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::collections::HashMap;
use std::time::Instant;
use tabled::{builder::Builder, settings::Style};

/// Shared check of the parameters every method takes.
pub fn check_common_params(tol: f64, max_iter: usize) -> Result<(), ZeroFinderError> {
    if !(tol > 0.0) || !tol.is_finite() {
        return Err(ZeroFinderError::InvalidParameter(format!(
            "tolerance must be a positive finite number, got {}",
            tol
        )));
    }
    if max_iter < 1 {
        return Err(ZeroFinderError::InvalidParameter(
            "max_iterations must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Parses an expression of a single variable and compiles it into a checked
/// closure. Expressions with more than one free variable are rejected here,
/// before any solver runs.
pub fn compile(expr_str: &str) -> Result<(CompiledFunction, Expr), ZeroFinderError> {
    let expr = Expr::parse_expression(expr_str).map_err(ZeroFinderError::ParseError)?;
    let vars = expr.all_arguments_are_variables();
    if vars.len() > 1 {
        return Err(ZeroFinderError::ParseError(format!(
            "expected a function of one variable, found {:?}",
            vars
        )));
    }
    let f = expr.lambdify1D_checked();
    Ok((f, expr))
}

/// Exact analytic derivative of a compiled expression, as an expression.
pub fn derive_symbolic(expr: &Expr) -> Expr {
    let vars = expr.all_arguments_are_variables();
    let var = vars.first().map(|s| s.as_str()).unwrap_or("x");
    expr.diff(var)
}

/// Exact analytic derivative, compiled into a checked closure.
pub fn derive(expr: &Expr) -> CompiledFunction {
    derive_symbolic(expr).lambdify1D_checked()
}

/// Compiles an expression together with its analytic derivative, the pair
/// Newton-Raphson needs.
pub fn compile_and_derive(
    expr_str: &str,
) -> Result<(CompiledFunction, CompiledFunction, Expr, Expr), ZeroFinderError> {
    let (f, expr) = compile(expr_str)?;
    let d_expr = derive_symbolic(&expr);
    let df = d_expr.lambdify1D_checked();
    Ok((f, df, expr, d_expr))
}

fn require(name: &str, value: Option<f64>) -> Result<f64, ZeroFinderError> {
    value.ok_or_else(|| {
        ZeroFinderError::InvalidParameter(format!("missing required parameter {}", name))
    })
}

/// Dispatches a run to the chosen method. `derivative` is consulted only by
/// Newton-Raphson and is an error to omit there; missing method parameters
/// surface as `InvalidParameter` before any function evaluation.
pub fn solve(
    method: Method,
    f: &CompiledFunction,
    derivative: Option<&CompiledFunction>,
    params: &SolverParams,
) -> Result<ZeroOutcome, ZeroFinderError> {
    params.validate()?;
    let tol = params.tolerance;
    let max_iter = params.max_iterations;
    match method {
        Method::Bisection => {
            let a = require("a", params.a)?;
            let b = require("b", params.b)?;
            bisection(f, a, b, tol, max_iter)
        }
        Method::RegulaFalsi => {
            let a = require("a", params.a)?;
            let b = require("b", params.b)?;
            regula_falsi(f, a, b, tol, max_iter)
        }
        Method::Secant => {
            let x0 = require("x0", params.x0)?;
            let x1 = require("x1", params.x1)?;
            secant(f, x0, x1, tol, max_iter)
        }
        Method::NewtonRaphson => {
            let x0 = require("x0", params.x0)?;
            let df = derivative.ok_or_else(|| {
                ZeroFinderError::InvalidParameter(
                    "Newton-Raphson needs a derivative closure".to_string(),
                )
            })?;
            newton_raphson(f, df, x0, tol, max_iter)
        }
        Method::FixedPoint => {
            let x0 = require("x0", params.x0)?;
            fixed_point(f, x0, tol, max_iter)
        }
        Method::ModifiedSecant => {
            let x0 = require("x0", params.x0)?;
            let delta = require("delta", params.delta)?;
            modified_secant(f, x0, delta, tol, max_iter)
        }
    }
}

fn parse_field_f64(fields: &HashMap<String, String>, name: &str) -> Result<f64, ZeroFinderError> {
    let raw = fields.get(name).ok_or_else(|| {
        ZeroFinderError::InvalidParameter(format!("missing form field {}", name))
    })?;
    raw.trim().parse::<f64>().map_err(|_| {
        ZeroFinderError::InvalidParameter(format!("field {} is not a number: {:?}", name, raw))
    })
}

fn parse_optional_f64(
    fields: &HashMap<String, String>,
    name: &str,
) -> Result<Option<f64>, ZeroFinderError> {
    match fields.get(name) {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(parse_field_f64(fields, name)?)),
        _ => Ok(None),
    }
}

/// Form-style entry point: the whole task arrives as string fields
/// (`method`, `function`, `tolerance`, `max_iter`, `param_a`, `param_b`,
/// `param_x0`, `param_x1`, `param_delta`) the way a web front end posts
/// them. Everything is validated here; nothing panics on bad input.
pub fn solve_from_strings(
    fields: &HashMap<String, String>,
) -> Result<ZeroOutcome, ZeroFinderError> {
    let method_raw = fields.get("method").ok_or_else(|| {
        ZeroFinderError::InvalidParameter("missing form field method".to_string())
    })?;
    let method_id = method_raw.trim().parse::<usize>().map_err(|_| {
        ZeroFinderError::InvalidParameter(format!("method id is not a number: {:?}", method_raw))
    })?;
    let method = Method::from_id(method_id)?;

    let func_str = fields.get("function").ok_or_else(|| {
        ZeroFinderError::InvalidParameter("missing form field function".to_string())
    })?;
    let tolerance = parse_field_f64(fields, "tolerance")?;
    let max_iter_raw = fields.get("max_iter").ok_or_else(|| {
        ZeroFinderError::InvalidParameter("missing form field max_iter".to_string())
    })?;
    let max_iterations = max_iter_raw.trim().parse::<usize>().map_err(|_| {
        ZeroFinderError::InvalidParameter(format!(
            "max_iter is not a positive integer: {:?}",
            max_iter_raw
        ))
    })?;

    let params = SolverParams {
        tolerance,
        max_iterations,
        a: parse_optional_f64(fields, "param_a")?,
        b: parse_optional_f64(fields, "param_b")?,
        x0: parse_optional_f64(fields, "param_x0")?,
        x1: parse_optional_f64(fields, "param_x1")?,
        delta: parse_optional_f64(fields, "param_delta")?,
    };

    let (f, expr) = compile(func_str)?;
    let derivative = if method == Method::NewtonRaphson {
        let d_expr = derive_symbolic(&expr);
        info!("calculated derivative: {}", d_expr);
        Some(d_expr.lambdify1D_checked())
    } else {
        None
    };
    solve(method, &f, derivative.as_ref(), &params)
}

/// Struct-based facade over the engine: holds the task, runs the solver with
/// optional logging and keeps the outcome for later inspection.
pub struct ZeroFinder {
    pub equation: String,
    pub expr: Option<Expr>,
    pub method: Method,
    pub params: SolverParams,
    pub result: Option<ZeroOutcome>,
    pub loglevel: Option<String>,
    calc_statistics: HashMap<String, String>,
}

impl ZeroFinder {
    pub fn new() -> ZeroFinder {
        ZeroFinder {
            equation: String::new(),
            expr: None,
            method: Method::Bisection,
            params: SolverParams::default(),
            result: None,
            loglevel: Some("info".to_string()),
            calc_statistics: HashMap::new(),
        }
    }
    ////////////////////////////SETTERS///////////////////////////////////////
    /// Basic method to set the task: the equation, the method and the
    /// numeric parameters.
    pub fn set_task(&mut self, equation: &str, method: Method, params: SolverParams) {
        self.equation = equation.to_string();
        self.method = method;
        self.params = params;
        self.result = None;
    }

    pub fn set_solver_params(&mut self, loglevel: Option<String>) {
        self.loglevel = if let Some(level) = loglevel {
            assert!(
                level == "debug"
                    || level == "info"
                    || level == "warn"
                    || level == "error"
                    || level == "off"
                    || level == "none",
                "loglevel must be debug/info, warn, error or off"
            );
            Some(level)
        } else {
            self.loglevel.clone()
        };
    }
    /////////////////////////////////////////////////////////////////////////
    //                ITERATIONS
    /////////////////////////////////////////////////////////////////////////
    /// Compiles the equation and runs the chosen method to completion.
    pub fn main_loop(&mut self) -> Result<ZeroOutcome, ZeroFinderError> {
        let (f, expr) = compile(&self.equation)?;
        let derivative = if self.method == Method::NewtonRaphson {
            let d_expr = derive_symbolic(&expr);
            info!("calculated derivative: {}", d_expr);
            Some(d_expr.lambdify1D_checked())
        } else {
            None
        };
        self.expr = Some(expr);
        let outcome = solve(self.method, &f, derivative.as_ref(), &self.params)?;
        self.result = Some(outcome.clone());
        Ok(outcome)
    }
    /////////////////////////////////////////////////////////////////////////
    //        main functions to start the solver and collect statistics
    /////////////////////////////////////////////////////////////////////////

    pub fn solver(&mut self) -> Result<ZeroOutcome, ZeroFinderError> {
        let begin = Instant::now();
        let res = self.main_loop();
        let elapsed = begin.elapsed();
        self.calc_statistics.insert(
            "time elapsed, s".to_string(),
            format!("{:.6}", elapsed.as_secs_f64()),
        );
        if let Ok(outcome) = &res {
            self.calc_statistics.insert(
                "number of iterations".to_string(),
                outcome.iterations_used.to_string(),
            );
            self.calc_statistics
                .insert("root".to_string(), format!("{:.6}", outcome.root));
            info!("\n{}", format_trace(&outcome.trace));
            info!("\n{}", format_outcome(outcome));
        }
        self.calc_statistics();
        res
    }

    // wrapper around solver function to implement logging
    pub fn solve(&mut self) -> Result<ZeroOutcome, ZeroFinderError> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if is_logging_disabled {
            self.solver()
        } else {
            let log_option = match self.loglevel.as_deref() {
                Some("debug") | Some("info") | None => LevelFilter::Info,
                Some("warn") => LevelFilter::Warn,
                Some("error") => LevelFilter::Error,
                Some(other) => {
                    return Err(ZeroFinderError::InvalidParameter(format!(
                        "loglevel must be debug, info, warn or error, got {}",
                        other
                    )));
                }
            };
            let logger_instance = CombinedLogger::init(vec![TermLogger::new(
                log_option,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]);

            match logger_instance {
                Ok(()) => {
                    let res = self.solver();
                    info!(" \n \n Program ended");
                    res
                }
                // a logger set up by an earlier run is fine, solve anyway
                Err(_) => self.solver(),
            }
        }
    }

    pub fn get_result(&self) -> Option<ZeroOutcome> {
        self.result.clone()
    }

    fn calc_statistics(&self) {
        let stats = self.calc_statistics.clone();
        let mut table = Builder::from(stats).build();
        table.with(Style::modern_rounded());
        info!("\n \n CALC STATISTICS \n \n {}", table.to_string());
    }
}

impl Default for ZeroFinder {
    fn default() -> Self {
        ZeroFinder::new()
    }
}

///////////////////////////////////////////////////////////////////////////////
//                                     TESTS
///////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_compile_rejects_garbage() {
        assert!(matches!(
            compile("x +* 2"),
            Err(ZeroFinderError::ParseError(_))
        ));
        assert!(matches!(
            compile("x + y"),
            Err(ZeroFinderError::ParseError(_))
        ));
    }

    #[test]
    fn test_compile_and_derive_newton_pair() {
        let (f, df, _expr, d_expr) = compile_and_derive("x^2 - 2").unwrap();
        assert_relative_eq!(f(3.0).unwrap(), 7.0, epsilon = 1e-12);
        assert_relative_eq!(df(3.0).unwrap(), 6.0, epsilon = 1e-12);
        let d_compiled = d_expr.lambdify1D_checked();
        assert_relative_eq!(d_compiled(5.0).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_every_method_on_sqrt_two() {
        // fixed point gets the Babylonian map, everyone else the residual form
        for method in Method::iter() {
            let equation = if method == Method::FixedPoint {
                "(x + 2/x) / 2"
            } else {
                "x^2 - 2"
            };
            let (f, expr) = compile(equation).unwrap();
            let derivative = if method == Method::NewtonRaphson {
                Some(derive_symbolic(&expr).lambdify1D_checked())
            } else {
                None
            };
            let params = SolverParams {
                tolerance: 1e-8,
                max_iterations: 100,
                a: Some(1.0),
                b: Some(2.0),
                x0: Some(1.0),
                x1: Some(2.0),
                delta: Some(0.01),
            };
            let outcome = solve(method, &f, derivative.as_ref(), &params).unwrap();
            assert_relative_eq!(outcome.root, 2.0_f64.sqrt(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_solve_missing_params() {
        let (f, _expr) = compile("x^2 - 2").unwrap();
        let params = SolverParams::default();
        assert!(matches!(
            solve(Method::Bisection, &f, None, &params),
            Err(ZeroFinderError::InvalidParameter(_))
        ));
        assert!(matches!(
            solve(Method::NewtonRaphson, &f, None, &SolverParams {
                x0: Some(1.0),
                ..Default::default()
            }),
            Err(ZeroFinderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_solve_from_strings_round_trip() {
        let mut fields = HashMap::new();
        fields.insert("method".to_string(), "1".to_string());
        fields.insert("function".to_string(), "x^3 - x - 2".to_string());
        fields.insert("tolerance".to_string(), "1e-4".to_string());
        fields.insert("max_iter".to_string(), "50".to_string());
        fields.insert("param_a".to_string(), "1".to_string());
        fields.insert("param_b".to_string(), "2".to_string());
        let outcome = solve_from_strings(&fields).unwrap();
        assert_relative_eq!(outcome.root, 1.5214, epsilon = 1e-3);
    }

    #[test]
    fn test_solve_from_strings_newton_builds_derivative() {
        let mut fields = HashMap::new();
        fields.insert("method".to_string(), "4".to_string());
        fields.insert("function".to_string(), "x^2 - 2".to_string());
        fields.insert("tolerance".to_string(), "1e-6".to_string());
        fields.insert("max_iter".to_string(), "50".to_string());
        fields.insert("param_x0".to_string(), "1".to_string());
        let outcome = solve_from_strings(&fields).unwrap();
        assert_relative_eq!(outcome.root, 1.414214, epsilon = 1e-6);
    }

    #[test]
    fn test_solve_from_strings_bad_fields() {
        let mut fields = HashMap::new();
        fields.insert("method".to_string(), "9".to_string());
        fields.insert("function".to_string(), "x".to_string());
        fields.insert("tolerance".to_string(), "1e-6".to_string());
        fields.insert("max_iter".to_string(), "50".to_string());
        assert!(solve_from_strings(&fields).is_err());

        fields.insert("method".to_string(), "1".to_string());
        fields.insert("tolerance".to_string(), "not-a-number".to_string());
        assert!(matches!(
            solve_from_strings(&fields),
            Err(ZeroFinderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_parse_error_reported_before_solving() {
        let mut fields = HashMap::new();
        fields.insert("method".to_string(), "1".to_string());
        fields.insert("function".to_string(), "foo(x)".to_string());
        fields.insert("tolerance".to_string(), "1e-6".to_string());
        fields.insert("max_iter".to_string(), "50".to_string());
        fields.insert("param_a".to_string(), "1".to_string());
        fields.insert("param_b".to_string(), "2".to_string());
        assert!(matches!(
            solve_from_strings(&fields),
            Err(ZeroFinderError::ParseError(_))
        ));
    }

    #[test]
    fn test_zero_finder_facade() {
        let mut zero_instanse = ZeroFinder::new();
        zero_instanse.set_task(
            "x^3 - x - 2",
            Method::Bisection,
            SolverParams {
                a: Some(1.0),
                b: Some(2.0),
                tolerance: 1e-4,
                max_iterations: 50,
                ..Default::default()
            },
        );
        zero_instanse.main_loop().unwrap();
        let outcome = zero_instanse.get_result().unwrap();
        assert_relative_eq!(outcome.root, 1.5214, epsilon = 1e-3);
        assert!(zero_instanse.expr.is_some());
    }

    #[test]
    fn test_zero_finder_solve_with_logging_disabled() {
        let mut zero_instanse = ZeroFinder::new();
        zero_instanse.set_task(
            "x^2 - 2",
            Method::NewtonRaphson,
            SolverParams {
                x0: Some(1.0),
                tolerance: 1e-6,
                max_iterations: 50,
                ..Default::default()
            },
        );
        zero_instanse.set_solver_params(Some("off".to_string()));
        let outcome = zero_instanse.solve().unwrap();
        assert_relative_eq!(outcome.root, 1.414214, epsilon = 1e-6);
    }
}
