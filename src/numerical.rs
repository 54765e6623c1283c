/// failure taxonomy of the zero-finding engine
pub mod errors;
/// shared data model: method set, solver parameters, iteration records and outcomes
pub mod zero_types;
///  Example#1
/// ```
///  use RustedZeroFinder::numerical::zero_api::ZeroFinder;
///  use RustedZeroFinder::numerical::zero_types::{Method, SolverParams};
/// // use the shortest way to find a zero of a function
/// // first define the equation, the method and the numeric parameters
///    let mut zero_instanse = ZeroFinder::new();
///    zero_instanse.set_task(
///        "x^3 - x - 2",
///        Method::Bisection,
///        SolverParams { a: Some(1.0), b: Some(2.0), tolerance: 1e-4, max_iterations: 50, ..Default::default() },
///    );
///    // solve
///    zero_instanse.main_loop().unwrap();
///    println!("result = {:?} \n", zero_instanse.get_result().unwrap().root);
///  ```
pub mod zero_api;

/// the six iterative root-finding algorithms, one module per method
pub mod bisection;
pub mod fixed_point;
pub mod modified_secant;
pub mod newton_raphson;
pub mod regula_falsi;
pub mod secant;

/// rendering of iteration traces into human-readable tables
pub mod reporting;
