#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedZeroFinder::symbolic::symbolic_engine::Expr;
/// let input = "x^3 - x - 2";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let f = parsed_expression.lambdify1D_checked();
/// println!("{}, f(2) = {:?} \n", input, f(2.0));
/// ```
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the symbolic expression tree for functions of one free variable
/// 2) turns a symbolic expression into a checked Rust function
/// 3) turns a symbolic expression into a string expression for printing and control of results
///# Example#
/// ```
/// use RustedZeroFinder::symbolic::symbolic_engine::Expr;
/// let input = "exp(x) - 2";
/// // here you've got symbolic expression
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// // differentiate with respect to x
/// let df_dx = parsed_expression.diff("x");
/// println!("df_dx = {}", df_dx);
/// // convert symbolic expression to a Rust function and evaluate the function
/// let f = parsed_expression.lambdify1D_checked();
/// let f_res = f(0.0).unwrap();
/// println!("f_res = {}", f_res);
/// ```
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
/// checked evaluation of a symbolic expression: domain errors (log of
/// non-positive, division by zero, sqrt of negative, overflow) are returned
/// as controlled failures instead of NaN/inf propagation
pub mod symbolic_eval;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
