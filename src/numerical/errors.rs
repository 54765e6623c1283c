use crate::symbolic::symbolic_eval::EvalError;
use thiserror::Error;

/// Failure taxonomy of the zero-finding engine.
///
/// Every failure is caught at the point of origin and returned as a value;
/// nothing in the solver path panics on user input. Front ends only need the
/// `Display` text, but the kind is preserved for testability.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZeroFinderError {
    /// malformed expression string
    #[error("failed to parse expression: {0}")]
    ParseError(String),
    /// function undefined at an evaluation point reached by the iteration
    #[error("domain error: {0}")]
    DomainError(#[from] EvalError),
    /// non-positive tolerance, non-positive iteration cap, missing or
    /// unparsable method parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// sign-change precondition violated for a bracketing method
    #[error("bracketing error: {0}")]
    BracketingError(String),
    /// zero denominator in an update formula
    #[error("singular update: {0}")]
    SingularUpdate(String),
    /// runaway iterate escape hatch, fixed-point iteration only
    #[error("divergence: {0}")]
    Divergence(String),
}

impl ZeroFinderError {
    /// Human-readable detail for front ends that follow the uniform
    /// "show the message" policy.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}
