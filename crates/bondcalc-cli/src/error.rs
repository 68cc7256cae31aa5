//! CLI error types.

use bondcalc_analytics::AnalyticsError;
use bondcalc_math::solvers::Termination;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more bond parameters are out of domain.
    #[error("Invalid bond parameters: {}", join(.0))]
    InvalidParameters(Vec<AnalyticsError>),

    /// Solver settings were rejected.
    #[error("Invalid solver settings: {0}")]
    InvalidSolver(#[from] bondcalc_math::MathError),

    /// The YTM solver stopped short of its tolerance in strict mode.
    #[error("YTM solver did not converge: {termination} after {iterations} iterations")]
    NotConverged {
        /// Why the solver stopped.
        termination: Termination,
        /// Iterations spent.
        iterations: u32,
    },
}

fn join(errors: &[AnalyticsError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
