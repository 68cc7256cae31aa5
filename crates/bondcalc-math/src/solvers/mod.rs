//! Root-finding algorithms.
//!
//! This module provides the Newton-Raphson solver used for yield
//! calculations. The solver never fails: it always hands back its last
//! iterate together with a [`Termination`] describing why it stopped, and
//! callers that need a hard guarantee can convert the result with
//! [`SolverResult::into_converged`].
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use bondcalc_math::solvers::{newton_raphson, SolverConfig};
//!
//! // Bond: 5% annual coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let d_price_fn = |y: f64| {
//!     let mut dpv = 0.0;
//!     for t in 1..=5 {
//!         dpv -= f64::from(t) * 5.0 / (1.0 + y).powi(t + 1);
//!     }
//!     dpv -= 5.0 * 100.0 / (1.0 + y).powi(6);
//!     dpv
//! };
//!
//! let result = newton_raphson(price_fn, d_price_fn, 0.05, &SolverConfig::default());
//! assert!(result.is_converged());
//! assert!(result.root > 0.05); // YTM > coupon rate for discount bond
//! ```

mod newton;

pub use newton::{newton_raphson, newton_solve};

use std::fmt;

use crate::error::{MathError, MathResult};

/// Default tolerance on `|f(x)|` for root-finding.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default maximum iterations for root-finding.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence threshold on the absolute function value.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Creates a configuration, rejecting a non-positive or non-finite
    /// tolerance and a zero iteration budget.
    pub fn try_new(tolerance: f64, max_iterations: u32) -> MathResult<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {tolerance}"
            )));
        }
        if max_iterations == 0 {
            return Err(MathError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        Ok(Self::new(tolerance, max_iterations))
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// A real function paired with its first derivative.
///
/// Implement this on a small struct holding whatever constants the function
/// closes over; the solver only needs the two evaluations.
pub trait Differentiable {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates the first derivative at `x`.
    fn derivative(&self, x: f64) -> f64;
}

impl<F, DF> Differentiable for (F, DF)
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.1)(x)
    }
}

/// Why a solver stopped iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// `|f(root)|` fell below the tolerance.
    Converged,
    /// The derivative was exactly zero, so no step could be taken.
    FlatDerivative,
    /// The iteration budget ran out before reaching the tolerance.
    MaxIterations,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Termination::Converged => "converged",
            Termination::FlatDerivative => "flat derivative",
            Termination::MaxIterations => "max iterations",
        };
        write!(f, "{name}")
    }
}

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The last iterate. Only a true root when `termination` is
    /// [`Termination::Converged`].
    pub root: f64,
    /// Number of Newton steps taken.
    pub iterations: u32,
    /// Function value at `root`.
    pub residual: f64,
    /// Why the solver stopped.
    pub termination: Termination,
}

impl SolverResult {
    /// Returns true if the residual met the tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Turns a best-effort result into an error unless it converged.
    pub fn into_converged(self) -> MathResult<Self> {
        match self.termination {
            Termination::Converged => Ok(self),
            Termination::FlatDerivative => Err(MathError::DivisionByZero {
                value: 0.0,
                at: self.root,
            }),
            Termination::MaxIterations => Err(MathError::convergence_failed(
                self.iterations,
                self.residual.abs(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-7);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_try_new_rejects_bad_values() {
        assert!(SolverConfig::try_new(0.0, 10).is_err());
        assert!(SolverConfig::try_new(-1e-7, 10).is_err());
        assert!(SolverConfig::try_new(f64::NAN, 10).is_err());
        assert!(SolverConfig::try_new(1e-7, 0).is_err());
        assert_eq!(
            SolverConfig::try_new(1e-9, 20).unwrap(),
            SolverConfig::new(1e-9, 20)
        );
    }

    #[test]
    fn test_tuple_is_differentiable() {
        let pair = (|x: f64| x * x, |x: f64| 2.0 * x);
        assert_eq!(pair.value(3.0), 9.0);
        assert_eq!(pair.derivative(3.0), 6.0);
    }

    #[test]
    fn test_into_converged() {
        let ok = SolverResult {
            root: 1.0,
            iterations: 3,
            residual: 1e-12,
            termination: Termination::Converged,
        };
        assert!(ok.into_converged().is_ok());

        let flat = SolverResult {
            termination: Termination::FlatDerivative,
            ..ok
        };
        assert!(matches!(
            flat.into_converged(),
            Err(MathError::DivisionByZero { .. })
        ));

        let exhausted = SolverResult {
            termination: Termination::MaxIterations,
            iterations: 100,
            residual: -0.5,
            ..ok
        };
        match exhausted.into_converged() {
            Err(MathError::ConvergenceFailed {
                iterations,
                residual,
            }) => {
                assert_eq!(iterations, 100);
                assert_eq!(residual, 0.5);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_termination_display() {
        assert_eq!(Termination::Converged.to_string(), "converged");
        assert_eq!(Termination::MaxIterations.to_string(), "max iterations");
    }
}
