//! Newton-Raphson root-finding algorithm.

use crate::solvers::{Differentiable, SolverConfig, SolverResult, Termination};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// Each iteration first checks `|f(x)| < tolerance` and returns `x` if so.
/// A derivative of exactly zero stops the search at the current iterate.
/// Otherwise the loop runs until `max_iterations` is spent and the last
/// iterate is returned. None of these outcomes is an error; inspect
/// [`SolverResult::termination`] to tell them apart.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use bondcalc_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let config = SolverConfig::default().with_tolerance(1e-12);
/// let result = newton_raphson(f, df, 1.5, &config);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(f: F, df: DF, initial_guess: f64, config: &SolverConfig) -> SolverResult
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    newton_solve(&(f, df), initial_guess, config)
}

/// Newton-Raphson over a [`Differentiable`] value.
///
/// Same algorithm as [`newton_raphson`], for functions that carry their own
/// constants in a struct instead of closures.
pub fn newton_solve<D>(function: &D, initial_guess: f64, config: &SolverConfig) -> SolverResult
where
    D: Differentiable + ?Sized,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = function.value(x);

        if fx.abs() < config.tolerance {
            return SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
                termination: Termination::Converged,
            };
        }

        let dfx = function.derivative(x);

        if dfx == 0.0 {
            log::debug!("newton: zero derivative at x = {x} after {iteration} iterations");
            return SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
                termination: Termination::FlatDerivative,
            };
        }

        x -= fx / dfx;
    }

    // The final step is never checked inside the loop.
    let residual = function.value(x);
    let termination = if residual.abs() < config.tolerance {
        Termination::Converged
    } else {
        log::debug!(
            "newton: no convergence after {} iterations (residual {residual:.3e})",
            config.max_iterations
        );
        Termination::MaxIterations
    };

    SolverResult {
        root: x,
        iterations: config.max_iterations,
        residual,
        termination,
    }
}
