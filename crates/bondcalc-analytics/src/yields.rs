//! Yield calculations.
//!
//! - **Current Yield**: annual coupon divided by market price.
//! - **Total Interest**: nominal coupon income over the life of the bond.
//! - **Yield-to-Maturity (YTM)**: the per-period discount rate that prices
//!   the remaining cash flows at the market price, annualized. Solved with
//!   Newton-Raphson since there is no closed form for more than one period.
//!
//! # Convergence
//!
//! [`yield_to_maturity`] reports whatever rate the solver stopped at, even
//! when the residual never met the tolerance. Use
//! [`yield_to_maturity_detailed`] to see the [`Termination`], or
//! [`yield_to_maturity_strict`] to get an error instead.

use bondcalc_math::solvers::{newton_solve, Differentiable, SolverConfig, Termination};

use crate::cashflows::{coupon_payment, num_periods};
use crate::error::AnalyticsResult;
use crate::types::BondParameters;

/// Calculates the current yield as a percentage.
///
/// Returns `0` when the market price is zero or negative.
///
/// # Example
///
/// ```rust
/// use bondcalc_analytics::types::{BondParameters, CouponFrequency};
/// use bondcalc_analytics::yields::current_yield;
///
/// let params = BondParameters::new(1000.0, 5.0, 1000.0, 10.0, CouponFrequency::SemiAnnual);
/// assert_eq!(current_yield(&params), 5.0);
/// ```
#[must_use]
pub fn current_yield(params: &BondParameters) -> f64 {
    let annual_coupon = params.annual_coupon();

    if params.market_price <= 0.0 {
        return 0.0;
    }

    (annual_coupon / params.market_price) * 100.0
}

/// Total nominal coupon income: annual coupon times years to maturity.
#[must_use]
pub fn total_interest(params: &BondParameters) -> f64 {
    params.annual_coupon() * params.years_to_maturity
}

/// Bond price minus market price as a function of the per-period yield.
///
/// ```text
/// f(r)  =  Σ C/(1+r)^t  +  F/(1+r)^n  -  P
/// f'(r) = -Σ t·C/(1+r)^(t+1)  -  n·F/(1+r)^(n+1)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondPriceFunction {
    /// Coupon paid each period.
    pub coupon_payment: f64,
    /// Principal repaid with the last coupon.
    pub face_value: f64,
    /// Target price.
    pub market_price: f64,
    /// Number of coupon periods.
    pub num_periods: u32,
}

impl BondPriceFunction {
    /// Builds the pricing function for a bond.
    #[must_use]
    pub fn new(params: &BondParameters) -> Self {
        Self {
            coupon_payment: coupon_payment(params),
            face_value: params.face_value,
            market_price: params.market_price,
            num_periods: num_periods(params),
        }
    }

    /// Present value of the cash flows at per-period rate `r`.
    #[must_use]
    pub fn present_value(&self, r: f64) -> f64 {
        let base = 1.0 + r;
        let n = self.exponent();
        let coupons: f64 = (1..=n).map(|t| self.coupon_payment / base.powi(t)).sum();
        coupons + self.face_value / base.powi(n)
    }

    /// Classic bond-yield approximation used to seed the solver.
    ///
    /// `(C + (F - P)/n) / ((F + P)/2)`, falling back to `5% / frequency`
    /// when that is not a finite number (for example with zero periods).
    #[must_use]
    pub fn initial_guess(&self, periods_per_year: f64) -> f64 {
        let guess = (self.coupon_payment
            + (self.face_value - self.market_price) / f64::from(self.num_periods))
            / ((self.face_value + self.market_price) / 2.0);

        if guess.is_finite() {
            guess
        } else {
            0.05 / periods_per_year
        }
    }

    fn exponent(&self) -> i32 {
        i32::try_from(self.num_periods).unwrap_or(i32::MAX)
    }
}

impl Differentiable for BondPriceFunction {
    fn value(&self, r: f64) -> f64 {
        self.present_value(r) - self.market_price
    }

    fn derivative(&self, r: f64) -> f64 {
        let base = 1.0 + r;
        let n = self.exponent();
        let coupons: f64 = (1..=n)
            .map(|t| discounted_sensitivity(base, t, self.coupon_payment))
            .sum();
        -coupons - discounted_sensitivity(base, n, self.face_value)
    }
}

/// `t * amount / base^(t + 1)`, the slope contribution of a flow paid at `t`.
///
/// The exponent saturates at `i32::MAX`.
fn discounted_sensitivity(base: f64, t: i32, amount: f64) -> f64 {
    f64::from(t) * amount / base.powi(t.saturating_add(1))
}

/// Detailed YTM output including solver diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldResult {
    /// Annualized yield as a percentage.
    pub ytm: f64,
    /// Per-period rate returned by the solver, as a decimal.
    pub rate_per_period: f64,
    /// Seed given to the solver.
    pub initial_guess: f64,
    /// Newton steps taken.
    pub iterations: u32,
    /// Why the solver stopped.
    pub termination: Termination,
}

impl YieldResult {
    fn matured() -> Self {
        Self {
            ytm: 0.0,
            rate_per_period: 0.0,
            initial_guess: 0.0,
            iterations: 0,
            termination: Termination::Converged,
        }
    }

    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Calculates yield to maturity as an annualized percentage.
///
/// Returns `0` for a bond with no time left to maturity. The solver result
/// is reported as-is whether or not it converged.
///
/// # Example
///
/// ```rust
/// use bondcalc_analytics::types::{BondParameters, CouponFrequency};
/// use bondcalc_analytics::yields::yield_to_maturity;
///
/// let params = BondParameters::new(1000.0, 5.0, 950.0, 10.0, CouponFrequency::SemiAnnual);
/// let ytm = yield_to_maturity(&params);
/// assert!((ytm - 5.66).abs() < 0.005);
/// ```
#[must_use]
pub fn yield_to_maturity(params: &BondParameters) -> f64 {
    yield_to_maturity_detailed(params, &SolverConfig::default()).ytm
}

/// Calculates yield to maturity and returns the solver diagnostics with it.
#[must_use]
pub fn yield_to_maturity_detailed(params: &BondParameters, config: &SolverConfig) -> YieldResult {
    if params.years_to_maturity <= 0.0 {
        return YieldResult::matured();
    }

    let frequency = params.coupon_frequency.as_f64();
    let function = BondPriceFunction::new(params);
    let initial_guess = function.initial_guess(frequency);

    let solved = newton_solve(&function, initial_guess, config);

    if solved.is_converged() {
        log::debug!(
            "ytm converged in {} iterations (rate per period {:.8})",
            solved.iterations,
            solved.root
        );
    } else {
        log::warn!(
            "ytm solver stopped without converging ({}) after {} iterations, residual {:.3e}",
            solved.termination,
            solved.iterations,
            solved.residual
        );
    }

    YieldResult {
        ytm: solved.root * frequency * 100.0,
        rate_per_period: solved.root,
        initial_guess,
        iterations: solved.iterations,
        termination: solved.termination,
    }
}

/// Calculates yield to maturity, failing if the solver did not converge.
pub fn yield_to_maturity_strict(
    params: &BondParameters,
    config: &SolverConfig,
) -> AnalyticsResult<f64> {
    if params.years_to_maturity <= 0.0 {
        return Ok(0.0);
    }

    let frequency = params.coupon_frequency.as_f64();
    let function = BondPriceFunction::new(params);
    let solved = newton_solve(&function, function.initial_guess(frequency), config).into_converged()?;

    Ok(solved.root * frequency * 100.0)
}
