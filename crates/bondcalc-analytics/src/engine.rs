//! Aggregate bond analytics.

use bondcalc_math::solvers::SolverConfig;

use crate::cashflows::generate_cash_flows;
use crate::classification::classify_price;
use crate::types::{BondAnalyticsResult, BondParameters};
use crate::yields::{current_yield, total_interest, yield_to_maturity_detailed, YieldResult};

/// Computes every metric for one set of bond parameters.
///
/// Input is assumed valid; run [`crate::validation::validate`] first when it
/// comes from outside.
///
/// # Example
///
/// ```rust
/// use bondcalc_analytics::{compute_bond_analytics, BondParameters, CouponFrequency, PriceClassification};
///
/// let params = BondParameters::new(1000.0, 5.0, 1050.0, 10.0, CouponFrequency::SemiAnnual);
/// let result = compute_bond_analytics(&params);
///
/// assert_eq!(result.price_classification, PriceClassification::Premium);
/// assert_eq!(result.cash_flow_schedule.len(), 20);
/// ```
#[must_use]
pub fn compute_bond_analytics(params: &BondParameters) -> BondAnalyticsResult {
    compute_bond_analytics_with_config(params, &SolverConfig::default())
}

/// Same as [`compute_bond_analytics`] with a custom YTM solver configuration.
#[must_use]
pub fn compute_bond_analytics_with_config(
    params: &BondParameters,
    config: &SolverConfig,
) -> BondAnalyticsResult {
    compute_bond_analytics_detailed(params, config).0
}

/// Computes every metric and also returns the YTM solver diagnostics.
///
/// The reported `ytm` is taken from the returned [`YieldResult`].
#[must_use]
pub fn compute_bond_analytics_detailed(
    params: &BondParameters,
    config: &SolverConfig,
) -> (BondAnalyticsResult, YieldResult) {
    let ytm = yield_to_maturity_detailed(params, config);
    let result = BondAnalyticsResult {
        current_yield: current_yield(params),
        ytm: ytm.ytm,
        total_interest_earned: total_interest(params),
        price_classification: classify_price(params),
        cash_flow_schedule: generate_cash_flows(params),
    };
    (result, ytm)
}
