//! Property-based tests for analytics invariants.
//!
//! These tests verify properties that should hold for any in-domain bond:
//! - The schedule has one entry per period, numbered 1..=n, principal last
//! - Schedule amounts sum to total interest plus face value
//! - Classification agrees with the sign of price minus face
//! - A par bond yields its coupon
//! - The solved YTM reprices the bond

use approx::assert_abs_diff_eq;
use bondcalc_analytics::prelude::*;
use bondcalc_math::solvers::{Differentiable, SolverConfig};
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

fn frequency() -> impl Strategy<Value = CouponFrequency> {
    prop_oneof![Just(CouponFrequency::Annual), Just(CouponFrequency::SemiAnnual)]
}

fn bond() -> impl Strategy<Value = BondParameters> {
    (
        100.0f64..10_000.0,
        0.0f64..=100.0,
        1.0f64..20_000.0,
        0.1f64..50.0,
        frequency(),
    )
        .prop_map(|(face, coupon, price, years, freq)| {
            BondParameters::new(face, coupon, price, years, freq)
        })
}

/// Bonds with a whole number of periods and a price near face.
fn priced_bond() -> impl Strategy<Value = BondParameters> {
    (
        100.0f64..10_000.0,
        0.0f64..12.0,
        0.7f64..1.3,
        1u32..=60,
        frequency(),
    )
        .prop_map(|(face, coupon, price_ratio, periods, freq)| {
            let years = f64::from(periods) / freq.as_f64();
            BondParameters::new(face, coupon, face * price_ratio, years, freq)
        })
}

// =============================================================================
// SCHEDULE
// =============================================================================

proptest! {
    #[test]
    fn schedule_has_one_flow_per_period(params in bond()) {
        let flows = generate_cash_flows(&params);
        let expected = (params.years_to_maturity * params.coupon_frequency.as_f64()).round() as usize;

        prop_assert_eq!(flows.len(), expected);
        prop_assert_eq!(flows.len(), num_periods(&params) as usize);

        for (i, flow) in flows.iter().enumerate() {
            prop_assert_eq!(flow.period as usize, i + 1);
        }

        let principal: Vec<_> = flows.iter().filter(|cf| cf.is_principal).collect();
        if flows.is_empty() {
            prop_assert!(principal.is_empty());
        } else {
            prop_assert_eq!(principal.len(), 1);
            prop_assert!(flows.last().unwrap().is_principal);
        }
    }

    #[test]
    fn schedule_sums_to_interest_plus_face(params in priced_bond()) {
        let total: f64 = generate_cash_flows(&params).iter().map(|cf| cf.amount).sum();
        let expected = total_interest(&params) + params.face_value;

        prop_assert!((total - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    // =========================================================================
    // CLASSIFICATION AND CURRENT YIELD
    // =========================================================================

    #[test]
    fn classification_matches_price_sign(params in bond()) {
        let diff = params.market_price - params.face_value;
        let classification = classify_price(&params);

        if diff > 1e-10 {
            prop_assert_eq!(classification, PriceClassification::Premium);
        } else if diff < -1e-10 {
            prop_assert_eq!(classification, PriceClassification::Discount);
        } else {
            prop_assert_eq!(classification, PriceClassification::Par);
        }
    }

    #[test]
    fn equal_price_is_par(params in bond()) {
        let at_par = params.with_market_price(params.face_value);
        prop_assert_eq!(classify_price(&at_par), PriceClassification::Par);
    }

    #[test]
    fn current_yield_zero_for_non_positive_price(params in bond(), price in -1_000.0f64..=0.0) {
        prop_assert_eq!(current_yield(&params.with_market_price(price)), 0.0);
    }

    // =========================================================================
    // YIELD TO MATURITY
    // =========================================================================

    #[test]
    fn par_bond_yields_coupon(params in priced_bond()) {
        let at_par = params.with_market_price(params.face_value);
        let ytm = yield_to_maturity(&at_par);

        prop_assert!((ytm - at_par.annual_coupon_rate).abs() < 1e-4);
    }

    #[test]
    fn ytm_reprices_bond(params in priced_bond()) {
        let result = yield_to_maturity_detailed(&params, &SolverConfig::default());
        prop_assert!(result.is_converged());

        let function = BondPriceFunction::new(&params);
        prop_assert!(function.value(result.rate_per_period).abs() < 1e-7);
    }

    #[test]
    fn ytm_ordering_follows_classification(params in priced_bond()) {
        let ytm = yield_to_maturity(&params);
        let coupon = params.annual_coupon_rate;

        match classify_price(&params) {
            PriceClassification::Discount => prop_assert!(ytm > coupon - 1e-6),
            PriceClassification::Premium => prop_assert!(ytm < coupon + 1e-6),
            PriceClassification::Par => prop_assert!((ytm - coupon).abs() < 1e-4),
        }
    }
}

#[test]
fn analytics_are_deterministic() {
    let params = BondParameters::new(1000.0, 5.0, 950.0, 10.0, CouponFrequency::SemiAnnual);
    assert_eq!(compute_bond_analytics(&params), compute_bond_analytics(&params));
    assert_abs_diff_eq!(
        yield_to_maturity(&params),
        compute_bond_analytics(&params).ytm,
        epsilon = 0.0
    );
}
