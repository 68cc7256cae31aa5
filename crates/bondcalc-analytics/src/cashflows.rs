//! Cash flow schedule generation.

use crate::types::{BondParameters, CashFlow};

/// Coupon paid each period: `faceValue * annualCouponRate / 100 / frequency`.
#[must_use]
pub fn coupon_payment(params: &BondParameters) -> f64 {
    params.face_value * (params.annual_coupon_rate / 100.0) / params.coupon_frequency.as_f64()
}

/// Number of coupon periods remaining.
///
/// `yearsToMaturity * frequency` rounded to the nearest integer, ties
/// rounding up. Zero, negative or non-finite products give zero periods.
#[must_use]
pub fn num_periods(params: &BondParameters) -> u32 {
    let periods = (params.years_to_maturity * params.coupon_frequency.as_f64()).round();
    if periods.is_finite() && periods > 0.0 {
        // Saturates at u32::MAX.
        periods as u32
    } else {
        0
    }
}

/// Generates the full schedule of cash flows for the life of the bond.
///
/// Every period pays the coupon; the last one also returns the face value
/// and is flagged as principal. An empty schedule is returned when the
/// maturity rounds to zero periods.
///
/// # Example
///
/// ```rust
/// use bondcalc_analytics::cashflows::generate_cash_flows;
/// use bondcalc_analytics::types::{BondParameters, CouponFrequency};
///
/// let params = BondParameters::new(1000.0, 5.0, 950.0, 10.0, CouponFrequency::SemiAnnual);
/// let flows = generate_cash_flows(&params);
///
/// assert_eq!(flows.len(), 20);
/// assert_eq!(flows[19].amount, 1025.0);
/// ```
#[must_use]
pub fn generate_cash_flows(params: &BondParameters) -> Vec<CashFlow> {
    let coupon = coupon_payment(params);
    let n = num_periods(params);

    (1..=n)
        .map(|period| {
            let is_principal = period == n;
            CashFlow {
                period,
                amount: if is_principal {
                    coupon + params.face_value
                } else {
                    coupon
                },
                is_principal,
            }
        })
        .collect()
}
