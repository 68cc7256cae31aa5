//! Input validation.
//!
//! The analytics functions assume in-domain input and never check it
//! themselves. Front ends run [`validate`] (or [`validate_all`] to report
//! every problem at once) before calling into the engine.
//!
//! Domain:
//! - `faceValue`, `marketPrice`: finite and > 0
//! - `yearsToMaturity`: finite, > 0 and at most [`MAX_YEARS_TO_MATURITY`]
//! - `annualCouponRate`: finite and within `[0, 100]`
//! - `couponFrequency`: 1 or 2, enforced by [`CouponFrequency`]
//!
//! [`CouponFrequency`]: crate::types::CouponFrequency

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::BondParameters;

/// Lowest accepted annual coupon rate, in percent.
pub const MIN_COUPON_RATE: f64 = 0.0;

/// Highest accepted annual coupon rate, in percent.
pub const MAX_COUPON_RATE: f64 = 100.0;

/// Longest accepted maturity, in years. Bounds the cash flow schedule at
/// 2000 entries.
pub const MAX_YEARS_TO_MATURITY: f64 = 1000.0;

/// Checks the parameters, returning the first violation found.
pub fn validate(params: &BondParameters) -> AnalyticsResult<()> {
    match validate_all(params).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Checks the parameters and returns every violation, in field order.
#[must_use]
pub fn validate_all(params: &BondParameters) -> Vec<AnalyticsError> {
    let checks = [
        check_positive("faceValue", params.face_value),
        check_range(
            "annualCouponRate",
            params.annual_coupon_rate,
            MIN_COUPON_RATE,
            MAX_COUPON_RATE,
        ),
        check_positive("marketPrice", params.market_price),
        check_positive("yearsToMaturity", params.years_to_maturity).and_then(|()| {
            check_range(
                "yearsToMaturity",
                params.years_to_maturity,
                0.0,
                MAX_YEARS_TO_MATURITY,
            )
        }),
    ];

    checks.into_iter().filter_map(Result::err).collect()
}

fn check_finite(field: &'static str, value: f64) -> AnalyticsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticsError::NotFinite { field })
    }
}

fn check_positive(field: &'static str, value: f64) -> AnalyticsResult<()> {
    if check_finite(field, value)? <= 0.0 {
        return Err(AnalyticsError::NotPositive { field, value });
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> AnalyticsResult<()> {
    if !(min..=max).contains(&check_finite(field, value)?) {
        return Err(AnalyticsError::OutOfBounds {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CouponFrequency;

    fn valid() -> BondParameters {
        BondParameters::new(1000.0, 5.0, 950.0, 10.0, CouponFrequency::SemiAnnual)
    }

    #[test]
    fn test_valid_parameters() {
        assert!(validate(&valid()).is_ok());
        assert!(validate_all(&valid()).is_empty());
    }

    #[test]
    fn test_boundary_coupon_rates() {
        let mut params = valid();
        params.annual_coupon_rate = 0.0;
        assert!(validate(&params).is_ok());
        params.annual_coupon_rate = 100.0;
        assert!(validate(&params).is_ok());
        params.annual_coupon_rate = 100.01;
        assert!(matches!(
            validate(&params),
            Err(AnalyticsError::OutOfBounds {
                field: "annualCouponRate",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_fields() {
        let mut params = valid();
        params.market_price = 0.0;
        assert_eq!(
            validate(&params),
            Err(AnalyticsError::NotPositive {
                field: "marketPrice",
                value: 0.0
            })
        );

        let mut params = valid();
        params.years_to_maturity = -1.0;
        assert_eq!(validate(&params).unwrap_err().field(), Some("yearsToMaturity"));
    }

    #[test]
    fn test_maturity_upper_bound() {
        let mut params = valid();
        params.years_to_maturity = MAX_YEARS_TO_MATURITY;
        assert!(validate(&params).is_ok());

        params.years_to_maturity = 3.0e9;
        assert_eq!(
            validate(&params),
            Err(AnalyticsError::OutOfBounds {
                field: "yearsToMaturity",
                value: 3.0e9,
                min: 0.0,
                max: MAX_YEARS_TO_MATURITY,
            })
        );
    }

    #[test]
    fn test_non_finite_fields() {
        let mut params = valid();
        params.face_value = f64::INFINITY;
        assert_eq!(
            validate(&params),
            Err(AnalyticsError::NotFinite { field: "faceValue" })
        );

        params.face_value = 1000.0;
        params.annual_coupon_rate = f64::NAN;
        assert_eq!(
            validate(&params),
            Err(AnalyticsError::NotFinite {
                field: "annualCouponRate"
            })
        );
    }

    #[test]
    fn test_validate_all_collects_in_field_order() {
        let params = BondParameters::new(-1.0, 150.0, 0.0, 0.0, CouponFrequency::Annual);
        let fields: Vec<_> = validate_all(&params)
            .iter()
            .filter_map(AnalyticsError::field)
            .collect();

        assert_eq!(
            fields,
            vec!["faceValue", "annualCouponRate", "marketPrice", "yearsToMaturity"]
        );
        assert_eq!(validate(&params).unwrap_err().field(), Some("faceValue"));
    }
}
