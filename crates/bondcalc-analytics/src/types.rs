//! Bond inputs and analytics outputs.
//!
//! All types serialize with camelCase field names so they can be used
//! directly as the request/response bodies of the calculation endpoint.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AnalyticsError;

/// Coupon payments per year.
///
/// Serialized as the bare integer `1` or `2`. Deserializing also accepts an
/// integral float (`2.0`) or a numeric string (`"2"`); any other value is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub enum CouponFrequency {
    /// One coupon per year.
    Annual,
    /// Two coupons per year.
    #[default]
    SemiAnnual,
}

impl CouponFrequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(self) -> u8 {
        match self {
            CouponFrequency::Annual => 1,
            CouponFrequency::SemiAnnual => 2,
        }
    }

    /// Periods per year as a float, for use in formulas.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.periods_per_year())
    }
}

impl TryFrom<u8> for CouponFrequency {
    type Error = AnalyticsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CouponFrequency::Annual),
            2 => Ok(CouponFrequency::SemiAnnual),
            other => Err(AnalyticsError::InvalidInput(format!(
                "couponFrequency must be 1 or 2, got {other}"
            ))),
        }
    }
}

impl TryFrom<f64> for CouponFrequency {
    type Error = AnalyticsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        match value {
            v if v == 1.0 => Ok(CouponFrequency::Annual),
            v if v == 2.0 => Ok(CouponFrequency::SemiAnnual),
            other => Err(AnalyticsError::InvalidInput(format!(
                "couponFrequency must be 1 or 2, got {other}"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for CouponFrequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CouponFrequencyVisitor;

        impl<'de> Visitor<'de> for CouponFrequencyVisitor {
            type Value = CouponFrequency;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("couponFrequency 1 or 2")
            }

            fn visit_u64<E>(self, value: u64) -> Result<CouponFrequency, E>
            where
                E: de::Error,
            {
                u8::try_from(value)
                    .map_err(|_| E::custom(format!("couponFrequency must be 1 or 2, got {value}")))
                    .and_then(|v| CouponFrequency::try_from(v).map_err(E::custom))
            }

            fn visit_i64<E>(self, value: i64) -> Result<CouponFrequency, E>
            where
                E: de::Error,
            {
                u8::try_from(value)
                    .map_err(|_| E::custom(format!("couponFrequency must be 1 or 2, got {value}")))
                    .and_then(|v| CouponFrequency::try_from(v).map_err(E::custom))
            }

            fn visit_f64<E>(self, value: f64) -> Result<CouponFrequency, E>
            where
                E: de::Error,
            {
                CouponFrequency::try_from(value).map_err(E::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<CouponFrequency, E>
            where
                E: de::Error,
            {
                let number = value.trim().parse::<f64>().map_err(|_| {
                    E::custom(format!("couponFrequency must be 1 or 2, got {value:?}"))
                })?;
                self.visit_f64(number)
            }
        }

        deserializer.deserialize_any(CouponFrequencyVisitor)
    }
}

impl From<CouponFrequency> for u8 {
    fn from(frequency: CouponFrequency) -> Self {
        frequency.periods_per_year()
    }
}

impl fmt::Display for CouponFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CouponFrequency::Annual => "Annual",
            CouponFrequency::SemiAnnual => "Semi-Annual",
        };
        write!(f, "{name}")
    }
}

/// The five inputs every calculation is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondParameters {
    /// Par value repaid at maturity.
    pub face_value: f64,
    /// Annual coupon as a percentage of face value (5.0 for 5%).
    pub annual_coupon_rate: f64,
    /// Current trading price.
    pub market_price: f64,
    /// Time remaining until maturity, in years.
    pub years_to_maturity: f64,
    /// Coupon payments per year.
    pub coupon_frequency: CouponFrequency,
}

impl BondParameters {
    /// Creates a new set of bond parameters.
    #[must_use]
    pub fn new(
        face_value: f64,
        annual_coupon_rate: f64,
        market_price: f64,
        years_to_maturity: f64,
        coupon_frequency: CouponFrequency,
    ) -> Self {
        Self {
            face_value,
            annual_coupon_rate,
            market_price,
            years_to_maturity,
            coupon_frequency,
        }
    }

    /// Returns a copy with a different market price.
    #[must_use]
    pub fn with_market_price(mut self, market_price: f64) -> Self {
        self.market_price = market_price;
        self
    }

    /// Annual coupon amount: `faceValue * annualCouponRate / 100`.
    #[must_use]
    pub fn annual_coupon(&self) -> f64 {
        self.face_value * (self.annual_coupon_rate / 100.0)
    }
}

/// A single payment in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    /// Period number, starting at 1.
    pub period: u32,
    /// Coupon, or coupon plus principal for the final period.
    pub amount: f64,
    /// True only for the final period.
    pub is_principal: bool,
}

/// Where the market price sits relative to face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceClassification {
    /// Price above face value.
    Premium,
    /// Price below face value.
    Discount,
    /// Price equal to face value.
    Par,
}

impl fmt::Display for PriceClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriceClassification::Premium => "Premium",
            PriceClassification::Discount => "Discount",
            PriceClassification::Par => "Par",
        };
        write!(f, "{name}")
    }
}

/// Everything computed for one set of bond parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondAnalyticsResult {
    /// Current yield as a percentage.
    pub current_yield: f64,
    /// Yield to maturity as an annualized percentage.
    pub ytm: f64,
    /// Sum of nominal coupon income over the life of the bond.
    pub total_interest_earned: f64,
    /// Premium, discount or par.
    pub price_classification: PriceClassification,
    /// Cash flows in period order.
    pub cash_flow_schedule: Vec<CashFlow>,
}
