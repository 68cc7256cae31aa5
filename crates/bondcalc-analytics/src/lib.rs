//! # Bondcalc Analytics
//!
//! Fixed income analytics for a plain coupon bond described by five numbers:
//! face value, annual coupon rate, market price, years to maturity and
//! coupon frequency.
//!
//! - **Cash Flows**: period-by-period coupon and principal schedule
//! - **Yields**: current yield, total interest, yield-to-maturity
//! - **Classification**: premium, discount or par
//! - **Validation**: domain checks for callers to run before the engine
//!
//! Every function is pure: results depend only on the parameters passed in.
//!
//! ## Usage
//!
//! ```rust
//! use bondcalc_analytics::prelude::*;
//!
//! let params = BondParameters::new(1000.0, 5.0, 950.0, 10.0, CouponFrequency::SemiAnnual);
//! validate(&params).unwrap();
//!
//! let result = compute_bond_analytics(&params);
//! assert_eq!(result.price_classification, PriceClassification::Discount);
//! assert!(result.ytm > result.current_yield);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cashflows;
pub mod classification;
pub mod engine;
pub mod error;
pub mod types;
pub mod validation;
pub mod yields;

pub use engine::{
    compute_bond_analytics, compute_bond_analytics_detailed, compute_bond_analytics_with_config,
};
pub use error::{AnalyticsError, AnalyticsResult};
pub use types::{BondAnalyticsResult, BondParameters, CashFlow, CouponFrequency, PriceClassification};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{coupon_payment, generate_cash_flows, num_periods};
    pub use crate::classification::classify_price;
    pub use crate::engine::{
        compute_bond_analytics, compute_bond_analytics_detailed, compute_bond_analytics_with_config,
    };
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::types::{
        BondAnalyticsResult, BondParameters, CashFlow, CouponFrequency, PriceClassification,
    };
    pub use crate::validation::{validate, validate_all};
    pub use crate::yields::{
        current_yield, total_interest, yield_to_maturity, yield_to_maturity_detailed,
        yield_to_maturity_strict, BondPriceFunction, YieldResult,
    };
}
