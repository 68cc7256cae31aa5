//! Premium / discount / par classification.

use crate::types::{BondParameters, PriceClassification};

/// Absolute band around face value treated as par.
pub const PAR_EPSILON: f64 = 1e-10;

/// Classifies whether the bond trades at a premium, a discount, or par.
///
/// Prices within [`PAR_EPSILON`] of face value are par.
#[must_use]
pub fn classify_price(params: &BondParameters) -> PriceClassification {
    if params.market_price > params.face_value + PAR_EPSILON {
        PriceClassification::Premium
    } else if params.market_price < params.face_value - PAR_EPSILON {
        PriceClassification::Discount
    } else {
        PriceClassification::Par
    }
}
