//! Bond calculation endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use bondcalc_analytics::validation::validate_all;
use bondcalc_analytics::{compute_bond_analytics_with_config, BondAnalyticsResult, BondParameters};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Calculate analytics for a bond.
///
/// The body is validated before the engine runs; every violated field is
/// reported in one response.
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<BondParameters>, JsonRejection>,
) -> ApiResult<Json<BondAnalyticsResult>> {
    let Json(params) = payload?;

    let violations = validate_all(&params);
    if !violations.is_empty() {
        tracing::debug!("rejected bond parameters: {} violation(s)", violations.len());
        return Err(ApiError::from_violations(&violations));
    }

    let result = compute_bond_analytics_with_config(&params, &state.solver);

    tracing::info!(
        ytm = result.ytm,
        current_yield = result.current_yield,
        classification = %result.price_classification,
        periods = result.cash_flow_schedule.len(),
        "bond analytics calculated"
    );

    Ok(Json(result))
}
