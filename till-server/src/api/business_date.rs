//! Business date lookup

use axum::Json;
use axum::extract::{Query, State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::business_day::RolloverRule;
use crate::state::AppState;

use super::ApiResult;

/// GET /api/business-date?timestamp=
#[derive(Debug, Deserialize)]
pub struct BusinessDateQuery {
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDateResponse {
    pub business_date: NaiveDate,
    pub timezone: String,
    pub policy: &'static str,
}

pub async fn resolve_business_date(
    State(state): State<AppState>,
    Query(query): Query<BusinessDateQuery>,
) -> ApiResult<BusinessDateResponse> {
    let business_date = state.resolver.resolve(query.timestamp.as_deref())?;
    let policy = match state.resolver.rule() {
        RolloverRule::Cutoff { .. } => "cutoff",
        RolloverRule::TradingWindow { .. } => "window",
    };
    Ok(Json(BusinessDateResponse {
        business_date,
        timezone: state.resolver.timezone().name().to_string(),
        policy,
    }))
}
