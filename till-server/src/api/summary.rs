//! Period summary endpoint

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::analytics::{HISTORY_WINDOW_DAYS, DateRange, PeriodSummary, SummaryInput, summarize};
use crate::db;
use crate::state::AppState;

use super::ApiResult;

/// GET /api/summary?start=YYYY-MM-DD&end=YYYY-MM-DD
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<PeriodSummary> {
    let range = DateRange::parse(query.start.as_deref(), query.end.as_deref())?;
    let prior = range.prior();
    let history = range.history(HISTORY_WINDOW_DAYS);
    let pool = &state.pool;

    let (settings, sales, expenses, prior_sales, prior_expenses, history_expenses) = tokio::try_join!(
        db::settings::load_settings(pool),
        db::sales::list_sales(pool, &range, None),
        db::expenses::list_expenses(pool, &range),
        db::sales::list_sales(pool, &prior, None),
        db::expenses::list_expenses(pool, &prior),
        db::expenses::list_expenses(pool, &history),
    )?;

    let input = SummaryInput {
        range,
        sales,
        expenses,
        prior_sales,
        prior_expenses,
        history_expenses,
    };
    let summary = summarize(&input, settings.fp_profit_rate)?;

    tracing::debug!(
        start = %range.start,
        end = %range.end,
        net_profit = %summary.current.net_profit,
        "Summary computed"
    );
    Ok(Json(summary))
}
