//! Stats route: totals, streaks, and the coin ledger.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use crate::aggregation::{due_by_date, summarize, window_ending, StatsSummary};
use crate::config::STREAK_WINDOW_DAYS;
use crate::models::CoinLedger;
use crate::storage;

use super::{data, ApiError, AppState};


#[derive(Debug, Serialize)]
struct StatsResponse {
    #[serde(flatten)]
    summary: StatsSummary,
    coins: CoinLedger,
}


/// GET /api/stats - aggregate stats over the streak window.
pub async fn summary(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let today = Local::now().date_naive();

    let habits = storage::list_habits(&state.db_path, false)?;
    let counts = storage::counts(&state.db_path)?;
    let completions = storage::all_completions(&state.db_path)?;

    let window = window_ending(today, STREAK_WINDOW_DAYS);
    let due = due_by_date(&habits, &window);

    let summary = summarize(
        counts.total_habits,
        counts.total_completions,
        &completions,
        &due,
    );
    let coins = storage::coin_ledger(&state.db_path)?;

    Ok(data(StatsResponse { summary, coins }))
}
