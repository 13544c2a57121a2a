//! Habit and completion routes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Local, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

use crate::config::PROGRESS_DEFAULT_DAYS;
use crate::models::{Difficulty, Frequency};
use crate::storage;

use super::{data, ApiError, AppState};


#[derive(Debug, Deserialize, Default)]
pub struct CreateBody {
    name: Option<String>,
    difficulty: Option<String>,
    frequency: Option<String>,
    weekly_mask: Option<String>,
}


#[derive(Debug, Deserialize, Default)]
pub struct UpdateBody {
    name: Option<String>,
    archived: Option<bool>,
}


#[derive(Debug, Deserialize)]
pub struct DateQuery {
    date: Option<String>,
}


#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    from: Option<String>,
    to: Option<String>,
}


/// Parse an optional YYYY-MM-DD query value.
fn parse_iso_date(value: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match value {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiError::bad_request("invalid_date", "Use YYYY-MM-DD format.")),
    }
}


/// GET /api/habits - all active habits, newest first.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let habits = storage::list_habits(&state.db_path, false)?;
    Ok(data(habits))
}


/// POST /api/habits - create a habit.
pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CreateBody>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let name = body.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        return Err(ApiError::bad_request(
            "name_required",
            "Please provide a non-empty name.",
        ));
    }

    let difficulty = match body.difficulty.as_deref() {
        Some(s) => Difficulty::parse(s).ok_or_else(|| {
            ApiError::bad_request("bad_request", "Difficulty must be easy, medium, or hard.")
        })?,
        None => Difficulty::default(),
    };
    let frequency = match body.frequency.as_deref() {
        Some(s) => Frequency::parse(s).ok_or_else(|| {
            ApiError::bad_request("bad_request", "Frequency must be daily or custom.")
        })?,
        None => Frequency::default(),
    };

    let habit = storage::create_habit(
        &state.db_path,
        name,
        difficulty,
        frequency,
        body.weekly_mask.as_deref(),
    )?;
    Ok((StatusCode::CREATED, data(habit)))
}


/// PATCH /api/habits/:id - rename and/or archive a habit.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Option<Json<UpdateBody>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let habit = storage::update_habit(&state.db_path, id, body.name.as_deref(), body.archived)?;
    Ok(data(habit))
}


/// POST /api/habits/:id/complete - mark complete for a date (default: today).
pub async fn complete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let date = parse_iso_date(query.date.as_deref())?.unwrap_or_else(|| Local::now().date_naive());
    let completion = storage::mark_complete(&state.db_path, id, date)?;
    Ok((StatusCode::CREATED, data(completion)))
}


/// DELETE /api/habits/:id/complete - remove a completion (default: today).
pub async fn uncomplete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Value>, ApiError> {
    let date = parse_iso_date(query.date.as_deref())?.unwrap_or_else(|| Local::now().date_naive());
    storage::unmark_complete(&state.db_path, id, date)?;
    Ok(data(true))
}


/// GET /api/habits/:id/completions - completion dates in a range
/// (default: the last 30 days).
pub async fn completions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Value>, ApiError> {
    let invalid_range = || ApiError::bad_request("invalid_range", "Provide a valid date range.");

    let today = Local::now().date_naive();
    let from = parse_iso_date(query.from.as_deref())
        .map_err(|_| invalid_range())?
        .unwrap_or_else(|| today - Duration::days(PROGRESS_DEFAULT_DAYS));
    let to = parse_iso_date(query.to.as_deref())
        .map_err(|_| invalid_range())?
        .unwrap_or(today);

    if from > to {
        return Err(invalid_range());
    }

    // 404 for unknown habits rather than an empty list
    storage::get_habit(&state.db_path, id)?;

    let dates = storage::completions_in_range(&state.db_path, id, from, to)?;
    Ok(data(dates))
}
