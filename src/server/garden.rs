//! Garden shop routes: catalog and purchases.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::storage;

use super::{data, ApiError, AppState};


#[derive(Debug, Deserialize, Default)]
pub struct PurchaseBody {
    item_id: Option<i64>,
}


/// GET /api/garden/items - the item catalog, cheapest first.
pub async fn items(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let items = storage::list_items(&state.db_path)?;
    Ok(data(items))
}


/// GET /api/garden/purchases - purchase history, newest first.
pub async fn purchases(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let purchases = storage::list_purchases(&state.db_path)?;
    Ok(data(purchases))
}


/// POST /api/garden/purchases - buy an item at its current cost.
pub async fn purchase(
    State(state): State<Arc<AppState>>,
    body: Option<Json<PurchaseBody>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let item_id = body.item_id.ok_or_else(|| {
        ApiError::bad_request("bad_request", "Please provide an item_id.")
    })?;

    let purchase = storage::purchase_item(&state.db_path, item_id)?;
    Ok((StatusCode::CREATED, data(purchase)))
}
