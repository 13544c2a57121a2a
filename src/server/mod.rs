//! HTTP server exposing the JSON API.
//!
//! Success responses are wrapped as `{"data": ...}`, errors as
//! `{"error": code, "message": ...}`.

mod error;
mod garden;
mod habits;
mod stats;

pub use error::ApiError;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;


/// Shared state for request handlers.
pub struct AppState {
    pub db_path: PathBuf,
}


/// Wrap a success payload in the `{"data": ...}` envelope.
pub(crate) fn data<T: Serialize>(payload: T) -> Json<Value> {
    Json(json!({ "data": payload }))
}


/// Build the application router.
pub fn router(db_path: PathBuf) -> Router {
    let state = Arc::new(AppState { db_path });

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/habits", get(habits::list).post(habits::create))
        .route("/api/habits/:id", patch(habits::update))
        .route(
            "/api/habits/:id/complete",
            post(habits::complete).delete(habits::uncomplete),
        )
        .route("/api/habits/:id/completions", get(habits::completions))
        .route("/api/stats", get(stats::summary))
        .route("/api/garden/items", get(garden::items))
        .route(
            "/api/garden/purchases",
            get(garden::purchases).post(garden::purchase),
        )
        .with_state(state)
}


async fn index() -> &'static str {
    "habit-garden API\n\n\
     GET    /health\n\
     GET    /api/habits\n\
     POST   /api/habits\n\
     PATCH  /api/habits/{id}\n\
     POST   /api/habits/{id}/complete?date=YYYY-MM-DD\n\
     DELETE /api/habits/{id}/complete?date=YYYY-MM-DD\n\
     GET    /api/habits/{id}/completions?from=&to=\n\
     GET    /api/stats\n\
     GET    /api/garden/items\n\
     GET    /api/garden/purchases\n\
     POST   /api/garden/purchases\n"
}


async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}


/// Bind and serve requests until shutdown.
pub async fn serve(db_path: PathBuf, host: &str, port: u16) -> Result<()> {
    let app = router(db_path);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %addr, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
