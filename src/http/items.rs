//! Items resource handlers.
//!
//! Thin adapters between the JSON wire format and the store adapter. Each
//! handler is one atomic request/response cycle; no state survives between
//! requests.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::http::server::AppState;

/// Create request body. `name` defaults to empty when absent: the service
/// has never validated names, and a blank item is accepted and stored as-is.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    #[serde(default)]
    pub name: String,
}

/// GET /api/items — all items, newest first.
pub async fn list_items(State(state): State<AppState>) -> Response {
    match state.store.list_all().await {
        Ok(items) => Json(items).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to list items");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// POST /api/items — insert one item, respond with the created record.
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> Response {
    match state.store.create(input.name).await {
        Ok(item) => {
            tracing::debug!(id = %item.id, "Item created");
            Json(item).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create item");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// DELETE /api/items/{id} — resolve the id, then remove the record.
///
/// Every failure on this path collapses to `404 {"success":false}`:
/// absent id, malformed id, and storage errors alike. The client contract
/// distinguishes only success from not-found.
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let outcome = match state.store.find_by_id(&id).await {
        Ok(item) => state.store.delete_by_id(&item.id).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(err) => {
            tracing::debug!(id = %id, error = %err, "Delete failed");
            (StatusCode::NOT_FOUND, Json(json!({ "success": false }))).into_response()
        }
    }
}
