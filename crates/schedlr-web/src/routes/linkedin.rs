use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use schedlr_core::{FilterSpec, SourceError};
use serde_json::json;
use tracing::{info, warn};

use super::{list_or_no_content, status_response, AppState};
use crate::error::ApiError;

pub async fn list_data(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    info!("Fetching LinkedIn data");
    let posts = state.linkedin.fetch_all().await?;
    if posts.is_empty() {
        warn!("No LinkedIn data found");
    }
    Ok(list_or_no_content(posts))
}

pub async fn filter_data(
    State(state): State<Arc<AppState>>,
    Json(spec): Json<FilterSpec>,
) -> Result<Response, ApiError> {
    info!(?spec, "Fetching LinkedIn data with filters");
    let posts = state.linkedin.fetch_filtered(&spec).await?;
    if posts.is_empty() {
        warn!("No data found for the provided filters");
    }
    Ok(list_or_no_content(posts))
}

pub async fn data_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    info!(%id, "Fetching LinkedIn data by id");
    let post = state.linkedin.fetch_by_id(&id).await?;
    Ok(Json(post).into_response())
}

pub async fn delete_data(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    info!(%id, "Deleting LinkedIn data");
    if !state.linkedin.delete_by_id(&id).await? {
        return Err(SourceError::not_found(&id).into());
    }
    Ok(Json(json!({ "message": format!("Data successfully deleted for ID: {id}") })).into_response())
}

pub async fn status(State(state): State<Arc<AppState>>) -> Response {
    info!("Checking LinkedIn service status");
    status_response(state.linkedin.is_healthy().await)
}
