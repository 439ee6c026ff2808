use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Json, Response};
use schedlr_core::{MetricKind, PinterestMetric};
use tracing::info;

use super::{status_response, AppState};
use crate::error::ApiError;

type MetricList = Result<Json<Vec<PinterestMetric>>, ApiError>;

async fn fetch(state: &AppState, kind: MetricKind) -> MetricList {
    info!(metric = %kind, "Fetching Pinterest metrics");
    Ok(Json(state.pinterest.metrics(kind).await?))
}

pub async fn likes(State(state): State<Arc<AppState>>) -> MetricList {
    fetch(&state, MetricKind::Likes).await
}

pub async fn shares(State(state): State<Arc<AppState>>) -> MetricList {
    fetch(&state, MetricKind::Shares).await
}

pub async fn comments(State(state): State<Arc<AppState>>) -> MetricList {
    fetch(&state, MetricKind::Comments).await
}

pub async fn metrics(State(state): State<Arc<AppState>>, Path(kind): Path<String>) -> MetricList {
    let kind = kind
        .parse::<MetricKind>()
        .map_err(|error| ApiError::BadRequest(error.to_string()))?;
    fetch(&state, kind).await
}

pub async fn status(State(state): State<Arc<AppState>>) -> Response {
    info!("Checking Pinterest service status");
    status_response(state.pinterest.is_healthy().await)
}
