pub mod linkedin;
pub mod pinterest;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use schedlr_core::{LinkedInAdapter, PinterestAdapter};
use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::cli::Cli;
use crate::error::ServerError;

pub const HEALTHY_MESSAGE: &str = "Service is healthy";
pub const DOWN_MESSAGE: &str = "Service is down";

pub struct AppState {
    pub linkedin: LinkedInAdapter,
    pub pinterest: PinterestAdapter,
}

impl AppState {
    pub fn new(linkedin: LinkedInAdapter, pinterest: PinterestAdapter) -> Self {
        Self {
            linkedin,
            pinterest,
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ServerError> {
        Ok(Self::new(
            LinkedInAdapter::new(cli.linkedin_config()?),
            PinterestAdapter::new(cli.pinterest_config()?),
        ))
    }
}

pub fn router(state: AppState) -> Router {
    let linkedin = Router::new()
        .route("/data", get(linkedin::list_data))
        .route("/data/filter", post(linkedin::filter_data))
        .route(
            "/data/:id",
            get(linkedin::data_by_id).delete(linkedin::delete_data),
        )
        .route("/status", get(linkedin::status));

    let pinterest = Router::new()
        .route("/likes", get(pinterest::likes))
        .route("/shares", get(pinterest::shares))
        .route("/comments", get(pinterest::comments))
        .route("/metrics/:kind", get(pinterest::metrics))
        .route("/status", get(pinterest::status));

    Router::new()
        .nest("/api/linkedin", linkedin)
        .nest("/api/pinterest", pinterest)
        .with_state(Arc::new(state))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}

/// 204 for an empty list, otherwise 200 with the list as JSON.
fn list_or_no_content<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(items).into_response()
    }
}

fn status_response(healthy: bool) -> Response {
    if healthy {
        (StatusCode::OK, Json(json!({ "status": HEALTHY_MESSAGE }))).into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": DOWN_MESSAGE })),
        )
            .into_response()
    }
}
