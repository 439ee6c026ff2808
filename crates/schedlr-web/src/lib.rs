//! HTTP facade for the schedlr analytics clients.
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /api/linkedin/data` | All posts, 204 when empty |
//! | `POST /api/linkedin/data/filter` | Posts matching `{keyword?, date?}` |
//! | `GET /api/linkedin/data/:id` | One post, 404 when absent |
//! | `DELETE /api/linkedin/data/:id` | Acknowledges an existing post, 404 when absent |
//! | `GET /api/linkedin/status` | Upstream reachability, 503 when down |
//! | `GET /api/pinterest/{likes,shares,comments}` | Raw metric lists |
//! | `GET /api/pinterest/metrics/:kind` | Metric list by name |
//! | `GET /api/pinterest/status` | Upstream reachability, 503 when down |
//!
//! Upstream failures answer 500 with `{"error": "<message>"}`.

pub mod cli;
pub mod error;
pub mod routes;

pub use cli::Cli;
pub use error::{ApiError, ServerError};
pub use routes::{router, AppState};
