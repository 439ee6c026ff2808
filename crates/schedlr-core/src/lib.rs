//! # Schedlr Core
//!
//! Provider clients and record filtering for the schedlr social analytics
//! facade.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | LinkedIn and Pinterest adapters |
//! | [`config`] | Per-provider connection settings |
//! | [`data_source`] | Error taxonomy and health status |
//! | [`domain`] | Record types |
//! | [`error`] | Configuration errors |
//! | [`filter`] | Keyword/date record filtering |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`provider`] | Single-endpoint provider client |
//! | [`source`] | Provider identifiers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use schedlr_core::{FilterSpec, LinkedInAdapter, ProviderConfig, ProviderId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProviderConfig::new(
//!         ProviderId::Linkedin,
//!         "https://api.linkedin.com/v2/posts",
//!         std::env::var("SCHEDLR_LINKEDIN_API_TOKEN")?,
//!     )?;
//!     let adapter = LinkedInAdapter::new(config);
//!
//!     let posts = adapter
//!         .fetch_filtered(&FilterSpec::new().with_keyword("launch"))
//!         .await?;
//!     println!("{} matching posts", posts.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  HTTP facade    │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Adapter         │────▶│ FilterSpec       │
//! │ (LinkedIn/Pin.) │     └──────────────────┘
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ ProviderClient  │────▶│ HTTP Client      │
//! │ (one endpoint)  │     │ (reqwest/fake)   │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Security
//!
//! - Tokens travel only in the request URL and are never logged
//! - `ProviderConfig`'s `Debug` output redacts the token

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod provider;
pub mod source;

pub use adapters::{LinkedInAdapter, PinterestAdapter};

pub use config::{ProviderConfig, DEFAULT_CREDENTIAL_PARAM, PINTEREST_SANDBOX_URL, TIMEOUT_ENV};

pub use data_source::{HealthState, HealthStatus, SourceError, SourceErrorKind};

pub use domain::{LinkedInPost, MetricKind, PinterestMetric, Record};

pub use error::ConfigError;

pub use filter::FilterSpec;

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
    DEFAULT_TIMEOUT_MS,
};

pub use provider::ProviderClient;

pub use source::ProviderId;
