//! Error and health types shared by every provider client.
//!
//! # Error taxonomy
//!
//! | Kind | Code | Raised when |
//! |------|------|-------------|
//! | [`UpstreamClient`](SourceErrorKind::UpstreamClient) | `upstream.client_error` | upstream answered 4xx/5xx |
//! | [`UpstreamUnavailable`](SourceErrorKind::UpstreamUnavailable) | `upstream.unavailable` | DNS, connect or timeout failure |
//! | [`UpstreamUnknown`](SourceErrorKind::UpstreamUnknown) | `upstream.unknown` | anything else (bad payload, odd status) |
//! | [`NotFound`](SourceErrorKind::NotFound) | `not_found` | identifier absent from the fetched set |
//!
//! Every failure is terminal for the request that produced it; nothing here
//! retries.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ProviderId;

/// Provider-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceErrorKind {
    UpstreamClient,
    UpstreamUnavailable,
    UpstreamUnknown,
    NotFound,
}

/// Structured error returned by provider clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    status: Option<u16>,
}

impl SourceError {
    /// Upstream rejected the request; `message` is the upstream body.
    pub fn upstream_client(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::UpstreamClient,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::UpstreamUnavailable,
            message: message.into(),
            status: None,
        }
    }

    pub fn upstream_unknown(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::UpstreamUnknown,
            message: message.into(),
            status: None,
        }
    }

    pub fn not_found(id: &str) -> Self {
        Self {
            kind: SourceErrorKind::NotFound,
            message: format!("Data not found for ID: {id}"),
            status: None,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Upstream HTTP status, present only for `UpstreamClient`.
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, SourceErrorKind::NotFound)
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::UpstreamClient => "upstream.client_error",
            SourceErrorKind::UpstreamUnavailable => "upstream.unavailable",
            SourceErrorKind::UpstreamUnknown => "upstream.unknown",
            SourceErrorKind::NotFound => "not_found",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

/// Outcome of a single upstream reachability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub provider: ProviderId,
    pub state: HealthState,
    #[serde(with = "time::serde::rfc3339")]
    pub checked_at: OffsetDateTime,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl HealthStatus {
    pub fn healthy(provider: ProviderId, latency_ms: u64) -> Self {
        Self {
            provider,
            state: HealthState::Healthy,
            checked_at: OffsetDateTime::now_utc(),
            latency_ms,
            detail: None,
        }
    }

    pub fn unhealthy(provider: ProviderId, latency_ms: u64, detail: impl Into<String>) -> Self {
        Self {
            provider,
            state: HealthState::Unhealthy,
            checked_at: OffsetDateTime::now_utc(),
            latency_ms,
            detail: Some(detail.into()),
        }
    }

    pub const fn is_healthy(&self) -> bool {
        matches!(self.state, HealthState::Healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_keeps_status_and_upstream_message() {
        let error = SourceError::upstream_client(502, "bad gateway");
        assert_eq!(error.kind(), SourceErrorKind::UpstreamClient);
        assert_eq!(error.status(), Some(502));
        assert_eq!(error.message(), "bad gateway");
        assert_eq!(error.to_string(), "bad gateway (upstream.client_error)");
    }

    #[test]
    fn not_found_names_the_missing_id() {
        let error = SourceError::not_found("42");
        assert!(error.is_not_found());
        assert_eq!(error.message(), "Data not found for ID: 42");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn health_status_serializes_rfc3339_timestamp() {
        let status = HealthStatus::unhealthy(ProviderId::Pinterest, 12, "connection refused");
        let value = serde_json::to_value(&status).expect("serializable");

        assert_eq!(value["provider"], "pinterest");
        assert_eq!(value["state"], "unhealthy");
        assert_eq!(value["detail"], "connection refused");
        assert!(value["checked_at"]
            .as_str()
            .is_some_and(|ts| ts.ends_with('Z')));
        assert!(!status.is_healthy());
    }
}
