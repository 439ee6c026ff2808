//! Single-endpoint upstream client.
//!
//! A [`ProviderClient`] owns one endpoint of one provider. Every call issues
//! exactly one GET through the injected [`HttpClient`]; nothing is cached, so
//! each operation sees a freshly fetched list.

use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::data_source::{HealthStatus, SourceError};
use crate::domain::Record;
use crate::filter::FilterSpec;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::{ProviderConfig, ProviderId};

pub struct ProviderClient<R> {
    config: Arc<ProviderConfig>,
    http_client: Arc<dyn HttpClient>,
    path: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for ProviderClient<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            http_client: Arc::clone(&self.http_client),
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<R> Debug for ProviderClient<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClient")
            .field("config", &self.config)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl<R> ProviderClient<R>
where
    R: Record + DeserializeOwned,
{
    pub fn new(
        config: Arc<ProviderConfig>,
        http_client: Arc<dyn HttpClient>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            config,
            http_client,
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn provider(&self) -> ProviderId {
        self.config.provider
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetches the endpoint's full record list in upstream order.
    ///
    /// An empty or `null` body is an empty list, not an error.
    pub async fn fetch_all(&self) -> Result<Vec<R>, SourceError> {
        let provider = self.provider();
        let request = HttpRequest::get(self.config.request_url(&self.path))
            .with_timeout_ms(self.config.timeout_ms);
        tracing::info!(%provider, endpoint = %self.path, "Fetching upstream records");

        let response = self.http_client.execute(request).await.map_err(|error| {
            if error.retryable() {
                tracing::error!(%provider, error = %error, "Network error while reaching upstream");
                SourceError::upstream_unavailable(format!(
                    "failed to connect to {provider} API: {}",
                    error.message()
                ))
            } else {
                tracing::error!(%provider, error = %error, "Unexpected transport error");
                SourceError::upstream_unknown(format!(
                    "unexpected error while fetching {provider} data: {}",
                    error.message()
                ))
            }
        })?;

        let records = decode_records::<R>(provider, response)?;
        if records.is_empty() {
            tracing::warn!(%provider, endpoint = %self.path, "No data received from upstream");
        } else {
            tracing::info!(%provider, count = records.len(), "Fetched upstream records");
        }
        Ok(records)
    }

    pub async fn fetch_filtered(&self, spec: &FilterSpec) -> Result<Vec<R>, SourceError> {
        let records = self.fetch_all().await?;
        let filtered = spec.apply(records);
        tracing::info!(provider = %self.provider(), count = filtered.len(), ?spec, "Applied filters");
        Ok(filtered)
    }

    /// First record whose id equals `id` exactly.
    pub async fn fetch_by_id(&self, id: &str) -> Result<R, SourceError> {
        let records = self.fetch_all().await?;
        records
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| {
                tracing::warn!(provider = %self.provider(), id, "Record not found");
                SourceError::not_found(id)
            })
    }

    /// Reports whether `id` is present upstream. Nothing is removed: the
    /// providers expose no delete endpoint and this service owns no store, so
    /// a later `fetch_all` returns the same list.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, SourceError> {
        let records = self.fetch_all().await?;
        let exists = records.iter().any(|record| record.id() == id);
        if exists {
            tracing::info!(provider = %self.provider(), id, "Delete acknowledged");
        } else {
            tracing::warn!(provider = %self.provider(), id, "Delete target not found");
        }
        Ok(exists)
    }

    /// Checks the provider base URL (without credentials). Only a transport
    /// failure or a 4xx/5xx status counts as unhealthy.
    pub async fn health(&self) -> HealthStatus {
        let provider = self.provider();
        let request = HttpRequest::get(self.config.base_url.clone())
            .with_timeout_ms(self.config.timeout_ms);
        let started = Instant::now();
        let outcome = self.http_client.execute(request).await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(response) if !response.is_error_status() => {
                tracing::info!(%provider, latency_ms, status = response.status, "Upstream is healthy");
                HealthStatus::healthy(provider, latency_ms)
            }
            Ok(response) => {
                tracing::error!(%provider, status = response.status, "Health check failed");
                HealthStatus::unhealthy(
                    provider,
                    latency_ms,
                    format!("upstream returned status {}", response.status),
                )
            }
            Err(error) => {
                tracing::error!(%provider, error = %error, "Health check failed");
                HealthStatus::unhealthy(provider, latency_ms, error.message())
            }
        }
    }

    pub async fn is_healthy(&self) -> bool {
        self.health().await.is_healthy()
    }
}

fn decode_records<R: DeserializeOwned>(
    provider: ProviderId,
    response: HttpResponse,
) -> Result<Vec<R>, SourceError> {
    if response.is_error_status() {
        tracing::error!(%provider, status = response.status, "Upstream rejected the request");
        let message = if response.body.trim().is_empty() {
            format!("{provider} API returned status {}", response.status)
        } else {
            response.body
        };
        return Err(SourceError::upstream_client(response.status, message));
    }

    if !response.is_success() {
        return Err(SourceError::upstream_unknown(format!(
            "unexpected status {} from {provider} API",
            response.status
        )));
    }

    let body = response.body.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str::<Option<Vec<R>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|error| {
            tracing::error!(%provider, error = %error, "Failed to decode upstream payload");
            SourceError::upstream_unknown(format!("failed to decode {provider} response: {error}"))
        })
}
