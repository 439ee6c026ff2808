use std::sync::Arc;

use crate::data_source::{HealthStatus, SourceError};
use crate::filter::FilterSpec;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::provider::ProviderClient;
use crate::{ConfigError, LinkedInPost, ProviderConfig, ProviderId};

/// LinkedIn post analytics, served from the configured data URL.
#[derive(Debug, Clone)]
pub struct LinkedInAdapter {
    client: ProviderClient<LinkedInPost>,
}

impl LinkedInAdapter {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: ProviderConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            client: ProviderClient::new(Arc::new(config), http_client, ""),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        ProviderConfig::from_env(ProviderId::Linkedin).map(Self::new)
    }

    pub fn id(&self) -> ProviderId {
        ProviderId::Linkedin
    }

    pub async fn fetch_all(&self) -> Result<Vec<LinkedInPost>, SourceError> {
        self.client.fetch_all().await
    }

    pub async fn fetch_filtered(&self, spec: &FilterSpec) -> Result<Vec<LinkedInPost>, SourceError> {
        self.client.fetch_filtered(spec).await
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<LinkedInPost, SourceError> {
        self.client.fetch_by_id(id).await
    }

    /// `true` when the post exists upstream; nothing is removed.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, SourceError> {
        self.client.delete_by_id(id).await
    }

    pub async fn health(&self) -> HealthStatus {
        self.client.health().await
    }

    pub async fn is_healthy(&self) -> bool {
        self.client.is_healthy().await
    }
}
