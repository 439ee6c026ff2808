use std::sync::Arc;

use crate::data_source::{HealthStatus, SourceError};
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::provider::ProviderClient;
use crate::{ConfigError, MetricKind, PinterestMetric, ProviderConfig, ProviderId};

/// Pinterest pin metrics. Each [`MetricKind`] is its own endpoint under the
/// configured base URL.
#[derive(Debug, Clone)]
pub struct PinterestAdapter {
    likes: ProviderClient<PinterestMetric>,
    shares: ProviderClient<PinterestMetric>,
    comments: ProviderClient<PinterestMetric>,
}

impl PinterestAdapter {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: ProviderConfig, http_client: Arc<dyn HttpClient>) -> Self {
        let config = Arc::new(config);
        let endpoint = |kind: MetricKind| {
            ProviderClient::new(Arc::clone(&config), Arc::clone(&http_client), kind.path())
        };
        Self {
            likes: endpoint(MetricKind::Likes),
            shares: endpoint(MetricKind::Shares),
            comments: endpoint(MetricKind::Comments),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        ProviderConfig::from_env(ProviderId::Pinterest).map(Self::new)
    }

    pub fn id(&self) -> ProviderId {
        ProviderId::Pinterest
    }

    fn client(&self, kind: MetricKind) -> &ProviderClient<PinterestMetric> {
        match kind {
            MetricKind::Likes => &self.likes,
            MetricKind::Shares => &self.shares,
            MetricKind::Comments => &self.comments,
        }
    }

    pub async fn metrics(&self, kind: MetricKind) -> Result<Vec<PinterestMetric>, SourceError> {
        self.client(kind).fetch_all().await
    }

    pub async fn likes(&self) -> Result<Vec<PinterestMetric>, SourceError> {
        self.metrics(MetricKind::Likes).await
    }

    pub async fn shares(&self) -> Result<Vec<PinterestMetric>, SourceError> {
        self.metrics(MetricKind::Shares).await
    }

    pub async fn comments(&self) -> Result<Vec<PinterestMetric>, SourceError> {
        self.metrics(MetricKind::Comments).await
    }

    /// Checks the base URL; all three feeds share it.
    pub async fn health(&self) -> HealthStatus {
        self.likes.health().await
    }

    pub async fn is_healthy(&self) -> bool {
        self.health().await.is_healthy()
    }
}
