use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Fields every provider record exposes to filtering and lookup.
pub trait Record {
    fn id(&self) -> &str;
    fn content(&self) -> &str;
    fn date(&self) -> &str;
}

/// LinkedIn post analytics item.
///
/// Missing fields, including `id`, decode as empty or zero so one sparse
/// item does not reject the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInPost {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub impressions: u64,
}

impl LinkedInPost {
    pub fn new(id: impl Into<String>, content: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            date: date.into(),
            likes: 0,
            comments: 0,
            shares: 0,
            impressions: 0,
        }
    }

    pub fn with_engagement(mut self, likes: u64, comments: u64, shares: u64) -> Self {
        self.likes = likes;
        self.comments = comments;
        self.shares = shares;
        self
    }

    pub fn with_impressions(mut self, impressions: u64) -> Self {
        self.impressions = impressions;
        self
    }
}

impl Record for LinkedInPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn date(&self) -> &str {
        &self.date
    }
}

/// Pinterest metric feeds, each served from its own endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Likes,
    Shares,
    Comments,
}

impl MetricKind {
    pub const ALL: [Self; 3] = [Self::Likes, Self::Shares, Self::Comments];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Likes => "likes",
            Self::Shares => "shares",
            Self::Comments => "comments",
        }
    }

    /// Endpoint path relative to the Pinterest base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Likes => "pins/likes",
            Self::Shares => "pins/shares",
            Self::Comments => "pins/comments",
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "likes" => Ok(Self::Likes),
            "shares" => Ok(Self::Shares),
            "comments" => Ok(Self::Comments),
            other => Err(ConfigError::UnknownMetric {
                value: other.to_owned(),
            }),
        }
    }
}

/// One Pinterest metric data point for a pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinterestMetric {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub count: u64,
}

impl PinterestMetric {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
        count: u64,
    ) -> Self {
        Self {
            id: id.into(),
            pin_id: None,
            content: content.into(),
            date: date.into(),
            count,
        }
    }

    pub fn with_pin_id(mut self, pin_id: impl Into<String>) -> Self {
        self.pin_id = Some(pin_id.into());
        self
    }
}

impl Record for PinterestMetric {
    fn id(&self) -> &str {
        &self.id
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn date(&self) -> &str {
        &self.date
    }
}
