use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Upstream analytics providers known to the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Linkedin,
    Pinterest,
}

impl ProviderId {
    pub const ALL: [Self; 2] = [Self::Linkedin, Self::Pinterest];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Pinterest => "pinterest",
        }
    }

    /// Prefix of the environment variables holding this provider's settings.
    pub const fn env_prefix(self) -> &'static str {
        match self {
            Self::Linkedin => "SCHEDLR_LINKEDIN",
            Self::Pinterest => "SCHEDLR_PINTEREST",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "linkedin" => Ok(Self::Linkedin),
            "pinterest" => Ok(Self::Pinterest),
            other => Err(ConfigError::UnknownProvider {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("LinkedIn".parse::<ProviderId>().ok(), Some(ProviderId::Linkedin));
        assert_eq!(" pinterest ".parse::<ProviderId>().ok(), Some(ProviderId::Pinterest));
        assert!("twitter".parse::<ProviderId>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ProviderId::ALL).expect("serializable");
        assert_eq!(json, r#"["linkedin","pinterest"]"#);
    }
}
