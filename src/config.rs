//! Site configuration loaded from TOML
//!
//! ```toml
//! origin = "https://designengineer.xyz"
//! api_base = "http://localhost:3000"
//! environment = "development"
//! http_timeout_secs = 30
//!
//! [requirements.web]
//! design = 24
//! engineering = 33
//! convergence = 27
//! ```
//!
//! Every key is optional.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::certificate::Requirements;
use crate::illustration::RenderMode;

pub const DEFAULT_ORIGIN: &str = "https://designengineer.xyz";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public origin used in verification links
    pub origin: String,
    /// Base URL of the course API; the origin when unset
    pub api_base: Option<String>,
    pub environment: RenderMode,
    pub http_timeout_secs: Option<u64>,
    pub requirements: Requirements,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            api_base: None,
            environment: RenderMode::Production,
            http_timeout_secs: None,
            requirements: Requirements::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(&self.origin)
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }

    pub fn is_development(&self) -> bool {
        self.environment == RenderMode::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::Platform;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.api_base(), DEFAULT_ORIGIN);
        assert_eq!(config.http_timeout(), None);
        assert!(!config.is_development());
    }

    #[test]
    fn test_full_config() {
        let config = SiteConfig::from_str(
            r#"
origin = "http://localhost:3000"
api_base = "http://localhost:4000"
environment = "development"
http_timeout_secs = 15

[requirements.ios]
design = 2
engineering = 3
convergence = 1
"#,
        )
        .unwrap();
        assert_eq!(config.api_base(), "http://localhost:4000");
        assert_eq!(config.http_timeout(), Some(Duration::from_secs(15)));
        assert!(config.is_development());
        assert_eq!(config.requirements.total_lessons(Platform::Ios), 6);
        assert_eq!(config.requirements.total_lessons(Platform::Web), 84);
    }

    #[test]
    fn test_invalid_environment() {
        let err = SiteConfig::from_str(r#"environment = "staging""#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
