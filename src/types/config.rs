//! Service configuration.

use config::{Config, ConfigError, Environment, Source};
use serde::{Deserialize, Serialize};

use crate::dictionary::Language;
use crate::matcher::MatchMode;
use crate::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PAGE_SIZE, DEFAULT_PORT};

/// Environment variable prefix, e.g. `INSIGHT_PORT`.
pub const ENV_PREFIX: &str = "INSIGHT";

/// Global service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listen port
    pub port: u16,

    /// Language accepted even when no family carries it
    pub default_language: Language,

    /// Dictionary used when the default language is missing from a family
    pub fallback_language: Language,

    /// Page size when the request does not give one
    pub default_page_size: usize,

    /// Upload size limit in bytes
    pub max_upload_bytes: usize,

    /// Keyword anchoring mode
    pub match_mode: MatchMode,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_language: Language::Es,
            fallback_language: Language::En,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            match_mode: MatchMode::WordPrefix,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from `INSIGHT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load configuration from any `config` source layered over the defaults.
    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        Config::builder()
            .set_default("port", i64::from(defaults.port))?
            .set_default("default_language", defaults.default_language.as_str())?
            .set_default("fallback_language", defaults.fallback_language.as_str())?
            .set_default("default_page_size", defaults.default_page_size as i64)?
            .set_default("max_upload_bytes", defaults.max_upload_bytes as i64)?
            .set_default("match_mode", "word_prefix")?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_source(File::from_str("", FileFormat::Toml)).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.default_language, Language::Es);
        assert_eq!(config.fallback_language, Language::En);
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.match_mode, MatchMode::WordPrefix);
    }

    #[test]
    fn test_overrides() {
        let source = File::from_str(
            r#"
            port = 8080
            default_language = "fr"
            default_page_size = 25
            match_mode = "substring"
            "#,
            FileFormat::Toml,
        );
        let config = ServiceConfig::from_source(source).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_language, Language::Fr);
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_rejects_unknown_language() {
        let source = File::from_str(r#"default_language = "pt""#, FileFormat::Toml);
        assert!(ServiceConfig::from_source(source).is_err());
    }
}
