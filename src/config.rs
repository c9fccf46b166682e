use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use validator::Validate;

use crate::models::ScoringWeights;

/// Application configuration
///
/// Every section has defaults, so the service starts without any config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub cache: CacheSettings,
    pub recommendations: RecommendationSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub enabled: bool,
    pub ttl_secs: u64,
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: 300,
            max_entries: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecommendationSettings {
    /// Results returned when the request has no `limit`
    pub default_limit: usize,
    /// Upper bound applied to any requested `limit`
    pub max_limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 200,
        }
    }
}

impl RecommendationSettings {
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    pub weights: ScoringWeights,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    /// Load the demo catalog on startup
    pub enabled: bool,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables of the form `PAWMATCH__SECTION__KEY`
    ///
    /// Scoring weights outside `0..=100` are rejected.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PAWMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values serde cannot constrain
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring
            .weights
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid scoring.weights: {}", e)))
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PAWMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_weights() {
        let settings = Settings::default();
        assert_eq!(settings.scoring.weights, ScoringWeights::CANONICAL);
        assert_eq!(settings.scoring.weights.activity_exact, 25);
        assert_eq!(settings.scoring.weights.kids_penalty, 15);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                port = 9000

                [scoring.weights]
                size_match = 20
                "#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.scoring.weights.size_match, 20);
        assert_eq!(settings.scoring.weights.activity_exact, 25);
        assert!(settings.cache.enabled);
    }

    fn settings_from_toml(toml: &str) -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Settings::from_config(config)
    }

    #[test]
    fn test_environment_uses_double_underscore_prefix() {
        let mut vars = config::Map::new();
        vars.insert("PAWMATCH__SERVER__PORT".to_string(), "9100".to_string());
        vars.insert("PAWMATCH__SCORING__WEIGHTS__SIZE_MATCH".to_string(), "30".to_string());
        vars.insert("PAWMATCH_SERVER__HOST".to_string(), "ignored".to_string());

        let config = Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap();
        let settings = Settings::from_config(config).unwrap();

        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.scoring.weights.size_match, 30);
    }

    #[test]
    fn test_canonical_weights_pass_validation() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_negative_penalty_rejected() {
        let result = settings_from_toml(
            r#"
            [scoring.weights]
            kids_penalty = -15
            "#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("scoring.weights"), "unexpected error: {}", err);
    }

    #[test]
    fn test_oversized_weight_rejected() {
        let result = settings_from_toml(
            r#"
            [scoring.weights]
            activity_exact = 2000000000
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_effective_limit() {
        let recs = RecommendationSettings {
            default_limit: 10,
            max_limit: 20,
        };
        assert_eq!(recs.effective_limit(None), 10);
        assert_eq!(recs.effective_limit(Some(5)), 5);
        assert_eq!(recs.effective_limit(Some(500)), 20);
    }
}
