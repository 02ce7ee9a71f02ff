//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables. Nested
//! sections use `__` as the separator, e.g. `GEMINI__API_KEY` or
//! `SESSION__IDLE_MINUTES`.

use motochat_ai::GeminiConfig;
use motochat_catalog::CatalogConfig;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory of static client assets.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// System instruction handed to the generative backend.
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Generative backend configuration. The API key is the one required
    /// secret; everything else has defaults.
    pub gemini: GeminiConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Minutes a session may sit idle before eviction.
    #[serde(default = "default_idle_minutes")]
    pub idle_minutes: i64,

    /// Interval between eviction sweeps, in seconds.
    #[serde(default = "default_cleanup_interval_seconds")]
    pub cleanup_interval_seconds: u64,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_assets_dir() -> String {
    "public".to_string()
}

fn default_persona() -> String {
    "Eres un asistente experto en repuestos de motos, especializado en modelos \
     de baja y media cilindrada. Responde de forma profesional y técnica. Si te \
     preguntan por otro tema, responde: 'Lo siento, mi conocimiento se limita a \
     los repuestos de motos.'"
        .to_string()
}

fn default_idle_minutes() -> i64 {
    30
}

fn default_cleanup_interval_seconds() -> u64 {
    300
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_minutes: default_idle_minutes(),
            cleanup_interval_seconds: default_cleanup_interval_seconds(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_has_correct_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.idle_minutes, 30);
        assert_eq!(config.cleanup_interval_seconds, 300);
    }

    #[test]
    fn persona_default_is_the_parts_expert() {
        assert!(default_persona().contains("repuestos de motos"));
    }
}
