//! Configuration for the Vitrine catalog browser.
//!
//! A TOML file resolved via platform conventions, overridable through
//! `VITRINE_*` environment variables. Precedence (highest first):
//! CLI flags (applied by the binary), environment, file, defaults.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config structs ──────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub order: OrderConfig,
}

/// Catalog API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL; the client appends `/devices`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// WhatsApp ordering settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderConfig {
    /// Destination number for wa.me deep links.
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            whatsapp: default_whatsapp(),
        }
    }
}

fn default_base_url() -> String {
    "https://bulp-server-new.vercel.app/api".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_whatsapp() -> String {
    "1234567890".into()
}

// ── Loading ─────────────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "vitrine", "vitrine").map_or_else(
        || PathBuf::from("vitrine.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Load configuration: defaults ← file ← `VITRINE_*` environment.
///
/// Nested keys use `__` in the environment, e.g.
/// `VITRINE_API__BASE_URL=https://shop.example/api`.
pub fn load_config() -> Result<Config, ConfigError> {
    load_from(config_path())
}

fn load_from(path: PathBuf) -> Result<Config, ConfigError> {
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("VITRINE_").split("__"))
        .extract()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.api.base_url.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "api.base_url".into(),
            reason: "must not be empty".into(),
        });
    }
    if config.api.timeout == 0 {
        return Err(ConfigError::Validation {
            field: "api.timeout".into(),
            reason: "must be at least 1 second".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!(config.api.base_url.starts_with("https://"));
        assert_eq!(config.api.timeout, 30);
        assert!(!config.order.whatsapp.is_empty());
    }

    #[test]
    fn file_overrides_defaults_and_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "vitrine.toml",
                r#"
                [api]
                base_url = "https://file.example/api"
                timeout = 10

                [order]
                whatsapp = "+212600000000"
                "#,
            )?;
            jail.set_env("VITRINE_API__BASE_URL", "https://env.example/api");

            let config = load_from("vitrine.toml".into()).unwrap();
            assert_eq!(config.api.base_url, "https://env.example/api");
            assert_eq!(config.api.timeout, 10);
            assert_eq!(config.order.whatsapp, "+212600000000");
            Ok(())
        });
    }

    #[test]
    fn zero_timeout_is_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("vitrine.toml", "[api]\ntimeout = 0\n")?;
            assert!(matches!(
                load_from("vitrine.toml".into()),
                Err(ConfigError::Validation { .. })
            ));
            Ok(())
        });
    }
}
