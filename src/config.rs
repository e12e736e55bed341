//! Process configuration, read once from the environment at startup.

use std::env;
use std::fmt;

use thiserror::Error;

use crate::utils::openrouter::DEFAULT_BASE_URL;

/// Errors raised while assembling the [`Config`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable was absent or empty.
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
}

/// Immutable bot configuration.
///
/// Built once in `main` and handed to the completion client and the
/// framework setup; nothing else reads the environment.
#[derive(Clone)]
pub struct Config {
    /// Gateway bot token.
    pub discord_token: String,
    /// Discord application id.
    pub app_id: Option<String>,
    /// Application public key, used for interaction signature checks.
    pub public_key: Option<String>,
    /// OAuth2 client secret.
    pub client_secret: Option<String>,
    /// Bearer credential for the completion endpoint.
    pub openrouter_api_key: Option<String>,
    /// Base URL of the OpenRouter API, without the `/chat/completions` suffix.
    pub openrouter_base_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        Ok(Self {
            discord_token,
            app_id: get("APP_ID"),
            public_key: get("PUBLIC_KEY"),
            client_secret: get("CLIENT_SECRET"),
            openrouter_api_key: get("OPENROUTER_API_KEY"),
            openrouter_base_url: get("OPENROUTER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(_) => "<set>",
        None => "<unset>",
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<set>")
            .field("app_id", &self.app_id)
            .field("public_key", &redact(&self.public_key))
            .field("client_secret", &redact(&self.client_secret))
            .field("openrouter_api_key", &redact(&self.openrouter_api_key))
            .field("openrouter_base_url", &self.openrouter_base_url)
            .finish()
    }
}
