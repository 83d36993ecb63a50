use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub org_id: Option<String>,
    pub token: Option<String>,
}

// Manual Debug impl to avoid leaking the API token
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("org_id", &self.org_id)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            org_id: None,
            token: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BatchConfig {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Owner prefix for submission targets, e.g. `owner` in `owner/repo`.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Rough per-item duration used only for the completion estimate.
    #[serde(default = "default_per_item_seconds")]
    pub per_item_seconds: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            branch: default_branch(),
            namespace: default_namespace(),
            per_item_seconds: default_per_item_seconds(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.codegen.com".to_string()
}

fn default_input_path() -> PathBuf {
    PathBuf::from("all_repos.json")
}

fn default_branch() -> String {
    "cicd-ratings".to_string()
}

fn default_namespace() -> String {
    "Zeeeepa".to_string()
}

fn default_per_item_seconds() -> u64 {
    2
}

impl AppConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_with_env(config_path, None)
    }

    /// Like [`AppConfig::load`], reading overrides from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(
        config_path: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        } else {
            builder = builder.add_source(config::File::with_name("agent-batch").required(false));
        }

        // Environment variable overrides with AGENT_BATCH_ prefix, kept as raw strings
        builder = builder.add_source(
            config::Environment::with_prefix("AGENT_BATCH")
                .separator("__")
                .source(env),
        );

        let config = builder
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Organization id and token, both required to talk to the live API.
    pub fn api_credentials(&self) -> Result<(&str, &str)> {
        let org_id = self
            .api
            .org_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Config("api.org_id is not set".to_string()))?;
        let token = self
            .api
            .token
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Config("api.token is not set".to_string()))?;
        Ok((org_id, token))
    }
}
