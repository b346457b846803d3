// ABOUTME: Environment configuration for the HTTP server and the AI recipe generator
// ABOUTME: Reads RECIPE_AI_* and HTTP_* variables with typed parsing and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! Environment-based configuration

use std::env;
use std::error::Error as StdError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::constants::{env_vars, generation};
use crate::llm::{LlmCapabilities, OpenAiCompatibleConfig};

/// Settings for the chat-completion backend
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Base URL, without the `chat/completions` suffix
    pub base_url: String,
    /// Bearer token; absent keys still send an empty bearer header
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum completion tokens
    pub max_tokens: u32,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: generation::DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            model: generation::DEFAULT_MODEL.to_owned(),
            temperature: generation::DEFAULT_TEMPERATURE,
            max_tokens: generation::DEFAULT_MAX_TOKENS,
            timeout_secs: generation::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneratorConfig {
    /// Load generator settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: env_var_or(env_vars::AI_BASE_URL, generation::DEFAULT_BASE_URL),
            api_key: env::var(env_vars::AI_API_KEY)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env_var_or(env_vars::AI_MODEL, generation::DEFAULT_MODEL),
            temperature: parse_env_or(env_vars::AI_TEMPERATURE, generation::DEFAULT_TEMPERATURE)?,
            max_tokens: parse_env_or(env_vars::AI_MAX_TOKENS, generation::DEFAULT_MAX_TOKENS)?,
            timeout_secs: parse_env_or(
                env_vars::AI_TIMEOUT_SECS,
                generation::DEFAULT_TIMEOUT_SECS,
            )?,
        })
    }

    /// Provider configuration for the `OpenAI`-compatible client
    #[must_use]
    pub fn provider_config(&self) -> OpenAiCompatibleConfig {
        OpenAiCompatibleConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            default_model: self.model.clone(),
            provider_name: provider_name(&self.base_url).to_owned(),
            capabilities: LlmCapabilities::JSON_MODE,
            request_timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub http_port: u16,
    /// Catalog file replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Allowed CORS origins (`*` or a comma-separated list)
    pub cors_allowed_origins: String,
    /// AI generator settings
    pub generator: GeneratorConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any numeric variable is set to an unparsable value
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_vars::HTTP_HOST, "127.0.0.1"),
            http_port: parse_env_or(env_vars::HTTP_PORT, 8080)?,
            catalog_path: env::var(env_vars::CATALOG_PATH)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            cors_allowed_origins: env_var_or(env_vars::CORS_ALLOWED_ORIGINS, "*"),
            generator: GeneratorConfig::from_env()?,
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Finder Configuration:\n\
             - Bind: {}\n\
             - Catalog: {}\n\
             - AI Endpoint: {}\n\
             - AI Model: {}\n\
             - AI Key: {}\n\
             - Timeout: {}s",
            self.bind_address(),
            self.catalog_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string()),
            self.generator.base_url,
            self.generator.model,
            if self.generator.api_key.is_some() {
                "Configured"
            } else {
                "Missing"
            },
            self.generator.timeout_secs,
        )
    }
}

/// Short provider label derived from the API host
fn provider_name(base_url: &str) -> &str {
    if base_url.contains("siliconflow") {
        "siliconflow"
    } else if base_url.contains("localhost:11434") {
        "ollama"
    } else {
        "openai-compatible"
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name_from_url() {
        assert_eq!(provider_name("https://api.siliconflow.cn/v1"), "siliconflow");
        assert_eq!(provider_name("http://localhost:11434/v1"), "ollama");
        assert_eq!(provider_name("http://127.0.0.1:9000"), "openai-compatible");
    }

    #[test]
    fn test_provider_config_carries_settings() {
        let config = GeneratorConfig {
            api_key: Some("sk-test".to_owned()),
            timeout_secs: 5,
            ..GeneratorConfig::default()
        };
        let provider = config.provider_config();

        assert_eq!(provider.default_model, generation::DEFAULT_MODEL);
        assert_eq!(provider.api_key.as_deref(), Some("sk-test"));
        assert_eq!(provider.request_timeout, Duration::from_secs(5));
        assert!(provider.capabilities.supports_json_mode());
    }

    #[test]
    fn test_summary_hides_key() {
        let config = ServerConfig {
            host: "0.0.0.0".to_owned(),
            http_port: 9000,
            catalog_path: None,
            cors_allowed_origins: "*".to_owned(),
            generator: GeneratorConfig {
                api_key: Some("sk-secret".to_owned()),
                ..GeneratorConfig::default()
            },
        };
        let summary = config.summary();

        assert!(summary.contains("0.0.0.0:9000"));
        assert!(summary.contains("built-in"));
        assert!(!summary.contains("sk-secret"));
    }
}
