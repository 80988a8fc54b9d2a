//! Configuration management for readsmith
//!
//! Settings load from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `READSMITH_PROVIDER`: Provider selection (ollama|openai|claude|gemini|grok|groq) - default: "claude"
//! - `READSMITH_MODEL`: Model name - provider-specific default
//! - `READSMITH_BIND_ADDR`: Server bind address - default: "127.0.0.1:3000"
//! - `READSMITH_REQUEST_TIMEOUT`: Upstream timeout in seconds - default: "60"
//! - `READSMITH_MAX_UPLOAD_SIZE`: Max manifest size in bytes - default: "1048576" (1MB)
//! - `READSMITH_LOG_LEVEL`: Logging level - default: "info"
//!
//! ## Provider Credentials
//!
//! API keys are read by the genai library from its standard variables:
//! - **Ollama**: `OLLAMA_HOST` (no key required)
//! - **OpenAI**: `OPENAI_API_KEY`
//! - **Claude**: `ANTHROPIC_API_KEY`
//! - **Gemini**: `GEMINI_API_KEY`
//! - **Grok**: `XAI_API_KEY`
//! - **Groq**: `GROQ_API_KEY`

use genai::adapter::AdapterKind;
use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_SIZE: usize = 1_048_576; // 1MB
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid provider name
    #[error("Invalid provider: {0}. Valid options: ollama, openai, claude, gemini, grok, groq")]
    InvalidProvider(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Main configuration structure for readsmith.
///
/// Constructed with `Default::default()`, which reads `READSMITH_*`
/// environment variables and falls back to defaults for anything missing.
#[derive(Debug, Clone)]
pub struct ReadsmithConfig {
    /// Text-generation provider (from genai)
    pub provider: AdapterKind,

    /// Model name to use for inference (provider-specific)
    pub model: String,

    /// HTTP server bind address
    pub bind_addr: String,

    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,

    /// Maximum accepted manifest upload size in bytes
    pub max_upload_size: usize,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ReadsmithConfig {
    fn default() -> Self {
        let provider = env::var("READSMITH_PROVIDER")
            .ok()
            .and_then(|s| parse_provider(&s))
            .unwrap_or(AdapterKind::Anthropic);

        let model = env::var("READSMITH_MODEL")
            .ok()
            .unwrap_or_else(|| default_model(provider).to_string());

        let bind_addr =
            env::var("READSMITH_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let request_timeout_secs = env::var("READSMITH_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let max_upload_size = env::var("READSMITH_MAX_UPLOAD_SIZE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE);

        let log_level = env::var("READSMITH_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            provider,
            model,
            bind_addr,
            request_timeout_secs,
            max_upload_size,
            log_level,
        }
    }
}

impl ReadsmithConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if numeric values are out of range or the log
    /// level is unknown. Credential presence is checked separately by
    /// [`credentials_present`](Self::credentials_present).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.request_timeout_secs > 600 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        if self.max_upload_size < 1024 {
            return Err(ConfigError::ValidationFailed(
                "Max upload size must be at least 1KB".to_string(),
            ));
        }
        if self.max_upload_size > 10_485_760 {
            return Err(ConfigError::ValidationFailed(
                "Max upload size cannot exceed 10MB".to_string(),
            ));
        }

        if self.bind_addr.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Bind address cannot be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Whether the configured provider's credentials are available.
    ///
    /// Providers without a key requirement (Ollama) always report true.
    /// Missing credentials are surfaced to clients as a fixed 500-class
    /// error, distinct from per-request upstream failures.
    pub fn credentials_present(&self) -> bool {
        match self.provider.default_key_env_name() {
            Some(key_var) => env::var(key_var).map(|v| !v.is_empty()).unwrap_or(false),
            None => true,
        }
    }
}

fn parse_provider(s: &str) -> Option<AdapterKind> {
    match s.to_lowercase().as_str() {
        "ollama" => Some(AdapterKind::Ollama),
        "openai" => Some(AdapterKind::OpenAI),
        "claude" | "anthropic" => Some(AdapterKind::Anthropic),
        "gemini" => Some(AdapterKind::Gemini),
        "grok" | "xai" => Some(AdapterKind::Xai),
        "groq" => Some(AdapterKind::Groq),
        _ => None,
    }
}

fn default_model(provider: AdapterKind) -> &'static str {
    match provider {
        AdapterKind::Ollama => "qwen2.5-coder:7b",
        AdapterKind::Anthropic => "claude-3-5-haiku-latest",
        AdapterKind::OpenAI => "gpt-4o-mini",
        _ => "default-model",
    }
}

impl fmt::Display for ReadsmithConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Readsmith Configuration:")?;
        writeln!(f, "  Provider: {:?}", self.provider)?;
        writeln!(f, "  Model: {}", self.model)?;
        writeln!(f, "  Bind Address: {}", self.bind_addr)?;
        writeln!(f, "  Request Timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "  Max Upload Size: {} bytes", self.max_upload_size)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    fn base_config() -> ReadsmithConfig {
        ReadsmithConfig {
            provider: AdapterKind::Ollama,
            model: "qwen2.5-coder:7b".to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    #[test]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("READSMITH_PROVIDER", "ollama"),
            EnvGuard::set("READSMITH_MODEL", "custom-model"),
            EnvGuard::set("READSMITH_BIND_ADDR", "0.0.0.0:8080"),
            EnvGuard::set("READSMITH_REQUEST_TIMEOUT", "120"),
            EnvGuard::set("READSMITH_MAX_UPLOAD_SIZE", "2048000"),
            EnvGuard::set("READSMITH_LOG_LEVEL", "debug"),
        ];

        let config = ReadsmithConfig::default();

        assert!(matches!(config.provider, AdapterKind::Ollama));
        assert_eq!(config.model, "custom-model");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.max_upload_size, 2_048_000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_provider() {
        assert!(matches!(parse_provider("ollama"), Some(AdapterKind::Ollama)));
        assert!(matches!(
            parse_provider("Claude"),
            Some(AdapterKind::Anthropic)
        ));
        assert!(matches!(parse_provider("OPENAI"), Some(AdapterKind::OpenAI)));
        assert!(parse_provider("cobol").is_none());
    }

    #[test]
    fn test_validation_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let mut config = base_config();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 601;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_upload_size() {
        let mut config = base_config();
        config.max_upload_size = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut config = base_config();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_credentials_present_for_keyless_provider() {
        let config = base_config();
        // Ollama needs no API key
        assert!(config.credentials_present());
    }

    #[test]
    fn test_config_display() {
        let display = format!("{}", base_config());
        assert!(display.contains("Readsmith Configuration:"));
        assert!(display.contains("Provider:"));
    }
}
