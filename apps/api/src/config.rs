use anyhow::{Context, Result};

const DEFAULT_COMPLETION_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
const DEFAULT_COMPLETION_MODEL: &str = "deepseek-chat";
/// Provider convention: keys are issued with this prefix and must be sent with it.
const API_KEY_PREFIX: &str = "sk-";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub completion: CompletionConfig,
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the completion client needs, handed to it at construction.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

// Keeps the key out of `{:?}` output in logs.
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            completion: CompletionConfig {
                api_url: env_or("COMPLETION_API_URL", DEFAULT_COMPLETION_API_URL),
                api_key: normalize_api_key(&require_env("DEEPSEEK_API_KEY")?),
                model: env_or("COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL),
                temperature: env_or("COMPLETION_TEMPERATURE", "0.7")
                    .parse::<f32>()
                    .context("COMPLETION_TEMPERATURE must be a number")?,
                timeout_secs: env_or("COMPLETION_TIMEOUT_SECS", "30")
                    .parse::<u64>()
                    .context("COMPLETION_TIMEOUT_SECS must be a whole number of seconds")?,
            },
            cors_allowed_origins: parse_origins(&env_or("CORS_ALLOWED_ORIGINS", "*")),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: env_or("PORT", "8081")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

/// Prepends the `sk-` prefix unless the key already carries it.
pub fn normalize_api_key(raw: &str) -> String {
    let key = raw.trim();
    if key.starts_with(API_KEY_PREFIX) {
        key.to_string()
    } else {
        format!("{API_KEY_PREFIX}{key}")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
