//! Service configuration.

use std::fmt::Display;
use std::str::FromStr;

/// Which persistence backend to open at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// `RocksDB` under `data_dir`.
    Rocksdb,
    /// Process-local maps; nothing survives a restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rocksdb" | "rocks" => Ok(Self::Rocksdb),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(format!("unknown store backend: {other}")),
        }
    }
}

/// How the caller's identity is derived from `X-User-Id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMode {
    /// Header required; every query is scoped to the caller.
    Strict,
    /// Header optional; every query is global. Deprecated.
    Legacy,
}

impl FromStr for IdentityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown identity mode: {other}")),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:5050").
    pub listen_addr: String,

    /// Path to `RocksDB` data directory (default: "./data/budget-buddy-db").
    pub data_dir: String,

    /// Storage backend (default: `rocksdb`).
    pub store_backend: StoreBackend,

    /// Identity mode (default: `strict`).
    pub identity_mode: IdentityMode,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to [`ServiceConfig::default`].
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            data_dir: std::env::var("DATA_DIR").unwrap_or(defaults.data_dir),
            store_backend: parse_var("STORE_BACKEND", defaults.store_backend),
            identity_mode: parse_var("IDENTITY_MODE", defaults.identity_mode),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| parse_origins(&s))
                .unwrap_or(defaults.cors_origins),
            max_body_bytes: parse_var("MAX_BODY_BYTES", defaults.max_body_bytes),
            request_timeout_seconds: parse_var(
                "REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout_seconds,
            ),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5050".into(),
            data_dir: "./data/budget-buddy-db".into(),
            store_backend: StoreBackend::Rocksdb,
            identity_mode: IdentityMode::Strict,
            cors_origins: vec!["*".into()],
            max_body_bytes: 64 * 1024, // 64KB
            request_timeout_seconds: 30,
        }
    }
}

/// Read and parse an environment variable, falling back to `default`.
fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().unwrap_or_else(|e| {
        tracing::warn!(key = %key, value = %raw, error = %e, "Invalid configuration value, using default");
        default
    })
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
