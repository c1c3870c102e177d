//! Server configuration from environment variables.
//!
//! | Variable | Default | Notes |
//! |----------|---------|-------|
//! | `HOST` | `0.0.0.0` | |
//! | `PORT` | `8080` | a leading `:` is accepted (`PORT=:9000`) |
//! | `BARCODE_MAX_DIMENSION` | `4096` | largest accepted width or height |
//!
//! Unparseable values fall back to the default and log a warning.

use barcode_core::{GenerateOptions, DEFAULT_MAX_DIMENSION};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Listener address and pipeline limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_dimension: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("HOST").map(|h| h.trim().to_string()) {
            Some(host) if !host.is_empty() => host,
            _ => defaults.host,
        };

        let port = lookup("PORT")
            .and_then(|raw| parse_or_warn("PORT", &raw, parse_port))
            .unwrap_or(defaults.port);

        let max_dimension = lookup("BARCODE_MAX_DIMENSION")
            .and_then(|raw| parse_or_warn("BARCODE_MAX_DIMENSION", &raw, parse_max_dimension))
            .unwrap_or(defaults.max_dimension);

        Self {
            host,
            port,
            max_dimension,
        }
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            max_dimension: self.max_dimension,
        }
    }
}

fn parse_or_warn<T>(key: &str, raw: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        log::warn!("ignoring invalid {key}={raw:?}, using default");
    }
    parsed
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.strip_prefix(':').unwrap_or(raw).parse().ok()
}

fn parse_max_dimension(raw: &str) -> Option<u32> {
    raw.parse().ok().filter(|&max| max > 0)
}
