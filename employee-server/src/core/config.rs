use super::error::{Result, ServerError};
use std::net::SocketAddr;
use std::str::FromStr;

/// Service configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite::memory: | SQLite connection URL |
/// | BIND_ADDR | 0.0.0.0 | Listen address |
/// | HTTP_PORT | 8080 | HTTP port |
/// | MAX_CONNECTIONS | 5 | Pool size (in-memory databases always use 1) |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout in milliseconds |
/// | SEED_DATA | true | Insert the two seed employees at startup |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default log level when RUST_LOG is unset |
/// | LOG_JSON | true in production, else false | Emit logs as JSON lines |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite://employees.db HTTP_PORT=9000 cargo run -p employee-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub http_port: u16,
    pub max_connections: u32,
    pub request_timeout_ms: u64,
    pub seed_data: bool,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            bind_addr: "0.0.0.0".into(),
            http_port: 8080,
            max_connections: 5,
            request_timeout_ms: 30_000,
            seed_data: true,
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to [`Config::default`]; a value that is set
    /// but cannot be parsed is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source
    ///
    /// `LOG_JSON` defaults to on when `ENVIRONMENT=production`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);
        let log_json_default = is_production(&environment);

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            http_port: parse_or("HTTP_PORT", lookup("HTTP_PORT"), defaults.http_port)?,
            max_connections: parse_or(
                "MAX_CONNECTIONS",
                lookup("MAX_CONNECTIONS"),
                defaults.max_connections,
            )?,
            request_timeout_ms: parse_or(
                "REQUEST_TIMEOUT_MS",
                lookup("REQUEST_TIMEOUT_MS"),
                defaults.request_timeout_ms,
            )?,
            seed_data: parse_or("SEED_DATA", lookup("SEED_DATA"), defaults.seed_data)?,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: parse_or("LOG_JSON", lookup("LOG_JSON"), log_json_default)?,
            log_dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
            environment,
        })
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_addr, self.http_port)
            .parse()
            .map_err(|e| {
                ServerError::Config(format!(
                    "Invalid listen address {}:{}: {e}",
                    self.bind_addr, self.http_port
                ))
            })
    }
}

fn is_production(environment: &str) -> bool {
    environment.eq_ignore_ascii_case("production")
}

fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| ServerError::Config(format!("{name}={value:?}: {e}"))),
    }
}
