//! Logging Infrastructure

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
fn default_filter(level: &str) -> String {
    format!("employee_server={level},shared={level},tower_http={level},sqlx=warn")
}

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `level`. With `log_dir` set to an
/// existing directory, output goes to a daily rolling file instead of stdout.
pub fn init_logger(level: &str, json: bool, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .filter(|dir| Path::new(dir).is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, "employee-server"));

    match (json, file_appender) {
        (true, Some(appender)) => subscriber.json().with_writer(appender).init(),
        (true, None) => subscriber.json().init(),
        (false, Some(appender)) => subscriber.with_writer(appender).init(),
        (false, None) => subscriber.init(),
    }

    if let Some(dir) = log_dir
        && !Path::new(dir).is_dir()
    {
        tracing::warn!("LOG_DIR {} does not exist, logging to stdout", dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = default_filter("debug");
        assert!(filter.starts_with("employee_server=debug"));
        assert!(EnvFilter::try_new(filter).is_ok());
    }
}
