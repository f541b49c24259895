use std::{io, path::PathBuf};

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

const JOINT_MOVER_CONFIG_ENV_NAME: &str = "JOINT_MOVER_CONFIG_PATH";
const DEFAULT_LOG_FILTER: &str = "info";

/// Get config path from input or env JOINT_MOVER_CONFIG_PATH
pub fn get_config_path(config: Option<PathBuf>) -> Option<PathBuf> {
    if config.is_some() {
        config
    } else {
        std::env::var(JOINT_MOVER_CONFIG_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Logs to stderr, filtered by `RUST_LOG` (default: `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// Logs to stderr like [`init_tracing`] and additionally writes every event
/// at debug level or above as JSON to a daily rotated file in `log_directory`.
///
/// The returned guard flushes the file when dropped.
pub fn init_tracing_with_file_appender(log_directory: PathBuf, name: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(log_directory, name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_filter(env_filter()),
        )
        .with(
            fmt::layer()
                .json()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(LevelFilter::DEBUG),
        )
        .init();
    guard
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_config_path() {
        let path = get_config_path(Some(PathBuf::from("a.toml")));
        assert_eq!(path, Some(PathBuf::from("a.toml")));

        std::env::set_var(JOINT_MOVER_CONFIG_ENV_NAME, "b.toml");
        let path = get_config_path(Some(PathBuf::from("a.toml")));
        assert_eq!(path, Some(PathBuf::from("a.toml")));
        let path = get_config_path(None);
        assert_eq!(path, Some(PathBuf::from("b.toml")));
        std::env::remove_var(JOINT_MOVER_CONFIG_ENV_NAME);

        let path = get_config_path(None);
        assert!(path.is_none());
    }
}
