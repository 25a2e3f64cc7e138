use std::{path::Path, sync::LazyLock};

use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{Rotation, RollingFileAppender};
use tracing_subscriber::fmt::{format::FmtSpan, writer::MakeWriterExt};

const LOG_FILE_PREFIX: &str = "cli";
const LOG_FILES_KEPT: usize = 5;
const DEFAULT_LEVEL: &str = "info";

/// Sets up logging into `<application_data_path>/logs`. Stdout is left alone because the menu bar
/// host reads it as the widget contents, `show_stderr` mirrors the logs to stderr instead.
pub fn enable_logging(
    application_data_path: &Path,
    log_level: Option<LevelFilter>,
    show_stderr: bool,
) -> Result<()> {
    let stderr = std::io::stderr.with_filter(move |_| show_stderr);
    let level = resolve_level(log_level, std::env::var("RUST_LOG").ok());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(crate_directive(&level)))
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(stderr.and(daily_appender(application_data_path)?))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger {e}"))
}

fn daily_appender(application_data_path: &Path) -> Result<RollingFileAppender> {
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(LOG_FILES_KEPT)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(application_data_path.join("logs"))?)
}

/// `--log-filter` wins over `RUST_LOG`, which wins over the default. Renders happen every second,
/// so the default stays at info.
fn resolve_level(flag: Option<LevelFilter>, env: Option<String>) -> String {
    flag.map(|v| v.to_string())
        .or(env)
        .unwrap_or_else(|| DEFAULT_LEVEL.into())
}

/// Only events of this crate are logged, dependencies stay quiet.
fn crate_directive(level: &str) -> String {
    format!("{}={level}", env!("CARGO_PKG_NAME").replace("-", "_"))
}

pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .pretty()
        .init()
});

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;
    use tracing::level_filters::LevelFilter;

    use super::{crate_directive, daily_appender, resolve_level};

    #[test]
    fn level_precedence() {
        assert_eq!(
            resolve_level(Some(LevelFilter::TRACE), Some("warn".into())),
            "trace"
        );
        assert_eq!(resolve_level(None, Some("warn".into())), "warn");
        assert_eq!(resolve_level(None, None), "info");
    }

    #[test]
    fn directive_targets_this_crate() {
        assert_eq!(crate_directive("debug"), "time_hedge=debug");
    }

    #[test]
    fn appender_creates_log_directory() -> Result<()> {
        let dir = tempdir()?;
        daily_appender(dir.path())?;
        assert!(dir.path().join("logs").is_dir());
        Ok(())
    }
}
