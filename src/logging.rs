use anyhow::Context;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable from which the log filter is read
const LOG_FILTER_VAR: &str = "HEARTSNAKE_LOG";

/// Filter used when [`LOG_FILTER_VAR`] is unset or invalid
const DEFAULT_LOG_FILTER: &str = "heartsnake=info";

/// Send log messages to the file at `path`, appending to it if it already
/// exists.  The terminal belongs to the UI, so if `path` is `None`, nothing
/// is logged at all.
pub(crate) fn init(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log file directory")?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install logger")?;
    Ok(())
}
