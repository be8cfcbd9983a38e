//! File logging setup via the `log` facade and `fern`.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::LoggingConfig;

/// Install the global logger according to config. A disabled config
/// installs nothing and log macros become no-ops.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level_filter()?;
    let log_file = fern::log_file(&config.file)
        .with_context(|| format!("Failed to open log file: {}", config.file))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}
