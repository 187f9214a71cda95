use crate::config::LoggingConfig;
use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
///
/// Entries are kept in memory for the logs overlay (opened with `G`) and
/// forwarded to the `log` facade, so the file sink set up by
/// [`init_file_logging`] sees everything the overlay sees.
#[derive(Clone, Debug)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        log::debug!("{}", message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the log file inside the platform data directory
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().context("could not determine data directory")?;
    Ok(data_dir.join("tabshell").join(LOG_FILE_NAME))
}

/// Route `log` records to a file when logging is enabled.
///
/// Must be called at most once, before any component starts logging.
pub fn init_file_logging(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("failed to open {}", path.display()))?)
        .apply()
        .context("logger already initialized")?;

    Ok(())
}
