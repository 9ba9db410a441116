use crate::config::LoggingConfig;
use crate::constants::{LOG_BUFFER_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared in-memory log buffer, shown by the logs overlay.
///
/// Once [`Logger::init`] has run, every `log` record lands here as well as in
/// the optional log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    /// Buffer keeping at most `capacity` lines; oldest lines are dropped first
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(LOG_BUFFER_CAPACITY)))),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == self.capacity {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Path of the log file written when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("profile-doctor").join(LOG_FILE_NAME))
    }

    /// Install the global `log` dispatcher.
    ///
    /// Records always go to this buffer; with `config.enabled` they are also
    /// appended to the log file, whose path is returned. Can only succeed once
    /// per process.
    pub fn init(&self, config: &LoggingConfig) -> Result<Option<PathBuf>> {
        let level = config.level_filter()?;
        let buffer = self.clone();

        let memory = fern::Dispatch::new()
            .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
            .chain(fern::Output::call(move |record| buffer.log(record.args().to_string())));

        let mut dispatch = fern::Dispatch::new().level(level).chain(memory);

        let log_path = if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} {:<5} [{}] {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
            Some(path)
        } else {
            None
        };

        dispatch.apply().context("Failed to install logger")?;
        Ok(log_path)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
