use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Oldest entries are dropped past this many.
const MAX_LOG_ENTRIES: usize = 1000;

pub type FileWriter = Arc<Mutex<BufWriter<File>>>;

/// Shared logger that can be used across the application.
///
/// Entries always land in an in-memory buffer (shown by the logs dialog);
/// when file logging is enabled they are also appended to
/// [`Logger::get_log_file_path`].
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_writer: Option<FileWriter>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
            enabled: false,
        }
    }

    /// Build a logger from the `[logging] enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }

        let path = Self::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
            enabled: true,
        })
    }

    /// Route the `log` facade into this logger
    pub fn install(&self, level: log::LevelFilter) -> Result<()> {
        let sink = self.clone();
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{:<5} {}: {}", record.level(), record.target(), message))
            })
            .level(level)
            .chain(fern::Output::call(move |record| sink.log(record.args().to_string())))
            .apply()
            .context("Failed to install logger")
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                logs.remove(0);
            }
            logs.push(formatted_message);
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

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    pub fn file_writer(&self) -> Option<FileWriter> {
        self.file_writer.clone()
    }

    /// Flush buffered file output, if any
    pub fn flush(&self) {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writer.flush();
            }
        }
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("likert").join("likert.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
