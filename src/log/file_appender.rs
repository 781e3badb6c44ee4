// File appender with size-capped rotation

use crate::error::{Result, ResolverError};
use crate::utils::fs::ensure_dir;
use std::fs::{File, OpenOptions};
use std::io::Write as _;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "media-resolver.log";

pub struct FileAppender {
    log_dir: PathBuf,
    current_file: Option<File>,
    current_size: u64,
    max_file_size: u64,
}

impl FileAppender {
    pub fn new(log_dir: PathBuf, max_file_size: u64) -> Result<Self> {
        ensure_dir(&log_dir)?;
        let mut appender = Self {
            log_dir,
            current_file: None,
            current_size: 0,
            max_file_size,
        };
        appender.open_current_file()?;
        Ok(appender)
    }

    fn current_log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    fn open_current_file(&mut self) -> Result<()> {
        let log_path = self.current_log_path();
        self.current_size = if log_path.exists() {
            std::fs::metadata(&log_path).map(|m| m.len()).unwrap_or(0)
        } else {
            0
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| {
                ResolverError::Log(format!(
                    "Failed to open log file {}: {}",
                    log_path.display(),
                    e
                ))
            })?;
        self.current_file = Some(file);
        Ok(())
    }

    /// Rotate the full log file to a `.old` sibling and start fresh
    fn rotate(&mut self) -> Result<()> {
        self.current_file = None;

        let path = self.current_log_path();
        let old_path = path.with_extension("log.old");
        std::fs::rename(&path, &old_path)
            .map_err(|e| ResolverError::Log(format!("Failed to rotate log file: {}", e)))?;

        self.open_current_file()
    }

    pub fn write_line(&mut self, message: &str) -> Result<()> {
        let message_len = message.len() as u64 + 1; // +1 for newline

        if self.current_size + message_len > self.max_file_size {
            self.rotate()?;
        }

        if let Some(file) = &mut self.current_file {
            file.write_all(message.as_bytes())
                .map_err(|e| ResolverError::Log(format!("Failed to write to log file: {}", e)))?;
            file.write_all(b"\n").map_err(|e| {
                ResolverError::Log(format!("Failed to write newline to log file: {}", e))
            })?;
            file.flush()
                .map_err(|e| ResolverError::Log(format!("Failed to flush log file: {}", e)))?;
            self.current_size += message_len;
        }
        Ok(())
    }
}
