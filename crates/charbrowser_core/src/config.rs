//! Runtime configuration for front ends embedding the core.
//!
//! # Invariants
//! - `log_dir = None` means the log facade stays uninitialized (silent).
//! - `db_path = None` means annotations live in memory for the process only.

use crate::logging::{default_log_level, init_logging};
use std::path::PathBuf;

/// Default storage file name used when a front end picks a directory only.
pub const DEFAULT_DB_FILE_NAME: &str = "charbrowser.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// SQLite file holding the annotation blob.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            db_path: Some(PathBuf::from(DEFAULT_DB_FILE_NAME)),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl BrowserConfig {
    /// Starts file logging when a log directory is configured.
    ///
    /// # Errors
    /// - Propagates `init_logging` errors (bad level, relative directory,
    ///   conflicting re-initialization).
    pub fn init_logging(&self) -> Result<(), String> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(());
        };
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log_dir `{}` is not valid UTF-8", log_dir.display()))?;
        init_logging(&self.log_level, log_dir)
    }
}
