//! Dual-sink run logging: a persistent log file plus styled console lines

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use console::style;
use indicatif::ProgressBar;

use crate::types::CopyError;

/// Severity of a log record
#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Logging context for a single run.
///
/// Every record goes to two sinks: the log file gets a timestamped line,
/// the console gets a styled line on stderr. While a progress bar is
/// attached, console lines are routed through it so they print above the
/// bar instead of tearing it.
pub struct RunLog {
    file: File,
    bar: Mutex<Option<ProgressBar>>,
}

impl RunLog {
    /// Open the log file for appending, creating it if absent
    pub fn create(path: &Path) -> Result<RunLog, CopyError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(RunLog {
            file,
            bar: Mutex::new(None),
        })
    }

    pub fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    pub fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }

    /// Route console lines through `bar` until detached
    pub fn attach_progress(&self, bar: ProgressBar) {
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    /// Console lines go straight to stderr again
    pub fn detach_progress(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            *slot = None;
        }
    }

    fn record(&self, level: Level, message: &str) {
        self.write_file(level, message);
        self.write_console(level, message);
    }

    // Sink write failures are swallowed; logging never aborts a run.
    fn write_file(&self, level: Level, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let mut sink = &self.file;
        let _ = writeln!(sink, "{timestamp} - {level}: {message}");
    }

    fn write_console(&self, level: Level, message: &str) {
        let tag = match level {
            Level::Info => style("INFO:").green().for_stderr(),
            Level::Error => style("ERROR:").red().bold().for_stderr(),
        };
        let line = format!("{tag} {message}");

        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                bar.println(&line);
                return;
            }
        }

        eprintln!("{line}");
    }
}
