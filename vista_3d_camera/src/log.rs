//! Internal logging system for the Vista3D camera library
//!
//! This module provides a flexible logging system with:
//! - Customizable logger via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Thread-safe global logger with minimum-severity filtering
//! - File and line information for detailed ERROR logs

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to create custom loggers (file logging, in-memory
/// capture for tests, etc.) and install them with [`set_logger`].
///
/// # Example
///
/// ```no_run
/// use vista_3d_camera::vista3d::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    ///
    /// # Arguments
    ///
    /// * `entry` - The log entry to process
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "vista3d::PoseCamera")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (typically disabled in release)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== GLOBAL LOGGER HOST =====

/// Global logger state: the installed logger and the minimum severity
/// that is actually dispatched
struct LogHost {
    logger: RwLock<Box<dyn Logger>>,
    min_severity: RwLock<LogSeverity>,
}

/// Global logger host (initialized on first use with DefaultLogger, Trace)
static LOG_HOST: OnceLock<LogHost> = OnceLock::new();

fn host() -> &'static LogHost {
    LOG_HOST.get_or_init(|| LogHost {
        logger: RwLock::new(Box::new(DefaultLogger)),
        min_severity: RwLock::new(LogSeverity::Trace),
    })
}

/// Set a custom logger
///
/// Replace the default logger with a custom implementation.
///
/// # Example
///
/// ```no_run
/// use vista_3d_camera::vista3d::log::{self, Logger, LogEntry};
///
/// struct QuietLogger;
/// impl Logger for QuietLogger {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// log::set_logger(QuietLogger);
/// ```
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut lock) = host().logger.write() {
        *lock = Box::new(logger);
    }
}

/// Reset logger to the default colored console logger
pub fn reset_logger() {
    if let Ok(mut lock) = host().logger.write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Set the minimum severity that is dispatched to the logger
///
/// Entries below this severity are dropped before reaching the logger.
/// The initial minimum is `Trace` (everything dispatched).
pub fn set_min_severity(severity: LogSeverity) {
    if let Ok(mut lock) = host().min_severity.write() {
        *lock = severity;
    }
}

/// Get the current minimum dispatched severity
pub fn min_severity() -> LogSeverity {
    host()
        .min_severity
        .read()
        .map(|lock| *lock)
        .unwrap_or(LogSeverity::Trace)
}

/// Dispatch a log entry without file:line information
///
/// Used by the `camera_trace!` .. `camera_warn!` macros.
///
/// # Arguments
///
/// * `severity` - Log severity level
/// * `source` - Source module (e.g., "vista3d::PoseCamera")
/// * `message` - Log message
pub fn emit(severity: LogSeverity, source: &str, message: String) {
    if severity < min_severity() {
        return;
    }
    if let Ok(lock) = host().logger.read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Dispatch a log entry with file:line information (for ERROR logs)
///
/// Used by the `camera_error!` macro to include the source location.
///
/// # Arguments
///
/// * `severity` - Log severity level (typically Error)
/// * `source` - Source module (e.g., "vista3d::PoseCamera")
/// * `message` - Log message
/// * `file` - Source file path
/// * `line` - Source line number
pub fn emit_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if severity < min_severity() {
        return;
    }
    if let Ok(lock) = host().logger.read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
///
/// # Example
///
/// ```no_run
/// vista_3d_camera::camera_trace!("vista3d::PoseCamera", "entering rotate()");
/// ```
#[macro_export]
macro_rules! camera_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// vista_3d_camera::camera_debug!("vista3d::PoseCamera", "pose set to {:?}", (1.0, 2.0, 3.0));
/// ```
#[macro_export]
macro_rules! camera_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// vista_3d_camera::camera_info!("vista3d::PoseCamera", "camera ready");
/// ```
#[macro_export]
macro_rules! camera_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
///
/// # Example
///
/// ```no_run
/// vista_3d_camera::camera_warn!("vista3d::PoseCamera", "orientation drift: {}", 0.01);
/// ```
#[macro_export]
macro_rules! camera_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// vista_3d_camera::camera_error!("vista3d::PoseCamera", "rejected input: {}", "zero quaternion");
/// ```
#[macro_export]
macro_rules! camera_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
