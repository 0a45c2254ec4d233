//! Logging for the configuration primitives
//!
//! Components that report through a log only depend on [`LogSink`], a single
//! informational write. [`Logger`] is the structured console/JSON logger used
//! by the command-line tool and [`MemorySink`] captures lines in memory.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Mutex;

/// Destination for informational messages
pub trait LogSink: Send + Sync {
    /// Write one already-formatted informational message
    fn write_info(&self, message: &str);
}

/// Log level, ordered from most to least detailed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// ANSI color used for the level label
    fn ansi(&self) -> &'static str {
        match self {
            LogLevel::Trace => "\x1b[37m",
            LogLevel::Debug => "\x1b[36m",
            LogLevel::Info => "\x1b[32m",
            LogLevel::Warn => "\x1b[33m",
            LogLevel::Error => "\x1b[31m",
            LogLevel::Fatal => "\x1b[35m",
        }
    }
}

impl FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// How log lines are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// `timestamp LEVEL [logger] message {fields}`
    #[default]
    Console,
    /// One JSON object per line
    Json,
    /// `HH:MM:SS L logger: message`
    Compact,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "console" => Ok(LogFormat::Console),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(AppError::parse(format!("Invalid log format: {}", s))),
        }
    }
}

/// A single structured log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub logger: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// Logger settings, usually derived from command-line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub verbose: bool,
    pub debug: bool,
    pub enable_color: bool,
    /// Explicit minimum level; overrides `verbose`/`debug`
    pub level: Option<LogLevel>,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
            enable_color: true,
            level: None,
            format: LogFormat::Console,
        }
    }
}

impl LogSettings {
    /// Minimum level that gets written
    pub fn min_level(&self) -> LogLevel {
        match self.level {
            Some(level) => level,
            None if self.debug => LogLevel::Debug,
            None if self.verbose => LogLevel::Info,
            None => LogLevel::Warn,
        }
    }
}

/// Structured logger writing Warn and above to stderr, the rest to stdout
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    min_level: LogLevel,
    format: LogFormat,
    use_color: bool,
}

impl Logger {
    pub fn with_settings(name: impl Into<String>, settings: LogSettings) -> Self {
        Self {
            name: name.into(),
            min_level: settings.min_level(),
            format: settings.format,
            use_color: settings.enable_color,
        }
    }

    /// Start an entry at `level`
    pub fn log(&self, level: LogLevel, message: &str) -> LogEntryBuilder<'_> {
        LogEntryBuilder {
            logger: self,
            entry: LogEntry {
                timestamp: Utc::now(),
                level,
                message: message.to_string(),
                logger: self.name.clone(),
                fields: BTreeMap::new(),
            },
        }
    }

    pub fn debug(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Info, message)
    }

    pub fn would_log(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Render an entry in the configured format
    pub fn render(&self, entry: &LogEntry) -> String {
        match self.format {
            LogFormat::Console => {
                let label = if self.use_color {
                    format!("{}{:>5}\x1b[0m", entry.level.ansi(), entry.level.as_str())
                } else {
                    format!("{:>5}", entry.level.as_str())
                };
                let mut line = format!(
                    "{} {} [{}] {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
                    label,
                    entry.logger,
                    entry.message
                );
                if !entry.fields.is_empty() {
                    let fields: Vec<String> =
                        entry.fields.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                    line.push_str(&format!(" {{{}}}", fields.join(", ")));
                }
                line
            }
            LogFormat::Json => serde_json::to_string(entry).unwrap_or_else(|_| {
                format!("{{\"level\":\"ERROR\",\"message\":{:?}}}", entry.message)
            }),
            LogFormat::Compact => {
                let initial = entry.level.as_str().chars().next().unwrap_or('?');
                format!(
                    "{} {} {}: {}",
                    entry.timestamp.format("%H:%M:%S"),
                    initial,
                    entry.logger,
                    entry.message
                )
            }
        }
    }

    fn emit(&self, entry: LogEntry) {
        if !self.would_log(entry.level) {
            return;
        }

        let line = self.render(&entry);
        if entry.level >= LogLevel::Warn {
            let _ = writeln!(io::stderr(), "{}", line);
        } else {
            let _ = writeln!(io::stdout(), "{}", line);
        }
    }
}

impl LogSink for Logger {
    fn write_info(&self, message: &str) {
        self.info(message).log();
    }
}

/// Entry under construction; nothing is written until [`LogEntryBuilder::log`]
pub struct LogEntryBuilder<'a> {
    logger: &'a Logger,
    entry: LogEntry,
}

impl LogEntryBuilder<'_> {
    /// Attach a structured field
    pub fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.entry.fields.insert(key.to_string(), value);
        }
        self
    }

    pub fn error_info(self, error: &AppError) -> Self {
        self.field("error_category", error.category())
            .field("error_exit_code", error.exit_code())
    }

    pub fn entry(&self) -> &LogEntry {
        &self.entry
    }

    pub fn log(self) {
        self.logger.emit(self.entry);
    }
}

/// Sink that keeps every message in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages written so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }
}

impl LogSink for MemorySink {
    fn write_info(&self, message: &str) {
        let mut messages = match self.messages.lock() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn plain(format: LogFormat) -> Logger {
        let settings = LogSettings {
            enable_color: false,
            level: Some(LogLevel::Trace),
            format,
            ..LogSettings::default()
        };
        Logger::with_settings("config", settings)
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("TRACE").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("Fatal").unwrap(), LogLevel::Fatal);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("console").unwrap(), LogFormat::Console);
        assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert!(LogFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_min_level_from_settings() {
        assert_eq!(LogSettings::default().min_level(), LogLevel::Warn);

        let verbose = LogSettings { verbose: true, ..LogSettings::default() };
        assert_eq!(verbose.min_level(), LogLevel::Info);

        let debug = LogSettings { debug: true, verbose: true, ..LogSettings::default() };
        assert_eq!(debug.min_level(), LogLevel::Debug);

        let explicit = LogSettings {
            debug: true,
            level: Some(LogLevel::Error),
            ..LogSettings::default()
        };
        assert_eq!(explicit.min_level(), LogLevel::Error);

        let logger = Logger::with_settings("config", explicit);
        assert!(!logger.would_log(LogLevel::Warn));
        assert!(logger.would_log(LogLevel::Fatal));
    }

    #[test]
    fn test_console_format() {
        let logger = plain(LogFormat::Console);
        let builder = logger.info("Resolved value").field("key", "LUCKPERMS_SERVER");
        let line = logger.render(builder.entry());

        assert!(line.contains(" INFO [config] Resolved value"));
        assert!(line.contains("key=\"LUCKPERMS_SERVER\""));
    }

    #[test]
    fn test_json_format_round_trips() {
        let logger = plain(LogFormat::Json);
        let builder = logger.log(LogLevel::Warn, "careful");
        let line = logger.render(builder.entry());
        let parsed: LogEntry = serde_json::from_str(&line).unwrap();

        assert!(line.contains("\"level\":\"WARN\""));
        assert_eq!(parsed.level, LogLevel::Warn);
        assert_eq!(parsed.message, "careful");
        assert!(parsed.fields.is_empty());
    }

    #[test]
    fn test_compact_format() {
        let logger = plain(LogFormat::Compact);
        let builder = logger.log(LogLevel::Error, "boom");
        assert!(logger.render(builder.entry()).ends_with(" E config: boom"));
    }

    #[test]
    fn test_error_info_fields() {
        let logger = plain(LogFormat::Console);
        let error = AppError::io("gone");
        let builder = logger.debug("failed").error_info(&error);

        assert_eq!(builder.entry().fields["error_category"], "IO");
        assert_eq!(builder.entry().fields["error_exit_code"], 5);
    }

    #[test]
    fn test_memory_sink_collects_from_threads() {
        let sink = Arc::new(MemorySink::new());
        assert!(sink.is_empty());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || sink.write_info(&format!("message {i}")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut messages = sink.messages();
        messages.sort();
        assert_eq!(messages, vec!["message 0", "message 1", "message 2", "message 3"]);
    }
}
