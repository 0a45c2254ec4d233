//! LuckPerms configuration primitives
//!
//! Two small building blocks used by the LuckPerms configuration system:
//! parsing human-authored duration strings such as `1y2mo3d4h` and resolving
//! configuration key paths from `LUCKPERMS_*` environment variables.

pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigurationAdapter, EnvironmentVariableConfigAdapter, HostInfo};
pub use duration::parse_duration;
pub use error::{AppError, DurationParseError, Result};
pub use logging::{LogSink, Logger, MemorySink};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Fixed naming and redaction constants
pub mod defaults {
    /// Namespace prepended to every derived environment variable
    pub const ENV_PREFIX: &str = "LUCKPERMS_";
    /// Replaces sensitive values in log output
    pub const REDACTED_VALUE: &str = "*****";
    /// Key paths containing this are sensitive
    pub const SENSITIVE_KEY_MARKER: &str = "password";
    /// Host name reported by the command-line tool
    pub const DEFAULT_HOST_NAME: &str = "LuckPerms";
    /// Logger name used by the command-line tool
    pub const DEFAULT_LOGGER_NAME: &str = "config";
}
