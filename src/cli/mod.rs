//! Command-line interface for inspecting durations and environment configuration

use crate::logging::{LogFormat, LogLevel, LogSettings};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LuckPerms configuration helper - parse durations and resolve LUCKPERMS_* variables
#[derive(Parser, Debug, Clone)]
#[command(name = "lpconf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (shows resolution audit lines)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Minimum log level (trace, debug, info, warn, error, fatal); overrides --verbose/--debug
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Log line format (console, json, compact)
    #[arg(long, global = true, value_name = "FORMAT", default_value = "console")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Parse duration strings such as "1y6mo2w3d" or "5 minutes, 30 seconds"
    Duration {
        /// Duration strings to parse
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the environment variable a configuration key path maps to
    EnvName {
        /// Configuration key paths, e.g. "data.table_prefix"
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Resolve configuration key paths from LUCKPERMS_* environment variables
    Resolve {
        /// Configuration key paths, e.g. "server" or "data.table_prefix"
        #[arg(required = true)]
        paths: Vec<String>,

        /// Load this .env file before resolving (existing variables win)
        #[arg(long, value_name = "FILE", env = "LPCONF_ENV_FILE")]
        env_file: Option<PathBuf>,

        /// Resolve against the --env-file contents only, ignoring the process environment
        #[arg(long, requires = "env_file")]
        isolated: bool,

        /// Print sensitive values instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Write an example .env file with LUCKPERMS_* settings
    ExampleEnv {
        /// Destination file; prints to stdout when omitted
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        !self.no_color && supports_color()
    }

    /// Logger settings implied by the global flags
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            verbose: self.verbose,
            debug: self.debug,
            enable_color: self.use_colors(),
            level: self.log_level,
            format: self.log_format,
        }
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::env::var_os("NO_COLOR").is_none()
}
