//! Configuration values sourced from the environment

pub mod adapter;
pub mod env;

// Re-export main functionality
pub use adapter::{ConfigurationAdapter, EnvironmentVariableConfigAdapter, HostInfo};
pub use env::{env_var_name, is_sensitive_path, EnvManager, EnvSource, MapEnv, ProcessEnv};
