//! Configuration adapters resolving key paths to raw string values

use super::env::{env_var_name, is_sensitive_path, EnvSource, ProcessEnv};
use crate::defaults::REDACTED_VALUE;
use crate::logging::LogSink;
use std::fmt;
use std::sync::Arc;

/// Identity of the application that owns an adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub name: String,
    pub version: String,
}

impl HostInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

/// A source of raw configuration values keyed by dotted/hyphenated path
pub trait ConfigurationAdapter {
    /// The owning host application
    fn host(&self) -> &HostInfo;

    /// Raw value for `path`, or `None` when this source does not define it
    fn resolve_value(&self, path: &str) -> Option<String>;

    /// Drop any state derived from the underlying source
    fn reload(&mut self);
}

/// Adapter reading values from `LUCKPERMS_*` environment variables.
///
/// Every successful lookup is reported through the log sink. Values whose key
/// path contains `password` are masked in that report but returned unmasked.
pub struct EnvironmentVariableConfigAdapter<E = ProcessEnv> {
    host: HostInfo,
    env: E,
    sink: Arc<dyn LogSink>,
}

impl EnvironmentVariableConfigAdapter<ProcessEnv> {
    /// Adapter over the live process environment
    pub fn new(host: HostInfo, sink: Arc<dyn LogSink>) -> Self {
        Self::with_env(host, ProcessEnv, sink)
    }
}

impl<E: EnvSource> EnvironmentVariableConfigAdapter<E> {
    pub fn with_env(host: HostInfo, env: E, sink: Arc<dyn LogSink>) -> Self {
        Self { host, env, sink }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Look up `path`, logging the variable name and (possibly masked) value on success
    pub fn resolve(&self, path: &str) -> Option<String> {
        let key = env_var_name(path);
        let value = self.env.var(&key)?;

        let shown = if is_sensitive_path(path) { REDACTED_VALUE } else { value.as_str() };
        self.sink.write_info(&format!(
            "Resolved configuration value from environment variable: {} = {}",
            key, shown
        ));

        Some(value)
    }
}

impl<E: EnvSource> ConfigurationAdapter for EnvironmentVariableConfigAdapter<E> {
    fn host(&self) -> &HostInfo {
        &self.host
    }

    fn resolve_value(&self, path: &str) -> Option<String> {
        self.resolve(path)
    }

    fn reload(&mut self) {
        // no-op: every lookup already reads the environment
    }
}

impl<E: fmt::Debug> fmt::Debug for EnvironmentVariableConfigAdapter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentVariableConfigAdapter")
            .field("host", &self.host)
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::MapEnv;
    use crate::logging::MemorySink;

    fn host() -> HostInfo {
        HostInfo::new("LuckPerms", "5.4")
    }

    fn adapter(env: MapEnv) -> (EnvironmentVariableConfigAdapter<MapEnv>, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let adapter = EnvironmentVariableConfigAdapter::with_env(host(), env, sink.clone());
        (adapter, sink)
    }

    #[test]
    fn test_resolve_simple_key() {
        let (adapter, sink) = adapter(MapEnv::new().with("LUCKPERMS_SERVER", "lobby"));

        assert_eq!(adapter.resolve("server").as_deref(), Some("lobby"));
        assert_eq!(
            sink.messages(),
            vec!["Resolved configuration value from environment variable: LUCKPERMS_SERVER = lobby"]
        );
    }

    #[test]
    fn test_resolve_nested_key() {
        let (adapter, sink) = adapter(MapEnv::new().with("LUCKPERMS_DATA_TABLE_PREFIX", "lp_"));

        assert_eq!(adapter.resolve("data.table_prefix").as_deref(), Some("lp_"));
        assert!(sink.messages()[0].contains("LUCKPERMS_DATA_TABLE_PREFIX = lp_"));
    }

    #[test]
    fn test_password_is_masked_in_log_only() {
        let (adapter, sink) = adapter(MapEnv::new().with("LUCKPERMS_STORAGE_PASSWORD", "hunter2"));

        assert_eq!(adapter.resolve("storage.password").as_deref(), Some("hunter2"));

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].ends_with("LUCKPERMS_STORAGE_PASSWORD = *****"));
        assert!(!messages[0].contains("hunter2"));
    }

    #[test]
    fn test_redaction_checks_original_path_case() {
        let (adapter, sink) = adapter(MapEnv::new().with("LUCKPERMS_STORAGE_PASSWORD", "hunter2"));

        // upper-case path maps to the same variable but is not treated as sensitive
        assert_eq!(adapter.resolve("storage.PASSWORD").as_deref(), Some("hunter2"));
        assert!(sink.messages()[0].ends_with("= hunter2"));
    }

    #[test]
    fn test_unset_is_absent_and_silent() {
        let (adapter, sink) = adapter(MapEnv::new());

        assert_eq!(adapter.resolve("server"), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_empty_value_is_not_absent() {
        let (adapter, sink) = adapter(MapEnv::new().with("LUCKPERMS_SERVER", ""));

        assert_eq!(adapter.resolve("server"), Some(String::new()));
        assert_eq!(sink.messages().len(), 1);
    }

    #[test]
    fn test_reload_does_not_change_resolution() {
        let (mut adapter, _sink) = adapter(MapEnv::new().with("LUCKPERMS_SERVER", "lobby"));

        let before = adapter.resolve_value("server");
        adapter.reload();
        assert_eq!(adapter.resolve_value("server"), before);
        assert_eq!(adapter.resolve_value("missing"), None);
    }

    #[test]
    fn test_host_identification() {
        let (adapter, _sink) = adapter(MapEnv::new());
        assert_eq!(adapter.host(), &host());
        assert_eq!(adapter.host().to_string(), "LuckPerms v5.4");
    }

    #[test]
    fn test_process_env_adapter() {
        std::env::set_var("LUCKPERMS_ADAPTER_PROCESS_TEST", "from-process");
        let sink = Arc::new(MemorySink::new());
        let adapter = EnvironmentVariableConfigAdapter::new(host(), sink.clone());

        assert_eq!(adapter.resolve("adapter.process-test").as_deref(), Some("from-process"));
        assert_eq!(sink.messages().len(), 1);
    }
}
