//! Environment variable lookup, naming and .env file management

use crate::defaults::{ENV_PREFIX, SENSITIVE_KEY_MARKER};
use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Read-only key lookup over some environment
pub trait EnvSource: Send + Sync {
    /// Value of `name`, or `None` when it is not set
    fn var(&self, name: &str) -> Option<String>;
}

/// The live process environment, re-read on every lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Values that are not valid unicode are treated as unset
        std::env::var(name).ok()
    }
}

/// A fixed set of variables held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Read a .env file without touching the process environment
    pub fn from_env_file(path: &Path) -> Result<Self> {
        let iter = dotenv::from_path_iter(path).map_err(|e| {
            AppError::config(format!("Failed to open env file {}: {}", path.display(), e))
        })?;

        let mut env = Self::new();
        for item in iter {
            let (name, value) = item.map_err(|e| {
                AppError::config(format!("Failed to parse env file {}: {}", path.display(), e))
            })?;
            env.insert(name, value);
        }
        Ok(env)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Environment variable holding the value for a configuration key path.
///
/// `-` and `.` both become `_`, so `a-b` and `a.b` share a variable.
///
/// ```
/// use luckperms_config::config::env::env_var_name;
///
/// assert_eq!(env_var_name("server"), "LUCKPERMS_SERVER");
/// assert_eq!(env_var_name("data.table_prefix"), "LUCKPERMS_DATA_TABLE_PREFIX");
/// ```
pub fn env_var_name(path: &str) -> String {
    let transformed: String = path
        .to_uppercase()
        .chars()
        .map(|c| if c == '-' || c == '.' { '_' } else { c })
        .collect();
    format!("{}{}", ENV_PREFIX, transformed)
}

/// Whether values under this key path must be masked in logs.
///
/// The check is a case-sensitive substring match on the untransformed path.
pub fn is_sensitive_path(path: &str) -> bool {
    path.contains(SENSITIVE_KEY_MARKER)
}

/// Process-level .env file management
pub struct EnvManager;

impl EnvManager {
    /// Load a .env file into the process environment.
    ///
    /// Variables that are already set keep their current value. Returns whether
    /// a file was found.
    pub fn load_env_file(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        dotenv::from_path(path).map_err(|e| {
            AppError::config(format!("Failed to load env file {}: {}", path.display(), e))
        })?;
        Ok(true)
    }

    /// Example .env content for a handful of common settings
    pub fn create_example_env_content() -> String {
        let mut content = String::from(
            "# LuckPerms configuration overrides\n\
             #\n\
             # Every setting can be supplied as LUCKPERMS_<KEY PATH>, upper-cased,\n\
             # with '.' and '-' replaced by '_'.\n\n",
        );
        for (path, example) in Self::example_settings() {
            content.push_str(&format!("# {}={}\n", env_var_name(path), example));
        }
        content
    }

    /// Save example .env file to disk
    pub fn save_example_env_file(path: &Path) -> Result<()> {
        std::fs::write(path, Self::create_example_env_content())
            .map_err(|e| AppError::config(format!("Failed to write example .env file: {}", e)))
    }

    fn example_settings() -> [(&'static str, &'static str); 5] {
        [
            ("server", "global"),
            ("storage-method", "mysql"),
            ("data.address", "localhost:3306"),
            ("data.table_prefix", "luckperms_"),
            ("data.password", "change-me"),
        ]
    }
}
