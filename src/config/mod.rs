//! Configuration for generator threads and the reference oracle

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default prefix for generator thread names
pub const DEFAULT_THREAD_NAME: &str = "quickiter";

/// Environment variable that overrides the oracle interpreter
pub const PYTHON_ENV: &str = "QUICKITER_PYTHON";

/// Environment variable that overrides the oracle helper directory
pub const SCRIPT_DIR_ENV: &str = "QUICKITER_SCRIPT_DIR";

/// Settings applied to every producer thread a [`Spawner`](crate::Spawner) starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix for thread names; the generator name is appended (`quickiter-count`)
    pub thread_name: String,
    /// Stack size for producer threads in bytes (None = platform default)
    pub stack_size: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            thread_name: DEFAULT_THREAD_NAME.to_string(),
            stack_size: None,
        }
    }
}

impl GeneratorConfig {
    /// Decode a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the thread name prefix
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Set the producer stack size
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }
}

/// Where to find the reference interpreter and its helper module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Interpreter executable
    pub interpreter: String,
    /// Directory that contains `py_versions.py`
    pub script_dir: PathBuf,
}

impl Default for OracleConfig {
    fn default() -> Self {
        let interpreter = std::env::var(PYTHON_ENV).unwrap_or_else(|_| "python3".to_string());
        let script_dir = std::env::var_os(SCRIPT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scripts"));

        Self {
            interpreter,
            script_dir,
        }
    }
}

impl OracleConfig {
    /// Decode a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
