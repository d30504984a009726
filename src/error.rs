//! Error types for quickiter

use std::fmt;
use thiserror::Error;

/// How a reference oracle subprocess ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    /// Exited with a non-zero status code
    Code(i32),
    /// Killed by a signal
    Signal,
}

impl fmt::Display for ExitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitKind::Code(code) => write!(f, "exit status {}", code),
            ExitKind::Signal => write!(f, "terminated by signal"),
        }
    }
}

/// Main error type for quickiter
#[derive(Error, Debug)]
pub enum Error {
    /// `cycle` was handed nothing to repeat
    #[error("EmptyCycle: cannot cycle over an empty sequence")]
    EmptyCycle,

    /// The producer thread could not be started
    #[error("SpawnError: failed to start generator thread '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The reference interpreter could not be launched
    #[error("OracleUnavailable: could not run '{interpreter}': {source}")]
    OracleUnavailable {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    /// The reference interpreter ran but failed
    #[error("OracleFailed: {status}{}", if stderr.is_empty() { String::new() } else { format!("\n{}", stderr) })]
    OracleFailed { status: ExitKind, stderr: String },

    /// The reference interpreter printed something we could not read
    #[error("OracleParse: {reason} in line {line:?}")]
    OracleParse { line: String, reason: String },

    /// A configuration document could not be decoded
    #[error("ConfigError: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Create a spawn error for the named generator
    pub fn spawn(name: impl Into<String>, source: std::io::Error) -> Self {
        Error::Spawn {
            name: name.into(),
            source,
        }
    }

    /// Create an oracle output parse error
    pub fn oracle_parse(line: impl Into<String>, reason: impl fmt::Display) -> Self {
        Error::OracleParse {
            line: line.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for quickiter
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::EmptyCycle.to_string(),
            "EmptyCycle: cannot cycle over an empty sequence"
        );

        let err = Error::OracleFailed {
            status: ExitKind::Code(2),
            stderr: "Traceback".to_string(),
        };
        assert_eq!(err.to_string(), "OracleFailed: exit status 2\nTraceback");

        let err = Error::OracleFailed {
            status: ExitKind::Signal,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "OracleFailed: terminated by signal");

        let err = Error::oracle_parse("x", "invalid digit");
        assert_eq!(err.to_string(), "OracleParse: invalid digit in line \"x\"");
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
