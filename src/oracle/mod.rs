//! Reference Oracle
//!
//! Recomputes generator output with Python's own `itertools` so results can
//! be cross-checked. Each call launches the interpreter once:
//!
//! ```text
//! QUICKITER_SCRIPT_DIR=<script_dir> python3 -c 'import os, sys; sys.path.insert(0, os.environ["QUICKITER_SCRIPT_DIR"]); from py_versions import accumulate; accumulate([1,2,3])'
//! ```
//!
//! The helper directory travels through the environment as an `OsStr`, so
//! paths never need quoting for Python.
//!
//! `py_versions.py` prints one integer per line (`n_count`, `accumulate`) or
//! one `a,b` line per pair (`pairwise`). Nothing in the generator library
//! depends on this module; it backs the test suite and `quickiter verify`.

use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::config::{OracleConfig, SCRIPT_DIR_ENV};
use crate::error::{Error, ExitKind, Result};

/// Render integers as a Python list literal: `[1,2,3]`
pub fn render_list(data: &[i64]) -> String {
    let items: Vec<String> = data.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(","))
}

/// Parse one integer per line
pub fn parse_integers(output: &str) -> Result<Vec<i64>> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.parse::<i64>().map_err(|e| Error::oracle_parse(line, e)))
        .collect()
}

/// Parse one `a,b` pair per line
pub fn parse_pairs(output: &str) -> Result<Vec<(i64, i64)>> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (a, b) = line
                .split_once(',')
                .ok_or_else(|| Error::oracle_parse(line, "missing ','"))?;
            let a = a.trim().parse::<i64>().map_err(|e| Error::oracle_parse(line, e))?;
            let b = b.trim().parse::<i64>().map_err(|e| Error::oracle_parse(line, e))?;
            Ok((a, b))
        })
        .collect()
}

/// Runs the reference interpreter
#[derive(Debug, Clone, Default)]
pub struct ReferenceOracle {
    config: OracleConfig,
}

impl ReferenceOracle {
    /// Create an oracle with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oracle with custom configuration
    pub fn with_config(config: OracleConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Check that the interpreter starts and can import the helper module
    pub fn is_available(&self) -> bool {
        match self.run("import py_versions") {
            Ok(_) => true,
            Err(e) => {
                warn!(interpreter = %self.config.interpreter, error = %e, "reference oracle unavailable");
                false
            }
        }
    }

    /// First `n` values of `itertools.count(start, step)`
    pub fn count(&self, start: i64, step: i64, n: usize) -> Result<Vec<i64>> {
        let output = self.run(&format!("from py_versions import n_count; n_count({}, {}, {})", start, step, n))?;
        parse_integers(&output)
    }

    /// `itertools.accumulate(data)` (additive)
    pub fn accumulate(&self, data: &[i64]) -> Result<Vec<i64>> {
        let output = self.run(&format!("from py_versions import accumulate; accumulate({})", render_list(data)))?;
        parse_integers(&output)
    }

    /// `itertools.pairwise(data)`
    pub fn pairwise(&self, data: &[i64]) -> Result<Vec<(i64, i64)>> {
        let output = self.run(&format!("from py_versions import pairwise; pairwise({})", render_list(data)))?;
        parse_pairs(&output)
    }

    /// Run `statement` with the helper directory on `sys.path`
    fn run(&self, statement: &str) -> Result<String> {
        let program = format!("import os, sys; sys.path.insert(0, os.environ['{}']); {}", SCRIPT_DIR_ENV, statement);
        debug!(
            interpreter = %self.config.interpreter,
            script_dir = %self.config.script_dir.display(),
            %program,
            "running reference oracle"
        );

        let output = Command::new(&self.config.interpreter)
            .arg("-c")
            .arg(&program)
            .env(SCRIPT_DIR_ENV, &self.config.script_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::OracleUnavailable {
                interpreter: self.config.interpreter.clone(),
                source,
            })?;

        if !output.status.success() {
            let status = output.status.code().map(ExitKind::Code).unwrap_or(ExitKind::Signal);
            return Err(Error::OracleFailed {
                status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_list() {
        assert_eq!(render_list(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), "[1,2,3,4,5,6,7,8,9,10]");
        assert_eq!(render_list(&[-1, 0]), "[-1,0]");
        assert_eq!(render_list(&[]), "[]");
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_integers("0\n4\n8\n").unwrap(), vec![0, 4, 8]);
        assert_eq!(parse_integers("  -3 \r\n").unwrap(), vec![-3]);
        assert!(parse_integers("").unwrap().is_empty());
        assert!(matches!(parse_integers("1\nx\n"), Err(Error::OracleParse { .. })));
    }

    #[test]
    fn test_parse_pairs() {
        assert_eq!(parse_pairs("1,2\n2,3\n").unwrap(), vec![(1, 2), (2, 3)]);
        assert_eq!(parse_pairs("-1, 5").unwrap(), vec![(-1, 5)]);
        assert!(parse_pairs("").unwrap().is_empty());
        assert!(matches!(parse_pairs("(1, 2)"), Err(Error::OracleParse { .. })));
        assert!(matches!(parse_pairs("12"), Err(Error::OracleParse { .. })));
    }

    #[test]
    fn test_missing_interpreter() {
        let oracle = ReferenceOracle::with_config(OracleConfig {
            interpreter: "quickiter-no-such-interpreter".to_string(),
            script_dir: PathBuf::from("."),
        });

        assert!(!oracle.is_available());
        assert!(matches!(oracle.accumulate(&[1, 2]), Err(Error::OracleUnavailable { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_interpreter() {
        let oracle = ReferenceOracle::with_config(OracleConfig {
            interpreter: "false".to_string(),
            script_dir: PathBuf::from("."),
        });

        match oracle.count(0, 1, 3) {
            Err(Error::OracleFailed { status, .. }) => assert_eq!(status, ExitKind::Code(1)),
            other => panic!("expected OracleFailed, got {:?}", other),
        }
    }
}
