//! Lint Engine
//!
//! Core lint logic separated from parsing, configuration and output.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::{PslintError, Result};
use crate::parser::{Rule, RuleLine, rule_lines};

/// Severity of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Warn => f.write_str("WARN"),
            Level::Error => f.write_str("ERROR"),
        }
    }
}

/// A single issue found on a rule line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub message: String,
    pub level: Level,
    /// 1-based physical line number
    pub line: usize,
    /// The offending line, unmodified
    pub line_source: String,
}

impl Problem {
    fn new(line: &RuleLine<'_>, level: Level, message: &str) -> Self {
        Self {
            message: message.to_string(),
            level,
            line: line.number,
            line_source: line.text.to_string(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.level, self.message)
    }
}

/// A line check yields at most one problem
pub type Check = fn(&RuleLine<'_>) -> Option<Problem>;

/// Checks in the order they run on every line
const CHECKS: &[Check] = &[check_leading_space, check_lowercase_suffix];

/// The ordered list of checks applied to each rule line
pub fn checks() -> &'static [Check] {
    CHECKS
}

fn check_leading_space(line: &RuleLine<'_>) -> Option<Problem> {
    line.text
        .starts_with(char::is_whitespace)
        .then(|| Problem::new(line, Level::Warn, "leading space"))
}

fn check_lowercase_suffix(line: &RuleLine<'_>) -> Option<Problem> {
    let rule = Rule::parse(line.text);
    rule.suffix
        .chars()
        .any(|c| c.is_ascii_uppercase())
        .then(|| Problem::new(line, Level::Error, "non-lowercase suffix"))
}

/// Lint settings for one or more runs.
///
/// Holds no run state, so one value can be shared across runs and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linter {
    /// Stop at the first problem of any level
    pub fail_fast: bool,
    /// Stop when a check reports an error; the error itself is not kept
    pub fail_first: bool,
}

impl Linter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_fail_first(mut self, fail_first: bool) -> Self {
        self.fail_first = fail_first;
        self
    }

    /// Lint a source held in memory
    pub fn lint_str(&self, source: &str) -> Vec<Problem> {
        lint(source, self)
    }

    /// Lint raw bytes, which must be valid UTF-8
    pub fn lint_bytes(&self, bytes: &[u8]) -> Result<Vec<Problem>> {
        let source = std::str::from_utf8(bytes)?;
        Ok(self.lint_str(source))
    }

    /// Read a whole source from `reader` and lint it
    pub fn lint_reader<R: Read>(&self, mut reader: R) -> Result<Vec<Problem>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.lint_bytes(&bytes)
    }

    /// Read the file at `path` and lint it
    pub fn lint_file(&self, path: impl AsRef<Path>) -> Result<Vec<Problem>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| PslintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        self.lint_bytes(&bytes)
    }
}

/// Lint an entire source.
///
/// Lines are checked in order and each line runs every check in order.
/// With `fail_fast` the first problem ends the run. With `fail_first` the
/// run ends as soon as a check reports an error, without that error.
pub fn lint(source: &str, linter: &Linter) -> Vec<Problem> {
    let mut problems = Vec::new();
    let mut checked = 0usize;

    'lines: for line in rule_lines(source) {
        checked += 1;
        for check in CHECKS {
            let Some(problem) = check(&line) else {
                continue;
            };
            log::trace!("{}", problem);

            if linter.fail_fast {
                problems.push(problem);
                log::debug!("Stopping at line {} (fail fast)", line.number);
                break 'lines;
            }
            if linter.fail_first && problem.level == Level::Error {
                log::debug!("Stopping at line {} (fail first)", line.number);
                break 'lines;
            }
            problems.push(problem);
        }
    }

    log::debug!(
        "Checked {} rule lines, found {} problems",
        checked,
        problems.len()
    );
    problems
}

/// Whether any problem is an error
pub fn has_errors(problems: &[Problem]) -> bool {
    problems.iter().any(|p| p.level == Level::Error)
}
