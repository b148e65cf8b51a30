//! Public Suffix List linter
//!
//! Checks files written in the PSL rule format and reports style and
//! correctness problems line by line.
//!
//! This library provides:
//! - Rule line classification (comments and blank lines are skipped)
//! - The lint engine with its fail-fast / fail-first stop policies
//! - Configuration management
//! - Human and JSON output

pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use error::{PslintError, Result};
pub use parser::{Rule, RuleKind, RuleLine, rule_lines};
pub use validation::{Level, Linter, Problem, lint};
