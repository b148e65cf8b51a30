//! Lint Engine
//!
//! Clean separation of lint logic from parsing and output concerns.

pub mod engine;

pub use engine::{Check, Level, Linter, Problem, checks, has_errors, lint};
