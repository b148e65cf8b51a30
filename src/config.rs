//! Configuration management for the PSL linter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Config file discovery and parsing
//! - Merging both into the settings for a run

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{PslintError, Result};
use crate::validation::Linter;

/// Name of the per-project config file
pub const PROJECT_CONFIG_FILE: &str = ".pslint.toml";

/// Output format for lint results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Command-line arguments for the PSL linter
#[derive(Debug, Parser)]
#[command(name = "pslint")]
#[command(about = "Lint Public Suffix List formatted files")]
#[command(version)]
pub struct Args {
    /// Files to lint; reads standard input when empty or "-"
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Stop at the first problem of any level
    #[arg(long)]
    pub fail_fast: bool,

    /// Stop at the first error-level problem
    #[arg(long)]
    pub fail_first: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Explicit config file, skips discovery
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for the linter
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Contents of a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub fail_fast: Option<bool>,
    pub fail_first: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PslintError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| PslintError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub linter: Linter,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config file that was applied, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::from_args_in(Args::parse(), &cwd)
    }

    /// Create configuration from explicit arguments, discovering config
    /// files relative to `cwd` (useful for testing)
    pub fn from_args_in(args: Args, cwd: &Path) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) => Some(path.clone()),
            None => discover_config_file(cwd),
        };

        let file_config = match &config_file {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        Ok(Self::merge(args, file_config, config_file))
    }

    /// Flags given on the command line override the file
    fn merge(args: Args, file: FileConfig, config_file: Option<PathBuf>) -> Self {
        let linter = Linter::new()
            .with_fail_fast(args.fail_fast || file.fail_fast.unwrap_or(false))
            .with_fail_first(args.fail_first || file.fail_first.unwrap_or(false));

        Config {
            files: args.files,
            linter,
            format: args.format.or(file.format).unwrap_or_default(),
            log_level: args.log_level,
            config_file,
        }
    }

    /// Sources to lint, in command-line order
    pub fn inputs(&self) -> Vec<Input> {
        if self.files.is_empty() {
            return vec![Input::Stdin];
        }
        self.files
            .iter()
            .map(|f| {
                if f.as_os_str() == "-" {
                    Input::Stdin
                } else {
                    Input::File(f.clone())
                }
            })
            .collect()
    }
}

/// A source of PSL text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Name used when reporting problems
    pub fn name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// Find the first existing config file: project first, then user
pub fn discover_config_file(cwd: &Path) -> Option<PathBuf> {
    let project = cwd.join(PROJECT_CONFIG_FILE);
    let user = dirs::config_dir().map(|dir| dir.join("pslint").join("config.toml"));

    std::iter::once(project)
        .chain(user)
        .find(|path| path.is_file())
}
