use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use pslint::config::{Config, Input};
use pslint::output::{FileReport, write_reports};
use pslint::validation::{Linter, Problem, has_errors};

fn lint_input(linter: &Linter, input: &Input) -> Result<Vec<Problem>> {
    let problems = match input {
        Input::Stdin => linter
            .lint_reader(io::stdin().lock())
            .context("Failed to lint standard input")?,
        Input::File(path) => linter
            .lint_file(path)
            .with_context(|| format!("Failed to lint {}", path.display()))?,
    };
    Ok(problems)
}

fn run(config: &Config) -> Result<bool> {
    if let Some(path) = &config.config_file {
        log::info!("Using config file {}", path.display());
    }

    let mut reports = Vec::new();
    for input in config.inputs() {
        let problems = lint_input(&config.linter, &input)?;
        log::info!("{}: {} problem(s)", input.name(), problems.len());
        reports.push(FileReport {
            file: input.name(),
            problems,
        });
    }

    let mut stdout = io::stdout().lock();
    write_reports(&mut stdout, &reports, config.format).context("Failed to write output")?;
    stdout.flush()?;

    Ok(reports.iter().any(|r| has_errors(&r.problems)))
}

fn main() -> ExitCode {
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pslint: {:#}", anyhow::Error::from(e));
            return ExitCode::from(2);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match run(&config) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            eprintln!("pslint: {:#}", e);
            ExitCode::from(2)
        }
    }
}
