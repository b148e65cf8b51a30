//! Output rendering for lint results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file problems and a top-level summary.

use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::validation::{Level, Problem};

/// Problems found in one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub file: String,
    pub problems: Vec<Problem>,
}

/// Aggregated counts across all sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Summary {
            files: reports.len(),
            ..Summary::default()
        };
        for problem in reports.iter().flat_map(|r| &r.problems) {
            match problem.level {
                Level::Error => summary.errors += 1,
                Level::Warn => summary.warnings += 1,
            }
        }
        summary
    }

    pub fn problems(&self) -> usize {
        self.errors + self.warnings
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: &'a [FileReport],
    summary: Summary,
}

/// Write lint results in the requested format
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[FileReport],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, reports),
        OutputFormat::Human => write_human(out, reports),
    }
}

fn write_json<W: Write>(out: &mut W, reports: &[FileReport]) -> io::Result<()> {
    let doc = JsonOutput {
        files: reports,
        summary: Summary::from_reports(reports),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}

fn write_human<W: Write>(out: &mut W, reports: &[FileReport]) -> io::Result<()> {
    for report in reports {
        for problem in &report.problems {
            writeln!(
                out,
                "{}:{}: {}: {}",
                report.file, problem.line, problem.level, problem.message
            )?;
            writeln!(out, "    {:?}", problem.line_source)?;
        }
    }

    let summary = Summary::from_reports(reports);
    writeln!(
        out,
        "{} problem(s) ({} error(s), {} warning(s))",
        summary.problems(),
        summary.errors,
        summary.warnings
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Linter;

    fn sample_reports() -> Vec<FileReport> {
        vec![
            FileReport {
                file: "a.dat".to_string(),
                problems: Linter::new().lint_str("aw\n *.CK\n"),
            },
            FileReport {
                file: "b.dat".to_string(),
                problems: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_summary_counts() {
        let summary = Summary::from_reports(&sample_reports());
        assert_eq!(
            summary,
            Summary {
                errors: 1,
                warnings: 1,
                files: 2
            }
        );
        assert_eq!(summary.problems(), 2);
    }

    #[test]
    fn test_human_output() {
        let mut buf = Vec::new();
        write_reports(&mut buf, &sample_reports(), OutputFormat::Human).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "a.dat:2: WARN: leading space\n    \" *.CK\"\n\
             a.dat:2: ERROR: non-lowercase suffix\n    \" *.CK\"\n\
             2 problem(s) (1 error(s), 1 warning(s))\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write_reports(&mut buf, &sample_reports(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["summary"]["errors"], 1);
        assert_eq!(value["summary"]["files"], 2);
        let first = &value["files"][0]["problems"][0];
        assert_eq!(first["message"], "leading space");
        assert_eq!(first["level"], "WARN");
        assert_eq!(first["line"], 2);
        assert_eq!(first["line_source"], " *.CK");
        assert_eq!(value["files"][1]["problems"].as_array().unwrap().len(), 0);
    }
}
