//! Report rendering for CLI output
//!
//! Human mode puts styled per-file status lines and a closing summary on
//! stdout, and every diagnostic verbatim on its own stderr line so the
//! output stays grep- and pipe-friendly. JSON mode puts one report object
//! on stdout and nothing on stderr.

use console::style;
use podgate_core::Diagnostic;
use serde::Serialize;

/// Validation outcome for one manifest file.
pub struct FileReport {
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Display per-file results and a summary.
pub fn print_human(reports: &[FileReport]) {
    for report in reports {
        if report.is_valid() {
            println!("{} {}", style("✓").green(), report.source);
        } else {
            println!(
                "{} {}: {} problem(s)",
                style("✗").red(),
                report.source,
                report.diagnostics.len()
            );
            for diagnostic in &report.diagnostics {
                eprintln!("{}", diagnostic);
            }
        }
    }

    let problems: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    let invalid = reports.iter().filter(|r| !r.is_valid()).count();

    println!();
    if problems > 0 {
        println!(
            "{} Validation failed with {} problem(s) in {} manifest(s)",
            style("✗").red().bold(),
            problems,
            invalid
        );
    } else {
        println!("{} All manifests are valid!", style("✓").green().bold());
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    manifests: Vec<JsonManifest<'a>>,
}

#[derive(Serialize)]
struct JsonManifest<'a> {
    source: &'a str,
    valid: bool,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    line: Option<usize>,
    path: &'a str,
    message: String,
}

/// Display the whole run as one JSON object.
pub fn print_json(reports: &[FileReport]) {
    let report = JsonReport {
        valid: reports.iter().all(FileReport::is_valid),
        manifests: reports
            .iter()
            .map(|r| JsonManifest {
                source: &r.source,
                valid: r.is_valid(),
                diagnostics: r
                    .diagnostics
                    .iter()
                    .map(|d| JsonDiagnostic {
                        line: d.line(),
                        path: d.path(),
                        message: d.message(),
                    })
                    .collect(),
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}
