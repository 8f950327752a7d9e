//! Podgate CLI - pre-deployment validation gate for Pod manifests

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::PathBuf;

mod exit_codes;
mod report;

use report::FileReport;

#[derive(Parser)]
#[command(name = "podgate")]
#[command(author = "Podgate Contributors")]
#[command(version)]
#[command(about = "Pre-deployment validation gate for Kubernetes Pod manifests", long_about = None)]
struct Cli {
    /// Manifest file(s) to validate
    #[arg(required = true)]
    manifests: Vec<PathBuf>,

    /// Output one JSON report instead of styled text
    #[arg(long)]
    json: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();

    // Set debug level
    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    let mut reports = Vec::new();
    for path in &cli.manifests {
        let text = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot read {}", path.display()))?;

        let root = podgate_yaml::parse_document(&text)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot parse {}", path.display()))?;

        let source = path.display().to_string();
        let diagnostics = podgate_core::validate(&source, root.as_ref());
        reports.push(FileReport {
            source,
            diagnostics,
        });
    }

    if cli.json {
        report::print_json(&reports);
    } else {
        report::print_human(&reports);
    }

    if reports.iter().any(|r| !r.is_valid()) {
        std::process::exit(exit_codes::VALIDATION_ERROR);
    }

    Ok(())
}
