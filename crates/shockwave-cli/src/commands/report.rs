//! Report command implementation.
//!
//! Renders a printable impact report for one scenario.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::info;

use shockwave_portfolio::{AnalysisConfig, ImpactReport};

use crate::cli::OutputFormat;
use crate::commands::{load_holdings, resolve_scenario, validate_count, Context};
use crate::error::CliError;
use crate::output::print_success;

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Holdings CSV file
    pub portfolio: PathBuf,

    /// Scenario id (see `shockwave scenarios list`)
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write into this directory using the generated file name
    #[arg(long, conflicts_with = "output")]
    pub dir: Option<PathBuf>,

    /// Plain text instead of Markdown
    #[arg(long)]
    pub text: bool,

    /// Rows in the most impacted assets table
    #[arg(short = 'n', long, default_value = "10")]
    pub top: usize,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Execute the report command.
pub fn execute(args: ReportArgs, ctx: &Context) -> Result<()> {
    let top = validate_count(args.top)?;
    let holdings = load_holdings(&args.portfolio)?;
    let scenario = resolve_scenario(ctx, args.scenario.as_deref())?;

    let config = AnalysisConfig::new()
        .with_most_impacted_count(top)
        .with_top_risk_count(ctx.settings.top_assets());
    let report = ImpactReport::new(&holdings, scenario, &config);

    let (body, extension) = if ctx.format == OutputFormat::Json {
        (serde_json::to_string_pretty(&report)?, "json")
    } else if args.text {
        (report.to_text(), "txt")
    } else {
        (report.to_markdown(), "md")
    };

    let target = match (args.output, args.dir) {
        (Some(path), _) => Some(path),
        (None, Some(dir)) => Some(dir.join(report.file_name(extension))),
        (None, None) => None,
    };

    match target {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(CliError::OutputExists(path).into());
            }
            std::fs::write(&path, &body)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), bytes = body.len(), "report written");
            if !ctx.quiet {
                print_success(&format!("Report written to {}", path.display()));
            }
        }
        None => print!("{}", body),
    }

    Ok(())
}
