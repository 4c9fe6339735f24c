//! Sample command implementation.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use shockwave_ext_file::{sample_holdings, SAMPLE_HOLDINGS_CSV};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{print_info, print_success};

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Write the CSV to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the sample command.
pub fn execute(args: SampleArgs, ctx: &Context) -> Result<()> {
    let Some(path) = args.output else {
        if ctx.format == OutputFormat::Json {
            let holdings = sample_holdings()?;
            println!("{}", serde_json::to_string_pretty(&holdings)?);
        } else {
            print!("{}", SAMPLE_HOLDINGS_CSV);
        }
        return Ok(());
    };

    if path.exists() && !args.force {
        return Err(CliError::OutputExists(path).into());
    }
    std::fs::write(&path, SAMPLE_HOLDINGS_CSV)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if !ctx.quiet {
        print_success(&format!("Sample holdings written to {}", path.display()));
        print_info(&format!(
            "Try: shockwave analyze {} --scenario market-crash",
            path.display()
        ));
    }
    Ok(())
}
