//! Shockwave CLI - Command-line interface for portfolio scenario analysis.
//!
//! # Usage
//!
//! ```bash
//! # Write the bundled sample portfolio
//! shockwave sample --output holdings.csv
//!
//! # List the scenario catalog
//! shockwave scenarios list
//!
//! # Apply one scenario
//! shockwave analyze holdings.csv --scenario market-crash
//!
//! # Run every scenario and rank them
//! shockwave compare holdings.csv --format json
//!
//! # Write a Markdown impact report
//! shockwave report holdings.csv --scenario rate-hike --output report.md
//! ```

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod settings;

use cli::{Cli, Commands};
use commands::Context;
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    // Config management must work even when the stored settings are broken
    if let Commands::Config(args) = cli.command {
        return commands::config::execute(args, cli.format.unwrap_or_default());
    }

    let settings = Settings::load().context("Failed to load settings")?;
    if !settings.use_colors() {
        colored::control::set_override(false);
    }

    let format = match cli.format {
        Some(format) => format,
        None => settings.default_format()?,
    };

    let catalog_path = cli.catalog.or_else(|| settings.catalog_path());
    let catalog = commands::load_catalog(catalog_path.as_deref())?;
    debug!(scenarios = catalog.len(), ?format, "cli ready");

    let ctx = Context {
        format,
        quiet: cli.quiet,
        catalog,
        settings,
    };

    // Execute command
    match cli.command {
        Commands::Scenarios(args) => commands::scenarios::execute(args, &ctx)?,
        Commands::Analyze(args) => commands::analyze::execute(args, &ctx)?,
        Commands::Compare(args) => commands::compare::execute(args, &ctx)?,
        Commands::Allocation(args) => commands::allocation::execute(args, &ctx)?,
        Commands::Report(args) => commands::report::execute(args, &ctx)?,
        Commands::Sample(args) => commands::sample::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, ctx.format)?,
    }

    Ok(())
}
