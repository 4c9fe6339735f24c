//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{
    AllocationArgs, AnalyzeArgs, CompareArgs, ConfigArgs, ReportArgs, SampleArgs, ScenariosArgs,
};

/// Shockwave - Portfolio scenario impact analysis CLI
#[derive(Parser)]
#[command(name = "shockwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: table, or the `default_format` setting]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Scenario catalog file (.json or .toml) replacing the built-in scenarios
    #[arg(long, global = true, env = "SHOCKWAVE_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List or inspect the scenario catalog
    Scenarios(ScenariosArgs),

    /// Apply one scenario to a holdings file
    Analyze(AnalyzeArgs),

    /// Run every catalog scenario against a holdings file
    Compare(CompareArgs),

    /// Show portfolio composition by class, industry or region
    Allocation(AllocationArgs),

    /// Write a Markdown or plain-text impact report
    Report(ReportArgs),

    /// Write the bundled sample holdings CSV
    Sample(SampleArgs),

    /// Manage configurations
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Markdown tables
    Markdown,
    /// Minimal output (just the value)
    Minimal,
}

impl OutputFormat {
    /// Accepted names, in declaration order.
    pub const NAMES: [&'static str; 5] = ["table", "json", "csv", "markdown", "minimal"];

    /// Parses a format name case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "markdown" | "md" => Some(Self::Markdown),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::parse("yaml"), None);
        for name in OutputFormat::NAMES {
            assert!(OutputFormat::parse(name).is_some());
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shockwave", "scenarios", "list", "--format", "json", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }
}
