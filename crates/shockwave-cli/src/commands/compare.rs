//! Compare command implementation.
//!
//! Runs every catalog scenario against the same holdings. Each scenario is
//! applied to the original portfolio; results never compound.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use shockwave_portfolio::report::format_signed_pct;
use shockwave_portfolio::{compare_scenarios, ComparisonSummary, ScenarioResult};

use crate::cli::OutputFormat;
use crate::commands::{load_holdings, Context};
use crate::output::{money, print_csv, print_output, print_section, KeyValue};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Holdings CSV file
    pub portfolio: PathBuf,

    /// Order rows from worst to best instead of catalog order
    #[arg(long)]
    pub ranked: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "Projected")]
    projected: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Change %")]
    change_pct: String,
    #[tabled(rename = "Vulnerability")]
    vulnerability: String,
}

impl From<&ScenarioResult> for ComparisonRow {
    fn from(r: &ScenarioResult) -> Self {
        Self {
            scenario: r.scenario_name.clone(),
            projected: money(r.impacted_value),
            change: money(r.absolute_change),
            change_pct: format_signed_pct(r.percentage_change),
            vulnerability: format!("{:.2}", r.vulnerability_score),
        }
    }
}

fn summary_rows(summary: &ComparisonSummary) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Scenarios Run", summary.scenario_count.to_string()),
        KeyValue::new(
            "Worst Case",
            format!(
                "{} ({})",
                summary.worst_scenario,
                format_signed_pct(summary.worst_change_pct)
            ),
        ),
        KeyValue::money("Worst Change", summary.worst_change),
        KeyValue::new(
            "Best Case",
            format!(
                "{} ({})",
                summary.best_scenario,
                format_signed_pct(summary.best_change_pct)
            ),
        ),
        KeyValue::money("Best Change", summary.best_change),
        KeyValue::pct("Average Change", summary.avg_change_pct),
        KeyValue::new(
            "Average Vulnerability",
            format!("{:.2}", summary.avg_vulnerability),
        ),
    ]
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, ctx: &Context) -> Result<()> {
    let holdings = load_holdings(&args.portfolio)?;
    let mut comparison = compare_scenarios(&holdings, ctx.catalog.scenarios());
    if args.ranked {
        comparison
            .results
            .sort_by(|a, b| a.absolute_change.total_cmp(&b.absolute_change));
    }
    info!(scenarios = comparison.results.len(), "comparison complete");

    let rows: Vec<ComparisonRow> = comparison.results.iter().map(ComparisonRow::from).collect();

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        OutputFormat::Csv => print_csv(&comparison.results)?,
        OutputFormat::Minimal => {
            if let Some(summary) = &comparison.summary {
                println!("{}", summary.worst_scenario);
            }
        }
        OutputFormat::Table | OutputFormat::Markdown => {
            print_section(
                &format!("Scenario Comparison: {}", holdings.owner()),
                ctx.format,
            );
            print_output(&rows, ctx.format)?;

            if let Some(summary) = &comparison.summary {
                print_section("Summary", ctx.format);
                print_output(&summary_rows(summary), ctx.format)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shockwave_portfolio::summarize_results;

    fn result(id: &str, change: f64) -> ScenarioResult {
        ScenarioResult {
            scenario_id: id.to_string(),
            scenario_name: id.to_uppercase(),
            original_value: 1000.0,
            impacted_value: 1000.0 + change,
            absolute_change: change,
            percentage_change: change / 10.0,
            vulnerability_score: 1.5,
        }
    }

    #[test]
    fn test_row() {
        let row = ComparisonRow::from(&result("crash", -250.0));
        assert_eq!(row.scenario, "CRASH");
        assert_eq!(row.projected, "$750");
        assert_eq!(row.change_pct, "-25.00%");
        assert_eq!(row.vulnerability, "1.50");
    }

    #[test]
    fn test_summary_rows() {
        let results = vec![result("crash", -250.0), result("boom", 100.0)];
        let summary = summarize_results(&results).unwrap();
        let rows = summary_rows(&summary);

        assert_eq!(rows[0].value, "2");
        assert_eq!(rows[1].value, "crash (-25.00%)");
        assert_eq!(rows[3].value, "boom (+10.00%)");
    }
}
