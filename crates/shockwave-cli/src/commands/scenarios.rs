//! Scenarios command implementation.
//!
//! Lists and inspects the active scenario catalog.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use shockwave_portfolio::report::format_signed_pct;
use shockwave_portfolio::Scenario;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_output, print_section, print_single, KeyValue};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    #[command(subcommand)]
    pub command: ScenariosCommand,
}

/// Scenarios subcommands.
#[derive(Subcommand, Debug)]
pub enum ScenariosCommand {
    /// List every scenario in the catalog
    List,

    /// Show one scenario and its class shocks
    Show(ShowArgs),
}

/// Arguments for show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Scenario id
    pub id: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Shocks")]
    shocks: usize,
    #[tabled(rename = "Worst Shock")]
    worst_shock: String,
}

impl From<&Scenario> for ScenarioRow {
    fn from(scenario: &Scenario) -> Self {
        let worst = scenario
            .impacts
            .iter()
            .min_by(|a, b| a.percentage_change.total_cmp(&b.percentage_change));
        Self {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            duration: scenario.duration.clone(),
            shocks: scenario.impacts.len(),
            worst_shock: worst
                .map(|i| format!("{} {}", i.asset_class, format_signed_pct(i.percentage_change)))
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct ShockRow {
    #[tabled(rename = "Asset Class")]
    asset_class: String,
    #[tabled(rename = "Change")]
    change: String,
}

/// Execute the scenarios command.
pub fn execute(args: ScenariosArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ScenariosCommand::List => execute_list(ctx),
        ScenariosCommand::Show(show_args) => execute_show(show_args, ctx),
    }
}

/// List the catalog.
fn execute_list(ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_single(&ctx.catalog.scenarios(), ctx.format)?,
        OutputFormat::Minimal => {
            for id in ctx.catalog.ids() {
                println!("{}", id);
            }
        }
        OutputFormat::Table | OutputFormat::Csv | OutputFormat::Markdown => {
            let rows: Vec<ScenarioRow> = ctx.catalog.iter().map(ScenarioRow::from).collect();
            print_section("Scenario Catalog", ctx.format);
            print_output(&rows, ctx.format)?;
        }
    }
    Ok(())
}

/// Show one scenario.
fn execute_show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let scenario = ctx.catalog.get(&args.id)?;

    let shocks: Vec<ShockRow> = scenario
        .impacts
        .iter()
        .map(|i| ShockRow {
            asset_class: i.asset_class.to_string(),
            change: format_signed_pct(i.percentage_change),
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => print_single(scenario, ctx.format)?,
        OutputFormat::Csv => print_output(&shocks, ctx.format)?,
        OutputFormat::Minimal => println!("{}", scenario.name),
        OutputFormat::Table | OutputFormat::Markdown => {
            let details = vec![
                KeyValue::new("ID", &scenario.id),
                KeyValue::new("Name", &scenario.name),
                KeyValue::new("Description", &scenario.description),
                KeyValue::new("Duration", &scenario.duration),
            ];
            print_section(&scenario.name, ctx.format);
            print_output(&details, ctx.format)?;
            print_section("Class Shocks", ctx.format);
            print_output(&shocks, ctx.format)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shockwave_portfolio::standard;

    #[test]
    fn test_row_picks_worst_shock() {
        let row = ScenarioRow::from(&standard::market_crash());
        assert_eq!(row.id, "market-crash");
        assert_eq!(row.shocks, 8);
        assert_eq!(row.worst_shock, "Cryptocurrency -60.00%");
    }

    #[test]
    fn test_row_without_shocks() {
        let row = ScenarioRow::from(&Scenario::new("empty", "Empty"));
        assert_eq!(row.shocks, 0);
        assert!(row.worst_shock.is_empty());
    }
}
