//! Analyze command implementation.
//!
//! Applies one scenario to a holdings file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use shockwave_portfolio::report::format_signed_pct;
use shockwave_portfolio::{
    compute_impact, top_risk_contributors, AssetImpact, PortfolioImpact, RiskContribution,
};

use crate::cli::OutputFormat;
use crate::commands::{load_holdings, resolve_scenario, validate_count, Context};
use crate::output::{colored_pct, money, print_output, print_section, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Holdings CSV file
    pub portfolio: PathBuf,

    /// Scenario id (see `shockwave scenarios list`)
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Number of top risk contributors to show
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize, Tabled)]
struct ClassRow {
    #[tabled(rename = "Asset Class")]
    asset_class: String,
    #[tabled(rename = "Original")]
    original: String,
    #[tabled(rename = "Projected")]
    projected: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Change %")]
    change_pct: String,
}

impl ClassRow {
    fn rows(impact: &PortfolioImpact) -> Vec<Self> {
        impact
            .asset_class_impacts
            .iter()
            .map(|(class, c)| Self {
                asset_class: class.to_string(),
                original: money(c.original_value),
                projected: money(c.impacted_value),
                change: money(c.absolute_change),
                change_pct: format_signed_pct(c.percentage_change),
            })
            .collect()
    }
}

#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "Asset")]
    name: String,
    #[tabled(rename = "Class")]
    asset_class: String,
    #[tabled(rename = "Industry")]
    industry: String,
    #[tabled(rename = "Original")]
    original: String,
    #[tabled(rename = "Projected")]
    projected: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Change %")]
    change_pct: String,
}

impl From<&AssetImpact> for AssetRow {
    fn from(a: &AssetImpact) -> Self {
        Self {
            name: a.name.clone(),
            asset_class: a.asset_class.to_string(),
            industry: a.industry.to_string(),
            original: money(a.original_value),
            projected: money(a.impacted_value),
            change: money(a.absolute_change),
            change_pct: format_signed_pct(a.percentage_change),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct RiskRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Asset")]
    name: String,
    #[tabled(rename = "Class")]
    asset_class: String,
    #[tabled(rename = "Loss")]
    loss: String,
    #[tabled(rename = "Share of Downside")]
    share: String,
}

impl RiskRow {
    fn new(rank: usize, c: &RiskContribution) -> Self {
        Self {
            rank,
            name: c.name.clone(),
            asset_class: c.asset_class.to_string(),
            loss: money(c.absolute_change),
            share: format!("{:.1}%", c.share_of_downside_pct),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisOutput<'a> {
    owner: &'a str,
    scenario_id: &'a str,
    scenario_name: &'a str,
    impact: &'a PortfolioImpact,
    top_risk_contributors: &'a [RiskContribution],
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, ctx: &Context) -> Result<()> {
    let top = validate_count(args.top.unwrap_or_else(|| ctx.settings.top_assets()))?;
    let holdings = load_holdings(&args.portfolio)?;
    let scenario = resolve_scenario(ctx, args.scenario.as_deref())?;

    let impact = compute_impact(&holdings, scenario);
    let contributors = top_risk_contributors(&impact, top);
    info!(
        scenario = %scenario.id,
        change = impact.absolute_change,
        vulnerability = impact.vulnerability_score,
        "scenario applied"
    );

    match ctx.format {
        OutputFormat::Json => {
            let output = AnalysisOutput {
                owner: holdings.owner(),
                scenario_id: &scenario.id,
                scenario_name: &scenario.name,
                impact: &impact,
                top_risk_contributors: &contributors,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            let rows: Vec<AssetRow> = impact.asset_impacts.iter().map(AssetRow::from).collect();
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => {
            println!(
                "Change: {}, Projected: {}, Vulnerability: {:.2}",
                format_signed_pct(impact.percentage_change),
                money(impact.impacted_value),
                impact.vulnerability_score
            );
        }
        OutputFormat::Table | OutputFormat::Markdown => {
            let pct = if ctx.format == OutputFormat::Table {
                colored_pct(impact.percentage_change)
            } else {
                format_signed_pct(impact.percentage_change)
            };
            let summary = vec![
                KeyValue::new("Owner", holdings.owner()),
                KeyValue::new("Scenario", format!("{} ({})", scenario.name, scenario.id)),
                KeyValue::new("Assets", holdings.len().to_string()),
                KeyValue::money("Original Value", impact.original_value),
                KeyValue::money("Projected Value", impact.impacted_value),
                KeyValue::money("Absolute Change", impact.absolute_change),
                KeyValue::new("Net Change", pct),
                KeyValue::new(
                    "Vulnerability Score",
                    format!("{:.2}", impact.vulnerability_score),
                ),
            ];
            print_section("Impact Summary", ctx.format);
            print_output(&summary, ctx.format)?;

            print_section("Asset Class Breakdown", ctx.format);
            print_output(&ClassRow::rows(&impact), ctx.format)?;

            let assets: Vec<AssetRow> = impact.asset_impacts.iter().map(AssetRow::from).collect();
            print_section("Asset Impacts", ctx.format);
            print_output(&assets, ctx.format)?;

            if !contributors.is_empty() {
                let risks: Vec<RiskRow> = contributors
                    .iter()
                    .enumerate()
                    .map(|(i, c)| RiskRow::new(i + 1, c))
                    .collect();
                print_section("Top Risk Contributors", ctx.format);
                print_output(&risks, ctx.format)?;
            }
        }
    }

    Ok(())
}
