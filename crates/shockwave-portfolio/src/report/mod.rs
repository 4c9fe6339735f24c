//! Printable scenario impact reports.
//!
//! An [`ImpactReport`] bundles a portfolio summary, the scenario and its
//! computed impact, and renders them as Markdown or plain text.

mod format;

pub use format::{format_compact, format_currency, format_signed_pct};

use crate::bucketing::{bucket_by_asset_class, Allocation};
use crate::contribution::{most_impacted_assets, top_risk_contributors, RiskContribution};
use crate::stress::{compute_impact, AssetImpact, PortfolioImpact, Scenario};
use crate::types::{AnalysisConfig, AssetClass};
use crate::Holdings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const RULE_WIDTH: usize = 78;

/// A self-contained impact report for one portfolio and one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,

    /// Portfolio owner.
    pub owner: String,

    /// Portfolio total value.
    pub total_value: f64,

    /// When the holdings were captured.
    pub last_updated: DateTime<Utc>,

    /// Number of assets.
    pub asset_count: usize,

    /// The applied scenario.
    pub scenario: Scenario,

    /// Full impact result.
    pub impact: PortfolioImpact,

    /// Largest movers by |absolute change|.
    pub most_impacted: Vec<AssetImpact>,

    /// Losing assets, most negative first.
    #[serde(default)]
    pub top_risk: Vec<RiskContribution>,

    /// Composition by asset class before the shock.
    pub composition: Allocation<AssetClass>,
}

impl ImpactReport {
    /// Computes the impact and assembles a report.
    #[must_use]
    pub fn new(holdings: &Holdings, scenario: &Scenario, config: &AnalysisConfig) -> Self {
        let impact = compute_impact(holdings, scenario);
        Self::from_impact(holdings, scenario, impact, config)
    }

    /// Assembles a report from an already computed impact.
    #[must_use]
    pub fn from_impact(
        holdings: &Holdings,
        scenario: &Scenario,
        impact: PortfolioImpact,
        config: &AnalysisConfig,
    ) -> Self {
        let most_impacted = most_impacted_assets(&impact, config.most_impacted_count)
            .into_iter()
            .cloned()
            .collect();
        let top_risk = top_risk_contributors(&impact, config.top_risk_count);

        Self {
            generated_at: Utc::now(),
            owner: holdings.owner().to_string(),
            total_value: holdings.total_value(),
            last_updated: holdings.last_updated(),
            asset_count: holdings.len(),
            scenario: scenario.clone(),
            impact,
            most_impacted,
            top_risk,
            composition: bucket_by_asset_class(holdings),
        }
    }

    /// Overrides the generation timestamp.
    #[must_use]
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    /// Suggested file name, e.g. `market-crash-impact-2025-01-15.md`.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "{}-impact-{}.{extension}",
            self.scenario.id,
            self.generated_at.format("%Y-%m-%d")
        )
    }

    /// Format as Markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        let impact = &self.impact;

        output.push_str("# Scenario Impact Report\n\n");
        output.push_str(&format!(
            "**Generated:** {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        output.push_str("## Portfolio Summary\n\n");
        output.push_str(&format!("- **Owner:** {}\n", escape_md(&self.owner)));
        output.push_str(&format!(
            "- **Total Value:** {}\n",
            format_currency(self.total_value)
        ));
        output.push_str(&format!(
            "- **Last Updated:** {}\n",
            self.last_updated.format("%Y-%m-%d")
        ));
        output.push_str(&format!("- **Assets:** {}\n\n", self.asset_count));

        output.push_str(&format!(
            "## Scenario: {}\n\n",
            escape_md(&self.scenario.name)
        ));
        if !self.scenario.description.is_empty() {
            output.push_str(&format!("{}\n\n", escape_md(&self.scenario.description)));
        }
        if !self.scenario.duration.is_empty() {
            output.push_str(&format!(
                "**Duration:** {}\n\n",
                escape_md(&self.scenario.duration)
            ));
        }

        output.push_str("## Impact Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Original Value | {} |\n",
            format_currency(impact.original_value)
        ));
        output.push_str(&format!(
            "| Projected Value | {} |\n",
            format_currency(impact.impacted_value)
        ));
        output.push_str(&format!(
            "| Net Change | {} |\n",
            format_signed_pct(impact.percentage_change)
        ));
        output.push_str(&format!(
            "| Absolute Change | {} |\n",
            format_currency(impact.absolute_change)
        ));
        output.push_str(&format!(
            "| Vulnerability Score | {:.2} |\n\n",
            impact.vulnerability_score
        ));

        if !impact.asset_class_impacts.is_empty() {
            output.push_str("## Impact by Asset Class\n\n");
            output.push_str("| Asset Class | Original Value | New Value | Change |\n");
            output.push_str("|-------------|----------------|-----------|--------|\n");
            for (class, ci) in &impact.asset_class_impacts {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    class,
                    format_currency(ci.original_value),
                    format_currency(ci.impacted_value),
                    format_signed_pct(ci.percentage_change)
                ));
            }
            output.push('\n');
        }

        if !self.most_impacted.is_empty() {
            output.push_str("## Most Impacted Assets\n\n");
            output.push_str(
                "| Asset | Asset Class | Original Value | New Value | Change | Change % |\n",
            );
            output.push_str(
                "|-------|-------------|----------------|-----------|--------|----------|\n",
            );
            for a in &self.most_impacted {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    escape_md(&a.name),
                    a.asset_class,
                    format_currency(a.original_value),
                    format_currency(a.impacted_value),
                    format_currency(a.absolute_change),
                    format_signed_pct(a.percentage_change)
                ));
            }
            output.push('\n');
        }

        if !self.top_risk.is_empty() {
            output.push_str("## Top Risk Contributors\n\n");
            output.push_str("| Asset | Asset Class | Loss | Share of Losses |\n");
            output.push_str("|-------|-------------|------|-----------------|\n");
            for c in &self.top_risk {
                output.push_str(&format!(
                    "| {} | {} | {} | {:.2}% |\n",
                    escape_md(&c.name),
                    c.asset_class,
                    format_currency(c.absolute_change),
                    c.share_of_downside_pct
                ));
            }
            output.push('\n');
        }

        if !self.composition.buckets.is_empty() {
            output.push_str("## Portfolio Composition\n\n");
            output.push_str("| Asset Class | Value | Weight |\n");
            output.push_str("|-------------|-------|--------|\n");
            for (class, m) in self.composition.sorted_by_value() {
                output.push_str(&format!(
                    "| {} | {} | {:.2}% |\n",
                    class,
                    format_currency(m.value),
                    m.weight_pct
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Format as plain text for terminal display.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        let impact = &self.impact;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        output.push_str("SCENARIO IMPACT REPORT\n");
        output.push_str(&format!(
            "Generated: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&heavy);
        output.push('\n');

        output.push_str("\nPortfolio Summary:\n");
        output.push_str(&format!("  Owner:           {}\n", self.owner));
        output.push_str(&format!(
            "  Total Value:     {}\n",
            format_currency(self.total_value)
        ));
        output.push_str(&format!(
            "  Last Updated:    {}\n",
            self.last_updated.format("%Y-%m-%d")
        ));
        output.push_str(&format!("  Assets:          {}\n", self.asset_count));

        output.push_str(&format!("\nScenario: {}\n", self.scenario.name));
        if !self.scenario.description.is_empty() {
            output.push_str(&format!("  {}\n", self.scenario.description));
        }
        if !self.scenario.duration.is_empty() {
            output.push_str(&format!("  Duration: {}\n", self.scenario.duration));
        }

        output.push_str("\nImpact Summary:\n");
        output.push_str(&light);
        output.push('\n');
        output.push_str(&format!(
            "  Original Value:      {}\n",
            format_currency(impact.original_value)
        ));
        output.push_str(&format!(
            "  Projected Value:     {}\n",
            format_currency(impact.impacted_value)
        ));
        output.push_str(&format!(
            "  Net Change:          {}\n",
            format_signed_pct(impact.percentage_change)
        ));
        output.push_str(&format!(
            "  Absolute Change:     {}\n",
            format_currency(impact.absolute_change)
        ));
        output.push_str(&format!(
            "  Vulnerability Score: {:.2}\n",
            impact.vulnerability_score
        ));

        if !impact.asset_class_impacts.is_empty() {
            output.push_str("\nImpact by Asset Class:\n");
            output.push_str(&light);
            output.push('\n');
            output.push_str(&format!(
                "{:<16} {:>20} {:>20} {:>10}\n",
                "Asset Class", "Original", "New Value", "Change"
            ));
            for (class, ci) in &impact.asset_class_impacts {
                output.push_str(&format!(
                    "{:<16} {:>20} {:>20} {:>10}\n",
                    class.name(),
                    format_currency(ci.original_value),
                    format_currency(ci.impacted_value),
                    format_signed_pct(ci.percentage_change)
                ));
            }
        }

        if !self.most_impacted.is_empty() {
            output.push_str("\nMost Impacted Assets:\n");
            output.push_str(&light);
            output.push('\n');
            output.push_str(&format!(
                "{:<24} {:<16} {:>20} {:>20} {:>10}\n",
                "Asset", "Asset Class", "New Value", "Change", "Change %"
            ));
            for a in &self.most_impacted {
                output.push_str(&format!(
                    "{:<24} {:<16} {:>20} {:>20} {:>10}\n",
                    truncate(&a.name, 24),
                    a.asset_class.name(),
                    format_currency(a.impacted_value),
                    format_currency(a.absolute_change),
                    format_signed_pct(a.percentage_change)
                ));
            }
        }

        if !self.top_risk.is_empty() {
            output.push_str("\nTop Risk Contributors:\n");
            output.push_str(&light);
            output.push('\n');
            output.push_str(&format!(
                "{:<24} {:<16} {:>20} {:>16}\n",
                "Asset", "Asset Class", "Loss", "Share of Losses"
            ));
            for c in &self.top_risk {
                output.push_str(&format!(
                    "{:<24} {:<16} {:>20} {:>15.2}%\n",
                    truncate(&c.name, 24),
                    c.asset_class.name(),
                    format_currency(c.absolute_change),
                    c.share_of_downside_pct
                ));
            }
        }

        if !self.composition.buckets.is_empty() {
            output.push_str("\nPortfolio Composition:\n");
            output.push_str(&light);
            output.push('\n');
            for (class, m) in self.composition.sorted_by_value() {
                output.push_str(&format!(
                    "{:<16} {:>20} {:>9.2}%\n",
                    class.name(),
                    format_currency(m.value),
                    m.weight_pct
                ));
            }
        }

        output.push_str(&heavy);
        output.push('\n');
        output
    }
}

/// Escapes characters that would break a Markdown table cell.
fn escape_md(s: &str) -> String {
    s.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(width.saturating_sub(3)).collect();
        t.push_str("...");
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stress::standard;
    use crate::types::{Asset, Industry, Region};
    use chrono::TimeZone;

    fn holdings() -> Holdings {
        let asset = |id: &str, name: &str, class, value| {
            Asset::builder()
                .id(id)
                .name(name)
                .value(value)
                .asset_class(class)
                .industry(Industry::Technology)
                .region(Region::NorthAmerica)
                .build()
                .unwrap()
        };
        Holdings::builder("Jane Doe")
            .add_asset(asset("a", "Index Fund", AssetClass::Stocks, 1_000_000.0))
            .add_asset(asset("b", "Treasuries", AssetClass::Bonds, 500_000.0))
            .add_asset(asset("c", "Bitcoin", AssetClass::Cryptocurrency, 100_000.0))
            .last_updated(Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap())
            .build()
            .unwrap()
    }

    fn report() -> ImpactReport {
        ImpactReport::new(
            &holdings(),
            &standard::market_crash(),
            &AnalysisConfig::default(),
        )
        .with_generated_at(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_markdown_sections() {
        let md = report().to_markdown();

        assert!(md.starts_with("# Scenario Impact Report"));
        assert!(md.contains("**Generated:** 2025-01-15 12:00 UTC"));
        assert!(md.contains("- **Owner:** Jane Doe"));
        assert!(md.contains("- **Total Value:** $1,600,000"));
        assert!(md.contains("- **Last Updated:** 2025-01-10"));
        assert!(md.contains("## Scenario: Market Crash"));
        assert!(md.contains("**Duration:** 6-12 months"));
        // -350k + 25k - 60k = -385k on 1.6M
        assert!(md.contains("| Net Change | -24.06% |"));
        assert!(md.contains("| Absolute Change | -$385,000 |"));
        assert!(md.contains("| Stocks | $1,000,000 | $650,000 | -35.00% |"));
        assert!(md.contains("## Most Impacted Assets"));
        assert!(md.contains("| Index Fund | Stocks | $1,000,000 | $650,000 | -$350,000 | -35.00% |"));
        assert!(md.contains("## Portfolio Composition"));
    }

    #[test]
    fn test_top_risk_contributors_section() {
        let r = report();
        let names: Vec<&str> = r.top_risk.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Index Fund", "Bitcoin"]);

        // 350k and 60k of 410k total losses
        let md = r.to_markdown();
        assert!(md.contains("## Top Risk Contributors"));
        assert!(md.contains("| Index Fund | Stocks | -$350,000 | 85.37% |"));
        assert!(md.contains("| Bitcoin | Cryptocurrency | -$60,000 | 14.63% |"));
        assert!(!md.contains("| Treasuries | Bonds | $25,000"));

        let text = r.to_text();
        assert!(text.contains("Top Risk Contributors:"));
        assert!(text.contains("85.37%"));
    }

    #[test]
    fn test_top_risk_respects_config() {
        let config = AnalysisConfig::new().with_top_risk_count(1);
        let r = ImpactReport::new(&holdings(), &standard::market_crash(), &config);
        assert_eq!(r.top_risk.len(), 1);
        assert_eq!(r.top_risk[0].name, "Index Fund");

        let rally = Scenario::new("rally", "Rally").with_impact(AssetClass::Stocks, 10.0);
        let r = ImpactReport::new(&holdings(), &rally, &AnalysisConfig::default());
        assert!(r.top_risk.is_empty());
        assert!(!r.to_markdown().contains("## Top Risk Contributors"));
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let asset = Asset::builder()
            .id("f")
            .name("Fund | A")
            .value(100.0)
            .asset_class(AssetClass::RealEstate)
            .industry(Industry::Other)
            .region(Region::Europe)
            .build()
            .unwrap();
        let holdings = Holdings::builder("Smith | Jones")
            .add_asset(asset)
            .build()
            .unwrap();
        let scenario = Scenario::new("slump", "Slump | Severe")
            .with_description("Rents fall\nprices | follow")
            .with_impact(AssetClass::RealEstate, -20.0);

        let md = ImpactReport::new(&holdings, &scenario, &AnalysisConfig::default()).to_markdown();
        assert!(md.contains("- **Owner:** Smith \\| Jones"));
        assert!(md.contains("## Scenario: Slump \\| Severe"));
        assert!(md.contains("Rents fall prices \\| follow"));
        assert!(md.contains("| Fund \\| A | Real Estate | $100 | $80 | -$20 | -20.00% |"));
        assert!(!md.contains("Fund | A"));
    }

    #[test]
    fn test_text_shows_new_value() {
        let text = report().to_text();
        assert!(text.contains("$650,000"));
        assert!(text.contains("New Value"));
    }

    #[test]
    fn test_most_impacted_order() {
        let r = report();
        let names: Vec<&str> = r.most_impacted.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Index Fund", "Bitcoin", "Treasuries"]);
    }

    #[test]
    fn test_most_impacted_respects_config() {
        let config = AnalysisConfig::new().with_most_impacted_count(1);
        let r = ImpactReport::new(&holdings(), &standard::market_crash(), &config);
        assert_eq!(r.most_impacted.len(), 1);
    }

    #[test]
    fn test_text_rendering() {
        let text = report().to_text();
        assert!(text.starts_with("SCENARIO IMPACT REPORT"));
        assert!(text.contains("Owner:           Jane Doe"));
        assert!(text.contains("Vulnerability Score:"));
        assert!(text.contains("Cryptocurrency"));
    }

    #[test]
    fn test_empty_portfolio_report() {
        let empty = Holdings::builder("Nobody").build().unwrap();
        let r = ImpactReport::new(&empty, &standard::rate_hike(), &AnalysisConfig::default());
        let md = r.to_markdown();
        assert!(md.contains("| Net Change | +0.00% |"));
        assert!(!md.contains("## Most Impacted Assets"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(report().file_name("md"), "market-crash-impact-2025-01-15.md");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long asset name", 10), "a very ...");
    }
}
