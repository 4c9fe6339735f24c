//! Scenario impact calculations.
//!
//! Applies a scenario's per-class percentage shocks to a portfolio and
//! aggregates the result at asset, class and portfolio level.

use super::scenarios::Scenario;
use crate::types::{AssetClass, Industry};
use crate::Holdings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight of overall volatility in the vulnerability score.
pub const VOLATILITY_WEIGHT: f64 = 0.4;

/// Weight of downside exposure in the vulnerability score.
pub const DOWNSIDE_WEIGHT: f64 = 0.6;

/// Impact on one asset class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassImpact {
    /// Aggregate value before the shock.
    pub original_value: f64,
    /// Aggregate value after the shock.
    pub impacted_value: f64,
    /// Impacted minus original.
    pub absolute_change: f64,
    /// Applied percentage (0 when the scenario leaves the class alone).
    pub percentage_change: f64,
}

/// Impact on one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetImpact {
    /// Asset identifier.
    pub id: String,
    /// Asset display name.
    pub name: String,
    /// Value before the shock.
    pub original_value: f64,
    /// Value after the shock.
    pub impacted_value: f64,
    /// Impacted minus original.
    pub absolute_change: f64,
    /// Applied percentage.
    pub percentage_change: f64,
    /// Asset class.
    pub asset_class: AssetClass,
    /// Industry sector.
    pub industry: Industry,
}

/// Complete result of applying one scenario to one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioImpact {
    /// Portfolio value before the shock.
    pub original_value: f64,

    /// Portfolio value after the shock.
    pub impacted_value: f64,

    /// Impacted minus original.
    pub absolute_change: f64,

    /// Absolute change as a percentage of the original value.
    pub percentage_change: f64,

    /// One entry per asset class present in the portfolio.
    pub asset_class_impacts: BTreeMap<AssetClass, ClassImpact>,

    /// One entry per asset, most negative change first.
    pub asset_impacts: Vec<AssetImpact>,

    /// 0.4 x |percentage change| + 0.6 x downside exposure, to 2 decimals.
    pub vulnerability_score: f64,
}

impl PortfolioImpact {
    /// Returns the all-zero report used for zero-value portfolios.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            original_value: 0.0,
            impacted_value: 0.0,
            absolute_change: 0.0,
            percentage_change: 0.0,
            asset_class_impacts: BTreeMap::new(),
            asset_impacts: Vec::new(),
            vulnerability_score: 0.0,
        }
    }

    /// Returns true if the portfolio loses value.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.absolute_change < 0.0
    }

    /// Returns true if the portfolio gains value.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.absolute_change > 0.0
    }

    /// Returns the impact for one class, if present in the portfolio.
    #[must_use]
    pub fn class_impact(&self, asset_class: AssetClass) -> Option<&ClassImpact> {
        self.asset_class_impacts.get(&asset_class)
    }

    /// Returns the impact for one asset by id.
    #[must_use]
    pub fn asset_impact(&self, id: &str) -> Option<&AssetImpact> {
        self.asset_impacts.iter().find(|a| a.id == id)
    }

    /// Iterates over assets that lose value, most negative first.
    pub fn losing_assets(&self) -> impl Iterator<Item = &AssetImpact> {
        self.asset_impacts
            .iter()
            .take_while(|a| a.absolute_change < 0.0)
    }

    /// Total value lost across negatively impacted assets.
    #[must_use]
    pub fn downside_value(&self) -> f64 {
        self.losing_assets().map(|a| a.absolute_change.abs()).sum()
    }
}

/// Computes the impact of a scenario on a portfolio.
///
/// Classes the scenario does not mention are left unchanged; scenario
/// classes absent from the portfolio are ignored. A zero-value portfolio
/// yields [`PortfolioImpact::zero`].
///
/// # Example
///
/// ```
/// use shockwave_portfolio::prelude::*;
///
/// let asset = |id: &str, class, value| {
///     Asset::builder()
///         .id(id)
///         .name(id)
///         .value(value)
///         .asset_class(class)
///         .industry(Industry::Other)
///         .region(Region::Global)
///         .build()
///         .unwrap()
/// };
///
/// let holdings = Holdings::builder("Jane")
///     .add_asset(asset("s", AssetClass::Stocks, 100.0))
///     .add_asset(asset("b", AssetClass::Bonds, 100.0))
///     .build()
///     .unwrap();
///
/// let scenario = Scenario::new("test", "Test")
///     .with_impact(AssetClass::Stocks, -50.0)
///     .with_impact(AssetClass::Bonds, 10.0);
///
/// let impact = compute_impact(&holdings, &scenario);
/// assert_eq!(impact.impacted_value, 160.0);
/// assert_eq!(impact.vulnerability_score, 23.0);
/// ```
#[must_use]
pub fn compute_impact(holdings: &Holdings, scenario: &Scenario) -> PortfolioImpact {
    let original_value = holdings.total_value();
    if original_value == 0.0 {
        return PortfolioImpact::zero();
    }

    let lookup = scenario.impact_lookup();
    let pct_for = |class: &AssetClass| lookup.get(class).copied().unwrap_or(0.0);

    // Seed one entry per class present
    let mut asset_class_impacts: BTreeMap<AssetClass, ClassImpact> = BTreeMap::new();
    for asset in holdings.assets() {
        asset_class_impacts
            .entry(asset.asset_class)
            .or_default()
            .original_value += asset.value;
    }

    for (class, impact) in &mut asset_class_impacts {
        let pct = pct_for(class);
        impact.absolute_change = impact.original_value * (pct / 100.0);
        impact.impacted_value = impact.original_value + impact.absolute_change;
        impact.percentage_change = pct;
    }

    let mut asset_impacts: Vec<AssetImpact> = holdings
        .assets()
        .iter()
        .map(|asset| {
            let pct = pct_for(&asset.asset_class);
            let absolute_change = asset.value * (pct / 100.0);
            AssetImpact {
                id: asset.id.clone(),
                name: asset.name.clone(),
                original_value: asset.value,
                impacted_value: asset.value + absolute_change,
                absolute_change,
                percentage_change: pct,
                asset_class: asset.asset_class,
                industry: asset.industry,
            }
        })
        .collect();

    // Stable: ties keep input order
    asset_impacts.sort_by(|a, b| {
        a.absolute_change
            .partial_cmp(&b.absolute_change)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let impacted_value: f64 = asset_class_impacts.values().map(|c| c.impacted_value).sum();
    let absolute_change = impacted_value - original_value;
    let percentage_change = absolute_change / original_value * 100.0;

    let downside: f64 = asset_impacts
        .iter()
        .filter(|a| a.absolute_change < 0.0)
        .map(|a| a.absolute_change.abs())
        .sum();
    let volatility = percentage_change.abs();
    let downside_exposure = downside / original_value * 100.0;
    let vulnerability_score =
        round2(VOLATILITY_WEIGHT * volatility + DOWNSIDE_WEIGHT * downside_exposure);

    PortfolioImpact {
        original_value,
        impacted_value,
        absolute_change,
        percentage_change,
        asset_class_impacts,
        asset_impacts,
        vulnerability_score,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One row of a multi-scenario comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    /// Scenario id.
    pub scenario_id: String,
    /// Scenario display name.
    pub scenario_name: String,
    /// Portfolio value before the shock.
    pub original_value: f64,
    /// Portfolio value after the shock.
    pub impacted_value: f64,
    /// Absolute change.
    pub absolute_change: f64,
    /// Percentage change.
    pub percentage_change: f64,
    /// Vulnerability score.
    pub vulnerability_score: f64,
}

impl ScenarioResult {
    fn from_impact(scenario: &Scenario, impact: &PortfolioImpact) -> Self {
        Self {
            scenario_id: scenario.id.clone(),
            scenario_name: scenario.name.clone(),
            original_value: impact.original_value,
            impacted_value: impact.impacted_value,
            absolute_change: impact.absolute_change,
            percentage_change: impact.percentage_change,
            vulnerability_score: impact.vulnerability_score,
        }
    }

    /// Returns true if this is a gain.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.absolute_change > 0.0
    }

    /// Returns true if this is a loss.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.absolute_change < 0.0
    }
}

/// Runs each scenario independently against the same portfolio.
#[must_use]
pub fn run_scenarios(holdings: &Holdings, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
    scenarios
        .iter()
        .map(|s| ScenarioResult::from_impact(s, &compute_impact(holdings, s)))
        .collect()
}

/// Returns the scenario with the largest loss (first on ties).
#[must_use]
pub fn worst_case(results: &[ScenarioResult]) -> Option<&ScenarioResult> {
    results.iter().reduce(|worst, r| {
        if r.absolute_change < worst.absolute_change {
            r
        } else {
            worst
        }
    })
}

/// Returns the scenario with the largest gain (first on ties).
#[must_use]
pub fn best_case(results: &[ScenarioResult]) -> Option<&ScenarioResult> {
    results.iter().reduce(|best, r| {
        if r.absolute_change > best.absolute_change {
            r
        } else {
            best
        }
    })
}

/// Summary across a set of scenario results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    /// Number of scenarios run.
    pub scenario_count: usize,

    /// Worst-case scenario id.
    pub worst_scenario: String,

    /// Worst-case absolute change.
    pub worst_change: f64,

    /// Worst-case percentage change.
    pub worst_change_pct: f64,

    /// Best-case scenario id.
    pub best_scenario: String,

    /// Best-case absolute change.
    pub best_change: f64,

    /// Best-case percentage change.
    pub best_change_pct: f64,

    /// Average percentage change.
    pub avg_change_pct: f64,

    /// Average vulnerability score.
    pub avg_vulnerability: f64,
}

/// Summarizes scenario results, `None` when there are none.
#[must_use]
pub fn summarize_results(results: &[ScenarioResult]) -> Option<ComparisonSummary> {
    let worst = worst_case(results)?;
    let best = best_case(results)?;

    let n = results.len() as f64;
    let avg_change_pct = results.iter().map(|r| r.percentage_change).sum::<f64>() / n;
    let avg_vulnerability = results.iter().map(|r| r.vulnerability_score).sum::<f64>() / n;

    Some(ComparisonSummary {
        scenario_count: results.len(),
        worst_scenario: worst.scenario_id.clone(),
        worst_change: worst.absolute_change,
        worst_change_pct: worst.percentage_change,
        best_scenario: best.scenario_id.clone(),
        best_change: best.absolute_change,
        best_change_pct: best.percentage_change,
        avg_change_pct,
        avg_vulnerability,
    })
}

/// Side-by-side results of several independent scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    /// One row per scenario, in input order.
    pub results: Vec<ScenarioResult>,
    /// Worst/best/average, absent when no scenarios were run.
    pub summary: Option<ComparisonSummary>,
}

/// Runs every scenario independently and summarizes the outcomes.
#[must_use]
pub fn compare_scenarios(holdings: &Holdings, scenarios: &[Scenario]) -> ScenarioComparison {
    let results = run_scenarios(holdings, scenarios);
    let summary = summarize_results(&results);
    ScenarioComparison { results, summary }
}
