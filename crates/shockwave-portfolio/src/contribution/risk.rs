//! Loss attribution by asset.

use crate::stress::{AssetImpact, PortfolioImpact};
use crate::types::AssetClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An asset's contribution to a scenario's losses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskContribution {
    /// Asset identifier.
    pub id: String,

    /// Asset display name.
    pub name: String,

    /// Asset class.
    pub asset_class: AssetClass,

    /// Value before the shock.
    pub original_value: f64,

    /// Absolute change (negative).
    pub absolute_change: f64,

    /// Applied percentage.
    pub percentage_change: f64,

    /// Share of total downside across all losing assets (0-100).
    pub share_of_downside_pct: f64,
}

/// Aggregated losses for one asset class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLoss {
    /// Number of losing assets.
    pub count: usize,

    /// Sum of losses (negative).
    pub absolute_change: f64,

    /// Share of total downside (0-100).
    pub share_of_downside_pct: f64,
}

/// Returns up to `n` assets with a negative change, most negative first.
#[must_use]
pub fn top_risk_contributors(impact: &PortfolioImpact, n: usize) -> Vec<RiskContribution> {
    let downside = impact.downside_value();

    impact
        .losing_assets()
        .take(n)
        .map(|a| RiskContribution {
            id: a.id.clone(),
            name: a.name.clone(),
            asset_class: a.asset_class,
            original_value: a.original_value,
            absolute_change: a.absolute_change,
            percentage_change: a.percentage_change,
            share_of_downside_pct: share(a.absolute_change, downside),
        })
        .collect()
}

/// Returns up to `n` assets by descending |absolute change|.
///
/// Ties keep the report's order.
#[must_use]
pub fn most_impacted_assets(impact: &PortfolioImpact, n: usize) -> Vec<&AssetImpact> {
    let mut sorted: Vec<&AssetImpact> = impact.asset_impacts.iter().collect();
    sorted.sort_by(|a, b| {
        b.absolute_change
            .abs()
            .partial_cmp(&a.absolute_change.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Groups losses by asset class.
#[must_use]
pub fn losses_by_class(impact: &PortfolioImpact) -> BTreeMap<AssetClass, ClassLoss> {
    let downside = impact.downside_value();
    let mut by_class: BTreeMap<AssetClass, ClassLoss> = BTreeMap::new();

    for asset in impact.losing_assets() {
        let entry = by_class.entry(asset.asset_class).or_default();
        entry.count += 1;
        entry.absolute_change += asset.absolute_change;
    }
    for loss in by_class.values_mut() {
        loss.share_of_downside_pct = share(loss.absolute_change, downside);
    }

    by_class
}

fn share(change: f64, downside: f64) -> f64 {
    if downside > 0.0 {
        change.abs() / downside * 100.0
    } else {
        0.0
    }
}
