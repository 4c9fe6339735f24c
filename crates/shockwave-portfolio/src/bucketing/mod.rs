//! Portfolio composition bucketing.
//!
//! Groups assets by asset class, industry or region and reports count,
//! value and weight per bucket.

use crate::types::{Asset, AssetClass, Industry, Region};
use crate::Holdings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated metrics for a bucket of assets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketMetrics {
    /// Number of assets in this bucket.
    pub count: usize,

    /// Total value.
    pub value: f64,

    /// Weight as percentage of total (0-100).
    pub weight_pct: f64,
}

impl BucketMetrics {
    /// Returns true if this bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Distribution of a portfolio over one classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation<K: Ord> {
    /// Metrics by bucket key, in key order.
    pub buckets: BTreeMap<K, BucketMetrics>,

    /// Total portfolio value.
    pub total_value: f64,
}

impl<K: Ord> Default for Allocation<K> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
            total_value: 0.0,
        }
    }
}

impl<K: Ord + Copy> Allocation<K> {
    /// Returns metrics for a specific bucket.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&BucketMetrics> {
        self.buckets.get(&key)
    }

    /// Returns the weight of a bucket, 0 when absent.
    #[must_use]
    pub fn weight(&self, key: K) -> f64 {
        self.get(key).map_or(0.0, |m| m.weight_pct)
    }

    /// Number of distinct buckets present.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns all buckets sorted by value descending, ties in key order.
    #[must_use]
    pub fn sorted_by_value(&self) -> Vec<(K, &BucketMetrics)> {
        let mut result: Vec<_> = self.buckets.iter().map(|(k, m)| (*k, m)).collect();
        result.sort_by(|a, b| {
            b.1.value
                .partial_cmp(&a.1.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        result
    }
}

impl Allocation<AssetClass> {
    /// Combined weight of Bonds and Cash.
    #[must_use]
    pub fn defensive_weight(&self) -> f64 {
        self.buckets
            .iter()
            .filter(|(class, _)| class.is_defensive())
            .map(|(_, m)| m.weight_pct)
            .sum()
    }

    /// Combined weight of alternative classes.
    #[must_use]
    pub fn alternative_weight(&self) -> f64 {
        self.buckets
            .iter()
            .filter(|(class, _)| class.is_alternative())
            .map(|(_, m)| m.weight_pct)
            .sum()
    }
}

fn bucket_by<K, F>(holdings: &Holdings, key: F) -> Allocation<K>
where
    K: Ord + Copy,
    F: Fn(&Asset) -> K,
{
    let total_value = holdings.total_value();
    let mut buckets: BTreeMap<K, BucketMetrics> = BTreeMap::new();

    for asset in holdings.assets() {
        let metrics = buckets.entry(key(asset)).or_default();
        metrics.count += 1;
        metrics.value += asset.value;
    }

    if total_value > 0.0 {
        for metrics in buckets.values_mut() {
            metrics.weight_pct = metrics.value / total_value * 100.0;
        }
    }

    Allocation {
        buckets,
        total_value,
    }
}

/// Buckets assets by asset class.
#[must_use]
pub fn bucket_by_asset_class(holdings: &Holdings) -> Allocation<AssetClass> {
    bucket_by(holdings, |a| a.asset_class)
}

/// Buckets assets by industry.
#[must_use]
pub fn bucket_by_industry(holdings: &Holdings) -> Allocation<Industry> {
    bucket_by(holdings, |a| a.industry)
}

/// Buckets assets by region.
#[must_use]
pub fn bucket_by_region(holdings: &Holdings) -> Allocation<Region> {
    bucket_by(holdings, |a| a.region)
}
