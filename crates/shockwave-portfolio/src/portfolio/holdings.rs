//! Holdings struct and core methods.

use crate::types::Asset;
use crate::{PortfolioError, PortfolioResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An individual's asset holdings.
///
/// The total value is computed once at construction from the assets and
/// cannot be set independently. Holdings are immutable: a re-upload
/// replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "HoldingsData")]
pub struct Holdings {
    owner: String,
    assets: Vec<Asset>,
    total_value: f64,
    last_updated: DateTime<Utc>,
}

/// Wire form of [`Holdings`]; any serialized total is ignored and recomputed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoldingsData {
    owner: String,
    assets: Vec<Asset>,
    last_updated: DateTime<Utc>,
}

impl TryFrom<HoldingsData> for Holdings {
    type Error = PortfolioError;

    fn try_from(data: HoldingsData) -> PortfolioResult<Self> {
        Self::new(data.owner, data.assets, data.last_updated)
    }
}

impl Holdings {
    /// Creates holdings from a list of assets.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::DuplicateAsset`] if two assets share an id,
    /// or the first error from [`Asset::validate`].
    pub fn new(
        owner: impl Into<String>,
        assets: Vec<Asset>,
        last_updated: DateTime<Utc>,
    ) -> PortfolioResult<Self> {
        let mut seen = HashSet::with_capacity(assets.len());
        for asset in &assets {
            asset.validate()?;
            if !seen.insert(asset.id.as_str()) {
                return Err(PortfolioError::DuplicateAsset {
                    id: asset.id.clone(),
                });
            }
        }

        let total_value = assets.iter().map(|a| a.value).sum();

        Ok(Self {
            owner: owner.into(),
            assets,
            total_value,
            last_updated,
        })
    }

    /// Creates a new holdings builder.
    #[must_use]
    pub fn builder(owner: impl Into<String>) -> super::HoldingsBuilder {
        super::HoldingsBuilder::new().owner(owner)
    }

    /// Returns the owner's name.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the assets in input order.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Returns the sum of all asset values.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Returns when the holdings were captured.
    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Returns the number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if there are no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Looks up an asset by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Returns the `n` largest assets by value, ties in input order.
    #[must_use]
    pub fn top_holdings(&self, n: usize) -> Vec<&Asset> {
        let mut sorted: Vec<&Asset> = self.assets.iter().collect();
        sorted.sort_by(|a, b| b.value.total_cmp(&a.value));
        sorted.truncate(n);
        sorted
    }

    /// Returns assets filtered by a predicate.
    pub fn filter_assets<F>(&self, predicate: F) -> Vec<&Asset>
    where
        F: Fn(&Asset) -> bool,
    {
        self.assets.iter().filter(|a| predicate(a)).collect()
    }
}
