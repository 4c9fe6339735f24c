//! Holdings builder for fluent construction.

use crate::types::Asset;
use crate::{Holdings, PortfolioError, PortfolioResult};
use chrono::{DateTime, Utc};

/// Builder for constructing [`Holdings`].
///
/// # Example
///
/// ```
/// use shockwave_portfolio::prelude::*;
///
/// let stock = Asset::builder()
///     .id("asset-0")
///     .name("Index Fund")
///     .value(100.0)
///     .asset_class(AssetClass::Stocks)
///     .industry(Industry::Other)
///     .region(Region::Global)
///     .build()
///     .unwrap();
///
/// let holdings = HoldingsBuilder::new()
///     .owner("Jane Doe")
///     .add_asset(stock)
///     .build()
///     .unwrap();
///
/// assert_eq!(holdings.total_value(), 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HoldingsBuilder {
    owner: Option<String>,
    assets: Vec<Asset>,
    last_updated: Option<DateTime<Utc>>,
}

impl HoldingsBuilder {
    /// Creates a new holdings builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the owner's name.
    #[must_use]
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Adds an asset.
    #[must_use]
    pub fn add_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    /// Adds multiple assets.
    #[must_use]
    pub fn add_assets(mut self, assets: impl IntoIterator<Item = Asset>) -> Self {
        self.assets.extend(assets);
        self
    }

    /// Sets the capture timestamp (defaults to now).
    #[must_use]
    pub fn last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }

    /// Builds the holdings.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner is missing or asset ids collide.
    pub fn build(self) -> PortfolioResult<Holdings> {
        let owner = self
            .owner
            .ok_or_else(|| PortfolioError::missing_field("owner"))?;

        Holdings::new(
            owner,
            self.assets,
            self.last_updated.unwrap_or_else(Utc::now),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssetClass, Industry, Region};
    use chrono::TimeZone;

    fn cash(id: &str, value: f64) -> Asset {
        Asset::builder()
            .id(id)
            .name("Cash")
            .value(value)
            .asset_class(AssetClass::Cash)
            .industry(Industry::Finance)
            .region(Region::Global)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_basic() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        let holdings = HoldingsBuilder::new()
            .owner("Jane")
            .add_asset(cash("a", 10.0))
            .add_assets(vec![cash("b", 5.0), cash("c", 2.5)])
            .last_updated(at)
            .build()
            .unwrap();

        assert_eq!(holdings.len(), 3);
        assert_eq!(holdings.total_value(), 17.5);
        assert_eq!(holdings.last_updated(), at);
    }

    #[test]
    fn test_builder_missing_owner() {
        let err = HoldingsBuilder::new().build().unwrap_err();
        assert_eq!(err, PortfolioError::missing_field("owner"));
    }

    #[test]
    fn test_holdings_builder_shortcut() {
        let holdings = Holdings::builder("Jane").build().unwrap();
        assert!(holdings.is_empty());
    }
}
