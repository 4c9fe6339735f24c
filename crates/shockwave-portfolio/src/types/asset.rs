//! Asset record and builder.

use super::{AssetClass, Industry, Region};
use crate::{PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};

/// Currency code assigned when none is supplied.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A single holding in a portfolio.
///
/// Values are expressed in the asset's own currency; no conversion is
/// performed anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Identifier, unique within a portfolio.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Monetary value (non-negative).
    pub value: f64,

    /// Asset class the scenario shocks are keyed by.
    pub asset_class: AssetClass,

    /// Industry sector.
    pub industry: Industry,

    /// Geography.
    pub region: Region,

    /// Optional ticker symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,

    /// ISO currency code.
    pub currency: String,
}

impl Asset {
    /// Creates a new asset builder.
    #[must_use]
    pub fn builder() -> AssetBuilder {
        AssetBuilder::new()
    }

    /// Checks the field rules every asset must satisfy.
    ///
    /// # Errors
    ///
    /// Returns an error if the id, name or currency is blank, or the value
    /// is negative or not finite.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.id.trim().is_empty() {
            return Err(PortfolioError::missing_field("id"));
        }

        if self.name.trim().is_empty() {
            return Err(PortfolioError::invalid_asset(&self.id, "name cannot be blank"));
        }

        if !self.value.is_finite() {
            return Err(PortfolioError::invalid_asset(&self.id, "value must be finite"));
        }

        if self.value < 0.0 {
            return Err(PortfolioError::invalid_asset(
                &self.id,
                "value cannot be negative",
            ));
        }

        if self.currency.trim().is_empty() {
            return Err(PortfolioError::invalid_asset(
                &self.id,
                "currency cannot be blank",
            ));
        }

        Ok(())
    }

    /// Returns the ticker, or the name when no ticker is set.
    #[must_use]
    pub fn label(&self) -> &str {
        self.ticker.as_deref().unwrap_or(&self.name)
    }
}

/// Builder for [`Asset`].
///
/// # Examples
///
/// ```
/// use shockwave_portfolio::types::{Asset, AssetClass, Industry, Region};
///
/// let asset = Asset::builder()
///     .id("asset-0")
///     .name("Tesla")
///     .value(120_000.0)
///     .asset_class(AssetClass::Stocks)
///     .industry(Industry::Technology)
///     .region(Region::NorthAmerica)
///     .ticker("TSLA")
///     .build()
///     .unwrap();
///
/// assert_eq!(asset.currency, "USD");
/// assert_eq!(asset.label(), "TSLA");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetBuilder {
    id: Option<String>,
    name: Option<String>,
    value: Option<f64>,
    asset_class: Option<AssetClass>,
    industry: Option<Industry>,
    region: Option<Region>,
    ticker: Option<String>,
    currency: Option<String>,
}

impl AssetBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the asset ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the monetary value.
    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the asset class.
    #[must_use]
    pub fn asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_class = Some(asset_class);
        self
    }

    /// Sets the industry.
    #[must_use]
    pub fn industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    /// Sets the region.
    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the ticker symbol.
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Sets the currency code (defaults to USD).
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Builds the asset.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, the value is
    /// negative or not finite, or a text field is blank.
    pub fn build(self) -> PortfolioResult<Asset> {
        let id = self.id.ok_or_else(|| PortfolioError::missing_field("id"))?;
        let name = self
            .name
            .ok_or_else(|| PortfolioError::missing_field("name"))?;
        let value = self
            .value
            .ok_or_else(|| PortfolioError::missing_field("value"))?;
        let asset_class = self
            .asset_class
            .ok_or_else(|| PortfolioError::missing_field("asset_class"))?;
        let industry = self
            .industry
            .ok_or_else(|| PortfolioError::missing_field("industry"))?;
        let region = self
            .region
            .ok_or_else(|| PortfolioError::missing_field("region"))?;

        let currency = self
            .currency
            .map_or_else(|| DEFAULT_CURRENCY.to_string(), |c| c.trim().to_uppercase());

        let ticker = self
            .ticker
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let asset = Asset {
            id,
            name,
            value,
            asset_class,
            industry,
            region,
            ticker,
            currency,
        };
        asset.validate()?;
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AssetBuilder {
        Asset::builder()
            .id("asset-0")
            .name("US Treasury Bonds")
            .value(2_000.0)
            .asset_class(AssetClass::Bonds)
            .industry(Industry::Finance)
            .region(Region::NorthAmerica)
    }

    #[test]
    fn test_build_defaults() {
        let asset = base().build().unwrap();
        assert_eq!(asset.currency, DEFAULT_CURRENCY);
        assert!(asset.ticker.is_none());
        assert_eq!(asset.label(), "US Treasury Bonds");
    }

    #[test]
    fn test_missing_field() {
        let err = Asset::builder().id("x").build().unwrap_err();
        assert_eq!(err, PortfolioError::missing_field("name"));
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = base().value(-1.0).build().unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidAsset { .. }));
    }

    #[test]
    fn test_nan_value_rejected() {
        assert!(base().value(f64::NAN).build().is_err());
        assert!(base().value(f64::INFINITY).build().is_err());
    }

    #[test]
    fn test_zero_value_allowed() {
        let asset = base().value(0.0).build().unwrap();
        assert_eq!(asset.value, 0.0);
    }

    #[test]
    fn test_blank_ticker_dropped_and_currency_normalized() {
        let asset = base().ticker("  ").currency(" eur ").build().unwrap();
        assert!(asset.ticker.is_none());
        assert_eq!(asset.currency, "EUR");
    }

    #[test]
    fn test_blank_currency_rejected() {
        let err = base().currency("  ").build().unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidAsset { .. }));
    }

    #[test]
    fn test_validate_struct_literal() {
        let mut asset = base().build().unwrap();
        assert!(asset.validate().is_ok());

        asset.value = -5.0;
        assert!(matches!(
            asset.validate(),
            Err(PortfolioError::InvalidAsset { .. })
        ));

        asset.value = 5.0;
        asset.name = " ".to_string();
        assert!(asset.validate().is_err());
    }

    #[test]
    fn test_serde_camel_case() {
        let asset = base().ticker("UST").build().unwrap();
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["assetClass"], "Bonds");
        assert_eq!(json["region"], "North America");
        assert_eq!(json["ticker"], "UST");
    }
}
