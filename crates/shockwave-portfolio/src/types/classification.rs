//! Closed taxonomies used to classify holdings.
//!
//! - [`AssetClass`]: the unit a scenario shock is applied to
//! - [`Industry`]: sector tag carried through to impact reports
//! - [`Region`]: geography tag used for allocation views
//!
//! All three serialize as their display label ("Real Estate",
//! "Middle East & Africa") and parse leniently from user input.

use crate::error::{PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lowercases a label and strips separators so "Real Estate",
/// "real_estate" and "REAL-ESTATE" compare equal.
fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-' | '&' | '/'))
        .flat_map(char::to_lowercase)
        .collect()
}

// =============================================================================
// ASSET CLASS
// =============================================================================

/// Coarse category of a holding.
///
/// # Examples
///
/// ```
/// use shockwave_portfolio::types::AssetClass;
///
/// let class: AssetClass = "real estate".parse().unwrap();
/// assert_eq!(class, AssetClass::RealEstate);
/// assert_eq!(class.to_string(), "Real Estate");
/// assert!(AssetClass::Cash.is_defensive());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum AssetClass {
    /// Listed equities
    Stocks,
    /// Fixed income
    Bonds,
    /// Direct or pooled property
    #[serde(rename = "Real Estate")]
    RealEstate,
    /// Cash and equivalents
    Cash,
    /// Unlisted company stakes
    #[serde(rename = "Private Equity")]
    PrivateEquity,
    /// Physical and synthetic commodities
    Commodities,
    /// Digital assets
    Cryptocurrency,
    /// Anything else (art, collectibles, ...)
    #[default]
    Other,
}

impl AssetClass {
    /// Returns all asset classes in canonical order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Stocks,
            Self::Bonds,
            Self::RealEstate,
            Self::Cash,
            Self::PrivateEquity,
            Self::Commodities,
            Self::Cryptocurrency,
            Self::Other,
        ]
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::Bonds => "Bonds",
            Self::RealEstate => "Real Estate",
            Self::Cash => "Cash",
            Self::PrivateEquity => "Private Equity",
            Self::Commodities => "Commodities",
            Self::Cryptocurrency => "Cryptocurrency",
            Self::Other => "Other",
        }
    }

    /// Returns true for capital-preserving classes.
    #[must_use]
    pub fn is_defensive(&self) -> bool {
        matches!(self, Self::Bonds | Self::Cash)
    }

    /// Returns true for classes outside traditional stocks/bonds/cash/property.
    #[must_use]
    pub fn is_alternative(&self) -> bool {
        matches!(
            self,
            Self::PrivateEquity | Self::Commodities | Self::Cryptocurrency | Self::Other
        )
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AssetClass {
    type Err = PortfolioError;

    fn from_str(s: &str) -> PortfolioResult<Self> {
        let key = normalize_label(s);
        Self::all()
            .iter()
            .copied()
            .find(|c| normalize_label(c.name()) == key)
            .ok_or_else(|| PortfolioError::unknown_category("asset class", s.trim()))
    }
}

// =============================================================================
// INDUSTRY
// =============================================================================

/// Industry sector tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Industry {
    /// Technology
    Technology,
    /// Banks, insurers, asset managers
    Finance,
    /// Healthcare and life sciences
    Healthcare,
    /// Oil, gas, renewables
    Energy,
    /// Consumer goods
    #[serde(rename = "Consumer Goods")]
    ConsumerGoods,
    /// Industrials
    Industrials,
    /// Utilities
    Utilities,
    /// Materials
    Materials,
    /// Telecommunications
    Telecommunications,
    /// Other or unclassified
    #[default]
    Other,
}

impl Industry {
    /// Returns all industries in canonical order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Technology,
            Self::Finance,
            Self::Healthcare,
            Self::Energy,
            Self::ConsumerGoods,
            Self::Industrials,
            Self::Utilities,
            Self::Materials,
            Self::Telecommunications,
            Self::Other,
        ]
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Energy => "Energy",
            Self::ConsumerGoods => "Consumer Goods",
            Self::Industrials => "Industrials",
            Self::Utilities => "Utilities",
            Self::Materials => "Materials",
            Self::Telecommunications => "Telecommunications",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Industry {
    type Err = PortfolioError;

    fn from_str(s: &str) -> PortfolioResult<Self> {
        let key = normalize_label(s);
        Self::all()
            .iter()
            .copied()
            .find(|i| normalize_label(i.name()) == key)
            .ok_or_else(|| PortfolioError::unknown_category("industry", s.trim()))
    }
}

// =============================================================================
// REGION
// =============================================================================

/// Geography tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Region {
    /// United States and Canada
    #[serde(rename = "North America")]
    NorthAmerica,
    /// Europe
    Europe,
    /// Asia Pacific
    #[serde(rename = "Asia Pacific")]
    AsiaPacific,
    /// Latin America
    #[serde(rename = "Latin America")]
    LatinAmerica,
    /// Middle East and Africa
    #[serde(rename = "Middle East & Africa")]
    MiddleEastAfrica,
    /// Not tied to one region
    #[default]
    Global,
}

impl Region {
    /// Returns all regions in canonical order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::NorthAmerica,
            Self::Europe,
            Self::AsiaPacific,
            Self::LatinAmerica,
            Self::MiddleEastAfrica,
            Self::Global,
        ]
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::AsiaPacific => "Asia Pacific",
            Self::LatinAmerica => "Latin America",
            Self::MiddleEastAfrica => "Middle East & Africa",
            Self::Global => "Global",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Region {
    type Err = PortfolioError;

    fn from_str(s: &str) -> PortfolioResult<Self> {
        let key = normalize_label(s);
        Self::all()
            .iter()
            .copied()
            .find(|r| normalize_label(r.name()) == key)
            .ok_or_else(|| PortfolioError::unknown_category("region", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_class_parse_variants() {
        assert_eq!("Stocks".parse::<AssetClass>().unwrap(), AssetClass::Stocks);
        assert_eq!(
            "Real Estate".parse::<AssetClass>().unwrap(),
            AssetClass::RealEstate
        );
        assert_eq!(
            "private_equity".parse::<AssetClass>().unwrap(),
            AssetClass::PrivateEquity
        );
        assert_eq!(
            " CRYPTOCURRENCY ".parse::<AssetClass>().unwrap(),
            AssetClass::Cryptocurrency
        );
    }

    #[test]
    fn test_asset_class_unknown() {
        let err = "Stamps".parse::<AssetClass>().unwrap_err();
        assert_eq!(err, PortfolioError::unknown_category("asset class", "Stamps"));
    }

    #[test]
    fn test_asset_class_groups() {
        assert!(AssetClass::Bonds.is_defensive());
        assert!(!AssetClass::Stocks.is_defensive());
        assert!(AssetClass::Cryptocurrency.is_alternative());
        assert!(!AssetClass::RealEstate.is_alternative());
        assert_eq!(AssetClass::all().len(), 8);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for class in AssetClass::all() {
            assert_eq!(class.to_string().parse::<AssetClass>().unwrap(), *class);
        }
        for industry in Industry::all() {
            assert_eq!(industry.to_string().parse::<Industry>().unwrap(), *industry);
        }
        for region in Region::all() {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), *region);
        }
    }

    #[test]
    fn test_region_with_ampersand() {
        assert_eq!(
            "Middle East & Africa".parse::<Region>().unwrap(),
            Region::MiddleEastAfrica
        );
        assert_eq!(
            "middle-east-africa".parse::<Region>().unwrap(),
            Region::MiddleEastAfrica
        );
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&AssetClass::RealEstate).unwrap();
        assert_eq!(json, "\"Real Estate\"");

        let region: Region = serde_json::from_str("\"Asia Pacific\"").unwrap();
        assert_eq!(region, Region::AsiaPacific);

        let industry: Industry = serde_json::from_str("\"Consumer Goods\"").unwrap();
        assert_eq!(industry, Industry::ConsumerGoods);
    }
}
