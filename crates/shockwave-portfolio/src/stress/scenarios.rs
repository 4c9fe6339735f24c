//! Scenario definitions and the scenario catalog.
//!
//! A scenario is a named market event expressed as a percentage shock per
//! asset class. Classes a scenario does not mention are left unaffected.

use crate::types::AssetClass;
use crate::{PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A percentage shock applied to one asset class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioImpact {
    /// The shocked asset class.
    pub asset_class: AssetClass,
    /// Percentage change (e.g., -35.0 = value falls by 35%).
    pub percentage_change: f64,
}

impl ScenarioImpact {
    /// Creates a new class shock.
    #[must_use]
    pub fn new(asset_class: AssetClass, percentage_change: f64) -> Self {
        Self {
            asset_class,
            percentage_change,
        }
    }
}

/// A named hypothetical market scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Identifier, unique within a catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Description.
    #[serde(default)]
    pub description: String,

    /// Duration label (e.g., "6-12 months").
    #[serde(default)]
    pub duration: String,

    /// Class shocks in definition order.
    #[serde(default)]
    pub impacts: Vec<ScenarioImpact>,
}

impl Scenario {
    /// Creates a scenario with no shocks.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            duration: String::new(),
            impacts: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Sets the duration label.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Appends a class shock.
    #[must_use]
    pub fn with_impact(mut self, asset_class: AssetClass, percentage_change: f64) -> Self {
        self.impacts.push(ScenarioImpact::new(asset_class, percentage_change));
        self
    }

    /// Builds the class to percentage lookup.
    ///
    /// When a class appears more than once the later entry wins.
    #[must_use]
    pub fn impact_lookup(&self) -> HashMap<AssetClass, f64> {
        let mut lookup = HashMap::with_capacity(self.impacts.len());
        for impact in &self.impacts {
            lookup.insert(impact.asset_class, impact.percentage_change);
        }
        lookup
    }

    /// Returns the effective shock for a class (0 when unmentioned).
    #[must_use]
    pub fn percentage_for(&self, asset_class: AssetClass) -> f64 {
        self.impacts
            .iter()
            .rev()
            .find(|i| i.asset_class == asset_class)
            .map_or(0.0, |i| i.percentage_change)
    }

    /// Returns classes defined more than once, in first-repeat order.
    #[must_use]
    pub fn duplicate_classes(&self) -> Vec<AssetClass> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for impact in &self.impacts {
            if !seen.insert(impact.asset_class) && !duplicates.contains(&impact.asset_class) {
                duplicates.push(impact.asset_class);
            }
        }
        duplicates
    }

    /// Returns true if every shock is zero.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.impacts.iter().all(|i| i.percentage_change == 0.0)
    }

    /// Checks that the scenario is usable.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidScenario`] for a blank id or name,
    /// or a non-finite shock.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.id.trim().is_empty() {
            return Err(PortfolioError::invalid_scenario(&self.id, "id is empty"));
        }
        if self.name.trim().is_empty() {
            return Err(PortfolioError::invalid_scenario(&self.id, "name is empty"));
        }
        if let Some(bad) = self
            .impacts
            .iter()
            .find(|i| !i.percentage_change.is_finite())
        {
            return Err(PortfolioError::invalid_scenario(
                &self.id,
                format!("non-finite shock for {}", bad.asset_class),
            ));
        }
        Ok(())
    }
}

/// An immutable, ordered set of scenarios with unique identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
    scenarios: Vec<Scenario>,
}

impl TryFrom<CatalogData> for ScenarioCatalog {
    type Error = PortfolioError;

    fn try_from(data: CatalogData) -> PortfolioResult<Self> {
        Self::new(data.scenarios)
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScenarioCatalog {
    /// Creates a catalog, validating each scenario and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::DuplicateScenario`] when ids collide, or
    /// [`PortfolioError::InvalidScenario`] for a malformed entry.
    pub fn new(scenarios: Vec<Scenario>) -> PortfolioResult<Self> {
        let mut seen = HashSet::with_capacity(scenarios.len());
        for scenario in &scenarios {
            scenario.validate()?;
            if !seen.insert(scenario.id.as_str()) {
                return Err(PortfolioError::DuplicateScenario {
                    id: scenario.id.clone(),
                });
            }
        }
        Ok(Self { scenarios })
    }

    /// Returns the built-in catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            scenarios: standard::all(),
        }
    }

    /// Looks up a scenario by id.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ScenarioNotFound`] if the id is absent.
    pub fn get(&self, id: &str) -> PortfolioResult<&Scenario> {
        self.find(id)
            .ok_or_else(|| PortfolioError::scenario_not_found(id))
    }

    /// Looks up a scenario by id without producing an error.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Returns true if the id is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Returns all scenarios in catalog order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Iterates over scenarios in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    /// Returns scenario ids in catalog order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.id.as_str()).collect()
    }

    /// Returns the number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScenarioCatalog {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}

/// Built-in market scenarios.
pub mod standard {
    use super::*;

    /// Broad equity sell-off with a flight to quality.
    #[must_use]
    pub fn market_crash() -> Scenario {
        Scenario::new("market-crash", "Market Crash")
            .with_description("Severe equity sell-off with investors fleeing to government bonds")
            .with_duration("6-12 months")
            .with_impact(AssetClass::Stocks, -35.0)
            .with_impact(AssetClass::Bonds, 5.0)
            .with_impact(AssetClass::RealEstate, -20.0)
            .with_impact(AssetClass::Cash, 0.0)
            .with_impact(AssetClass::PrivateEquity, -30.0)
            .with_impact(AssetClass::Commodities, -15.0)
            .with_impact(AssetClass::Cryptocurrency, -60.0)
            .with_impact(AssetClass::Other, -10.0)
    }

    /// Aggressive central bank tightening.
    #[must_use]
    pub fn rate_hike() -> Scenario {
        Scenario::new("rate-hike", "Aggressive Rate Hikes")
            .with_description("Policy rates rise sharply, repricing bonds and long-duration assets")
            .with_duration("12-18 months")
            .with_impact(AssetClass::Stocks, -15.0)
            .with_impact(AssetClass::Bonds, -12.0)
            .with_impact(AssetClass::RealEstate, -18.0)
            .with_impact(AssetClass::Cash, 2.0)
            .with_impact(AssetClass::PrivateEquity, -20.0)
            .with_impact(AssetClass::Commodities, -5.0)
            .with_impact(AssetClass::Cryptocurrency, -30.0)
    }

    /// Persistent high inflation.
    #[must_use]
    pub fn inflation_surge() -> Scenario {
        Scenario::new("inflation-surge", "Inflation Surge")
            .with_description("Inflation runs well above target, favouring real assets over nominal ones")
            .with_duration("1-2 years")
            .with_impact(AssetClass::Stocks, -10.0)
            .with_impact(AssetClass::Bonds, -15.0)
            .with_impact(AssetClass::RealEstate, 8.0)
            .with_impact(AssetClass::Cash, -6.0)
            .with_impact(AssetClass::PrivateEquity, -8.0)
            .with_impact(AssetClass::Commodities, 25.0)
            .with_impact(AssetClass::Cryptocurrency, 10.0)
            .with_impact(AssetClass::Other, 5.0)
    }

    /// Collapse in growth and technology valuations.
    #[must_use]
    pub fn tech_bubble() -> Scenario {
        Scenario::new("tech-bubble", "Tech Bubble Burst")
            .with_description("Growth valuations collapse and private funding dries up")
            .with_duration("1-3 years")
            .with_impact(AssetClass::Stocks, -25.0)
            .with_impact(AssetClass::PrivateEquity, -45.0)
            .with_impact(AssetClass::Cryptocurrency, -50.0)
            .with_impact(AssetClass::Bonds, 4.0)
            .with_impact(AssetClass::Cash, 0.0)
    }

    /// Prolonged digital asset downturn.
    #[must_use]
    pub fn crypto_winter() -> Scenario {
        Scenario::new("crypto-winter", "Crypto Winter")
            .with_description("Digital asset prices collapse with limited spillover to other markets")
            .with_duration("1-2 years")
            .with_impact(AssetClass::Cryptocurrency, -75.0)
            .with_impact(AssetClass::Stocks, -5.0)
            .with_impact(AssetClass::PrivateEquity, -10.0)
    }

    /// Regional conflict with an energy price shock.
    #[must_use]
    pub fn geopolitical_conflict() -> Scenario {
        Scenario::new("geopolitical-conflict", "Geopolitical Conflict")
            .with_description("Armed conflict disrupts trade and pushes commodity prices higher")
            .with_duration("3-9 months")
            .with_impact(AssetClass::Stocks, -18.0)
            .with_impact(AssetClass::Bonds, 6.0)
            .with_impact(AssetClass::Commodities, 30.0)
            .with_impact(AssetClass::RealEstate, -8.0)
            .with_impact(AssetClass::Cryptocurrency, -20.0)
            .with_impact(AssetClass::Cash, 0.0)
    }

    /// Strong growth and risk appetite.
    #[must_use]
    pub fn economic_boom() -> Scenario {
        Scenario::new("economic-boom", "Economic Boom")
            .with_description("Strong growth and abundant liquidity lift risk assets")
            .with_duration("2-3 years")
            .with_impact(AssetClass::Stocks, 25.0)
            .with_impact(AssetClass::Bonds, -3.0)
            .with_impact(AssetClass::RealEstate, 12.0)
            .with_impact(AssetClass::PrivateEquity, 30.0)
            .with_impact(AssetClass::Commodities, 10.0)
            .with_impact(AssetClass::Cryptocurrency, 40.0)
    }

    /// Returns all built-in scenarios.
    #[must_use]
    pub fn all() -> Vec<Scenario> {
        vec![
            market_crash(),
            rate_hike(),
            inflation_surge(),
            tech_bubble(),
            crypto_winter(),
            geopolitical_conflict(),
            economic_boom(),
        ]
    }
}
