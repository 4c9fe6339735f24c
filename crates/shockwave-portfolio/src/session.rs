//! Caller-owned analysis context.
//!
//! [`AnalysisSession`] ties together the loaded holdings, the scenario
//! catalog and the selected scenario, and keeps the latest impact in sync
//! with them. The impact engine itself stays stateless.

use crate::stress::{compute_impact, PortfolioImpact, Scenario, ScenarioCatalog};
use crate::{Holdings, PortfolioResult};

/// Mutable state for an interactive analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    catalog: ScenarioCatalog,
    holdings: Option<Holdings>,
    selected: Option<String>,
    impact: Option<PortfolioImpact>,
    error: Option<String>,
}

impl AnalysisSession {
    /// Creates a session over the given catalog.
    #[must_use]
    pub fn new(catalog: ScenarioCatalog) -> Self {
        Self {
            catalog,
            holdings: None,
            selected: None,
            impact: None,
            error: None,
        }
    }

    /// Returns the scenario catalog.
    #[must_use]
    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    /// Returns the loaded holdings.
    #[must_use]
    pub fn holdings(&self) -> Option<&Holdings> {
        self.holdings.as_ref()
    }

    /// Returns the selected scenario id.
    #[must_use]
    pub fn selected_scenario_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Returns the selected scenario.
    #[must_use]
    pub fn selected_scenario(&self) -> Option<&Scenario> {
        self.selected
            .as_deref()
            .and_then(|id| self.catalog.find(id))
    }

    /// Returns the latest impact.
    #[must_use]
    pub fn impact(&self) -> Option<&PortfolioImpact> {
        self.impact.as_ref()
    }

    /// Returns the last recorded error message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the holdings, clears any error and refreshes the impact.
    pub fn set_holdings(&mut self, holdings: Holdings) {
        self.holdings = Some(holdings);
        self.error = None;
        self.calculate_impact();
    }

    /// Drops the holdings and the impact.
    pub fn clear_holdings(&mut self) {
        self.holdings = None;
        self.impact = None;
    }

    /// Selects a scenario, or clears the selection with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortfolioError::ScenarioNotFound`] for an unknown
    /// id; the previous selection is kept.
    pub fn select_scenario(&mut self, id: Option<&str>) -> PortfolioResult<()> {
        match id {
            None => {
                self.selected = None;
                self.impact = None;
            }
            Some(id) => {
                self.catalog.get(id)?;
                self.selected = Some(id.to_string());
                self.calculate_impact();
            }
        }
        Ok(())
    }

    /// Recomputes the impact from the current holdings and selection.
    ///
    /// Leaves the impact empty when either is missing.
    pub fn calculate_impact(&mut self) -> Option<&PortfolioImpact> {
        let impact = match (&self.holdings, self.selected_scenario()) {
            (Some(holdings), Some(scenario)) => Some(compute_impact(holdings, scenario)),
            _ => None,
        };
        self.impact = impact;
        self.impact.as_ref()
    }

    /// Computes the impact of any catalog scenario without changing the
    /// selection. Returns `None` when no holdings are loaded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortfolioError::ScenarioNotFound`] for an unknown id.
    pub fn impact_for_scenario(&self, id: &str) -> PortfolioResult<Option<PortfolioImpact>> {
        let scenario = self.catalog.get(id)?;
        Ok(self
            .holdings
            .as_ref()
            .map(|holdings| compute_impact(holdings, scenario)))
    }

    /// Records an error message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Clears the error message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
