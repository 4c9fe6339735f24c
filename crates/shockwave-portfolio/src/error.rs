//! Error types for portfolio analytics.
//!
//! This module defines the error types used throughout the portfolio crate.
//! The impact calculation itself never fails; errors come from construction
//! (assets, holdings, catalogs) and from scenario lookup.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid asset data.
    #[error("Invalid asset '{id}': {reason}")]
    InvalidAsset {
        /// The asset ID.
        id: String,
        /// The reason the asset is invalid.
        reason: String,
    },

    /// Two assets in one portfolio share an identifier.
    #[error("Duplicate asset id: {id}")]
    DuplicateAsset {
        /// The repeated asset ID.
        id: String,
    },

    /// A label could not be mapped onto a closed taxonomy.
    #[error("Unknown {kind}: '{value}'")]
    UnknownCategory {
        /// Taxonomy name ("asset class", "industry", "region").
        kind: String,
        /// The rejected label.
        value: String,
    },

    /// Scenario identifier is not in the catalog.
    #[error("Scenario not found: {id}")]
    ScenarioNotFound {
        /// The requested scenario ID.
        id: String,
    },

    /// Two catalog scenarios share an identifier.
    #[error("Duplicate scenario id: {id}")]
    DuplicateScenario {
        /// The repeated scenario ID.
        id: String,
    },

    /// Invalid scenario definition.
    #[error("Invalid scenario '{id}': {reason}")]
    InvalidScenario {
        /// The scenario ID.
        id: String,
        /// The reason the scenario is invalid.
        reason: String,
    },
}

impl PortfolioError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid asset error.
    #[must_use]
    pub fn invalid_asset(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown category error.
    #[must_use]
    pub fn unknown_category(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Create a scenario not found error.
    #[must_use]
    pub fn scenario_not_found(id: impl Into<String>) -> Self {
        Self::ScenarioNotFound { id: id.into() }
    }

    /// Create an invalid scenario error.
    #[must_use]
    pub fn invalid_scenario(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidScenario {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
