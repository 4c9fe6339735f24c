//! Configuration for report views built on top of impact results.

use serde::{Deserialize, Serialize};

/// Configuration for impact reporting.
///
/// The impact calculation itself takes no configuration; these settings
/// only size the derived views (risk contributors, most impacted assets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of negative-impact assets listed as risk contributors.
    pub top_risk_count: usize,

    /// Number of assets listed in the "most impacted" table.
    pub most_impacted_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_risk_count: 10,
            most_impacted_count: 10,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of risk contributors to report.
    #[must_use]
    pub fn with_top_risk_count(mut self, count: usize) -> Self {
        self.top_risk_count = count;
        self
    }

    /// Sets the number of most impacted assets to report.
    #[must_use]
    pub fn with_most_impacted_count(mut self, count: usize) -> Self {
        self.most_impacted_count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_risk_count, 10);
        assert_eq!(config.most_impacted_count, 10);
    }

    #[test]
    fn test_builder() {
        let config = AnalysisConfig::new()
            .with_top_risk_count(3)
            .with_most_impacted_count(5);
        assert_eq!(config.top_risk_count, 3);
        assert_eq!(config.most_impacted_count, 5);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"top_risk_count": 4}"#).unwrap();
        assert_eq!(config.top_risk_count, 4);
        assert_eq!(config.most_impacted_count, 10);
    }
}
