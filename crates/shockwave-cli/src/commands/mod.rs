//! CLI command implementations.

pub mod allocation;
pub mod analyze;
pub mod compare;
pub mod config;
pub mod report;
pub mod sample;
pub mod scenarios;

// Re-export submodules for convenience
pub use allocation::AllocationArgs;
pub use analyze::AnalyzeArgs;
pub use compare::CompareArgs;
pub use config::ConfigArgs;
pub use report::ReportArgs;
pub use sample::SampleArgs;
pub use scenarios::ScenariosArgs;

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::{info, warn};

use shockwave_ext_file::{load_catalog as load_catalog_file, read_holdings_csv};
use shockwave_portfolio::{Holdings, Scenario, ScenarioCatalog};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::settings::Settings;

/// State shared by every command.
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub catalog: ScenarioCatalog,
    pub settings: Settings,
}

/// Loads a catalog file, or the built-in catalog when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<ScenarioCatalog> {
    match path {
        Some(path) => {
            let catalog = load_catalog_file(path)
                .with_context(|| format!("Failed to load scenario catalog {}", path.display()))?;
            info!(path = %path.display(), scenarios = catalog.len(), "using custom catalog");
            Ok(catalog)
        }
        None => Ok(ScenarioCatalog::standard()),
    }
}

/// Reads a holdings CSV file.
pub fn load_holdings(path: &Path) -> Result<Holdings> {
    let holdings = read_holdings_csv(path)
        .with_context(|| format!("Failed to load holdings from {}", path.display()))?;
    info!(
        owner = holdings.owner(),
        assets = holdings.len(),
        "loaded holdings"
    );
    Ok(holdings)
}

/// Resolves `--scenario`, falling back to the configured default.
pub fn resolve_scenario<'a>(ctx: &'a Context, requested: Option<&str>) -> Result<&'a Scenario> {
    let id = requested
        .or_else(|| ctx.settings.default_scenario())
        .ok_or(CliError::NoScenario)?;
    let scenario = ctx.catalog.get(id)?;

    let duplicates = scenario.duplicate_classes();
    if !duplicates.is_empty() {
        warn!(
            scenario = %scenario.id,
            ?duplicates,
            "scenario shocks a class more than once; the last shock is used"
        );
    }
    Ok(scenario)
}

/// Validates a `--top` style count.
pub fn validate_count(count: usize) -> CliResult<usize> {
    if count == 0 {
        return Err(CliError::InvalidCount(count));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ConfigKey;

    fn context(settings: Settings) -> Context {
        Context {
            format: OutputFormat::Table,
            quiet: true,
            catalog: ScenarioCatalog::standard(),
            settings,
        }
    }

    #[test]
    fn test_resolve_scenario() {
        let ctx = context(Settings::default());
        assert_eq!(resolve_scenario(&ctx, Some("rate-hike")).unwrap().id, "rate-hike");
        assert!(resolve_scenario(&ctx, Some("nope")).is_err());

        let err = resolve_scenario(&ctx, None).unwrap_err();
        assert!(err.to_string().contains("No scenario selected"));
    }

    #[test]
    fn test_resolve_scenario_uses_default() {
        let mut settings = Settings::default();
        settings.set(ConfigKey::DefaultScenario, "crypto-winter");
        let ctx = context(settings);
        assert_eq!(resolve_scenario(&ctx, None).unwrap().id, "crypto-winter");
        assert_eq!(resolve_scenario(&ctx, Some("tech-bubble")).unwrap().id, "tech-bubble");
    }

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count(3).unwrap(), 3);
        assert!(validate_count(0).is_err());
    }

    #[test]
    fn test_builtin_catalog_without_path() {
        assert_eq!(load_catalog(None).unwrap().len(), 7);
    }
}
