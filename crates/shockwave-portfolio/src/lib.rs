//! # Shockwave Portfolio
//!
//! Scenario impact analytics for personal asset portfolios.
//!
//! Given a flat list of holdings and a named market scenario (a percentage
//! shock per asset class), this crate computes per-asset, per-class and
//! whole-portfolio deltas plus a vulnerability score.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: [`compute_impact`] reads only its two inputs and
//!   returns a fresh, immutable result
//! - **Closed taxonomies**: asset class, industry and region are enums
//! - **Caller-owned state**: [`AnalysisSession`] holds the interactive state
//!   instead of a global store
//!
//! ## Features
//!
//! - **Scenario Catalog**: Built-in market scenarios, lookup by id
//! - **Impact Engine**: Class and asset deltas, vulnerability score
//! - **Comparison**: Run every scenario independently, worst/best/average
//! - **Composition**: Bucketing by asset class, industry and region
//! - **Risk Attribution**: Top loss contributors, most impacted assets
//! - **Reports**: Markdown and plain-text impact reports
//!
//! ## Quick Start
//!
//! ```rust
//! use shockwave_portfolio::prelude::*;
//!
//! let fund = Asset::builder()
//!     .id("asset-0")
//!     .name("Global Equity Fund")
//!     .value(250_000.0)
//!     .asset_class(AssetClass::Stocks)
//!     .industry(Industry::Finance)
//!     .region(Region::Global)
//!     .build()
//!     .unwrap();
//!
//! let holdings = Holdings::builder("Jane Doe").add_asset(fund).build().unwrap();
//! let catalog = ScenarioCatalog::standard();
//! let impact = compute_impact(&holdings, catalog.get("market-crash").unwrap());
//!
//! assert!(impact.is_loss());
//! ```
//!
//! ## Module Overview
//!
//! - [`bucketing`] - Composition by asset class, industry, region
//! - [`contribution`] - Risk attribution over impact results
//! - [`portfolio`] - Holdings and builder types
//! - [`report`] - Printable impact reports
//! - [`session`] - Caller-owned analysis context
//! - [`stress`] - Scenarios, catalog and impact calculation
//! - [`types`] - Core types (Asset, taxonomies, config)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod bucketing;
pub mod contribution;
pub mod error;
pub mod portfolio;
pub mod report;
pub mod session;
pub mod stress;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

pub use types::{
    AnalysisConfig, Asset, AssetBuilder, AssetClass, Industry, Region, DEFAULT_CURRENCY,
};

pub use portfolio::{Holdings, HoldingsBuilder};

pub use stress::{
    best_case, compare_scenarios, compute_impact, run_scenarios, standard, summarize_results,
    worst_case, AssetImpact, ClassImpact, ComparisonSummary, PortfolioImpact, Scenario,
    ScenarioCatalog, ScenarioComparison, ScenarioImpact, ScenarioResult,
};

pub use bucketing::{
    bucket_by_asset_class, bucket_by_industry, bucket_by_region, Allocation, BucketMetrics,
};

pub use contribution::{
    losses_by_class, most_impacted_assets, top_risk_contributors, ClassLoss, RiskContribution,
};

pub use report::ImpactReport;
pub use session::AnalysisSession;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::portfolio::{Holdings, HoldingsBuilder};
    pub use crate::types::{AnalysisConfig, Asset, AssetBuilder, AssetClass, Industry, Region};

    pub use crate::stress::{
        compare_scenarios, compute_impact, PortfolioImpact, Scenario, ScenarioCatalog,
    };

    pub use crate::bucketing::{bucket_by_asset_class, bucket_by_industry, bucket_by_region};
    pub use crate::contribution::{most_impacted_assets, top_risk_contributors};
    pub use crate::report::ImpactReport;
    pub use crate::session::AnalysisSession;
}
