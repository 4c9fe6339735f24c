//! Domain types for scenario analytics.
//!
//! - [`Asset`]: A single holding
//! - [`AssetClass`], [`Industry`], [`Region`]: Closed classification taxonomies
//! - [`AnalysisConfig`]: Sizing for derived report views

mod asset;
mod classification;
mod config;

pub use asset::{Asset, AssetBuilder, DEFAULT_CURRENCY};
pub use classification::{AssetClass, Industry, Region};
pub use config::AnalysisConfig;
