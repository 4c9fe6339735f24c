//! Scenario stress testing for portfolios.
//!
//! This module provides:
//! - Scenario definitions (percentage shocks per asset class)
//! - The scenario catalog with the built-in market scenarios
//! - Impact calculations at asset, class and portfolio level
//! - Multi-scenario comparison
//!
//! Each scenario is a single static shock applied independently; scenarios
//! are never chained or composed.

mod impact;
mod scenarios;

pub use impact::*;
pub use scenarios::*;
