//! Risk attribution over impact reports.
//!
//! Read-only views that pick out which assets drive a scenario's losses:
//! - Top risk contributors (negative impact only)
//! - Most impacted assets (by magnitude, either direction)
//!
//! # Example
//!
//! ```rust,ignore
//! use shockwave_portfolio::contribution::top_risk_contributors;
//!
//! for c in top_risk_contributors(&impact, 10) {
//!     println!("{}: {:.1}% of losses", c.name, c.share_of_downside_pct);
//! }
//! ```

mod risk;

pub use risk::*;
