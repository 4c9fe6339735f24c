//! # Shockwave Ext File
//!
//! File-based inputs for the Shockwave scenario engine:
//! - CSV holdings ingestion with row-level validation
//! - JSON/TOML scenario catalogs
//! - Bundled sample holdings

#![warn(missing_docs)]
#![warn(clippy::all)]

mod catalog;
mod error;
mod holdings_csv;
mod sample;

pub use catalog::*;
pub use error::{FileError, FileResult};
pub use holdings_csv::*;
pub use sample::*;
