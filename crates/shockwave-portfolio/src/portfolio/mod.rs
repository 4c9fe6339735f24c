//! Holdings and builder types.

mod builder;
mod holdings;

pub use builder::HoldingsBuilder;
pub use holdings::Holdings;
