#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// region boundary extraction module.
pub mod boundary;

/// Error types for the region operations.
pub mod error;

/// connected component labeling module.
pub mod label;

/// module containing parallization utilities.
pub mod parallel;

pub use crate::error::RegionError;
