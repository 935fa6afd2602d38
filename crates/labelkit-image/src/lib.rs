#![deny(missing_docs)]
//! Image types and traits for raster region labeling

/// image representation for region labeling purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// read-only grid access used by the labeling algorithms.
pub mod view;

#[cfg(feature = "serde")]
mod serde;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::view::{ImageView, PixelsView};
