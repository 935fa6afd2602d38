use labelkit_image::{ImageError, ImageSize};

/// Errors returned by the labeling and region boundary operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RegionError {
    /// An image level error, e.g. source and destination extents differ.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The cell grid destination is not `(2w-1) x (2h-1)` for a `w x h` source.
    #[error("cell grid image must be {expected}, got {actual}")]
    CellGridSize {
        /// The size the destination must have.
        expected: ImageSize,
        /// The size the destination has.
        actual: ImageSize,
    },

    /// The region count cannot be represented by the destination label type.
    #[error("region count {0} does not fit the destination label type")]
    LabelOverflow(usize),
}
