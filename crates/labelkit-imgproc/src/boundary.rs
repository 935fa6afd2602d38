use labelkit_image::{Image, ImageError, ImageSize};

use crate::error::RegionError;
use crate::parallel;

/// Mark every pixel whose right or bottom neighbor belongs to another region.
///
/// The source is a label image without background, e.g. the output of
/// [`crate::label::label_image`]. `edge_marker` is written at each boundary
/// pixel; all other destination pixels are left untouched, so the destination
/// must be initialized by the caller. The last row only compares against the
/// right neighbor and the last column only against the bottom neighbor.
///
/// ```text
///     labels           edges (marker 1)
///
///     a c c               1 1 *
///     a a c      =>       * 1 1
///     a a a               * * *
/// ```
///
/// # Arguments
///
/// * `src` - The label image.
/// * `dst` - The edge image, with the same size as `src`.
/// * `edge_marker` - The value written at boundary pixels.
///
/// # Examples
///
/// ```
/// use labelkit_image::Image;
/// use labelkit_imgproc::boundary::region_image_to_edge_image;
///
/// let labels = Image::<u32, 1>::new([3, 3].into(), vec![1, 2, 2, 1, 1, 2, 1, 1, 1]).unwrap();
/// let mut edges = Image::<u8, 1>::from_size_val(labels.size(), 255).unwrap();
///
/// region_image_to_edge_image(&labels, &mut edges, 0).unwrap();
///
/// assert_eq!(edges.as_slice(), &[0, 0, 255, 255, 0, 0, 255, 255, 255]);
/// ```
pub fn region_image_to_edge_image<L, D>(
    src: &Image<L, 1>,
    dst: &mut Image<D, 1>,
    edge_marker: D,
) -> Result<(), RegionError>
where
    L: PartialEq + Sync,
    D: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    parallel::par_iter_rows_with_next(src, dst, |row, next_row, dst_row| {
        for (x, dst_pixel) in dst_row.iter_mut().enumerate() {
            let right_differs = row.get(x + 1).is_some_and(|right| *right != row[x]);
            let bottom_differs = next_row.is_some_and(|next_row| next_row[x] != row[x]);
            if right_differs || bottom_differs {
                *dst_pixel = edge_marker;
            }
        }
    });

    log::debug!("region_image_to_edge_image: {}", src.size());

    Ok(())
}

/// The size of the cell grid image of a `w x h` label image: `(2w-1) x (2h-1)`.
///
/// An empty size maps to an empty size.
pub fn cell_grid_size(size: ImageSize) -> ImageSize {
    ImageSize {
        width: (2 * size.width).saturating_sub(1),
        height: (2 * size.height).saturating_sub(1),
    }
}

/// Transform a label image into a cell grid image.
///
/// The cell grid doubles the resolution so that regions (2-cells), the edges
/// between them (1-cells) and the corners where edges meet (0-cells) all get
/// their own pixel:
///
/// * `(2x, 2y)` holds the label of source pixel `(x, y)`.
/// * `(2x+1, 2y)` and `(2x, 2y+1)` hold the shared label of the two source pixels
///   they separate, or `edge_marker` if the labels differ.
/// * `(2x+1, 2y+1)` is `edge_marker` if any of its four neighboring 1-cells is,
///   otherwise the label of `(x, y)`.
///
/// ```text
///                     a 0 c c c
///     a c c           a 0 0 0 c
///     a a c    =>     a a a 0 c
///     a a a           a a a 0 0
///                     a a a a a
/// ```
///
/// The source must not contain background and `edge_marker` should not be a
/// valid label.
///
/// # Errors
///
/// Fails with [`RegionError::CellGridSize`] if `dst` is not exactly
/// [`cell_grid_size`] of the source. Nothing is written in that case.
///
/// # Examples
///
/// ```
/// use labelkit_image::Image;
/// use labelkit_imgproc::boundary::{cell_grid_size, region_image_to_cell_grid_image};
///
/// let labels = Image::<u32, 1>::new([2, 1].into(), vec![1, 2]).unwrap();
/// let mut cells = Image::<u32, 1>::from_size_val(cell_grid_size(labels.size()), 9).unwrap();
///
/// region_image_to_cell_grid_image(&labels, &mut cells, 0).unwrap();
///
/// assert_eq!(cells.as_slice(), &[1, 0, 2]);
/// ```
pub fn region_image_to_cell_grid_image<L, D>(
    src: &Image<L, 1>,
    dst: &mut Image<D, 1>,
    edge_marker: D,
) -> Result<(), RegionError>
where
    L: Copy + PartialEq,
    D: Copy + PartialEq + From<L>,
{
    let expected = cell_grid_size(src.size());
    if dst.size() != expected {
        return Err(RegionError::CellGridSize {
            expected,
            actual: dst.size(),
        });
    }

    if src.size().is_empty() {
        return Ok(());
    }

    let (width, height) = (src.width(), src.height());
    let cell_width = expected.width;
    let labels = src.as_slice();
    let cells = dst.as_slice_mut();

    // 2-cells and 1-cells
    for y in 0..height {
        for x in 0..width {
            let label = labels[y * width + x];
            let cell = 2 * y * cell_width + 2 * x;

            cells[cell] = label.into();

            let has_right = x + 1 < width;
            let has_bottom = y + 1 < height;

            if has_right {
                let right = labels[y * width + x + 1];
                cells[cell + 1] = if right == label {
                    label.into()
                } else {
                    edge_marker
                };
            }

            if has_bottom {
                let bottom = labels[(y + 1) * width + x];
                cells[cell + cell_width] = if bottom == label {
                    label.into()
                } else {
                    edge_marker
                };
            }

            if has_right && has_bottom {
                cells[cell + cell_width + 1] = label.into();
            }
        }
    }

    // 0-cells, once all 1-cells are known
    for y in 0..height - 1 {
        for x in 0..width - 1 {
            let cell = (2 * y + 1) * cell_width + 2 * x + 1;
            let neighbors = [
                cell + 1,
                cell - cell_width,
                cell - 1,
                cell + cell_width,
            ];
            if neighbors.iter().any(|&n| cells[n] == edge_marker) {
                cells[cell] = edge_marker;
            }
        }
    }

    log::debug!(
        "region_image_to_cell_grid_image: {} -> {}",
        src.size(),
        expected
    );

    Ok(())
}
