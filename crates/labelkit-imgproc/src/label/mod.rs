mod compact;
mod equality;
mod equivalence;
mod scan;

use labelkit_image::{Image, ImageError, ImageView};
use num_traits::NumCast;

use crate::error::RegionError;

pub use equality::{DefaultEquality, PixelEquality, Tolerance};

/// Determines which neighbors of a pixel are connected to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// A pixel is connected to its left, right, top and bottom neighbors.
    #[default]
    Four,
    /// A pixel is connected to all eight surrounding neighbors.
    Eight,
}

impl Connectivity {
    /// Step through the (left, top-left, top, top-right) neighbor list.
    fn neighbor_stride(self) -> usize {
        match self {
            Connectivity::Four => 2,
            Connectivity::Eight => 1,
        }
    }
}

/// Find the connected components of an image.
///
/// Connected components are maximal groups of 4- or 8-connected pixels with
/// equal values. Each component gets a label in `1..=N` where `N` is the
/// returned region count; labels follow the raster order of the first pixel
/// of every component.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output label image, with the same size as `src`.
/// * `connectivity` - The pixel neighborhood.
///
/// # Returns
///
/// The number of regions.
///
/// # Errors
///
/// Fails if `dst` and `src` differ in size, or if the region count does not fit
/// the label type. Nothing is written in both cases.
///
/// # Examples
///
/// ```
/// use labelkit_image::{Image, ImageSize};
/// use labelkit_imgproc::label::{label_image, Connectivity};
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 3, height: 3 },
///     vec![
///         1, 2, 2,
///         1, 1, 2,
///         1, 1, 1,
///     ],
/// )
/// .unwrap();
///
/// let mut labels = Image::<u32, 1>::from_size_val(image.size(), 0).unwrap();
/// let count = label_image(&image, &mut labels, Connectivity::Four).unwrap();
///
/// assert_eq!(count, 2);
/// assert_eq!(labels.as_slice(), &[1, 2, 2, 1, 1, 2, 1, 1, 1]);
/// ```
pub fn label_image<I, L>(
    src: &I,
    dst: &mut Image<L, 1>,
    connectivity: Connectivity,
) -> Result<usize, RegionError>
where
    I: ImageView,
    I::Pixel: PartialEq,
    L: NumCast,
{
    label_image_by(src, dst, connectivity, DefaultEquality)
}

/// Find the connected components of an image using a custom equality predicate.
///
/// See [`label_image`]. Two neighbors belong to the same component when
/// `equal` holds for them.
///
/// # Examples
///
/// ```
/// use labelkit_image::Image;
/// use labelkit_imgproc::label::{label_image_by, Connectivity, Tolerance};
///
/// let image = Image::<f32, 1>::new([4, 1].into(), vec![0.0, 0.1, 0.9, 1.0]).unwrap();
/// let mut labels = Image::<u32, 1>::from_size_val(image.size(), 0).unwrap();
///
/// let count = label_image_by(&image, &mut labels, Connectivity::Four, Tolerance(0.2)).unwrap();
///
/// assert_eq!(count, 2);
/// assert_eq!(labels.as_slice(), &[1, 1, 2, 2]);
/// ```
pub fn label_image_by<I, L, E>(
    src: &I,
    dst: &mut Image<L, 1>,
    connectivity: Connectivity,
    equal: E,
) -> Result<usize, RegionError>
where
    I: ImageView,
    L: NumCast,
    E: PixelEquality<I::Pixel>,
{
    label_regions(src, dst, connectivity, None, &equal)
}

/// Find the connected components of an image, ignoring a background value.
///
/// Pixels equal to `background` are never labeled: they keep their value in
/// `dst` and do not connect the regions around them. The remaining regions are
/// labeled as in [`label_image`].
///
/// # Examples
///
/// ```
/// use labelkit_image::Image;
/// use labelkit_imgproc::label::{label_image_with_background, Connectivity};
///
/// let image = Image::<u8, 1>::new(
///     [4, 2].into(),
///     vec![
///         1, 0, 1, 1,
///         0, 1, 1, 0,
///     ],
/// )
/// .unwrap();
///
/// let mut labels = Image::<u32, 1>::from_size_val(image.size(), 0).unwrap();
/// let count =
///     label_image_with_background(&image, &mut labels, Connectivity::Four, &0).unwrap();
///
/// assert_eq!(count, 2);
/// assert_eq!(labels.as_slice(), &[1, 0, 2, 2, 0, 2, 2, 0]);
/// ```
pub fn label_image_with_background<I, L>(
    src: &I,
    dst: &mut Image<L, 1>,
    connectivity: Connectivity,
    background: &I::Pixel,
) -> Result<usize, RegionError>
where
    I: ImageView,
    I::Pixel: PartialEq,
    L: NumCast,
{
    label_image_with_background_by(src, dst, connectivity, background, DefaultEquality)
}

/// Find the connected components of an image using a custom equality
/// predicate, ignoring pixels `equal` to `background`.
///
/// See [`label_image_with_background`].
pub fn label_image_with_background_by<I, L, E>(
    src: &I,
    dst: &mut Image<L, 1>,
    connectivity: Connectivity,
    background: &I::Pixel,
    equal: E,
) -> Result<usize, RegionError>
where
    I: ImageView,
    L: NumCast,
    E: PixelEquality<I::Pixel>,
{
    label_regions(src, dst, connectivity, Some(background), &equal)
}

fn label_regions<I, L, E>(
    src: &I,
    dst: &mut Image<L, 1>,
    connectivity: Connectivity,
    background: Option<&I::Pixel>,
    equal: &E,
) -> Result<usize, RegionError>
where
    I: ImageView,
    L: NumCast,
    E: PixelEquality<I::Pixel>,
{
    let size = src.size();
    if size != dst.size() {
        return Err(ImageError::InvalidImageSize(
            size.width,
            size.height,
            dst.width(),
            dst.height(),
        )
        .into());
    }

    if size.is_empty() {
        log::debug!("label_regions: empty image {size}, nothing to label");
        return Ok(0);
    }

    let mut table = scan::scan(src, connectivity, background, equal);
    let count = compact::compact(&mut table);
    compact::write_labels(&table, count, dst)?;

    log::debug!(
        "label_regions: {size} {connectivity:?} background={} -> {count} regions",
        background.is_some()
    );

    Ok(count)
}
