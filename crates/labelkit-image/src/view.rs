use crate::image::{Image, ImageSize};

/// Read access to a 2-D grid of pixels.
///
/// This is the access contract the labeling algorithms rely on: a value at a
/// coordinate, and a value at a coordinate plus a relative offset. Callers of
/// [`ImageView::at_offset`] must keep the shifted coordinate inside the grid.
pub trait ImageView {
    /// The value stored at each grid position.
    type Pixel: ?Sized;

    /// The extent of the grid.
    fn size(&self) -> ImageSize;

    /// The pixel at column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    fn at(&self, x: usize, y: usize) -> &Self::Pixel;

    /// The pixel at `(x + dx, y + dy)`.
    fn at_offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> &Self::Pixel {
        self.at(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))
    }
}

impl<V: ImageView + ?Sized> ImageView for &V {
    type Pixel = V::Pixel;

    fn size(&self) -> ImageSize {
        (**self).size()
    }

    fn at(&self, x: usize, y: usize) -> &Self::Pixel {
        (**self).at(x, y)
    }
}

impl<T> ImageView for Image<T, 1> {
    type Pixel = T;

    fn size(&self) -> ImageSize {
        Image::size(self)
    }

    fn at(&self, x: usize, y: usize) -> &T {
        debug_assert!(x < self.width() && y < self.height());
        &self.as_slice()[y * self.width() + x]
    }
}

/// A view over a multi-channel image where every pixel is the slice of its
/// channel values.
///
/// Use it to label an image by whole-pixel (e.g. color) equality.
pub struct PixelsView<'a, T, const C: usize> {
    image: &'a Image<T, C>,
}

impl<T, const C: usize> Image<T, C> {
    /// Borrow the image as a grid whose pixels are channel slices.
    ///
    /// # Examples
    ///
    /// ```
    /// use labelkit_image::{Image, ImageView};
    ///
    /// let image = Image::<u8, 3>::new([2, 1].into(), vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let view = image.pixels_view();
    ///
    /// assert_eq!(view.at(1, 0), &[4, 5, 6]);
    /// ```
    pub fn pixels_view(&self) -> PixelsView<'_, T, C> {
        PixelsView { image: self }
    }
}

impl<T, const C: usize> ImageView for PixelsView<'_, T, C> {
    type Pixel = [T];

    fn size(&self) -> ImageSize {
        self.image.size()
    }

    fn at(&self, x: usize, y: usize) -> &[T] {
        debug_assert!(x < self.image.width() && y < self.image.height());
        let offset = (y * self.image.width() + x) * C;
        &self.image.as_slice()[offset..offset + C]
    }
}
