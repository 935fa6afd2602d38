use rayon::prelude::*;

use labelkit_image::Image;

/// Apply a function to each row of the image in parallel.
///
/// The function receives the source row, the source row below it (`None` for
/// the last row) and the matching destination row.
pub fn par_iter_rows_with_next<T1, T2>(
    src: &Image<T1, 1>,
    dst: &mut Image<T2, 1>,
    f: impl Fn(&[T1], Option<&[T1]>, &mut [T2]) + Send + Sync,
) where
    T1: Sync,
    T2: Send,
{
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    let src_slice = src.as_slice();
    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(row, dst_row)| {
            let src_row = &src_slice[row * cols..(row + 1) * cols];
            let next_row = src_slice.get((row + 1) * cols..(row + 2) * cols);
            f(src_row, next_row, dst_row);
        });
}
