use labelkit_image::ImageView;

use super::equality::PixelEquality;
use super::equivalence::EquivalenceTable;
use super::Connectivity;

/// Already visited neighbors in precedence order: left, top-left, top, top-right.
const NEIGHBORS: [(isize, isize); 4] = [(-1, 0), (-1, -1), (0, -1), (1, -1)];

/// First forward raster pass: assign provisional labels and record equivalences.
///
/// Pixels equal to `background` (under `equal`) are left unlabeled and never
/// connect to anything.
pub(crate) fn scan<I, E>(
    src: &I,
    connectivity: Connectivity,
    background: Option<&I::Pixel>,
    equal: &E,
) -> EquivalenceTable
where
    I: ImageView,
    E: PixelEquality<I::Pixel>,
{
    let size = src.size();
    let (width, height) = (size.width, size.height);
    let step = connectivity.neighbor_stride();

    let mut table = EquivalenceTable::new(size.area());

    for y in 0..height {
        for x in 0..width {
            let pos = y * width + x;
            let pixel = src.at(x, y);

            if let Some(background) = background {
                if equal.equal(pixel, background) {
                    table.mark_unlabeled(pos);
                    continue;
                }
            }

            // clamp the neighbor list at the image border
            let begin = if x == 0 { 2 } else { 0 };
            let end = if y == 0 {
                1
            } else if x + 1 == width {
                3
            } else {
                4
            };

            let first = (begin..end)
                .step_by(step)
                .find_map(|i| matching_label(src, &table, equal, x, y, i).map(|l| (i, l)));

            let Some((matched, mut label)) = first else {
                // new region
                table.assign(pos, pos);
                continue;
            };

            // a second equal neighbor can only belong to another class when it
            // is not adjacent to the first one, so a single extra check suffices
            let second = (matched + 2..end)
                .step_by(step)
                .find_map(|i| matching_label(src, &table, equal, x, y, i));

            if let Some(other) = second {
                if other != label {
                    label = table.merge(label, other);
                }
            }

            table.assign(pos, label);
        }
    }

    table
}

/// The provisional label of neighbor `i` of `(x, y)` if it is labeled and equal to the pixel.
#[inline]
fn matching_label<I, E>(
    src: &I,
    table: &EquivalenceTable,
    equal: &E,
    x: usize,
    y: usize,
    i: usize,
) -> Option<usize>
where
    I: ImageView,
    E: PixelEquality<I::Pixel>,
{
    let (dx, dy) = NEIGHBORS[i];
    let nx = x.wrapping_add_signed(dx);
    let ny = y.wrapping_add_signed(dy);
    let label = table.label(ny * src.size().width + nx)?;

    equal
        .equal(src.at(x, y), src.at_offset(x, y, dx, dy))
        .then_some(label)
}
