use labelkit_image::Image;
use num_traits::NumCast;

use super::equivalence::EquivalenceTable;
use crate::error::RegionError;

/// Second pass: resolve every provisional label to a dense, 0-based region index.
///
/// Regions are numbered in the raster order of their first pixel. Because
/// every entry points to a smaller position, a single indirection reaches an
/// entry that was already resolved earlier in this pass.
///
/// Returns the number of regions.
pub(crate) fn compact(table: &mut EquivalenceTable) -> usize {
    let mut count = 0;
    let entries = table.entries_mut();

    for i in 0..entries.len() {
        let Some(parent) = entries[i] else {
            continue;
        };

        if parent == i {
            entries[i] = Some(count);
            count += 1;
        } else {
            entries[i] = entries[parent];
        }
    }

    count
}

/// Write the resolved labels, shifted to start at one, into `dst`.
///
/// Unlabeled positions keep their current destination value. Nothing is
/// written when `count` does not fit the label type.
pub(crate) fn write_labels<L>(
    table: &EquivalenceTable,
    count: usize,
    dst: &mut Image<L, 1>,
) -> Result<(), RegionError>
where
    L: NumCast,
{
    debug_assert_eq!(table.len(), dst.as_slice().len());

    if count > 0 && L::from(count).is_none() {
        return Err(RegionError::LabelOverflow(count));
    }

    for (entry, dst_pixel) in table.entries().iter().zip(dst.as_slice_mut()) {
        if let Some(region) = entry {
            *dst_pixel = L::from(region + 1).ok_or(RegionError::LabelOverflow(count))?;
        }
    }

    Ok(())
}
