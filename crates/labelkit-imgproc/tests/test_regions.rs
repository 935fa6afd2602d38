use std::collections::VecDeque;

use labelkit_image::{Image, ImageSize};
use labelkit_imgproc::boundary::{
    cell_grid_size, region_image_to_cell_grid_image, region_image_to_edge_image,
};
use labelkit_imgproc::label::{label_image, label_image_with_background, Connectivity};
use labelkit_imgproc::RegionError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [(usize, usize); 7] = [(1, 1), (1, 9), (9, 1), (2, 2), (7, 5), (16, 16), (31, 17)];

fn random_image(rng: &mut StdRng, size: ImageSize, levels: u8) -> Image<u8, 1> {
    let data = (0..size.area())
        .map(|_| rng.random_range(0..levels))
        .collect();
    Image::new(size, data).expect("valid image size")
}

/// Flood fill labeling, regions numbered in the raster order of their first pixel.
fn flood_fill_labels(
    image: &Image<u8, 1>,
    connectivity: Connectivity,
    background: Option<u8>,
) -> (Vec<u32>, usize) {
    let (width, height) = (image.width() as isize, image.height() as isize);
    let data = image.as_slice();
    let offsets: &[(isize, isize)] = match connectivity {
        Connectivity::Four => &[(1, 0), (-1, 0), (0, 1), (0, -1)],
        Connectivity::Eight => &[
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (1, -1),
            (-1, 1),
            (-1, -1),
        ],
    };

    let mut labels = vec![0u32; data.len()];
    let mut count = 0;

    for start in 0..data.len() {
        if labels[start] != 0 || Some(data[start]) == background {
            continue;
        }
        count += 1;
        labels[start] = count as u32;

        let mut queue = VecDeque::from([start]);
        while let Some(pos) = queue.pop_front() {
            let (x, y) = (pos as isize % width, pos as isize / width);
            for (dx, dy) in offsets {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= width || ny >= height {
                    continue;
                }
                let npos = (ny * width + nx) as usize;
                if labels[npos] == 0 && data[npos] == data[pos] {
                    labels[npos] = count as u32;
                    queue.push_back(npos);
                }
            }
        }
    }

    (labels, count)
}

#[test]
fn labels_match_flood_fill() -> Result<(), RegionError> {
    let mut rng = StdRng::seed_from_u64(42);

    for (width, height) in SIZES {
        let size = ImageSize { width, height };
        for levels in [2, 3] {
            for connectivity in [Connectivity::Four, Connectivity::Eight] {
                for _ in 0..20 {
                    let image = random_image(&mut rng, size, levels);
                    let mut labels = Image::<u32, 1>::from_size_val(size, 0)?;

                    let count = label_image(&image, &mut labels, connectivity)?;
                    let (expected, expected_count) = flood_fill_labels(&image, connectivity, None);

                    assert_eq!(count, expected_count);
                    assert_eq!(labels.as_slice(), &expected);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn labels_with_background_match_flood_fill() -> Result<(), RegionError> {
    let mut rng = StdRng::seed_from_u64(7);

    for (width, height) in SIZES {
        let size = ImageSize { width, height };
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            for _ in 0..20 {
                let image = random_image(&mut rng, size, 3);
                let mut labels = Image::<u32, 1>::from_size_val(size, 0)?;

                let count = label_image_with_background(&image, &mut labels, connectivity, &0)?;
                let (expected, expected_count) =
                    flood_fill_labels(&image, connectivity, Some(0));

                assert_eq!(count, expected_count);
                assert_eq!(labels.as_slice(), &expected);
            }
        }
    }
    Ok(())
}

#[test]
fn labels_are_dense_and_ordered() -> Result<(), RegionError> {
    let mut rng = StdRng::seed_from_u64(3);
    let size = ImageSize {
        width: 40,
        height: 30,
    };
    let image = random_image(&mut rng, size, 4);
    let mut labels = Image::<u32, 1>::from_size_val(size, 0)?;

    let count = label_image(&image, &mut labels, Connectivity::Eight)?;

    // the first occurrence of each label appears in increasing order: 1, 2, ..., count
    let mut next = 1;
    for &label in labels.as_slice() {
        assert!(label >= 1 && label as usize <= count);
        if label == next {
            next += 1;
        } else {
            assert!(label < next);
        }
    }
    assert_eq!(next as usize, count + 1);
    Ok(())
}

#[test]
fn edge_image_matches_definition() -> Result<(), RegionError> {
    let mut rng = StdRng::seed_from_u64(11);

    for (width, height) in SIZES {
        let size = ImageSize { width, height };
        let image = random_image(&mut rng, size, 3);
        let mut labels = Image::<u32, 1>::from_size_val(size, 0)?;
        label_image(&image, &mut labels, Connectivity::Four)?;

        let mut edges = Image::<u8, 1>::from_size_val(size, 1)?;
        region_image_to_edge_image(&labels, &mut edges, 0)?;

        let l = labels.as_slice();
        for y in 0..height {
            for x in 0..width {
                let label = l[y * width + x];
                let right = x + 1 < width && l[y * width + x + 1] != label;
                let bottom = y + 1 < height && l[(y + 1) * width + x] != label;
                let expected = if right || bottom { 0 } else { 1 };
                assert_eq!(edges.as_slice()[y * width + x], expected, "at ({x}, {y})");
            }
        }
    }
    Ok(())
}

#[test]
fn cell_grid_matches_definition() -> Result<(), RegionError> {
    let mut rng = StdRng::seed_from_u64(5);
    const MARKER: u32 = 0;

    for (width, height) in SIZES {
        let size = ImageSize { width, height };
        let image = random_image(&mut rng, size, 3);
        let mut labels = Image::<u32, 1>::from_size_val(size, 0)?;
        label_image(&image, &mut labels, Connectivity::Eight)?;

        let grid_size = cell_grid_size(size);
        let mut cells = Image::<u32, 1>::from_size_val(grid_size, u32::MAX)?;
        region_image_to_cell_grid_image(&labels, &mut cells, MARKER)?;

        let l = labels.as_slice();
        let c = cells.as_slice();
        let cw = grid_size.width;

        // every cell is written
        assert!(c.iter().all(|&v| v != u32::MAX));

        for y in 0..height {
            for x in 0..width {
                let label = l[y * width + x];
                // 2-cells
                assert_eq!(c[2 * y * cw + 2 * x], label);
                // 1-cells
                if x + 1 < width {
                    let right = l[y * width + x + 1];
                    let expected = if right == label { label } else { MARKER };
                    assert_eq!(c[2 * y * cw + 2 * x + 1], expected);
                }
                if y + 1 < height {
                    let bottom = l[(y + 1) * width + x];
                    let expected = if bottom == label { label } else { MARKER };
                    assert_eq!(c[(2 * y + 1) * cw + 2 * x], expected);
                }
                // 0-cells
                if x + 1 < width && y + 1 < height {
                    let cell = (2 * y + 1) * cw + 2 * x + 1;
                    let touches_edge = [cell + 1, cell - cw, cell - 1, cell + cw]
                        .iter()
                        .any(|&n| c[n] == MARKER);
                    let expected = if touches_edge { MARKER } else { label };
                    assert_eq!(c[cell], expected);
                }
            }
        }
    }
    Ok(())
}
