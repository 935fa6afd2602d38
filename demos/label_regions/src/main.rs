use argh::FromArgs;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use labelkit::{
    image::{Image, ImageSize},
    imgproc::{
        boundary::{cell_grid_size, region_image_to_cell_grid_image, region_image_to_edge_image},
        label::{label_image_with_background, Connectivity},
    },
};

#[derive(FromArgs)]
/// Label the connected regions of a random binary image
struct Args {
    /// image width (default: 32)
    #[argh(option, short = 'x', default = "32")]
    width: usize,

    /// image height (default: 16)
    #[argh(option, short = 'y', default = "16")]
    height: usize,

    /// probability of a foreground pixel (default: 0.45)
    #[argh(option, short = 'p', default = "0.45")]
    density: f64,

    /// use 8-connectivity instead of 4-connectivity
    #[argh(switch, short = 'e')]
    eight: bool,

    /// random seed (default: 0)
    #[argh(option, short = 's', default = "0")]
    seed: u64,

    /// print the cell grid image instead of the edge image
    #[argh(switch, short = 'c')]
    cell_grid: bool,
}

const EDGE: u32 = u32::MAX;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if !(0.0..=1.0).contains(&args.density) {
        return Err(format!("density must be in [0, 1], got {}", args.density).into());
    }

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };

    // random binary image, 0 is background
    let mut rng = StdRng::seed_from_u64(args.seed);
    let data = (0..size.area())
        .map(|_| u8::from(rng.random_bool(args.density)))
        .collect();
    let image = Image::<u8, 1>::new(size, data)?;

    let connectivity = if args.eight {
        Connectivity::Eight
    } else {
        Connectivity::Four
    };

    let mut labels = Image::<u32, 1>::from_size_val(size, 0)?;
    let count = label_image_with_background(&image, &mut labels, connectivity, &0)?;
    log::info!("found {count} regions in a {size} image ({connectivity:?})");

    // region areas, index 0 is the background
    let mut areas = vec![0usize; count + 1];
    for &label in labels.as_slice() {
        areas[label as usize] += 1;
    }
    if let Some((largest, area)) = areas.iter().enumerate().skip(1).max_by_key(|(_, a)| **a) {
        println!("regions: {count}, largest: #{largest} with {area} pixels");
    } else {
        println!("regions: 0");
    }

    if args.cell_grid {
        let mut cells = Image::<u32, 1>::from_size_val(cell_grid_size(size), 0)?;
        region_image_to_cell_grid_image(&labels, &mut cells, EDGE)?;
        print_grid(&cells);
    } else {
        let mut edges = Image::<u32, 1>::from_size_val(size, 0)?;
        region_image_to_edge_image(&labels, &mut edges, EDGE)?;
        print_grid(&edges);
    }

    Ok(())
}

fn print_grid(grid: &Image<u32, 1>) {
    if grid.cols() == 0 {
        return;
    }
    for row in grid.as_slice().chunks_exact(grid.cols()) {
        let line = row
            .iter()
            .map(|&v| match v {
                EDGE => '#',
                0 => '.',
                _ => ' ',
            })
            .collect::<String>();
        println!("{line}");
    }
}
