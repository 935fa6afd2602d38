use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use labelkit_image::{Image, ImageSize};
use labelkit_imgproc::boundary::{
    cell_grid_size, region_image_to_cell_grid_image, region_image_to_edge_image,
};
use labelkit_imgproc::label::{label_image, Connectivity};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_label_image(size: ImageSize) -> Image<u32, 1> {
    let mut rng = StdRng::seed_from_u64(0);
    let data = (0..size.area()).map(|_| rng.random_range(0..3u8)).collect();
    let image = Image::<u8, 1>::new(size, data).unwrap();

    let mut labels = Image::<u32, 1>::from_size_val(size, 0).unwrap();
    label_image(&image, &mut labels, Connectivity::Eight).unwrap();
    labels
}

fn bench_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("Boundary");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let labels = random_label_image(image_size);

        let edges = Image::<u32, 1>::from_size_val(image_size, 1).unwrap();
        group.bench_with_input(
            BenchmarkId::new("edge_image", &parameter_string),
            &(&labels, &edges),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| region_image_to_edge_image(black_box(src), black_box(&mut dst), 0))
            },
        );

        let cells = Image::<u32, 1>::from_size_val(cell_grid_size(image_size), 0).unwrap();
        group.bench_with_input(
            BenchmarkId::new("cell_grid_image", &parameter_string),
            &(&labels, &cells),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| region_image_to_cell_grid_image(black_box(src), black_box(&mut dst), 0))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_boundary);
criterion_main!(benches);
