use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pictor_image::Image;
use pictor_imgproc::filter::convolve;
use pictor_imgproc::filter::kernels::FilterKind;

fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Convolve3x3");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for num_workers in [1, 2, 4, 8].iter() {
            group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

            let parameter_string = format!("{}x{}x{}", width, height, num_workers);

            // input image
            let image_data = vec![128u8; width * height * 3];
            let image_size = [*width, *height].into();
            let image = Image::<u8, 3>::new(image_size, image_data).unwrap();

            // output image
            let output = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();

            let kernel = FilterKind::Gaussian.kernel();

            group.bench_with_input(
                BenchmarkId::new("convolve_rgb8", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(convolve(src, &mut dst, &kernel, *num_workers)))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_convolve);
criterion_main!(benches);
