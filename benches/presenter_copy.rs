use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use fractal_viewer::SharedPixelBuffer;
use fractal_viewer::adapters::pixel_format::copy_packed_to_rgba;

const WINDOW_SIZE: u32 = 800;

fn bench_copy_packed_to_rgba(c: &mut Criterion) {
    let pixels = SharedPixelBuffer::new(WINDOW_SIZE, WINDOW_SIZE);
    for (index, cell) in pixels.cells().iter().enumerate() {
        cell.store(index as u32 & 0x00FF_FFFF, std::sync::atomic::Ordering::Relaxed);
    }
    let mut frame = vec![0u8; pixels.cells().len() * 4];

    let mut group = c.benchmark_group("presenter_copy");
    group.throughput(Throughput::Elements(pixels.cells().len() as u64));
    group.bench_function("copy_packed_to_rgba_800x800", |b| {
        b.iter(|| copy_packed_to_rgba(black_box(pixels.cells()), black_box(&mut frame)))
    });
    group.finish();
}

criterion_group!(benches, bench_copy_packed_to_rgba);
criterion_main!(benches);
