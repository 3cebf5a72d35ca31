use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dct_diagrams::block::{zero_center, SAMPLE_PIXEL_BLOCK};
use dct_diagrams::dct::Dct2d;

fn dct_round_trip_benchmark(c: &mut Criterion) {
    let dct = Dct2d::new();
    let centered = zero_center(&SAMPLE_PIXEL_BLOCK);
    c.bench_function("dct round trip", |b| {
        b.iter_batched_ref(
            || centered,
            |block| {
                let freq = dct.spatial_to_freq(block);
                dct.freq_to_spatial(&freq)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = dct_round_trip_benchmark
}
criterion_main!(benches);
