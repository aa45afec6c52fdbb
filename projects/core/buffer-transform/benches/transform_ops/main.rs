use buffer_transform::{
    BitwiseMode, BitwiseTransformer, ByteTransformer, NegateTransformer, ReverseTransformer,
    SortTransformer,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Byte Buffer Transforms");

    // 1 MiB of deterministic test data
    let size = 1048576;
    let input: Vec<u8> = (0..size).map(|i| (i * 131 + 17) as u8).collect();
    let mask: Vec<u8> = (0..size).map(|i| (i * 7 + 3) as u8).collect();

    group.throughput(criterion::Throughput::Bytes(size as u64));

    let xor = BitwiseTransformer::new(mask, BitwiseMode::Xor);
    group.bench_function("bitwise_xor_owned", |b| {
        b.iter(|| xor.transform_owned(black_box(input.clone())).unwrap())
    });

    group.bench_function("negate_owned", |b| {
        b.iter(|| NegateTransformer.transform_owned(black_box(input.clone())).unwrap())
    });

    group.bench_function("reverse_owned", |b| {
        b.iter(|| ReverseTransformer.transform_owned(black_box(input.clone())).unwrap())
    });

    group.bench_function("sort_natural_owned", |b| {
        b.iter(|| SortTransformer::new().transform_owned(black_box(input.clone())).unwrap())
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
