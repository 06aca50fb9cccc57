use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radix58::BITCOIN;

fn bench_decode_32(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_32");
    let encoded = "2gPihUTjt3FJqf1VpidgrY5cZ6PuyMccGVwQHRfjMPZG";

    group.bench_function("decode_bs58", |b| {
        b.iter(|| bs58::decode(black_box(encoded)).into_vec().unwrap())
    });
    group.bench_function("decode_radix58", |b| {
        b.iter(|| radix58::decode(&BITCOIN, black_box(encoded)).unwrap())
    });
    group.bench_function("decode_radix58_generic", |b| {
        b.iter(|| radix58::decode_generic_pub(&BITCOIN, black_box(encoded)).unwrap())
    });
    group.finish();
}

fn bench_decode_64(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_64");
    let encoded =
        "DyXZZCSiBREJ8YZ5cULd7PVdKpbkhHvHJ7otbJmLJajJtRsyq1irMMqKimYeKvRmZ8Sc2qWLhKjYR4ekM8RSzkV";

    group.bench_function("decode_bs58", |b| {
        b.iter(|| bs58::decode(black_box(encoded)).into_vec().unwrap())
    });
    group.bench_function("decode_radix58", |b| {
        b.iter(|| radix58::decode(&BITCOIN, black_box(encoded)).unwrap())
    });
    group.bench_function("decode_radix58_generic", |b| {
        b.iter(|| radix58::decode_generic_pub(&BITCOIN, black_box(encoded)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_decode_32, bench_decode_64);
criterion_main!(benches);
