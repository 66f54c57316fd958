use criterion::{criterion_group, criterion_main, Criterion};

use agora_jacobian::arithmetic::Point;
use agora_jacobian::curve::Secp256k1;

fn bench_point_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_ops");

    let generator = Point::<Secp256k1>::GENERATOR;
    let doubled = generator.double();

    group.bench_function("double", |b| b.iter(|| generator.double()));

    group.bench_function("generic_add", |b| b.iter(|| generator.generic_add(&doubled)));

    group.bench_function("into_affine", |b| b.iter(|| doubled.clone().into_affine()));

    group.finish();
}

criterion_group!(benches, bench_point_ops);
criterion_main!(benches);
