use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tagstore::{alternatives, VariantStorage};

type Owning = alternatives![u64, String, Vec<u8>, Box<u32>];
type Trivial = alternatives![u8, u32, u64, f64];

#[allow(dead_code)]
#[derive(Clone)]
enum Native {
    Number(u64),
    Text(String),
    Bytes(Vec<u8>),
    Boxed(Box<u32>),
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    let storage = VariantStorage::<Owning>::with(vec![7u8; 32]);
    group.bench_function("variant_storage_clone_last", |b| {
        b.iter(|| black_box(black_box(&storage).clone()));
    });

    let native = Native::Bytes(vec![7u8; 32]);
    group.bench_function("native_enum_clone", |b| {
        b.iter(|| black_box(black_box(&native).clone()));
    });

    let trivial = VariantStorage::<Trivial>::with(1.5f64);
    group.bench_function("trivial_bitwise_copy", |b| {
        b.iter(|| black_box(black_box(&trivial).bitwise_copy()));
    });

    group.finish();
}

fn bench_teardown(c: &mut Criterion) {
    let mut group = c.benchmark_group("teardown");

    group.bench_function("dispatching_drop", |b| {
        b.iter_batched(
            || VariantStorage::<Owning>::with(Box::new(3u32)),
            drop,
            BatchSize::SmallInput,
        );
    });

    group.bench_function("native_enum_drop", |b| {
        b.iter_batched(|| Native::Boxed(Box::new(3u32)), drop, BatchSize::SmallInput);
    });

    group.bench_function("all_trivial_drop", |b| {
        b.iter_batched(
            || VariantStorage::<Trivial>::with(3u64),
            drop,
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("move");

    group.bench_function("take", |b| {
        b.iter_batched(
            || VariantStorage::<Owning>::with(String::from("payload")),
            |mut storage| black_box(storage.take()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("assign_from_same_alternative", |b| {
        b.iter_batched(
            || {
                (
                    VariantStorage::<Owning>::with(String::from("old")),
                    VariantStorage::<Owning>::with(String::from("new")),
                )
            },
            |(mut dst, mut src)| {
                dst.assign_from(&mut src);
                black_box(dst)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("native_enum_replace", |b| {
        b.iter_batched(
            || (Native::Text(String::from("old")), Native::Text(String::from("new"))),
            |(mut dst, src)| {
                drop(core::mem::replace(&mut dst, src));
                black_box(dst)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_clone, bench_teardown, bench_move);
criterion_main!(benches);
