use bbrender_engine::{NoopHost, Transformer, WidgetStateMap};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_flat_post(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let transformer = Transformer::default();
    let content = common::generate_post(100);
    group.bench_function("flat_post", |b| {
        b.iter(|| {
            let mut widgets = WidgetStateMap::new();
            let html = transformer.transform(
                std::hint::black_box(&content),
                &mut widgets,
                &mut NoopHost,
            );
            std::hint::black_box(html);
        });
    });

    group.finish();
}

fn bench_nested_boxes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let transformer = Transformer::default();
    let content = common::generate_nested_boxes(100);
    group.bench_function("nested_boxes", |b| {
        b.iter(|| {
            let mut widgets = WidgetStateMap::new();
            let html = transformer.transform(
                std::hint::black_box(&content),
                &mut widgets,
                &mut NoopHost,
            );
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_flat_post, bench_nested_boxes);
criterion_main!(benches);
