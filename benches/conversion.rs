use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lst_format::{
    ArrayFormatManager, BooleanManager, FormatLibrary, FormatManager, Number, NumberManager,
    StringManager,
};
use std::sync::Arc;

fn numbers() -> ArrayFormatManager<Number> {
    ArrayFormatManager::<Number>::new(Arc::new(NumberManager), ',').unwrap()
}

fn number_text(size: u32) -> String {
    (0..size)
        .map(|i| {
            if i % 3 == 0 {
                format!("{}.5", i)
            } else {
                i.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn benchmark_leaf_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_convert");

    group.bench_function("boolean", |b| {
        b.iter(|| BooleanManager.convert(black_box("FALSE")))
    });

    group.bench_function("string", |b| {
        b.iter(|| StringManager.convert(black_box("Longsword")))
    });

    group.bench_function("integer", |b| {
        b.iter(|| NumberManager.convert(black_box("-12345")))
    });

    group.bench_function("float", |b| {
        b.iter(|| NumberManager.convert(black_box("1234.5678")))
    });

    group.finish();
}

fn benchmark_leaf_unconvert(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_unconvert");

    let integer = Number::Integer(-12345);
    let float = Number::Float(1234.5678);

    group.bench_function("integer", |b| {
        b.iter(|| NumberManager.unconvert(black_box(&integer)))
    });

    group.bench_function("float", |b| {
        b.iter(|| NumberManager.unconvert(black_box(&float)))
    });

    group.finish();
}

fn benchmark_array_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_convert");
    let manager = numbers();

    for size in [10, 50, 100, 500].iter() {
        let text = number_text(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| manager.convert(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_array_unconvert(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_unconvert");
    let manager = numbers();

    for size in [10, 50, 100, 500].iter() {
        let value = manager.convert(&number_text(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| manager.unconvert(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_array_container(c: &mut Criterion) {
    let manager = numbers();
    let text = number_text(100);
    let container = manager.convert_object_container(&text).unwrap();
    let candidate = vec![Number::Integer(98), Number::Float(99.5)];

    let mut group = c.benchmark_group("array_container");

    group.bench_function("convert", |b| {
        b.iter(|| manager.convert_object_container(black_box(&text)))
    });

    group.bench_function("contained_objects", |b| {
        b.iter(|| container.contained_objects())
    });

    group.bench_function("contains", |b| {
        b.iter(|| container.contains(black_box(&candidate)))
    });

    group.finish();
}

fn benchmark_nested_array(c: &mut Criterion) {
    let inner = numbers();
    let outer = ArrayFormatManager::<Vec<Number>>::new(Arc::new(inner), '|').unwrap();
    let text = (0..20)
        .map(|_| number_text(20))
        .collect::<Vec<_>>()
        .join("|");
    let value = outer.convert(&text).unwrap();

    c.bench_function("nested_convert", |b| {
        b.iter(|| outer.convert(black_box(&text)))
    });

    c.bench_function("nested_unconvert", |b| {
        b.iter(|| outer.unconvert(black_box(&value)))
    });
}

fn benchmark_library_lookup(c: &mut Criterion) {
    let library = FormatLibrary::default();

    c.bench_function("library_lookup_array", |b| {
        b.iter(|| library.manager::<Vec<Number>>(black_box("ARRAY[NUMBER]")))
    });
}

criterion_group!(
    benches,
    benchmark_leaf_convert,
    benchmark_leaf_unconvert,
    benchmark_array_convert,
    benchmark_array_unconvert,
    benchmark_array_container,
    benchmark_nested_array,
    benchmark_library_lookup
);
criterion_main!(benches);
