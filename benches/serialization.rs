use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_wddx::{to_string, to_string_with_options, Converter, Value, WddxMap, WddxOptions};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
    created: String,
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
        created: "2023-10-26 14:30:00-05:00".to_string(),
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_serialize_forced(c: &mut Criterion) {
    let user = sample_user();
    let options = WddxOptions::new().with_force_type(true);

    c.bench_function("serialize_forced_types", |b| {
        b.iter(|| to_string_with_options(black_box(&user), options.clone()))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let items: Vec<Value> = (0..*size)
            .map(|i| match i % 4 {
                0 => Value::from(i),
                1 => Value::from(f64::from(i) + 0.5),
                2 => Value::from(format!("item {}", i)),
                _ => Value::binary(format!("blob{}", i).into_bytes()),
            })
            .collect();
        let mut data = WddxMap::new();
        data.insert("items".to_string(), Value::Array(items));
        let converter =
            Converter::with_options(data, WddxOptions::new().with_force_type(true)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(&converter).serialize())
        });
    }
    group.finish();
}

fn benchmark_pretty(c: &mut Criterion) {
    let data: WddxMap = (0..100)
        .map(|i| (format!("key{}", i), Value::from(i)))
        .collect();
    let converter = Converter::with_options(data, WddxOptions::pretty()).unwrap();

    c.bench_function("serialize_pretty_100_vars", |b| {
        b.iter(|| black_box(&converter).serialize())
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_serialize_forced,
    benchmark_serialize_array,
    benchmark_pretty
);
criterion_main!(benches);
