use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ruleval::{Validator, Value};

/// Build a validator with `n` plain fields (each `required | string | min:3`)
/// and matching valid input.
fn build_validator(n: usize) -> (Validator, Value) {
    let mut data = Value::object();
    let rules = (0..n).map(|i| {
        let path = format!("user.f{i}");
        data.insert(&path, Value::from("value"));
        (path, ["required", "string", "min:3"])
    });
    let validator = Validator::create(rules.collect::<Vec<_>>()).unwrap();
    (validator, data)
}

/// Build a validator with one wildcard entry and an array of `n` elements.
fn build_wildcard(n: usize) -> (Validator, Value) {
    let validator = Validator::create([
        ("items", vec!["array"]),
        ("items.*.id", vec!["required", "number"]),
        ("items.*.email", vec!["required", "email"]),
    ])
    .unwrap();

    let items: Vec<Value> = (0..n)
        .map(|i| {
            Value::object()
                .set("id", i64::try_from(i).unwrap_or(0))
                .set("email", format!("user{i}@example.com"))
        })
        .collect();
    (validator, Value::object().set("items", items))
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_validation");

    for &n in &[5, 20, 50] {
        let (validator, data) = build_validator(n);
        group.bench_function(&format!("{n}_fields_valid"), |b| {
            b.iter(|| validator.validate(black_box(&data)).is_ok());
        });

        let empty = Value::object();
        group.bench_function(&format!("{n}_fields_all_missing"), |b| {
            b.iter(|| validator.validate(black_box(&empty)).is_err());
        });
    }

    group.finish();
}

fn bench_wildcard(c: &mut Criterion) {
    let mut group = c.benchmark_group("wildcard_expansion");

    for &n in &[10, 100, 1000] {
        let (validator, data) = build_wildcard(n);
        group.bench_function(&format!("{n}_elements"), |b| {
            b.iter(|| validator.validate(black_box(&data)).is_ok());
        });
    }

    group.finish();
}

fn bench_compilation(c: &mut Criterion) {
    let mut group = c.benchmark_group("compilation");

    for &n in &[5, 20, 50] {
        group.bench_function(&format!("{n}_fields"), |b| {
            b.iter(|| {
                let rules = (0..n).map(|i| (format!("f{i}"), ["required", "string", "in:a,b,c"]));
                black_box(Validator::create(rules).unwrap())
            });
        });

        let dsl: String = (0..n)
            .map(|i| format!("f{i}: required | string | in:a,b,c\n"))
            .collect();
        group.bench_function(&format!("{n}_fields_dsl"), |b| {
            b.iter(|| black_box(Validator::from_dsl(black_box(&dsl)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate, bench_wildcard, bench_compilation);
criterion_main!(benches);
