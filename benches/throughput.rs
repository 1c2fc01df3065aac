use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use ruleval::{Validator, ValidatorBuilder, Value};

fn build_shared_validator() -> (Arc<Validator>, Arc<Value>) {
    let mut builder = ValidatorBuilder::new();
    let mut data = Value::object();
    let n = 20;

    for i in 0..n {
        let path = format!("f{i}");
        builder = builder.field(&path, |f| f.required().numeric());
        data.insert(&path, Value::from(i));
    }
    builder = builder.field("tags", |f| f.array().max(8)).rules("tags.*", ["string"]);
    let data = data.set("tags", vec!["a", "b", "c", "d"]);

    (Arc::new(builder.compile().unwrap()), Arc::new(data))
}

fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];

    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(5));

    for &threads in &thread_counts {
        let (validator, data) = build_shared_validator();

        group.bench_function(&format!("{threads}_threads"), |b| {
            b.iter_custom(|iters| {
                let per_thread = iters / threads as u64;
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let v = Arc::clone(&validator);
                        let d = Arc::clone(&data);
                        thread::spawn(move || {
                            let start = Instant::now();
                            for _ in 0..per_thread {
                                let _ = v.validate(&*d);
                            }
                            start.elapsed()
                        })
                    })
                    .collect();

                let mut max_elapsed = Duration::ZERO;
                for h in handles {
                    let elapsed = h.join().unwrap();
                    if elapsed > max_elapsed {
                        max_elapsed = elapsed;
                    }
                }
                max_elapsed
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
