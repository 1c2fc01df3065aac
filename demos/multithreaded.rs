use std::sync::Arc;
use std::thread;

use ruleval::{Validator, Value};

fn main() {
    let validator = Arc::new(
        Validator::create([
            ("user.name", vec!["required", "string", "min:3"]),
            ("user.age", vec!["required", "number"]),
        ])
        .expect("failed to compile validator"),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let v = Arc::clone(&validator);
            thread::spawn(move || {
                let name = "Alice".chars().take(i + 1).collect::<String>();
                let data = Value::object()
                    .set("user.name", name.as_str())
                    .set("user.age", 30_i64);
                let outcome = match v.validate(&data) {
                    Ok(_) => "valid".to_owned(),
                    Err(err) => err.to_string(),
                };
                (name, outcome)
            })
        })
        .collect();

    for handle in handles {
        let (name, outcome) = handle.join().expect("thread panicked");
        println!("name={name:<6} -> {outcome}");
    }
}
