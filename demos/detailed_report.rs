use ruleval::{Validator, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ruleval=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let validator = Validator::create([
        ("order.id", vec!["required", "numeric"]),
        ("order.customer", vec!["required", "email"]),
        ("order.note", vec!["string", "max:140", "nullable"]),
        ("order.items", vec!["required", "array", "min:1"]),
        ("order.items.*.sku", vec!["required", "string"]),
        ("order.items.*.qty", vec!["required", "number"]),
    ])
    .expect("failed to compile validator");

    let data = Value::object()
        .set("order.id", "1042")
        .set("order.customer", "buyer@example.com")
        .set(
            "order.items",
            vec![
                Value::object().set("sku", "A-1").set("qty", 2_i64),
                Value::object().set("sku", "B-7").set("qty", 1.5_f64),
                Value::object().set("qty", 1_i64),
            ],
        );

    let report = validator.check(&data);

    println!("{report}");
    println!();
    println!("Checked paths: {:?}", report.checked());
    println!("Errors: {}", report.errors());
    println!("Duration: {:?}", report.duration());
}
