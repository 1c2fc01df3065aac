use ruleval::{ValidatorBuilder, Value};

fn main() {
    // Define rules
    let validator = ValidatorBuilder::new()
        .field("user.name", |f| f.required().string().min(3))
        .field("user.email", |f| f.required().email())
        .field("user.age", |f| f.number().nullable())
        .field("tags", |f| f.array().max(5))
        .rules("tags.*", ["string", "in:news,blog,docs"])
        .compile()
        .expect("failed to compile validator");

    println!("{validator}");

    // Validate some input
    let data = Value::object()
        .set("user.name", "Jo")
        .set("user.email", "jo@example")
        .set("tags", vec!["news", "video"]);

    match validator.validate(&data) {
        Ok(_) => println!("Input is valid."),
        Err(err) => {
            for (field, messages) in err.errors() {
                println!("{field}:");
                for message in messages {
                    println!("  - {message}");
                }
            }
        }
    }
}
