use ruleval::{Validator, Value};

fn main() {
    let validator = Validator::from_file("demos/signup.rules").expect("failed to load rules");

    println!("{validator}");
    for path in validator.fields() {
        if let Some(rules) = validator.rules_for(path) {
            println!("  {path}: {rules}");
        }
    }

    let data = Value::object()
        .set("user.name", "Alice")
        .set("user.email", "alice@example.com")
        .set("newsletter", "yes")
        .set("tags", vec!["news", "docs"]);

    match validator.validate(&data) {
        Ok(_) => println!("Input is valid."),
        Err(err) => println!("{err}"),
    }
}
