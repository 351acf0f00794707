//! Inspecting how values are classified.
//!
//! Run with: cargo run --example dynamic_values

use serde_wddx::{wddx, Converter, Value, WddxOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let samples = vec![
        Value::from(true),
        Value::from(7),
        Value::from(1.8),
        Value::from("hello"),
        Value::from("2021-09-15T15:40:36.000Z"),
        Value::from("2021-09-15 15:40"),
        Value::binary(*b"test"),
    ];

    let forced = Converter::with_options(wddx!({ "k": 1 }), WddxOptions::new().with_force_type(true))?;
    let plain = Converter::new(wddx!({ "k": 1 }))?;

    println!("{:<30} {:<10} {:<10} text", "value", "forced", "plain");
    for value in &samples {
        let ty = forced.classify(value);
        println!(
            "{:<30} {:<10} {:<10} {}",
            format!("{:?}", value),
            ty,
            plain.classify(value),
            forced.render(value, ty)?
        );
    }

    Ok(())
}
