//! Building packets with the wddx! macro.
//!
//! Run with: cargo run --example macro

use serde_wddx::{wddx, Converter, Value, WddxOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let blob = Value::binary(*b"as");

    let data = wddx!({
        "a": [null, true, 1.8, 1, "1", "2023-10-26 14:30:00-05:00", blob],
        "c": null,
        "d": 1
    });

    let converter = Converter::with_options(data, WddxOptions::new().with_force_type(true))?;
    println!("{}", converter.serialize()?);

    Ok(())
}
