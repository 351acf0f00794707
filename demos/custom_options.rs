//! Forced typing and pretty-printing.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_wddx::{to_string_pretty, to_string_with_options, WddxOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    retries: Vec<u32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        retries: vec![1, 2, 4],
    };

    println!("Pretty (4 spaces):");
    println!("{}\n", to_string_pretty(&config)?);

    println!("Pretty, typed, 2 spaces:");
    let options = WddxOptions::pretty().with_force_type(true).with_indent(2);
    println!("{}", to_string_with_options(&config, options)?);

    Ok(())
}
