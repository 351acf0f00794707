//! Serializing a derived struct to WDDX.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_wddx::{to_string, to_string_with_options, WddxOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    last_login: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let user = User {
        id: 42,
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        last_login: Some("2023-10-26 14:30:00-05:00".to_string()),
    };

    // Default: every scalar is a <string>
    println!("Plain:\n{}\n", to_string(&user)?);

    // Forced typing picks number/dateTime/... from the values
    let typed = to_string_with_options(&user, WddxOptions::new().with_force_type(true))?;
    println!("Typed:\n{}", typed);

    Ok(())
}
