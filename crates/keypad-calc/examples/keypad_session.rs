//! Keypad Session Demo
//!
//! Reads keypad tokens from stdin, one or more per line separated by
//! whitespace, and prints what the page would show after each line.
//! `wait <ms>` advances the clock so transient displays expire.
//!
//! Run with: echo "1 2 + 3 = wait 3000" | RUST_LOG=keypad_calc=debug cargo run --example keypad_session
//!
//! An optional first argument names a JSON configuration file.

use std::io::{self, BufRead};

use keypad_calc::config::CalculatorConfig;
use keypad_calc::wasm::WasmDriver;

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("keypad_calc=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn load_config() -> Result<CalculatorConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(CalculatorConfig::from_json(&std::fs::read_to_string(path)?)?),
        None => Ok(CalculatorConfig::default()),
    }
}

fn print_display(driver: &WasmDriver) {
    println!(
        "expression: {:<20} result: {:<12} easter: {}",
        driver.expression_text().unwrap_or_default(),
        driver.result_text().unwrap_or_default(),
        if driver.easter_shown() { "shown" } else { "hidden" },
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let mut driver = WasmDriver::with_config(load_config()?);
    print_display(&driver);

    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            if word == "wait" {
                let ms = words.next().unwrap_or("0").parse()?;
                driver.advance(ms);
            } else if !driver.click_token(word).is_handled() {
                eprintln!("ignored: {word}");
            }
        }
        print_display(&driver);
    }

    Ok(())
}
