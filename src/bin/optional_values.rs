//! Demo: Optional Values
//!
//! Run with: cargo run --bin optional_values

use feature_snippets::{optional, DemoConfig};
use std::io::{self, Write};

fn main() {
    DemoConfig::from_env().install();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = optional::write_report(&mut out).and_then(|()| out.flush()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
