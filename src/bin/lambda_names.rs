//! Demo: Lambdas Over a List
//!
//! Run with: cargo run --bin lambda_names

use feature_snippets::{lambda, DemoConfig};
use std::io::{self, Write};

fn main() {
    DemoConfig::from_env().install();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = lambda::write_report(&mut out).and_then(|()| out.flush()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
