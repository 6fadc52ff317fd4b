//! Demo: Functional Interfaces
//!
//! Run with: cargo run --bin functional_interfaces

use feature_snippets::{functional, DemoConfig};
use std::io::{self, Write};

fn main() {
    DemoConfig::from_env().install();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = functional::write_report(&mut out).and_then(|()| out.flush()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
