//! Demo: Reversing String Halves
//!
//! Run with: cargo run --bin reverse_halves

use feature_snippets::{strings, DemoConfig};
use std::io::{self, Write};

fn main() {
    DemoConfig::from_env().install();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = strings::write_report(&mut out).and_then(|()| out.flush()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
