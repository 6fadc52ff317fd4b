//! Demo: Sealed Shapes
//!
//! Run with: cargo run --bin sealed_shapes

use feature_snippets::{shapes, DemoConfig};
use std::io::{self, Write};

fn main() {
    DemoConfig::from_env().install();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = shapes::write_report(&mut out).and_then(|()| out.flush()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
