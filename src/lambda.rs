use std::io::{self, Write};

pub const NAMES: [&str; 3] = ["Hasan", "Amir", "Akram"];

pub fn uppercase_all(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_uppercase()).collect()
}

pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    tracing::info!(count = NAMES.len(), "running lambda demo");

    uppercase_all(&NAMES)
        .iter()
        .try_for_each(|name| writeln!(out, "{name}"))
}
