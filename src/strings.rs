//! Index-driven string reversal.
//!
//! Works on `char`s, not bytes, so multi-byte text reverses cleanly.

use std::io::{self, Write};

pub fn reverse_with_indices(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    (0..len).map(|i| chars[len - 1 - i]).collect()
}

/// Reverses each half on its own and joins them: `"amir"` becomes `"mari"`.
/// With an odd length the extra character belongs to the second half.
pub fn reverse_halves(input: &str) -> String {
    let mid = input.chars().count() / 2;
    let split = input
        .char_indices()
        .nth(mid)
        .map_or(input.len(), |(idx, _)| idx);
    let (first, second) = input.split_at(split);

    let mut result = reverse_with_indices(first);
    result.push_str(&reverse_with_indices(second));
    result
}

pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    tracing::info!("running string reversal demo");
    writeln!(out, "{}", reverse_halves("amir"))
}
