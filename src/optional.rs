//! Walkthrough of the `Option` API: construction, presence checks, default
//! substitution, conversion to an error, and the combinators.

use crate::error::MissingValue;
use crate::style;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

/// Turns an absent value into an error carrying `message`.
pub fn require<T>(value: Option<T>, message: &str) -> Result<T, MissingValue> {
    value.ok_or_else(|| {
        tracing::debug!(message, "required value is absent");
        MissingValue::new(message)
    })
}

/// Hash that stays the same across runs and platforms, unlike `RandomState`.
pub fn stable_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

fn from_nullable(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    tracing::info!("running optional values demo");

    let opt1: Option<String> = Some("Hasan".to_string());
    let opt2: Option<String> = from_nullable(None);
    let opt3: Option<String> = None;

    writeln!(out, "opt1 has value? {}", opt1.is_some())?;
    writeln!(out, "opt2 is empty? {}", opt2.is_none())?;
    writeln!(out, "opt3 is empty? {}", opt3.is_none())?;

    if let Some(value) = &opt1 {
        writeln!(out, "Value in opt1: {value}")?;
        writeln!(out, "Uppercase: {}", value.to_uppercase())?;
    }

    writeln!(out, "opt2 orElse: {}", opt2.as_deref().unwrap_or("DefaultName"))?;
    writeln!(
        out,
        "opt2 orElseGet: {}",
        opt2.clone().unwrap_or_else(|| "GeneratedName".to_string())
    )?;

    if let Err(err) = require(opt2.clone(), "Value is missing!") {
        writeln!(out, "{}", style::failure(&format!("Exception: {err}")))?;
    }

    if let Some(value) = opt1.as_deref().filter(|name| name.starts_with('H')) {
        writeln!(out, "Starts with H: {value}")?;
    }

    let length_opt = opt1.as_ref().map(|name| name.chars().count());
    writeln!(out, "Length of opt1 value: {}", length_opt.unwrap_or(0))?;

    let nested = Some("Hello");
    let length_flat = nested.and_then(|v| Some(v.chars().count()));
    if let Some(len) = length_flat {
        writeln!(out, "FlatMap result: {len}")?;
    }

    writeln!(
        out,
        "opt1 equals Some(\"Hasan\")? {}",
        opt1.as_deref() == Some("Hasan")
    )?;
    writeln!(out, "HashCode of opt1: {}", stable_hash(&opt1))?;
    writeln!(out, "opt1 toString: {:?}", opt1.as_deref())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_or_substitutes_only_when_empty() {
        assert_eq!(Some("x").unwrap_or("y"), "x");
        assert_eq!(None.unwrap_or("y"), "y");
    }

    #[test]
    fn test_unwrap_or_else_is_lazy() {
        let mut called = false;
        let value = Some(1).unwrap_or_else(|| {
            called = true;
            0
        });
        assert_eq!(value, 1);
        assert!(!called);
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require(Some(3), "missing"), Ok(3));
    }

    #[test]
    fn test_require_absent() {
        let err = require::<i32>(None, "Value is missing!").unwrap_err();
        assert_eq!(err.to_string(), "Value is missing!");
    }

    #[test]
    fn test_stable_hash_is_deterministic() {
        let a = Some("Hasan".to_string());
        let b = Some("Hasan".to_string());
        assert_eq!(stable_hash(&a), stable_hash(&b));
        assert_ne!(stable_hash(&a), stable_hash(&None::<String>));
    }

    #[test]
    fn test_report_transcript() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        write_report(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        for expected in [
            "opt1 has value? true",
            "opt2 is empty? true",
            "Value in opt1: Hasan",
            "Uppercase: HASAN",
            "opt2 orElse: DefaultName",
            "opt2 orElseGet: GeneratedName",
            "Exception: Value is missing!",
            "Starts with H: Hasan",
            "Length of opt1 value: 5",
            "FlatMap result: 5",
            "opt1 equals Some(\"Hasan\")? true",
            "opt1 toString: Some(\"Hasan\")",
        ] {
            assert!(text.contains(expected), "missing line: {expected}");
        }

        let hash = stable_hash(&Some("Hasan".to_string()));
        assert!(text.contains(&format!("HashCode of opt1: {hash}")));
    }
}
