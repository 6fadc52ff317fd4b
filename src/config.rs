//! Environment-driven settings shared by every demo binary.
//!
//! - `NO_COLOR`: when set (to anything), headings and error lines are printed
//!   without ANSI colors. Colors are also dropped when stdout is not a
//!   terminal.
//! - `SNIPPETS_LOG`: a `tracing` filter directive such as `debug` or
//!   `feature_snippets::shapes=trace`. Defaults to `warn`.
//!
//! Log output goes to stderr so the stdout transcript stays unchanged.

use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

pub const NO_COLOR_VAR: &str = "NO_COLOR";
pub const LOG_FILTER_VAR: &str = "SNIPPETS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub color: bool,
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key).map(lossy))
    }

    /// Builds the config from an arbitrary key lookup, so tests never have to
    /// mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let color = lookup(NO_COLOR_VAR).is_none();
        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self { color, log_filter }
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }

    /// Applies the color setting and installs the stderr subscriber.
    /// Calling it twice keeps the first subscriber.
    pub fn install(&self) {
        self.install_for(io::stdout().is_terminal());
    }

    /// Colors are only emitted when enabled and stdout is a terminal, so
    /// piped or captured transcripts stay plain.
    pub fn install_for(&self, stdout_is_terminal: bool) {
        colored::control::set_override(self.color && stdout_is_terminal);

        let installed = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();

        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}

// A non-UTF-8 value still counts as set.
fn lossy(value: OsString) -> String {
    value.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = DemoConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, DemoConfig::default());
        assert!(config.color);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_no_color_disables_color() {
        let config = DemoConfig::from_lookup(lookup_from(&[("NO_COLOR", "1")]));
        assert!(!config.color);
    }

    #[test]
    fn test_no_color_present_but_empty_still_disables() {
        let config = DemoConfig::from_lookup(lookup_from(&[("NO_COLOR", "")]));
        assert!(!config.color);
    }

    #[test]
    fn test_log_filter_from_variable() {
        let config = DemoConfig::from_lookup(lookup_from(&[("SNIPPETS_LOG", " debug ")]));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = DemoConfig::from_lookup(lookup_from(&[("SNIPPETS_LOG", "   ")]));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_env_filter_accepts_directive() {
        let config = DemoConfig {
            color: false,
            log_filter: "feature_snippets::shapes=trace".to_string(),
        };
        assert!(config.env_filter().to_string().contains("trace"));
    }

    #[test]
    fn test_install_off_terminal_keeps_transcript_plain() {
        DemoConfig::default().install_for(false);
        let mut buffer = Vec::new();
        crate::optional::write_report(&mut buffer).unwrap();
        crate::shapes::write_report(&mut buffer).unwrap();
        assert!(!buffer.contains(&0x1b));
    }

    #[test]
    fn test_no_color_wins_on_terminal() {
        let config = DemoConfig::from_lookup(lookup_from(&[("NO_COLOR", "1")]));
        config.install_for(true);
        let mut buffer = Vec::new();
        crate::functional::write_report(&mut buffer).unwrap();
        assert!(!buffer.contains(&0x1b));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_is_still_present() {
        use std::os::unix::ffi::OsStringExt;
        let raw = OsString::from_vec(vec![0x66, 0xff, 0x6f]);
        let config = DemoConfig::from_lookup(|key| (key == NO_COLOR_VAR).then(|| lossy(raw.clone())));
        assert!(!config.color);
    }
}
