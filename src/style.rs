use colored::Colorize;

pub fn heading(title: &str) -> String {
    format!("=== {title} ===").cyan().bold().to_string()
}

pub fn arrow() -> String {
    "→".green().to_string()
}

pub fn failure(text: &str) -> String {
    text.red().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_keeps_title_text() {
        assert!(heading("Predicate Example").contains("=== Predicate Example ==="));
    }

    #[test]
    fn test_failure_keeps_text() {
        assert!(failure("boom").contains("boom"));
    }
}
