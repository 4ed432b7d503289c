//! Terminal output for the CLI.
//!
//! Rendered HTML and JSON results go to stdout; status messages go to
//! stderr so that `storefront render product 1 > page.html` stays clean.
//! Human-oriented messages are suppressed in JSON mode.

use console::{style, StyledObject};

#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn status(&self, marker: StyledObject<&str>, msg: &str) {
        if !self.json {
            eprintln!("{} {}", marker, msg);
        }
    }

    /// Informational line on stdout, part of a command's report.
    pub fn info(&self, msg: &str) {
        if !self.json {
            println!("{}", msg);
        }
    }

    pub fn success(&self, msg: &str) {
        self.status(style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        self.status(style("⚠").yellow(), msg);
    }

    /// Errors are printed in JSON mode too, as `{"error": ..}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.status(style("→").dim(), &style(msg).dim().to_string());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// One left-aligned row; columns are padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let row: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, &width)| format!("{:<width$}", col))
            .collect();
        println!("  {}", row.join("  ").trim_end());
    }

    /// Pretty JSON on stdout, whatever the mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to serialize output: {}", e)),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Byte count for humans, e.g. `"12.34 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["B", "KB", "MB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }
}
