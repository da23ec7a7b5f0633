//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, matches
//! - Red: errors, missing values
//! - Yellow: warnings, differences, masked values
//! - Cyan: store names, secret names, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::{measure_text_width, pad_str, style, Alignment};
use std::fmt::Display;
use std::io::{self, Write as IoWrite};

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ no differences found`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ cannot list secrets in dev: permission denied`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ 1 of 3 secrets could not be retrieved`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ check the store path or your access rights`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  Total secrets     12`
pub fn kv(label: &str, value: impl Display) {
    let label = pad_str(label, 18, Alignment::Left, None);
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Format a key or store name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Format a placeholder shown instead of a value (red for missing, yellow
/// for masked).
pub fn marker(text: &str, missing: bool) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    if missing {
        style(text).red().to_string()
    } else {
        style(text).yellow().to_string()
    }
}

/// Start a progress line in the format `Label... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    if colors_enabled() {
        print!("{}... ", style(label).dim());
    } else {
        print!("{}... ", label);
    }
    let _ = io::stdout().flush();
}

/// Finish a progress line with success/failure indicator.
pub fn progress_done(success: bool) {
    let text = if success { "ok" } else { "failed" };
    if colors_enabled() {
        if success {
            println!("{}", style(text).green());
        } else {
            println!("{}", style(text).red());
        }
    } else {
        println!("{}", text);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Statistics
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}

/// Make a value printable on one table line.
pub fn single_line(value: &str) -> String {
    value.replace('\r', "\\r").replace('\n', "\\n")
}

/// A plain column-aligned table.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers.
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty.
    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Print the table under a section title.
    pub fn print(&self, title: &str) {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .chain(std::iter::once(&self.headers[i]))
                    .map(|c| measure_text_width(c))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        section(title);
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad_str(h, *w, Alignment::Left, None).into_owned())
            .collect();
        header_line(&header.join("  "));

        for row in &self.rows {
            let line: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    pad_str(cell, *w, Alignment::Left, None).into_owned()
                })
                .collect();
            println!("{}", line.join("  ").trim_end());
        }
    }
}

fn header_line(line: &str) {
    if colors_enabled() {
        println!("{}", style(line.trim_end()).bold());
    } else {
        println!("{}", line.trim_end());
    }
}
