//! Shared CLI output helpers for consistent user-facing text.
//!
//! Status lines carry a colored symbol; tables and notes are indented under
//! their section header.

use std::fmt::Display;
use std::io::{self, Write};

use owo_colors::OwoColorize;

/// Print a section header.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<20} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a note.
pub fn note(message: &str) {
    println!("  {}", message.dimmed());
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    format!("{}", value.to_string().cyan())
}

/// Format a dimmed value.
pub fn muted(value: impl Display) -> String {
    format!("{}", value.to_string().dimmed())
}

/// Print the input prompt without a newline.
pub fn prompt() {
    print!("{} ", ">".cyan());
    let _ = io::stdout().flush();
}
