use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Global output format setting
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

/// Print a table or JSON depending on output mode
pub fn print_table<T, R, F>(items: &[T], to_row: F)
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }
}

/// Print a message (prints a simple object in JSON mode)
pub fn print_message(message: &str) {
    if is_json_output() {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{message}");
    }
}

/// Format a project creation timestamp as `05-Jan-2024 10:00`.
///
/// The timestamp keeps its own offset; one without an offset is shown as
/// written. Unparseable input is cut to its first 19 characters and an
/// empty one renders as `N/A`.
pub fn format_created(iso: &str) -> String {
    use chrono::{DateTime, NaiveDateTime};

    const DISPLAY: &str = "%d-%b-%Y %H:%M";

    if iso.is_empty() {
        return "N/A".to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format(DISPLAY).to_string();
    }
    match NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format(DISPLAY).to_string(),
        Err(_) => iso.chars().take(19).collect(),
    }
}

/// `"1 project"`, `"3 projects"`
pub fn pluralize(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

/// Color a cluster lifecycle state for terminal tables
pub fn state_colored(state: &str) -> String {
    match state.to_ascii_uppercase().as_str() {
        "IDLE" => state.green().to_string(),
        "CREATING" | "UPDATING" | "REPAIRING" => state.yellow().to_string(),
        "DELETING" | "DELETED" => state.red().to_string(),
        _ => state.bright_black().to_string(),
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
