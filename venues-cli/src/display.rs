//! Terminal rendering helpers shared by the commands.

use colored::{Color, ColoredString, Colorize};
use minions_entity::Minion;
use minions_fields::{FieldKind, TypeRegistry};
use serde_json::Value;

/// Icon shown for entities whose type is not registered
pub const UNKNOWN_ICON: &str = "?";

/// Widest bar drawn by `stats`
pub const MAX_BAR_WIDTH: usize = 30;

/// Display color for each field kind.
pub fn kind_color(kind: FieldKind) -> Color {
    match kind {
        FieldKind::String => Color::Green,
        FieldKind::Number => Color::Yellow,
        FieldKind::Boolean => Color::Blue,
        FieldKind::Select => Color::Magenta,
    }
}

pub fn colored_kind(kind: FieldKind) -> ColoredString {
    kind.as_str().color(kind_color(kind))
}

/// Render a JSON value the way a user typed it: strings bare, everything else as JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Icon and slug for an entity's type, falling back to the raw type id.
pub fn type_label<'a>(registry: &'a TypeRegistry, minion: &'a Minion) -> (&'a str, &'a str) {
    match registry.get(&minion.minion_type_id) {
        Some(t) => (t.icon.as_str(), t.slug.as_str()),
        None => (UNKNOWN_ICON, minion.minion_type_id.as_str()),
    }
}

/// Two-line summary used by `list` and `search`.
pub fn summary_lines(registry: &TypeRegistry, minion: &Minion) -> [String; 2] {
    let (icon, slug) = type_label(registry, minion);
    let status = minion
        .status
        .map(|s| format!(" {}", format!("[{s}]").dimmed()))
        .unwrap_or_default();
    [
        format!("  {}  {}{}", icon, minion.title.bold(), status),
        format!("     {} {}", minion.id.dimmed(), slug.dimmed()),
    ]
}

pub fn print_summary(registry: &TypeRegistry, minion: &Minion) {
    for line in summary_lines(registry, minion) {
        println!("{line}");
    }
}

/// Proportional bar for a count, capped at [`MAX_BAR_WIDTH`].
pub fn bar(count: usize) -> ColoredString {
    if count == 0 {
        "0".dimmed()
    } else {
        "█".repeat(count.min(MAX_BAR_WIDTH)).cyan()
    }
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
