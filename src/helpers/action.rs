//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and the actions they dispatch.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Ticker table actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum TableAction {
    /// Retry a failed ticker load
    Reload,
    /// Show or hide the Symbol and Price Change columns
    ToggleColumns,
    /// Export the current view as CSV
    Export,
    /// Go to the next page
    NextPage,
    /// Go to the previous page
    PreviousPage,
}

/// Display name of one keystroke part
fn key_symbol(part: &str) -> String {
    #[cfg(target_os = "macos")]
    let modifier = match part {
        "secondary" | "cmd" => Some("⌘"),
        "ctrl" => Some("⌃"),
        "alt" => Some("⌥"),
        "shift" => Some("⇧"),
        _ => None,
    };
    #[cfg(not(target_os = "macos"))]
    let modifier = match part {
        "secondary" | "ctrl" | "cmd" => Some("Ctrl"),
        "alt" => Some("Alt"),
        "shift" => Some("Shift"),
        _ => None,
    };

    match (modifier, part) {
        (Some(symbol), _) => symbol.to_string(),
        (None, "left") => "←".to_string(),
        (None, "right") => "→".to_string(),
        (None, "escape") => "Esc".to_string(),
        (None, key) => key.to_uppercase(),
    }
}

/// Convert a keystroke string such as `"secondary-e"` to display form
///
/// macOS uses symbols joined without separator (`⌘E`), other platforms
/// spell modifiers out (`Ctrl+E`).
pub fn humanize_keystroke(keystroke: &str) -> String {
    let separator = if cfg!(target_os = "macos") { "" } else { "+" };
    keystroke
        .split('-')
        .map(key_symbol)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Table
        KeyBinding::new("secondary-r", TableAction::Reload, None),
        KeyBinding::new("secondary-t", TableAction::ToggleColumns, None),
        KeyBinding::new("secondary-e", TableAction::Export, None),
        KeyBinding::new("alt-right", TableAction::NextPage, None),
        KeyBinding::new("alt-left", TableAction::PreviousPage, None),
    ]
}
