//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::TickerGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

fn locale(cx: &App) -> String {
    cx.global::<TickerGlobalStore>().read(cx).locale().to_string()
}

/// Get translated string from "table" namespace
pub fn i18n_table(cx: &App, key: &str) -> SharedString {
    t!(format!("table.{key}"), locale = &locale(cx)).into()
}

/// Get translated string from "status" namespace
pub fn i18n_status(cx: &App, key: &str) -> SharedString {
    t!(format!("status.{key}"), locale = &locale(cx)).into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `exported: "Exported %{rows} rows to %{path}"`
/// i18n_format(cx, "status.exported", &[("rows", "42"), ("path", "/tmp/a.csv")])
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut result = t!(key, locale = &locale(cx)).to_string();

    for (name, value) in args {
        result = result.replace(&format!("%{{{name}}}"), value);
    }

    result.into()
}
