//! Configures the cleanup applied while assembling statement tables.

use serde_derive::Deserialize;

/// Phrases marking non-transactional rows. Matched case-sensitively, as
/// extracted.
pub const DEFAULT_BOILERPLATE_MARKERS: &[&str] = &[
    "Balance carried forward",
    "BALANCE CARRIED FORWARD",
    "balance carried forward",
    "Balance brought forward",
    "BALANCE BROUGHT FORWARD",
    "balance brought forward",
    "Start balance",
    "Start Balance",
    "START BALANCE",
    "start balance",
    "Continued",
    "continued",
    "CONTINUED",
];

/// Decorative list markers, checkbox glyphs and stray punctuation.
pub const DEFAULT_NOISE_SUBSTRINGS: &[&str] = &[
    "\u{2022}", // •
    "\u{25CF}", // ●
    "\u{25AA}", // ▪
    "\u{25A0}", // ■
    "\u{25A1}", // □
    "\u{2610}", // ☐
    "\u{2611}", // ☑
    "\u{2612}", // ☒
    "\u{2713}", // ✓
    "\u{2714}", // ✔
    "\u{F0B7}", // private-use bullet emitted by some PDF fonts
    "%",
    "|",
    "~",
];

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblyConfig {
    /// A row containing any of these is dropped.
    pub boilerplate_markers: Vec<String>,
    /// Removed from every cell.
    pub noise_substrings: Vec<String>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            boilerplate_markers: to_strings(DEFAULT_BOILERPLATE_MARKERS),
            noise_substrings: to_strings(DEFAULT_NOISE_SUBSTRINGS),
        }
    }
}

impl AssemblyConfig {
    /// Returns the first boilerplate marker found in `text`.
    pub fn find_marker(&self, text: &str) -> Option<&str> {
        self.boilerplate_markers
            .iter()
            .map(String::as_str)
            .find(|marker| !marker.is_empty() && text.contains(marker))
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
