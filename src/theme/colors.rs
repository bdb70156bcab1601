//! Palette shared by the stylesheet and the browser chrome.

use folio_core::Theme;

// === Dark (default) ===
pub const INK: &str = "#0e0e10";

// === Light ===
pub const PAPER: &str = "#f7f5f0";

/// `theme-color` meta value for the browser UI.
pub fn theme_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => INK,
        Theme::Light => PAPER,
    }
}
