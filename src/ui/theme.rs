//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML
//! files, plus utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! accent_fg = "#cba6f7"
//! field_focus_fg = "#1e1e2e"
//! field_focus_bg = "#f5c2e7"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zontacts::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! print!("{}", Theme::fg(&theme.colors.header_fg));
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Result, ZontactsError};

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g. `"#cdd6f4"`). The optional
/// header background defaults to `None`, letting themes opt out.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary card fields).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Error text color (inline validation, fetch errors).
    pub error_fg: String,

    /// Accent color (avatar glyphs, current page number).
    pub accent_fg: String,

    /// Focused form field foreground.
    pub field_focus_fg: String,
    /// Focused form field background.
    pub field_focus_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZontactsError::Theme`] if the file cannot be read or does not
    /// parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            ZontactsError::Theme(format!(
                "failed to read {}: {e}",
                path.as_ref().display()
            ))
        })?;

        toml::from_str(&contents)
            .map_err(|e| ZontactsError::Theme(format!("failed to parse theme: {e}")))
    }

    /// Returns the ANSI foreground escape sequence for a hex color.
    ///
    /// Unparseable colors fall back to the terminal default foreground.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::parse_hex(hex).map_or_else(
            || "\u{1b}[39m".to_string(),
            |(r, g, b)| format!("\u{1b}[38;2;{r};{g};{b}m"),
        )
    }

    /// Returns the ANSI background escape sequence for a hex color.
    ///
    /// Unparseable colors fall back to the terminal default background.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::parse_hex(hex).map_or_else(
            || "\u{1b}[49m".to_string(),
            |(r, g, b)| format!("\u{1b}[48;2;{r};{g};{b}m"),
        )
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Parses a `#rrggbb` hex string into RGB components.
    fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(
            Theme::from_name("catppuccin-mocha").unwrap().name,
            "catppuccin-mocha"
        );
        assert_eq!(
            Theme::from_name("catppuccin-latte").unwrap().name,
            "catppuccin-latte"
        );
    }

    #[test]
    fn unknown_theme_name_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn fg_converts_hex_to_truecolor_sequence() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("#000000"), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn malformed_hex_falls_back_to_terminal_default() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[39m");
        assert_eq!(Theme::fg("#abc"), "\u{1b}[39m");
    }

    #[test]
    fn theme_loads_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mocha = include_str!("../../themes/catppuccin-mocha.toml");
        file.write_all(mocha.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "catppuccin-mocha");
    }

    #[test]
    fn missing_theme_file_is_a_theme_error() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, ZontactsError::Theme(_)));
    }
}
