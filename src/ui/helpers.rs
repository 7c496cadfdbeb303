//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across the UI
//! components: cursor positioning, width-constrained text truncation, and
//! query match highlighting with proper ANSI escape sequence management.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to at most `max_width` characters, appending `...`.
///
/// Returns the text unchanged when it already fits. Operates on character
/// counts, not bytes, so multi-byte names truncate cleanly.
///
/// # Examples
///
/// ```
/// use zontacts::ui::helpers::fit_width;
///
/// assert_eq!(fit_width("Jo Smith", 20), "Jo Smith");
/// assert_eq!(fit_width("a very long contact name", 10), "a very ...");
/// ```
#[must_use]
pub fn fit_width(text: &str, max_width: usize) -> String {
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let kept: String = text.chars().take(keep).collect();
    format!("{kept}...")
}

/// Renders text with highlighted character ranges for query matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges and prints them with the theme's match highlight colors.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight, `(start, end)` exclusive end
/// * `theme` - Active color theme for highlight colors
///
/// # Character Indices
///
/// Ranges use character indices (not byte indices); the text is converted to
/// a character vector for indexing. Out-of-range ends are clamped.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_keeps_short_text() {
        assert_eq!(fit_width("short", 10), "short");
        assert_eq!(fit_width("exact", 5), "exact");
    }

    #[test]
    fn fit_width_truncates_with_ellipsis() {
        let truncated = fit_width("a very long contact name", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with("..."));
    }
}
