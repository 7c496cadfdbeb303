//! Pagination bar renderer.
//!
//! Renders the page navigation line with previous/next hints, the current
//! page indicator, and the items-per-page setting.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the pagination bar at the given row, centered horizontally.
///
/// Previous/next hints are dimmed when the corresponding move is not
/// available. Returns the next available row position.
pub fn render_pagination(
    row: usize,
    pagination: &PaginationInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let page_text = format!("Page {}/{}", pagination.current_page, pagination.page_count);
    let items_text = format!("Items per page: {}", pagination.items_per_page);
    let plain = format!("<- Previous | {page_text} | Next -> | {items_text}");
    let col = cols.saturating_sub(plain.chars().count()) / 2 + 1;

    position_cursor(row, col);
    if pagination.has_prev {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("<- Previous");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" | ");
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{page_text}");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" | ");
    if pagination.has_next {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("Next ->");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" | ");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{items_text}");
    print!("{}", Theme::reset());

    row + 1
}
