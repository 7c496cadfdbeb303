//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with the contact count
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`cards`]: Visible page of contact cards (avatar, name, phone, email)
//! - [`pagination`]: Page navigation bar and items-per-page setting
//! - [`form`]: Add-contact form with inline validation errors
//! - [`empty`]: Empty state message for no contacts
//!
//! # Layout Modes
//!
//! The module provides three high-level layout functions:
//!
//! - [`render_normal_mode`]: Header + Cards + Pagination + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Cards + Pagination + Footer
//! - [`render_form_mode`]: Header + Form + Footer

mod header;
mod footer;
mod search;
mod cards;
mod pagination;
mod form;
mod empty;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UiViewModel};

use cards::render_cards;
use footer::render_footer;
use form::render_form_panel;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/list, list/footer).
///
/// # Parameters
///
/// * `row` - Row position to render the border (1-indexed)
/// * `color` - Hex color for the border
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the result count line ("Showing N result(s)", plus loading or
/// error suffixes).
fn render_results(row: usize, vm: &UiViewModel, theme: &Theme) -> usize {
    position_cursor(row, 3);
    if vm.results.is_error {
        print!("{}", Theme::fg(&theme.colors.error_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", vm.results.line);
    print!("{}", Theme::reset());
    row + 2
}

/// Renders the normal mode layout (no search bar, no form).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Result count]
/// [Contact cards]
/// [Blank padding to fill screen]
/// [Pagination]
/// [Border]
/// [Footer]
/// ```
///
/// # Line Accounting
///
/// Reserves the bottom three rows for pagination, border, and footer. Cards
/// that would overflow into that area are skipped.
pub fn render_normal_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_results(current_row, vm, theme);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);

    match &vm.empty_state {
        Some(empty) => {
            render_empty_state(current_row + 1, empty, theme, cols);
        }
        None => {
            render_cards(current_row, &vm.cards, theme, cols, pagination_row);
        }
    }

    render_pagination(pagination_row, &vm.pagination, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search bar).
///
/// Identical to the normal layout except for the 3-line search box between
/// the header border and the result count line.
pub fn render_search_mode(
    vm: &UiViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_results(current_row, vm, theme);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);

    match &vm.empty_state {
        Some(empty) => {
            render_empty_state(current_row + 1, empty, theme, cols);
        }
        None => {
            render_cards(current_row, &vm.cards, theme, cols, pagination_row);
        }
    }

    render_pagination(pagination_row, &vm.pagination, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the form mode layout (add-contact form replaces the list).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Form panel]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_form_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(form) = &vm.form_panel {
        render_form_panel(current_row + 1, form, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
