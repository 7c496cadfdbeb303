//! Contact card list renderer.
//!
//! Renders the visible page of contacts as stacked cards, each showing the
//! avatar glyph, name, phone, and email. Search matches inside the name and
//! phone lines are highlighted.

use crate::ui::helpers::{fit_width, position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ContactCard;

/// Left margin for card content.
const CARD_MARGIN: usize = 3;

/// Rows occupied by a single card, including the trailing separator line.
pub const CARD_HEIGHT: usize = 4;

/// Renders the contact cards starting at the given row.
///
/// Each card occupies [`CARD_HEIGHT`] rows. Cards that would overflow past
/// `max_row` are skipped.
///
/// Returns the next available row position after the last rendered card.
pub fn render_cards(
    row: usize,
    cards: &[ContactCard],
    theme: &Theme,
    cols: usize,
    max_row: usize,
) -> usize {
    let mut current_row = row;
    for card in cards {
        if current_row + CARD_HEIGHT > max_row {
            break;
        }
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single contact card.
///
/// Layout:
///
/// ```text
/// ( F ) Jane Cooper
///       555-0101
///       jane@example.com
/// ```
fn render_card(row: usize, card: &ContactCard, theme: &Theme, cols: usize) -> usize {
    let glyph_width = card.avatar_glyph.chars().count() + 1;
    let text_width = cols.saturating_sub(CARD_MARGIN + glyph_width + 1);

    position_cursor(row, CARD_MARGIN);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{} ", card.avatar_glyph);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    render_highlighted_text(&fit_width(&card.name, text_width), &card.name_highlights, theme);
    print!("{}", Theme::reset());

    position_cursor(row + 1, CARD_MARGIN + glyph_width);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    render_highlighted_text(&fit_width(&card.phone, text_width), &card.phone_highlights, theme);
    print!("{}", Theme::reset());

    position_cursor(row + 2, CARD_MARGIN + glyph_width);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit_width(&card.email, text_width));
    print!("{}", Theme::reset());

    row + CARD_HEIGHT
}
