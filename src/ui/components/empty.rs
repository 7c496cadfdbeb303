//! Empty state renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered empty-state message with a dim subtitle beneath it.
///
/// Returns the next available row position.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_col = cols.saturating_sub(empty.message.chars().count()) / 2 + 1;
    position_cursor(row, message_col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", empty.message);
    print!("{}", Theme::reset());

    let subtitle_col = cols.saturating_sub(empty.subtitle.chars().count()) / 2 + 1;
    position_cursor(row + 1, subtitle_col);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", empty.subtitle);
    print!("{}", Theme::reset());

    row + 2
}
