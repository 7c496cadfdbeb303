//! Add-contact form renderer.
//!
//! Renders the form panel with labeled text fields, the avatar picker line,
//! and inline validation errors under the fields that failed.

use crate::app::FormField;
use crate::ui::helpers::{fit_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormPanelInfo;

/// Left margin for form content.
const FORM_MARGIN: usize = 3;

/// Width of the field label column, so values line up.
const LABEL_WIDTH: usize = 8;

/// Renders the add-contact form starting at the given row.
///
/// The focused field's value is drawn with the focus colors so the user can
/// see where their keystrokes go. Each field with a validation error gets an
/// extra error line directly beneath it.
///
/// Returns the next available row position.
pub fn render_form_panel(row: usize, form: &FormPanelInfo, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    position_cursor(current_row, FORM_MARGIN);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("Add contact");
    print!("{}", Theme::reset());
    current_row += 2;

    current_row = render_field(
        current_row,
        "Name",
        &form.name,
        form.focused == FormField::Name,
        form.name_error.as_deref(),
        theme,
        cols,
    );
    current_row = render_field(
        current_row,
        "Phone",
        &form.phone,
        form.focused == FormField::Phone,
        form.phone_error.as_deref(),
        theme,
        cols,
    );
    current_row = render_field(
        current_row,
        "Email",
        &form.email,
        form.focused == FormField::Email,
        form.email_error.as_deref(),
        theme,
        cols,
    );

    let avatar_value = format!("{} {}", form.avatar_glyph, form.avatar_label);
    current_row = render_field(
        current_row,
        "Avatar",
        &avatar_value,
        form.focused == FormField::Avatar,
        None,
        theme,
        cols,
    );

    current_row
}

/// Renders one labeled field line, plus an error line when `error` is set.
fn render_field(
    row: usize,
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
    theme: &Theme,
    cols: usize,
) -> usize {
    let value_width = cols.saturating_sub(FORM_MARGIN + LABEL_WIDTH + 2);

    position_cursor(row, FORM_MARGIN);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{label:<LABEL_WIDTH$}");
    if focused {
        print!("{}", Theme::fg(&theme.colors.field_focus_fg));
        print!("{}", Theme::bg(&theme.colors.field_focus_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!(" {} ", fit_width(value, value_width));
    print!("{}", Theme::reset());

    match error {
        Some(message) => {
            position_cursor(row + 1, FORM_MARGIN + LABEL_WIDTH);
            print!("{}", Theme::fg(&theme.colors.error_fg));
            print!(" {message}");
            print!("{}", Theme::reset());
            row + 3
        }
        None => row + 2,
    }
}
