//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information like query match highlight ranges; they carry no business
//! logic.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. The [`ContactCard`] is the pure contact-to-card mapping of
//! the directory: one contact record in, one renderable card out, no state and
//! no error conditions.

use crate::app::modes::FormField;
use crate::domain::Contact;

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI: the cards
/// of the current page window, header and results line, pagination info, and
/// the optional search bar, form panel, and empty state.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title with contact count).
    pub header: HeaderInfo,

    /// Results line shown under the header.
    pub results: ResultsInfo,

    /// Contact cards for the current page window.
    pub cards: Vec<ContactCard>,

    /// Pagination state for the pagination bar.
    pub pagination: PaginationInfo,

    /// Search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Add-contact form panel (when in form mode).
    pub form_panel: Option<FormPanelInfo>,

    /// Empty state message (when the page window has nothing to show).
    pub empty_state: Option<EmptyState>,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// Display information for a single contact card.
///
/// Represents one card in the directory list. Highlight ranges are attached
/// by the state layer while a search query is active; the card mapping itself
/// is pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    /// Avatar glyph for the card's avatar slot.
    pub avatar_glyph: String,

    /// Contact display name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,

    /// Contact email address.
    pub email: String,

    /// Character ranges of query matches in the name.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub name_highlights: Vec<(usize, usize)>,

    /// Character ranges of query matches in the phone number.
    pub phone_highlights: Vec<(usize, usize)>,
}

impl ContactCard {
    /// Maps one contact record to its card.
    ///
    /// This is the directory's pure presentation mapping: the avatar code
    /// selects one of the five fixed glyphs, and name, phone, and email pass
    /// through as static text. No state, no side effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use zontacts::domain::{AvatarCode, Contact};
    /// use zontacts::ui::viewmodel::ContactCard;
    ///
    /// let contact = Contact {
    ///     id: 1,
    ///     name: "Jo Smith".to_string(),
    ///     phone: "555-1234".to_string(),
    ///     email: "jo@x.com".to_string(),
    ///     avatar: AvatarCode::Female,
    /// };
    ///
    /// let card = ContactCard::from_contact(&contact);
    /// assert_eq!(card.avatar_glyph, "( F )");
    /// assert_eq!(card.name, "Jo Smith");
    /// ```
    #[must_use]
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            avatar_glyph: contact.avatar.glyph().to_string(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            name_highlights: vec![],
            phone_highlights: vec![],
        }
    }
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Results line display information.
///
/// The line under the header showing how many contacts the current page
/// displays, with loading and fetch-error suffixes when applicable.
#[derive(Debug, Clone)]
pub struct ResultsInfo {
    /// Formatted results line (e.g. `"Showing 5 results (loading...)"`).
    pub line: String,

    /// Whether the line carries a fetch error (rendered in the error color).
    pub is_error: bool,
}

/// Pagination bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Current page, 1-based.
    pub current_page: usize,

    /// Total number of pages, at least 1.
    pub page_count: usize,

    /// Current page size.
    pub items_per_page: usize,

    /// Whether a previous page exists.
    pub has_prev: bool,

    /// Whether a next page exists.
    pub has_next: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Add-contact form panel display information.
///
/// Snapshot of the form buffers, focus, avatar selection, and inline
/// validation messages for the form renderer.
#[derive(Debug, Clone)]
pub struct FormPanelInfo {
    /// Name field buffer.
    pub name: String,

    /// Phone field buffer.
    pub phone: String,

    /// Email field buffer.
    pub email: String,

    /// Glyph of the currently selected avatar.
    pub avatar_glyph: String,

    /// Label of the currently selected avatar.
    pub avatar_label: String,

    /// Currently focused field.
    pub focused: FormField,

    /// Inline validation message for the name field, if any.
    pub name_error: Option<String>,

    /// Inline validation message for the phone field, if any.
    pub phone_error: Option<String>,

    /// Inline validation message for the email field, if any.
    pub email_error: Option<String>,
}

/// Empty state message display information.
///
/// Shown when the page window has no cards (empty directory or a query with
/// no matches).
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No matching contacts").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,
}
