//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control how user input is
//! interpreted. These types determine which keybindings are active, where
//! typed characters go, and which panels the UI renders.
//!
//! # State Machine
//!
//! The application operates in one of three primary input modes:
//! - **Normal**: Default browsing mode (paging, search entry, form entry)
//! - **Search**: Active search with typing or result navigation focus
//! - **Form**: Add-contact form with one focused field
//!
//! # Example
//!
//! ```rust
//! use zontacts::app::modes::{FormField, InputMode, SearchFocus};
//!
//! let searching = InputMode::Search(SearchFocus::Typing);
//! let filling = InputMode::Form(FormField::Name);
//! assert_ne!(searching, filling);
//! ```

/// Focus state within search mode.
///
/// Determines whether search input is being typed or the filtered results are
/// being paged through while the query stays applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is paging through filtered results with the query applied.
    ///
    /// Accepts n/p for paging, enter or / to return to Typing.
    Navigating,
}

/// One field of the add-contact form.
///
/// Tracks which field currently receives typed input. The avatar field has no
/// text buffer; it cycles through the avatar codes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Contact name input.
    Name,
    /// Phone number input.
    Phone,
    /// Email address input.
    Email,
    /// Avatar selector (cycles, no text input).
    Avatar,
}

impl FormField {
    /// Returns the next field in tab order, wrapping from avatar back to name.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Phone => Self::Email,
            Self::Email => Self::Avatar,
            Self::Avatar => Self::Name,
        }
    }

    /// Returns the previous field in tab order, wrapping from name to avatar.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Avatar,
            Self::Phone => Self::Name,
            Self::Email => Self::Phone,
            Self::Avatar => Self::Email,
        }
    }
}

/// Current input handling mode.
///
/// Controls which keybindings are active, how typed characters are routed,
/// and which panels are rendered (search bar, form panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default browsing mode.
    ///
    /// Available keybindings: n/p (page), i (items per page), / (search),
    /// a (add contact), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing the query or paging through the filtered results.
    Search(SearchFocus),

    /// Add-contact form mode with the currently focused field.
    ///
    /// Typed characters go to the focused field's buffer; tab moves between
    /// fields; enter submits the form.
    Form(FormField),
}
