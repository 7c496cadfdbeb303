//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and fetch results, translating them into state changes and action
//! sequences. It is the primary control flow coordinator for the plugin.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim (key presses, fetch results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods, each followed by the
//!    explicit filter re-derivation
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Paging**: `NextPage`, `PrevPage`, `CycleItemsPerPage`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`, `FormMode`
//! - **Form**: `NextField`, `PrevField`, `CycleAvatar`, `SubmitForm`
//! - **Fetch**: `FetchStarted`, `ContactsFetched`, `FetchFailed`
//!
//! # Example
//!
//! ```rust
//! use zontacts::app::{handle_event, AppState, Event};
//! use zontacts::ui::Theme;
//!
//! let mut state = AppState::new(vec![], 5, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(actions.is_empty());
//! # Ok::<(), zontacts::domain::ZontactsError>(())
//! ```

use crate::domain::error::Result;
use crate::domain::Contact;

use super::modes::{FormField, InputMode, SearchFocus};
use super::{Action, AppState};

/// Events triggered by user input or the startup contact fetch.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Advances to the next page (no-op on the last page).
    NextPage,
    /// Steps back one page (no-op on page 1).
    PrevPage,
    /// Cycles the items-per-page presets, resetting to page 1.
    CycleItemsPerPage,

    /// Enters search mode with typing focus, starting a fresh query.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the filtered results for paging (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,

    /// Opens the add-contact form with the name field focused.
    FormMode,
    /// Moves form focus to the next field in tab order.
    NextField,
    /// Moves form focus to the previous field in tab order.
    PrevField,
    /// Cycles the avatar selection (avatar field only).
    CycleAvatar,
    /// Attempts to submit the add-contact form.
    SubmitForm,

    /// Appends a character to the search query or the focused form field.
    Char(char),
    /// Removes the last character from the search query or focused field.
    Backspace,
    /// Leaves the current mode and returns to normal browsing.
    Escape,

    /// Marks the startup contact fetch as issued.
    FetchStarted,

    /// Reports a resolved contact fetch.
    ///
    /// The fetched contacts replace the seeded collection; contacts the user
    /// added while the fetch was in flight are preserved.
    ContactsFetched {
        /// Contacts parsed from the fetch payload.
        contacts: Vec<Contact>,
    },

    /// Reports a failed contact fetch.
    ///
    /// Sets the user-visible fetch-error flag next to the results count.
    FetchFailed {
        /// Human-readable description of the failure.
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions. It
/// pattern-matches on the event type, calls state mutation methods, and
/// collects actions for the plugin shim to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of (`should_render`, actions). The render flag is `false` when the
/// event was ignored in the current mode or changed nothing visible.
///
/// # Errors
///
/// Returns errors from state mutation methods; the current transitions are
/// infallible, so the `Result` exists for the shim's uniform error path.
///
/// # Tracing
///
/// Each call creates a debug-level span carrying the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::NextPage => {
            let before = state.current_page;
            state.next_page();
            Ok((state.current_page != before, vec![]))
        }
        Event::PrevPage => {
            let before = state.current_page;
            state.prev_page();
            Ok((state.current_page != before, vec![]))
        }
        Event::CycleItemsPerPage => {
            state.cycle_items_per_page();
            Ok((true, vec![]))
        }

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.query.clear();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_filter();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.query.clear();
            state.apply_filter();
            Ok((true, vec![]))
        }

        Event::FormMode => {
            tracing::debug!("entering form mode");
            state.input_mode = InputMode::Form(FormField::Name);
            Ok((true, vec![]))
        }
        Event::NextField => {
            let InputMode::Form(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Form(field.next());
            Ok((true, vec![]))
        }
        Event::PrevField => {
            let InputMode::Form(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Form(field.prev());
            Ok((true, vec![]))
        }
        Event::CycleAvatar => {
            if state.input_mode != InputMode::Form(FormField::Avatar) {
                return Ok((false, vec![]));
            }
            state.form.avatar = state.form.avatar.next();
            tracing::debug!(avatar = state.form.avatar.label(), "avatar selection changed");
            Ok((true, vec![]))
        }
        Event::SubmitForm => {
            if !matches!(state.input_mode, InputMode::Form(_)) {
                return Ok((false, vec![]));
            }
            if state.submit_contact() {
                // Back to browsing so the new contact is visible.
                state.input_mode = InputMode::Normal;
            }
            Ok((true, vec![]))
        }

        Event::Char(c) => match state.input_mode {
            InputMode::Search(_) => {
                state.query.push(*c);
                tracing::trace!(query = %state.query, "search query updated");
                state.apply_filter();
                Ok((true, vec![]))
            }
            InputMode::Form(field) => {
                let Some(buffer) = state.form.buffer_mut(field) else {
                    return Ok((false, vec![]));
                };
                buffer.push(*c);
                state.form.clear_error(field);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(_) => {
                state.query.pop();
                state.apply_filter();
                Ok((true, vec![]))
            }
            InputMode::Form(field) => {
                let Some(buffer) = state.form.buffer_mut(field) else {
                    return Ok((false, vec![]));
                };
                buffer.pop();
                state.form.clear_error(field);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => {
            state.input_mode = InputMode::Normal;
            state.query.clear();
            state.apply_filter();
            Ok((true, vec![]))
        }

        Event::FetchStarted => {
            state.fetch_started();
            Ok((true, vec![]))
        }
        Event::ContactsFetched { contacts } => {
            state.apply_fetched(contacts.clone());
            Ok((true, vec![]))
        }
        Event::FetchFailed { error } => {
            state.fetch_failed(error.clone());
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AvatarCode;
    use crate::ui::Theme;

    fn contact(id: i64, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            phone: format!("555-{id:04}"),
            email: format!("{id}@example.com"),
            avatar: AvatarCode::Default,
        }
    }

    fn state() -> AppState {
        let contacts = (1..=7).map(|id| contact(id, "Contact")).collect();
        AppState::new(contacts, 5, Theme::default())
    }

    fn dispatch(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn chars_are_ignored_in_normal_mode() {
        let mut state = state();
        let (rendered, actions) = dispatch(&mut state, Event::Char('x'));
        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(state.query.is_empty());
    }

    #[test]
    fn chars_feed_the_query_in_search_mode() {
        let mut state = state();
        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::Char('5'));
        dispatch(&mut state, Event::Char('5'));
        assert_eq!(state.query, "55");
        assert_eq!(state.filtered_contacts.len(), 7);

        dispatch(&mut state, Event::Backspace);
        assert_eq!(state.query, "5");
    }

    #[test]
    fn chars_feed_the_focused_form_field() {
        let mut state = state();
        dispatch(&mut state, Event::FormMode);
        dispatch(&mut state, Event::Char('J'));
        dispatch(&mut state, Event::Char('o'));
        assert_eq!(state.form.name, "Jo");

        dispatch(&mut state, Event::NextField);
        dispatch(&mut state, Event::Char('5'));
        assert_eq!(state.form.phone, "5");
        assert_eq!(state.form.name, "Jo");
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = state();
        dispatch(&mut state, Event::FormMode);
        dispatch(&mut state, Event::SubmitForm);
        assert!(state.form.errors.name.is_some());

        dispatch(&mut state, Event::Char('J'));
        assert!(state.form.errors.name.is_none());
        assert!(state.form.errors.phone.is_some());
    }

    #[test]
    fn avatar_cycles_only_on_the_avatar_field() {
        let mut state = state();
        dispatch(&mut state, Event::FormMode);
        let (rendered, _) = dispatch(&mut state, Event::CycleAvatar);
        assert!(!rendered);
        assert_eq!(state.form.avatar, AvatarCode::Default);

        dispatch(&mut state, Event::PrevField);
        assert_eq!(state.input_mode, InputMode::Form(FormField::Avatar));
        dispatch(&mut state, Event::CycleAvatar);
        assert_eq!(state.form.avatar, AvatarCode::Female);
    }

    #[test]
    fn successful_submit_returns_to_normal_mode() {
        let mut state = state();
        dispatch(&mut state, Event::FormMode);
        state.form.name = "Jo Smith".to_string();
        state.form.phone = "555-1234".to_string();
        state.form.email = "jo@x.com".to_string();

        dispatch(&mut state, Event::SubmitForm);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.contacts.len(), 8);
    }

    #[test]
    fn failed_submit_stays_in_form_mode() {
        let mut state = state();
        dispatch(&mut state, Event::FormMode);
        dispatch(&mut state, Event::SubmitForm);
        assert!(matches!(state.input_mode, InputMode::Form(_)));
        assert_eq!(state.contacts.len(), 7);
    }

    #[test]
    fn exit_search_clears_the_query() {
        let mut state = state();
        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::Char('z'));
        assert!(state.filtered_contacts.is_empty());

        dispatch(&mut state, Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.query.is_empty());
        assert_eq!(state.filtered_contacts.len(), 7);
    }

    #[test]
    fn focus_results_with_empty_query_leaves_search() {
        let mut state = state();
        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);

        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::Char('c'));
        dispatch(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn page_events_report_render_only_on_change() {
        let mut state = state();
        let (rendered, _) = dispatch(&mut state, Event::PrevPage);
        assert!(!rendered);
        let (rendered, _) = dispatch(&mut state, Event::NextPage);
        assert!(rendered);
        let (rendered, _) = dispatch(&mut state, Event::NextPage);
        assert!(!rendered);
    }

    #[test]
    fn close_focus_emits_the_close_action() {
        let mut state = state();
        let (rendered, actions) = dispatch(&mut state, Event::CloseFocus);
        assert!(!rendered);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn fetch_events_drive_loading_and_collection() {
        let mut state = state();
        dispatch(&mut state, Event::FetchStarted);
        assert!(state.loading);

        let fetched = vec![contact(100, "Remote")];
        dispatch(&mut state, Event::ContactsFetched { contacts: fetched });
        assert!(!state.loading);
        assert_eq!(state.contacts.len(), 1);

        dispatch(
            &mut state,
            Event::FetchFailed {
                error: "status 404".to_string(),
            },
        );
        assert_eq!(state.fetch_error.as_deref(), Some("status 404"));
    }
}
