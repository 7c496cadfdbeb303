//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zontacts
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState` from the
//!    bundled seed directory
//! 2. **Subscribe**: Register for Key, `WebRequestResult`, and
//!    `PermissionRequestResult` events
//! 3. **Remote Fetch**: Once web access is granted, fetch the configured
//!    contacts URL (if any)
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key('/')` → `Event::SearchMode` (in normal mode)
//! - `Key('a')` → `Event::FormMode` (in normal mode)
//! - `Key(Esc)` → `Event::ExitSearch` / `Event::Escape`
//! - `WebRequestResult` → `Event::ContactsFetched` / `Event::FetchFailed`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Next page
//! - `Ctrl+p`: Previous page
//!
//! In normal mode:
//! - `n`/`Right`: Next page
//! - `p`/`Left`: Previous page
//! - `i`: Cycle items per page
//! - `/`: Enter search mode
//! - `a`: Open add-contact form
//! - `q`: Close plugin
//!
//! In search mode:
//! - Printable characters: Edit the query
//! - `Enter`: Move focus to the results for paging
//! - `/`: Return to the query input
//! - `Esc`: Exit search
//!
//! In form mode:
//! - Printable characters: Edit the focused field
//! - `Tab`/`BackTab`: Move between fields
//! - `Space` (avatar field): Cycle the avatar selection
//! - `Enter`: Submit
//! - `Esc`: Discard and return to the list

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zontacts::app::SearchFocus;
use zontacts::{handle_event, Action, Config, Event, FormField, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like the
/// pending remote fetch.
struct State {
    /// Core application state from library layer.
    app: zontacts::app::AppState,

    /// Configured remote contacts URL, if any.
    contacts_url: Option<String>,

    /// Whether the remote fetch has already been issued.
    ///
    /// Zellij can deliver `PermissionRequestResult` more than once; the
    /// directory should only be fetched once per plugin load.
    fetch_issued: bool,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zontacts::initialize(&default_config),
            contacts_url: None,
            fetch_issued: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Fetch the remote contact directory
    /// - `ChangeApplicationState`: Hide the plugin pane on close
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zontacts::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(contacts_url = ?config.contacts_url, "parsed configuration");
        self.app = zontacts::initialize(&config);
        self.contacts_url.clone_from(&config.contacts_url);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ChangeApplicationState,
        ]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, _context) => {
                Self::map_web_request_result(status, &body)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                return self.handle_permission_result(permissions);
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zontacts::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// Routing depends on the current input mode: in search and form modes
    /// printable characters are text input, while in normal mode they are
    /// commands.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::NextPage);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::PrevPage);
        }

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key),
            InputMode::Search(focus) => Self::map_search_key(key, focus),
            InputMode::Form(field) => Self::map_form_key(key, field),
        }
    }

    /// Key mapping for normal mode, where characters are commands.
    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('a') => Event::FormMode,
            BareKey::Char('n') | BareKey::Right => Event::NextPage,
            BareKey::Char('p') | BareKey::Left => Event::PrevPage,
            BareKey::Char('i') => Event::CycleItemsPerPage,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    /// Key mapping for search mode.
    ///
    /// With the query input focused, characters edit the query. With the
    /// results focused, `n`/`p` page through matches.
    fn map_search_key(key: &KeyWithModifier, focus: SearchFocus) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::ExitSearch,
            BareKey::Enter => Event::FocusResults,
            _ => match focus {
                SearchFocus::Typing => match key.bare_key {
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                },
                SearchFocus::Navigating => match key.bare_key {
                    BareKey::Char('/') => Event::FocusSearchBar,
                    BareKey::Char('n') | BareKey::Right => Event::NextPage,
                    BareKey::Char('p') | BareKey::Left => Event::PrevPage,
                    BareKey::Char('q') => Event::CloseFocus,
                    _ => return None,
                },
            },
        })
    }

    /// Key mapping for form mode, where characters edit the focused field.
    fn map_form_key(key: &KeyWithModifier, field: FormField) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::Escape,
            BareKey::Enter => Event::SubmitForm,
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
            BareKey::Tab => Event::NextField,
            BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(' ') if field == FormField::Avatar => Event::CycleAvatar,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// The remote fetch waits for web access, so it is issued here rather
    /// than in `load`.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                self.trigger_fetch()
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - remote fetch unavailable");
                false
            }
        }
    }

    /// Issues the remote contacts fetch, once.
    ///
    /// Returns `true` when the fetch was started (the UI shows a loading
    /// indicator until the result arrives).
    fn trigger_fetch(&mut self) -> bool {
        if self.fetch_issued {
            return false;
        }

        let Some(url) = self.contacts_url.clone() else {
            tracing::debug!("no contacts_url configured - using seed directory");
            return false;
        };

        tracing::debug!(url = %url, "fetching remote contact directory");
        self.fetch_issued = true;

        web_request(
            url,
            HttpVerb::Get,
            BTreeMap::new(),
            Vec::new(),
            BTreeMap::new(),
        );

        match handle_event(&mut self.app, &Event::FetchStarted) {
            Ok((should_render, _actions)) => should_render,
            Err(e) => {
                tracing::debug!(error = %e, "error marking fetch start");
                false
            }
        }
    }

    /// Maps a web request result to a fetch outcome event.
    ///
    /// Non-2xx statuses and malformed payloads both surface as fetch
    /// failures; the current directory is kept either way.
    fn map_web_request_result(status: u16, body: &[u8]) -> Event {
        tracing::debug!(status = status, body_len = body.len(), "web request result");

        if !(200..300).contains(&status) {
            return Event::FetchFailed {
                error: format!("request failed with status {status}"),
            };
        }

        match serde_json::from_slice::<Vec<zontacts::Contact>>(body) {
            Ok(contacts) => {
                tracing::debug!(contact_count = contacts.len(), "fetched contacts");
                Event::ContactsFetched { contacts }
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to parse fetched contacts");
                Event::FetchFailed {
                    error: format!("invalid contact payload: {e}"),
                }
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
