//! Zontacts: A Zellij plugin for browsing and managing a contact directory.
//!
//! Zontacts is a terminal multiplexer plugin that provides:
//! - A paginated contact list with avatar glyphs
//! - Case-insensitive substring search across names and phone numbers
//! - An add-contact form with per-field validation
//! - Optional remote loading of contacts over HTTP
//! - A bundled seed directory so the plugin is usable offline

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Filtering, pagination, form validation           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - Rendering, theming, components                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Contact model (domain/contact)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Contact, avatars, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zontacts.wasm" {
//!         contacts_url "https://example.com/contacts.json"
//!         items_per_page "5"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` seeded from the bundled contact fixture
//!    - Subscribe to Zellij events
//!
//! 2. **Remote Fetch** (when `contacts_url` is set):
//!    - Issue a `web_request` once permissions are granted
//!    - On success, replace the directory while keeping locally-added contacts
//!    - On failure, keep the current directory and surface the error in the UI
//!
//! 3. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, cards, pagination, footer)
//!    - Handle user input (/, a, n/p, q)
//!
//! # Key Design Decisions
//!
//! ## Substring Search
//!
//! Filtering matches the query as a case-insensitive substring of the name or
//! phone number. Matched character ranges are precomputed into the view model
//! so the renderer can highlight them without re-running the search.
//!
//! ## Local Additions Survive Fetches
//!
//! Contacts added through the form are tracked separately from fetched ones.
//! A fetch result that arrives after the user has added contacts re-appends
//! the local additions instead of discarding them.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes expensive operations (match highlighting)
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FormField, InputMode, SearchFocus};
pub use domain::{AvatarCode, Contact, Result, ZontactsError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Bundled seed directory, embedded at compile time.
const SEED_CONTACTS: &str = include_str!("../data/contacts.json");

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zontacts.wasm" {
///     contacts_url "https://example.com/contacts.json"
///     items_per_page "5"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL to fetch the contact directory from.
    ///
    /// When unset, the plugin runs entirely from the bundled seed directory.
    /// The endpoint must return a JSON array of contact objects.
    pub contacts_url: Option<String>,

    /// Number of contacts shown per page. Default: 1
    pub items_per_page: usize,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts_url: None,
            items_per_page: 1,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `contacts_url`: String → `Option<String>` (empty values ignored)
    /// - `items_per_page`: String → `usize` (falls back to 1 on parse error,
    ///   zero is rejected)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zontacts::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("items_per_page".to_string(), "5".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.items_per_page, 5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let contacts_url = config
            .get("contacts_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let items_per_page = config
            .get("items_per_page")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(1);

        Self {
            contacts_url,
            items_per_page,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - The bundled seed directory as the initial contact list
///
/// When `contacts_url` is configured, the caller is expected to issue the
/// fetch once Zellij grants web access; the seed keeps the UI populated in
/// the meantime.
///
/// # Example
///
/// ```rust
/// use zontacts::{Config, initialize};
///
/// let config = Config {
///     items_per_page: 5,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// // State is ready for event processing
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zontacts plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let contacts = seed_contacts();

    AppState::new(contacts, config.items_per_page, theme)
}

/// Parses the bundled seed fixture.
///
/// The fixture is validated at test time, so a parse failure here means a
/// broken build artifact. The plugin starts with an empty directory in that
/// case rather than refusing to load.
fn seed_contacts() -> Vec<Contact> {
    match serde_json::from_str::<Vec<Contact>>(SEED_CONTACTS) {
        Ok(contacts) => contacts,
        Err(e) => {
            tracing::debug!(error = %e, "failed to parse seed contacts");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_fixture_parses() {
        let contacts = seed_contacts();
        assert!(!contacts.is_empty());

        let mut ids: Vec<i64> = contacts.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), contacts.len(), "seed ids must be unique");
    }

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.items_per_page, 1);
        assert!(config.contacts_url.is_none());
    }

    #[test]
    fn config_from_zellij_parses_values() {
        let mut map = BTreeMap::new();
        map.insert(
            "contacts_url".to_string(),
            "https://example.com/contacts.json".to_string(),
        );
        map.insert("items_per_page".to_string(), "10".to_string());
        map.insert("theme".to_string(), "catppuccin-latte".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(
            config.contacts_url.as_deref(),
            Some("https://example.com/contacts.json")
        );
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn config_rejects_zero_items_per_page() {
        let mut map = BTreeMap::new();
        map.insert("items_per_page".to_string(), "0".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.items_per_page, 1);
    }

    #[test]
    fn config_ignores_blank_url() {
        let mut map = BTreeMap::new();
        map.insert("contacts_url".to_string(), "  ".to_string());

        let config = Config::from_zellij(&map);
        assert!(config.contacts_url.is_none());
    }

    #[test]
    fn initialize_seeds_state() {
        let config = Config {
            items_per_page: 5,
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.items_per_page, 5);
        assert!(!state.contacts.is_empty());
    }
}
