//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin shim (main.rs) and the domain/ui layers. It implements the
//! event-driven command pattern that powers the directory UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └───────── Fetch Results ──────────┘
//! ```
//!
//! Every mutating operation ends with an explicit re-derivation of the
//! filtered contact list, so derived state never drifts from its inputs.
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Add-contact form buffers and validation
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use zontacts::app::{handle_event, AppState, Event};
//! use zontacts::ui::Theme;
//!
//! let mut state = AppState::new(vec![], 5, Theme::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::SearchMode)?;
//! assert!(should_render);
//! # Ok::<(), zontacts::domain::ZontactsError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::{ContactForm, FieldErrors};
pub use handler::{handle_event, Event};
pub use modes::{FormField, InputMode, SearchFocus};
pub use state::{AppState, ITEMS_PER_PAGE_PRESETS};
