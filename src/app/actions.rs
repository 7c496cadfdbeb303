//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing an event. Actions are the boundary
//! between pure state transitions in the library layer and effectful Zellij
//! operations in the plugin shim: the handler decides, the shim executes.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Produced by [`handle_event`](super::handle_event) and executed in order by
/// the plugin shim after the state transition completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Emitted when the user explicitly quits (pressing 'q' in normal mode).
    CloseFocus,
}
