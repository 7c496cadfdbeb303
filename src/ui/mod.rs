//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal-based UI, transforming view models into
//! ANSI-styled output through composable rendering components. It provides theme
//! support, responsive layout, and search match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, formatting)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod viewmodel;
pub mod renderer;
pub mod components;
pub mod helpers;
pub mod theme;

pub use viewmodel::{
    ContactCard, EmptyState, FooterInfo, FormPanelInfo, HeaderInfo, PaginationInfo, ResultsInfo,
    SearchBarInfo, UiViewModel,
};
pub use renderer::render;
pub use theme::Theme;
