//! Dashforge UI runtime
//!
//! Applies themes from `dashforge_theme` to a document and shares the active
//! theme across an application.
//!
//! - [`ThemeEngine`] writes `--df-*` custom properties onto the root element
//!   and owns the generated utility stylesheet
//! - [`Document`] is the boundary to the page: [`MemoryDocument`] for headless
//!   rendering and tests, [`NoDocument`] for contexts without one, and
//!   `WebDocument` in the browser (feature `web`)
//! - [`create_dashboard_ui`] builds the installable plugin; [`use_theme`] and
//!   [`use_dashboard_ui`] read it back from an [`AppContext`]
//!
//! ```rust
//! use std::sync::Arc;
//! use dashforge_theme::ThemeName;
//! use dashforge_ui::{
//!     create_dashboard_ui, use_theme, AppContext, DashboardUiOptions, Document, MemoryDocument,
//!     ThemeEngine,
//! };
//!
//! let document = Arc::new(MemoryDocument::new());
//! let engine = Arc::new(ThemeEngine::new(document.clone()));
//! let plugin = create_dashboard_ui(DashboardUiOptions::default(), engine).unwrap();
//!
//! let mut app = AppContext::new();
//! app.use_plugin(&plugin);
//!
//! use_theme(&app).set_theme(ThemeName::Dark).unwrap();
//! assert_eq!(
//!     document.root_property("--df-color-primary").as_deref(),
//!     Some("#d0bcff")
//! );
//! ```

pub mod context;
pub mod document;
pub mod engine;
pub mod error;
pub mod memory;
pub mod plugin;
#[cfg(feature = "web")]
pub mod web;

pub use context::{AppContext, InjectionKey, Plugin};
pub use document::{Document, NoDocument};
pub use engine::{ApplyOptions, ThemeApplier, ThemeEngine, UtilityOptions};
pub use error::{DomError, UiError};
pub use memory::{MemoryDocument, NodeId, StyleElement};
pub use plugin::{
    create_dashboard_ui, use_dashboard_ui, use_theme, DashboardUi, DashboardUiContext,
    DashboardUiHandle, DashboardUiOptions, DashboardUiState, Subscription, ThemeInput,
    ThemeSelection, UseTheme, DASHBOARD_UI_KEY, GLOBAL_ALIAS,
};
#[cfg(feature = "web")]
pub use web::{WebDocument, WebStyleNode};
