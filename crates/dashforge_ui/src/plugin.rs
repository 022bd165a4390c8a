//! Dashboard UI plugin and theme accessors
//!
//! [`create_dashboard_ui`] resolves the initial theme, applies it once and
//! returns a [`DashboardUi`] plugin. Installing the plugin publishes one
//! shared [`DashboardUiContext`] per application; [`use_theme`] and
//! [`use_dashboard_ui`] retrieve it. Every [`UseTheme::set_theme`] call
//! replaces the shared theme and notifies subscribers, last call wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

use dashforge_theme::{light_theme, merge_themes, PartialTheme, Theme, ThemeName};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use crate::context::{AppContext, InjectionKey, Plugin};
use crate::engine::{ApplyOptions, ThemeApplier};
use crate::error::{DomError, UiError};

/// Key the plugin publishes its state under
pub const DASHBOARD_UI_KEY: InjectionKey<DashboardUiContext> = InjectionKey::new("DashboardUI");

/// Name of the global convenience alias
pub const GLOBAL_ALIAS: &str = "$dashboardUI";

/// Initial theme choice: a built-in name or a layer merged onto the light theme
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ThemeSelection {
    Named(ThemeName),
    Custom(PartialTheme),
}

impl ThemeSelection {
    pub fn resolve(&self) -> Theme {
        match self {
            ThemeSelection::Named(name) => name.theme().clone(),
            ThemeSelection::Custom(partial) => merge_themes(light_theme(), partial),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardUiOptions {
    pub theme: Option<ThemeSelection>,
    /// Generate `.bg-*`/`.text-*`/`.border-*` classes for the theme colors
    #[serde(alias = "generateUtilities")]
    pub generate_utilities: bool,
}

/// Value published to the application
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardUiState {
    pub theme: Theme,
    pub generate_utilities: bool,
}

/// Handle returned by [`use_dashboard_ui`]
pub type DashboardUiHandle = Arc<DashboardUiContext>;

type Listener = Arc<dyn Fn(&Theme) + Send + Sync>;

/// Shared, observable theme state for one application
pub struct DashboardUiContext {
    state: RwLock<DashboardUiState>,
    engine: Arc<dyn ThemeApplier>,
    listeners: Mutex<FxHashMap<u64, Listener>>,
    next_listener: AtomicU64,
}

impl DashboardUiContext {
    fn new(state: DashboardUiState, engine: Arc<dyn ThemeApplier>) -> Self {
        Self {
            state: RwLock::new(state),
            engine,
            listeners: Mutex::new(FxHashMap::default()),
            next_listener: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> DashboardUiState {
        self.state.read().unwrap().clone()
    }

    pub fn theme(&self) -> Theme {
        self.state.read().unwrap().theme.clone()
    }

    pub fn generate_utilities(&self) -> bool {
        self.state.read().unwrap().generate_utilities
    }

    /// Takes effect on the next applied theme
    pub fn set_generate_utilities(&self, enabled: bool) {
        self.state.write().unwrap().generate_utilities = enabled;
    }

    /// Call `listener` with the new theme after every change.
    ///
    /// Dropping the returned [`Subscription`] unsubscribes.
    pub fn subscribe<F>(self: &Arc<Self>, listener: F) -> Subscription
    where
        F: Fn(&Theme) + Send + Sync + 'static,
    {
        let id = self.next_listener.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap()
            .insert(id, Arc::new(listener));
        Subscription {
            context: Arc::downgrade(self),
            id,
        }
    }

    /// Apply `theme` to the document, then publish it.
    ///
    /// Listeners run after the state lock is released, so they may call back
    /// into this context.
    fn replace_theme(&self, theme: Theme) -> Result<(), DomError> {
        let generate_utilities = self.generate_utilities();
        self.engine
            .apply(&theme, ApplyOptions { generate_utilities })?;

        {
            let mut state = self.state.write().unwrap();
            debug!(
                "DashboardUiContext - theme {} -> {}",
                state.theme.name.as_deref().unwrap_or("<unnamed>"),
                theme.name.as_deref().unwrap_or("<unnamed>")
            );
            state.theme = theme.clone();
        }

        let listeners: Vec<Listener> = {
            let mut entries: Vec<(u64, Listener)> = self
                .listeners
                .lock()
                .unwrap()
                .iter()
                .map(|(id, listener)| (*id, listener.clone()))
                .collect();
            entries.sort_unstable_by_key(|(id, _)| *id);
            entries.into_iter().map(|(_, listener)| listener).collect()
        };
        for listener in listeners {
            listener(&theme);
        }
        Ok(())
    }
}

/// Keeps a listener registered until dropped
pub struct Subscription {
    context: Weak<DashboardUiContext>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(context) = self.context.upgrade() {
            context.listeners.lock().unwrap().remove(&self.id);
        }
    }
}

/// Installable plugin returned by [`create_dashboard_ui`]
pub struct DashboardUi {
    context: DashboardUiHandle,
}

impl DashboardUi {
    pub fn context(&self) -> &DashboardUiHandle {
        &self.context
    }
}

impl Plugin for DashboardUi {
    fn install(&self, app: &mut AppContext) {
        app.provide(&DASHBOARD_UI_KEY, self.context.clone());
        app.set_global(GLOBAL_ALIAS, self.context.clone());
    }
}

/// Resolve the initial theme, apply it through `engine`, and build the plugin
pub fn create_dashboard_ui(
    options: DashboardUiOptions,
    engine: Arc<dyn ThemeApplier>,
) -> Result<DashboardUi, DomError> {
    let theme = match &options.theme {
        Some(selection) => selection.resolve(),
        None => light_theme().clone(),
    };
    let state = DashboardUiState {
        theme,
        generate_utilities: options.generate_utilities,
    };

    engine.apply(
        &state.theme,
        ApplyOptions {
            generate_utilities: state.generate_utilities,
        },
    )?;

    Ok(DashboardUi {
        context: Arc::new(DashboardUiContext::new(state, engine)),
    })
}

/// The installed plugin state; fails if the plugin was never installed
pub fn use_dashboard_ui(app: &AppContext) -> Result<DashboardUiHandle, UiError> {
    app.inject(&DASHBOARD_UI_KEY).ok_or(UiError::NotInstalled)
}

/// Theme to switch to
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeInput {
    Named(ThemeName),
    Full(Theme),
    Partial(PartialTheme),
}

impl ThemeInput {
    /// Built-in names map to the built-in themes; anything else is merged
    /// onto the light theme, exactly like the plugin's initial selection.
    pub fn resolve(self) -> Theme {
        match self {
            ThemeInput::Named(name) => name.theme().clone(),
            ThemeInput::Full(theme) => merge_themes(light_theme(), &theme.into()),
            ThemeInput::Partial(partial) => merge_themes(light_theme(), &partial),
        }
    }
}

impl From<ThemeName> for ThemeInput {
    fn from(name: ThemeName) -> Self {
        ThemeInput::Named(name)
    }
}

impl From<Theme> for ThemeInput {
    fn from(theme: Theme) -> Self {
        ThemeInput::Full(theme)
    }
}

impl From<PartialTheme> for ThemeInput {
    fn from(partial: PartialTheme) -> Self {
        ThemeInput::Partial(partial)
    }
}

/// Theme accessor for components
pub struct UseTheme {
    context: Option<DashboardUiHandle>,
    fallback: Option<Arc<dyn ThemeApplier>>,
}

/// Look up the theme state; works without an installed plugin
pub fn use_theme(app: &AppContext) -> UseTheme {
    UseTheme {
        context: app.inject(&DASHBOARD_UI_KEY),
        fallback: None,
    }
}

impl UseTheme {
    /// Engine used by [`UseTheme::set_theme`] when no plugin is installed.
    ///
    /// Without one, a context-less `set_theme` only resolves the theme, the
    /// same as applying in a headless context.
    pub fn with_fallback_engine(mut self, engine: Arc<dyn ThemeApplier>) -> Self {
        self.fallback = Some(engine);
        self
    }

    /// The current theme, or `None` without an installed plugin
    pub fn current(&self) -> Option<Theme> {
        self.context.as_ref().map(|context| context.theme())
    }

    pub fn context(&self) -> Option<&DashboardUiHandle> {
        self.context.as_ref()
    }

    /// Resolve, apply and publish a new theme; returns the resolved theme
    pub fn set_theme(&self, input: impl Into<ThemeInput>) -> Result<Theme, UiError> {
        let resolved = input.into().resolve();
        match (&self.context, &self.fallback) {
            (Some(context), _) => context.replace_theme(resolved.clone())?,
            (None, Some(engine)) => engine.apply(&resolved, ApplyOptions::default())?,
            (None, None) => {
                debug!("use_theme: no plugin installed and no fallback engine, theme not applied")
            }
        }
        Ok(resolved)
    }
}
