//! Application context
//!
//! Explicit dependency injection for host applications: plugins publish
//! shared values under typed keys, and components look them up through the
//! accessor functions that pair with each key.

use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;

use rustc_hash::FxHashMap;

type Shared = Arc<dyn Any + Send + Sync>;

/// Typed key under which a value of type `T` is published.
///
/// Keys are identified by their value type together with their name.
pub struct InjectionKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> InjectionKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Values provided to one application instance
#[derive(Default)]
pub struct AppContext {
    provided: FxHashMap<(TypeId, &'static str), Shared>,
    globals: FxHashMap<String, Shared>,
}

/// An installable extension of an [`AppContext`]
pub trait Plugin {
    fn install(&self, app: &mut AppContext);
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a plugin into this application
    pub fn use_plugin(&mut self, plugin: &impl Plugin) -> &mut Self {
        plugin.install(self);
        self
    }

    /// Publish `value` under `key`, replacing any previous value
    pub fn provide<T: Any + Send + Sync>(&mut self, key: &InjectionKey<T>, value: Arc<T>) {
        self.provided.insert((TypeId::of::<T>(), key.name), value);
    }

    pub fn inject<T: Any + Send + Sync>(&self, key: &InjectionKey<T>) -> Option<Arc<T>> {
        self.provided
            .get(&(TypeId::of::<T>(), key.name))
            .cloned()
            .and_then(|value| value.downcast::<T>().ok())
    }

    /// Publish a convenience alias reachable by name
    pub fn set_global<T: Any + Send + Sync>(&mut self, name: impl Into<String>, value: Arc<T>) {
        self.globals.insert(name.into(), value);
    }

    pub fn global<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.globals
            .get(name)
            .cloned()
            .and_then(|value| value.downcast::<T>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNT: InjectionKey<u32> = InjectionKey::new("count");
    const LABEL: InjectionKey<String> = InjectionKey::new("count");

    #[test]
    fn keys_with_same_name_but_different_types_do_not_collide() {
        let mut app = AppContext::new();
        app.provide(&COUNT, Arc::new(3));
        app.provide(&LABEL, Arc::new("three".to_string()));

        assert_eq!(app.inject(&COUNT).as_deref(), Some(&3));
        assert_eq!(app.inject(&LABEL).as_deref().map(String::as_str), Some("three"));
    }

    #[test]
    fn missing_values_inject_none() {
        let app = AppContext::new();
        assert!(app.inject(&COUNT).is_none());
        assert!(app.global::<u32>("$count").is_none());
    }
}
