//! Theme application
//!
//! [`ThemeEngine`] writes a theme into one [`Document`]: custom properties on
//! the root element, and optionally a single generated utility stylesheet.
//! The stylesheet handle belongs to the engine instance, so two engines never
//! share or clobber each other's node.

use std::sync::Mutex;

use dashforge_theme::{generate_css_vars, utility_css, Theme, UTILITY_MARKER};
use tracing::{debug, trace};

use crate::document::Document;
use crate::error::DomError;

/// Options for [`ThemeEngine::generate_utility_classes`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UtilityOptions {
    /// Always start from a fresh stylesheet node
    pub replace: bool,
}

/// Options for [`ThemeEngine::apply_theme`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Also (re)generate `.bg-*`/`.text-*`/`.border-*` utility classes
    pub generate_utilities: bool,
}

pub struct ThemeEngine<D: Document> {
    document: D,
    utility_node: Mutex<Option<D::Node>>,
}

impl<D: Document> ThemeEngine<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            utility_node: Mutex::new(None),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// The utility stylesheet node this engine currently tracks
    pub fn utility_node(&self) -> Option<D::Node> {
        self.utility_node.lock().unwrap().clone()
    }

    /// Write utility classes for every top-level color of `theme`.
    ///
    /// A new node is created on first use, when the tracked node was removed
    /// from the document, or when `options.replace` is set; the previous node
    /// is removed first. The node's content is always overwritten in full.
    pub fn generate_utility_classes(
        &self,
        theme: &Theme,
        options: UtilityOptions,
    ) -> Result<(), DomError> {
        if !self.document.is_live() {
            trace!("generate_utility_classes: no live document, skipping");
            return Ok(());
        }

        let css = utility_css(theme);
        let mut tracked = self.utility_node.lock().unwrap();

        let node = match tracked.take() {
            Some(node) if !options.replace && self.document.is_attached(&node) => node,
            previous => {
                if let Some(old) = previous {
                    if self.document.is_attached(&old) {
                        self.document.remove_node(&old)?;
                    }
                }
                debug!("ThemeEngine: creating utility stylesheet {}", UTILITY_MARKER);
                self.document.create_style_node(UTILITY_MARKER)?
            }
        };

        let node = tracked.insert(node);
        self.document.set_text_content(node, &css)?;
        debug!(
            "ThemeEngine: wrote {} utility rules for {} colors",
            theme.colors.len() * 3,
            theme.colors.len()
        );
        Ok(())
    }

    /// Write `theme`'s custom properties onto the root element.
    ///
    /// Utility classes are only generated when asked for, and then always
    /// into a replaced stylesheet.
    pub fn apply_theme(&self, theme: &Theme, options: ApplyOptions) -> Result<(), DomError> {
        if !self.document.is_live() {
            trace!("apply_theme: no live document, skipping");
            return Ok(());
        }

        let vars = generate_css_vars(theme);
        debug!(
            "ThemeEngine::apply_theme - {} ({} variables, utilities: {})",
            theme.name.as_deref().unwrap_or("<unnamed>"),
            vars.len(),
            options.generate_utilities
        );
        for (name, value) in &vars {
            trace!("{name}: {value}");
            self.document.set_root_property(name, value)?;
        }

        if options.generate_utilities {
            self.generate_utility_classes(theme, UtilityOptions { replace: true })?;
        }
        Ok(())
    }
}

/// Object-safe view of an engine, so shared state need not name the document type
pub trait ThemeApplier: Send + Sync {
    fn apply(&self, theme: &Theme, options: ApplyOptions) -> Result<(), DomError>;
}

impl<D> ThemeApplier for ThemeEngine<D>
where
    D: Document + Send + Sync,
    D::Node: Send,
{
    fn apply(&self, theme: &Theme, options: ApplyOptions) -> Result<(), DomError> {
        self.apply_theme(theme, options)
    }
}
