//! Document boundary
//!
//! The engine never talks to a DOM directly. A [`Document`] exposes the few
//! operations theming needs: inline custom properties on the root element
//! and marked `<style>` nodes in the head.

use std::fmt::Debug;
use std::sync::Arc;

use crate::error::DomError;

pub trait Document {
    /// Handle to a style node created by this document
    type Node: Clone + Debug;

    /// Whether there is a rendering document to write to.
    ///
    /// Engines turn every write into a no-op when this is false.
    fn is_live(&self) -> bool {
        true
    }

    /// Set one custom property on the root element's inline style
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// Read a custom property from the root element's inline style
    fn root_property(&self, name: &str) -> Option<String>;

    /// Create a `<style>` node carrying `marker` and attach it to the head
    fn create_style_node(&self, marker: &str) -> Result<Self::Node, DomError>;

    /// Whether `node` is still attached to the document
    fn is_attached(&self, node: &Self::Node) -> bool;

    fn remove_node(&self, node: &Self::Node) -> Result<(), DomError>;

    /// Replace the node's entire text content
    fn set_text_content(&self, node: &Self::Node, text: &str) -> Result<(), DomError>;
}

impl<D: Document + ?Sized> Document for Arc<D> {
    type Node = D::Node;

    fn is_live(&self) -> bool {
        (**self).is_live()
    }

    fn set_root_property(&self, name: &str, value: &str) -> Result<(), DomError> {
        (**self).set_root_property(name, value)
    }

    fn root_property(&self, name: &str) -> Option<String> {
        (**self).root_property(name)
    }

    fn create_style_node(&self, marker: &str) -> Result<Self::Node, DomError> {
        (**self).create_style_node(marker)
    }

    fn is_attached(&self, node: &Self::Node) -> bool {
        (**self).is_attached(node)
    }

    fn remove_node(&self, node: &Self::Node) -> Result<(), DomError> {
        (**self).remove_node(node)
    }

    fn set_text_content(&self, node: &Self::Node, text: &str) -> Result<(), DomError> {
        (**self).set_text_content(node, text)
    }
}

/// Headless context: there is nothing to write to
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDocument;

impl Document for NoDocument {
    type Node = ();

    fn is_live(&self) -> bool {
        false
    }

    fn set_root_property(&self, _name: &str, _value: &str) -> Result<(), DomError> {
        Err(DomError::Unavailable("headless context".into()))
    }

    fn root_property(&self, _name: &str) -> Option<String> {
        None
    }

    fn create_style_node(&self, _marker: &str) -> Result<(), DomError> {
        Err(DomError::Unavailable("headless context".into()))
    }

    fn is_attached(&self, _node: &()) -> bool {
        false
    }

    fn remove_node(&self, _node: &()) -> Result<(), DomError> {
        Ok(())
    }

    fn set_text_content(&self, _node: &(), _text: &str) -> Result<(), DomError> {
        Err(DomError::Unavailable("headless context".into()))
    }
}
