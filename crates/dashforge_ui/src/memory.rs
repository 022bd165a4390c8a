//! In-memory document
//!
//! Models just enough of a page for theming: the root element's inline
//! custom properties and the `<style>` nodes in the head. Used for headless
//! rendering and for tests.

use std::sync::Mutex;

use indexmap::IndexMap;

use crate::document::Document;
use crate::error::DomError;

/// Handle to a style node in a [`MemoryDocument`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

/// Snapshot of a `<style>` node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleElement {
    pub id: NodeId,
    pub marker: String,
    pub text: String,
}

#[derive(Default)]
struct Inner {
    root_style: IndexMap<String, String>,
    head: Vec<StyleElement>,
    next_id: u64,
    read_only: bool,
}

#[derive(Default)]
pub struct MemoryDocument {
    inner: Mutex<Inner>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline custom properties on the root element, in write order
    pub fn root_style(&self) -> IndexMap<String, String> {
        self.inner.lock().unwrap().root_style.clone()
    }

    /// Drop the root element's inline style
    pub fn clear_root_style(&self) {
        self.inner.lock().unwrap().root_style.clear();
    }

    /// Attached style nodes carrying `marker`
    pub fn style_elements(&self, marker: &str) -> Vec<StyleElement> {
        self.inner
            .lock()
            .unwrap()
            .head
            .iter()
            .filter(|el| el.marker == marker)
            .cloned()
            .collect()
    }

    /// Detach a node behind the engine's back, as a script or devtools would
    pub fn detach(&self, node: NodeId) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.head.len();
        inner.head.retain(|el| el.id != node);
        inner.head.len() != before
    }

    /// Reject every subsequent write, as a locked-down page would
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.lock().unwrap().read_only = read_only;
    }

    fn check_writable(inner: &Inner, operation: &'static str) -> Result<(), DomError> {
        if inner.read_only {
            return Err(DomError::Rejected {
                operation,
                message: "document is read-only".into(),
            });
        }
        Ok(())
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn set_root_property(&self, name: &str, value: &str) -> Result<(), DomError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner, "set_property")?;
        inner.root_style.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn root_property(&self, name: &str) -> Option<String> {
        self.inner.lock().unwrap().root_style.get(name).cloned()
    }

    fn create_style_node(&self, marker: &str) -> Result<NodeId, DomError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner, "append_child")?;
        let id = NodeId(inner.next_id);
        inner.next_id += 1;
        inner.head.push(StyleElement {
            id,
            marker: marker.to_string(),
            text: String::new(),
        });
        Ok(id)
    }

    fn is_attached(&self, node: &NodeId) -> bool {
        self.inner.lock().unwrap().head.iter().any(|el| el.id == *node)
    }

    fn remove_node(&self, node: &NodeId) -> Result<(), DomError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner, "remove")?;
        inner.head.retain(|el| el.id != *node);
        Ok(())
    }

    fn set_text_content(&self, node: &NodeId, text: &str) -> Result<(), DomError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner, "set_text_content")?;
        match inner.head.iter_mut().find(|el| el.id == *node) {
            Some(el) => {
                el.text = text.to_string();
                Ok(())
            }
            None => Err(DomError::Rejected {
                operation: "set_text_content",
                message: format!("node {node:?} is not attached"),
            }),
        }
    }
}
