//! Browser document backed by `web-sys`
//!
//! Handles are looked up from the global window on every call, so the
//! backend holds no JS objects and stays `Send + Sync`. Style nodes are
//! identified by the value of their marker attribute, drawn from one
//! process-wide counter so every `WebDocument` on a page hands out distinct
//! nodes.

use std::sync::atomic::{AtomicU64, Ordering};

use wasm_bindgen::JsCast;

use crate::document::Document;
use crate::error::DomError;

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// A style node created by [`WebDocument`], found again via `[marker="id"]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebStyleNode {
    marker: String,
    id: String,
}

impl WebStyleNode {
    fn selector(&self) -> String {
        format!("style[{}=\"{}\"]", self.marker, self.id)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebDocument;

impl WebDocument {
    pub fn new() -> Self {
        Self
    }

    fn allocate(marker: &str) -> WebStyleNode {
        WebStyleNode {
            marker: marker.to_string(),
            id: NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed).to_string(),
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|window| window.document())
    }

    fn root_element() -> Result<web_sys::HtmlElement, DomError> {
        Self::document()
            .and_then(|document| document.document_element())
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
            .ok_or_else(|| DomError::Unavailable("document element unavailable".into()))
    }

    fn find(node: &WebStyleNode) -> Option<web_sys::Element> {
        Self::document()?
            .query_selector(&node.selector())
            .ok()
            .flatten()
    }
}

fn rejected(operation: &'static str) -> impl FnOnce(wasm_bindgen::JsValue) -> DomError {
    move |err| DomError::Rejected {
        operation,
        message: format!("{err:?}"),
    }
}

impl Document for WebDocument {
    type Node = WebStyleNode;

    fn is_live(&self) -> bool {
        Self::document().is_some()
    }

    fn set_root_property(&self, name: &str, value: &str) -> Result<(), DomError> {
        Self::root_element()?
            .style()
            .set_property(name, value)
            .map_err(rejected("set_property"))
    }

    fn root_property(&self, name: &str) -> Option<String> {
        let value = Self::root_element()
            .ok()?
            .style()
            .get_property_value(name)
            .ok()?;
        (!value.is_empty()).then_some(value)
    }

    fn create_style_node(&self, marker: &str) -> Result<WebStyleNode, DomError> {
        let document = Self::document()
            .ok_or_else(|| DomError::Unavailable("window.document unavailable".into()))?;
        let head = document
            .head()
            .ok_or_else(|| DomError::Unavailable("document.head unavailable".into()))?;

        let node = Self::allocate(marker);
        let element = document
            .create_element("style")
            .map_err(rejected("create_element"))?;
        element
            .set_attribute(&node.marker, &node.id)
            .map_err(rejected("set_attribute"))?;
        head.append_child(&element)
            .map_err(rejected("append_child"))?;
        Ok(node)
    }

    fn is_attached(&self, node: &WebStyleNode) -> bool {
        Self::find(node).is_some()
    }

    fn remove_node(&self, node: &WebStyleNode) -> Result<(), DomError> {
        if let Some(element) = Self::find(node) {
            element.remove();
        }
        Ok(())
    }

    fn set_text_content(&self, node: &WebStyleNode, text: &str) -> Result<(), DomError> {
        let element = Self::find(node).ok_or_else(|| DomError::Rejected {
            operation: "set_text_content",
            message: format!("{} is not attached", node.selector()),
        })?;
        element.set_text_content(Some(text));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique_across_documents() {
        let a = WebDocument::allocate("data-dashforge-utilities");
        let b = WebDocument::allocate("data-dashforge-utilities");
        assert_ne!(a, b);
        assert_ne!(a.selector(), b.selector());
    }
}
