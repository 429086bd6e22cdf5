//! glance-dom — Shared DomNode types for the GLANCE dashboard
//!
//! This crate defines the canonical Rust representation of the GLANCE JSON DOM
//! snapshot format. The reducer builds these trees and the HTML renderer
//! consumes them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag used for nodes whose children belong in the document `<head>`.
pub const HEAD_TAG: &str = "glance:head";

/// A single node in the view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomNode {
    /// HTML tag name (e.g. "div", "button", "input")
    pub tag: String,

    /// Stable identity for efficient DOM reuse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// HTML attributes (class, placeholder, data-*, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<BTreeMap<String, String>>,

    /// Map of DOM event name → action token (e.g. "click" → "like_post:1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<BTreeMap<String, String>>,

    /// Text content for leaf nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Child nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DomNode>>,
}

/// A complete snapshot wrapping the root DomNode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub root: DomNode,
}

impl Snapshot {
    pub fn new(root: DomNode) -> Self {
        Snapshot { root }
    }

    /// Compact JSON, one snapshot per line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl DomNode {
    /// Create an empty element
    pub fn element(tag: &str) -> Self {
        DomNode {
            tag: tag.to_string(),
            key: None,
            attrs: None,
            events: None,
            text: None,
            children: None,
        }
    }

    /// Create a simple text node
    pub fn text(tag: &str, content: &str) -> Self {
        DomNode {
            text: Some(content.to_string()),
            ..DomNode::element(tag)
        }
    }

    /// Create a head node; its children are hoisted into `<head>` by renderers.
    pub fn head(children: Vec<DomNode>) -> Self {
        DomNode::element(HEAD_TAG).with_children(children)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), value.into());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    /// Bind a DOM event to an action token.
    pub fn on(mut self, event: &str, action: impl Into<String>) -> Self {
        self.events
            .get_or_insert_with(BTreeMap::new)
            .insert(event.to_string(), action.into());
        self
    }

    pub fn with_text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    pub fn with_child(mut self, child: DomNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = DomNode>) -> Self {
        self.children
            .get_or_insert_with(Vec::new)
            .extend(children);
        self
    }

    /// Get a class attribute if present
    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.as_ref()?.get(name).map(|s| s.as_str())
    }

    /// Check if this node is a head node (for SSR extraction)
    pub fn is_head(&self) -> bool {
        self.tag == HEAD_TAG
    }

    /// Iterate over children (empty slice if none)
    pub fn children_iter(&self) -> &[DomNode] {
        match &self.children {
            Some(c) => c,
            None => &[],
        }
    }

    /// Get an event action by event name
    pub fn event(&self, name: &str) -> Option<&str> {
        self.events.as_ref()?.get(name).map(|s| s.as_str())
    }

    /// Depth-first search for the first node carrying `key`.
    pub fn find_key(&self, key: &str) -> Option<&DomNode> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children_iter().iter().find_map(|c| c.find_key(key))
    }

    /// Depth-first, pre-order walk over this node and all descendants.
    pub fn walk(&self) -> Vec<&DomNode> {
        let mut out = vec![self];
        for child in self.children_iter() {
            out.extend(child.walk());
        }
        out
    }

    /// All action tokens bound anywhere in the subtree, in document order.
    pub fn actions(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|n| n.events.as_ref())
            .flat_map(|e| e.values().map(|s| s.as_str()))
            .collect()
    }
}

/// Parse a snapshot from a JSON string
pub fn parse_snapshot(json: &str) -> Result<Snapshot, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse a single DomNode from a JSON string
pub fn parse_node(json: &str) -> Result<DomNode, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let json = r#"{
            "root": {
                "tag": "div",
                "key": "app",
                "children": [
                    { "tag": "h2", "text": "Dashboard Overview" },
                    { "tag": "button", "events": { "click": "toggle_role" }, "text": "Switch to Admin Mode" }
                ]
            }
        }"#;

        let snap = parse_snapshot(json).unwrap();
        assert_eq!(snap.root.tag, "div");
        assert_eq!(snap.root.key.as_deref(), Some("app"));
        assert_eq!(snap.root.children_iter().len(), 2);
        assert_eq!(snap.root.children_iter()[1].event("click"), Some("toggle_role"));
    }

    #[test]
    fn test_builder_and_json_shape() {
        let node = DomNode::element("button")
            .with_key("like-1")
            .with_class("like-btn")
            .on("click", "like_post:1")
            .with_text("15");
        let json = Snapshot::new(node).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"root":{"tag":"button","key":"like-1","attrs":{"class":"like-btn"},"events":{"click":"like_post:1"},"text":"15"}}"#
        );
    }

    #[test]
    fn test_find_key_and_actions() {
        let tree = DomNode::element("ul").with_children([
            DomNode::element("li").with_key("post-1").with_child(
                DomNode::element("button").on("click", "delete_post:1"),
            ),
            DomNode::element("li").with_key("post-2").with_child(
                DomNode::element("button").on("click", "delete_post:2"),
            ),
        ]);
        assert!(tree.find_key("post-2").is_some());
        assert!(tree.find_key("post-3").is_none());
        assert_eq!(tree.actions(), vec!["delete_post:1", "delete_post:2"]);
    }

    #[test]
    fn test_head_node() {
        let head = DomNode::head(vec![DomNode::text("title", "GLANCE")]);
        assert!(head.is_head());
        assert!(!DomNode::element("div").is_head());
        let back = parse_node(&serde_json::to_string(&head).unwrap()).unwrap();
        assert_eq!(back, head);
    }
}
