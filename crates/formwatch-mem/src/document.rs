//! In-memory document host and subtree nodes.

use crate::field::MemField;
use formwatch_core::{DocumentHost, DomNode, FormField};

/// Reference to the external event that triggered a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemEvent {
    /// Event kind label, e.g. `"change"` or `"input"`.
    pub kind: String,
}

impl MemEvent {
    /// Event with the given kind label.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// A discrete value-commit event.
    #[must_use]
    pub fn change() -> Self {
        Self::new("change")
    }

    /// A continuous character-level input event.
    #[must_use]
    pub fn input() -> Self {
        Self::new("input")
    }
}

/// A node in a mutation batch: either a field or a container of nested
/// nodes.
#[derive(Debug, Clone, Default)]
pub struct MemNode {
    field: Option<MemField>,
    children: Vec<MemNode>,
}

impl MemNode {
    /// Node wrapping a single field.
    #[must_use]
    pub fn field(field: MemField) -> Self {
        Self {
            field: Some(field),
            children: Vec::new(),
        }
    }

    /// Container node holding nested children.
    #[must_use]
    pub fn container(children: impl IntoIterator<Item = MemNode>) -> Self {
        Self {
            field: None,
            children: children.into_iter().collect(),
        }
    }
}

impl DomNode for MemNode {
    type Field = MemField;

    fn fields_within(&self) -> Vec<MemField> {
        let mut fields = Vec::new();
        if let Some(field) = &self.field {
            fields.push(field.clone());
        }
        for child in &self.children {
            fields.extend(child.fields_within());
        }
        fields
    }
}

/// In-memory document model scoped to one root.
///
/// Structural mutations are driven by the embedder: [`MemDocument::insert`]
/// and [`MemDocument::remove`] keep the root's field membership in sync
/// with the `SubtreeChangeEvent` batches it delivers to the tracker.
#[derive(Debug, Default)]
pub struct MemDocument {
    root_selector: String,
    fields: Vec<MemField>,
}

impl MemDocument {
    /// Document whose root answers to the given selector.
    #[must_use]
    pub fn new(root_selector: impl Into<String>) -> Self {
        Self {
            root_selector: root_selector.into(),
            fields: Vec::new(),
        }
    }

    /// Add fields to the root.
    #[must_use]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = MemField>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Insert a field under the root.
    pub fn insert(&mut self, field: MemField) {
        self.fields.push(field);
    }

    /// Remove a field from under the root. Returns whether it was present.
    pub fn remove(&mut self, field: &MemField) -> bool {
        let initial_len = self.fields.len();
        self.fields.retain(|f| !f.same_field(field));
        self.fields.len() != initial_len
    }
}

impl DocumentHost for MemDocument {
    type Field = MemField;
    type Node = MemNode;
    type Event = MemEvent;

    fn resolve_root(&mut self, target: &str) -> bool {
        target == self.root_selector
    }

    fn fields(&self) -> Vec<MemField> {
        self.fields.clone()
    }

    fn fields_named(&self, name: &str) -> Vec<MemField> {
        self.fields
            .iter()
            .filter(|f| f.name().as_deref() == Some(name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root() {
        let mut doc = MemDocument::new("#form");
        assert!(doc.resolve_root("#form"));
        assert!(!doc.resolve_root("#missing"));
    }

    #[test]
    fn test_fields_named_filters_groups() {
        let doc = MemDocument::new("#form").with_fields([
            MemField::radio("color").with_attr_id("red"),
            MemField::radio("color").with_attr_id("blue"),
            MemField::radio("size").with_attr_id("large"),
        ]);

        let group = doc.fields_named("color");
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_node_recurses_into_nested_subtrees() {
        let inner = MemField::text().with_attr_id("inner");
        let leaf = MemField::text().with_attr_id("leaf");
        let node = MemNode::container([
            MemNode::field(leaf),
            MemNode::container([MemNode::field(inner)]),
        ]);

        let fields = node.fields_within();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].attr_id(), Some("inner".to_string()));
    }

    #[test]
    fn test_remove_by_identity() {
        let a = MemField::text();
        let b = MemField::text();
        let mut doc = MemDocument::new("#form").with_fields([a.clone(), b]);

        assert!(doc.remove(&a));
        assert!(!doc.remove(&a));
        assert_eq!(doc.fields().len(), 1);
    }
}
