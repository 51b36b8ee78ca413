//! Abstractions over the host document model.
//!
//! The tracker never talks to a concrete document API. The embedding
//! application supplies a [`DocumentHost`] scoped to the tracked root and
//! delivers structural mutations as [`SubtreeChangeEvent`] batches.

use crate::field::FormField;

/// A node reference delivered by the host's subtree-mutation facility.
pub trait DomNode {
    /// Field handle type produced by this node.
    type Field: FormField;

    /// Trackable fields within this node, including the node itself when it
    /// is a field. Implementations must recurse into nested subtrees, not
    /// just immediate children.
    fn fields_within(&self) -> Vec<Self::Field>;
}

/// A batch of structural mutations under the tracked root.
#[derive(Debug, Clone)]
pub struct SubtreeChangeEvent<N> {
    /// Nodes inserted under the root.
    pub added: Vec<N>,
    /// Nodes removed from under the root.
    pub removed: Vec<N>,
}

impl<N> SubtreeChangeEvent<N> {
    /// Batch containing only insertions.
    #[must_use]
    pub fn added(nodes: impl IntoIterator<Item = N>) -> Self {
        Self {
            added: nodes.into_iter().collect(),
            removed: Vec::new(),
        }
    }

    /// Batch containing only removals.
    #[must_use]
    pub fn removed(nodes: impl IntoIterator<Item = N>) -> Self {
        Self {
            added: Vec::new(),
            removed: nodes.into_iter().collect(),
        }
    }
}

/// The host document model, scoped to one tracked root.
pub trait DocumentHost {
    /// Field handle type.
    type Field: FormField;

    /// Node type delivered in subtree mutation batches.
    type Node: DomNode<Field = Self::Field>;

    /// Reference to the external event that triggered a change, handed back
    /// to the embedding application on callback delivery.
    type Event: Clone;

    /// Scope the host to the tracked root. Returns `false` when the target
    /// selector matches nothing.
    fn resolve_root(&mut self, target: &str) -> bool;

    /// All trackable fields currently under the tracked root.
    fn fields(&self) -> Vec<Self::Field>;

    /// Fields under the root sharing a name attribute. Used to re-snapshot
    /// whole radio groups.
    fn fields_named(&self, name: &str) -> Vec<Self::Field>;
}
