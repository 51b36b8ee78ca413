//! Exclusion filtering.
//!
//! Exclusion is re-evaluated on every observation; an excluded field never
//! enters any state map, and a field's status is only valid at the moment
//! it is read.

use crate::identity;
use formwatch_core::FormField;

/// Marker prefix that makes a pattern match against resolved identifiers.
const ID_MARKER: char = '#';

/// Decides whether a field is excluded from tracking.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    selectors: Vec<String>,
}

impl ExclusionFilter {
    /// Filter over the given exclusion patterns.
    #[must_use]
    pub fn new(selectors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the field matches any exclusion pattern, structurally or by
    /// resolved identifier with the leading marker stripped.
    #[must_use]
    pub fn is_excluded<F: FormField + ?Sized>(&self, field: &F) -> bool {
        if self.selectors.is_empty() {
            return false;
        }

        let id = identity::resolve_id(field);
        self.selectors.iter().any(|selector| {
            if field.matches_selector(selector) {
                return true;
            }
            match (&id, selector.strip_prefix(ID_MARKER)) {
                (Some(id), Some(pattern)) => id == pattern,
                _ => false,
            }
        })
    }
}
