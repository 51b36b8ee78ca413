//! Diff engine over the baseline, live, and removed snapshot maps.
//!
//! Both entry points classify identically: `has_changes` short-circuits on
//! the first detected difference, `compute` always produces the full
//! four-category classification.

use crate::snapshot::{FieldSnapshot, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier of a tracked field, unique within one tracker.
pub type FieldId = String;

/// Snapshot state set keyed by field identifier.
pub type SnapshotMap = BTreeMap<FieldId, FieldSnapshot>;

/// A field present in the live state but absent from the baseline and from
/// the removed history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedField {
    /// Field identifier.
    pub id: FieldId,
    /// Current value.
    pub value: FieldValue,
    /// Current checked state, for checkable kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// A field present in the baseline but absent from the live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedField {
    /// Field identifier.
    pub id: FieldId,
    /// Baseline value at capture time.
    pub value: FieldValue,
    /// Baseline checked state, for checkable kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// A field whose live snapshot differs from its baseline snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedField {
    /// Field identifier.
    pub id: FieldId,
    /// Baseline snapshot.
    pub original: FieldSnapshot,
    /// Current live snapshot.
    pub current: FieldSnapshot,
}

/// A field that was structurally removed while tracked and later reappeared
/// under the same identifier with a different snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReAddedField {
    /// Field identifier.
    pub id: FieldId,
    /// Current value.
    pub value: FieldValue,
    /// Current checked state, for checkable kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Value recorded when the field was removed.
    pub previous_value: FieldValue,
    /// Checked state recorded when the field was removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_checked: Option<bool>,
}

/// Categorized difference between the baseline and the live state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    /// Fields newly present since the baseline was captured.
    #[serde(default)]
    pub added: Vec<AddedField>,
    /// Fields missing from the live state.
    #[serde(default)]
    pub removed: Vec<RemovedField>,
    /// Fields whose value or checked state changed.
    #[serde(default)]
    pub modified: Vec<ModifiedField>,
    /// Fields removed and re-added with a different snapshot.
    #[serde(default)]
    pub re_added: Vec<ReAddedField>,
}

impl DiffResult {
    /// Whether no category contains any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.modified.is_empty()
            && self.re_added.is_empty()
    }

    /// Total number of entries across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len() + self.re_added.len()
    }
}

/// Whether any difference exists between the baseline and the live state.
///
/// Short-circuits on the first added, modified, or re-added-with-difference
/// entry; only when the live pass finds nothing does it scan the baseline
/// for removals.
#[must_use]
pub fn has_changes(baseline: &SnapshotMap, live: &SnapshotMap, removed: &SnapshotMap) -> bool {
    for (id, cur) in live {
        if let Some(prev) = removed.get(id) {
            if prev != cur {
                return true;
            }
        } else if let Some(base) = baseline.get(id) {
            if base != cur {
                return true;
            }
        } else {
            return true;
        }
    }

    baseline.keys().any(|id| !live.contains_key(id))
}

/// Compute the full categorized diff between the baseline and the live
/// state.
///
/// The removed history takes precedence over the baseline: a field that was
/// removed while tracked and later reappears under the same identifier is
/// classified against its removal-time snapshot, even when it also has a
/// baseline entry.
#[must_use]
pub fn compute(baseline: &SnapshotMap, live: &SnapshotMap, removed: &SnapshotMap) -> DiffResult {
    let mut result = DiffResult::default();

    for (id, cur) in live {
        if let Some(prev) = removed.get(id) {
            if prev != cur {
                result.re_added.push(ReAddedField {
                    id: id.clone(),
                    value: cur.value.clone(),
                    checked: cur.checked,
                    previous_value: prev.value.clone(),
                    previous_checked: prev.checked,
                });
            }
        } else if let Some(base) = baseline.get(id) {
            if base != cur {
                result.modified.push(ModifiedField {
                    id: id.clone(),
                    original: base.clone(),
                    current: cur.clone(),
                });
            }
        } else {
            result.added.push(AddedField {
                id: id.clone(),
                value: cur.value.clone(),
                checked: cur.checked,
            });
        }
    }

    for (id, base) in baseline {
        if !live.contains_key(id) {
            result.removed.push(RemovedField {
                id: id.clone(),
                value: base.value.clone(),
                checked: base.checked,
            });
        }
    }

    result
}
