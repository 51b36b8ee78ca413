//! Comparable snapshots of live field state.

use crate::field::{FieldKind, FormField};
use serde::{Deserialize, Serialize};

/// Comparable value of a field: a single string, or an ordered sequence of
/// strings for multi-selection fields.
///
/// Equality is derived: sequences compare element-wise in order, scalars
/// compare directly, and a scalar never equals a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single string value.
    Scalar(String),
    /// Ordered multi-selection values.
    Many(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Scalar(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Point-in-time capture of one field's comparable state.
///
/// `checked` is `Some` only for checkbox/radio kinds; it stays `None` for
/// every other kind so that absent and false compare as distinct states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    /// Comparable value representation.
    pub value: FieldValue,

    /// Checked state for binary-choice kinds, absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl FieldSnapshot {
    /// Capture the current state of a field.
    ///
    /// Pure read of the field's live state: checkable kinds record their
    /// checked flag, multi-selection kinds record their selected values in
    /// selection order, everything else records its string content.
    #[must_use]
    pub fn capture<F: FormField + ?Sized>(field: &F) -> Self {
        let kind = field.kind();
        let checked = kind.is_checkable().then(|| field.checked());
        let value = if kind.is_multi_select() {
            FieldValue::Many(field.selected_values())
        } else {
            FieldValue::Scalar(field.value())
        };
        Self { value, checked }
    }

    /// Snapshot with a scalar value and no checked state.
    #[must_use]
    pub fn scalar(value: impl Into<String>) -> Self {
        Self {
            value: FieldValue::Scalar(value.into()),
            checked: None,
        }
    }

    /// Snapshot with a scalar value and a checked state.
    #[must_use]
    pub fn checkable(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: FieldValue::Scalar(value.into()),
            checked: Some(checked),
        }
    }

    /// Snapshot with an ordered multi-selection value.
    #[must_use]
    pub fn many(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            value: FieldValue::Many(values.into_iter().map(Into::into).collect()),
            checked: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct StubField {
        kind: FieldKind,
        value: String,
        checked: bool,
        selected: Vec<String>,
        persisted: RefCell<Option<String>>,
    }

    impl StubField {
        fn new(kind: FieldKind) -> Self {
            Self {
                kind,
                value: String::new(),
                checked: false,
                selected: Vec::new(),
                persisted: RefCell::new(None),
            }
        }
    }

    impl FormField for StubField {
        fn kind(&self) -> FieldKind {
            self.kind
        }
        fn name(&self) -> Option<String> {
            None
        }
        fn assigned_id(&self) -> Option<String> {
            self.persisted.borrow().clone()
        }
        fn attr_id(&self) -> Option<String> {
            None
        }
        fn persist_id(&self, id: &str) {
            *self.persisted.borrow_mut() = Some(id.to_string());
        }
        fn value(&self) -> String {
            self.value.clone()
        }
        fn checked(&self) -> bool {
            self.checked
        }
        fn selected_values(&self) -> Vec<String> {
            self.selected.clone()
        }
        fn matches_selector(&self, _selector: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_capture_text_field() {
        let mut field = StubField::new(FieldKind::Text);
        field.value = "hello".to_string();

        let snapshot = FieldSnapshot::capture(&field);
        assert_eq!(snapshot, FieldSnapshot::scalar("hello"));
        assert_eq!(snapshot.checked, None);
    }

    #[test]
    fn test_capture_unset_value_is_empty_string() {
        let field = StubField::new(FieldKind::Text);
        assert_eq!(FieldSnapshot::capture(&field), FieldSnapshot::scalar(""));
    }

    #[test]
    fn test_capture_checkbox_records_checked() {
        let mut field = StubField::new(FieldKind::Checkbox);
        field.value = "on".to_string();
        field.checked = true;

        let snapshot = FieldSnapshot::capture(&field);
        assert_eq!(snapshot.checked, Some(true));
        assert_eq!(snapshot.value, FieldValue::from("on"));
    }

    #[test]
    fn test_capture_multi_select_keeps_selection_order() {
        let mut field = StubField::new(FieldKind::SelectMultiple);
        field.selected = vec!["b".to_string(), "a".to_string()];

        let snapshot = FieldSnapshot::capture(&field);
        assert_eq!(snapshot, FieldSnapshot::many(["b", "a"]));
    }

    #[test]
    fn test_sequence_equality_is_order_sensitive() {
        assert_ne!(FieldSnapshot::many(["a", "b"]), FieldSnapshot::many(["b", "a"]));
        assert_eq!(FieldSnapshot::many(["a", "b"]), FieldSnapshot::many(["a", "b"]));
    }

    #[test]
    fn test_scalar_never_equals_sequence() {
        assert_ne!(
            FieldValue::Scalar("a".to_string()),
            FieldValue::Many(vec!["a".to_string()])
        );
    }

    #[test]
    fn test_checked_compared_including_absence() {
        assert_ne!(FieldSnapshot::scalar("x"), FieldSnapshot::checkable("x", false));
        assert_eq!(FieldSnapshot::checkable("x", true), FieldSnapshot::checkable("x", true));
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = FieldSnapshot::checkable("yes", true);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"value":"yes","checked":true}"#);

        let snapshot = FieldSnapshot::many(["a", "b"]);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"value":["a","b"]}"#);
    }
}
