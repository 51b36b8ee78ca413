//! Field kinds and the host field abstraction.

use serde::{Deserialize, Serialize};

/// Kind of a trackable form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line text input.
    #[default]
    Text,
    /// Multi-line text area.
    #[serde(rename = "textarea")]
    TextArea,
    /// Password input.
    Password,
    /// Hidden input.
    Hidden,
    /// Numeric input.
    Number,
    /// Binary checkbox.
    Checkbox,
    /// Radio button, grouped by shared name.
    Radio,
    /// Single-selection list.
    Select,
    /// Multi-selection list.
    SelectMultiple,
}

impl FieldKind {
    /// Whether this kind carries a checked state (checkbox/radio).
    #[must_use]
    pub const fn is_checkable(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    /// Whether this kind holds an ordered multi-value selection.
    #[must_use]
    pub const fn is_multi_select(self) -> bool {
        matches!(self, Self::SelectMultiple)
    }

    /// Stable lowercase name, used as the prefix of generated identifiers
    /// for nameless fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Password => "password",
            Self::Hidden => "hidden",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::SelectMultiple => "select-multiple",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A handle onto one trackable field of the host document model.
///
/// Implementations are cheap-to-clone references into the host's tree, not
/// owned state; reads always reflect the field's current live state.
pub trait FormField {
    /// Kind of the field.
    fn kind(&self) -> FieldKind;

    /// The field's name attribute, if any. Radio fields sharing a name form
    /// a group.
    fn name(&self) -> Option<String>;

    /// Identifier previously assigned by the embedding application or a
    /// tracker, read from the field's associated storage.
    fn assigned_id(&self) -> Option<String>;

    /// The field's own identifier attribute, if any.
    fn attr_id(&self) -> Option<String>;

    /// Persist a generated identifier onto the field's associated storage
    /// for the lifetime of the field.
    fn persist_id(&self, id: &str);

    /// Current string content of the field. Empty string if unset.
    fn value(&self) -> String;

    /// Current checked state. Only meaningful for checkable kinds.
    fn checked(&self) -> bool;

    /// String values of every currently selected option, in selection
    /// order. Only meaningful for multi-selection kinds.
    fn selected_values(&self) -> Vec<String>;

    /// Whether the field matches a structural selector.
    fn matches_selector(&self, selector: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkable_kinds() {
        assert!(FieldKind::Checkbox.is_checkable());
        assert!(FieldKind::Radio.is_checkable());
        assert!(!FieldKind::Text.is_checkable());
        assert!(!FieldKind::SelectMultiple.is_checkable());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::SelectMultiple.to_string(), "select-multiple");
        assert_eq!(FieldKind::Text.to_string(), "text");
    }
}
