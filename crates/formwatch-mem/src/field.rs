//! In-memory field handles.

use formwatch_core::{FieldKind, FormField};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct FieldState {
    kind: FieldKind,
    name: Option<String>,
    attr_id: Option<String>,
    assigned_id: Option<String>,
    classes: Vec<String>,
    value: String,
    checked: bool,
    selected: Vec<String>,
}

/// A cheap-to-clone handle onto one in-memory field.
///
/// All clones share the same underlying state, matching the reference
/// semantics of a real document tree.
#[derive(Debug, Clone, Default)]
pub struct MemField {
    state: Rc<RefCell<FieldState>>,
}

impl MemField {
    /// Create a field of the given kind.
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self {
            state: Rc::new(RefCell::new(FieldState {
                kind,
                ..FieldState::default()
            })),
        }
    }

    /// Create a plain text field.
    #[must_use]
    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    /// Create a checkbox field.
    #[must_use]
    pub fn checkbox() -> Self {
        Self::new(FieldKind::Checkbox)
    }

    /// Create a radio field grouped under the given name.
    #[must_use]
    pub fn radio(name: impl Into<String>) -> Self {
        Self::new(FieldKind::Radio).with_name(name)
    }

    /// Create a multi-selection list field.
    #[must_use]
    pub fn multi_select() -> Self {
        Self::new(FieldKind::SelectMultiple)
    }

    /// Set the name attribute.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.state.borrow_mut().name = Some(name.into());
        self
    }

    /// Set the identifier attribute.
    #[must_use]
    pub fn with_attr_id(self, id: impl Into<String>) -> Self {
        self.state.borrow_mut().attr_id = Some(id.into());
        self
    }

    /// Pre-assign an identifier in the field's associated storage, as an
    /// embedding application would.
    #[must_use]
    pub fn with_assigned_id(self, id: impl Into<String>) -> Self {
        self.state.borrow_mut().assigned_id = Some(id.into());
        self
    }

    /// Add a class usable in `.class` selectors.
    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.state.borrow_mut().classes.push(class.into());
        self
    }

    /// Set the current value.
    #[must_use]
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.state.borrow_mut().value = value.into();
        self
    }

    /// Set the checked state.
    #[must_use]
    pub fn with_checked(self, checked: bool) -> Self {
        self.state.borrow_mut().checked = checked;
        self
    }

    /// Mutate the current value.
    pub fn set_value(&self, value: impl Into<String>) {
        self.state.borrow_mut().value = value.into();
    }

    /// Mutate the checked state.
    pub fn set_checked(&self, checked: bool) {
        self.state.borrow_mut().checked = checked;
    }

    /// Replace the current multi-selection, in selection order.
    pub fn set_selected(&self, values: impl IntoIterator<Item = impl Into<String>>) {
        self.state.borrow_mut().selected = values.into_iter().map(Into::into).collect();
    }

    /// Whether two handles refer to the same underlying field.
    #[must_use]
    pub fn same_field(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn tag(&self) -> &'static str {
        match self.state.borrow().kind {
            FieldKind::TextArea => "textarea",
            FieldKind::Select | FieldKind::SelectMultiple => "select",
            _ => "input",
        }
    }
}

impl FormField for MemField {
    fn kind(&self) -> FieldKind {
        self.state.borrow().kind
    }

    fn name(&self) -> Option<String> {
        self.state.borrow().name.clone()
    }

    fn assigned_id(&self) -> Option<String> {
        self.state.borrow().assigned_id.clone()
    }

    fn attr_id(&self) -> Option<String> {
        self.state.borrow().attr_id.clone()
    }

    fn persist_id(&self, id: &str) {
        self.state.borrow_mut().assigned_id = Some(id.to_string());
    }

    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn checked(&self) -> bool {
        self.state.borrow().checked
    }

    fn selected_values(&self) -> Vec<String> {
        self.state.borrow().selected.clone()
    }

    /// Minimal structural matcher: `#id`, `.class`, `[name=value]`, or a
    /// bare tag name (`input`, `textarea`, `select`).
    fn matches_selector(&self, selector: &str) -> bool {
        let state = self.state.borrow();

        if let Some(id) = selector.strip_prefix('#') {
            return state.attr_id.as_deref() == Some(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return state.classes.iter().any(|c| c == class);
        }
        if let Some(rest) = selector.strip_prefix("[name=") {
            return rest
                .strip_suffix(']')
                .is_some_and(|name| state.name.as_deref() == Some(name));
        }

        drop(state);
        selector == self.tag()
    }
}
