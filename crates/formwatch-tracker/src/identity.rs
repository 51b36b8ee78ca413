//! Field identity resolution and generation.
//!
//! Generation and storage are separable concerns: an [`IdGenerator`]
//! produces the suffix, and [`FormField::persist_id`] stores the generated
//! identifier on the field's own associated storage.

use formwatch_core::FormField;
use uuid::Uuid;

/// Source of suffixes for generated field identifiers.
pub trait IdGenerator {
    /// Produce a suffix that is collision-free with overwhelming
    /// probability.
    fn suffix(&self) -> String;
}

/// Default generator backed by v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn suffix(&self) -> String {
        Uuid::new_v4().as_simple().to_string()
    }
}

/// Resolve a field's existing identifier without generating one.
///
/// Precedence: identifier assigned in the field's associated storage, then
/// the field's own identifier attribute. Empty strings count as absent.
#[must_use]
pub fn resolve_id<F: FormField + ?Sized>(field: &F) -> Option<String> {
    field
        .assigned_id()
        .filter(|id| !id.is_empty())
        .or_else(|| field.attr_id().filter(|id| !id.is_empty()))
}

/// Resolve a field's identifier, generating and persisting one when absent.
///
/// Generated identifiers are `"<name>-<suffix>"`, or `"<kind>-<suffix>"`
/// for nameless fields, and are written back onto the field's associated
/// storage so they stay stable for the lifetime of the field.
pub fn ensure_id<F: FormField + ?Sized>(field: &F, generator: &dyn IdGenerator) -> String {
    if let Some(id) = resolve_id(field) {
        return id;
    }

    let suffix = generator.suffix();
    let id = match field.name().filter(|name| !name.is_empty()) {
        Some(name) => format!("{name}-{suffix}"),
        None => format!("{}-{suffix}", field.kind()),
    };
    field.persist_id(&id);
    id
}
