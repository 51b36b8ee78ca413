//! formwatch-core: Domain model and diff engine for form state tracking.
//!
//! This crate provides:
//! - `FieldKind` / `FormField`: the abstraction over one trackable field of
//!   the host document model
//! - `FieldSnapshot`: comparable captures of live field state
//! - `DocumentHost` / `DomNode` / `SubtreeChangeEvent`: the seam to the
//!   host's element querying and mutation notification facilities
//! - The diff engine reconciling baseline, live, and removed snapshot maps
//!   into a categorized `DiffResult`

pub mod diff;
pub mod field;
pub mod host;
pub mod snapshot;

pub use diff::{
    AddedField, DiffResult, FieldId, ModifiedField, ReAddedField, RemovedField, SnapshotMap,
};
pub use field::{FieldKind, FormField};
pub use host::{DocumentHost, DomNode, SubtreeChangeEvent};
pub use snapshot::{FieldSnapshot, FieldValue};
