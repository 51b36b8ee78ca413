//! In-memory document host for formwatch trackers.
//!
//! Implements the `formwatch-core` host abstractions without a real
//! document tree:
//! - `MemField`: shared-state field handles with a minimal selector matcher
//! - `MemNode` / `MemDocument`: nestable mutation nodes and the host itself
//! - `MemEvent`: cloneable triggering-event references
//!
//! Useful for embedders that mirror form state from elsewhere, and as the
//! test double for `formwatch-tracker`.

pub mod document;
pub mod field;

pub use document::{MemDocument, MemEvent, MemNode};
pub use field::MemField;
