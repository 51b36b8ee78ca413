//! formwatch-tracker: Debounced form change tracking over a host document
//! model.
//!
//! This crate provides:
//! - `FormTracker`: the tracker owning the baseline, live, and removed
//!   snapshot maps, fed by external change and structural notifications
//! - `TrackerConfig`: debounce window and exclusion selectors
//! - Identity resolution with pluggable suffix generation
//! - `Scheduler` / `Debouncer`: the cancellable deferred-task abstraction
//!   used to collapse rapid triggers into one diff recomputation

pub mod config;
pub mod error;
pub mod exclude;
pub mod identity;
pub mod schedule;
pub mod tracker;

pub use config::{TrackerConfig, DEFAULT_DEBOUNCE_MS};
pub use error::{Result, TrackerError};
pub use exclude::ExclusionFilter;
pub use identity::{ensure_id, resolve_id, IdGenerator, UuidIdGenerator};
pub use schedule::{Debouncer, ManualScheduler, Scheduler};
pub use tracker::{ChangeHandler, FormTracker};
