//! The form state tracker.
//!
//! Owns the three snapshot maps (baseline, live, removed), feeds external
//! change and structural notifications through identity resolution and
//! snapshot capture, and reports categorized diffs after a debounce window.

use crate::config::TrackerConfig;
use crate::error::{Result, TrackerError};
use crate::exclude::ExclusionFilter;
use crate::identity::{self, IdGenerator, UuidIdGenerator};
use crate::schedule::{Debouncer, Scheduler};
use formwatch_core::{
    diff, DiffResult, DocumentHost, DomNode, FieldKind, FieldSnapshot, FormField, SnapshotMap,
    SubtreeChangeEvent,
};
use tracing::{debug, error, info};

/// Callback invoked after each debounced recomputation.
pub type ChangeHandler<E> = Box<dyn FnMut(bool, &DiffResult, Option<&E>)>;

/// Tracks mutable form state against a captured baseline.
///
/// All mutation flows through the tracker's own methods on a single logical
/// thread of control; the three maps are never reachable from outside.
pub struct FormTracker<H: DocumentHost, S: Scheduler> {
    host: H,
    filter: ExclusionFilter,
    generator: Box<dyn IdGenerator>,
    debouncer: Debouncer<S>,
    baseline: SnapshotMap,
    live: SnapshotMap,
    removed: SnapshotMap,
    last_event: Option<H::Event>,
    on_change: Option<ChangeHandler<H::Event>>,
    active: bool,
}

impl<H: DocumentHost, S: Scheduler> FormTracker<H, S> {
    /// Attach to the target, capturing the baseline from all trackable
    /// fields present.
    ///
    /// # Errors
    /// Returns [`TrackerError::TargetNotFound`] when the host cannot
    /// resolve the target.
    pub fn try_attach(
        mut host: H,
        target: &str,
        config: &TrackerConfig,
        scheduler: S,
    ) -> Result<Self> {
        if !host.resolve_root(target) {
            return Err(TrackerError::TargetNotFound(target.to_string()));
        }
        Ok(Self::build(host, target, config, scheduler))
    }

    /// Attach to the target, reporting resolution failure instead of
    /// returning it: the failure is logged and the returned tracker is
    /// inert, with every method a no-op returning inert defaults.
    pub fn attach(mut host: H, target: &str, config: &TrackerConfig, scheduler: S) -> Self {
        if host.resolve_root(target) {
            Self::build(host, target, config, scheduler)
        } else {
            error!(target, "tracking target not found; tracker is inert");
            Self {
                host,
                filter: ExclusionFilter::default(),
                generator: Box::new(UuidIdGenerator),
                debouncer: Debouncer::new(scheduler, config.debounce_delay()),
                baseline: SnapshotMap::new(),
                live: SnapshotMap::new(),
                removed: SnapshotMap::new(),
                last_event: None,
                on_change: None,
                active: false,
            }
        }
    }

    fn build(host: H, target: &str, config: &TrackerConfig, scheduler: S) -> Self {
        let filter = ExclusionFilter::new(config.exclude_selectors.iter().cloned());
        let generator: Box<dyn IdGenerator> = Box::new(UuidIdGenerator);

        let mut live = SnapshotMap::new();
        for field in host.fields() {
            if filter.is_excluded(&field) {
                continue;
            }
            let id = identity::ensure_id(&field, generator.as_ref());
            live.insert(id, FieldSnapshot::capture(&field));
        }
        let baseline = live.clone();

        info!(target, fields = live.len(), "attached form tracker");

        Self {
            host,
            filter,
            generator,
            debouncer: Debouncer::new(scheduler, config.debounce_delay()),
            baseline,
            live,
            removed: SnapshotMap::new(),
            last_event: None,
            on_change: None,
            active: true,
        }
    }

    /// Whether the tracker attached successfully and is still observing.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Set the callback invoked with `(has_changes, diff, triggering
    /// event)` after each debounced recomputation.
    pub fn set_change_handler(
        &mut self,
        handler: impl FnMut(bool, &DiffResult, Option<&H::Event>) + 'static,
    ) {
        self.on_change = Some(Box::new(handler));
    }

    /// Substitute the identifier-suffix generator.
    pub fn set_id_generator(&mut self, generator: impl IdGenerator + 'static) {
        self.generator = Box::new(generator);
    }

    /// Access the host document model.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host document model.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Access the underlying scheduler, for hosts that pump timers by hand.
    pub const fn scheduler_mut(&mut self) -> &mut S {
        self.debouncer.scheduler_mut()
    }

    /// React to a discrete value-commit on a field.
    ///
    /// A commit on a radio field with a non-empty group name re-snapshots
    /// every field sharing that name: selecting one radio implicitly
    /// deselects its siblings, which a single-field update would miss.
    pub fn notify_value_commit(&mut self, field: &H::Field, event: H::Event) {
        if !self.active || self.filter.is_excluded(field) {
            return;
        }

        let group = field.name().filter(|name| !name.is_empty());
        if field.kind() == FieldKind::Radio {
            if let Some(name) = group {
                let members = self.host.fields_named(&name);
                for member in &members {
                    self.observe(member);
                }
            } else {
                self.observe(field);
            }
        } else {
            self.observe(field);
        }

        self.record_trigger(Some(event));
    }

    /// React to a continuous character-level input on a field.
    pub fn notify_input(&mut self, field: &H::Field, event: H::Event) {
        if !self.active || self.filter.is_excluded(field) {
            return;
        }
        self.observe(field);
        self.record_trigger(Some(event));
    }

    /// React to a batch of structural insertions and removals under the
    /// tracked root.
    ///
    /// Inserted trackable fields are treated exactly as value commits; no
    /// event reference exists on this path, so the stored triggering event
    /// is cleared. Removed trackable fields with a live entry have that
    /// entry moved into the removed history.
    pub fn notify_subtree_change(&mut self, change: &SubtreeChangeEvent<H::Node>) {
        if !self.active {
            return;
        }

        let mut touched = false;

        for node in &change.added {
            for field in node.fields_within() {
                if self.filter.is_excluded(&field) {
                    continue;
                }
                self.observe(&field);
                touched = true;
            }
        }

        for node in &change.removed {
            for field in node.fields_within() {
                if self.filter.is_excluded(&field) {
                    continue;
                }
                let Some(id) = identity::resolve_id(&field) else {
                    continue;
                };
                if let Some(snapshot) = self.live.remove(&id) {
                    debug!(id = %id, "field removed; retaining snapshot");
                    self.removed.insert(id, snapshot);
                    touched = true;
                }
            }
        }

        if touched {
            self.record_trigger(None);
        }
    }

    /// Whether any difference exists between the baseline and the live
    /// state. Pure query; repeated calls without intervening mutation
    /// return the same answer.
    #[must_use]
    pub fn check_for_changes(&self) -> bool {
        self.active && diff::has_changes(&self.baseline, &self.live, &self.removed)
    }

    /// Full categorized diff between the baseline and the live state.
    #[must_use]
    pub fn get_changes(&self) -> DiffResult {
        if self.active {
            diff::compute(&self.baseline, &self.live, &self.removed)
        } else {
            DiffResult::default()
        }
    }

    /// Replace the baseline with an owned copy of the current live state.
    ///
    /// The removed history is deliberately untouched. Triggers a debounced
    /// recomputation, which reports no changes unless the live state moved
    /// concurrently.
    pub fn reset_state(&mut self) {
        if !self.active {
            return;
        }
        self.baseline = self.live.clone();
        debug!(fields = self.baseline.len(), "reset baseline");
        self.debouncer.trigger();
    }

    /// Deliver a fired scheduler handle. Stale handles are ignored; the
    /// pending one runs the diff engine and invokes the change handler.
    pub fn timer_fired(&mut self, handle: S::Handle) {
        if !self.active || !self.debouncer.acknowledge(handle) {
            return;
        }

        let changed = diff::has_changes(&self.baseline, &self.live, &self.removed);
        let result = diff::compute(&self.baseline, &self.live, &self.removed);
        debug!(changed, entries = result.len(), "recomputed form diff");

        if let Some(handler) = self.on_change.as_mut() {
            handler(changed, &result, self.last_event.as_ref());
        }
    }

    /// Stop observing: cancels any pending recomputation and drops the
    /// change handler. The tracker becomes inert.
    pub fn detach(&mut self) {
        if !self.active {
            return;
        }
        self.debouncer.cancel_pending();
        self.on_change = None;
        self.active = false;
        info!("detached form tracker");
    }

    /// Re-snapshot one field into the live map. Exclusion is re-evaluated
    /// here, at observation time.
    fn observe(&mut self, field: &H::Field) {
        if self.filter.is_excluded(field) {
            return;
        }
        let id = identity::ensure_id(field, self.generator.as_ref());
        self.live.insert(id, FieldSnapshot::capture(field));
    }

    fn record_trigger(&mut self, event: Option<H::Event>) {
        self.last_event = event;
        self.debouncer.trigger();
    }
}
