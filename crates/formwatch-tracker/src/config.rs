//! Tracker configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Configuration for a [`FormTracker`](crate::FormTracker).
///
/// The change handler is configured on the tracker itself rather than here;
/// an absent handler is the normalized form of a malformed callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Debounce window in milliseconds. Repeated triggers within the window
    /// collapse into one recomputation.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Structural selectors (or `#id` patterns) whose fields are never
    /// tracked.
    #[serde(default)]
    pub exclude_selectors: Vec<String>,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            exclude_selectors: Vec::new(),
        }
    }
}

impl TrackerConfig {
    /// Set the debounce window in milliseconds.
    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Set the exclusion selectors.
    #[must_use]
    pub fn with_exclude_selectors(
        mut self,
        selectors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.exclude_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Debounce window as a [`Duration`].
    #[must_use]
    pub const fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
