//! Merge timing.
//!
//! Collected only on the verbose path (`Pipeline::run_with_metrics`); plain
//! merges never touch a clock.

use std::time::Duration;

/// Stage timings of a single merge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeMetrics {
    /// Whole merge, flatten to assembled output.
    pub total: Duration,
    /// Flattening and token parsing.
    pub parse: Duration,
    /// Class group lookups.
    pub classify: Duration,
    /// Conflict resolution and assembly.
    pub resolve: Duration,
}
