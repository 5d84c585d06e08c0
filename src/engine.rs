//! Merge engine.
//!
//! ## How the parts work together
//!
//! ```text
//! ClassGroupDef + ConflictDef ──┐
//!                               │  RuleTable::build              (rule_table.rs)
//!                               └───────────────┬──────────────
//!                                               │
//! inputs ── flatten (flatten.rs)                │
//!              │                                │
//!              v                                │
//!         parse_token (token.rs)                │
//!           - modifiers, `!`, postfix `/`       │
//!           - class prefix, malformed brackets  │
//!              │                                │
//!              v                                v
//!         classify (classify.rs) ───── trie lookup + validators
//!              │
//!              v
//!         resolve (resolve.rs)
//!           - reverse walk, per-scope claims    ModifierSorter (modifiers.rs)
//!              │
//!              v
//!         assemble (flatten.rs) ──▶ String
//! ```
//!
//! The rule table is the only long-lived state and is read-only once built.
//! Everything else is allocated per call by `Pipeline`.
//!
//! ## Responsibilities by module
//!
//! - `rule_table.rs`: group arena, class-part trie, conflict bitsets, build
//!   errors.
//! - `token.rs`: splits one raw token into modifiers and base.
//! - `classify.rs`: base → class group or arbitrary property.
//! - `modifiers.rs`: scope keys, with optional modifier normalization.
//! - `resolve.rs`: decides which tokens survive.
//! - `flatten.rs`: input splitting, output assembly and plain joining.
//! - `metrics.rs`: opt-in timings for the verbose path.
//!
//! ## Debugging
//!
//! Rule table builds log at `debug`, per-token outcomes at `trace`. The CLI
//! installs a subscriber when `RUST_LOG` is set (`RUST_LOG=twmerge=trace`).

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/flatten.rs"]
mod flatten;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/modifiers.rs"]
mod modifiers;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/rule_table.rs"]
mod rule_table;
#[path = "engine/token.rs"]
mod token;

pub(crate) use flatten::join;
pub use metrics::MergeMetrics;
pub(crate) use modifiers::ModifierSorter;
pub(crate) use pipeline::Pipeline;
pub use resolve::Outcome;
pub use rule_table::{ClassGroupId, RuleTable, RuleTableError};
