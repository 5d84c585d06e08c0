//! Merge tailwind-style utility class lists without style conflicts.
//!
//! Later classes override earlier ones that style the same property under the
//! same variant scope; everything else is kept verbatim and in order.
//!
//! ```
//! use twmerge::merge;
//!
//! assert_eq!(merge(&["px-2 py-1 bg-red hover:bg-dark-red", "p-3 bg-[#B91C1C]"]), "hover:bg-dark-red p-3 bg-[#B91C1C]");
//! assert_eq!(merge(&["my-custom-class px-2", "px-4"]), "my-custom-class px-4");
//! ```
//!
//! The built-in rule table covers the tailwind v4 vocabulary. Custom tables
//! (class prefix, extra groups, extra conflicts) go through [`Config`] and
//! [`Merger`].

extern crate self as twmerge;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub use api::{Config, MergeReport, Merger, ModifierOrder, TokenTrace, join, merge, merge_verbose, merge_with};
pub use engine::{ClassGroupId, MergeMetrics, Outcome, RuleTable, RuleTableError};
pub use rules::{ClassDef, ClassGroupDef, ConflictDef, IntoClassDefs, Validator, nest};

// --- Internal types ---------------------------------------------------------

bitflags::bitflags! {
    /// Per-token facts discovered by the token parser.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub(crate) struct TokenFlags: u8 {
        /// Carries the `!` important marker (either position).
        const IMPORTANT = 1 << 0;
        /// Has a `/` outside brackets after the last modifier.
        const POSTFIX   = 1 << 1;
        /// Does not carry the configured class prefix.
        const EXTERNAL  = 1 << 2;
        /// Unbalanced `[]` or `()`; never classified.
        const MALFORMED = 1 << 3;
    }
}

/// A raw token split into its variant modifiers and base utility.
///
/// ```text
/// "md:hover:!text-lg/7"
///  ^^^^^^^^ modifiers ["md", "hover"]
///           ^ IMPORTANT
///            ^^^^^^^^^ base "text-lg/7", postfix Some(7)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedToken<'a> {
    /// The token exactly as it appeared in the input.
    pub original: &'a str,
    pub modifiers: Vec<&'a str>,
    /// Utility text with modifiers and the important marker removed.
    pub base: &'a str,
    /// Byte offset of the postfix `/` inside `base`.
    pub postfix: Option<usize>,
    pub flags: TokenFlags,
}

impl ParsedToken<'_> {
    pub fn important(&self) -> bool {
        self.flags.contains(TokenFlags::IMPORTANT)
    }

    /// External and malformed tokens skip classification entirely.
    pub fn classifiable(&self) -> bool {
        !self.flags.intersects(TokenFlags::EXTERNAL | TokenFlags::MALFORMED)
    }
}

/// What a token conflicts on: a class group of the rule table, or the
/// property name of an arbitrary `[property:value]` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum GroupKey<'a> {
    Group(ClassGroupId),
    ArbitraryProperty(&'a str),
}

/// Classifier verdict for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Classification<'a> {
    pub key: GroupKey<'a>,
    /// Whether the postfix was kept as a modifier (and postfix conflicts
    /// apply) rather than read as part of the value.
    pub postfix: bool,
}
