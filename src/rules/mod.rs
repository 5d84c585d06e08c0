//! The built-in class-group table (tailwind v4 vocabulary).
//!
//! Groups are declared per category in `rules_*.rs`. Declaration order is
//! significant: validators attached to the same trie node are tried in the
//! order their groups appear here, so more specific families (for example
//! `bg-position`, `bg-size`, `bg-image`) must come before catch-all ones
//! (`bg-color`, whose color scale accepts anything).

pub mod validators;

mod conflicts;
mod rules_backgrounds;
mod rules_borders;
mod rules_effects;
mod rules_filters;
mod rules_flexbox;
mod rules_interactivity;
mod rules_layout;
mod rules_masks;
mod rules_sizing;
mod rules_spacing;
mod rules_tables;
mod rules_transforms;
mod rules_transitions;
mod rules_typography;
pub(crate) mod scales;

#[cfg(test)]
mod tests;

pub use validators::Validator;

/// One entry of a class group definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassDef {
    /// A literal class part path such as `"inline-block"`. The empty literal
    /// marks the current node itself (`rounded` in `rounded-*`).
    Literal(&'static str),
    /// A value validator for whatever is left of the class name.
    Validator(Validator),
    /// Definitions nested under a literal key path (`{ "span": [...] }`).
    Nested(&'static str, Vec<ClassDef>),
}

/// Anything that can be spliced into a `defs![...]` list.
pub trait IntoClassDefs {
    fn push_into(self, out: &mut Vec<ClassDef>);
}

impl IntoClassDefs for &'static str {
    fn push_into(self, out: &mut Vec<ClassDef>) {
        out.push(ClassDef::Literal(self));
    }
}

impl IntoClassDefs for Validator {
    fn push_into(self, out: &mut Vec<ClassDef>) {
        out.push(ClassDef::Validator(self));
    }
}

impl IntoClassDefs for ClassDef {
    fn push_into(self, out: &mut Vec<ClassDef>) {
        out.push(self);
    }
}

impl IntoClassDefs for Vec<ClassDef> {
    fn push_into(self, out: &mut Vec<ClassDef>) {
        out.extend(self);
    }
}

/// Nest `defs` under the literal key path `key`.
pub fn nest(key: &'static str, defs: Vec<ClassDef>) -> ClassDef {
    ClassDef::Nested(key, defs)
}

/// A named class group and the class names that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGroupDef {
    pub id: &'static str,
    pub defs: Vec<ClassDef>,
}

impl ClassGroupDef {
    pub fn new(id: &'static str, defs: Vec<ClassDef>) -> Self {
        Self { id, defs }
    }

    /// The common shape: every class of the group starts with `prefix-`.
    pub fn prefixed(id: &'static str, prefix: &'static str, defs: Vec<ClassDef>) -> Self {
        Self { id, defs: vec![nest(prefix, defs)] }
    }
}

/// `group` conflicts with (overrides) every group in `conflicts`.
///
/// The relation is directional: a shorthand overrides its longhands, a
/// later longhand only refines the shorthand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictDef {
    pub group: &'static str,
    pub conflicts: Vec<&'static str>,
}

impl ConflictDef {
    pub fn new(group: &'static str, conflicts: &[&'static str]) -> Self {
        Self { group, conflicts: conflicts.to_vec() }
    }
}

/// Every built-in class group, in registration order.
pub(crate) fn default_class_groups() -> Vec<ClassGroupDef> {
    let mut groups = Vec::new();
    groups.extend(rules_layout::get());
    groups.extend(rules_flexbox::get());
    groups.extend(rules_spacing::get());
    groups.extend(rules_sizing::get());
    groups.extend(rules_typography::get());
    groups.extend(rules_backgrounds::get());
    groups.extend(rules_borders::get());
    groups.extend(rules_effects::get());
    groups.extend(rules_masks::get());
    groups.extend(rules_filters::get());
    groups.extend(rules_tables::get());
    groups.extend(rules_transitions::get());
    groups.extend(rules_transforms::get());
    groups.extend(rules_interactivity::get());
    groups
}

pub(crate) use conflicts::{default_conflicts, default_postfix_conflicts};

/// Modifiers whose position inside a variant chain changes meaning.
pub(crate) const ORDER_SENSITIVE_MODIFIERS: &[&str] = &[
    "*",
    "**",
    "after",
    "backdrop",
    "before",
    "details-content",
    "file",
    "first-letter",
    "first-line",
    "marker",
    "placeholder",
    "selection",
];
