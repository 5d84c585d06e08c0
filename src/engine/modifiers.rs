//! Variant scope keys.
//!
//! Two tokens interact only when their scope keys are equal. Under
//! [`ModifierOrder::Exact`] the modifier list is compared verbatim, so
//! `hover:focus:` and `focus:hover:` are different scopes. Under
//! [`ModifierOrder::Normalized`] runs of ordinary modifiers are sorted;
//! arbitrary variants (`[&>*]`) and order-sensitive modifiers (`before`,
//! `*`, ...) stay in place and split the runs:
//!
//! ```text
//! [hover, focus, before, md, dark]  →  [focus, hover, before, dark, md]
//!  └─── run ───┘  fixed  └ run ─┘
//! ```

use std::collections::HashSet;

use crate::api::ModifierOrder;

/// Builds the scope key (`modifiers` plus the important marker) of a token.
#[derive(Debug, Clone)]
pub(crate) struct ModifierSorter {
    order: ModifierOrder,
    fixed: HashSet<String>,
}

impl ModifierSorter {
    pub fn new(order: ModifierOrder, order_sensitive: &[String]) -> Self {
        Self { order, fixed: order_sensitive.iter().cloned().collect() }
    }

    fn is_fixed(&self, modifier: &str) -> bool {
        modifier.starts_with('[') || self.fixed.contains(modifier)
    }

    /// Modifiers in the order used for scope comparison.
    pub fn sorted<'a>(&self, modifiers: &[&'a str]) -> Vec<&'a str> {
        if self.order == ModifierOrder::Exact || modifiers.len() < 2 {
            return modifiers.to_vec();
        }

        let mut out = Vec::with_capacity(modifiers.len());
        let mut run_start = 0;
        for &modifier in modifiers {
            if self.is_fixed(modifier) {
                out[run_start..].sort_unstable();
                out.push(modifier);
                run_start = out.len();
            } else {
                out.push(modifier);
            }
        }
        out[run_start..].sort_unstable();
        out
    }

    /// Scope of a token: its (possibly sorted) modifiers and important flag.
    pub fn scope_key<'a>(&self, modifiers: &[&'a str], important: bool) -> ScopeKey<'a> {
        ScopeKey { modifiers: self.sorted(modifiers), important }
    }
}

/// Tokens interact only within equal scopes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ScopeKey<'a> {
    pub modifiers: Vec<&'a str>,
    pub important: bool,
}

impl std::fmt::Display for ScopeKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier}:")?;
        }
        if self.important {
            f.write_str("!")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ORDER_SENSITIVE_MODIFIERS;

    fn sorter(order: ModifierOrder) -> ModifierSorter {
        let fixed: Vec<String> = ORDER_SENSITIVE_MODIFIERS.iter().map(|m| m.to_string()).collect();
        ModifierSorter::new(order, &fixed)
    }

    #[test]
    fn exact_keeps_order() {
        let s = sorter(ModifierOrder::Exact);
        assert_eq!(s.sorted(&["hover", "focus"]), vec!["hover", "focus"]);
        assert_ne!(s.scope_key(&["hover", "focus"], false), s.scope_key(&["focus", "hover"], false));
    }

    #[test]
    fn normalized_sorts_runs() {
        let s = sorter(ModifierOrder::Normalized);
        assert_eq!(s.sorted(&["hover", "focus"]), vec!["focus", "hover"]);
        assert_eq!(
            s.sorted(&["hover", "focus", "before", "md", "dark"]),
            vec!["focus", "hover", "before", "dark", "md"]
        );
        assert_eq!(s.sorted(&["b", "a", "[&>*]", "d", "c"]), vec!["a", "b", "[&>*]", "c", "d"]);
        assert_eq!(s.scope_key(&["hover", "focus"], false), s.scope_key(&["focus", "hover"], false));
    }

    #[test]
    fn order_sensitive_modifiers_split_scopes() {
        let s = sorter(ModifierOrder::Normalized);
        assert_ne!(s.scope_key(&["before", "hover"], false), s.scope_key(&["hover", "before"], false));
    }

    #[test]
    fn scope_key_shape() {
        let s = sorter(ModifierOrder::Exact);
        assert_eq!(s.scope_key(&[], false).to_string(), "");
        assert_eq!(s.scope_key(&[], true).to_string(), "!");
        assert_eq!(s.scope_key(&["md", "hover"], true).to_string(), "md:hover:!");
        assert_ne!(s.scope_key(&["md"], true), s.scope_key(&["md"], false));
    }
}
