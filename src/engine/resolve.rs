//! Conflict resolution.
//!
//! Tokens are visited from last to first. A surviving classified token
//! *claims* its own group within its scope, plus every group it overrides:
//!
//! ```text
//! px-2  py-1  p-3            (scope "")
//!              └─ claims p, px, py, ps, pe, pt, ...
//!        └─ py already claimed by #2 → superseded
//!  └─ px already claimed by #2 → superseded
//! ```
//!
//! An earlier token whose `(scope, group)` is already claimed is superseded by
//! the claiming token. Conflicts are directional: `p-3 px-2` keeps both,
//! because `px` does not override `p`. Unclassified tokens never claim and are
//! never superseded.

use std::collections::HashMap;

use tracing::trace;

use super::modifiers::{ModifierSorter, ScopeKey};
use super::rule_table::RuleTable;
use crate::{Classification, GroupKey, ParsedToken};

/// What happened to one input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Classified and not overridden.
    Kept,
    /// Outside the class vocabulary (unknown, external or malformed); always
    /// kept verbatim.
    Unclassified,
    /// Dropped because the token at index `by` overrides it.
    Superseded { by: usize },
}

impl Outcome {
    pub fn survives(self) -> bool {
        !matches!(self, Outcome::Superseded { .. })
    }
}

type ScopeId = u32;

/// Per-call resolution state. Nothing here outlives one merge.
struct Claims<'a> {
    scopes: HashMap<ScopeKey<'a>, ScopeId>,
    claimed: HashMap<(ScopeId, GroupKey<'a>), usize>,
}

impl<'a> Claims<'a> {
    fn new() -> Self {
        Self { scopes: HashMap::new(), claimed: HashMap::new() }
    }

    fn scope(&mut self, key: ScopeKey<'a>) -> ScopeId {
        let next = self.scopes.len() as ScopeId;
        *self.scopes.entry(key).or_insert(next)
    }

    fn claim(&mut self, scope: ScopeId, key: GroupKey<'a>, by: usize) {
        self.claimed.entry((scope, key)).or_insert(by);
    }
}

/// Decide the outcome of every token. `classes[i]` is the classification of
/// `tokens[i]`.
pub(crate) fn resolve<'a>(
    table: &RuleTable,
    sorter: &ModifierSorter,
    tokens: &[ParsedToken<'a>],
    classes: &[Option<Classification<'a>>],
) -> Vec<Outcome> {
    let mut outcomes = vec![Outcome::Unclassified; tokens.len()];
    let mut claims = Claims::new();

    for (idx, (token, class)) in tokens.iter().zip(classes).enumerate().rev() {
        let Some(class) = class else {
            trace!(token = token.original, "unclassified");
            continue;
        };

        let key = sorter.scope_key(&token.modifiers, token.important());
        trace!(token = token.original, scope = %key, "classified");
        let scope = claims.scope(key);
        if let Some(&by) = claims.claimed.get(&(scope, class.key)) {
            trace!(token = token.original, by, "superseded");
            outcomes[idx] = Outcome::Superseded { by };
            continue;
        }

        claims.claim(scope, class.key, idx);
        if let GroupKey::Group(id) = class.key {
            for other in table.conflicts_of(id) {
                claims.claim(scope, GroupKey::Group(other), idx);
            }
            if class.postfix {
                for other in table.postfix_conflicts_of(id) {
                    claims.claim(scope, GroupKey::Group(other), idx);
                }
            }
        }
        trace!(token = token.original, "kept");
        outcomes[idx] = Outcome::Kept;
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ModifierOrder;
    use crate::engine::classify::classify;
    use crate::engine::token::parse_token;
    use crate::rules::validators::Validator::*;
    use crate::rules::{ClassGroupDef, ConflictDef};

    fn table() -> RuleTable {
        let groups = vec![
            ClassGroupDef::prefixed("p", "p", defs![Number]),
            ClassGroupDef::prefixed("px", "px", defs![Number]),
            ClassGroupDef::prefixed("py", "py", defs![Number]),
            ClassGroupDef::prefixed("font-size", "text", defs![TshirtSize]),
            ClassGroupDef::prefixed("leading", "leading", defs![Number]),
        ];
        let conflicts = vec![ConflictDef::new("p", &["px", "py"])];
        let postfix = vec![ConflictDef::new("font-size", &["leading"])];
        RuleTable::build(&groups, &conflicts, &postfix).unwrap()
    }

    fn outcomes(raw: &[&str]) -> Vec<Outcome> {
        let table = table();
        let sorter = ModifierSorter::new(ModifierOrder::Exact, &[]);
        let tokens: Vec<_> = raw.iter().map(|r| parse_token(r, None)).collect();
        let classes: Vec<_> = tokens.iter().map(|t| classify(&table, t)).collect();
        resolve(&table, &sorter, &tokens, &classes)
    }

    use super::Outcome::*;

    #[test]
    fn shorthand_supersedes_earlier_longhands() {
        assert_eq!(outcomes(&["px-2", "py-1", "p-3"]), vec![Superseded { by: 2 }, Superseded { by: 2 }, Kept]);
    }

    #[test]
    fn later_longhand_refines_shorthand() {
        assert_eq!(outcomes(&["p-3", "px-2"]), vec![Kept, Kept]);
    }

    #[test]
    fn same_group_last_wins() {
        assert_eq!(outcomes(&["p-1", "p-2", "p-3"]), vec![Superseded { by: 2 }, Superseded { by: 2 }, Kept]);
    }

    #[test]
    fn scopes_are_independent() {
        assert_eq!(outcomes(&["hover:p-1", "p-2", "!p-3", "hover:p-4"]), vec![Superseded { by: 3 }, Kept, Kept, Kept]);
        assert_eq!(outcomes(&["hover:focus:p-1", "focus:hover:p-2"]), vec![Kept, Kept]);
    }

    #[test]
    fn unclassified_tokens_pass() {
        assert_eq!(outcomes(&["foo", "p-1", "foo", "p-2"]), vec![Unclassified, Superseded { by: 3 }, Unclassified, Kept]);
    }

    #[test]
    fn postfix_conflicts_apply_only_with_postfix() {
        assert_eq!(outcomes(&["leading-5", "text-lg"]), vec![Kept, Kept]);
        assert_eq!(outcomes(&["leading-5", "text-lg/7"]), vec![Superseded { by: 1 }, Kept]);
    }

    #[test]
    fn arbitrary_properties_conflict_by_name() {
        assert_eq!(outcomes(&["[color:red]", "[color:blue]", "[fill:red]"]), vec![Superseded { by: 1 }, Kept, Kept]);
    }

    #[test]
    fn outcome_survival() {
        assert!(Kept.survives());
        assert!(Unclassified.survives());
        assert!(!Superseded { by: 0 }.survives());
    }
}
