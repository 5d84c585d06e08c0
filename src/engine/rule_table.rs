//! The compiled, read-only class group table.
//!
//! A [`RuleTable`] is built once from class group and conflict definitions
//! and then only read. It holds three things:
//!
//! - a **group arena**: `ClassGroupId` is an index into `names`;
//! - a **class-part trie**: class names are split on `-`, literal parts are
//!   children, and each node carries an ordered list of value validators for
//!   whatever text remains below it;
//! - a **conflict adjacency**: one `GroupSet` bitset per group, plus a
//!   second one used only when the class carries a postfix modifier.
//!
//! ```text
//! root ─ "bg" ─┬─ "fixed"                  → bg-attachment
//!              ├─ "repeat" ─ "x"           → bg-repeat
//!              └─ validators: [ArbitraryPosition → bg-position, ...,
//!                              Any → bg-color]
//! ```
//!
//! ## Lookup
//!
//! Literal children are tried first and recursed into; when that fails the
//! node's validators are tried in registration order against the remaining
//! text. A leading `-` (negative value) is ignored.
//!
//! ## Invariants
//!
//! - Every id stored in the trie or in a `GroupSet` is `< names.len()`.
//! - The table is never mutated after [`RuleTable::build`] returns.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::rules::{ClassDef, ClassGroupDef, ConflictDef, Validator};

/// Identifier of a class group inside one [`RuleTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassGroupId(u16);

impl ClassGroupId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A defect found while building a [`RuleTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    #[error("class group `{0}` is defined more than once")]
    DuplicateGroup(String),
    #[error("class group `{0}` has no definitions")]
    EmptyGroup(String),
    #[error("class group `{0}` nests definitions under an empty key")]
    EmptyNestedKey(String),
    #[error("conflicts declared for unknown class group `{0}`")]
    UnknownConflictGroup(String),
    #[error("class group `{group}` conflicts with unknown class group `{target}`")]
    UnknownConflictTarget { group: String, target: String },
    #[error("{0} class groups exceed the supported maximum of {max}", max = u16::MAX as usize + 1)]
    TooManyGroups(usize),
}

/// Fixed-size set of class group ids.
#[derive(Clone, Default, PartialEq, Eq)]
struct GroupSet {
    words: Vec<u64>,
}

impl GroupSet {
    fn with_capacity(groups: usize) -> Self {
        Self { words: vec![0; groups.div_ceil(64)] }
    }

    fn insert(&mut self, id: ClassGroupId) {
        self.words[id.index() / 64] |= 1u64 << (id.index() % 64);
    }

    fn contains(&self, id: ClassGroupId) -> bool {
        self.words.get(id.index() / 64).is_some_and(|&w| w & (1u64 << (id.index() % 64)) != 0)
    }

    /// Ids in ascending order.
    fn iter(&self) -> impl Iterator<Item = ClassGroupId> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(ClassGroupId((word_idx * 64 + bit) as u16))
            })
        })
    }
}

impl fmt::Debug for GroupSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|id| id.0)).finish()
    }
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<&'static str, usize>,
    validators: Vec<(Validator, ClassGroupId)>,
    group: Option<ClassGroupId>,
}

/// Compiled class groups, trie and conflict sets.
#[derive(Debug)]
pub struct RuleTable {
    names: Vec<&'static str>,
    by_name: HashMap<&'static str, ClassGroupId>,
    nodes: Vec<TrieNode>,
    conflicts: Vec<GroupSet>,
    postfix_conflicts: Vec<GroupSet>,
}

const ROOT: usize = 0;

impl RuleTable {
    /// Compile `groups` and their conflict declarations.
    ///
    /// Groups are registered in slice order, which is also the order their
    /// validators are tried in at shared trie nodes.
    pub fn build(
        groups: &[ClassGroupDef],
        conflicts: &[ConflictDef],
        postfix_conflicts: &[ConflictDef],
    ) -> Result<Self, RuleTableError> {
        if groups.len() > u16::MAX as usize + 1 {
            return Err(RuleTableError::TooManyGroups(groups.len()));
        }

        let mut table = RuleTable {
            names: Vec::with_capacity(groups.len()),
            by_name: HashMap::with_capacity(groups.len()),
            nodes: vec![TrieNode::default()],
            conflicts: Vec::new(),
            postfix_conflicts: Vec::new(),
        };

        for (idx, group) in groups.iter().enumerate() {
            let id = ClassGroupId(idx as u16);
            if table.by_name.insert(group.id, id).is_some() {
                return Err(RuleTableError::DuplicateGroup(group.id.to_string()));
            }
            if group.defs.is_empty() {
                return Err(RuleTableError::EmptyGroup(group.id.to_string()));
            }
            table.names.push(group.id);
            table.insert_defs(ROOT, id, group.id, &group.defs)?;
        }

        table.conflicts = table.adjacency(conflicts)?;
        table.postfix_conflicts = table.adjacency(postfix_conflicts)?;

        debug!(
            groups = table.names.len(),
            trie_nodes = table.nodes.len(),
            conflicts = conflicts.len(),
            postfix_conflicts = postfix_conflicts.len(),
            "built rule table"
        );

        Ok(table)
    }

    fn insert_defs(
        &mut self,
        node: usize,
        id: ClassGroupId,
        name: &'static str,
        defs: &[ClassDef],
    ) -> Result<(), RuleTableError> {
        for def in defs {
            match def {
                ClassDef::Literal(path) => {
                    let target = self.path_node(node, *path);
                    self.nodes[target].group = Some(id);
                }
                ClassDef::Validator(validator) => self.nodes[node].validators.push((*validator, id)),
                ClassDef::Nested(key, inner) => {
                    if key.is_empty() {
                        return Err(RuleTableError::EmptyNestedKey(name.to_string()));
                    }
                    let target = self.path_node(node, *key);
                    self.insert_defs(target, id, name, inner)?;
                }
            }
        }
        Ok(())
    }

    /// Walk (creating as needed) the node for a `-`-separated literal path.
    /// The empty path is `node` itself.
    fn path_node(&mut self, mut node: usize, path: &'static str) -> usize {
        if path.is_empty() {
            return node;
        }
        for part in path.split('-') {
            node = match self.nodes[node].children.get(part) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(part, child);
                    child
                }
            };
        }
        node
    }

    fn adjacency(&self, defs: &[ConflictDef]) -> Result<Vec<GroupSet>, RuleTableError> {
        let mut sets = vec![GroupSet::with_capacity(self.names.len()); self.names.len()];
        for def in defs {
            let Some(&group) = self.by_name.get(def.group) else {
                return Err(RuleTableError::UnknownConflictGroup(def.group.to_string()));
            };
            for target in &def.conflicts {
                let Some(&other) = self.by_name.get(target) else {
                    return Err(RuleTableError::UnknownConflictTarget {
                        group: def.group.to_string(),
                        target: target.to_string(),
                    });
                };
                sets[group.index()].insert(other);
            }
        }
        Ok(sets)
    }

    /// Class group of a utility base such as `bg-red-500` or `-mt-2`.
    pub fn classify(&self, base: &str) -> Option<ClassGroupId> {
        let base = match base.strip_prefix('-') {
            Some(rest) if !rest.is_empty() => rest,
            _ => base,
        };
        self.walk(ROOT, base)
    }

    fn walk(&self, node: usize, rest: &str) -> Option<ClassGroupId> {
        let current = &self.nodes[node];
        let (head, tail) = match rest.split_once('-') {
            Some((head, tail)) => (head, Some(tail)),
            None => (rest, None),
        };

        if let Some(&child) = current.children.get(head) {
            let found = match tail {
                Some(tail) => self.walk(child, tail),
                None => self.nodes[child].group,
            };
            if found.is_some() {
                return found;
            }
        }

        current.validators.iter().find(|(validator, _)| validator.matches(rest)).map(|&(_, id)| id)
    }

    pub fn group_name(&self, id: ClassGroupId) -> &'static str {
        self.names[id.index()]
    }

    pub fn group_id(&self, name: &str) -> Option<ClassGroupId> {
        self.by_name.get(name).copied()
    }

    pub fn group_count(&self) -> usize {
        self.names.len()
    }

    /// Groups that `id` overrides besides itself.
    pub fn conflicts_of(&self, id: ClassGroupId) -> impl Iterator<Item = ClassGroupId> + '_ {
        self.conflicts[id.index()].iter()
    }

    /// Additional groups `id` overrides when written with a postfix modifier.
    pub fn postfix_conflicts_of(&self, id: ClassGroupId) -> impl Iterator<Item = ClassGroupId> + '_ {
        self.postfix_conflicts[id.index()].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::nest;
    use crate::rules::validators::Validator::*;

    fn small_table() -> RuleTable {
        let groups = vec![
            ClassGroupDef::new("display", defs!["block", "inline-block", "hidden"]),
            ClassGroupDef::prefixed("p", "p", defs!["px", Number, ArbitraryValue]),
            ClassGroupDef::prefixed("px", "px", defs![Number]),
            ClassGroupDef::prefixed("rounded", "rounded", defs!["", "full", TshirtSize]),
            ClassGroupDef::prefixed("col-start", "col", defs![nest("start", defs![Integer])]),
            ClassGroupDef::prefixed("bg-color", "bg", defs![Any]),
        ];
        let conflicts = vec![ConflictDef::new("p", &["px"])];
        RuleTable::build(&groups, &conflicts, &[]).unwrap()
    }

    fn name(table: &RuleTable, base: &str) -> Option<&'static str> {
        table.classify(base).map(|id| table.group_name(id))
    }

    #[test]
    fn literal_paths_and_validators() {
        let table = small_table();
        assert_eq!(name(&table, "block"), Some("display"));
        assert_eq!(name(&table, "inline-block"), Some("display"));
        assert_eq!(name(&table, "inline"), None);
        assert_eq!(name(&table, "p-4"), Some("p"));
        assert_eq!(name(&table, "p-px"), Some("p"));
        assert_eq!(name(&table, "p-[3px]"), Some("p"));
        assert_eq!(name(&table, "px-4"), Some("px"));
        assert_eq!(name(&table, "col-start-2"), Some("col-start"));
        assert_eq!(name(&table, "col-start-x"), None);
    }

    #[test]
    fn empty_literal_marks_the_node_itself() {
        let table = small_table();
        assert_eq!(name(&table, "rounded"), Some("rounded"));
        assert_eq!(name(&table, "rounded-full"), Some("rounded"));
        assert_eq!(name(&table, "rounded-lg"), Some("rounded"));
    }

    #[test]
    fn negative_prefix_is_ignored() {
        let table = small_table();
        assert_eq!(name(&table, "-p-2"), Some("p"));
        assert_eq!(name(&table, "-"), None);
    }

    #[test]
    fn validators_see_the_remaining_text() {
        let table = small_table();
        assert_eq!(name(&table, "bg-red-500"), Some("bg-color"));
        assert_eq!(name(&table, "unknown-class"), None);
        assert_eq!(name(&table, ""), None);
    }

    #[test]
    fn conflict_sets() {
        let table = small_table();
        let p = table.group_id("p").unwrap();
        let px = table.group_id("px").unwrap();
        assert_eq!(table.conflicts_of(p).collect::<Vec<_>>(), vec![px]);
        assert_eq!(table.conflicts_of(px).count(), 0);
        assert!(table.conflicts[p.index()].contains(px));
        assert!(!table.conflicts[px.index()].contains(p));
        assert_eq!(table.postfix_conflicts_of(p).count(), 0);
    }

    #[test]
    fn group_set_iterates_across_words() {
        let mut set = GroupSet::with_capacity(200);
        for id in [0u16, 63, 64, 130, 199] {
            set.insert(ClassGroupId(id));
        }
        let ids: Vec<u16> = set.iter().map(|id| id.0).collect();
        assert_eq!(ids, vec![0, 63, 64, 130, 199]);
        assert!(set.contains(ClassGroupId(130)));
        assert!(!set.contains(ClassGroupId(131)));
    }

    #[test]
    fn build_rejects_bad_tables() {
        let dup = vec![ClassGroupDef::new("a", defs!["a"]), ClassGroupDef::new("a", defs!["b"])];
        assert_eq!(RuleTable::build(&dup, &[], &[]).unwrap_err(), RuleTableError::DuplicateGroup("a".into()));

        let empty = vec![ClassGroupDef::new("a", Vec::new())];
        assert_eq!(RuleTable::build(&empty, &[], &[]).unwrap_err(), RuleTableError::EmptyGroup("a".into()));

        let nested = vec![ClassGroupDef::new("a", defs![nest("", defs!["x"])])];
        assert_eq!(RuleTable::build(&nested, &[], &[]).unwrap_err(), RuleTableError::EmptyNestedKey("a".into()));

        let groups = vec![ClassGroupDef::new("a", defs!["a"])];
        assert_eq!(
            RuleTable::build(&groups, &[ConflictDef::new("b", &["a"])], &[]).unwrap_err(),
            RuleTableError::UnknownConflictGroup("b".into())
        );
        assert_eq!(
            RuleTable::build(&groups, &[], &[ConflictDef::new("a", &["c"])]).unwrap_err(),
            RuleTableError::UnknownConflictTarget { group: "a".into(), target: "c".into() }
        );
    }

    #[test]
    fn error_messages() {
        let err = RuleTableError::UnknownConflictTarget { group: "p".into(), target: "nope".into() };
        assert_eq!(err.to_string(), "class group `p` conflicts with unknown class group `nope`");
        assert_eq!(
            RuleTableError::TooManyGroups(70000).to_string(),
            "70000 class groups exceed the supported maximum of 65536"
        );
    }
}
