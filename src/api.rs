use crate::engine::{self, MergeMetrics, ModifierSorter, Outcome, Pipeline, RuleTable, RuleTableError};
use crate::rules::{self, ClassGroupDef, ConflictDef};
use crate::{GroupKey, TokenFlags};
use once_cell::sync::Lazy;

static DEFAULT_MERGER: Lazy<Merger> = Lazy::new(|| match Merger::new(Config::default()) {
    Ok(merger) => merger,
    Err(err) => panic!("built-in rule table is invalid: {err}"),
});

/// How modifier lists are compared when deciding whether two classes share a
/// scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModifierOrder {
    /// Modifiers must match as an exact ordered sequence:
    /// `hover:focus:p-2` and `focus:hover:p-2` do not conflict.
    #[default]
    Exact,
    /// Runs of ordinary modifiers are compared as sorted sets. Arbitrary
    /// variants and order-sensitive modifiers keep their position.
    Normalized,
}

/// Merge configuration.
///
/// [`Config::default`] is the built-in tailwind v4 table. Builder methods
/// extend it.
///
/// ```
/// use twmerge::{ClassGroupDef, Config, Merger, defs, nest};
///
/// let config = Config::default()
///     .with_class_group(ClassGroupDef::prefixed("shadow", "shadow", defs!["100", "200"]))
///     .with_class_group(ClassGroupDef::new("btn-size", defs![nest("btn", defs!["sm", "lg"])]));
/// let merger = Merger::new(config).unwrap();
///
/// assert_eq!(merger.merge(&["shadow-lg shadow-100"]), "shadow-100");
/// assert_eq!(merger.merge(&["btn-sm btn-lg"]), "btn-lg");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Class prefix such as `tw`: only `tw:`-prefixed classes are merged,
    /// everything else passes through untouched.
    pub prefix: Option<String>,
    pub modifier_order: ModifierOrder,
    /// Modifiers that keep their position under [`ModifierOrder::Normalized`].
    pub order_sensitive_modifiers: Vec<String>,
    /// Class groups in registration order.
    pub class_groups: Vec<ClassGroupDef>,
    pub conflicts: Vec<ConflictDef>,
    /// Conflicts that apply only to classes written with a `/postfix`.
    pub postfix_conflicts: Vec<ConflictDef>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: None,
            modifier_order: ModifierOrder::Exact,
            order_sensitive_modifiers: rules::ORDER_SENSITIVE_MODIFIERS.iter().map(|m| m.to_string()).collect(),
            class_groups: rules::default_class_groups(),
            conflicts: rules::default_conflicts(),
            postfix_conflicts: rules::default_postfix_conflicts(),
        }
    }
}

impl Config {
    /// A configuration with no class groups at all.
    pub fn empty() -> Self {
        Self {
            prefix: None,
            modifier_order: ModifierOrder::Exact,
            order_sensitive_modifiers: Vec::new(),
            class_groups: Vec::new(),
            conflicts: Vec::new(),
            postfix_conflicts: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_modifier_order(mut self, order: ModifierOrder) -> Self {
        self.modifier_order = order;
        self
    }

    pub fn with_order_sensitive_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.order_sensitive_modifiers.push(modifier.into());
        self
    }

    /// Add a class group. A group with the same id is extended instead.
    pub fn with_class_group(mut self, group: ClassGroupDef) -> Self {
        match self.class_groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => existing.defs.extend(group.defs),
            None => self.class_groups.push(group),
        }
        self
    }

    /// Add conflicts. Targets are appended to an existing entry for the same
    /// group.
    pub fn with_conflict(mut self, conflict: ConflictDef) -> Self {
        extend_conflicts(&mut self.conflicts, conflict);
        self
    }

    pub fn with_postfix_conflict(mut self, conflict: ConflictDef) -> Self {
        extend_conflicts(&mut self.postfix_conflicts, conflict);
        self
    }
}

fn extend_conflicts(list: &mut Vec<ConflictDef>, conflict: ConflictDef) {
    match list.iter_mut().find(|c| c.group == conflict.group) {
        Some(existing) => existing.conflicts.extend(conflict.conflicts),
        None => list.push(conflict),
    }
}

/// A compiled configuration, ready to merge.
///
/// Building compiles the rule table once; merging only reads it, so a
/// `Merger` can be shared across threads by reference.
#[derive(Debug)]
pub struct Merger {
    table: RuleTable,
    sorter: ModifierSorter,
    prefix: Option<String>,
}

impl Merger {
    pub fn new(config: Config) -> Result<Self, RuleTableError> {
        let table = RuleTable::build(&config.class_groups, &config.conflicts, &config.postfix_conflicts)?;
        let sorter = ModifierSorter::new(config.modifier_order, &config.order_sensitive_modifiers);
        Ok(Self { table, sorter, prefix: config.prefix })
    }

    fn pipeline(&self) -> Pipeline<'_> {
        Pipeline { table: &self.table, sorter: &self.sorter, prefix: self.prefix.as_deref() }
    }

    pub fn rule_table(&self) -> &RuleTable {
        &self.table
    }

    /// Merge `inputs` (each a whitespace-separated class list).
    pub fn merge(&self, inputs: &[&str]) -> String {
        self.pipeline().run(inputs)
    }

    /// Merge `inputs` and report what happened to every token.
    pub fn merge_verbose(&self, inputs: &[&str]) -> MergeReport {
        let run = self.pipeline().run_with_metrics(inputs);

        let tokens = run
            .tokens
            .iter()
            .zip(&run.classes)
            .zip(&run.outcomes)
            .enumerate()
            .map(|(index, ((token, class), &outcome))| TokenTrace {
                index,
                token: token.original.to_string(),
                modifiers: token.modifiers.iter().map(|m| m.to_string()).collect(),
                important: token.important(),
                group: class.map(|c| match c.key {
                    GroupKey::Group(id) => self.table.group_name(id).to_string(),
                    GroupKey::ArbitraryProperty(property) => format!("[{property}]"),
                }),
                postfix: class.is_some_and(|c| c.postfix),
                external: token.flags.contains(TokenFlags::EXTERNAL),
                malformed: token.flags.contains(TokenFlags::MALFORMED),
                outcome,
            })
            .collect();

        MergeReport { output: run.output, tokens, metrics: run.metrics }
    }
}

/// Per-token detail of a verbose merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTrace {
    /// Position in the flattened token sequence.
    pub index: usize,
    pub token: String,
    pub modifiers: Vec<String>,
    pub important: bool,
    /// Class group name, or `[property]` for arbitrary properties.
    pub group: Option<String>,
    /// The `/postfix` was read as a modifier.
    pub postfix: bool,
    /// Lacks the configured class prefix.
    pub external: bool,
    /// Unbalanced brackets.
    pub malformed: bool,
    pub outcome: Outcome,
}

/// Result of [`merge_verbose`] and [`Merger::merge_verbose`].
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Same string [`merge`] would return.
    pub output: String,
    pub tokens: Vec<TokenTrace>,
    pub metrics: MergeMetrics,
}

/// Merge class lists with the built-in tailwind v4 rule table.
///
/// # Example
/// ```
/// use twmerge::merge;
///
/// assert_eq!(merge(&["px-2 py-1", "p-3"]), "p-3");
/// assert_eq!(merge(&["hover:bg-red-500", "hover:bg-blue-500", "bg-green-500"]), "hover:bg-blue-500 bg-green-500");
/// ```
pub fn merge(inputs: &[&str]) -> String {
    DEFAULT_MERGER.merge(inputs)
}

/// Merge class lists with a custom [`Merger`].
pub fn merge_with(merger: &Merger, inputs: &[&str]) -> String {
    merger.merge(inputs)
}

/// [`merge`] with a per-token report and stage timings.
pub fn merge_verbose(inputs: &[&str]) -> MergeReport {
    DEFAULT_MERGER.merge_verbose(inputs)
}

/// Join class lists with single spaces, skipping empty ones, without resolving
/// conflicts.
///
/// ```
/// assert_eq!(twmerge::join(&["p-2", "", "p-4"]), "p-2 p-4");
/// ```
pub fn join(inputs: &[&str]) -> String {
    engine::join(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::nest;

    #[test]
    fn default_merger_builds() {
        assert!(DEFAULT_MERGER.rule_table().group_count() > 250);
        assert!(DEFAULT_MERGER.rule_table().group_id("bg-color").is_some());
    }

    #[test]
    fn merge_with_custom_merger() {
        let merger = Merger::new(Config::default()).unwrap();
        assert_eq!(merge_with(&merger, &["px-2 py-1", "p-3"]), "p-3");
    }

    #[test]
    fn prefix_config() {
        let merger = Merger::new(Config::default().with_prefix("tw")).unwrap();
        assert_eq!(merger.merge(&["tw:block tw:hidden"]), "tw:hidden");
        assert_eq!(merger.merge(&["block hidden"]), "block hidden");
        assert_eq!(merger.merge(&["tw:p-3 tw:p-2 p-3"]), "tw:p-2 p-3");
        assert_eq!(merger.merge(&["tw:hover:block tw:hover:hidden"]), "tw:hover:hidden");
    }

    #[test]
    fn normalized_modifier_order() {
        let exact = Merger::new(Config::default()).unwrap();
        assert_eq!(exact.merge(&["hover:focus:p-2 focus:hover:p-4"]), "hover:focus:p-2 focus:hover:p-4");

        let normalized = Merger::new(Config::default().with_modifier_order(ModifierOrder::Normalized)).unwrap();
        assert_eq!(normalized.merge(&["hover:focus:p-2 focus:hover:p-4"]), "focus:hover:p-4");
        assert_eq!(normalized.merge(&["before:hover:p-2 hover:before:p-4"]), "before:hover:p-2 hover:before:p-4");
    }

    #[test]
    fn extending_groups_and_conflicts() {
        let config = Config::default()
            .with_class_group(ClassGroupDef::new("brand-tone", defs![nest("tone", defs!["warm", "cool"])]))
            .with_class_group(ClassGroupDef::new("brand-size", defs![nest("brand", defs!["sm", "lg"])]))
            .with_conflict(ConflictDef::new("brand-size", &["brand-tone"]));
        let merger = Merger::new(config).unwrap();

        assert_eq!(merger.merge(&["tone-warm tone-cool"]), "tone-cool");
        assert_eq!(merger.merge(&["tone-warm brand-lg"]), "brand-lg");
        assert_eq!(merger.merge(&["brand-lg tone-warm"]), "brand-lg tone-warm");
    }

    #[test]
    fn extending_an_existing_group() {
        let config = Config::default().with_class_group(ClassGroupDef::prefixed("p", "p", defs!["gutter"]));
        let merger = Merger::new(config).unwrap();
        assert_eq!(merger.merge(&["p-2 p-gutter"]), "p-gutter");
        assert_eq!(merger.merge(&["px-2 p-gutter"]), "p-gutter");
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let err = Merger::new(Config::default().with_conflict(ConflictDef::new("p", &["not-a-group"]))).unwrap_err();
        assert_eq!(err, RuleTableError::UnknownConflictTarget { group: "p".into(), target: "not-a-group".into() });

        let mut config = Config::empty();
        config.class_groups.push(ClassGroupDef::new("a", defs!["a"]));
        config.class_groups.push(ClassGroupDef::new("a", defs!["b"]));
        assert_eq!(Merger::new(config).unwrap_err(), RuleTableError::DuplicateGroup("a".into()));
    }

    #[test]
    fn empty_config_keeps_everything() {
        let merger = Merger::new(Config::empty()).unwrap();
        assert_eq!(merger.merge(&["p-2 p-4 block hidden"]), "p-2 p-4 block hidden");
    }

    #[test]
    fn merge_verbose_reports_every_token() {
        let report = merge_verbose(&["px-2 foo hover:!text-lg/7", "p-3 [color:red] bg-[#fff"]);
        assert_eq!(report.output, merge(&["px-2 foo hover:!text-lg/7", "p-3 [color:red] bg-[#fff"]));
        assert_eq!(report.output, "foo hover:!text-lg/7 p-3 [color:red] bg-[#fff");
        assert_eq!(report.tokens.len(), 6);
        assert!(report.metrics.parse <= report.metrics.total);

        let px = &report.tokens[0];
        assert_eq!(px.group.as_deref(), Some("px"));
        assert_eq!(px.outcome, Outcome::Superseded { by: 3 });

        let foo = &report.tokens[1];
        assert_eq!(foo.group, None);
        assert_eq!(foo.outcome, Outcome::Unclassified);

        let text = &report.tokens[2];
        assert_eq!(text.modifiers, vec!["hover".to_string()]);
        assert!(text.important);
        assert!(text.postfix);
        assert_eq!(text.group.as_deref(), Some("font-size"));
        assert_eq!(text.outcome, Outcome::Kept);

        assert_eq!(report.tokens[4].group.as_deref(), Some("[color]"));
        assert!(report.tokens[5].malformed);
        assert_eq!(report.tokens[5].outcome, Outcome::Unclassified);
    }

    #[test]
    fn default_merger_is_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Merger>();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let own = format!("hover:m-{i}");
                    merge(&["px-2 py-1", own.as_str(), "p-3"])
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("hover:m-{i} p-3"));
        }
    }

    #[test]
    fn custom_merger_is_shared_by_reference() {
        let merger = Merger::new(Config::default().with_prefix("tw")).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| merger.merge(&["tw:p-2 tw:p-4 p-1"]))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), "tw:p-4 p-1");
            }
        });
    }

    #[test]
    fn join_does_not_resolve() {
        assert_eq!(join(&["px-2", "", "px-4"]), "px-2 px-4");
    }
}
