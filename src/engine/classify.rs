//! Class group classification of parsed tokens.

use super::rule_table::RuleTable;
use crate::{Classification, GroupKey, ParsedToken};

/// Property name of an arbitrary property class: `[mask-type:luminance]`.
fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, _) = inner.split_once(':')?;
    (!property.is_empty()).then_some(property)
}

/// Classify `token`, or `None` when it takes no part in conflict resolution.
///
/// A postfix (`text-lg/7`) is first read as a modifier by classifying the
/// text before the slash; if that does not classify, the whole base is tried
/// again with the slash read as part of the value (`w-1/2`).
pub(crate) fn classify<'a>(table: &RuleTable, token: &ParsedToken<'a>) -> Option<Classification<'a>> {
    if !token.classifiable() {
        return None;
    }

    if let Some(pos) = token.postfix {
        if let Some(key) = group_key(table, &token.base[..pos]) {
            return Some(Classification { key, postfix: true });
        }
    }
    group_key(table, token.base).map(|key| Classification { key, postfix: false })
}

fn group_key<'a>(table: &RuleTable, base: &'a str) -> Option<GroupKey<'a>> {
    if let Some(property) = arbitrary_property(base) {
        return Some(GroupKey::ArbitraryProperty(property));
    }
    table.classify(base).map(GroupKey::Group)
}
