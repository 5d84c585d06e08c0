//! Padding, margin and child spacing.

use super::ClassGroupDef;
use super::scales::{margin, unambiguous_spacing};

const PADDING: &[&str] = &["p", "px", "py", "ps", "pe", "pbs", "pbe", "pt", "pr", "pb", "pl"];
const MARGIN: &[&str] = &["m", "mx", "my", "ms", "me", "mbs", "mbe", "mt", "mr", "mb", "ml"];

pub fn get() -> Vec<ClassGroupDef> {
    let mut groups: Vec<ClassGroupDef> =
        PADDING.iter().map(|&p| ClassGroupDef::prefixed(p, p, unambiguous_spacing())).collect();
    groups.extend(MARGIN.iter().map(|&m| ClassGroupDef::prefixed(m, m, margin())));
    groups.extend([
        ClassGroupDef::prefixed("space-x", "space-x", unambiguous_spacing()),
        ClassGroupDef::new("space-x-reverse", defs!["space-x-reverse"]),
        ClassGroupDef::prefixed("space-y", "space-y", unambiguous_spacing()),
        ClassGroupDef::new("space-y-reverse", defs!["space-y-reverse"]),
    ]);
    groups
}
