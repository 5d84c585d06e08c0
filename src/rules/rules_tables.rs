//! Table layout.

use super::ClassGroupDef;
use super::scales::{literals, unambiguous_spacing};

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed("border-collapse", "border", literals(&["collapse", "separate"])),
        ClassGroupDef::prefixed("border-spacing", "border-spacing", unambiguous_spacing()),
        ClassGroupDef::prefixed("border-spacing-x", "border-spacing-x", unambiguous_spacing()),
        ClassGroupDef::prefixed("border-spacing-y", "border-spacing-y", unambiguous_spacing()),
        ClassGroupDef::prefixed("table-layout", "table", literals(&["auto", "fixed"])),
        ClassGroupDef::prefixed("caption", "caption", literals(&["top", "bottom"])),
    ]
}
