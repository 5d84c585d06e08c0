//! Width, height and logical sizes.

use super::scales::*;
use super::{ClassGroupDef, nest};

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed("size", "size", sizing()),
        ClassGroupDef::prefixed("inline-size", "inline", defs!["auto", sizing_inline()]),
        ClassGroupDef::prefixed("min-inline-size", "min-inline", defs!["auto", sizing_inline()]),
        ClassGroupDef::prefixed("max-inline-size", "max-inline", defs!["none", sizing_inline()]),
        ClassGroupDef::prefixed("block-size", "block", defs!["auto", sizing_block()]),
        ClassGroupDef::prefixed("min-block-size", "min-block", defs!["auto", sizing_block()]),
        ClassGroupDef::prefixed("max-block-size", "max-block", defs!["none", sizing_block()]),
        ClassGroupDef::prefixed("w", "w", defs![theme_sizes(), "screen", sizing()]),
        ClassGroupDef::prefixed("min-w", "min-w", defs![theme_sizes(), "screen", "none", sizing()]),
        ClassGroupDef::prefixed(
            "max-w",
            "max-w",
            defs![theme_sizes(), "screen", "none", "prose", nest("screen", theme_sizes()), sizing()],
        ),
        ClassGroupDef::prefixed("h", "h", defs!["screen", "lh", sizing()]),
        ClassGroupDef::prefixed("min-h", "min-h", defs!["screen", "lh", "none", sizing()]),
        ClassGroupDef::prefixed("max-h", "max-h", defs!["screen", "lh", sizing()]),
    ]
}
