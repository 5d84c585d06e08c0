//! Backgrounds and gradients.

use super::scales::*;
use super::validators::Validator::*;
use super::{ClassGroupDef, nest};

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed("bg-attachment", "bg", literals(&["fixed", "local", "scroll"])),
        ClassGroupDef::prefixed("bg-clip", "bg-clip", literals(&["border", "padding", "content", "text"])),
        ClassGroupDef::prefixed("bg-origin", "bg-origin", literals(&["border", "padding", "content"])),
        ClassGroupDef::prefixed("bg-position", "bg", bg_position()),
        ClassGroupDef::prefixed("bg-repeat", "bg", bg_repeat()),
        ClassGroupDef::prefixed("bg-size", "bg", bg_size()),
        ClassGroupDef::prefixed(
            "bg-image",
            "bg",
            defs![
                "none",
                nest("linear", defs![nest("to", literals(&["t", "tr", "r", "br", "b", "bl", "l", "tl"])), Integer, arbitrary()]),
                nest("radial", defs!["", arbitrary()]),
                nest("conic", defs![Integer, arbitrary()]),
                ArbitraryVariableImage,
                ArbitraryImage,
            ],
        ),
        ClassGroupDef::prefixed("bg-color", "bg", color()),
        ClassGroupDef::prefixed("gradient-from-pos", "from", gradient_stop_position()),
        ClassGroupDef::prefixed("gradient-via-pos", "via", gradient_stop_position()),
        ClassGroupDef::prefixed("gradient-to-pos", "to", gradient_stop_position()),
        ClassGroupDef::prefixed("gradient-from", "from", color()),
        ClassGroupDef::prefixed("gradient-via", "via", color()),
        ClassGroupDef::prefixed("gradient-to", "to", color()),
    ]
}
