//! Transitions and animation.

use super::scales::*;
use super::validators::Validator::*;
use super::ClassGroupDef;

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed(
            "transition",
            "transition",
            with_arbitrary(&["", "all", "colors", "opacity", "shadow", "transform", "none"]),
        ),
        ClassGroupDef::prefixed("transition-behavior", "transition", literals(&["normal", "discrete"])),
        ClassGroupDef::prefixed("duration", "duration", defs![Number, "initial", arbitrary()]),
        ClassGroupDef::prefixed("ease", "ease", defs!["linear", "initial", theme_ease(), arbitrary()]),
        ClassGroupDef::prefixed("delay", "delay", numeric(Number)),
        ClassGroupDef::prefixed("animate", "animate", defs!["none", theme_animate(), arbitrary()]),
    ]
}
