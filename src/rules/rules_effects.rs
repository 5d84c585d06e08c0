//! Shadows, rings, opacity and blend modes.

use super::scales::*;
use super::validators::Validator::*;
use super::ClassGroupDef;

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed(
            "shadow",
            "shadow",
            defs!["", "none", theme_sizes(), ArbitraryVariableShadow, ArbitraryShadow],
        ),
        ClassGroupDef::prefixed("shadow-color", "shadow", color()),
        ClassGroupDef::prefixed(
            "inset-shadow",
            "inset-shadow",
            defs!["none", theme_sizes(), ArbitraryVariableShadow, ArbitraryShadow],
        ),
        ClassGroupDef::prefixed("inset-shadow-color", "inset-shadow", color()),
        ClassGroupDef::prefixed("ring-w", "ring", border_width()),
        ClassGroupDef::new("ring-w-inset", defs!["ring-inset"]),
        ClassGroupDef::prefixed("ring-color", "ring", color()),
        ClassGroupDef::prefixed("ring-offset-w", "ring-offset", defs![Number, ArbitraryLength]),
        ClassGroupDef::prefixed("ring-offset-color", "ring-offset", color()),
        ClassGroupDef::prefixed("inset-ring-w", "inset-ring", border_width()),
        ClassGroupDef::prefixed("inset-ring-color", "inset-ring", color()),
        ClassGroupDef::prefixed(
            "text-shadow",
            "text-shadow",
            defs!["none", theme_sizes(), ArbitraryVariableShadow, ArbitraryShadow],
        ),
        ClassGroupDef::prefixed("text-shadow-color", "text-shadow", color()),
        ClassGroupDef::prefixed("opacity", "opacity", numeric(Number)),
        ClassGroupDef::prefixed("mix-blend", "mix-blend", defs![blend_mode(), "plus-darker", "plus-lighter"]),
        ClassGroupDef::prefixed("bg-blend", "bg-blend", blend_mode()),
    ]
}
