//! Flexbox and grid.

use super::scales::*;
use super::validators::Validator::*;
use super::{ClassGroupDef, nest};

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed(
            "basis",
            "basis",
            defs![Fraction, "full", "auto", theme_sizes(), arbitrary(), theme_spacing()],
        ),
        ClassGroupDef::prefixed("flex-direction", "flex", literals(&["row", "row-reverse", "col", "col-reverse"])),
        ClassGroupDef::prefixed("flex-wrap", "flex", literals(&["nowrap", "wrap", "wrap-reverse"])),
        ClassGroupDef::prefixed("flex", "flex", defs![Number, Fraction, "auto", "initial", "none", ArbitraryValue]),
        ClassGroupDef::prefixed("grow", "grow", filter_amount()),
        ClassGroupDef::prefixed("shrink", "shrink", filter_amount()),
        ClassGroupDef::prefixed("order", "order", defs![Integer, "first", "last", "none", arbitrary()]),
        ClassGroupDef::prefixed("grid-cols", "grid-cols", grid_template()),
        ClassGroupDef::prefixed("col-start-end", "col", grid_start_and_end()),
        ClassGroupDef::prefixed("col-start", "col-start", grid_start_or_end()),
        ClassGroupDef::prefixed("col-end", "col-end", grid_start_or_end()),
        ClassGroupDef::prefixed("grid-rows", "grid-rows", grid_template()),
        ClassGroupDef::prefixed("row-start-end", "row", grid_start_and_end()),
        ClassGroupDef::prefixed("row-start", "row-start", grid_start_or_end()),
        ClassGroupDef::prefixed("row-end", "row-end", grid_start_or_end()),
        ClassGroupDef::prefixed("grid-flow", "grid-flow", literals(&["row", "col", "dense", "row-dense", "col-dense"])),
        ClassGroupDef::prefixed("auto-cols", "auto-cols", grid_auto()),
        ClassGroupDef::prefixed("auto-rows", "auto-rows", grid_auto()),
        ClassGroupDef::prefixed("gap", "gap", unambiguous_spacing()),
        ClassGroupDef::prefixed("gap-x", "gap-x", unambiguous_spacing()),
        ClassGroupDef::prefixed("gap-y", "gap-y", unambiguous_spacing()),
        ClassGroupDef::prefixed("justify-content", "justify", defs![align_primary_axis(), "normal"]),
        ClassGroupDef::prefixed("justify-items", "justify-items", defs![align_secondary_axis(), "normal"]),
        ClassGroupDef::prefixed("justify-self", "justify-self", defs!["auto", align_secondary_axis()]),
        ClassGroupDef::prefixed("align-content", "content", defs!["normal", align_primary_axis()]),
        ClassGroupDef::prefixed("align-items", "items", defs![align_secondary_axis(), nest("baseline", defs!["", "last"])]),
        ClassGroupDef::prefixed(
            "align-self",
            "self",
            defs!["auto", align_secondary_axis(), nest("baseline", defs!["", "last"])],
        ),
        ClassGroupDef::prefixed("place-content", "place-content", align_primary_axis()),
        ClassGroupDef::prefixed("place-items", "place-items", defs![align_secondary_axis(), "baseline"]),
        ClassGroupDef::prefixed("place-self", "place-self", defs!["auto", align_secondary_axis()]),
    ]
}
