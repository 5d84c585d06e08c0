//! Shared value scales and theme values.
//!
//! Theme entries are the named values a default tailwind theme ships with;
//! scales combine them with validators into the value lists that class
//! groups reuse.

use super::validators::Validator::{self, *};
use super::{ClassDef, nest};

// --- Theme -------------------------------------------------------------------

pub fn theme_color() -> Vec<ClassDef> {
    defs![Any]
}

pub fn theme_font() -> Vec<ClassDef> {
    defs![AnyNonArbitrary]
}

pub fn theme_font_weight() -> Vec<ClassDef> {
    defs!["thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black"]
}

pub fn theme_tracking() -> Vec<ClassDef> {
    defs!["tighter", "tight", "normal", "wide", "wider", "widest"]
}

pub fn theme_leading() -> Vec<ClassDef> {
    defs!["none", "tight", "snug", "normal", "relaxed", "loose"]
}

pub fn theme_perspective() -> Vec<ClassDef> {
    defs!["dramatic", "near", "normal", "midrange", "distant", "none"]
}

pub fn theme_aspect() -> Vec<ClassDef> {
    defs!["video"]
}

pub fn theme_ease() -> Vec<ClassDef> {
    defs!["in", "out", "in-out"]
}

pub fn theme_animate() -> Vec<ClassDef> {
    defs!["spin", "ping", "pulse", "bounce"]
}

pub fn theme_spacing() -> Vec<ClassDef> {
    defs!["px", Number]
}

/// Breakpoints, containers, radii, shadows, blurs and text sizes all use
/// t-shirt sizes in the default theme.
pub fn theme_sizes() -> Vec<ClassDef> {
    defs![TshirtSize]
}

// --- Scales ------------------------------------------------------------------

pub fn arbitrary() -> Vec<ClassDef> {
    defs![ArbitraryVariable, ArbitraryValue]
}

pub fn with_arbitrary(values: &[&'static str]) -> Vec<ClassDef> {
    let mut out: Vec<ClassDef> = values.iter().copied().map(ClassDef::Literal).collect();
    out.extend(arbitrary());
    out
}

pub fn literals(values: &[&'static str]) -> Vec<ClassDef> {
    values.iter().copied().map(ClassDef::Literal).collect()
}

pub fn numeric(validator: Validator) -> Vec<ClassDef> {
    defs![validator, arbitrary()]
}

pub fn breaks() -> Vec<ClassDef> {
    literals(&["auto", "avoid", "all", "avoid-page", "page", "left", "right", "column"])
}

pub fn position() -> Vec<ClassDef> {
    literals(&[
        "center",
        "top",
        "bottom",
        "left",
        "right",
        "top-left",
        "left-top",
        "top-right",
        "right-top",
        "bottom-right",
        "right-bottom",
        "bottom-left",
        "left-bottom",
    ])
}

pub fn position_with_arbitrary() -> Vec<ClassDef> {
    defs![position(), arbitrary()]
}

pub fn overflow() -> Vec<ClassDef> {
    literals(&["auto", "hidden", "clip", "visible", "scroll"])
}

pub fn overscroll() -> Vec<ClassDef> {
    literals(&["auto", "contain", "none"])
}

pub fn unambiguous_spacing() -> Vec<ClassDef> {
    defs![arbitrary(), theme_spacing()]
}

pub fn inset() -> Vec<ClassDef> {
    defs![Fraction, "full", "auto", unambiguous_spacing()]
}

pub fn grid_template() -> Vec<ClassDef> {
    defs![Integer, "none", "subgrid", arbitrary()]
}

pub fn grid_start_and_end() -> Vec<ClassDef> {
    defs!["auto", nest("span", defs!["full", Integer, arbitrary()]), Integer, arbitrary()]
}

pub fn grid_start_or_end() -> Vec<ClassDef> {
    defs![Integer, "auto", arbitrary()]
}

pub fn grid_auto() -> Vec<ClassDef> {
    defs!["auto", "min", "max", "fr", arbitrary()]
}

pub fn align_primary_axis() -> Vec<ClassDef> {
    literals(&["start", "end", "center", "between", "around", "evenly", "stretch", "baseline", "center-safe", "end-safe"])
}

pub fn align_secondary_axis() -> Vec<ClassDef> {
    literals(&["start", "end", "center", "stretch", "center-safe", "end-safe"])
}

pub fn margin() -> Vec<ClassDef> {
    defs!["auto", unambiguous_spacing()]
}

pub fn sizing() -> Vec<ClassDef> {
    defs![
        Fraction,
        literals(&["auto", "full", "dvw", "dvh", "lvw", "lvh", "svw", "svh", "min", "max", "fit"]),
        unambiguous_spacing(),
    ]
}

pub fn sizing_inline() -> Vec<ClassDef> {
    defs![
        Fraction,
        literals(&["screen", "full", "dvw", "lvw", "svw", "min", "max", "fit"]),
        unambiguous_spacing(),
    ]
}

pub fn sizing_block() -> Vec<ClassDef> {
    defs![
        Fraction,
        literals(&["screen", "full", "lh", "dvh", "lvh", "svh", "min", "max", "fit"]),
        unambiguous_spacing(),
    ]
}

pub fn color() -> Vec<ClassDef> {
    defs![theme_color(), arbitrary()]
}

pub fn bg_position() -> Vec<ClassDef> {
    defs![
        position(),
        ArbitraryVariablePosition,
        ArbitraryPosition,
        nest("position", arbitrary()),
    ]
}

pub fn bg_repeat() -> Vec<ClassDef> {
    defs!["no-repeat", nest("repeat", defs!["", "x", "y", "space", "round"])]
}

pub fn bg_size() -> Vec<ClassDef> {
    defs!["auto", "cover", "contain", ArbitraryVariableSize, ArbitrarySize, nest("size", arbitrary())]
}

pub fn gradient_stop_position() -> Vec<ClassDef> {
    defs![Percent, ArbitraryVariableLength, ArbitraryLength]
}

pub fn radius() -> Vec<ClassDef> {
    defs!["", "none", "full", theme_sizes(), arbitrary()]
}

pub fn border_width() -> Vec<ClassDef> {
    defs!["", Number, ArbitraryVariableLength, ArbitraryLength]
}

pub fn blend_mode() -> Vec<ClassDef> {
    literals(&[
        "normal",
        "multiply",
        "screen",
        "overlay",
        "darken",
        "lighten",
        "color-dodge",
        "color-burn",
        "hard-light",
        "soft-light",
        "difference",
        "exclusion",
        "hue",
        "saturation",
        "color",
        "luminosity",
    ])
}

pub fn mask_image_position() -> Vec<ClassDef> {
    defs![Number, Percent, ArbitraryVariablePosition, ArbitraryPosition]
}

/// Shared by `rotate-*` and `scale-*`.
pub fn transform_amount() -> Vec<ClassDef> {
    defs!["none", Number, arbitrary()]
}

pub fn translate() -> Vec<ClassDef> {
    defs![Fraction, "full", unambiguous_spacing()]
}

pub fn filter_amount() -> Vec<ClassDef> {
    defs!["", Number, arbitrary()]
}

pub fn box_edges() -> Vec<ClassDef> {
    literals(&["border", "padding", "content", "fill", "stroke", "view"])
}

pub fn line_style() -> Vec<ClassDef> {
    literals(&["solid", "dashed", "dotted", "double", "hidden", "none"])
}
