//! Typography.
//!
//! `text-*` is shared by font size, alignment, wrapping and color; the color
//! scale accepts anything, so it is registered after font size.

use super::scales::*;
use super::validators::Validator::*;
use super::ClassGroupDef;

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed(
            "font-size",
            "text",
            defs!["base", theme_sizes(), ArbitraryVariableLength, ArbitraryLength],
        ),
        ClassGroupDef::new("font-smoothing", defs!["antialiased", "subpixel-antialiased"]),
        ClassGroupDef::new("font-style", defs!["italic", "not-italic"]),
        ClassGroupDef::prefixed(
            "font-weight",
            "font",
            defs![theme_font_weight(), ArbitraryVariableWeight, ArbitraryWeight],
        ),
        ClassGroupDef::prefixed(
            "font-stretch",
            "font-stretch",
            defs![
                literals(&[
                    "ultra-condensed",
                    "extra-condensed",
                    "condensed",
                    "semi-condensed",
                    "normal",
                    "semi-expanded",
                    "expanded",
                    "extra-expanded",
                    "ultra-expanded",
                ]),
                Percent,
                ArbitraryValue,
            ],
        ),
        ClassGroupDef::prefixed(
            "font-family",
            "font",
            defs![ArbitraryVariableFamilyName, ArbitraryFamilyName, theme_font()],
        ),
        ClassGroupDef::prefixed("font-features", "font-features", defs![ArbitraryValue]),
        ClassGroupDef::new("fvn-normal", defs!["normal-nums"]),
        ClassGroupDef::new("fvn-ordinal", defs!["ordinal"]),
        ClassGroupDef::new("fvn-slashed-zero", defs!["slashed-zero"]),
        ClassGroupDef::new("fvn-figure", defs!["lining-nums", "oldstyle-nums"]),
        ClassGroupDef::new("fvn-spacing", defs!["proportional-nums", "tabular-nums"]),
        ClassGroupDef::new("fvn-fraction", defs!["diagonal-fractions", "stacked-fractions"]),
        ClassGroupDef::prefixed("tracking", "tracking", defs![theme_tracking(), arbitrary()]),
        ClassGroupDef::prefixed("line-clamp", "line-clamp", defs![Number, "none", ArbitraryVariable, ArbitraryNumber]),
        ClassGroupDef::prefixed("leading", "leading", defs![theme_leading(), arbitrary(), theme_spacing()]),
        ClassGroupDef::prefixed("list-image", "list-image", with_arbitrary(&["none"])),
        ClassGroupDef::prefixed("list-style-position", "list", literals(&["inside", "outside"])),
        ClassGroupDef::prefixed("list-style-type", "list", with_arbitrary(&["disc", "decimal", "none"])),
        ClassGroupDef::prefixed(
            "text-alignment",
            "text",
            literals(&["left", "center", "right", "justify", "start", "end"]),
        ),
        ClassGroupDef::prefixed("placeholder-color", "placeholder", color()),
        ClassGroupDef::prefixed("text-color", "text", color()),
        ClassGroupDef::new("text-decoration", defs!["underline", "overline", "line-through", "no-underline"]),
        ClassGroupDef::prefixed(
            "text-decoration-style",
            "decoration",
            literals(&["solid", "dashed", "dotted", "double", "wavy"]),
        ),
        ClassGroupDef::prefixed(
            "text-decoration-thickness",
            "decoration",
            defs![Number, "from-font", "auto", ArbitraryVariable, ArbitraryLength],
        ),
        ClassGroupDef::prefixed("text-decoration-color", "decoration", color()),
        ClassGroupDef::prefixed("underline-offset", "underline-offset", defs![Number, "auto", arbitrary()]),
        ClassGroupDef::new("text-transform", defs!["uppercase", "lowercase", "capitalize", "normal-case"]),
        ClassGroupDef::new("text-overflow", defs!["truncate", "text-ellipsis", "text-clip"]),
        ClassGroupDef::prefixed("text-wrap", "text", literals(&["wrap", "nowrap", "balance", "pretty"])),
        ClassGroupDef::prefixed("indent", "indent", unambiguous_spacing()),
        ClassGroupDef::prefixed(
            "vertical-align",
            "align",
            with_arbitrary(&["baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super"]),
        ),
        ClassGroupDef::prefixed(
            "whitespace",
            "whitespace",
            literals(&["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"]),
        ),
        ClassGroupDef::prefixed("break", "break", literals(&["normal", "words", "all", "keep"])),
        ClassGroupDef::prefixed("wrap", "wrap", literals(&["break-word", "anywhere", "normal"])),
        ClassGroupDef::prefixed("hyphens", "hyphens", literals(&["none", "manual", "auto"])),
        ClassGroupDef::prefixed("content", "content", with_arbitrary(&["none"])),
    ]
}
