//! Interactivity, SVG and accessibility.

use super::scales::*;
use super::validators::Validator::*;
use super::ClassGroupDef;

const CURSORS: &[&str] = &[
    "auto",
    "default",
    "pointer",
    "wait",
    "text",
    "move",
    "help",
    "not-allowed",
    "none",
    "context-menu",
    "progress",
    "cell",
    "crosshair",
    "vertical-text",
    "alias",
    "copy",
    "no-drop",
    "grab",
    "grabbing",
    "all-scroll",
    "col-resize",
    "row-resize",
    "n-resize",
    "e-resize",
    "s-resize",
    "w-resize",
    "ne-resize",
    "nw-resize",
    "se-resize",
    "sw-resize",
    "ew-resize",
    "ns-resize",
    "nesw-resize",
    "nwse-resize",
    "zoom-in",
    "zoom-out",
];

const SCROLL_SPACING: &[&str] = &[
    "scroll-m",
    "scroll-mx",
    "scroll-my",
    "scroll-ms",
    "scroll-me",
    "scroll-mbs",
    "scroll-mbe",
    "scroll-mt",
    "scroll-mr",
    "scroll-mb",
    "scroll-ml",
    "scroll-p",
    "scroll-px",
    "scroll-py",
    "scroll-ps",
    "scroll-pe",
    "scroll-pbs",
    "scroll-pbe",
    "scroll-pt",
    "scroll-pr",
    "scroll-pb",
    "scroll-pl",
];

pub fn get() -> Vec<ClassGroupDef> {
    let mut groups = vec![
        ClassGroupDef::prefixed("accent", "accent", color()),
        ClassGroupDef::prefixed("appearance", "appearance", literals(&["none", "auto"])),
        ClassGroupDef::prefixed("caret-color", "caret", color()),
        ClassGroupDef::prefixed(
            "color-scheme",
            "scheme",
            literals(&["normal", "dark", "light", "light-dark", "only-dark", "only-light"]),
        ),
        ClassGroupDef::prefixed("cursor", "cursor", with_arbitrary(CURSORS)),
        ClassGroupDef::prefixed("field-sizing", "field-sizing", literals(&["fixed", "content"])),
        ClassGroupDef::prefixed("pointer-events", "pointer-events", literals(&["auto", "none"])),
        ClassGroupDef::prefixed("resize", "resize", literals(&["none", "", "y", "x"])),
        ClassGroupDef::prefixed("scroll-behavior", "scroll", literals(&["auto", "smooth"])),
    ];
    groups.extend(SCROLL_SPACING.iter().map(|&id| ClassGroupDef::prefixed(id, id, unambiguous_spacing())));
    groups.extend([
        ClassGroupDef::prefixed("snap-align", "snap", literals(&["start", "end", "center", "align-none"])),
        ClassGroupDef::prefixed("snap-stop", "snap", literals(&["normal", "always"])),
        ClassGroupDef::prefixed("snap-type", "snap", literals(&["none", "x", "y", "both"])),
        ClassGroupDef::prefixed("snap-strictness", "snap", literals(&["mandatory", "proximity"])),
        ClassGroupDef::prefixed("touch", "touch", literals(&["auto", "none", "manipulation"])),
        ClassGroupDef::prefixed("touch-x", "touch-pan", literals(&["x", "left", "right"])),
        ClassGroupDef::prefixed("touch-y", "touch-pan", literals(&["y", "up", "down"])),
        ClassGroupDef::new("touch-pz", defs!["touch-pinch-zoom"]),
        ClassGroupDef::prefixed("select", "select", literals(&["none", "text", "all", "auto"])),
        ClassGroupDef::prefixed(
            "will-change",
            "will-change",
            with_arbitrary(&["auto", "scroll", "contents", "transform"]),
        ),
        ClassGroupDef::prefixed("fill", "fill", defs!["none", color()]),
        ClassGroupDef::prefixed(
            "stroke-w",
            "stroke",
            defs![Number, ArbitraryVariableLength, ArbitraryLength, ArbitraryNumber],
        ),
        ClassGroupDef::prefixed("stroke", "stroke", defs!["none", color()]),
        ClassGroupDef::prefixed("forced-color-adjust", "forced-color-adjust", literals(&["auto", "none"])),
    ]);
    groups
}
