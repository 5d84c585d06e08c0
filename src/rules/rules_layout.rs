//! Layout: display, positioning, overflow, z-index.

use super::scales::*;
use super::validators::Validator::*;
use super::{ClassGroupDef, nest};

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed("aspect", "aspect", defs!["auto", "square", Fraction, arbitrary(), theme_aspect()]),
        ClassGroupDef::new("container", defs!["container"]),
        ClassGroupDef::prefixed("columns", "columns", defs![Number, arbitrary(), theme_sizes()]),
        ClassGroupDef::prefixed("break-after", "break-after", breaks()),
        ClassGroupDef::prefixed("break-before", "break-before", breaks()),
        ClassGroupDef::prefixed("break-inside", "break-inside", literals(&["auto", "avoid", "avoid-page", "avoid-column"])),
        ClassGroupDef::prefixed("box-decoration", "box-decoration", literals(&["slice", "clone"])),
        ClassGroupDef::prefixed("box", "box", literals(&["border", "content"])),
        ClassGroupDef::new(
            "display",
            literals(&[
                "block",
                "inline-block",
                "inline",
                "flex",
                "inline-flex",
                "table",
                "inline-table",
                "table-caption",
                "table-cell",
                "table-column",
                "table-column-group",
                "table-footer-group",
                "table-header-group",
                "table-row-group",
                "table-row",
                "flow-root",
                "grid",
                "inline-grid",
                "contents",
                "list-item",
                "hidden",
            ]),
        ),
        ClassGroupDef::new("sr", defs!["sr-only", "not-sr-only"]),
        ClassGroupDef::prefixed("float", "float", literals(&["right", "left", "none", "start", "end"])),
        ClassGroupDef::prefixed("clear", "clear", literals(&["left", "right", "both", "none", "start", "end"])),
        ClassGroupDef::new("isolation", defs!["isolate", "isolation-auto"]),
        ClassGroupDef::prefixed("object-fit", "object", literals(&["contain", "cover", "fill", "none", "scale-down"])),
        ClassGroupDef::prefixed("object-position", "object", position_with_arbitrary()),
        ClassGroupDef::prefixed("overflow", "overflow", overflow()),
        ClassGroupDef::prefixed("overflow-x", "overflow-x", overflow()),
        ClassGroupDef::prefixed("overflow-y", "overflow-y", overflow()),
        ClassGroupDef::prefixed("overscroll", "overscroll", overscroll()),
        ClassGroupDef::prefixed("overscroll-x", "overscroll-x", overscroll()),
        ClassGroupDef::prefixed("overscroll-y", "overscroll-y", overscroll()),
        ClassGroupDef::new("position", literals(&["static", "fixed", "absolute", "relative", "sticky"])),
        ClassGroupDef::prefixed("inset", "inset", inset()),
        ClassGroupDef::prefixed("inset-x", "inset-x", inset()),
        ClassGroupDef::prefixed("inset-y", "inset-y", inset()),
        ClassGroupDef::new("start", defs![nest("inset-s", inset()), nest("start", inset())]),
        ClassGroupDef::new("end", defs![nest("inset-e", inset()), nest("end", inset())]),
        ClassGroupDef::prefixed("inset-bs", "inset-bs", inset()),
        ClassGroupDef::prefixed("inset-be", "inset-be", inset()),
        ClassGroupDef::prefixed("top", "top", inset()),
        ClassGroupDef::prefixed("right", "right", inset()),
        ClassGroupDef::prefixed("bottom", "bottom", inset()),
        ClassGroupDef::prefixed("left", "left", inset()),
        ClassGroupDef::new("visibility", literals(&["visible", "invisible", "collapse"])),
        ClassGroupDef::prefixed("z", "z", defs![Integer, "auto", arbitrary()]),
    ]
}
