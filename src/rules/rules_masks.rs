//! Mask images, gradients and mask layer properties.

use super::scales::*;
use super::validators::Validator::*;
use super::{ClassGroupDef, nest};

/// `(group id, class prefix)` pairs for every gradient stop, as
/// `[from-pos, to-pos, from-color, to-color]`.
const GRADIENT_STOPS: &[[(&str, &str); 4]] = &[
    [
        ("mask-image-linear-from-pos", "mask-linear-from"),
        ("mask-image-linear-to-pos", "mask-linear-to"),
        ("mask-image-linear-from-color", "mask-linear-from"),
        ("mask-image-linear-to-color", "mask-linear-to"),
    ],
    [
        ("mask-image-t-from-pos", "mask-t-from"),
        ("mask-image-t-to-pos", "mask-t-to"),
        ("mask-image-t-from-color", "mask-t-from"),
        ("mask-image-t-to-color", "mask-t-to"),
    ],
    [
        ("mask-image-r-from-pos", "mask-r-from"),
        ("mask-image-r-to-pos", "mask-r-to"),
        ("mask-image-r-from-color", "mask-r-from"),
        ("mask-image-r-to-color", "mask-r-to"),
    ],
    [
        ("mask-image-b-from-pos", "mask-b-from"),
        ("mask-image-b-to-pos", "mask-b-to"),
        ("mask-image-b-from-color", "mask-b-from"),
        ("mask-image-b-to-color", "mask-b-to"),
    ],
    [
        ("mask-image-l-from-pos", "mask-l-from"),
        ("mask-image-l-to-pos", "mask-l-to"),
        ("mask-image-l-from-color", "mask-l-from"),
        ("mask-image-l-to-color", "mask-l-to"),
    ],
    [
        ("mask-image-x-from-pos", "mask-x-from"),
        ("mask-image-x-to-pos", "mask-x-to"),
        ("mask-image-x-from-color", "mask-x-from"),
        ("mask-image-x-to-color", "mask-x-to"),
    ],
    [
        ("mask-image-y-from-pos", "mask-y-from"),
        ("mask-image-y-to-pos", "mask-y-to"),
        ("mask-image-y-from-color", "mask-y-from"),
        ("mask-image-y-to-color", "mask-y-to"),
    ],
];

const RADIAL_STOPS: [(&str, &str); 4] = [
    ("mask-image-radial-from-pos", "mask-radial-from"),
    ("mask-image-radial-to-pos", "mask-radial-to"),
    ("mask-image-radial-from-color", "mask-radial-from"),
    ("mask-image-radial-to-color", "mask-radial-to"),
];

const CONIC_STOPS: [(&str, &str); 4] = [
    ("mask-image-conic-from-pos", "mask-conic-from"),
    ("mask-image-conic-to-pos", "mask-conic-to"),
    ("mask-image-conic-from-color", "mask-conic-from"),
    ("mask-image-conic-to-color", "mask-conic-to"),
];

fn stops(table: &[(&'static str, &'static str); 4]) -> [ClassGroupDef; 4] {
    let [from_pos, to_pos, from_color, to_color] = *table;
    [
        ClassGroupDef::prefixed(from_pos.0, from_pos.1, mask_image_position()),
        ClassGroupDef::prefixed(to_pos.0, to_pos.1, mask_image_position()),
        ClassGroupDef::prefixed(from_color.0, from_color.1, color()),
        ClassGroupDef::prefixed(to_color.0, to_color.1, color()),
    ]
}

pub fn get() -> Vec<ClassGroupDef> {
    let mut groups = vec![
        ClassGroupDef::new("mask-clip", defs![nest("mask-clip", box_edges()), "mask-no-clip"]),
        ClassGroupDef::prefixed("mask-composite", "mask", literals(&["add", "subtract", "intersect", "exclude"])),
        ClassGroupDef::prefixed("mask-image-linear-pos", "mask-linear", defs![Number]),
    ];
    for table in GRADIENT_STOPS {
        groups.extend(stops(table));
    }
    groups.push(ClassGroupDef::prefixed("mask-image-radial", "mask-radial", arbitrary()));
    groups.extend(stops(&RADIAL_STOPS));
    groups.extend([
        ClassGroupDef::prefixed("mask-image-radial-shape", "mask-radial", literals(&["circle", "ellipse"])),
        ClassGroupDef::prefixed(
            "mask-image-radial-size",
            "mask-radial",
            defs![nest("closest", literals(&["side", "corner"])), nest("farthest", literals(&["side", "corner"]))],
        ),
        ClassGroupDef::prefixed("mask-image-radial-pos", "mask-radial-at", position()),
        ClassGroupDef::prefixed("mask-image-conic-pos", "mask-conic", defs![Number]),
    ]);
    groups.extend(stops(&CONIC_STOPS));
    groups.extend([
        ClassGroupDef::prefixed("mask-mode", "mask", literals(&["alpha", "luminance", "match"])),
        ClassGroupDef::prefixed("mask-origin", "mask-origin", box_edges()),
        ClassGroupDef::prefixed("mask-position", "mask", bg_position()),
        ClassGroupDef::prefixed("mask-repeat", "mask", bg_repeat()),
        ClassGroupDef::prefixed("mask-size", "mask", bg_size()),
        ClassGroupDef::prefixed("mask-type", "mask-type", literals(&["alpha", "luminance"])),
        ClassGroupDef::prefixed("mask-image", "mask", with_arbitrary(&["none"])),
    ]);
    groups
}
