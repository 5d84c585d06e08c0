//! Border radius, width, style and color; outlines and divides.
//!
//! Widths are registered before colors: both hang off `border-*`, and the
//! color scale takes any remaining value.

use super::scales::*;
use super::validators::Validator::*;
use super::{ClassDef, ClassGroupDef};

const RADIUS_CORNERS: &[&str] = &[
    "rounded",
    "rounded-s",
    "rounded-e",
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded-ss",
    "rounded-se",
    "rounded-ee",
    "rounded-es",
    "rounded-tl",
    "rounded-tr",
    "rounded-br",
    "rounded-bl",
];

const BORDER_WIDTHS: &[(&str, &str)] = &[
    ("border-w", "border"),
    ("border-w-x", "border-x"),
    ("border-w-y", "border-y"),
    ("border-w-s", "border-s"),
    ("border-w-e", "border-e"),
    ("border-w-bs", "border-bs"),
    ("border-w-be", "border-be"),
    ("border-w-t", "border-t"),
    ("border-w-r", "border-r"),
    ("border-w-b", "border-b"),
    ("border-w-l", "border-l"),
];

const BORDER_COLORS: &[(&str, &str)] = &[
    ("border-color", "border"),
    ("border-color-x", "border-x"),
    ("border-color-y", "border-y"),
    ("border-color-s", "border-s"),
    ("border-color-e", "border-e"),
    ("border-color-bs", "border-bs"),
    ("border-color-be", "border-be"),
    ("border-color-t", "border-t"),
    ("border-color-r", "border-r"),
    ("border-color-b", "border-b"),
    ("border-color-l", "border-l"),
];

fn each(table: &[(&'static str, &'static str)], scale: fn() -> Vec<ClassDef>) -> Vec<ClassGroupDef> {
    table.iter().map(|&(id, prefix)| ClassGroupDef::prefixed(id, prefix, scale())).collect()
}

pub fn get() -> Vec<ClassGroupDef> {
    let mut groups: Vec<ClassGroupDef> =
        RADIUS_CORNERS.iter().map(|&id| ClassGroupDef::prefixed(id, id, radius())).collect();
    groups.extend(each(BORDER_WIDTHS, border_width));
    groups.extend([
        ClassGroupDef::prefixed("divide-x", "divide-x", border_width()),
        ClassGroupDef::new("divide-x-reverse", defs!["divide-x-reverse"]),
        ClassGroupDef::prefixed("divide-y", "divide-y", border_width()),
        ClassGroupDef::new("divide-y-reverse", defs!["divide-y-reverse"]),
        ClassGroupDef::prefixed("border-style", "border", line_style()),
        ClassGroupDef::prefixed("divide-style", "divide", line_style()),
    ]);
    groups.extend(each(BORDER_COLORS, color));
    groups.extend([
        ClassGroupDef::prefixed("divide-color", "divide", color()),
        ClassGroupDef::prefixed("outline-style", "outline", line_style()),
        ClassGroupDef::prefixed("outline-offset", "outline-offset", numeric(Number)),
        ClassGroupDef::prefixed("outline-w", "outline", border_width()),
        ClassGroupDef::prefixed("outline-color", "outline", color()),
    ]);
    groups
}
