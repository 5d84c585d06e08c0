//! 2D and 3D transforms.

use super::scales::*;
use super::validators::Validator::*;
use super::ClassGroupDef;

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed("backface", "backface", literals(&["hidden", "visible"])),
        ClassGroupDef::prefixed("perspective", "perspective", defs![theme_perspective(), arbitrary()]),
        ClassGroupDef::prefixed("perspective-origin", "perspective-origin", position_with_arbitrary()),
        ClassGroupDef::prefixed("rotate", "rotate", transform_amount()),
        ClassGroupDef::prefixed("rotate-x", "rotate-x", transform_amount()),
        ClassGroupDef::prefixed("rotate-y", "rotate-y", transform_amount()),
        ClassGroupDef::prefixed("rotate-z", "rotate-z", transform_amount()),
        ClassGroupDef::prefixed("scale", "scale", transform_amount()),
        ClassGroupDef::prefixed("scale-x", "scale-x", transform_amount()),
        ClassGroupDef::prefixed("scale-y", "scale-y", transform_amount()),
        ClassGroupDef::prefixed("scale-z", "scale-z", transform_amount()),
        ClassGroupDef::new("scale-3d", defs!["scale-3d"]),
        ClassGroupDef::prefixed("skew", "skew", numeric(Number)),
        ClassGroupDef::prefixed("skew-x", "skew-x", numeric(Number)),
        ClassGroupDef::prefixed("skew-y", "skew-y", numeric(Number)),
        ClassGroupDef::prefixed("transform", "transform", defs![arbitrary(), "", "none", "gpu", "cpu"]),
        ClassGroupDef::prefixed("transform-origin", "origin", position_with_arbitrary()),
        ClassGroupDef::prefixed("transform-style", "transform", literals(&["3d", "flat"])),
        ClassGroupDef::prefixed("translate", "translate", translate()),
        ClassGroupDef::prefixed("translate-x", "translate-x", translate()),
        ClassGroupDef::prefixed("translate-y", "translate-y", translate()),
        ClassGroupDef::prefixed("translate-z", "translate-z", translate()),
        ClassGroupDef::new("translate-none", defs!["translate-none"]),
    ]
}
