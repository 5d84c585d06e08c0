//! Filters and backdrop filters.

use super::scales::*;
use super::validators::Validator::*;
use super::ClassGroupDef;

pub fn get() -> Vec<ClassGroupDef> {
    vec![
        ClassGroupDef::prefixed("filter", "filter", with_arbitrary(&["", "none"])),
        ClassGroupDef::prefixed("blur", "blur", defs!["", "none", theme_sizes(), arbitrary()]),
        ClassGroupDef::prefixed("brightness", "brightness", numeric(Number)),
        ClassGroupDef::prefixed("contrast", "contrast", numeric(Number)),
        ClassGroupDef::prefixed(
            "drop-shadow",
            "drop-shadow",
            defs!["", "none", theme_sizes(), ArbitraryVariableShadow, ArbitraryShadow],
        ),
        ClassGroupDef::prefixed("drop-shadow-color", "drop-shadow", color()),
        ClassGroupDef::prefixed("grayscale", "grayscale", filter_amount()),
        ClassGroupDef::prefixed("hue-rotate", "hue-rotate", numeric(Number)),
        ClassGroupDef::prefixed("invert", "invert", filter_amount()),
        ClassGroupDef::prefixed("saturate", "saturate", numeric(Number)),
        ClassGroupDef::prefixed("sepia", "sepia", filter_amount()),
        ClassGroupDef::prefixed("backdrop-filter", "backdrop-filter", with_arbitrary(&["", "none"])),
        ClassGroupDef::prefixed("backdrop-blur", "backdrop-blur", defs!["", "none", theme_sizes(), arbitrary()]),
        ClassGroupDef::prefixed("backdrop-brightness", "backdrop-brightness", numeric(Number)),
        ClassGroupDef::prefixed("backdrop-contrast", "backdrop-contrast", numeric(Number)),
        ClassGroupDef::prefixed("backdrop-grayscale", "backdrop-grayscale", filter_amount()),
        ClassGroupDef::prefixed("backdrop-hue-rotate", "backdrop-hue-rotate", numeric(Number)),
        ClassGroupDef::prefixed("backdrop-invert", "backdrop-invert", filter_amount()),
        ClassGroupDef::prefixed("backdrop-opacity", "backdrop-opacity", numeric(Number)),
        ClassGroupDef::prefixed("backdrop-saturate", "backdrop-saturate", numeric(Number)),
        ClassGroupDef::prefixed("backdrop-sepia", "backdrop-sepia", filter_amount()),
    ]
}
