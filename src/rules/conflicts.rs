//! Which groups a class overrides besides its own.

use super::ConflictDef;

pub(crate) fn default_conflicts() -> Vec<ConflictDef> {
    vec![
        ConflictDef::new("overflow", &["overflow-x", "overflow-y"]),
        ConflictDef::new("overscroll", &["overscroll-x", "overscroll-y"]),
        ConflictDef::new(
            "inset",
            &["inset-x", "inset-y", "inset-bs", "inset-be", "start", "end", "top", "right", "bottom", "left"],
        ),
        ConflictDef::new("inset-x", &["right", "left"]),
        ConflictDef::new("inset-y", &["top", "bottom"]),
        ConflictDef::new("flex", &["basis", "grow", "shrink"]),
        ConflictDef::new("gap", &["gap-x", "gap-y"]),
        ConflictDef::new("p", &["px", "py", "ps", "pe", "pbs", "pbe", "pt", "pr", "pb", "pl"]),
        ConflictDef::new("px", &["pr", "pl"]),
        ConflictDef::new("py", &["pt", "pb"]),
        ConflictDef::new("m", &["mx", "my", "ms", "me", "mbs", "mbe", "mt", "mr", "mb", "ml"]),
        ConflictDef::new("mx", &["mr", "ml"]),
        ConflictDef::new("my", &["mt", "mb"]),
        ConflictDef::new("size", &["w", "h"]),
        ConflictDef::new("font-size", &["leading"]),
        ConflictDef::new(
            "fvn-normal",
            &["fvn-ordinal", "fvn-slashed-zero", "fvn-figure", "fvn-spacing", "fvn-fraction"],
        ),
        ConflictDef::new("fvn-ordinal", &["fvn-normal"]),
        ConflictDef::new("fvn-slashed-zero", &["fvn-normal"]),
        ConflictDef::new("fvn-figure", &["fvn-normal"]),
        ConflictDef::new("fvn-spacing", &["fvn-normal"]),
        ConflictDef::new("fvn-fraction", &["fvn-normal"]),
        ConflictDef::new("line-clamp", &["display", "overflow"]),
        ConflictDef::new(
            "rounded",
            &[
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
            ],
        ),
        ConflictDef::new("rounded-s", &["rounded-ss", "rounded-es"]),
        ConflictDef::new("rounded-e", &["rounded-se", "rounded-ee"]),
        ConflictDef::new("rounded-t", &["rounded-tl", "rounded-tr"]),
        ConflictDef::new("rounded-r", &["rounded-tr", "rounded-br"]),
        ConflictDef::new("rounded-b", &["rounded-br", "rounded-bl"]),
        ConflictDef::new("rounded-l", &["rounded-tl", "rounded-bl"]),
        ConflictDef::new("border-spacing", &["border-spacing-x", "border-spacing-y"]),
        ConflictDef::new(
            "border-w",
            &[
                "border-w-x",
                "border-w-y",
                "border-w-s",
                "border-w-e",
                "border-w-bs",
                "border-w-be",
                "border-w-t",
                "border-w-r",
                "border-w-b",
                "border-w-l",
            ],
        ),
        ConflictDef::new("border-w-x", &["border-w-r", "border-w-l"]),
        ConflictDef::new("border-w-y", &["border-w-t", "border-w-b"]),
        ConflictDef::new(
            "border-color",
            &[
                "border-color-x",
                "border-color-y",
                "border-color-s",
                "border-color-e",
                "border-color-bs",
                "border-color-be",
                "border-color-t",
                "border-color-r",
                "border-color-b",
                "border-color-l",
            ],
        ),
        ConflictDef::new("border-color-x", &["border-color-r", "border-color-l"]),
        ConflictDef::new("border-color-y", &["border-color-t", "border-color-b"]),
        ConflictDef::new("translate", &["translate-x", "translate-y", "translate-none"]),
        ConflictDef::new("translate-none", &["translate", "translate-x", "translate-y", "translate-z"]),
        ConflictDef::new(
            "scroll-m",
            &[
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
            ],
        ),
        ConflictDef::new("scroll-mx", &["scroll-mr", "scroll-ml"]),
        ConflictDef::new("scroll-my", &["scroll-mt", "scroll-mb"]),
        ConflictDef::new(
            "scroll-p",
            &[
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
            ],
        ),
        ConflictDef::new("scroll-px", &["scroll-pr", "scroll-pl"]),
        ConflictDef::new("scroll-py", &["scroll-pt", "scroll-pb"]),
        ConflictDef::new("touch", &["touch-x", "touch-y", "touch-pz"]),
        ConflictDef::new("touch-x", &["touch"]),
        ConflictDef::new("touch-y", &["touch"]),
        ConflictDef::new("touch-pz", &["touch"]),
    ]
}

/// Extra conflicts that apply only when the class carries a `/postfix`
/// (`text-lg/7` also sets the line height).
pub(crate) fn default_postfix_conflicts() -> Vec<ConflictDef> {
    vec![ConflictDef::new("font-size", &["leading"])]
}
