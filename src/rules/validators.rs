//! Value validators used by class groups.
//!
//! A validator is attached to a trie node and tested against the *rest* of a
//! class name once literal matching has run out (for `p-3` the `p` node sees
//! `"3"`, for `bg-[#fff]` the `bg` node sees `"[#fff]"`).
//!
//! Arbitrary values come in two shapes:
//!
//! ```text
//! [label:value]   arbitrary value     bg-[url(/a.png)]  text-[length:2px]
//! (label:value)   arbitrary variable  bg-(--brand)      text-(length:--x)
//! ```
//!
//! The optional `label` disambiguates families that share a prefix, e.g.
//! `text-[length:var(--x)]` (font size) vs `text-[color:var(--x)]` (color).

use regex::Regex;

/// Predicate over the remainder of a class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    /// Matches everything.
    Any,
    /// Anything that is not an arbitrary value or variable.
    AnyNonArbitrary,
    /// `1`, `1.5`, `-2`, `1e3`.
    Number,
    /// `1`, `-4`.
    Integer,
    /// `1/2`, `1.5/3`.
    Fraction,
    /// `50%`.
    Percent,
    /// `sm`, `2xl`, `2.5xl`.
    TshirtSize,
    ArbitraryValue,
    ArbitraryVariable,
    ArbitraryLength,
    ArbitraryNumber,
    ArbitraryWeight,
    ArbitraryFamilyName,
    ArbitraryPosition,
    ArbitrarySize,
    ArbitraryImage,
    ArbitraryShadow,
    ArbitraryVariableLength,
    ArbitraryVariableFamilyName,
    ArbitraryVariablePosition,
    ArbitraryVariableSize,
    ArbitraryVariableImage,
    ArbitraryVariableShadow,
    ArbitraryVariableWeight,
}

impl Validator {
    /// Returns true when `value` is accepted by this validator.
    pub fn matches(self, value: &str) -> bool {
        match self {
            Validator::Any => true,
            Validator::AnyNonArbitrary => !is_arbitrary_value(value) && !is_arbitrary_variable(value),
            Validator::Number => is_number(value),
            Validator::Integer => is_integer(value),
            Validator::Fraction => fraction_re().is_match(value),
            Validator::Percent => is_percent(value),
            Validator::TshirtSize => tshirt_re().is_match(value),
            Validator::ArbitraryValue => is_arbitrary_value(value),
            Validator::ArbitraryVariable => is_arbitrary_variable(value),
            Validator::ArbitraryLength => arbitrary_value_with(value, |l| l == "length", is_length_only),
            Validator::ArbitraryNumber => arbitrary_value_with(value, |l| l == "number", is_number),
            Validator::ArbitraryWeight => arbitrary_value_with(value, is_label_weight, |_| true),
            Validator::ArbitraryFamilyName => arbitrary_value_with(value, |l| l == "family-name", |_| false),
            Validator::ArbitraryPosition => arbitrary_value_with(value, is_label_position, |_| false),
            Validator::ArbitrarySize => arbitrary_value_with(value, is_label_size, |_| false),
            Validator::ArbitraryImage => arbitrary_value_with(value, is_label_image, is_image),
            Validator::ArbitraryShadow => arbitrary_value_with(value, |l| l == "shadow", is_shadow),
            Validator::ArbitraryVariableLength => arbitrary_variable_with(value, |l| l == "length", false),
            Validator::ArbitraryVariableFamilyName => arbitrary_variable_with(value, |l| l == "family-name", false),
            Validator::ArbitraryVariablePosition => arbitrary_variable_with(value, is_label_position, false),
            Validator::ArbitraryVariableSize => arbitrary_variable_with(value, is_label_size, false),
            Validator::ArbitraryVariableImage => arbitrary_variable_with(value, is_label_image, false),
            Validator::ArbitraryVariableShadow => arbitrary_variable_with(value, |l| l == "shadow", true),
            Validator::ArbitraryVariableWeight => arbitrary_variable_with(value, is_label_weight, true),
        }
    }
}

fn arbitrary_value_re() -> &'static Regex {
    regex!(r"(?i)^\[(?:(\w[\w-]*):)?(.+)\]$")
}

fn arbitrary_variable_re() -> &'static Regex {
    regex!(r"(?i)^\((?:(\w[\w-]*):)?(.+)\)$")
}

fn fraction_re() -> &'static Regex {
    regex!(r"^\d+(?:\.\d+)?/\d+(?:\.\d+)?$")
}

fn tshirt_re() -> &'static Regex {
    regex!(r"^(\d+(\.\d+)?)?(xs|sm|md|lg|xl)$")
}

fn is_number(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.parse::<i64>().is_ok()
}

fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

fn is_arbitrary_value(value: &str) -> bool {
    arbitrary_value_re().is_match(value)
}

fn is_arbitrary_variable(value: &str) -> bool {
    arbitrary_variable_re().is_match(value)
}

/// Split `[label:value]` and test the label when present, the value otherwise.
fn arbitrary_value_with(value: &str, test_label: fn(&str) -> bool, test_value: fn(&str) -> bool) -> bool {
    let Some(caps) = arbitrary_value_re().captures(value) else {
        return false;
    };
    match caps.get(1) {
        Some(label) => test_label(label.as_str()),
        None => caps.get(2).is_some_and(|v| test_value(v.as_str())),
    }
}

/// Split `(label:value)`; unlabelled variables match only when `match_no_label` is set.
fn arbitrary_variable_with(value: &str, test_label: fn(&str) -> bool, match_no_label: bool) -> bool {
    let Some(caps) = arbitrary_variable_re().captures(value) else {
        return false;
    };
    match caps.get(1) {
        Some(label) => test_label(label.as_str()),
        None => match_no_label,
    }
}

fn is_length_only(value: &str) -> bool {
    // Color functions such as `hsl(0 0% 0%)` contain length-looking units.
    let length = regex!(
        r"\d+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|\b(calc|min|max|clamp)\(.+\)|^0$"
    );
    let color_function = regex!(r"^(rgba?|hsla?|hwb|(ok)?(lab|lch)|color-mix)\(.+\)$");
    length.is_match(value) && !color_function.is_match(value)
}

fn is_shadow(value: &str) -> bool {
    regex!(r"^(inset_)?-?((\d+)?\.?(\d+)[a-z]+|0)_-?((\d+)?\.?(\d+)[a-z]+|0)").is_match(value)
}

fn is_image(value: &str) -> bool {
    regex!(r"^(url|image|image-set|cross-fade|element|(repeating-)?(linear|radial|conic)-gradient)\(.+\)$")
        .is_match(value)
}

fn is_label_position(label: &str) -> bool {
    matches!(label, "position" | "percentage")
}

fn is_label_image(label: &str) -> bool {
    matches!(label, "image" | "url")
}

fn is_label_size(label: &str) -> bool {
    matches!(label, "length" | "size" | "bg-size")
}

fn is_label_weight(label: &str) -> bool {
    matches!(label, "number" | "weight")
}

#[cfg(test)]
mod tests {
    use super::Validator::*;
    use super::*;

    fn check(validator: Validator, cases: &[(&str, bool)]) {
        for (input, want) in cases {
            assert_eq!(validator.matches(input), *want, "{validator:?}.matches({input:?})");
        }
    }

    #[test]
    fn plain_scales() {
        check(
            Fraction,
            &[("1/2", true), ("1.5/2", true), ("100/100", true), ("1", false), ("", false), ("1/", false), ("/2", false)],
        );
        check(Number, &[("1", true), ("1.5", true), ("-1.5", true), ("1e5", true), ("px", false), ("", false)]);
        check(Integer, &[("0", true), ("-1", true), ("100", true), ("1.5", false), ("", false)]);
        check(Percent, &[("50%", true), ("3.5%", true), ("50", false), ("%", false), ("", false)]);
        check(
            TshirtSize,
            &[("sm", true), ("xs", true), ("2xl", true), ("2.5xl", true), ("10xl", true), ("xxl", false), ("", false)],
        );
    }

    #[test]
    fn any_and_non_arbitrary() {
        assert!(Any.matches(""));
        assert!(Any.matches("anything"));
        check(AnyNonArbitrary, &[("red-500", true), ("block", true), ("[10px]", false), ("(--var)", false)]);
    }

    #[test]
    fn arbitrary_values() {
        check(
            ArbitraryValue,
            &[("[#B91C1C]", true), ("[length:10px]", true), ("red-500", false), ("(--var)", false), ("[]", false)],
        );
        check(
            ArbitraryLength,
            &[
                ("[10px]", true),
                ("[length:10px]", true),
                ("[calc(100%-4px)]", true),
                ("[#B91C1C]", false),
                ("[color:red]", false),
                ("[hsl(0_0%_0%)]", false),
                ("10px", false),
            ],
        );
        check(ArbitraryNumber, &[("[1.5]", true), ("[number:2]", true), ("[0]", true), ("[px]", false)]);
        check(ArbitraryPosition, &[("[position:absolute]", true), ("[percentage:50%]", true), ("[absolute]", false)]);
        check(
            ArbitraryImage,
            &[("[url(a.png)]", true), ("[image:url(a.png)]", true), ("[linear-gradient(red,blue)]", true), ("[#fff]", false)],
        );
        check(
            ArbitraryShadow,
            &[("[0_0_10px_red]", true), ("[shadow:0_0_10px_red]", true), ("[inset_0_0_10px_red]", true), ("[#fff]", false)],
        );
        check(ArbitraryWeight, &[("[weight:bold]", true), ("[900]", true), ("[length:1px]", false)]);
    }

    #[test]
    fn arbitrary_variables() {
        check(ArbitraryVariable, &[("(--my-var)", true), ("(length:--var)", true), ("[--my-var]", false), ("", false)]);
        check(ArbitraryVariableLength, &[("(length:--my-var)", true), ("(--my-var)", false), ("(number:--var)", false)]);
        check(ArbitraryVariableShadow, &[("(shadow:--my-var)", true), ("(--my-var)", true), ("(number:--var)", false)]);
        check(
            ArbitraryVariableWeight,
            &[("(weight:--v)", true), ("(number:--v)", true), ("(--v)", true), ("(length:--v)", false)],
        );
    }
}
