//! Token parsing: variant modifiers, important marker, postfix.
//!
//! Scanning is a single left-to-right pass over the bytes of a token, tracking
//! `[]` and `()` depth so that colons and slashes inside arbitrary values
//! (`bg-[url(http://x/y.png)]`, `[&:nth-child(3)]:p-2`) are not separators.
//!
//! ```text
//! hover:[&>*]:!p-2/50
//! └───┘ └───┘ │└─┘│
//! modifiers   │base└ postfix `/` (depth 0, after the last modifier)
//!             └ important marker
//! ```
//!
//! The important marker is recognized at the end first (`p-2!`) and then at
//! the start of the base (`!p-2`); exactly one marker is stripped. A token
//! whose brackets do not balance is flagged malformed and later passes
//! through unclassified.

use crate::{ParsedToken, TokenFlags};

const MODIFIER_SEPARATOR: u8 = b':';
const IMPORTANT_MARKER: char = '!';

/// Parse one raw token.
///
/// With a `prefix`, only tokens that start with `<prefix>:` are parsed; the
/// rest are returned as external and never take part in merging.
pub(crate) fn parse_token<'a>(raw: &'a str, prefix: Option<&str>) -> ParsedToken<'a> {
    let Some(prefix) = prefix else {
        return parse_unprefixed(raw, raw);
    };

    match raw.strip_prefix(prefix).and_then(|rest| rest.strip_prefix(MODIFIER_SEPARATOR as char)) {
        Some(rest) => parse_unprefixed(raw, rest),
        None => ParsedToken {
            original: raw,
            modifiers: Vec::new(),
            base: raw,
            postfix: None,
            flags: TokenFlags::EXTERNAL,
        },
    }
}

fn parse_unprefixed<'a>(original: &'a str, text: &'a str) -> ParsedToken<'a> {
    let bytes = text.as_bytes();
    let mut flags = TokenFlags::empty();
    let mut modifiers = Vec::new();
    let mut bracket_depth: i32 = 0;
    let mut paren_depth: i32 = 0;
    let mut modifier_start = 0;
    let mut slash: Option<usize> = None;

    for (idx, &byte) in bytes.iter().enumerate() {
        if bracket_depth == 0 && paren_depth == 0 {
            if byte == MODIFIER_SEPARATOR {
                modifiers.push(&text[modifier_start..idx]);
                modifier_start = idx + 1;
                continue;
            }
            if byte == b'/' {
                slash = Some(idx);
                continue;
            }
        }

        match byte {
            b'[' => bracket_depth += 1,
            b']' => bracket_depth -= 1,
            b'(' => paren_depth += 1,
            b')' => paren_depth -= 1,
            _ => {}
        }
        if bracket_depth < 0 || paren_depth < 0 {
            flags |= TokenFlags::MALFORMED;
        }
    }
    if bracket_depth != 0 || paren_depth != 0 {
        flags |= TokenFlags::MALFORMED;
    }

    let with_marker = &text[modifier_start..];
    let (base, base_start) = if let Some(stripped) = with_marker.strip_suffix(IMPORTANT_MARKER) {
        flags |= TokenFlags::IMPORTANT;
        (stripped, modifier_start)
    } else if let Some(stripped) = with_marker.strip_prefix(IMPORTANT_MARKER) {
        flags |= TokenFlags::IMPORTANT;
        (stripped, modifier_start + 1)
    } else {
        (with_marker, modifier_start)
    };

    // Offsets are taken relative to the base after the marker is gone.
    let postfix = slash.filter(|&pos| pos > base_start && pos < base_start + base.len()).map(|pos| pos - base_start);
    if postfix.is_some() {
        flags |= TokenFlags::POSTFIX;
    }

    ParsedToken { original, modifiers, base, postfix, flags }
}
