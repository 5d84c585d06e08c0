//! Input flattening and output assembly.

use super::resolve::Outcome;

/// All whitespace-separated tokens of `inputs`, in call order.
pub(crate) fn flatten<'a>(inputs: &[&'a str]) -> Vec<&'a str> {
    inputs.iter().flat_map(|input| input.split_whitespace()).collect()
}

/// Space-join the tokens whose outcome keeps them in the output.
pub(crate) fn assemble(tokens: &[&str], outcomes: &[Outcome]) -> String {
    let mut out = String::new();
    for (token, outcome) in tokens.iter().zip(outcomes) {
        if !outcome.survives() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Concatenate class lists with single spaces, skipping empty ones. No
/// conflict resolution takes place.
pub(crate) fn join(inputs: &[&str]) -> String {
    let mut out = String::new();
    for input in inputs.iter().filter(|input| !input.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(input);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_splits_on_any_whitespace() {
        assert_eq!(flatten(&[]), Vec::<&str>::new());
        assert_eq!(flatten(&["", "   ", "\n\t"]), Vec::<&str>::new());
        assert_eq!(flatten(&["  a\tb\n", "c\r\nd  ", "e"]), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn assemble_keeps_survivors_in_order() {
        let tokens = ["a", "b", "c", "d"];
        let outcomes = [Outcome::Superseded { by: 2 }, Outcome::Unclassified, Outcome::Kept, Outcome::Kept];
        assert_eq!(assemble(&tokens, &outcomes), "b c d");
        assert_eq!(assemble(&[], &[]), "");
    }

    #[test]
    fn join_skips_empty_inputs() {
        assert_eq!(join(&[]), "");
        assert_eq!(join(&["a", "", "b c"]), "a b c");
        assert_eq!(join(&["", ""]), "");
        assert_eq!(join(&["px-2", "px-4"]), "px-2 px-4");
    }
}
