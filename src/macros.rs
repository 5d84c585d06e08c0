#[macro_export]
#[doc(hidden)]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a `Vec<ClassDef>` from a mix of literals, validators, nested
/// definitions and whole scales.
///
/// ```text
/// defs!["auto", Validator::Number, nest("span", defs!["full"]), scales::spacing()]
/// ```
#[macro_export]
macro_rules! defs {
    ($($item:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut out: Vec<$crate::ClassDef> = Vec::new();
        $( $crate::IntoClassDefs::push_into($item, &mut out); )*
        out
    }};
}

/// Merge any number of class lists with the built-in rule table.
///
/// # Example
/// ```
/// use twmerge::tw_merge;
///
/// assert_eq!(tw_merge!("px-2 py-1", "p-3"), "p-3");
/// ```
#[macro_export]
macro_rules! tw_merge {
    ($($input:expr),* $(,)?) => {
        $crate::merge(&[$(::std::convert::AsRef::<str>::as_ref(&$input)),*])
    };
}
