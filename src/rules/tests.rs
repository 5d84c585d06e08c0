use crate::{Config, Merger, merge};

fn check(cases: &[(&[&str], &str)]) {
    for (inputs, expected) in cases {
        let got = merge(inputs);
        assert_eq!(&got, expected, "merge({inputs:?})");
    }
}

#[test]
fn documented_scenarios() {
    check(&[
        (&[], ""),
        (&["px-2 py-1", "p-3"], "p-3"),
        (&["text-red-500", "text-blue-500"], "text-blue-500"),
        (&["hover:bg-red-500", "hover:bg-blue-500", "bg-green-500"], "hover:bg-blue-500 bg-green-500"),
        (&["bg-red-500", "bg-[#1da1f2]"], "bg-[#1da1f2]"),
        (&["my-custom-class px-2", "px-4"], "my-custom-class px-4"),
        (&["!font-bold", "!font-thin"], "!font-thin"),
        (&["px-2 py-1 bg-red hover:bg-dark-red", "p-3 bg-[#B91C1C]"], "hover:bg-dark-red p-3 bg-[#B91C1C]"),
    ]);
}

#[test]
fn whitespace_handling() {
    check(&[
        (&[""], ""),
        (&["   "], ""),
        (&["", " ", "\t\n"], ""),
        (&["  p-2 \n\t p-4  "], "p-4"),
        (&["p-2\r\nm-2"], "p-2 m-2"),
        (&["", "block", "", "hidden"], "hidden"),
        (&["  foo  ", "  bar  "], "foo bar"),
    ]);
}

#[test]
fn important_marker() {
    check(&[
        (&["font-bold! font-thin!"], "font-thin!"),
        (&["!font-bold font-thin!"], "font-thin!"),
        (&["font-bold !font-thin"], "font-bold !font-thin"),
        (&["!font-bold font-thin"], "!font-bold font-thin"),
        (&["hover:!p-2 hover:p-4!"], "hover:p-4!"),
        (&["!p-3 !px-2 !py-1 !p-4"], "!p-4"),
    ]);
}

#[test]
fn negative_values() {
    check(&[
        (&["-m-2 m-4"], "m-4"),
        (&["m-4 -m-2"], "-m-2"),
        (&["-top-1 top-2"], "top-2"),
        (&["-mx-2 m-1"], "m-1"),
        (&["-translate-x-2 translate-x-4"], "translate-x-4"),
    ]);
}

#[test]
fn arbitrary_values_and_variables() {
    check(&[
        (&["m-[2px] m-[10px]"], "m-[10px]"),
        (&["z-20 z-[99]"], "z-[99]"),
        (&["grid-rows-[1fr,auto] grid-rows-2"], "grid-rows-2"),
        (&["text-[0.5px] text-lg"], "text-lg"),
        (&["text-[0.5px] text-red-500"], "text-[0.5px] text-red-500"),
        (&["bg-[url(http://a.b/c.png)] bg-none"], "bg-none"),
        (&["bg-[url(http://a.b/c.png)] bg-red-500"], "bg-[url(http://a.b/c.png)] bg-red-500"),
        (&["p-(--gutter) p-4"], "p-4"),
        (&["p-4 p-(--gutter)"], "p-(--gutter)"),
    ]);
}

#[test]
fn arbitrary_properties() {
    check(&[
        (&["[paint-order:markers] [paint-order:normal]"], "[paint-order:normal]"),
        (&["[paint-order:markers] hover:[paint-order:normal]"], "[paint-order:markers] hover:[paint-order:normal]"),
        (&["[--my-var:1] [--other:2]"], "[--my-var:1] [--other:2]"),
        (&["[--my-var:1] [--my-var:2]"], "[--my-var:2]"),
    ]);
}

#[test]
fn arbitrary_variants() {
    check(&[
        (&["[&>*]:p-2 [&>*]:p-4"], "[&>*]:p-4"),
        (&["[&>*]:p-2 [&_*]:p-4"], "[&>*]:p-2 [&_*]:p-4"),
        (&["[&[data-open]]:p-2 [&[data-open]]:p-4"], "[&[data-open]]:p-4"),
        (&["[@media(min-width:640px)]:p-2 [@media(min-width:640px)]:p-4"], "[@media(min-width:640px)]:p-4"),
        (&["hover:[&>*]:p-2 [&>*]:hover:p-4"], "hover:[&>*]:p-2 [&>*]:hover:p-4"),
    ]);
}

#[test]
fn postfix_modifiers() {
    check(&[
        (&["leading-9 text-lg/7"], "text-lg/7"),
        (&["text-lg/7 leading-9"], "text-lg/7 leading-9"),
        (&["text-lg/7 text-sm"], "text-sm"),
        (&["bg-red-500/50 bg-blue-500"], "bg-blue-500"),
        (&["w-1/2 w-full"], "w-full"),
    ]);
}

#[test]
fn per_side_border_colors() {
    check(&[
        (&["border-t-red-500 border-t-blue-500"], "border-t-blue-500"),
        (&["border-red-500 border-t-blue-500"], "border-red-500 border-t-blue-500"),
        (&["border-t-red-500 border-red-500"], "border-red-500"),
        (&["border-x-red-500 border-l-blue-500"], "border-x-red-500 border-l-blue-500"),
        (&["border-l-blue-500 border-x-red-500"], "border-x-red-500"),
        (&["border-t-2 border-t-red-500"], "border-t-2 border-t-red-500"),
        (&["border-2 border-t-4 border"], "border"),
    ]);
}

#[test]
fn cross_group_conflicts() {
    check(&[
        // inset
        (&["inset-1 inset-x-2"], "inset-1 inset-x-2"),
        (&["top-1 left-2 inset-2"], "inset-2"),
        (&["left-2 inset-x-1"], "inset-x-1"),
        (&["inset-x-1 left-2"], "inset-x-1 left-2"),
        (&["inset-y-1 inset-x-1"], "inset-y-1 inset-x-1"),
        // touch
        (&["touch-pan-x touch-pan-right"], "touch-pan-right"),
        (&["touch-pan-x touch-auto"], "touch-auto"),
        (&["touch-auto touch-pan-x"], "touch-pan-x"),
        (&["touch-pan-x touch-pan-y touch-pinch-zoom"], "touch-pan-x touch-pan-y touch-pinch-zoom"),
        // font-variant-numeric
        (&["lining-nums tabular-nums diagonal-fractions"], "lining-nums tabular-nums diagonal-fractions"),
        (&["normal-nums tabular-nums"], "tabular-nums"),
        (&["tabular-nums normal-nums"], "normal-nums"),
        // line-clamp
        (&["overflow-auto inline line-clamp-1"], "line-clamp-1"),
        (&["line-clamp-1 overflow-auto inline"], "line-clamp-1 overflow-auto inline"),
    ]);
}

#[test]
fn standalone_classes() {
    check(&[
        (&["block hidden"], "hidden"),
        (&["flex inline-flex"], "inline-flex"),
        (&["underline line-through"], "line-through"),
        (&["sr-only not-sr-only"], "not-sr-only"),
        (&["italic not-italic"], "not-italic"),
        (&["static sticky"], "sticky"),
        (&["block sticky hidden"], "sticky hidden"),
    ]);
}

#[test]
fn non_tailwind_classes() {
    check(&[
        (&["foo-bar baz"], "foo-bar baz"),
        (&["p-2 foo p-4 bar"], "foo p-4 bar"),
        (&["hover:foo hover:foo"], "hover:foo hover:foo"),
        (&["group peer p-2"], "group peer p-2"),
        (&["bg-[#fff bg-red-500"], "bg-[#fff bg-red-500"),
        (&["p-[1px]] p-2"], "p-[1px]] p-2"),
    ]);
}

#[test]
fn scopes_are_independent() {
    check(&[
        (&["hover:p-2 focus:p-4 p-6"], "hover:p-2 focus:p-4 p-6"),
        (&["md:hover:p-2 hover:md:p-4"], "md:hover:p-2 hover:md:p-4"),
        (&["dark:hover:p-2 dark:hover:p-4"], "dark:hover:p-4"),
        (&["group-hover:p-2 group-hover:p-4"], "group-hover:p-4"),
        (&["hover:px-2 p-3"], "hover:px-2 p-3"),
    ]);
}

#[test]
fn prefixed_classes() {
    let merger = Merger::new(Config::default().with_prefix("tw")).unwrap();
    let cases: &[(&str, &str)] = &[
        ("tw:px-2 tw:py-1 tw:p-3", "tw:p-3"),
        ("tw:hover:bg-red-500 tw:hover:bg-blue-500", "tw:hover:bg-blue-500"),
        ("px-2 px-4", "px-2 px-4"),
        ("tw:p-2 p-4 tw:p-6", "p-4 tw:p-6"),
        ("tw:!font-bold tw:!font-thin", "tw:!font-thin"),
        ("tw-p-2 tw:p-4", "tw-p-2 tw:p-4"),
    ];
    for (input, expected) in cases {
        assert_eq!(merger.merge(&[input]), *expected, "merge({input:?})");
    }
}
