use indoc::indoc;

use crate::test_utils::{assert_round_trip, pretty};
use crate::{FormatOptions, format, parse};

#[test]
fn plain_text_and_arguments() {
    insta::assert_snapshot!(pretty("Hello {name}, it is {t, time, short}"), @"Hello {name}, it is {t, time, short}");
}

#[test]
fn select_aligns_selectors() {
    insta::assert_snapshot!(pretty("{g, select, male {He} female {She} other {They}}"), @r"
    {g, select,
        male   {He}
        female {She}
        other  {They}
    }
    ");
}

#[test]
fn plural_with_offset_and_explicit_selectors() {
    insta::assert_snapshot!(pretty("{n,plural,offset:1 =0{nobody}one{# guest}other{# guests}}"), @r"
    {n, plural, offset:1
        =0    {nobody}
        one   {# guest}
        other {# guests}
    }
    ");
}

#[test]
fn nested_blocks_indent_per_level() {
    let source = "{g, select, female {{n, plural, one {She has # item} other {She has # items}}} other {{n, selectordinal, one {#st} other {#th}}}}";
    insta::assert_snapshot!(pretty(source), @r"
    {g, select,
        female {{n, plural,
            one   {She has # item}
            other {She has # items}
        }}
        other  {{n, selectordinal,
            one   {#st}
            other {#th}
        }}
    }
    ");
}

#[test]
fn choice_one_limit_per_line() {
    insta::assert_snapshot!(pretty("{n, choice, 0#none|1#one|1<many}"), @r"
    {n, choice,
        0#none
        |1#one
        |1<many
    }
    ");
}

#[test]
fn text_is_requoted() {
    insta::assert_snapshot!(pretty("It''s '{literal}' text"), @"It''s '{'literal'}' text");
    insta::assert_snapshot!(pretty("# and | stay bare"), @"# and | stay bare");
    insta::assert_snapshot!(pretty("{n, plural, other {'#' is #}}"), @r"
    {n, plural,
        other {'#' is #}
    }
    ");
    insta::assert_snapshot!(pretty("'{''}'"), @"'{''}'");
    insta::assert_snapshot!(pretty("'{''' x"), @"'{''' x");
    insta::assert_snapshot!(pretty("{n, choice, 0#a'|'b}"), @r"
    {n, choice,
        0#a'|'b
    }
    ");
}

#[test]
fn without_alignment() {
    let message = parse("{g, select, male {He} female {She} other {They}}").unwrap();
    let options = FormatOptions::new().align_selectors(false);
    insta::assert_snapshot!(format(&message, &options), @r"
    {g, select,
        male {He}
        female {She}
        other {They}
    }
    ");
}

#[test]
fn custom_indent_and_line_break() {
    let message = parse("{g, select, a {x} other {{n, plural, other {#}}}}").unwrap();
    let options = FormatOptions::new().indent("\t").line_break("\r\n");
    assert_eq!(
        format(&message, &options),
        "{g, select,\r\n\ta     {x}\r\n\tother {{n, plural,\r\n\t\tother {#}\r\n\t}}\r\n}"
    );

    let ignored = FormatOptions::new().line_break("");
    assert_eq!(ignored, FormatOptions::default());
}

#[test]
fn formatting_is_stable() {
    let sources = [
        "",
        "Hello {name}",
        "Hello {0} and {1}",
        "It''s '{literal}' text",
        "{count, plural, one {# item} other {# items}}",
        "{n, plural, offset:2 =0 {nobody} =1 {{who}} one {{who} and # other} other {{who} and # others}}",
        "{n, plural, other {'#' is # and '{'braces'}'}}",
        "'{''}'",
        "'{''' and ''",
        "{n, plural, other {'#''#'}}",
        "{n, choice, 0#a'|''|'b}",
        "{g, select, male {He} female {She} other {They}} said {what}",
        "{g, select, other {{n, plural, one {#} other {{k, select, a {x} other {# y}}}}}}",
        "{n, selectordinal, one {#st} two {#nd} few {#rd} other {#th}}",
        "{n, choice, -1#negative|0#zero or a fraction|1#one|1<more than '|' one}",
        "{n, choice, 0#none|1#{n, plural, one {# file} other {# files}}}",
        "{d, date, yyyy-MM-dd} at {t, time, HH:mm} costs {p, number, #,##0.00}",
        indoc! {"
            {g, select,
                male {He}
                other {They}
            }"},
    ];
    for source in sources {
        assert_round_trip(source);
    }
}
