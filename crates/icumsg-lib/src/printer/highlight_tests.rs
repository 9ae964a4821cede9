use icumsg_core::Colors;

use super::{AnsiStyler, Category, HtmlStyler, PlainStyler};
use crate::{FormatOptions, highlight, highlight_with, parse};

#[test]
fn plain_styler_matches_format() {
    let message = parse("{n, plural, one {# item} other {# items}}").unwrap();
    assert_eq!(
        highlight(&message, &PlainStyler),
        crate::format(&message, &FormatOptions::default())
    );
}

#[test]
fn html_styler_tags_every_fragment() {
    let message = parse("Hi <{name}> & {n, number, #}").unwrap();
    insta::assert_snapshot!(highlight(&message, &HtmlStyler), @r#"<span class="icu-text">Hi &lt;</span><span class="icu-brace">{</span><span class="icu-argument">name</span><span class="icu-brace">}</span><span class="icu-text">&gt; &amp; </span><span class="icu-brace">{</span><span class="icu-argument">n</span><span class="icu-punctuation">,</span> <span class="icu-keyword">number</span><span class="icu-punctuation">,</span> <span class="icu-style">#</span><span class="icu-brace">}</span>"#);
}

#[test]
fn ansi_styler_colors_by_category() {
    let message = parse("{g, select, other {x}}").unwrap();
    insta::assert_snapshot!(
        highlight(&message, &AnsiStyler::default()).replace('\x1b', "ESC"),
        @r"
    ESC[2m{ESC[0mESC[34mgESC[0mESC[2m,ESC[0m ESC[35mselectESC[0mESC[2m,ESC[0m
        ESC[33motherESC[0m ESC[2m{ESC[0mxESC[2m}ESC[0m
    ESC[2m}ESC[0m
    "
    );
}

#[test]
fn ansi_styler_without_colors_is_plain() {
    let message = parse("{g, select, other {x}}").unwrap();
    assert_eq!(
        highlight(&message, &AnsiStyler::new(Colors::OFF)),
        highlight(&message, &PlainStyler)
    );
}

#[test]
fn closure_styler() {
    let message = parse("{a} {b, plural, other {#}}").unwrap();
    let styler = |content: &str, category: Category| {
        if category == Category::ArgumentName {
            content.to_uppercase()
        } else {
            content.to_string()
        }
    };
    let options = FormatOptions::new().align_selectors(false);
    insta::assert_snapshot!(highlight_with(&message, &options, &styler), @r"
    {A} {B, plural,
        other {#}
    }
    ");
}

#[test]
fn category_names() {
    assert_eq!(Category::ArgumentName.as_str(), "argument");
    assert_eq!(Category::Punctuation.as_str(), "punctuation");
    assert_eq!(
        serde_json::to_string(&Category::ArgumentName).unwrap(),
        r#""argument_name""#
    );
}
