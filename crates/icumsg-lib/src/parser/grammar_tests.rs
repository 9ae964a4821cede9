use indoc::indoc;

use crate::parser::ast::{Node, Number};
use crate::parser::{ParseErrorKind, Parser, tokenize};
use crate::test_utils::{dump, parse_error};
use crate::{Error, parse, parse_with_recursion_limit};

#[test]
fn text_and_simple_argument() {
    insta::assert_snapshot!(dump("Hello {name}"), @r#"
    Text "Hello "
    Argument name
    "#);
}

#[test]
fn empty_message() {
    let message = parse("").unwrap();
    assert!(message.is_empty());
}

#[test]
fn plural_with_pound() {
    insta::assert_snapshot!(dump("{count, plural, one {# item} other {# items}}"), @r#"
    Plural count
      Option one
        Pound
        Text " item"
      Option other
        Pound
        Text " items"
    "#);
}

#[test]
fn nested_plural_with_offset_and_explicit_selector() {
    let source = "{g, select, male {{n, plural, offset:1 =0 {none} other {# more}}} other {x}}";
    insta::assert_snapshot!(dump(source), @r#"
    Select g
      Option male
        Plural n offset=1
          Option =0
            Text "none"
          Option other
            Pound
            Text " more"
      Option other
        Text "x"
    "#);
}

#[test]
fn explicit_selector_values() {
    let message = parse("{n, plural, =0 {none} =1.5 {some} other {many}}").unwrap();
    let Node::Plural(plural) = &message.parts[0] else {
        panic!("expected plural");
    };
    assert!(plural.options[0].explicit);
    assert_eq!(plural.options[0].explicit_value, Some(Number::Int(0)));
    assert_eq!(plural.options[1].explicit_value, Some(Number::Float(1.5)));
    assert_eq!(plural.options[1].selector, "=1.5");
    assert!(!plural.options[2].explicit);
    assert_eq!(plural.options[2].explicit_value, None);
}

#[test]
fn oversized_explicit_selector_is_float() {
    let message = parse("{n, plural, =99999999999999999999 {big} other {x}}").unwrap();
    let Node::Plural(plural) = &message.parts[0] else {
        panic!("expected plural");
    };
    assert_eq!(plural.options[0].explicit_value, Some(Number::Float(1e20)));
    assert_eq!(plural.options[0].selector, "=100000000000000000000.0");
}

#[test]
fn selectordinal() {
    insta::assert_snapshot!(dump("{n, selectordinal, one {#st} two {#nd} other {#th}}"), @r#"
    SelectOrdinal n
      Option one
        Pound
        Text "st"
      Option two
        Pound
        Text "nd"
      Option other
        Pound
        Text "th"
    "#);
}

#[test]
fn formatted_arguments() {
    insta::assert_snapshot!(dump("{d, date, short} {n, number} {t, time, HH:mm 'h'}"), @r#"
    Formatted d date "short"
    Text " "
    Formatted n number
    Text " "
    Formatted t time "HH:mm 'h'"
    "#);
}

#[test]
fn style_is_raw_and_trimmed() {
    let source = "{n, number,   #,##0.00  }";
    let message = parse(source).unwrap();
    let Node::FormattedArgument(arg) = &message.parts[0] else {
        panic!("expected formatted argument");
    };
    assert_eq!(arg.style.as_deref(), Some("#,##0.00"));
    let span = arg.style_span.unwrap();
    assert_eq!(&source[span.start..span.end], "#,##0.00");
}

#[test]
fn whitespace_inside_argument_syntax() {
    insta::assert_snapshot!(dump("{ name } { n , number , integer }"), @r#"
    Argument name
    Text " "
    Formatted n number "integer"
    "#);
}

#[test]
fn positional_arguments() {
    insta::assert_snapshot!(dump("{0} and {1}"), @r#"
    Argument 0
    Text " and "
    Argument 1
    "#);
}

#[test]
fn choice() {
    insta::assert_snapshot!(dump("{n, choice, 0#none|1#one|1<many {n}}"), @r#"
    Choice n
      Limit 0#
        Text "none"
      Limit 1#
        Text "one"
      Limit 1<
        Text "many "
        Argument n
    "#);
}

#[test]
fn choice_messages_are_trimmed() {
    let source = indoc! {"
        {n, choice,
            0# none
            |1.0# one
        }"};
    insta::assert_snapshot!(dump(source), @r#"
    Choice n
      Limit 0#
        Text "none"
      Limit 1.0#
        Text "one"
    "#);
}

#[test]
fn pound_outside_plural_is_text() {
    insta::assert_snapshot!(dump("# of {n}"), @r##"
    Text "# of "
    Argument n
    "##);
}

#[test]
fn pound_in_select_inside_plural() {
    insta::assert_snapshot!(dump("{n, plural, other {{g, select, other {#}}}}"), @r#"
    Plural n
      Option other
        Select g
          Option other
            Pound
    "#);
}

#[test]
fn pipe_outside_choice_is_text() {
    insta::assert_snapshot!(dump("a|b {g, select, other {c|d}}"), @r#"
    Text "a|b "
    Select g
      Option other
        Text "c|d"
    "#);
}

#[test]
fn quoted_syntax_is_text() {
    insta::assert_snapshot!(dump("'{'literal'}' and '#' it''s"), @r#"
    Text "{literal} and # it's"
    "#);
}

#[test]
fn spans_cover_source() {
    let source = "Hi {name}!";
    let message = parse(source).unwrap();
    let spans: Vec<_> = message.parts.iter().map(|p| p.span()).collect();
    assert_eq!(&source[spans[0].start..spans[0].end], "Hi ");
    assert_eq!(&source[spans[1].start..spans[1].end], "{name}");
    assert_eq!(&source[spans[2].start..spans[2].end], "!");
    assert_eq!((message.span.start, message.span.end), (0, source.len()));
}

#[test]
fn error_unclosed_argument() {
    insta::assert_snapshot!(parse_error("{name"), @r"
    Expected ',' or '}', found end of input. @ 5
    {name
         ^
    ");
}

#[test]
fn error_trailing_brace() {
    insta::assert_snapshot!(parse_error("a}"), @r"
    Unexpected '}' after the end of the message. @ 1
    a}
     ^
    ");
}

#[test]
fn error_explicit_selector_in_select() {
    insta::assert_snapshot!(parse_error("{g, select, =1 {a} other {b}}"), @r"
    Explicit selector is only allowed in plural and selectordinal arguments, not in select. @ 12
    {g, select, =1 {a} other {b}}
                ^
    ");
}

#[test]
fn error_missing_options() {
    let err = parse("{n, plural, }").unwrap_err();
    assert_eq!(err.offset(), 12);
    assert_eq!(err.to_string(), "Expected at least one option for plural argument.");
}

#[test]
fn error_empty_choice() {
    let Error::Parse(err) = parse("{n, choice, }").unwrap_err() else {
        panic!("expected parse error");
    };
    assert_eq!(err.kind, ParseErrorKind::ExpectedChoiceOptions);
    assert_eq!(err.message(), "Expected options for choice argument.");
    assert_eq!(err.offset, 12);
}

#[test]
fn error_choice_operator() {
    let err = parse("{n, choice, 0 none}").unwrap_err();
    assert_eq!(err.to_string(), "Expected '#' or '<' after choice limit.");
    assert_eq!(err.offset(), 14);
}

#[test]
fn error_brace_in_style() {
    let err = parse("{n, number, {x}}").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected '{' in argument style.");
    assert_eq!(err.offset(), 12);
}

#[test]
fn error_unclosed_options() {
    insta::assert_snapshot!(parse_error("{n, plural, one {a}"), @r"
    Expected selector or '}', found end of input. @ 19
    {n, plural, one {a}
                       ^
    ");
}

#[test]
fn error_option_without_message() {
    let err = parse("{n, plural, one a}").unwrap_err();
    assert_eq!(err.to_string(), "Expected '{', found 'a'.");
    assert_eq!(err.offset(), 16);
}

#[test]
fn error_lexing_surfaces_through_parse() {
    let err = parse("'{oops").unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.offset(), 0);
}

#[test]
fn recursion_limit() {
    let source = "{a, select, other {{b}}}";
    assert!(parse_with_recursion_limit(source, 2).is_ok());

    let err = parse_with_recursion_limit(source, 1).unwrap_err();
    assert_eq!(err.to_string(), "Message nesting exceeds the limit of 1.");
    assert_eq!(err.offset(), 19);
}

#[test]
fn parser_with_default_limit_accepts_deep_nesting() {
    let mut source = String::new();
    for _ in 0..100 {
        source.push_str("{a, select, other {");
    }
    for _ in 0..100 {
        source.push_str("}}");
    }
    let stream = tokenize(&source).unwrap();
    assert!(Parser::new(&source, stream).parse().is_ok());
}
