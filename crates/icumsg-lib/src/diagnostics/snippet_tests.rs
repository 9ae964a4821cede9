use super::render_snippet;

#[test]
fn caret_under_offset() {
    insta::assert_snapshot!(render_snippet("Hello {name", 11), @r"
    Hello {name
               ^
    ");
}

#[test]
fn selects_line_containing_offset() {
    let source = "first line\nsecond {line\nthird";
    insta::assert_snapshot!(render_snippet(source, 18), @r"
    second {line
           ^
    ");
}

#[test]
fn columns_count_characters() {
    insta::assert_snapshot!(render_snippet("héllo {x", 7), @r"
    héllo {x
          ^
    ");
}

#[test]
fn offset_past_end_is_clamped() {
    insta::assert_snapshot!(render_snippet("abc", 10), @r"
    abc
       ^
    ");
}

#[test]
fn long_line_is_windowed() {
    let source = format!("{}X{}", "a".repeat(100), "b".repeat(100));
    let snippet = render_snippet(&source, 100);
    let (line, caret) = snippet.split_once('\n').unwrap();

    assert!(line.starts_with("..."));
    assert!(line.ends_with("..."));
    assert_eq!(line.chars().count(), super::MAX_COLUMNS);
    assert_eq!(line.chars().nth(caret.len() - 1), Some('X'));
}

#[test]
fn long_line_near_start_keeps_head() {
    let source = format!("X{}", "a".repeat(200));
    let snippet = render_snippet(&source, 0);
    let (line, caret) = snippet.split_once('\n').unwrap();

    assert!(line.starts_with('X'));
    assert!(line.ends_with("..."));
    assert_eq!(caret, "^");
}

#[test]
fn wide_characters_take_two_columns() {
    insta::assert_snapshot!(render_snippet("字字 {x", 7), @r"
    字字 {x
         ^
    ");
}

#[test]
fn long_wide_line_fits_terminal() {
    use unicode_width::UnicodeWidthStr;

    let source = format!("{}{{n, plural, one {{x}}}}", "字".repeat(70));
    let snippet = render_snippet(&source, 210);
    let (line, caret) = snippet.split_once('\n').unwrap();

    assert!(line.width() <= super::MAX_COLUMNS);
    assert!(line.starts_with("..."));
    assert!(line.ends_with("{n, plural, one {x}}"));
    assert_eq!(caret.len() - 1, 57);
}
