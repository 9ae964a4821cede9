use super::infer::{ArgType, TypeMap};
use crate::infer;
use crate::parse;

fn infer_str(source: &str) -> TypeMap {
    infer(&parse(source).unwrap())
}

fn types(source: &str) -> Vec<(String, ArgType)> {
    infer_str(source)
        .iter()
        .map(|(name, ty)| (name.to_string(), ty))
        .collect()
}

#[test]
fn simple_argument_is_string() {
    assert_eq!(types("Hello {name}"), [("name".to_string(), ArgType::String)]);
}

#[test]
fn plural_is_number() {
    assert_eq!(
        types("{count, plural, one {# item} other {# items}}"),
        [("count".to_string(), ArgType::Number)]
    );
}

#[test]
fn formatter_families() {
    let map = infer_str(
        "{a, number} {b, spellout} {c, ordinal} {d, duration} {e, date} {f, time, short} {g, list}",
    );
    assert_eq!(map.get("a"), Some(ArgType::Number));
    assert_eq!(map.get("b"), Some(ArgType::Number));
    assert_eq!(map.get("c"), Some(ArgType::Number));
    assert_eq!(map.get("d"), Some(ArgType::Number));
    assert_eq!(map.get("e"), Some(ArgType::DateTime));
    assert_eq!(map.get("f"), Some(ArgType::DateTime));
    assert_eq!(map.get("g"), Some(ArgType::String));
    assert_eq!(map.get("missing"), None);
}

#[test]
fn nested_arguments_are_collected() {
    let map = infer_str(
        "{g, select, male {{n, selectordinal, one {#st} other {#th}} by {who}} other {{when, date}}}",
    );
    assert_eq!(map.get("g"), Some(ArgType::String));
    assert_eq!(map.get("n"), Some(ArgType::Number));
    assert_eq!(map.get("who"), Some(ArgType::String));
    assert_eq!(map.get("when"), Some(ArgType::DateTime));
}

#[test]
fn choice_is_number() {
    let map = infer_str("{n, choice, 0#none|1#{who}}");
    assert_eq!(map.get("n"), Some(ArgType::Number));
    assert_eq!(map.get("who"), Some(ArgType::String));
}

#[test]
fn conflicting_uses_collapse_to_mixed() {
    let map = infer_str("{n} {n, number} {n, date}");
    assert_eq!(map.get("n"), Some(ArgType::Mixed));
    assert_eq!(ArgType::Mixed.merge(ArgType::Number), ArgType::Mixed);
    assert_eq!(ArgType::Number.merge(ArgType::Number), ArgType::Number);
}

#[test]
fn repeated_same_type_stays() {
    let map = infer_str("{n, plural, other {{n, number}}}");
    assert_eq!(map.get("n"), Some(ArgType::Number));
    assert_eq!(map.len(), 1);
}

#[test]
fn order_independent() {
    assert_eq!(
        infer_str("{a} {b, number} {c, date}"),
        infer_str("{c, date} {b, number} {a}")
    );
    assert_eq!(infer_str("{n} {n, number}"), infer_str("{n, number} {n}"));
}

#[test]
fn empty_message_has_no_types() {
    assert!(infer_str("").is_empty());
    assert!(infer_str("just text").is_empty());
}

#[test]
fn serializes_as_object() {
    let json = serde_json::to_string(&infer_str("{who} has {n, number} at {t, time}")).unwrap();
    assert_eq!(json, r#"{"who":"string","n":"number","t":"datetime"}"#);
}
