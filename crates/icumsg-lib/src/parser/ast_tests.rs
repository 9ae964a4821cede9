use crate::parse;
use crate::parser::ast::{FormatterKind, Node, Number};

#[test]
fn number_parse_and_display() {
    assert_eq!(Number::parse("42"), Some(Number::Int(42)));
    assert_eq!(Number::parse("-3"), Some(Number::Int(-3)));
    assert_eq!(Number::parse("2.5"), Some(Number::Float(2.5)));
    assert_eq!(Number::parse("99999999999999999999"), Some(Number::Float(1e20)));
    assert_eq!(Number::parse("-99999999999999999999"), Some(Number::Float(-1e20)));

    assert_eq!(Number::Int(7).to_string(), "7");
    assert_eq!(Number::Float(1.0).to_string(), "1.0");
    assert_eq!(Number::Float(0.25).to_string(), "0.25");
    assert_eq!(Number::Float(2.0).as_f64(), 2.0);
}

#[test]
fn formatter_kinds() {
    let message = parse("{a, number} {b, date} {c, spellout} {d, duration} {e, list}").unwrap();
    let kinds: Vec<_> = message
        .parts
        .iter()
        .filter_map(|part| match part {
            Node::FormattedArgument(arg) => Some(arg.formatter()),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        [
            FormatterKind::Number,
            FormatterKind::Date,
            FormatterKind::Spellout,
            FormatterKind::Duration,
            FormatterKind::Other,
        ]
    );
    assert!(FormatterKind::Ordinal.is_numeric());
    assert!(FormatterKind::Time.is_temporal());
    assert!(!FormatterKind::Other.is_numeric());
}

#[test]
fn arguments_in_order_of_appearance() {
    let message = parse(
        "{who} sent {n, plural, one {a {kind}} other {{n} {kind}s}} to {whom, select, other {{who}}}",
    )
    .unwrap();
    assert_eq!(message.arguments(), ["who", "n", "kind", "whom"]);
}

#[test]
fn node_names_and_classification() {
    let message = parse("x{a}{b, select, other {y}}#").unwrap();
    let names: Vec<_> = message.parts.iter().map(Node::name).collect();
    assert_eq!(names, [None, Some("a"), Some("b"), None]);
    assert!(message.parts[2].is_complex());
    assert!(!message.parts[1].is_complex());
    assert!(message.has_complex());
}

#[test]
fn serializes_tagged_by_node_type() {
    let message = parse("Hi {n, plural, offset:1 =0 {#}}").unwrap();
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "parts": [
                { "type": "text", "value": "Hi ", "span": { "start": 0, "end": 3 } },
                {
                    "type": "plural",
                    "name": "n",
                    "offset": 1,
                    "options": [{
                        "selector": "=0",
                        "explicit": true,
                        "explicit_value": 0,
                        "message": {
                            "parts": [{ "type": "pound", "span": { "start": 28, "end": 29 } }],
                            "span": { "start": 28, "end": 29 }
                        },
                        "span": { "start": 24, "end": 30 }
                    }],
                    "span": { "start": 3, "end": 31 }
                }
            ],
            "span": { "start": 0, "end": 31 }
        })
    );
}
