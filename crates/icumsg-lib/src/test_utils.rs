//! Helpers shared by the unit tests.

use std::fmt::Write;

use crate::FormatOptions;

/// Offset-free tree dump of a message that must parse.
pub fn dump(source: &str) -> String {
    match crate::parse(source) {
        Ok(message) => message.dump(),
        Err(err) => panic!("failed to parse {source:?}: {err}\n{}", err.snippet()),
    }
}

/// `message @ offset`, then the snippet, for a message that must not parse.
pub fn parse_error(source: &str) -> String {
    match crate::parse(source) {
        Ok(message) => panic!("expected an error for {source:?}, got:\n{}", message.dump()),
        Err(err) => format!("{err} @ {}\n{}", err.offset(), err.snippet()),
    }
}

/// One line per token: kind, text, and byte range.
pub fn tokens(source: &str) -> String {
    let stream = match crate::tokenize(source) {
        Ok(stream) => stream,
        Err(err) => panic!("failed to tokenize {source:?}: {err}"),
    };
    let mut out = String::new();
    for token in &stream {
        let _ = writeln!(
            out,
            "{:?} {:?} {}..{}",
            token.kind,
            token.text,
            token.start,
            token.end()
        );
    }
    out
}

/// Canonical layout with default options.
pub fn pretty(source: &str) -> String {
    let message = crate::parse(source).unwrap_or_else(|err| panic!("{source:?}: {err}"));
    crate::format(&message, &FormatOptions::default())
}

/// Printing preserves structure and is idempotent.
pub fn assert_round_trip(source: &str) {
    let options = FormatOptions::default();
    let first = crate::parse(source).unwrap_or_else(|err| panic!("{source:?}: {err}"));
    let printed = crate::format(&first, &options);
    let second = crate::parse(&printed)
        .unwrap_or_else(|err| panic!("reparse of {printed:?} failed: {err}\n{}", err.snippet()));
    assert_eq!(
        first.dump(),
        second.dump(),
        "structure changed for {source:?}, printed as:\n{printed}"
    );
    assert_eq!(
        crate::format(&second, &options),
        printed,
        "printing is not idempotent for {source:?}"
    );
}
