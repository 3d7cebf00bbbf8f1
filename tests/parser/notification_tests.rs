//! Notification tests.
//!
//! Tests for the reporting side of `parse`.

use bucketquery_foundation::Connective;
use bucketquery_parser::{CollectingNotifier, Notifier, ParseError, parse, parse_terms};

#[test]
fn ambiguous_returns_sentinel_and_one_message() {
    let mut sink = CollectingNotifier::new();
    let agg = parse("rune||dragon&&adamant", &mut sink);

    assert_eq!(agg.connective(), Connective::And);
    assert_eq!(agg.terms(), [""]);
    assert_eq!(sink.messages().len(), 1);
    assert_eq!(
        sink.messages()[0],
        "Input 'rune||dragon&&adamant' cannot contain both '||' and '&&'."
    );
}

#[test]
fn closure_notifier() {
    let mut count = 0;
    let mut sink = |_: &str| count += 1;
    parse("a&&b||c", &mut sink);
    parse("a&&b", &mut sink);
    assert_eq!(count, 1);
}

#[test]
fn dyn_notifier() {
    let mut sink = CollectingNotifier::new();
    let notifier: &mut dyn Notifier = &mut sink;
    parse("x||y&&z", notifier);
    assert_eq!(sink.messages().len(), 1);
}

#[test]
fn pure_parse_returns_error_payload() {
    let err = parse_terms("x||y&&z").unwrap_err();
    assert_eq!(
        err,
        ParseError::AmbiguousConnective {
            input: "x||y&&z".to_string()
        }
    );
    assert!(err.fallback().is_sentinel());
}

#[test]
fn sentinel_is_not_sanitized_input() {
    let mut sink = CollectingNotifier::new();
    let agg = parse("a_b||c_d&&e", &mut sink);
    assert_eq!(agg.terms(), [""]);
}
