//! Property tests for the parsing pipeline.

use bucketquery_foundation::Connective;
use bucketquery_parser::{CollectingNotifier, parse, parse_terms, sanitize_term};
use proptest::prelude::*;

/// Terms with no markers, underscores, or escapable characters.
fn plain_term() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}"
}

proptest! {
    #[test]
    fn or_input_splits_into_trimmed_pieces(terms in prop::collection::vec(plain_term(), 2..6)) {
        let raw = terms.join("||");
        let agg = parse_terms(&raw).unwrap();

        let expected: Vec<String> = terms
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        prop_assert_eq!(agg.connective(), Connective::Or);
        prop_assert_eq!(agg.terms(), expected.as_slice());
    }

    #[test]
    fn and_input_splits_into_trimmed_pieces(terms in prop::collection::vec(plain_term(), 2..6)) {
        let raw = terms.join(" && ");
        let agg = parse_terms(&raw).unwrap();

        let expected: Vec<String> = terms
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        prop_assert_eq!(agg.connective(), Connective::And);
        prop_assert_eq!(agg.terms(), expected.as_slice());
    }

    #[test]
    fn marker_free_input_is_single_sanitized_term(raw in "[a-zA-Z0-9_ '\"/\\\\.-]{0,24}") {
        let agg = parse_terms(&raw).unwrap();

        prop_assert_eq!(agg.connective(), Connective::And);
        let expected = [sanitize_term(raw.trim())];
        prop_assert_eq!(agg.terms(), expected.as_slice());
    }

    #[test]
    fn mixed_markers_notify_exactly_once(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        let raw = format!("{a}||{b}&&{c}");
        let mut sink = CollectingNotifier::new();
        let agg = parse(&raw, &mut sink);

        prop_assert!(agg.is_sentinel());
        prop_assert_eq!(sink.messages().len(), 1);
        prop_assert!(sink.messages()[0].contains(&raw));
    }

    #[test]
    fn sanitize_is_idempotent_on_plain_text(x in "[a-zA-Z0-9 .,:;!?()-]{0,32}") {
        let once = sanitize_term(&x);
        prop_assert_eq!(sanitize_term(&once), once);
    }

    #[test]
    fn parse_never_panics(raw in any::<String>()) {
        let mut sink = CollectingNotifier::new();
        let _ = parse(&raw, &mut sink);
    }

    #[test]
    fn sanitized_terms_are_printable_ascii(raw in any::<String>()) {
        let sanitized = sanitize_term(&raw);
        let printable = ' '..='\u{7f}';
        prop_assert!(sanitized.chars().all(|c| printable.contains(&c)));
    }
}
