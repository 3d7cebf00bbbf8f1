//! Splitter tests.
//!
//! Tests for connective detection and raw term splitting.

use bucketquery_foundation::Connective;
use bucketquery_parser::splitter::{split_terms, trim};

#[test]
fn split_or_keeps_order() {
    let split = split_terms("dragon bones || big bones || bones").unwrap();

    assert_eq!(split.connective, Connective::Or);
    assert_eq!(split.pieces, vec!["dragon bones", "big bones", "bones"]);
}

#[test]
fn split_and_keeps_order() {
    let split = split_terms("slayer&&dragon").unwrap();

    assert_eq!(split.connective, Connective::And);
    assert_eq!(split.pieces, vec!["slayer", "dragon"]);
}

#[test]
fn split_does_not_sanitize() {
    let split = split_terms("a_b || c'd").unwrap();

    assert_eq!(split.pieces, vec!["a_b", "c'd"]);
}

#[test]
fn leading_and_trailing_separators() {
    let split = split_terms("&& a && b &&").unwrap();

    assert_eq!(split.pieces, vec!["a", "b"]);
}

#[test]
fn whitespace_between_separators_is_dropped() {
    let split = split_terms("a ||   || b").unwrap();

    assert_eq!(split.pieces, vec!["a", "b"]);
}

#[test]
fn only_separators_is_empty_not_error() {
    let split = split_terms("|| || ||").unwrap();

    assert_eq!(split.connective, Connective::Or);
    assert!(split.pieces.is_empty());
}

#[test]
fn single_ampersand_is_literal() {
    let split = split_terms("salt & pepper").unwrap();

    assert_eq!(split.connective, Connective::And);
    assert_eq!(split.pieces, vec!["salt & pepper"]);
}

#[test]
fn ambiguous_reports_raw_input() {
    let err = split_terms(" a||b && c ").unwrap_err();

    assert_eq!(err.input(), " a||b && c ");
}

#[test]
fn trim_matches_host_rules() {
    assert_eq!(trim("  x  "), "x");
    assert_eq!(trim("\u{0}\u{1f}x\u{20}"), "x");
    assert_eq!(trim("\u{2003}x"), "\u{2003}x");
}
