//! Dialect rendering tests.

use bucketquery_foundation::{AggregateTerms, Connective, Dialect, ErrorKind};
use bucketquery_render::{DialectTemplates, Renderer, render, render_all};

fn terms(connective: Connective, items: &[&str]) -> AggregateTerms {
    AggregateTerms::new(connective, items.iter().map(ToString::to_string).collect())
}

// =============================================================================
// Single term
// =============================================================================

#[test]
fn category_single() {
    let agg = AggregateTerms::single("foo bar");
    assert_eq!(render(&agg, Dialect::Category).unwrap(), "'Category:foo bar'");
}

#[test]
fn monster_single() {
    let agg = AggregateTerms::single("Zulrah");
    assert_eq!(
        render(&agg, Dialect::Monster).unwrap(),
        "{'dropsline.page_name','Zulrah'}"
    );
}

#[test]
fn single_or_has_no_wrapper() {
    let agg = terms(Connective::Or, &["lonely"]);
    let out = render(&agg, Dialect::Category).unwrap();
    assert!(!out.starts_with("bucket."));
}

// =============================================================================
// Multiple terms
// =============================================================================

#[test]
fn category_or() {
    let agg = terms(Connective::Or, &["a", "b"]);
    assert_eq!(
        render(&agg, Dialect::Category).unwrap(),
        "bucket.Or({'Category:a'}, {'Category:b'})"
    );
}

#[test]
fn category_and() {
    let agg = terms(Connective::And, &["a", "b"]);
    assert_eq!(
        render(&agg, Dialect::Category).unwrap(),
        "bucket.And({'Category:a'}, {'Category:b'})"
    );
}

#[test]
fn monster_and() {
    let agg = terms(Connective::And, &["a", "b"]);
    assert_eq!(
        render(&agg, Dialect::Monster).unwrap(),
        "bucket.And({'dropsline.page_name','a'}, {'dropsline.page_name','b'})"
    );
}

#[test]
fn monster_or() {
    let agg = terms(Connective::Or, &["a", "b", "c"]);
    assert_eq!(
        render(&agg, Dialect::Monster).unwrap(),
        "bucket.Or({'dropsline.page_name','a'}, {'dropsline.page_name','b'}, {'dropsline.page_name','c'})"
    );
}

#[test]
fn terms_are_embedded_verbatim() {
    let agg = terms(Connective::Or, &["Kree\\'arra", ""]);
    assert_eq!(
        render(&agg, Dialect::Category).unwrap(),
        "bucket.Or({'Category:Kree\\'arra'}, {'Category:'})"
    );
}

// =============================================================================
// Failures and helpers
// =============================================================================

#[test]
fn empty_fails_for_each_dialect() {
    for connective in [Connective::Or, Connective::And] {
        let agg = terms(connective, &[]);
        for dialect in Dialect::ALL {
            let err = render(&agg, dialect).unwrap_err();
            assert!(matches!(err.kind, ErrorKind::EmptyTermSet { .. }));
        }
    }
}

#[test]
fn render_all_fails_on_empty() {
    assert!(render_all(&terms(Connective::And, &[])).is_err());
}

#[test]
fn renderer_can_be_reused() {
    let renderer = Renderer::new(Dialect::Monster);
    let first = renderer.render(&AggregateTerms::single("a")).unwrap();
    let second = renderer.render(&AggregateTerms::single("a")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn same_aggregate_under_two_dialects() {
    let agg = terms(Connective::Or, &["x", "y"]);
    let category = render(&agg, Dialect::Category).unwrap();
    let monster = render(&agg, Dialect::Monster).unwrap();
    assert_ne!(category, monster);
    assert!(category.starts_with("bucket.Or("));
    assert!(monster.starts_with("bucket.Or("));
}

#[test]
fn templates_expose_prefix_and_suffix() {
    let t = DialectTemplates::for_dialect(Dialect::Category);
    assert_eq!(t.single.prefix, "'Category:");
    assert_eq!(t.multi.suffix, "'}");
}
