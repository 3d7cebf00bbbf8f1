//! Integration tests for AggregateTerms.

use bucketquery_foundation::{AggregateTerms, Connective};

#[test]
fn single_is_and() {
    let agg = AggregateTerms::single("bones");
    assert_eq!(agg.connective(), Connective::And);
    assert_eq!(agg.terms(), ["bones"]);
}

#[test]
fn equality_is_structural() {
    let a = AggregateTerms::new(Connective::Or, vec!["x".into(), "y".into()]);
    let b = AggregateTerms::new(Connective::Or, vec!["x".into(), "y".into()]);
    let c = AggregateTerms::new(Connective::And, vec!["x".into(), "y".into()]);
    let d = AggregateTerms::new(Connective::Or, vec!["y".into(), "x".into()]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn sentinel_is_recognised() {
    assert!(AggregateTerms::ambiguous_sentinel().is_sentinel());
    assert!(!AggregateTerms::new(Connective::Or, vec![String::new()]).is_sentinel());
    assert!(!AggregateTerms::new(Connective::And, vec![String::new(), String::new()]).is_sentinel());
}

#[test]
fn aggregate_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AggregateTerms>();
}
