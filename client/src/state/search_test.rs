use super::*;
use crate::net::types::StoreFilters;

fn filters(name: &str, address: &str) -> StoreFilters {
    StoreFilters { name: name.to_owned(), address: address.to_owned() }
}

#[test]
fn starts_with_no_filters() {
    let applied = AppliedFilters::<StoreFilters>::default();
    assert!(applied.current().query_params().is_empty());
}

#[test]
fn submit_returns_and_keeps_filters() {
    let mut applied = AppliedFilters::default();
    assert_eq!(applied.submit(filters("Cafe", "")), filters("Cafe", ""));
    assert_eq!(applied.current(), filters("Cafe", ""));
}

#[test]
fn refetch_uses_last_submitted_search_not_pending_input() {
    let mut applied = AppliedFilters::default();
    applied.submit(filters("Cafe", "Main"));

    // Typing without submitting never reaches the applied filters.
    let _pending_input = filters("Bakery", "");

    assert_eq!(applied.current().query_params(), vec![("name", "Cafe".to_owned()), ("address", "Main".to_owned())]);
}

#[test]
fn later_submit_replaces_earlier() {
    let mut applied = AppliedFilters::default();
    applied.submit(filters("Cafe", ""));
    applied.submit(filters("", "Elm"));
    assert_eq!(applied.current(), filters("", "Elm"));
}
