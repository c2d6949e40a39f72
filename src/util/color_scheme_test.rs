#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn prefers_light_outside_browser() {
    assert!(!MediaQueryScheme.prefers_dark());
}

#[test]
fn watch_is_noop_but_callable() {
    watch(|_| {});
}
