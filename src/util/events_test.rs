#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::theme::Theme;

#[test]
fn dispatch_is_noop_but_callable() {
    dispatch_theme_changed(&ThemeChanged { theme: Theme::Dark });
}

#[test]
fn visibility_and_delay_never_fire_outside_browser() {
    let fired = std::rc::Rc::new(std::cell::Cell::new(false));
    let a = std::rc::Rc::clone(&fired);
    let b = std::rc::Rc::clone(&fired);
    on_visibility_restore(move || a.set(true));
    after_delay(0, move || b.set(true));
    assert!(!fired.get());
}
