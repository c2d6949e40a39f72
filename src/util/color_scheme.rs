//! System color-scheme preference via `matchMedia`.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use crate::state::theme::SystemScheme;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Reads `(prefers-color-scheme: dark)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryScheme;

#[cfg(feature = "csr")]
fn dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

impl SystemScheme for MediaQueryScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            dark_query().map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

/// Call `on_change` with the new preference whenever the system flips.
///
/// The listener lives for the rest of the page session.
pub fn watch(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(list) = dark_query() else {
            return;
        };
        let query = list.clone();
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            on_change(query.matches());
        }) as Box<dyn FnMut(web_sys::Event)>);
        if list
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
