//! Window/document event glue: the `themeChanged` broadcast, visibility
//! restore, and the one-shot transition delay.
//!
//! TRADE-OFFS
//! ==========
//! Listeners registered here are leaked on purpose; they live for the page
//! session and there is nothing to tear down. Non-browser builds no-op.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::state::theme::ThemeChanged;

#[cfg(feature = "csr")]
use crate::state::theme::THEME_CHANGED_EVENT;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Re-emit a theme change as a `themeChanged` `CustomEvent` on `window`,
/// with the JSON payload as `detail`, for scripts outside this crate.
pub fn dispatch_theme_changed(event: &ThemeChanged) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(event) else {
            return;
        };
        let Ok(detail) = js_sys::JSON::parse(&raw) else {
            return;
        };
        let init = web_sys::CustomEventInit::new();
        init.set_detail(&detail);
        match web_sys::CustomEvent::new_with_event_init_dict(THEME_CHANGED_EVENT, &init) {
            Ok(custom) => {
                let _ = window.dispatch_event(&custom);
            }
            Err(e) => log::debug!("themeChanged event not created: {e:?}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = event;
    }
}

/// Call `on_visible` each time the page becomes visible again.
pub fn on_visibility_restore(on_visible: impl Fn() + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let doc = document.clone();
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            if !doc.hidden() {
                on_visible();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        if document
            .add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_visible;
    }
}

/// Run `f` once after `delay_ms`.
pub fn after_delay(delay_ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay_ms, f);
    }
}
