//! Light/dark switch in the page header.

use leptos::prelude::*;

use crate::app::{DarkMode, ThemeHandle};
use crate::state::theme::TOGGLE_CONTROL_ID;

/// Checkbox bound to the theme controller. Checked means dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();
    let dark = expect_context::<DarkMode>();

    let on_change = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        theme.update_value(|controller| controller.handle_user_toggle(checked));
    };

    view! {
        <label class="theme-toggle" title="Toggle dark mode">
            <input
                type="checkbox"
                id=TOGGLE_CONTROL_ID
                role="switch"
                aria-label="Dark mode"
                prop:checked=move || dark.0.get()
                on:change=on_change
            />
            <span class="theme-toggle__icon" aria-hidden="true">
                {move || if dark.0.get() { "☾" } else { "☀" }}
            </span>
        </label>
    }
}
