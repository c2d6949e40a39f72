//! Tab strip plus panes, with roving tabindex and arrow-key navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panes stay mounted while hidden so every audio player in every pane
//! remains registered; switching tabs silences the whole registry.

use leptos::prelude::*;

use crate::app::PlayersSignal;
use crate::components::audio_player::AudioPlayer;
use crate::config::TabConfig;
use crate::state::tabs::{Tab, TabGroup};

/// Move keyboard focus to the button with DOM id `button_id`.
fn focus_button(button_id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(button_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let _ = el.focus();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = button_id;
    }
}

/// Tabbed content area built from configured tabs.
#[component]
pub fn Tabs(tabs: Vec<TabConfig>) -> impl IntoView {
    let players = expect_context::<PlayersSignal>();

    let initial = tabs.iter().find(|t| t.active).map(|t| t.id.clone());
    let group = RwSignal::new(TabGroup::new(
        tabs.iter().map(|t| Tab::new(t.id.clone(), t.label.clone())).collect(),
        initial.as_deref(),
    ));

    let select = move |id: &str| {
        group.update(|g| {
            players.update(|registry| {
                let _ = g.select(id, registry);
            });
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        let mut moved = None;
        group.update(|g| players.update(|registry| moved = g.select_by_key(&key, registry)));
        if moved.is_some() {
            ev.prevent_default();
            if let Some(button_id) = group.with_untracked(|g| g.active().map(Tab::button_dom_id)) {
                focus_button(&button_id);
            }
        }
    };

    let buttons = tabs
        .iter()
        .map(|config| {
            let tab = Tab::new(config.id.clone(), config.label.clone());
            let id = config.id.clone();
            let click_id = config.id.clone();
            let state = Signal::derive(move || group.with(|g| g.button_state(&id)));

            view! {
                <button
                    type="button"
                    role="tab"
                    class="tab-button"
                    class:active=move || state.get().active
                    id=tab.button_dom_id()
                    aria-controls=tab.pane_dom_id()
                    aria-selected=move || state.get().selected.to_string()
                    tabindex=move || state.get().tab_index.to_string()
                    on:click=move |_| select(&click_id)
                >
                    {tab.label.clone()}
                </button>
            }
        })
        .collect_view();

    let panes = tabs
        .into_iter()
        .map(|config| {
            let tab = Tab::new(config.id.clone(), config.label.clone());
            let id = config.id;
            let state = Signal::derive(move || group.with(|g| g.pane_state(&id)));
            let tracks = config
                .tracks
                .into_iter()
                .map(|track| view! { <AudioPlayer src=track.src title=track.title /> })
                .collect_view();

            view! {
                <section
                    role="tabpanel"
                    class="tab-pane"
                    class:active=move || state.get().visible
                    id=tab.pane_dom_id()
                    aria-labelledby=tab.button_dom_id()
                    hidden=move || !state.get().visible
                    tabindex=move || state.get().tab_index.to_string()
                >
                    <p class="tab-pane__body">{config.body}</p>
                    {tracks}
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="tabs">
            <div class="tabs__list" role="tablist" on:keydown=on_keydown>
                {buttons}
            </div>
            {panes}
        </div>
    }
}
