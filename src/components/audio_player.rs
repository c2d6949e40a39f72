//! Single-track audio player: play/pause, seek bar, time label, mute.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `<audio>` element is registered with the page-wide player registry
//! once it mounts; every control then goes through the registry so that
//! starting this player stops any other.

use leptos::prelude::*;

use crate::app::{PagePlayers, PlayersSignal};
use crate::state::player::{PlayerDisplay, PlayerId};

/// Run `f` against this widget's player, if it has registered.
fn update_player(
    players: PlayersSignal,
    player_id: RwSignal<Option<PlayerId>>,
    f: impl FnOnce(&mut PagePlayers, PlayerId),
) {
    if let Some(id) = player_id.get_untracked() {
        players.update(|registry| f(registry, id));
    }
}

/// Audio player widget bound to one track.
#[component]
pub fn AudioPlayer(#[prop(into)] src: String, #[prop(into)] title: String) -> impl IntoView {
    let players = expect_context::<PlayersSignal>();
    let audio_ref = NodeRef::<leptos::html::Audio>::new();
    let bar_ref = NodeRef::<leptos::html::Div>::new();
    let player_id = RwSignal::new(None::<PlayerId>);

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            if player_id.get_untracked().is_some() {
                return;
            }
            let Some(element) = audio_ref.get() else {
                return;
            };
            let mut registered = None;
            players.update(|registry| {
                registered = Some(registry.register(crate::util::media::MediaElement::new(element)));
            });
            player_id.set(registered);
        });
    }

    let display = Memo::new(move |_| {
        player_id
            .get()
            .and_then(|id| players.with(|registry| registry.display(id).cloned()))
            .unwrap_or_else(PlayerDisplay::default)
    });

    let on_seek_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(bar) = bar_ref.get() else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            let ratio = crate::state::player::click_ratio(f64::from(ev.client_x()), rect.left(), rect.width());
            update_player(players, player_id, |registry, id| registry.seek_to_ratio(id, ratio));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_seek_key = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        let mut consumed = false;
        update_player(players, player_id, |registry, id| {
            consumed = registry.seek_by_key(id, &key);
        });
        if consumed {
            ev.prevent_default();
        }
    };

    let seek_label = format!("Seek {title}");

    view! {
        <div class="player" class:playing=move || display.get().play_button.pressed()>
            <audio
                node_ref=audio_ref
                src=src
                preload="metadata"
                on:loadedmetadata=move |_| update_player(players, player_id, PagePlayers::on_metadata_loaded)
                on:timeupdate=move |_| update_player(players, player_id, PagePlayers::on_position_update)
                on:play=move |_| update_player(players, player_id, PagePlayers::on_playback_state_change)
                on:pause=move |_| update_player(players, player_id, PagePlayers::on_playback_state_change)
                on:ended=move |_| update_player(players, player_id, PagePlayers::on_ended)
            ></audio>

            <button
                class="player__play"
                type="button"
                aria-label=move || display.get().play_button.label()
                aria-pressed=move || display.get().play_button.pressed().to_string()
                on:click=move |_| update_player(players, player_id, PagePlayers::toggle_play_pause)
            >
                {move || display.get().play_button.icon()}
            </button>

            <div class="player__body">
                <span class="player__title">{title}</span>
                <div
                    class="player__seek"
                    node_ref=bar_ref
                    role="slider"
                    tabindex="0"
                    aria-label=seek_label
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || display.get().value_now.to_string()
                    aria-valuetext=move || display.get().value_text
                    on:click=on_seek_click
                    on:keydown=on_seek_key
                >
                    <div class="player__progress" style=move || display.get().progress_style()></div>
                </div>
                <span class="player__time">{move || display.get().time_label}</span>
            </div>

            <button
                class="player__volume"
                type="button"
                aria-label=move || display.get().volume_button.label()
                on:click=move |_| update_player(players, player_id, PagePlayers::toggle_mute)
            >
                {move || display.get().volume_button.icon()}
            </button>
        </div>
    }
}
