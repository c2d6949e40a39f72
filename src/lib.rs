//! # site-client
//!
//! Leptos + WASM interactivity for a single content page: a tab strip, a
//! set of audio players of which at most one plays at a time, and a
//! light/dark theme controller with persistence and system-preference
//! tracking.
//!
//! | Module       | Role                                                    |
//! |--------------|---------------------------------------------------------|
//! | `state`      | DOM-free models: tab group, player registry, theme      |
//! | `util`       | `web-sys` adapters implementing the `state` traits      |
//! | `components` | Leptos widgets over the models                          |
//! | `pages`      | Page layout                                             |
//! | `config`     | Embedded JSON configuration with defaults               |
//! | `error`      | Error types                                             |
//!
//! Browser bindings are compiled only with the `csr` feature; without it the
//! adapters are inert and the models are tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
