//! Root application component and the shared page contexts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::player::PlayerRegistry;
use crate::state::theme::{ThemeContext, ThemeController};
use crate::util::color_scheme::MediaQueryScheme;
use crate::util::media::MediaElement;
use crate::util::storage::BrowserStorage;
use crate::util::surface::DocumentSurface;

/// Player registry backed by `<audio>` elements.
pub type PagePlayers = PlayerRegistry<MediaElement>;

/// Theme controller backed by localStorage and the live document.
pub type PageTheme = ThemeController<BrowserStorage, MediaQueryScheme, DocumentSurface>;

/// Page-wide registry context. Thread-local: media elements are not `Send`.
pub type PlayersSignal = RwSignal<PagePlayers, LocalStorage>;

/// Page-wide theme controller context.
pub type ThemeHandle = StoredValue<PageTheme, LocalStorage>;

/// Reactive mirror of the applied theme, for rendering.
#[derive(Clone, Copy, Debug)]
pub struct DarkMode(pub RwSignal<bool>);

/// Root application component.
///
/// Provides the shared contexts and starts the theme controller once the
/// page has mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();

    let players: PlayersSignal = RwSignal::new_local(PlayerRegistry::new(&config.player));
    let theme: ThemeHandle = StoredValue::new_local(ThemeController::new(
        ThemeContext {
            store: BrowserStorage,
            system: MediaQueryScheme,
            surface: DocumentSurface,
        },
        &config.theme,
    ));
    let dark = DarkMode(RwSignal::new(false));

    provide_context(players);
    provide_context(theme);
    provide_context(dark);
    provide_context(config.clone());

    #[cfg(feature = "csr")]
    {
        let delay_ms = config.theme.transition_delay_ms;
        Effect::new(move || start_theme(theme, dark, delay_ms));
    }

    view! {
        <Title text=config.title />
        <HomePage />
    }
}

/// Bind the controller to the rendered toggle and wire the page signals.
#[cfg(feature = "csr")]
fn start_theme(theme: ThemeHandle, dark: DarkMode, delay_ms: u32) {
    use crate::state::theme::ToggleControl;
    use crate::util::{color_scheme, events, toggle::CheckboxToggle};

    let mut control = CheckboxToggle::find();
    let mut started = None;
    theme.update_value(|controller| {
        controller.subscribe(move |changed| dark.0.set(changed.theme.is_dark()));
        controller.subscribe(events::dispatch_theme_changed);
        started = Some(controller.start(control.as_mut().map(|c| c as &mut dyn ToggleControl)));
    });
    if !matches!(started, Some(Ok(_))) {
        return;
    }

    events::after_delay(delay_ms, move || {
        theme.update_value(PageTheme::enable_transitions);
    });
    color_scheme::watch(move |is_dark| {
        theme.update_value(|controller| controller.handle_system_signal_change(is_dark));
    });
    events::on_visibility_restore(move || {
        theme.update_value(PageTheme::handle_visibility_restore);
    });
}
