//! Light/dark theme state and the controller that applies it.
//!
//! DESIGN
//! ======
//! The controller never touches the browser directly. It is built from a
//! [`ThemeContext`] holding the preference store, the system color-scheme
//! signal, and the surface the theme is painted on, so the same logic runs
//! against `localStorage`/`matchMedia`/`<html>` in the page and against
//! in-memory fakes in tests. Interested parties [`subscribe`] instead of
//! listening for a global event.
//!
//! TRADE-OFFS
//! ==========
//! A manual choice always wins over the system signal. Persistence is
//! best-effort: a failed write is logged and the in-memory theme stays
//! applied for the rest of the page session.
//!
//! [`subscribe`]: ThemeController::subscribe

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::Serialize;

use crate::config::ThemeConfig;
use crate::error::{StorageError, ThemeError};

/// Name of the window event mirrored from [`ThemeChanged`].
pub const THEME_CHANGED_EVENT: &str = "themeChanged";

/// DOM id of the toggle control the controller binds to.
pub const TOGGLE_CONTROL_ID: &str = "theme-toggle";

/// Page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Only the exact strings `light` and `dark`
    /// count; anything else means "no preference".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// CSS custom properties written onto the root scope.
    pub fn tokens(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Light => &LIGHT_TOKENS,
            Self::Dark => &DARK_TOKENS,
        }
    }

    /// Mobile browser chrome color (`<meta name="theme-color">`).
    pub fn chrome_color(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#12141a",
        }
    }
}

static LIGHT_TOKENS: [(&str, &str); 11] = [
    ("--color-bg", "#ffffff"),
    ("--color-bg-alt", "#f4f5f7"),
    ("--color-surface", "#ffffff"),
    ("--color-text", "#1d1f24"),
    ("--color-text-muted", "#5b6170"),
    ("--color-accent", "#3b5bdb"),
    ("--color-accent-strong", "#2f49b0"),
    ("--color-border", "#dde1e8"),
    ("--shadow-card", "0 1px 3px rgba(15, 20, 30, 0.12)"),
    ("--header-bg", "rgba(255, 255, 255, 0.92)"),
    ("--hero-gradient", "linear-gradient(135deg, #eef2ff 0%, #ffffff 100%)"),
];

static DARK_TOKENS: [(&str, &str); 11] = [
    ("--color-bg", "#12141a"),
    ("--color-bg-alt", "#181b22"),
    ("--color-surface", "#1c2029"),
    ("--color-text", "#e6e8ee"),
    ("--color-text-muted", "#9aa1b2"),
    ("--color-accent", "#7c94ff"),
    ("--color-accent-strong", "#a3b3ff"),
    ("--color-border", "#2c313d"),
    ("--shadow-card", "0 1px 3px rgba(0, 0, 0, 0.5)"),
    ("--header-bg", "rgba(18, 20, 26, 0.85)"),
    ("--hero-gradient", "linear-gradient(135deg, #1b2140 0%, #12141a 100%)"),
];

/// Groups of elements the dark fixups patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FixupTarget {
    FormControls,
    Cards,
    PageChrome,
}

impl FixupTarget {
    pub fn selector(self) -> &'static str {
        match self {
            Self::FormControls => "input, select, textarea",
            Self::Cards => ".player, .tabs",
            Self::PageChrome => "header, footer, nav",
        }
    }
}

/// One inline style override applied in dark mode and removed in light mode.
///
/// Elements already carrying an author-set inline value for `property` are
/// skipped, so the author's value survives both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixup {
    pub target: FixupTarget,
    pub property: &'static str,
    pub value: &'static str,
}

pub const DARK_FIXUPS: &[Fixup] = &[
    Fixup {
        target: FixupTarget::FormControls,
        property: "background-color",
        value: "#1f2430",
    },
    Fixup {
        target: FixupTarget::FormControls,
        property: "color",
        value: "#e6e8ee",
    },
    Fixup {
        target: FixupTarget::FormControls,
        property: "border-color",
        value: "#3a4050",
    },
    Fixup {
        target: FixupTarget::Cards,
        property: "background-color",
        value: "#1c2029",
    },
    Fixup {
        target: FixupTarget::Cards,
        property: "color",
        value: "#e6e8ee",
    },
    Fixup {
        target: FixupTarget::PageChrome,
        property: "background-color",
        value: "rgba(18, 20, 26, 0.85)",
    },
    Fixup {
        target: FixupTarget::PageChrome,
        property: "backdrop-filter",
        value: "blur(8px)",
    },
];

/// Payload delivered to subscribers after every application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeChanged {
    pub theme: Theme,
}

/// String key/value store holding the manual preference.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// The system dark/light preference.
pub trait SystemScheme {
    fn prefers_dark(&self) -> bool;
}

/// Where a theme is painted.
pub trait ThemeSurface {
    /// Set the mutually exclusive theme marker on the root node.
    fn set_marker(&mut self, theme: Theme);
    fn set_token(&mut self, name: &str, value: &str);
    fn set_chrome_color(&mut self, color: &str);
    fn apply_fixup(&mut self, fixup: &Fixup);
    /// Remove what [`apply_fixup`](Self::apply_fixup) added. Inline styles
    /// the surface did not set itself are left alone.
    fn revert_fixup(&mut self, fixup: &Fixup);
    fn set_transitions(&mut self, enabled: bool);
}

/// The checkbox reflecting the current theme.
pub trait ToggleControl {
    fn set_checked(&mut self, checked: bool);
}

/// Collaborators injected into a [`ThemeController`].
pub struct ThemeContext<S, Y, T> {
    pub store: S,
    pub system: Y,
    pub surface: T,
}

/// Handle returned by [`ThemeController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ThemeChanged)>;

/// Resolves, applies, and persists the page theme.
pub struct ThemeController<S, Y, T> {
    store: S,
    system: Y,
    surface: T,
    storage_key: String,
    current: Theme,
    enabled: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S, Y, T> std::fmt::Debug for ThemeController<S, Y, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("storage_key", &self.storage_key)
            .field("current", &self.current)
            .field("enabled", &self.enabled)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<S, Y, T> ThemeController<S, Y, T>
where
    S: PreferenceStore,
    Y: SystemScheme,
    T: ThemeSurface,
{
    pub fn new(context: ThemeContext<S, Y, T>, config: &ThemeConfig) -> Self {
        Self {
            store: context.store,
            system: context.system,
            surface: context.surface,
            storage_key: config.storage_key.clone(),
            current: Theme::default(),
            enabled: true,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The theme most recently applied.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// `false` once [`start`](Self::start) found no toggle control.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The valid manual preference, if any.
    pub fn persisted_theme(&self) -> Option<Theme> {
        self.store
            .read(&self.storage_key)
            .as_deref()
            .and_then(Theme::parse)
    }

    /// Persisted preference, else the system signal.
    pub fn resolve_initial_theme(&self) -> Theme {
        self.persisted_theme()
            .unwrap_or_else(|| Theme::from_dark(self.system.prefers_dark()))
    }

    /// Register an observer called after every application.
    pub fn subscribe(&mut self, observer: impl FnMut(&ThemeChanged) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Bind to the toggle control and paint the initial theme.
    ///
    /// Without a control the controller disables itself: every later call
    /// is a no-op for the rest of the page session.
    pub fn start(&mut self, control: Option<&mut dyn ToggleControl>) -> Result<Theme, ThemeError> {
        let Some(control) = control else {
            self.enabled = false;
            let err = ThemeError::MissingControl(TOGGLE_CONTROL_ID);
            leptos::logging::error!("{err}; theme switching disabled");
            return Err(err);
        };
        let theme = self.resolve_initial_theme();
        self.apply_theme(theme);
        control.set_checked(theme.is_dark());
        Ok(theme)
    }

    /// Turn on CSS transitions once the first paint has settled.
    pub fn enable_transitions(&mut self) {
        if self.enabled {
            self.surface.set_transitions(true);
        }
    }

    /// Paint `theme` and notify subscribers. Idempotent.
    pub fn apply_theme(&mut self, theme: Theme) {
        if !self.enabled {
            return;
        }
        self.surface.set_marker(theme);
        for (name, value) in theme.tokens() {
            self.surface.set_token(name, value);
        }
        self.surface.set_chrome_color(theme.chrome_color());
        for fixup in DARK_FIXUPS {
            if theme.is_dark() {
                self.surface.apply_fixup(fixup);
            } else {
                self.surface.revert_fixup(fixup);
            }
        }
        self.current = theme;

        let event = ThemeChanged { theme };
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }

    /// The user flipped the toggle: apply and remember the choice.
    pub fn handle_user_toggle(&mut self, is_dark: bool) {
        if !self.enabled {
            return;
        }
        let theme = Theme::from_dark(is_dark);
        self.apply_theme(theme);
        if let Err(e) = self.store.write(&self.storage_key, theme.as_str()) {
            leptos::logging::warn!("{}", ThemeError::from(e));
        }
    }

    /// The system preference changed. Ignored while a manual choice exists.
    pub fn handle_system_signal_change(&mut self, is_dark: bool) {
        if !self.enabled || self.persisted_theme().is_some() {
            return;
        }
        self.apply_theme(Theme::from_dark(is_dark));
    }

    /// The page became visible again; repaint in case styles drifted.
    pub fn handle_visibility_restore(&mut self) {
        self.apply_theme(self.current);
    }

    /// Forget the manual choice and follow the system signal again.
    pub fn clear_preference(&mut self) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.store.remove(&self.storage_key) {
            leptos::logging::warn!("{}", ThemeError::from(e));
            return;
        }
        self.apply_theme(Theme::from_dark(self.system.prefers_dark()));
    }
}
