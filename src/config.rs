//! Page configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page may embed a `<script type="application/json" id="site-config">`
//! block describing its tabs, tracks, and tunables. Every field has a default
//! so a partial (or missing) block still yields a working page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// DOM id of the embedded configuration block.
#[cfg(feature = "csr")]
const CONFIG_ELEMENT_ID: &str = "site-config";

/// Top-level page configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub tabs: Vec<TabConfig>,
    pub theme: ThemeConfig,
    pub player: PlayerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Listening Room".to_owned(),
            tabs: vec![
                TabConfig {
                    id: "overview".to_owned(),
                    label: "Overview".to_owned(),
                    active: true,
                    body: "A small collection of recordings. Pick a tab to browse.".to_owned(),
                    tracks: Vec::new(),
                },
                TabConfig {
                    id: "recordings".to_owned(),
                    label: "Recordings".to_owned(),
                    active: false,
                    body: "Only one recording plays at a time.".to_owned(),
                    tracks: vec![
                        TrackConfig {
                            src: "/audio/first-light.mp3".to_owned(),
                            title: "First Light".to_owned(),
                        },
                        TrackConfig {
                            src: "/audio/night-shift.mp3".to_owned(),
                            title: "Night Shift".to_owned(),
                        },
                    ],
                },
                TabConfig {
                    id: "about".to_owned(),
                    label: "About".to_owned(),
                    active: false,
                    body: "Switching tabs stops playback.".to_owned(),
                    tracks: Vec::new(),
                },
            ],
            theme: ThemeConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

/// One tab: its button label, pane text, and any players in the pane.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    /// Marks the initially active tab. The first marked tab wins.
    pub active: bool,
    pub body: String,
    pub tracks: Vec<TrackConfig>,
}

/// A single-track audio player.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub src: String,
    pub title: String,
}

/// Theme controller tunables.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference store key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Delay before CSS transitions are enabled after the first paint.
    pub transition_delay_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            transition_delay_ms: 100,
        }
    }
}

/// Player tunables.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Seconds moved per arrow key press on the seek bar.
    pub seek_step_secs: f64,
    /// Volume restored by unmute when the player was never muted.
    pub default_volume: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seek_step_secs: 5.0,
            default_volume: 0.7,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the configuration embedded in the page, falling back to defaults.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(raw) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content())
            else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    leptos::logging::warn!("{e}; using defaults");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
