//! Tab group state: one active (button, pane) pair at a time.
//!
//! DESIGN
//! ======
//! Selecting a tab stops any audio on the page. The group does not know
//! about players; it is handed something that can [`Silence`] them.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use crate::error::TabError;

/// Anything that can stop all page audio.
pub trait Silence {
    fn pause_all(&mut self);
}

/// One (button, pane) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// DOM id of the selector button.
    pub fn button_dom_id(&self) -> String {
        format!("tab-{}", self.id)
    }

    /// DOM id of the content pane.
    pub fn pane_dom_id(&self) -> String {
        format!("panel-{}", self.id)
    }
}

/// Attributes of a selector button for the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub active: bool,
    /// `aria-selected`.
    pub selected: bool,
    /// Roving tabindex: only the active button is in the tab order.
    pub tab_index: i32,
}

/// Attributes of a content pane for the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaneState {
    pub visible: bool,
    pub tab_index: i32,
}

/// Keys the tab list responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKey {
    Next,
    Previous,
    First,
    Last,
}

impl TabKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// A set of tabs with exactly one active entry (unless empty).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabGroup {
    tabs: Vec<Tab>,
    active: usize,
}

impl TabGroup {
    /// Build a group. `initial` names the tab marked active in markup; an
    /// absent or unknown id falls back to the first tab.
    pub fn new(tabs: Vec<Tab>, initial: Option<&str>) -> Self {
        let active = initial
            .and_then(|id| tabs.iter().position(|t| t.id == id))
            .unwrap_or(0);
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active().map(|t| t.id.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    pub fn button_state(&self, id: &str) -> ButtonState {
        let active = self.is_active(id);
        ButtonState {
            active,
            selected: active,
            tab_index: if active { 0 } else { -1 },
        }
    }

    pub fn pane_state(&self, id: &str) -> PaneState {
        let visible = self.is_active(id);
        PaneState {
            visible,
            tab_index: if visible { 0 } else { -1 },
        }
    }

    /// Activate `id` and silence all players.
    ///
    /// An unknown id leaves the group and the players untouched.
    pub fn select(&mut self, id: &str, players: &mut impl Silence) -> Result<(), TabError> {
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            leptos::logging::warn!("tab select ignored: unknown id {id:?}");
            return Err(TabError::UnknownTab(id.to_owned()));
        };
        self.active = index;
        players.pause_all();
        Ok(())
    }

    /// Id of the tab a navigation key moves to, wrapping at the ends.
    pub fn target_for_key(&self, key: TabKey) -> Option<&str> {
        let len = self.tabs.len();
        if len == 0 {
            return None;
        }
        let index = match key {
            TabKey::Next => (self.active + 1) % len,
            TabKey::Previous => (self.active + len - 1) % len,
            TabKey::First => 0,
            TabKey::Last => len - 1,
        };
        Some(self.tabs[index].id.as_str())
    }

    /// Handle a key on the tab list. Returns the newly active id when the
    /// key moved the selection.
    pub fn select_by_key(&mut self, key: &str, players: &mut impl Silence) -> Option<String> {
        let target = self.target_for_key(TabKey::from_key(key)?)?.to_owned();
        self.select(&target, players).ok()?;
        Some(target)
    }
}
