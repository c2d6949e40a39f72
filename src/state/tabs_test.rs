use super::*;

#[derive(Default)]
struct CountingPlayers {
    pauses: usize,
}

impl Silence for CountingPlayers {
    fn pause_all(&mut self) {
        self.pauses += 1;
    }
}

fn group(initial: Option<&str>) -> TabGroup {
    TabGroup::new(
        vec![
            Tab::new("overview", "Overview"),
            Tab::new("recordings", "Recordings"),
            Tab::new("about", "About"),
        ],
        initial,
    )
}

fn visible_panes(group: &TabGroup) -> Vec<&str> {
    group
        .tabs()
        .iter()
        .filter(|t| group.pane_state(&t.id).visible)
        .map(|t| t.id.as_str())
        .collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn initial_tab_comes_from_markup() {
    assert_eq!(group(Some("about")).active_id(), Some("about"));
}

#[test]
fn missing_initial_falls_back_to_first() {
    assert_eq!(group(None).active_id(), Some("overview"));
    assert_eq!(group(Some("nope")).active_id(), Some("overview"));
}

#[test]
fn empty_group_has_no_active_tab() {
    let mut empty = TabGroup::new(Vec::new(), None);
    let mut players = CountingPlayers::default();
    assert_eq!(empty.active_id(), None);
    assert!(empty.select("x", &mut players).is_err());
    assert_eq!(empty.select_by_key("ArrowRight", &mut players), None);
    assert_eq!(players.pauses, 0);
}

#[test]
fn dom_ids_link_buttons_and_panes() {
    let tab = Tab::new("about", "About");
    assert_eq!(tab.button_dom_id(), "tab-about");
    assert_eq!(tab.pane_dom_id(), "panel-about");
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_shows_exactly_one_pane_and_silences_players() {
    let mut tabs = group(None);
    let mut players = CountingPlayers::default();

    tabs.select("recordings", &mut players).unwrap();
    assert_eq!(visible_panes(&tabs), vec!["recordings"]);
    assert_eq!(players.pauses, 1);

    tabs.select("about", &mut players).unwrap();
    assert_eq!(visible_panes(&tabs), vec!["about"]);
    assert_eq!(players.pauses, 2);
}

#[test]
fn reselecting_active_tab_still_silences() {
    let mut tabs = group(None);
    let mut players = CountingPlayers::default();
    tabs.select("overview", &mut players).unwrap();
    assert_eq!(tabs.active_id(), Some("overview"));
    assert_eq!(players.pauses, 1);
}

#[test]
fn unknown_id_is_a_noop() {
    let mut tabs = group(Some("about"));
    let mut players = CountingPlayers::default();

    let err = tabs.select("missing", &mut players).unwrap_err();
    assert_eq!(err, TabError::UnknownTab("missing".to_owned()));
    assert_eq!(tabs.active_id(), Some("about"));
    assert_eq!(players.pauses, 0);
}

#[test]
fn button_and_pane_attributes_follow_selection() {
    let mut tabs = group(None);
    tabs.select("about", &mut CountingPlayers::default()).unwrap();

    assert_eq!(
        tabs.button_state("about"),
        ButtonState { active: true, selected: true, tab_index: 0 }
    );
    assert_eq!(
        tabs.button_state("overview"),
        ButtonState { active: false, selected: false, tab_index: -1 }
    );
    assert_eq!(tabs.pane_state("about"), PaneState { visible: true, tab_index: 0 });
    assert_eq!(tabs.pane_state("overview"), PaneState { visible: false, tab_index: -1 });
}

#[test]
fn select_silences_real_registry() {
    use crate::config::PlayerConfig;
    use crate::state::player::{Playback, PlayerRegistry};

    struct Track {
        paused: bool,
    }
    impl Playback for Track {
        fn position(&self) -> f64 {
            0.0
        }
        fn duration(&self) -> f64 {
            60.0
        }
        fn is_paused(&self) -> bool {
            self.paused
        }
        fn play(&mut self) {
            self.paused = false;
        }
        fn pause(&mut self) {
            self.paused = true;
        }
        fn set_position(&mut self, _secs: f64) {}
        fn volume(&self) -> f64 {
            1.0
        }
        fn set_volume(&mut self, _volume: f64) {}
    }

    let mut registry = PlayerRegistry::new(&PlayerConfig::default());
    let id = registry.register(Track { paused: true });
    registry.toggle_play_pause(id);
    assert_eq!(registry.playing(), vec![id]);

    let mut tabs = group(None);
    tabs.select("about", &mut registry).unwrap();
    assert!(registry.playing().is_empty());
}

// =============================================================
// Keyboard navigation
// =============================================================

#[test]
fn tab_key_mapping() {
    assert_eq!(TabKey::from_key("ArrowRight"), Some(TabKey::Next));
    assert_eq!(TabKey::from_key("ArrowLeft"), Some(TabKey::Previous));
    assert_eq!(TabKey::from_key("Home"), Some(TabKey::First));
    assert_eq!(TabKey::from_key("End"), Some(TabKey::Last));
    assert_eq!(TabKey::from_key("ArrowUp"), None);
}

#[test]
fn arrow_keys_wrap_around() {
    let mut tabs = group(Some("about"));
    let mut players = CountingPlayers::default();

    assert_eq!(tabs.select_by_key("ArrowRight", &mut players).as_deref(), Some("overview"));
    assert_eq!(tabs.select_by_key("ArrowLeft", &mut players).as_deref(), Some("about"));
    assert_eq!(players.pauses, 2);
}

#[test]
fn home_and_end_jump_to_edges() {
    let mut tabs = group(Some("recordings"));
    let mut players = CountingPlayers::default();

    assert_eq!(tabs.select_by_key("End", &mut players).as_deref(), Some("about"));
    assert_eq!(tabs.select_by_key("Home", &mut players).as_deref(), Some("overview"));
}

#[test]
fn other_keys_leave_selection_alone() {
    let mut tabs = group(Some("recordings"));
    let mut players = CountingPlayers::default();

    assert_eq!(tabs.select_by_key("Enter", &mut players), None);
    assert_eq!(tabs.active_id(), Some("recordings"));
    assert_eq!(players.pauses, 0);
}
