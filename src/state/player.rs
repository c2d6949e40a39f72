//! Audio player state: display sync, seeking, mute, and single-active playback.
//!
//! DESIGN
//! ======
//! The registry owns every player on the page, so "only one plays at a time"
//! is enforced in one place: starting a player pauses all the others first.
//! The playback primitive sits behind [`Playback`] so the sync logic runs
//! against an `<audio>` element in the browser and a plain struct in tests.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use crate::config::PlayerConfig;
use crate::state::tabs::Silence;

/// A single-track playback primitive.
///
/// `duration` is NaN (or zero) until the media metadata is known.
pub trait Playback {
    fn position(&self) -> f64;
    fn duration(&self) -> f64;
    fn is_paused(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);
    fn set_position(&mut self, secs: f64);
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
}

/// Handle to a player owned by a [`PlayerRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(usize);

/// Affordance shown on the play/pause button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayButton {
    #[default]
    Play,
    Pause,
}

impl PlayButton {
    /// Accessible label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
        }
    }

    /// `aria-pressed` value: the button is "pressed" while playing.
    pub fn pressed(self) -> bool {
        self == Self::Pause
    }
}

/// Affordance shown on the volume button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VolumeButton {
    #[default]
    Mute,
    Unmute,
}

impl VolumeButton {
    fn for_volume(volume: f64) -> Self {
        if volume > 0.0 { Self::Mute } else { Self::Unmute }
    }

    /// Accessible label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mute => "Mute",
            Self::Unmute => "Unmute",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Mute => "🔊",
            Self::Unmute => "🔇",
        }
    }
}

/// Everything a player widget renders.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerDisplay {
    /// Position / duration, in `[0, 1]`.
    pub progress: f64,
    /// `"M:SS / M:SS"`.
    pub time_label: String,
    /// Seek bar `aria-valuenow`, percent.
    pub value_now: u8,
    /// Seek bar `aria-valuetext`.
    pub value_text: String,
    pub play_button: PlayButton,
    pub volume_button: VolumeButton,
}

impl Default for PlayerDisplay {
    fn default() -> Self {
        Self {
            progress: 0.0,
            time_label: "0:00 / 0:00".to_owned(),
            value_now: 0,
            value_text: "0:00 of 0:00".to_owned(),
            play_button: PlayButton::Play,
            volume_button: VolumeButton::Mute,
        }
    }
}

impl PlayerDisplay {
    /// Inline style for the progress fill element.
    pub fn progress_style(&self) -> String {
        format!("width: {:.2}%", self.progress * 100.0)
    }
}

/// Format seconds as `M:SS`. Minutes are unbounded; there is no hour field.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_owned();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn known_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Position as a fraction of duration; 0 while the duration is unknown.
pub fn progress_ratio(position: f64, duration: f64) -> f64 {
    match known_duration(duration) {
        Some(duration) if position.is_finite() => (position / duration).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Horizontal ratio of a pointer inside a seek bar.
pub fn click_ratio(pointer_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return 0.0;
    }
    let ratio = (pointer_x - bar_left) / bar_width;
    if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) }
}

/// Keys the seek bar responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeekKey {
    Back,
    Forward,
    Start,
    End,
}

impl SeekKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "ArrowDown" => Some(Self::Back),
            "ArrowRight" | "ArrowUp" => Some(Self::Forward),
            "Home" => Some(Self::Start),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

/// One player widget: its primitive plus the state its controls render.
#[derive(Debug)]
pub struct Player<P> {
    playback: P,
    saved_volume: f64,
    display: PlayerDisplay,
}

impl<P: Playback> Player<P> {
    pub fn playback(&self) -> &P {
        &self.playback
    }

    pub fn display(&self) -> &PlayerDisplay {
        &self.display
    }

    /// Volume restored on unmute.
    pub fn saved_volume(&self) -> f64 {
        self.saved_volume
    }

    pub fn is_playing(&self) -> bool {
        !self.playback.is_paused()
    }

    fn stop(&mut self) {
        self.playback.pause();
        self.display.play_button = PlayButton::Play;
    }

    fn sync_position(&mut self) {
        let position = self.playback.position();
        let duration = self.playback.duration();
        let progress = progress_ratio(position, duration);
        let elapsed = format_time(position);
        let total = format_time(duration);

        self.display.progress = progress;
        self.display.time_label = format!("{elapsed} / {total}");
        self.display.value_now = percent(progress);
        self.display.value_text = format!("{elapsed} of {total}");
    }
}

/// Owner of every player on the page.
#[derive(Debug)]
pub struct PlayerRegistry<P> {
    players: Vec<Player<P>>,
    seek_step: f64,
    default_volume: f64,
}

impl<P> Default for PlayerRegistry<P> {
    fn default() -> Self {
        let config = PlayerConfig::default();
        Self {
            players: Vec::new(),
            seek_step: config.seek_step_secs,
            default_volume: config.default_volume,
        }
    }
}

impl<P: Playback> PlayerRegistry<P> {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            players: Vec::new(),
            seek_step: config.seek_step_secs,
            default_volume: config.default_volume,
        }
    }

    /// Take ownership of a primitive, start it at the default volume, and
    /// return its handle.
    pub fn register(&mut self, mut playback: P) -> PlayerId {
        playback.set_volume(self.default_volume);
        let mut player = Player {
            display: PlayerDisplay {
                volume_button: VolumeButton::for_volume(playback.volume()),
                ..PlayerDisplay::default()
            },
            playback,
            saved_volume: self.default_volume,
        };
        player.sync_position();
        self.players.push(player);
        PlayerId(self.players.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player<P>> {
        self.players.get(id.0)
    }

    pub fn display(&self, id: PlayerId) -> Option<&PlayerDisplay> {
        self.get(id).map(Player::display)
    }

    /// Handles of players that are currently playing.
    pub fn playing(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_playing())
            .map(|(i, _)| PlayerId(i))
            .collect()
    }

    /// Start a paused player (silencing all others) or pause a playing one.
    pub fn toggle_play_pause(&mut self, id: PlayerId) {
        let Some(paused) = self.get(id).map(|p| p.playback.is_paused()) else {
            return;
        };
        if paused {
            self.pause_all_except(id);
        }
        let Some(player) = self.players.get_mut(id.0) else {
            return;
        };
        if paused {
            player.playback.play();
            player.display.play_button = PlayButton::Pause;
        } else {
            player.stop();
        }
    }

    /// Pause every player other than `id`.
    pub fn pause_all_except(&mut self, id: PlayerId) {
        for (i, player) in self.players.iter_mut().enumerate() {
            if i != id.0 {
                player.stop();
            }
        }
    }

    /// Pause every player. Idempotent.
    pub fn pause_all(&mut self) {
        for player in &mut self.players {
            player.stop();
        }
    }

    /// The primitive started or stopped on its own (media keys, a rejected
    /// `play()`); make the button agree with it.
    pub fn on_playback_state_change(&mut self, id: PlayerId) {
        if let Some(player) = self.players.get_mut(id.0) {
            player.display.play_button = if player.playback.is_paused() {
                PlayButton::Play
            } else {
                PlayButton::Pause
            };
        }
    }

    /// Refresh progress, time label, and accessible value from the primitive.
    pub fn on_position_update(&mut self, id: PlayerId) {
        if let Some(player) = self.players.get_mut(id.0) {
            player.sync_position();
        }
    }

    /// Duration just became known; show it before playback starts.
    pub fn on_metadata_loaded(&mut self, id: PlayerId) {
        self.on_position_update(id);
    }

    /// Jump to `ratio` of the track. Ignored while the duration is unknown.
    pub fn seek_to_ratio(&mut self, id: PlayerId, ratio: f64) {
        let Some(player) = self.players.get_mut(id.0) else {
            return;
        };
        let Some(duration) = known_duration(player.playback.duration()) else {
            return;
        };
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        player.playback.set_position(ratio * duration);
        player.sync_position();
    }

    /// Handle a key on the seek bar. Returns `true` when the key belongs to
    /// the seek bar and its default action should be suppressed.
    pub fn seek_by_key(&mut self, id: PlayerId, key: &str) -> bool {
        let Some(key) = SeekKey::from_key(key) else {
            return false;
        };
        let step = self.seek_step;
        let Some(player) = self.players.get_mut(id.0) else {
            return true;
        };
        let position = player.playback.position();
        let duration = known_duration(player.playback.duration());
        let target = match (key, duration) {
            (SeekKey::Back, _) => Some((position - step).max(0.0)),
            (SeekKey::Start, _) => Some(0.0),
            (SeekKey::Forward, Some(duration)) => Some((position + step).min(duration)),
            (SeekKey::End, Some(duration)) => Some(duration),
            (SeekKey::Forward | SeekKey::End, None) => None,
        };
        if let Some(target) = target {
            if target != position {
                player.playback.set_position(target);
            }
            player.sync_position();
        }
        true
    }

    /// Mute (remembering the volume) or restore the remembered volume.
    ///
    /// Only `volume > 0` counts as unmuted, so a remembered volume of zero
    /// unmutes to silence.
    pub fn toggle_mute(&mut self, id: PlayerId) {
        let Some(player) = self.players.get_mut(id.0) else {
            return;
        };
        let volume = player.playback.volume();
        if volume > 0.0 {
            player.saved_volume = volume;
            player.playback.set_volume(0.0);
            player.display.volume_button = VolumeButton::Unmute;
        } else {
            player.playback.set_volume(player.saved_volume);
            player.display.volume_button = VolumeButton::Mute;
        }
    }

    /// Track finished: rewind and show the paused state.
    pub fn on_ended(&mut self, id: PlayerId) {
        let Some(player) = self.players.get_mut(id.0) else {
            return;
        };
        player.stop();
        player.playback.set_position(0.0);
        player.sync_position();
    }
}

impl<P: Playback> Silence for PlayerRegistry<P> {
    fn pause_all(&mut self) {
        PlayerRegistry::pause_all(self);
    }
}
