//! UI components.

pub mod audio_player;
pub mod tab_group;
pub mod theme_toggle;
