//! Page state models.
//!
//! DESIGN
//! ======
//! State is split by widget (`tabs`, `player`, `theme`). None of these
//! modules touch the DOM; browser glue lives in `util` and implements the
//! traits declared here.

pub mod player;
pub mod tabs;
pub mod theme;
