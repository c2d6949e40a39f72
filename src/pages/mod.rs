//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; it owns layout and delegates the interactive
//! pieces to `components`.

pub mod home;
