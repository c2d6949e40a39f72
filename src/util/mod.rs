//! Browser adapters for the page state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module implements one `state` trait (or one event hookup) over
//! `web-sys`. Without the `csr` feature they compile to inert stand-ins so the
//! rest of the crate builds and tests natively.

pub mod color_scheme;
pub mod events;
pub mod media;
pub mod storage;
pub mod surface;
pub mod toggle;
