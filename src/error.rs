//! Error types for the page controllers.
//!
//! None of these reach the user. Each is logged at the point it is handled
//! and the page degrades to a safe visual state.

/// Failure writing to the preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (private mode, sandboxed frame, SSR).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The backend refused the write, e.g. quota exceeded.
    #[error("preference write rejected: {0}")]
    WriteRejected(String),
}

/// Failure reported by the theme controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A control the controller binds to is absent from the page.
    #[error("required theme control `{0}` is missing")]
    MissingControl(&'static str),
    /// The preference could not be persisted.
    #[error("failed to persist theme preference: {0}")]
    Storage(#[from] StorageError),
}

/// Failure selecting a tab.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabError {
    /// No tab in the group carries this id.
    #[error("unknown tab id `{0}`")]
    UnknownTab(String),
}

/// Failure reading page configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded configuration is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}
