//! Error types for the modal navigation coordinator.

/// Boxed error returned by host collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for coordinator operations.
pub type Result<T> = std::result::Result<T, NavError>;

/// Errors returned by [`ModalNav`](crate::ModalNav) operations.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// `show` was called while a modal is already open.
    #[error("Modal navigation is already active; hide it before showing again")]
    AlreadyActive,

    /// `hide` was called while no modal is open.
    #[error("Modal navigation is not active; nothing to hide")]
    NotActive,

    /// The state router rejected a navigation.
    #[error("Navigation to state '{state}' failed: {source}")]
    Navigation {
        state: String,
        #[source]
        source: BoxError,
    },

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl NavError {
    /// Create a navigation error.
    pub fn navigation(state: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Navigation {
            state: state.into(),
            source: source.into(),
        }
    }
}

/// Errors raised while configuring the coordinator.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Options were changed after the coordinator was built.
    #[error("Modal options can only be changed before the coordinator is constructed")]
    AlreadyConstructed,

    /// TOML options could not be parsed.
    #[error("Invalid modal options TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON options could not be parsed.
    #[error("Invalid modal options JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_navigation_error_keeps_source() {
        let err = NavError::navigation("modal.edit", "unknown state");
        assert_eq!(
            err.to_string(),
            "Navigation to state 'modal.edit' failed: unknown state"
        );
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("unknown state"));
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err = NavError::from(ConfigError::AlreadyConstructed);
        assert_eq!(err.to_string(), ConfigError::AlreadyConstructed.to_string());
    }
}
