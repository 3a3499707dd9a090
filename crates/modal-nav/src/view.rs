//! View identity and navigation hints exchanged with the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a view in the host's view history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    /// Create a view id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A navigable view as reported by the host's view history.
///
/// Only [`view_id`](Self::view_id) is interpreted by the coordinator. The
/// remaining metadata is carried through snapshots untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewRef {
    /// The view identity.
    pub view_id: ViewId,
    /// Router state the view renders, if the host tracks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    /// History stack the view belongs to, if the host tracks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_id: Option<String>,
}

impl ViewRef {
    /// A view with only an identifier.
    pub fn new(view_id: impl Into<ViewId>) -> Self {
        Self {
            view_id: view_id.into(),
            state_name: None,
            history_id: None,
        }
    }

    /// Set the router state name.
    pub fn with_state(mut self, state_name: impl Into<String>) -> Self {
        self.state_name = Some(state_name.into());
        self
    }

    /// Set the history stack id.
    pub fn with_history(mut self, history_id: impl Into<String>) -> Self {
        self.history_id = Some(history_id.into());
        self
    }
}

/// Direction hint for the next view transition's animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Push-style transition.
    Forward,
    /// Pop-style transition.
    Back,
}

impl Direction {
    /// The host-facing name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options applied by the history store to the next view transition only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextViewOptions {
    /// Render the next transition without animation.
    pub disable_animate: bool,
}

impl NextViewOptions {
    /// Options that suppress animation for the next transition.
    pub const fn without_animation() -> Self {
        Self {
            disable_animate: true,
        }
    }
}
