//! The coordinator's `Idle` / `ModalActive` lifecycle.

use std::fmt;

use crate::host::ViewHistory;
use crate::view::ViewRef;

/// Observable lifecycle state, emitted on every transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// No modal is open; the host's history is its own.
    #[default]
    Idle,
    /// A modal is open and the pre-modal history is held in a snapshot.
    ModalActive,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::ModalActive => f.write_str("modal-active"),
        }
    }
}

/// The history pointers captured by `show` and written back by `hide`.
///
/// Values are stored exactly as the history store returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot {
    back_view: Option<ViewRef>,
    current_view: Option<ViewRef>,
}

impl Snapshot {
    pub(crate) fn capture(history: &dyn ViewHistory) -> Self {
        Self {
            back_view: history.back_view(),
            current_view: history.current_view(),
        }
    }

    pub(crate) fn restore(self, history: &dyn ViewHistory) {
        history.set_back_view(self.back_view);
        history.set_current_view(self.current_view);
    }
}

/// The lifecycle with its snapshot; the snapshot only exists while active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    #[default]
    Idle,
    ModalActive(Snapshot),
}

impl Lifecycle {
    pub(crate) fn state(&self) -> LifecycleState {
        match self {
            Self::Idle => LifecycleState::Idle,
            Self::ModalActive(_) => LifecycleState::ModalActive,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        matches!(self, Self::ModalActive(_))
    }
}
