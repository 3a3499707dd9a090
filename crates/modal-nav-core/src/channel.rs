//! Channel names published on the modal event bus.

use std::fmt;
use std::str::FromStr;

/// A channel on the [`ModalBus`](crate::ModalBus).
///
/// The lifecycle channels (`Show`, `Hide`, `Destroy`) carry no payload and
/// drive the overlay. The data channels (`BackData`, `CloseData`) carry the
/// payload handed to `go_back` / `hide` and are routed to view callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The overlay should appear.
    Show,
    /// The overlay should collapse.
    Hide,
    /// The overlay instance should be torn down.
    Destroy,
    /// Fired when going back from a modal state with data.
    BackData,
    /// Fired when the modal is closed with data.
    CloseData,
}

impl Channel {
    /// Every channel, lifecycle channels first.
    pub const ALL: [Channel; 5] = [
        Self::Show,
        Self::Hide,
        Self::Destroy,
        Self::BackData,
        Self::CloseData,
    ];

    /// The fixed channel name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
            Self::Destroy => "destroy",
            Self::BackData => "backData",
            Self::CloseData => "closeData",
        }
    }

    /// Whether the channel carries a payload.
    pub const fn carries_data(self) -> bool {
        matches!(self, Self::BackData | Self::CloseData)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown channel name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChannelError(String);

impl fmt::Display for ParseChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown modal channel: {}", self.0)
    }
}

impl std::error::Error for ParseChannelError {}

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.name() == s)
            .ok_or_else(|| ParseChannelError(s.to_string()))
    }
}
