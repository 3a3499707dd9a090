//! The modal event bus.
//!
//! [`ModalBus`] owns one [`Signal`] per [`Channel`]. It replaces an ambient,
//! process-wide event bus with an explicit object: whoever composes the
//! application creates one bus and hands it to every party that publishes or
//! subscribes. Dispatch is synchronous; publishing returns only after every
//! connected slot has run.

use crate::channel::Channel;
use crate::logging::{span_names, targets};
use crate::signal::{ConnectionId, Signal};

/// One signal per modal channel, with payload type `P` on the data channels.
pub struct ModalBus<P> {
    show: Signal<()>,
    hide: Signal<()>,
    destroy: Signal<()>,
    back_data: Signal<P>,
    close_data: Signal<P>,
}

static_assertions::assert_impl_all!(ModalBus<String>: Send, Sync);

impl<P: 'static> Default for ModalBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: 'static> ModalBus<P> {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            show: Signal::new(),
            hide: Signal::new(),
            destroy: Signal::new(),
            back_data: Signal::new(),
            close_data: Signal::new(),
        }
    }

    /// Publish on a lifecycle channel (`show`, `hide` or `destroy`).
    ///
    /// Data channels need a payload; publishing one here is ignored with a
    /// warning. Use [`broadcast`](Self::broadcast) instead.
    pub fn emit(&self, channel: Channel) {
        let _span = tracing::trace_span!(target: targets::BUS, span_names::BUS, %channel).entered();
        match channel {
            Channel::Show => self.show.emit(()),
            Channel::Hide => self.hide.emit(()),
            Channel::Destroy => self.destroy.emit(()),
            Channel::BackData | Channel::CloseData => {
                tracing::warn!(target: targets::BUS, %channel, "data channel emitted without payload, ignoring");
            }
        }
    }

    /// Publish `payload` on a data channel (`backData` or `closeData`).
    ///
    /// Lifecycle channels carry no payload; the payload is dropped and the
    /// channel is emitted as with [`emit`](Self::emit).
    pub fn broadcast(&self, channel: Channel, payload: P) {
        let _span = tracing::trace_span!(target: targets::BUS, span_names::BUS, %channel).entered();
        match channel {
            Channel::BackData => self.back_data.emit(payload),
            Channel::CloseData => self.close_data.emit(payload),
            Channel::Show | Channel::Hide | Channel::Destroy => {
                tracing::debug!(target: targets::BUS, %channel, "payload dropped on lifecycle channel");
                drop(payload);
                self.emit(channel);
            }
        }
    }
}

impl<P> ModalBus<P> {
    /// The `show` channel.
    pub fn show(&self) -> &Signal<()> {
        &self.show
    }

    /// The `hide` channel.
    pub fn hide(&self) -> &Signal<()> {
        &self.hide
    }

    /// The `destroy` channel.
    pub fn destroy(&self) -> &Signal<()> {
        &self.destroy
    }

    /// The `backData` channel.
    pub fn back_data(&self) -> &Signal<P> {
        &self.back_data
    }

    /// The `closeData` channel.
    pub fn close_data(&self) -> &Signal<P> {
        &self.close_data
    }

    /// Number of slots connected to `channel`.
    pub fn connection_count(&self, channel: Channel) -> usize {
        match channel {
            Channel::Show => self.show.connection_count(),
            Channel::Hide => self.hide.connection_count(),
            Channel::Destroy => self.destroy.connection_count(),
            Channel::BackData => self.back_data.connection_count(),
            Channel::CloseData => self.close_data.connection_count(),
        }
    }

    /// Total number of slots connected across all channels.
    pub fn total_connections(&self) -> usize {
        Channel::ALL
            .into_iter()
            .map(|channel| self.connection_count(channel))
            .sum()
    }

    /// Disconnect every slot on every channel.
    pub fn disconnect_all(&self) {
        self.show.disconnect_all();
        self.hide.disconnect_all();
        self.destroy.disconnect_all();
        self.back_data.disconnect_all();
        self.close_data.disconnect_all();
    }

    /// Disconnect one slot from `channel`.
    pub fn disconnect(&self, channel: Channel, id: ConnectionId) -> bool {
        match channel {
            Channel::Show => self.show.disconnect(id),
            Channel::Hide => self.hide.disconnect(id),
            Channel::Destroy => self.destroy.disconnect(id),
            Channel::BackData => self.back_data.disconnect(id),
            Channel::CloseData => self.close_data.disconnect(id),
        }
    }
}

impl<P> std::fmt::Debug for ModalBus<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalBus")
            .field("show", &self.show)
            .field("hide", &self.hide)
            .field("destroy", &self.destroy)
            .field("back_data", &self.back_data)
            .field("close_data", &self.close_data)
            .finish()
    }
}
