//! Core systems for modal-nav.
//!
//! This crate provides the building blocks the modal navigation coordinator is
//! wired from:
//!
//! - **Signal/Slot System**: Synchronous, re-entrant inter-object communication
//! - **Property System**: Interior-mutable values with change detection
//! - **Event Bus**: One signal per modal channel (`show`, `hide`, `destroy`,
//!   `backData`, `closeData`)
//! - **Logging**: `tracing` targets shared by every modal-nav crate
//!
//! # Signal/Slot Example
//!
//! ```
//! use modal_nav_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Event Bus Example
//!
//! ```
//! use modal_nav_core::{Channel, ModalBus};
//!
//! let bus = ModalBus::<String>::new();
//! bus.close_data().connect(|msg| println!("modal closed with {msg}"));
//!
//! bus.close_data().emit("saved".to_string());
//! assert_eq!(bus.connection_count(Channel::CloseData), 1);
//! ```

mod bus;
mod channel;
mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use bus::ModalBus;
pub use channel::{Channel, ParseChannelError};
pub use error::{CoreError, Result};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
