//! modal-nav - treat a modal overlay as its own navigation stack.
//!
//! A [`ModalNav`] opens a full-screen overlay that hosts its own navigation
//! viewport. While the modal is open the user can move forward and back
//! between modal pages. Closing it puts the host's view history back exactly
//! as it was before the modal opened, and optional result data is delivered
//! to the page that opened it.
//!
//! The coordinator does not render anything. The host UI framework plugs in
//! through the traits in [`host`].
//!
//! # Example
//!
//! ```ignore
//! use modal_nav::{ModalNavProvider, ModalOptionsPatch, ModalServices};
//! use serde_json::json;
//!
//! let mut provider = ModalNavProvider::new();
//! provider.set_modal_options(ModalOptionsPatch::new().animation("fade-in"))?;
//! let nav = provider.get(ModalServices::new(overlay, history, router, director));
//!
//! // On the page that opens the modal:
//! nav.on_close(|result| println!("modal returned {result}"));
//! nav.show("modal.pick-contact", None)?;
//!
//! // Inside the modal:
//! nav.go("modal.contact-detail", Some(json!({ "id": 7 })))?;
//! nav.go_back(None);
//! nav.hide(Some(json!({ "contact": 7 })))?;
//! ```

mod coordinator;
mod error;
pub mod host;
mod lifecycle;
mod options;
mod provider;
mod registry;
mod template;
mod view;

pub use coordinator::{ModalNav, ModalServices};
pub use error::{BoxError, ConfigError, NavError, Result};
pub use host::{OverlayFactory, OverlayHandle, StateRouter, TransitionDirector, ViewHistory};
pub use lifecycle::LifecycleState;
pub use options::{DEFAULT_ANIMATION, ModalOptions, ModalOptionsPatch};
pub use provider::ModalNavProvider;
pub use registry::{CallbackKind, CallbackRegistry, ViewCallback};
pub use template::{DEFAULT_VIEWPORT_NAME, OverlayTemplate};
pub use view::{Direction, NextViewOptions, ViewId, ViewRef};

pub use modal_nav_core::{Channel, ConnectionGuard, ConnectionId, ModalBus, Signal};
