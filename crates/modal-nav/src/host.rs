//! Host collaborator traits.
//!
//! The coordinator never renders, animates or resolves routes itself. The
//! host UI framework supplies those services by implementing the traits in
//! this module:
//!
//! - [`OverlayFactory`] / [`OverlayHandle`] - the modal overlay
//! - [`ViewHistory`] - the view history store
//! - [`StateRouter`] - programmatic navigation to named states
//! - [`TransitionDirector`] - direction hint for the next transition
//!
//! All traits are object safe and require `Send + Sync`, so the coordinator
//! can hold them as `Arc<dyn Trait>` and capture them in bus slots.

use std::sync::Arc;

use crate::error::BoxError;
use crate::options::ModalOptions;
use crate::template::OverlayTemplate;
use crate::view::{Direction, NextViewOptions, ViewRef};

/// A live overlay instance.
///
/// All operations are fire-and-forget and must be idempotent: showing an
/// overlay that is already visible, or destroying one twice, is not an error.
pub trait OverlayHandle: Send + Sync {
    /// Present the overlay.
    fn show(&self);

    /// Collapse the overlay, keeping it for reuse.
    fn hide(&self);

    /// Tear the overlay down.
    fn destroy(&self);
}

/// Creates overlay instances.
pub trait OverlayFactory: Send + Sync {
    /// Create an overlay that renders `template`'s navigation viewport with
    /// the given visual options.
    fn create(&self, template: &OverlayTemplate, options: &ModalOptions) -> Arc<dyn OverlayHandle>;
}

/// The host's view history store.
///
/// Getters return the view the store currently points at; setters overwrite
/// the pointer verbatim, including with `None`.
pub trait ViewHistory: Send + Sync {
    /// The view a back navigation would return to.
    fn back_view(&self) -> Option<ViewRef>;

    /// Overwrite the back-view pointer.
    fn set_back_view(&self, view: Option<ViewRef>);

    /// The view currently displayed.
    fn current_view(&self) -> Option<ViewRef>;

    /// Overwrite the current-view pointer.
    fn set_current_view(&self, view: Option<ViewRef>);

    /// Apply options to the next view transition only.
    fn next_view_options(&self, options: NextViewOptions);

    /// Navigate back using the store's own back stack.
    fn go_back(&self);
}

/// Programmatic navigation to named states.
pub trait StateRouter<P>: Send + Sync {
    /// Navigate to `state`, passing `params` when present.
    fn go(&self, state: &str, params: Option<&P>) -> Result<(), BoxError>;
}

/// Hints the direction of the next view transition.
pub trait TransitionDirector: Send + Sync {
    /// Use `direction` for the next transition's animation.
    fn next_direction(&self, direction: Direction);
}
