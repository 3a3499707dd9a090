//! The modal navigation coordinator.
//!
//! [`ModalNav`] lets an application treat one modal overlay as its own
//! navigation stack. Opening the modal snapshots the host's view history;
//! closing it writes the snapshot back, so the page underneath resumes
//! exactly where it was.
//!
//! # Lifecycle
//!
//! ```text
//!            show()                     go() / go_back()
//!   Idle ─────────────► ModalActive ◄───────────────┐
//!    ▲                    │    └────────────────────┘
//!    └────────────────────┘
//!            hide()
//! ```
//!
//! `show` is the only way into `ModalActive` and `hide` the only way out.
//! A mismatched call is rejected without side effects.
//!
//! # Callback routing
//!
//! [`on_back`](ModalNav::on_back) and [`on_close`](ModalNav::on_close)
//! register a callback under the view that is current at registration. When
//! data is later published on `backData` / `closeData`, the coordinator looks
//! up the view that is current *at that moment* and runs only its callback.

use std::sync::Arc;

use modal_nav_core::logging::{span_names, targets};
use modal_nav_core::{Channel, ConnectionId, ModalBus, Property, Signal};

use crate::error::{NavError, Result};
use crate::host::{OverlayFactory, OverlayHandle, StateRouter, TransitionDirector, ViewHistory};
use crate::lifecycle::{Lifecycle, LifecycleState, Snapshot};
use crate::options::ModalOptions;
use crate::registry::{CallbackKind, CallbackRegistry, ViewCallback};
use crate::template::OverlayTemplate;
use crate::view::{Direction, NextViewOptions, ViewId};

/// The host services a [`ModalNav`] is built from.
pub struct ModalServices<P> {
    /// Creates the overlay instance.
    pub overlay: Arc<dyn OverlayFactory>,
    /// The host's view history store.
    pub history: Arc<dyn ViewHistory>,
    /// Navigates to named states.
    pub router: Arc<dyn StateRouter<P>>,
    /// Direction hint for the next transition.
    pub director: Arc<dyn TransitionDirector>,
    /// Bus to publish on; a private one is created when absent.
    pub bus: Option<Arc<ModalBus<P>>>,
}

impl<P> ModalServices<P> {
    /// Bundle the four host collaborators.
    pub fn new(
        overlay: Arc<dyn OverlayFactory>,
        history: Arc<dyn ViewHistory>,
        router: Arc<dyn StateRouter<P>>,
        director: Arc<dyn TransitionDirector>,
    ) -> Self {
        Self {
            overlay,
            history,
            router,
            director,
            bus: None,
        }
    }

    /// Publish on an existing bus shared with the rest of the application.
    pub fn with_bus(mut self, bus: Arc<ModalBus<P>>) -> Self {
        self.bus = Some(bus);
        self
    }
}

/// Coordinates one modal overlay's navigation with the host's view history.
///
/// The payload type `P` is what `show`/`go` hand to the router and what
/// `go_back`/`hide` deliver to view callbacks.
pub struct ModalNav<P = serde_json::Value> {
    options: ModalOptions,
    template: OverlayTemplate,
    overlay: Arc<dyn OverlayHandle>,
    history: Arc<dyn ViewHistory>,
    router: Arc<dyn StateRouter<P>>,
    director: Arc<dyn TransitionDirector>,
    bus: Arc<ModalBus<P>>,
    back_callbacks: Arc<CallbackRegistry<P>>,
    close_callbacks: Arc<CallbackRegistry<P>>,
    lifecycle: Property<Lifecycle>,
    lifecycle_changed: Signal<LifecycleState>,
    connections: Vec<(Channel, ConnectionId)>,
}

static_assertions::assert_impl_all!(ModalNav: Send, Sync);

impl<P: Send + Sync + 'static> ModalNav<P> {
    /// Build a coordinator with the default overlay template.
    pub fn new(services: ModalServices<P>, options: ModalOptions) -> Self {
        Self::with_template(services, options, OverlayTemplate::default())
    }

    /// Build a coordinator whose overlay embeds `template`'s viewport.
    ///
    /// Creates the overlay instance and connects the bus handlers. This
    /// happens once per coordinator.
    pub fn with_template(
        services: ModalServices<P>,
        options: ModalOptions,
        template: OverlayTemplate,
    ) -> Self {
        let ModalServices {
            overlay,
            history,
            router,
            director,
            bus,
        } = services;

        let bus = bus.unwrap_or_else(|| Arc::new(ModalBus::new()));
        let overlay = overlay.create(&template, &options);
        tracing::debug!(
            target: targets::COORDINATOR,
            viewport = template.viewport_name(),
            animation = %options.animation,
            "created modal overlay"
        );

        let back_callbacks = Arc::new(CallbackRegistry::new(CallbackKind::Back));
        let close_callbacks = Arc::new(CallbackRegistry::new(CallbackKind::Close));

        let connections = vec![
            (Channel::Show, {
                let overlay = overlay.clone();
                bus.show().connect(move |_| overlay.show())
            }),
            (Channel::Hide, {
                let overlay = overlay.clone();
                bus.hide().connect(move |_| overlay.hide())
            }),
            (Channel::Destroy, {
                let overlay = overlay.clone();
                bus.destroy().connect(move |_| overlay.destroy())
            }),
            (
                Channel::BackData,
                bus.back_data()
                    .connect(route_to_current_view(history.clone(), back_callbacks.clone())),
            ),
            (
                Channel::CloseData,
                bus.close_data()
                    .connect(route_to_current_view(history.clone(), close_callbacks.clone())),
            ),
        ];

        Self {
            options,
            template,
            overlay,
            history,
            router,
            director,
            bus,
            back_callbacks,
            close_callbacks,
            lifecycle: Property::default(),
            lifecycle_changed: Signal::new(),
            connections,
        }
    }

    /// Open the modal and navigate to `modal_state` without animation.
    ///
    /// The history store's back and current views are saved so [`hide`]
    /// can restore them. If the router rejects the navigation the modal
    /// stays open and the error is returned; `hide` still restores.
    ///
    /// [`hide`]: Self::hide
    #[tracing::instrument(skip(self, data), target = "modal_nav::coordinator", level = "debug")]
    pub fn show(&self, modal_state: &str, data: Option<P>) -> Result<()> {
        if self.lifecycle.with(Lifecycle::is_active) {
            tracing::warn!(target: targets::COORDINATOR, "show while a modal is already active, ignoring");
            return Err(NavError::AlreadyActive);
        }

        let snapshot = Snapshot::capture(self.history.as_ref());
        self.lifecycle.set_silent(Lifecycle::ModalActive(snapshot));

        self.history.next_view_options(NextViewOptions::without_animation());
        self.bus.emit(Channel::Show);
        self.lifecycle_changed.emit(LifecycleState::ModalActive);

        self.navigate(modal_state, data.as_ref())
    }

    /// Navigate forward within the modal's own stack.
    #[tracing::instrument(skip(self, data), target = "modal_nav::coordinator", level = "debug")]
    pub fn go(&self, modal_state: &str, data: Option<P>) -> Result<()> {
        self.director.next_direction(Direction::Forward);
        self.navigate(modal_state, data.as_ref())
    }

    /// Navigate back through the history store, delivering `data` to the
    /// back callback of the view that becomes current.
    #[tracing::instrument(skip_all, target = "modal_nav::coordinator", level = "debug")]
    pub fn go_back(&self, data: Option<P>) {
        self.history.go_back();
        if let Some(data) = data {
            self.bus.broadcast(Channel::BackData, data);
        }
    }

    /// Close the modal, restoring the history saved by [`show`], and deliver
    /// `data` to the close callback of the restored view.
    ///
    /// [`show`]: Self::show
    #[tracing::instrument(skip_all, target = "modal_nav::coordinator", level = "debug")]
    pub fn hide(&self, data: Option<P>) -> Result<()> {
        // take() leaves Idle behind, which is also what an inactive take returns.
        let Lifecycle::ModalActive(snapshot) = self.lifecycle.take() else {
            tracing::warn!(target: targets::COORDINATOR, "hide while no modal is active, ignoring");
            return Err(NavError::NotActive);
        };

        snapshot.restore(self.history.as_ref());

        self.bus.emit(Channel::Hide);
        self.lifecycle_changed.emit(LifecycleState::Idle);

        if let Some(data) = data {
            self.bus.broadcast(Channel::CloseData, data);
        }
        Ok(())
    }

    /// Tear down the overlay.
    ///
    /// Callback registrations and the lifecycle are left as they are.
    pub fn destroy(&self) {
        tracing::debug!(target: targets::COORDINATOR, "destroying modal overlay");
        self.bus.emit(Channel::Destroy);
    }

    /// Run `callback` with the `go_back` data whenever the view that is
    /// current now is current again when the data arrives.
    ///
    /// Replaces an earlier back callback for the same view. Returns the view
    /// registered under, or `None` if there is no current view.
    pub fn on_back<F>(&self, callback: F) -> Option<ViewId>
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        self.register(&self.back_callbacks, Arc::new(callback))
    }

    /// Run `callback` with the `hide` data whenever the view that is current
    /// now is current again when the modal closes.
    ///
    /// Replaces an earlier close callback for the same view. Returns the view
    /// registered under, or `None` if there is no current view.
    pub fn on_close<F>(&self, callback: F) -> Option<ViewId>
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        self.register(&self.close_callbacks, Arc::new(callback))
    }

    fn register(&self, registry: &CallbackRegistry<P>, callback: ViewCallback<P>) -> Option<ViewId> {
        let Some(view) = self.history.current_view() else {
            tracing::warn!(
                target: targets::COORDINATOR,
                kind = %registry.kind(),
                "no current view, callback not registered"
            );
            return None;
        };

        registry.register(view.view_id.clone(), callback);
        Some(view.view_id)
    }

    fn navigate(&self, state: &str, params: Option<&P>) -> Result<()> {
        let _span =
            tracing::debug_span!(target: targets::COORDINATOR, span_names::COORDINATOR, state).entered();
        self.router.go(state, params).map_err(|source| {
            tracing::warn!(target: targets::COORDINATOR, state, error = %source, "router rejected navigation");
            NavError::navigation(state, source)
        })
    }
}

impl<P> ModalNav<P> {
    /// The current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.lifecycle.with(Lifecycle::state)
    }

    /// Whether a modal is open.
    pub fn is_active(&self) -> bool {
        self.lifecycle.with(Lifecycle::is_active)
    }

    /// Emitted after every lifecycle transition.
    pub fn lifecycle_changed(&self) -> &Signal<LifecycleState> {
        &self.lifecycle_changed
    }

    /// The options the overlay was created with.
    pub fn options(&self) -> &ModalOptions {
        &self.options
    }

    /// The overlay shell.
    pub fn template(&self) -> &OverlayTemplate {
        &self.template
    }

    /// The overlay instance.
    pub fn overlay(&self) -> &Arc<dyn OverlayHandle> {
        &self.overlay
    }

    /// The bus the coordinator publishes on.
    pub fn bus(&self) -> &Arc<ModalBus<P>> {
        &self.bus
    }

    /// Callbacks registered with [`on_back`](ModalNav::on_back).
    pub fn back_callbacks(&self) -> &CallbackRegistry<P> {
        &self.back_callbacks
    }

    /// Callbacks registered with [`on_close`](ModalNav::on_close).
    pub fn close_callbacks(&self) -> &CallbackRegistry<P> {
        &self.close_callbacks
    }
}

impl<P> Drop for ModalNav<P> {
    fn drop(&mut self) {
        for (channel, id) in self.connections.drain(..) {
            self.bus.disconnect(channel, id);
        }
    }
}

impl<P> std::fmt::Debug for ModalNav<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalNav")
            .field("state", &self.state())
            .field("options", &self.options)
            .field("template", &self.template)
            .field("back_callbacks", &self.back_callbacks)
            .field("close_callbacks", &self.close_callbacks)
            .finish_non_exhaustive()
    }
}

/// The single persistent handler for a data channel: resolve the view that
/// is current at fire time and dispatch to its callback.
fn route_to_current_view<P>(
    history: Arc<dyn ViewHistory>,
    registry: Arc<CallbackRegistry<P>>,
) -> impl Fn(&P) + Send + Sync + 'static
where
    P: 'static,
{
    move |payload: &P| {
        let current = history.current_view();
        registry.dispatch(current.as_ref(), payload);
    }
}
