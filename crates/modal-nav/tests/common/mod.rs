//! Recording host doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use modal_nav::{
    BoxError, Direction, ModalBus, ModalNav, ModalOptions, ModalServices, NextViewOptions,
    OverlayFactory, OverlayHandle, OverlayTemplate, StateRouter, TransitionDirector, ViewHistory,
    ViewRef,
};
use parking_lot::Mutex;
use serde_json::Value;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
pub struct MockOverlay {
    pub shows: AtomicUsize,
    pub hides: AtomicUsize,
    pub destroys: AtomicUsize,
}

impl MockOverlay {
    pub fn shows(&self) -> usize {
        self.shows.load(Ordering::SeqCst)
    }

    pub fn hides(&self) -> usize {
        self.hides.load(Ordering::SeqCst)
    }

    pub fn destroys(&self) -> usize {
        self.destroys.load(Ordering::SeqCst)
    }
}

impl OverlayHandle for MockOverlay {
    fn show(&self) {
        self.shows.fetch_add(1, Ordering::SeqCst);
    }

    fn hide(&self) {
        self.hides.fetch_add(1, Ordering::SeqCst);
    }

    fn destroy(&self) {
        self.destroys.fetch_add(1, Ordering::SeqCst);
    }
}

/// Hands out one shared [`MockOverlay`] and records what it was asked for.
#[derive(Default)]
pub struct MockOverlayFactory {
    pub overlay: Arc<MockOverlay>,
    pub created: Mutex<Vec<(OverlayTemplate, ModalOptions)>>,
}

impl OverlayFactory for MockOverlayFactory {
    fn create(&self, template: &OverlayTemplate, options: &ModalOptions) -> Arc<dyn OverlayHandle> {
        self.created.lock().push((template.clone(), options.clone()));
        self.overlay.clone()
    }
}

/// A view history with a simple visit stack.
///
/// `visit` pushes a view and moves the pointers; `go_back` pops one.
/// The pointer setters write the pointers only, as a real store would.
#[derive(Default)]
pub struct MockHistory {
    back: Mutex<Option<ViewRef>>,
    current: Mutex<Option<ViewRef>>,
    stack: Mutex<Vec<ViewRef>>,
    pub next_options: Mutex<Vec<NextViewOptions>>,
    pub go_back_calls: AtomicUsize,
}

impl MockHistory {
    pub fn visit(&self, view: ViewRef) {
        let mut stack = self.stack.lock();
        *self.back.lock() = self.current.lock().clone();
        *self.current.lock() = Some(view.clone());
        stack.push(view);
    }

    pub fn set_pointers(&self, back: Option<&str>, current: Option<&str>) {
        *self.back.lock() = back.map(ViewRef::new);
        *self.current.lock() = current.map(ViewRef::new);
    }

    pub fn current_id(&self) -> Option<String> {
        self.current.lock().as_ref().map(|v| v.view_id.to_string())
    }

    pub fn back_id(&self) -> Option<String> {
        self.back.lock().as_ref().map(|v| v.view_id.to_string())
    }
}

impl ViewHistory for MockHistory {
    fn back_view(&self) -> Option<ViewRef> {
        self.back.lock().clone()
    }

    fn set_back_view(&self, view: Option<ViewRef>) {
        *self.back.lock() = view;
    }

    fn current_view(&self) -> Option<ViewRef> {
        self.current.lock().clone()
    }

    fn set_current_view(&self, view: Option<ViewRef>) {
        *self.current.lock() = view;
    }

    fn next_view_options(&self, options: NextViewOptions) {
        self.next_options.lock().push(options);
    }

    fn go_back(&self) {
        self.go_back_calls.fetch_add(1, Ordering::SeqCst);
        let mut stack = self.stack.lock();
        stack.pop();
        let len = stack.len();
        *self.current.lock() = stack.last().cloned();
        *self.back.lock() = len.checked_sub(2).and_then(|i| stack.get(i).cloned());
    }
}

#[derive(Debug, thiserror::Error)]
#[error("no such state: {0}")]
pub struct UnknownState(pub String);

/// Records every navigation and visits a view named after the state.
pub struct MockRouter {
    history: Arc<MockHistory>,
    pub calls: Mutex<Vec<(String, Option<Value>)>>,
    pub reject: Mutex<Option<String>>,
}

impl MockRouter {
    pub fn new(history: Arc<MockHistory>) -> Self {
        Self {
            history,
            calls: Mutex::new(Vec::new()),
            reject: Mutex::new(None),
        }
    }

    pub fn reject(&self, state: &str) {
        *self.reject.lock() = Some(state.to_string());
    }

    pub fn states(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(s, _)| s.clone()).collect()
    }
}

impl StateRouter<Value> for MockRouter {
    fn go(&self, state: &str, params: Option<&Value>) -> Result<(), BoxError> {
        self.calls.lock().push((state.to_string(), params.cloned()));
        if self.reject.lock().as_deref() == Some(state) {
            return Err(Box::new(UnknownState(state.to_string())));
        }
        self.history.visit(ViewRef::new(state).with_state(state));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDirector {
    pub directions: Mutex<Vec<Direction>>,
}

impl TransitionDirector for MockDirector {
    fn next_direction(&self, direction: Direction) {
        self.directions.lock().push(direction);
    }
}

/// All host doubles wired together.
pub struct Harness {
    pub factory: Arc<MockOverlayFactory>,
    pub history: Arc<MockHistory>,
    pub router: Arc<MockRouter>,
    pub director: Arc<MockDirector>,
}

impl Harness {
    pub fn new() -> Self {
        init_tracing();
        let history = Arc::new(MockHistory::default());
        Self {
            factory: Arc::new(MockOverlayFactory::default()),
            router: Arc::new(MockRouter::new(history.clone())),
            history,
            director: Arc::new(MockDirector::default()),
        }
    }

    pub fn overlay(&self) -> &MockOverlay {
        &self.factory.overlay
    }

    pub fn services(&self) -> ModalServices<Value> {
        ModalServices::new(
            self.factory.clone(),
            self.history.clone(),
            self.router.clone(),
            self.director.clone(),
        )
    }

    pub fn nav(&self) -> ModalNav<Value> {
        ModalNav::new(self.services(), ModalOptions::default())
    }

    pub fn nav_on(&self, bus: Arc<ModalBus<Value>>) -> ModalNav<Value> {
        ModalNav::new(self.services().with_bus(bus), ModalOptions::default())
    }
}

/// Collects every payload a callback receives.
#[derive(Clone, Default)]
pub struct Received(Arc<Mutex<Vec<Value>>>);

impl Received {
    pub fn callback(&self) -> impl Fn(&Value) + Send + Sync + 'static {
        let log = self.0.clone();
        move |payload: &Value| log.lock().push(payload.clone())
    }

    pub fn take(&self) -> Vec<Value> {
        std::mem::take(&mut *self.0.lock())
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }
}
