//! Modal Navigation Walkthrough
//!
//! Drives a coordinator against a small in-memory host:
//! - open a contact picker modal over an inbox page
//! - move forward and back inside the modal
//! - close it and hand the selection back to the inbox
//!
//! Run with: RUST_LOG=modal_nav=debug cargo run -p modal-nav --example walkthrough

use std::sync::Arc;

use modal_nav::{
    BoxError, Direction, ModalNavProvider, ModalOptions, ModalOptionsPatch, ModalServices,
    NextViewOptions, OverlayFactory, OverlayHandle, OverlayTemplate, StateRouter,
    TransitionDirector, ViewHistory, ViewRef,
};
use parking_lot::Mutex;
use serde_json::{Value, json};

/// Prints what a real overlay would do.
struct ConsoleOverlay {
    animation: String,
}

impl OverlayHandle for ConsoleOverlay {
    fn show(&self) {
        println!("  [overlay] show ({})", self.animation);
    }

    fn hide(&self) {
        println!("  [overlay] hide");
    }

    fn destroy(&self) {
        println!("  [overlay] destroy");
    }
}

struct ConsoleOverlayFactory;

impl OverlayFactory for ConsoleOverlayFactory {
    fn create(&self, template: &OverlayTemplate, options: &ModalOptions) -> Arc<dyn OverlayHandle> {
        println!("  [overlay] created from:\n{}", template.markup());
        Arc::new(ConsoleOverlay {
            animation: options.animation.clone(),
        })
    }
}

/// History store backed by a stack of visited views.
#[derive(Default)]
struct StackHistory {
    back: Mutex<Option<ViewRef>>,
    current: Mutex<Option<ViewRef>>,
    stack: Mutex<Vec<ViewRef>>,
}

impl StackHistory {
    fn visit(&self, view: ViewRef) {
        let previous = self.current.lock().replace(view.clone());
        *self.back.lock() = previous;
        self.stack.lock().push(view);
    }

    fn describe(&self) -> String {
        let name = |view: &Option<ViewRef>| {
            view.as_ref()
                .map_or_else(|| "-".to_string(), |v| v.view_id.to_string())
        };
        format!(
            "back={} current={}",
            name(&*self.back.lock()),
            name(&*self.current.lock())
        )
    }
}

impl ViewHistory for StackHistory {
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
        println!("  [history] next transition: {options:?}");
    }

    fn go_back(&self) {
        let mut stack = self.stack.lock();
        stack.pop();
        *self.current.lock() = stack.last().cloned();
        *self.back.lock() = stack.len().checked_sub(2).and_then(|i| stack.get(i).cloned());
    }
}

/// Router that knows a fixed set of states.
struct Router {
    history: Arc<StackHistory>,
    known: &'static [&'static str],
}

impl StateRouter<Value> for Router {
    fn go(&self, state: &str, params: Option<&Value>) -> Result<(), BoxError> {
        if !self.known.iter().any(|known| *known == state) {
            return Err(format!("unknown state '{state}'").into());
        }
        println!("  [router] -> {state} {}", params.map(Value::to_string).unwrap_or_default());
        self.history.visit(ViewRef::new(state).with_state(state));
        Ok(())
    }
}

struct Director;

impl TransitionDirector for Director {
    fn next_direction(&self, direction: Direction) {
        println!("  [director] next direction: {direction}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let history = Arc::new(StackHistory::default());
    history.visit(ViewRef::new("home"));
    history.visit(ViewRef::new("inbox"));

    let mut provider = ModalNavProvider::<Value>::new();
    provider.set_modal_options(ModalOptionsPatch::from_toml_str(
        r#"
        animation = "slide-in-up"
        focus_first_input = true
        "#,
    )?)?;

    let services = ModalServices::new(
        Arc::new(ConsoleOverlayFactory),
        history.clone(),
        Arc::new(Router {
            history: history.clone(),
            known: &["contacts.list", "contacts.detail"],
        }),
        Arc::new(Director),
    );
    let nav = provider.get(services);

    println!("before modal: {}", history.describe());

    nav.on_close(|selection| println!("  [inbox] picked {selection}"));

    println!("\nopen picker");
    nav.show("contacts.list", None)?;
    nav.on_back(|filter| println!("  [contacts.list] returned with {filter}"));

    println!("\nopen detail");
    nav.go("contacts.detail", Some(json!({ "id": 42 })))?;

    println!("\nback to list");
    nav.go_back(Some(json!({ "filter": "starred" })));

    println!("\nunknown state");
    if let Err(err) = nav.go("contacts.missing", None) {
        println!("  error: {err}");
    }

    println!("\nclose picker");
    nav.hide(Some(json!({ "contact": 42, "name": "Ada" })))?;
    println!("after modal: {}", history.describe());

    nav.destroy();
    Ok(())
}
