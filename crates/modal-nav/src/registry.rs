//! Per-view callback registry.
//!
//! A registry maps a [`ViewId`] to at most one callback. Dispatch resolves the
//! callback from the view that is current *when the event fires*, not when the
//! callback was registered, because the host's navigation stack can advance or
//! unwind in between.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use modal_nav_core::logging::targets;
use parking_lot::RwLock;

use crate::view::{ViewId, ViewRef};

/// A registered view callback.
pub type ViewCallback<P> = Arc<dyn Fn(&P) + Send + Sync>;

/// Which data event a registry serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// Callbacks fired by `go_back` with data.
    Back,
    /// Callbacks fired by `hide` with data.
    Close,
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Back => f.write_str("back"),
            Self::Close => f.write_str("close"),
        }
    }
}

/// Map from view id to a single callback.
pub struct CallbackRegistry<P> {
    kind: CallbackKind,
    callbacks: RwLock<HashMap<ViewId, ViewCallback<P>>>,
}

impl<P> CallbackRegistry<P> {
    /// An empty registry for `kind` events.
    pub fn new(kind: CallbackKind) -> Self {
        Self {
            kind,
            callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// The event kind this registry serves.
    pub fn kind(&self) -> CallbackKind {
        self.kind
    }

    /// Register `callback` for `view_id`, replacing any previous one.
    ///
    /// Returns `true` if a callback was replaced.
    pub fn register(&self, view_id: ViewId, callback: ViewCallback<P>) -> bool {
        let replaced = self.callbacks.write().insert(view_id.clone(), callback).is_some();
        tracing::debug!(
            target: targets::REGISTRY,
            kind = %self.kind,
            %view_id,
            replaced,
            "registered view callback"
        );
        replaced
    }

    /// Invoke the callback registered for `current`, if any.
    ///
    /// An absent view never matches a registration. Returns whether a
    /// callback ran. The registry is not locked while the callback runs.
    pub fn dispatch(&self, current: Option<&ViewRef>, payload: &P) -> bool {
        let Some(view) = current else {
            tracing::debug!(target: targets::REGISTRY, kind = %self.kind, "no current view, nothing to dispatch");
            return false;
        };

        let callback = self.callbacks.read().get(&view.view_id).cloned();
        match callback {
            Some(callback) => {
                tracing::trace!(target: targets::REGISTRY, kind = %self.kind, view_id = %view.view_id, "dispatching view callback");
                callback(payload);
                true
            }
            None => {
                tracing::trace!(target: targets::REGISTRY, kind = %self.kind, view_id = %view.view_id, "no callback for current view");
                false
            }
        }
    }

    /// Whether a callback is registered for `view_id`.
    pub fn contains(&self, view_id: &ViewId) -> bool {
        self.callbacks.read().contains_key(view_id)
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.read().len()
    }

    /// Whether no callback is registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.read().is_empty()
    }

    /// Remove every callback.
    pub fn clear(&self) {
        self.callbacks.write().clear();
    }
}

impl<P> fmt::Debug for CallbackRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<ViewId> = self.callbacks.read().keys().cloned().collect();
        ids.sort();
        f.debug_struct("CallbackRegistry")
            .field("kind", &self.kind)
            .field("views", &ids)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> ViewCallback<String> {
        let log = log.clone();
        Arc::new(move |payload: &String| log.lock().push(format!("{tag}:{payload}")))
    }

    #[test]
    fn test_dispatch_to_current_view() {
        let registry = CallbackRegistry::new(CallbackKind::Back);
        let log = Arc::new(Mutex::new(Vec::new()));

        registry.register("v1".into(), recorder(&log, "v1"));
        registry.register("v2".into(), recorder(&log, "v2"));

        assert!(registry.dispatch(Some(&ViewRef::new("v2")), &"data".to_string()));
        assert_eq!(*log.lock(), vec!["v2:data".to_string()]);
    }

    #[test]
    fn test_reregistration_replaces() {
        let registry = CallbackRegistry::new(CallbackKind::Close);
        let log = Arc::new(Mutex::new(Vec::new()));

        assert!(!registry.register("x".into(), recorder(&log, "first")));
        assert!(registry.register("x".into(), recorder(&log, "second")));
        assert_eq!(registry.len(), 1);

        registry.dispatch(Some(&ViewRef::new("x")), &"ok".to_string());
        assert_eq!(*log.lock(), vec!["second:ok".to_string()]);
    }

    #[test]
    fn test_unknown_or_absent_view_is_noop() {
        let registry = CallbackRegistry::new(CallbackKind::Back);
        let log = Arc::new(Mutex::new(Vec::new()));
        registry.register("v1".into(), recorder(&log, "v1"));

        assert!(!registry.dispatch(Some(&ViewRef::new("other")), &"d".to_string()));
        assert!(!registry.dispatch(None, &"d".to_string()));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_callback_may_register_during_dispatch() {
        let registry = Arc::new(CallbackRegistry::<u32>::new(CallbackKind::Back));

        let inner = Arc::downgrade(&registry);
        registry.register(
            "v1".into(),
            Arc::new(move |_: &u32| {
                if let Some(registry) = inner.upgrade() {
                    registry.register("v2".into(), Arc::new(|_: &u32| {}));
                }
            }),
        );

        assert!(registry.dispatch(Some(&ViewRef::new("v1")), &1));
        assert!(registry.contains(&ViewId::new("v2")));
    }

    #[test]
    fn test_clear() {
        let registry = CallbackRegistry::<()>::new(CallbackKind::Close);
        registry.register("a".into(), Arc::new(|_: &()| {}));
        assert!(!registry.is_empty());

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.kind(), CallbackKind::Close);
    }
}
