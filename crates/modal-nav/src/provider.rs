//! Pre-construction configuration and the single coordinator instance.

use std::sync::{Arc, OnceLock};

use modal_nav_core::logging::targets;

use crate::coordinator::{ModalNav, ModalServices};
use crate::error::ConfigError;
use crate::options::{ModalOptions, ModalOptionsPatch};
use crate::template::OverlayTemplate;

/// Configures and owns the application's one [`ModalNav`].
///
/// Options can be changed until the first call to [`get`](Self::get). From
/// then on the provider hands out the same coordinator every time and
/// configuration changes are rejected.
///
/// # Example
///
/// ```ignore
/// let mut provider = ModalNavProvider::new();
/// provider.set_modal_options(ModalOptionsPatch::new().animation("fade-in"))?;
///
/// let nav = provider.get(services);
/// nav.show("modal.settings", None)?;
/// ```
pub struct ModalNavProvider<P = serde_json::Value> {
    options: ModalOptions,
    template: OverlayTemplate,
    instance: OnceLock<Arc<ModalNav<P>>>,
}

impl<P: Send + Sync + 'static> Default for ModalNavProvider<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Send + Sync + 'static> ModalNavProvider<P> {
    /// A provider with default options and overlay template.
    pub fn new() -> Self {
        Self {
            options: ModalOptions::default(),
            template: OverlayTemplate::default(),
            instance: OnceLock::new(),
        }
    }

    /// Merge `patch` over the current options. Absent fields keep their
    /// current value.
    pub fn set_modal_options(&mut self, patch: ModalOptionsPatch) -> Result<(), ConfigError> {
        self.ensure_unconstructed()?;
        self.options.merge(patch);
        tracing::debug!(target: targets::PROVIDER, options = ?self.options, "modal options updated");
        Ok(())
    }

    /// Rename the navigation viewport embedded in the overlay.
    pub fn set_viewport_name(&mut self, name: impl Into<String>) -> Result<(), ConfigError> {
        self.ensure_unconstructed()?;
        self.template = OverlayTemplate::new(name);
        Ok(())
    }

    /// The options the coordinator is (or will be) built with.
    pub fn modal_options(&self) -> &ModalOptions {
        &self.options
    }

    /// The overlay template the coordinator is (or will be) built with.
    pub fn template(&self) -> &OverlayTemplate {
        &self.template
    }

    /// Whether [`get`](Self::get) has built the coordinator.
    pub fn is_constructed(&self) -> bool {
        self.instance.get().is_some()
    }

    /// The coordinator, if it has been built.
    pub fn instance(&self) -> Option<Arc<ModalNav<P>>> {
        self.instance.get().cloned()
    }

    /// Build the coordinator on first call; return the same instance after.
    ///
    /// `services` is only used by the call that builds the coordinator.
    pub fn get(&self, services: ModalServices<P>) -> Arc<ModalNav<P>> {
        if let Some(nav) = self.instance.get() {
            tracing::trace!(target: targets::PROVIDER, "coordinator already constructed, ignoring services");
            return nav.clone();
        }

        self.instance
            .get_or_init(|| {
                tracing::info!(
                    target: targets::PROVIDER,
                    viewport = self.template.viewport_name(),
                    "constructing modal navigation coordinator"
                );
                Arc::new(ModalNav::with_template(
                    services,
                    self.options.clone(),
                    self.template.clone(),
                ))
            })
            .clone()
    }

    fn ensure_unconstructed(&self) -> Result<(), ConfigError> {
        if self.is_constructed() {
            tracing::warn!(target: targets::PROVIDER, "configuration change after construction rejected");
            return Err(ConfigError::AlreadyConstructed);
        }
        Ok(())
    }
}

impl<P> std::fmt::Debug for ModalNavProvider<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalNavProvider")
            .field("options", &self.options)
            .field("template", &self.template)
            .field("constructed", &self.instance.get().is_some())
            .finish()
    }
}
