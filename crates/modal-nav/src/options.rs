//! Visual options for the modal overlay.
//!
//! [`ModalOptions`] is frozen once the coordinator is built. Before that, the
//! provider accepts [`ModalOptionsPatch`] values and merges every field that
//! is present over the current options.
//!
//! Patches can be written in code or loaded from configuration:
//!
//! ```
//! use modal_nav::{ModalOptions, ModalOptionsPatch};
//!
//! let patch = ModalOptionsPatch::from_toml_str(r#"
//! animation = "fade-in"
//! backdrop_click_to_close = false
//! "#)?;
//!
//! let options = ModalOptions::default().merged(patch);
//! assert_eq!(options.animation, "fade-in");
//! assert!(!options.backdrop_click_to_close);
//! assert!(options.hardware_back_button_close);
//! # Ok::<(), modal_nav::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Animation used when no other is configured.
pub const DEFAULT_ANIMATION: &str = "slide-in-up";

/// Visual and input behavior of the modal overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalOptions {
    /// Name of the overlay's enter/leave animation.
    pub animation: String,
    /// Focus the first input when the overlay is shown.
    #[serde(alias = "focusFirstInput")]
    pub focus_first_input: bool,
    /// Close the overlay when the backdrop is clicked.
    #[serde(alias = "backdropClickToClose")]
    pub backdrop_click_to_close: bool,
    /// Close the overlay on the hardware back button.
    #[serde(alias = "hardwareBackButtonClose")]
    pub hardware_back_button_close: bool,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            animation: DEFAULT_ANIMATION.to_string(),
            focus_first_input: false,
            backdrop_click_to_close: true,
            hardware_back_button_close: true,
        }
    }
}

impl ModalOptions {
    /// Overwrite every field that is present in `patch`.
    pub fn merge(&mut self, patch: ModalOptionsPatch) {
        let ModalOptionsPatch {
            animation,
            focus_first_input,
            backdrop_click_to_close,
            hardware_back_button_close,
        } = patch;

        if let Some(animation) = animation {
            self.animation = animation;
        }
        if let Some(focus) = focus_first_input {
            self.focus_first_input = focus;
        }
        if let Some(close) = backdrop_click_to_close {
            self.backdrop_click_to_close = close;
        }
        if let Some(close) = hardware_back_button_close {
            self.hardware_back_button_close = close;
        }
    }

    /// Consuming variant of [`merge`](Self::merge).
    pub fn merged(mut self, patch: ModalOptionsPatch) -> Self {
        self.merge(patch);
        self
    }
}

/// A partial [`ModalOptions`]; absent fields leave the current value alone.
///
/// Accepts snake_case keys and the camelCase spellings used by web hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalOptionsPatch {
    pub animation: Option<String>,
    #[serde(alias = "focusFirstInput")]
    pub focus_first_input: Option<bool>,
    #[serde(alias = "backdropClickToClose")]
    pub backdrop_click_to_close: Option<bool>,
    #[serde(alias = "hardwareBackButtonClose")]
    pub hardware_back_button_close: Option<bool>,
}

impl ModalOptionsPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animation(mut self, animation: impl Into<String>) -> Self {
        self.animation = Some(animation.into());
        self
    }

    pub fn focus_first_input(mut self, focus: bool) -> Self {
        self.focus_first_input = Some(focus);
        self
    }

    pub fn backdrop_click_to_close(mut self, close: bool) -> Self {
        self.backdrop_click_to_close = Some(close);
        self
    }

    pub fn hardware_back_button_close(mut self, close: bool) -> Self {
        self.hardware_back_button_close = Some(close);
        self
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a patch from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a patch from a JSON object.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}
