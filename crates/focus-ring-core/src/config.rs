//! Focus ring configuration.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Id of the injected style element when none is configured.
pub const DEFAULT_STYLESHEET_ID: &str = "keyboard-only-focus-ring-stylesheet";

/// Marker class present on the root container in keyboard mode.
pub const FOCUS_RING_ENABLED_CLASS_NAME: &str = "js-focus-ring";

/// Marker class present on the root container in pointer mode.
pub const FOCUS_RING_DISABLED_CLASS_NAME: &str = "js-no-focus-ring";

/// The pair of mutually exclusive marker classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerClasses {
    pub enabled: SmolStr,
    pub disabled: SmolStr,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            enabled: SmolStr::new_static(FOCUS_RING_ENABLED_CLASS_NAME),
            disabled: SmolStr::new_static(FOCUS_RING_DISABLED_CLASS_NAME),
        }
    }
}

impl MarkerClasses {
    pub fn new(enabled: impl Into<SmolStr>, disabled: impl Into<SmolStr>) -> Self {
        Self {
            enabled: enabled.into(),
            disabled: disabled.into(),
        }
    }

    /// The class to show for `enabled`, and the one to clear.
    pub fn select(&self, enabled: bool) -> (&str, &str) {
        if enabled {
            (self.enabled.as_str(), self.disabled.as_str())
        } else {
            (self.disabled.as_str(), self.enabled.as_str())
        }
    }
}

/// Options for mounting a focus ring. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusRingConfig {
    /// Initial mode: `true` starts in keyboard mode.
    pub default_enabled: bool,
    /// Id of the injected style element.
    pub stylesheet_id: SmolStr,
    pub class_names: MarkerClasses,
}

impl Default for FocusRingConfig {
    fn default() -> Self {
        Self {
            default_enabled: true,
            stylesheet_id: SmolStr::new_static(DEFAULT_STYLESHEET_ID),
            class_names: MarkerClasses::default(),
        }
    }
}

impl FocusRingConfig {
    pub fn with_default_enabled(mut self, enabled: bool) -> Self {
        self.default_enabled = enabled;
        self
    }

    pub fn with_stylesheet_id(mut self, id: impl Into<SmolStr>) -> Self {
        self.stylesheet_id = id.into();
        self
    }

    pub fn with_class_names(mut self, class_names: MarkerClasses) -> Self {
        self.class_names = class_names;
        self
    }

    /// Build from optional overrides, keeping defaults for anything unset.
    pub fn from_options(default_enabled: Option<bool>, stylesheet_id: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(enabled) = default_enabled {
            config.default_enabled = enabled;
        }
        if let Some(id) = stylesheet_id {
            config.stylesheet_id = SmolStr::new(id);
        }
        config
    }
}
