//! Dioxus bindings: hook, wrapper component and context provider.
//!
//! ```rust,ignore
//! rsx! {
//!     KeyboardFocusRingProvider { default_enabled: false,
//!         Toolbar {}
//!     }
//! }
//!
//! #[component]
//! fn Toolbar() -> Element {
//!     let keyboard = use_keyboard_focus_ring_enabled();
//!     rsx! { button { class: if keyboard { "kbd" } else { "" }, "Save" } }
//! }
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use focus_ring_core::{ChildContent, FocusRingConfig};

use crate::document::mount_focus_ring;

/// Content of a [`KeyboardFocusRing`].
pub type FocusRingChildren = ChildContent<Element>;

/// Mount a focus ring for the lifetime of the calling component.
///
/// The ring is created on first render from `config`; later changes to
/// `config` are ignored. The returned memo updates on every mode change.
pub fn use_keyboard_focus_ring(config: FocusRingConfig) -> Memo<bool> {
    let enabled = use_signal(|| config.default_enabled);

    let ring = use_hook(move || {
        let ring = Rc::new(mount_focus_ring(&config));
        if !ring.is_mounted() {
            tracing::debug!(
                stylesheet_id = %config.stylesheet_id,
                enabled = config.default_enabled,
                "focus ring hook has no document, mode is fixed"
            );
        }
        ring.on_change(move |value| {
            let mut enabled = enabled;
            enabled.set(value);
        });
        ring
    });
    use_drop(move || ring.unmount());

    use_memo(move || enabled())
}

/// Wraps `content`, handing it the current mode.
#[component]
pub fn KeyboardFocusRing(
    default_enabled: Option<bool>,
    #[props(into)] stylesheet_id: Option<String>,
    #[props(default = FocusRingChildren::Passthrough(VNode::empty()))] content: FocusRingChildren,
) -> Element {
    let config = FocusRingConfig::from_options(default_enabled, stylesheet_id.as_deref());
    let enabled = use_keyboard_focus_ring(config);
    content.resolve(enabled())
}

/// Mode shared by a [`KeyboardFocusRingProvider`] with its descendants.
#[derive(Clone, Copy)]
pub struct FocusRingContext {
    enabled: Memo<bool>,
}

impl FocusRingContext {
    pub fn enabled(&self) -> bool {
        (self.enabled)()
    }
}

/// Mounts a focus ring and provides its mode to descendants.
///
/// Each provider owns its own ring; nested or sibling providers don't share
/// state.
#[component]
pub fn KeyboardFocusRingProvider(
    default_enabled: Option<bool>,
    #[props(into)] stylesheet_id: Option<String>,
    children: Element,
) -> Element {
    let config = FocusRingConfig::from_options(default_enabled, stylesheet_id.as_deref());
    let enabled = use_keyboard_focus_ring(config);
    use_context_provider(|| FocusRingContext { enabled });
    children
}

/// Current mode from the nearest provider. `true` outside any provider.
pub fn use_keyboard_focus_ring_enabled() -> bool {
    try_use_context::<FocusRingContext>().is_none_or(|ctx| ctx.enabled())
}
