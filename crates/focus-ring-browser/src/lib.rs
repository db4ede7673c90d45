//! Browser DOM layer for keyboard-only focus rings.
//!
//! This crate implements `DocumentHost` over `web_sys::Document` and assumes
//! a `wasm32-unknown-unknown` target environment. On other targets there is
//! no document and rings mount detached.
//!
//! # Architecture
//!
//! - `document`: `WebDocument`, the DOM-backed host, and `mount_focus_ring`
//! - `components`: Dioxus hook, wrapper and provider (feature `dioxus`)
//!
//! # Re-exports
//!
//! This crate re-exports `focus-ring-core` for convenience, so consumers
//! only need to depend on `focus-ring-browser`.

// Re-export core crate
pub use focus_ring_core;
pub use focus_ring_core::*;

pub mod document;

#[cfg(feature = "dioxus")]
pub mod components;

pub use document::{WebDocument, document_event_from_web, mount_focus_ring};

#[cfg(feature = "dioxus")]
pub use components::{
    FocusRingChildren, FocusRingContext, KeyboardFocusRing, KeyboardFocusRingProvider,
    use_keyboard_focus_ring, use_keyboard_focus_ring_enabled,
};
