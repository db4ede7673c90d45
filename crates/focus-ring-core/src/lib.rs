//! focus-ring-core: keyboard-only focus rings without framework dependencies.
//!
//! Tracks whether the user is navigating by keyboard or by pointer and
//! reflects it in a document, so focus outlines can be shown for keyboard
//! navigation only.
//!
//! This crate provides:
//! - `InputMode` - the two-state machine and the listener set per state
//! - `InputModeTracker` - owns the mode and its document listeners
//! - `IndicatorApplier` - injects the outline rule and toggles marker classes
//! - `FocusRing` - the two wired together over a `DocumentHost`
//! - `MemoryDocument` - an in-process `DocumentHost` for tests and non-browser use
//!
//! The browser implementation of `DocumentHost` lives in `focus-ring-browser`.

pub mod applier;
pub mod children;
pub mod config;
pub mod error;
pub mod event;
pub mod focus_ring;
pub mod host;
pub mod memory;
pub mod mode;
pub mod tracker;

pub use applier::{IndicatorApplier, outline_rule};
pub use children::{ChildContent, FocusRingProps};
pub use config::{
    DEFAULT_STYLESHEET_ID, FOCUS_RING_DISABLED_CLASS_NAME, FOCUS_RING_ENABLED_CLASS_NAME,
    FocusRingConfig, MarkerClasses,
};
pub use error::HostError;
pub use event::{DocumentEvent, EventKind, TAB_KEY, TAB_KEY_CODE, parse_event_type};
pub use focus_ring::FocusRing;
pub use host::{DocumentHost, EventHandler, RuleInsertion};
pub use memory::{MemoryDocument, MemoryListener, StyleElement};
pub use mode::InputMode;
pub use smol_str::SmolStr;
pub use tracker::{ChangeCallback, InputModeTracker, SubscriberId};
