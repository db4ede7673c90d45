//! Document abstraction the tracker and applier operate on.
//!
//! This is the seam between the mode logic and the platform. The browser
//! implementation lives in `focus-ring-browser`; [`MemoryDocument`] is an
//! in-process implementation for tests and non-browser contexts.
//!
//! [`MemoryDocument`]: crate::memory::MemoryDocument

use std::rc::Rc;

use crate::HostError;
use crate::event::{DocumentEvent, EventKind};

/// Callback invoked with each delivered event.
pub type EventHandler = Rc<dyn Fn(&DocumentEvent)>;

/// Outcome of inserting the outline rule into a new style element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleInsertion {
    Inserted,
    /// The element was created but its sheet has no `insertRule`.
    Unsupported,
}

/// A document-like object: head, root container, and global listeners.
///
/// Implementations are cheap handles onto shared state (cloning shares the
/// same document).
pub trait DocumentHost: Clone + 'static {
    /// Registration guard. Dropping it removes the listener.
    type Listener: 'static;

    /// Register `handler` for document-level events of `kind`.
    fn listen(&self, kind: EventKind, handler: EventHandler) -> Result<Self::Listener, HostError>;

    /// Whether a style element with `id` exists.
    fn has_style(&self, id: &str) -> bool;

    /// Append a `<style media="screen" id={id}>` to the head and insert
    /// `rule` at index 0 of its sheet, if the sheet supports insertion.
    fn insert_style(&self, id: &str, rule: &str) -> Result<RuleInsertion, HostError>;

    /// Remove the element with `id`. Returns whether anything was removed.
    fn remove_style(&self, id: &str) -> bool;

    /// Add a class token to the root container.
    fn add_root_class(&self, class: &str) -> Result<(), HostError>;

    /// Remove a class token from the root container.
    fn remove_root_class(&self, class: &str) -> Result<(), HostError>;
}
