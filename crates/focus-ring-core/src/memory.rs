//! In-memory [`DocumentHost`] for tests and non-browser contexts.
//!
//! Models just enough of a DOM document for the focus ring: style elements in
//! the head, the class list of the root container, and document-level
//! listeners with browser-like dispatch rules.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smol_str::SmolStr;

use crate::HostError;
use crate::event::{DocumentEvent, EventKind};
use crate::host::{DocumentHost, EventHandler, RuleInsertion};

/// A `<style>` element in the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub id: SmolStr,
    pub media: SmolStr,
    /// Rules in sheet order.
    pub rules: Vec<String>,
}

struct RegisteredListener {
    id: u64,
    kind: EventKind,
    handler: EventHandler,
}

struct DocumentState {
    head: Vec<StyleElement>,
    /// Class tokens of the root container; `None` when there is no root.
    root: Option<Vec<SmolStr>>,
    listeners: Vec<RegisteredListener>,
    next_listener: u64,
    rule_insertion: bool,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            head: Vec::new(),
            root: Some(Vec::new()),
            listeners: Vec::new(),
            next_listener: 0,
            rule_insertion: true,
        }
    }
}

/// Shared handle to an in-memory document. Clones refer to the same document.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl std::fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryDocument")
            .field("head", &state.head)
            .field("root", &state.root)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

/// Listener registration on a [`MemoryDocument`]. Dropping it unregisters.
pub struct MemoryListener {
    id: u64,
    state: Weak<RefCell<DocumentState>>,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().listeners.retain(|l| l.id != self.id);
        }
    }
}

impl MemoryDocument {
    /// An empty document with a root container and rule insertion support.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose root container has not been created yet.
    pub fn without_root() -> Self {
        let doc = Self::default();
        doc.state.borrow_mut().root = None;
        doc
    }

    /// Toggle whether new style sheets support `insertRule`.
    pub fn with_rule_insertion(self, supported: bool) -> Self {
        self.state.borrow_mut().rule_insertion = supported;
        self
    }

    /// Create the root container if it is missing. Existing classes are kept.
    pub fn attach_root(&self) {
        let mut state = self.state.borrow_mut();
        if state.root.is_none() {
            state.root = Some(Vec::new());
        }
    }

    /// Deliver `event` to the listeners registered for its kind.
    ///
    /// Follows DOM dispatch: the listener list is captured when dispatch
    /// starts, so listeners added by a handler are not invoked for this
    /// event, and listeners removed by a handler are skipped if they have
    /// not run yet. Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &DocumentEvent) -> usize {
        let snapshot: Vec<(u64, EventHandler)> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == event.kind)
            .map(|l| (l.id, l.handler.clone()))
            .collect();

        let mut invoked = 0;
        for (id, handler) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            handler(event);
            invoked += 1;
        }
        invoked
    }

    fn is_registered(&self, id: u64) -> bool {
        self.state.borrow().listeners.iter().any(|l| l.id == id)
    }

    /// The root container's `className`, or `None` without a root.
    pub fn root_class_name(&self) -> Option<String> {
        self.state
            .borrow()
            .root
            .as_ref()
            .map(|classes| classes.join(" "))
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.state
            .borrow()
            .root
            .as_ref()
            .is_some_and(|classes| classes.iter().any(|c| c == class))
    }

    /// The first style element with `id`.
    pub fn style(&self, id: &str) -> Option<StyleElement> {
        self.state.borrow().head.iter().find(|s| s.id == id).cloned()
    }

    /// Rules of the style element with `id`; empty if it doesn't exist.
    pub fn style_rules(&self, id: &str) -> Vec<String> {
        self.style(id).map(|s| s.rules).unwrap_or_default()
    }

    /// Number of style elements in the head.
    pub fn style_count(&self) -> usize {
        self.state.borrow().head.len()
    }

    /// Number of style elements carrying `id`.
    pub fn style_count_with_id(&self, id: &str) -> usize {
        self.state.borrow().head.iter().filter(|s| s.id == id).count()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Kinds of all registered listeners, in registration order.
    pub fn listener_kinds(&self) -> Vec<EventKind> {
        self.state
            .borrow()
            .listeners
            .iter()
            .map(|l| l.kind)
            .collect()
    }
}

impl DocumentHost for MemoryDocument {
    type Listener = MemoryListener;

    fn listen(&self, kind: EventKind, handler: EventHandler) -> Result<MemoryListener, HostError> {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener;
        state.next_listener += 1;
        state.listeners.push(RegisteredListener { id, kind, handler });
        Ok(MemoryListener {
            id,
            state: Rc::downgrade(&self.state),
        })
    }

    fn has_style(&self, id: &str) -> bool {
        self.state.borrow().head.iter().any(|s| s.id == id)
    }

    fn insert_style(&self, id: &str, rule: &str) -> Result<RuleInsertion, HostError> {
        let mut state = self.state.borrow_mut();
        let supported = state.rule_insertion;
        state.head.push(StyleElement {
            id: SmolStr::new(id),
            media: SmolStr::new_static("screen"),
            rules: if supported {
                vec![rule.to_string()]
            } else {
                Vec::new()
            },
        });
        Ok(if supported {
            RuleInsertion::Inserted
        } else {
            RuleInsertion::Unsupported
        })
    }

    fn remove_style(&self, id: &str) -> bool {
        let mut state = self.state.borrow_mut();
        match state.head.iter().position(|s| s.id == id) {
            Some(index) => {
                state.head.remove(index);
                true
            }
            None => false,
        }
    }

    fn add_root_class(&self, class: &str) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        let classes = state.root.as_mut().ok_or(HostError::MissingRoot)?;
        if !classes.iter().any(|c| c == class) {
            classes.push(SmolStr::new(class));
        }
        Ok(())
    }

    fn remove_root_class(&self, class: &str) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        let classes = state.root.as_mut().ok_or(HostError::MissingRoot)?;
        classes.retain(|c| c != class);
        Ok(())
    }
}
