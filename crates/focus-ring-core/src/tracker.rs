//! Input mode tracker: owns the mode and the document listeners that flip it.
//!
//! Only the listener set for the current mode is ever attached. On each
//! transition the outgoing set is detached, the mode updated and the incoming
//! set attached within the same handler call, so no event can observe both
//! sets or neither.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::event::DocumentEvent;
use crate::host::{DocumentHost, EventHandler};
use crate::mode::InputMode;

/// Change notification callback, called with the new `enabled` value.
pub type ChangeCallback = Rc<dyn Fn(bool)>;

/// Handle for removing a change subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

struct TrackerInner<H: DocumentHost> {
    host: H,
    mode: Cell<InputMode>,
    /// Guards for the attached listener set; `None` once stopped.
    listeners: RefCell<Option<Vec<H::Listener>>>,
    subscribers: RefCell<Vec<(SubscriberId, ChangeCallback)>>,
    next_subscriber: Cell<u64>,
}

impl<H: DocumentHost> TrackerInner<H> {
    fn attach(self: &Rc<Self>, mode: InputMode) -> Vec<H::Listener> {
        mode.listener_set()
            .iter()
            .filter_map(|&kind| {
                let weak: Weak<Self> = Rc::downgrade(self);
                let handler: EventHandler = Rc::new(move |event: &DocumentEvent| {
                    if let Some(inner) = weak.upgrade() {
                        inner.handle_event(event);
                    }
                });
                match self.host.listen(kind, handler) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        tracing::warn!(%kind, error = %e, "failed to attach input mode listener");
                        None
                    }
                }
            })
            .collect()
    }

    fn handle_event(self: &Rc<Self>, event: &DocumentEvent) {
        let current = self.mode.get();
        let Some(next) = current.next(event) else {
            return;
        };

        {
            let mut slot = self.listeners.borrow_mut();
            let Some(active) = slot.as_mut() else {
                return;
            };
            active.clear();
            self.mode.set(next);
            *active = self.attach(next);
        }

        tracing::trace!(from = ?current, to = ?next, kind = %event.kind, "input mode changed");
        self.notify(next.is_keyboard());
    }

    fn notify(&self, enabled: bool) {
        // Snapshot so callbacks may subscribe or unsubscribe.
        let callbacks: Vec<ChangeCallback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(enabled);
        }
    }
}

/// Tracks whether the user is navigating by keyboard or pointer.
///
/// Listeners are attached by [`start`](Self::start) and detached by
/// [`stop`](Self::stop) or on drop.
pub struct InputModeTracker<H: DocumentHost> {
    inner: Rc<TrackerInner<H>>,
}

impl<H: DocumentHost> InputModeTracker<H> {
    /// Start in the mode given by `default_enabled` and attach its listeners.
    pub fn start(host: H, default_enabled: bool) -> Self {
        let mode = InputMode::from_enabled(default_enabled);
        let inner = Rc::new(TrackerInner {
            host,
            mode: Cell::new(mode),
            listeners: RefCell::new(None),
            subscribers: RefCell::new(Vec::new()),
            next_subscriber: Cell::new(0),
        });
        let listeners = inner.attach(mode);
        *inner.listeners.borrow_mut() = Some(listeners);
        tracing::debug!(?mode, "input mode tracker started");
        Self { inner }
    }

    /// `true` while in keyboard mode.
    pub fn enabled(&self) -> bool {
        self.inner.mode.get().is_keyboard()
    }

    pub fn mode(&self) -> InputMode {
        self.inner.mode.get()
    }

    /// Whether listeners are still attached.
    pub fn is_running(&self) -> bool {
        self.inner.listeners.borrow().is_some()
    }

    pub fn host(&self) -> &H {
        &self.inner.host
    }

    /// Call `callback` synchronously with the new value on every mode change.
    pub fn on_change(&self, callback: impl Fn(bool) + 'static) -> SubscriberId {
        let id = SubscriberId(self.inner.next_subscriber.get());
        self.inner.next_subscriber.set(id.0 + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn off_change(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub, _)| *sub != id);
        subscribers.len() != before
    }

    /// Feed an event to the state machine, as the attached listeners do.
    ///
    /// Events the current mode does not listen for are ignored. Has no
    /// effect once stopped.
    pub fn handle_event(&self, event: &DocumentEvent) {
        self.inner.handle_event(event);
    }

    /// Detach the active listener set. Safe to call more than once.
    pub fn stop(&self) {
        let listeners = self.inner.listeners.borrow_mut().take();
        if let Some(listeners) = listeners {
            tracing::debug!(
                mode = ?self.inner.mode.get(),
                detached = listeners.len(),
                "input mode tracker stopped"
            );
        }
    }
}

impl<H: DocumentHost> Drop for InputModeTracker<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
