//! Keyboard/pointer mode state machine.
//!
//! Two states, two kinds of input:
//!
//! ```text
//!            Tab keydown
//!   Pointer ─────────────▶ Keyboard
//!      ▲                      │
//!      └──────────────────────┘
//!   click / dblclick / auxclick / contextmenu
//! ```
//!
//! Each state only listens for the inputs that can leave it, so redundant
//! input (a click while already in pointer mode) never reaches the tracker.

use crate::event::{DocumentEvent, EventKind};

const POINTER_SET: &[EventKind] = &[
    EventKind::Click,
    EventKind::DoubleClick,
    EventKind::AuxClick,
    EventKind::ContextMenu,
];

const KEYBOARD_SET: &[EventKind] = &[EventKind::KeyDown];

/// How the user is currently navigating the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Focus rings are shown.
    #[default]
    Keyboard,
    /// Focus rings are suppressed.
    Pointer,
}

impl InputMode {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            InputMode::Keyboard
        } else {
            InputMode::Pointer
        }
    }

    /// `true` in keyboard mode, i.e. focus rings enabled.
    pub fn is_keyboard(self) -> bool {
        matches!(self, InputMode::Keyboard)
    }

    /// The event kinds that must be listened to while in this mode.
    pub fn listener_set(self) -> &'static [EventKind] {
        match self {
            InputMode::Keyboard => POINTER_SET,
            InputMode::Pointer => KEYBOARD_SET,
        }
    }

    /// The mode `event` moves to, or `None` if it causes no transition.
    pub fn next(self, event: &DocumentEvent) -> Option<InputMode> {
        match self {
            InputMode::Pointer if event.is_tab() => Some(InputMode::Keyboard),
            InputMode::Keyboard if event.kind.is_pointer() => Some(InputMode::Pointer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_sets_are_disjoint() {
        let keyboard = InputMode::Keyboard.listener_set();
        let pointer = InputMode::Pointer.listener_set();
        assert_eq!(keyboard.len(), 4);
        assert_eq!(pointer, &[EventKind::KeyDown]);
        assert!(keyboard.iter().all(|kind| !pointer.contains(kind)));
        // Keyboard mode listens only for pointer kinds.
        assert!(keyboard.iter().all(|kind| kind.is_pointer()));
    }

    #[test]
    fn test_pointer_to_keyboard_on_tab() {
        assert_eq!(
            InputMode::Pointer.next(&DocumentEvent::tab()),
            Some(InputMode::Keyboard)
        );
        assert_eq!(InputMode::Pointer.next(&DocumentEvent::key_down("Escape")), None);
    }

    #[test]
    fn test_keyboard_to_pointer_on_any_click() {
        for event in [
            DocumentEvent::click(),
            DocumentEvent::double_click(),
            DocumentEvent::aux_click(),
            DocumentEvent::context_menu(),
        ] {
            assert_eq!(InputMode::Keyboard.next(&event), Some(InputMode::Pointer));
        }
    }

    #[test]
    fn test_redundant_input_is_noop() {
        assert_eq!(InputMode::Keyboard.next(&DocumentEvent::tab()), None);
        assert_eq!(InputMode::Pointer.next(&DocumentEvent::click()), None);
        assert_eq!(InputMode::Pointer.next(&DocumentEvent::context_menu()), None);
    }

    #[test]
    fn test_from_enabled() {
        assert_eq!(InputMode::from_enabled(true), InputMode::Keyboard);
        assert_eq!(InputMode::from_enabled(false), InputMode::Pointer);
        assert!(InputMode::default().is_keyboard());
    }
}
