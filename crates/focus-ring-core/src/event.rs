//! Document-level input events the mode tracker listens to.
//!
//! Only the handful of fields the tracker actually reads are carried over
//! from the platform event, so hosts without a real DOM can synthesize them.

use smol_str::SmolStr;

/// Legacy `KeyboardEvent.keyCode` value for the Tab key.
pub const TAB_KEY_CODE: u32 = 9;

/// Name of the Tab key in both `KeyboardEvent.key` and `KeyboardEvent.code`.
pub const TAB_KEY: &str = "Tab";

/// The document event types a tracker can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    Click,
    DoubleClick,
    /// Non-primary button click (e.g. middle button).
    AuxClick,
    ContextMenu,
}

impl EventKind {
    /// The DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::KeyDown => "keydown",
            EventKind::Click => "click",
            EventKind::DoubleClick => "dblclick",
            EventKind::AuxClick => "auxclick",
            EventKind::ContextMenu => "contextmenu",
        }
    }

    /// Whether this is one of the pointing-device kinds.
    pub fn is_pointer(self) -> bool {
        !matches!(self, EventKind::KeyDown)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a DOM event type name. Returns `None` for types the tracker ignores.
pub fn parse_event_type(s: &str) -> Option<EventKind> {
    match s {
        "keydown" => Some(EventKind::KeyDown),
        "click" => Some(EventKind::Click),
        "dblclick" => Some(EventKind::DoubleClick),
        "auxclick" => Some(EventKind::AuxClick),
        "contextmenu" => Some(EventKind::ContextMenu),
        _ => None,
    }
}

/// An input event delivered to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEvent {
    pub kind: EventKind,
    /// `KeyboardEvent.key`, if this is a keyboard event.
    pub key: Option<SmolStr>,
    /// `KeyboardEvent.code`, if this is a keyboard event.
    pub code: Option<SmolStr>,
    /// Legacy `KeyboardEvent.keyCode`. Zero is treated as absent.
    pub key_code: Option<u32>,
}

impl DocumentEvent {
    /// A bare event of the given kind with no key information.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            key: None,
            code: None,
            key_code: None,
        }
    }

    /// A `keydown` carrying `key` as its key name.
    pub fn key_down(key: impl Into<SmolStr>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::new(EventKind::KeyDown)
        }
    }

    /// A `keydown` for the Tab key, with both key and code set.
    pub fn tab() -> Self {
        Self::key_down(TAB_KEY).with_code(TAB_KEY)
    }

    pub fn click() -> Self {
        Self::new(EventKind::Click)
    }

    pub fn double_click() -> Self {
        Self::new(EventKind::DoubleClick)
    }

    pub fn aux_click() -> Self {
        Self::new(EventKind::AuxClick)
    }

    pub fn context_menu() -> Self {
        Self::new(EventKind::ContextMenu)
    }

    /// Set the physical key code (`KeyboardEvent.code`).
    pub fn with_code(mut self, code: impl Into<SmolStr>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the legacy numeric key code.
    pub fn with_key_code(mut self, key_code: u32) -> Self {
        self.key_code = (key_code != 0).then_some(key_code);
        self
    }

    /// Whether this event identifies the Tab key.
    ///
    /// Browsers disagree on which of `key`, `code` and `keyCode` they fill
    /// in, so a match on any one of them is enough.
    pub fn is_tab(&self) -> bool {
        if self.kind != EventKind::KeyDown {
            return false;
        }
        self.key.as_deref() == Some(TAB_KEY)
            || self.code.as_deref() == Some(TAB_KEY)
            || self.key_code == Some(TAB_KEY_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        let kinds = [
            EventKind::KeyDown,
            EventKind::Click,
            EventKind::DoubleClick,
            EventKind::AuxClick,
            EventKind::ContextMenu,
        ];
        for kind in kinds {
            assert_eq!(parse_event_type(kind.as_str()), Some(kind));
        }
        assert_eq!(parse_event_type("keyup"), None);
        assert_eq!(parse_event_type("mousedown"), None);
    }

    #[test]
    fn test_pointer_kinds() {
        assert!(!EventKind::KeyDown.is_pointer());
        assert!(EventKind::Click.is_pointer());
        assert!(EventKind::DoubleClick.is_pointer());
        assert!(EventKind::AuxClick.is_pointer());
        assert!(EventKind::ContextMenu.is_pointer());
    }

    #[test]
    fn test_tab_matches_any_field() {
        assert!(DocumentEvent::tab().is_tab());
        assert!(DocumentEvent::key_down("Tab").is_tab());
        assert!(DocumentEvent::new(EventKind::KeyDown).with_code("Tab").is_tab());
        assert!(DocumentEvent::new(EventKind::KeyDown).with_key_code(9).is_tab());
        // Shift+Tab still reports "Tab" as the key.
        assert!(DocumentEvent::key_down("Tab").with_code("ShiftLeft").is_tab());
    }

    #[test]
    fn test_non_tab_keys() {
        assert!(!DocumentEvent::key_down("Enter").is_tab());
        assert!(!DocumentEvent::key_down("a").with_code("KeyA").with_key_code(65).is_tab());
        assert!(!DocumentEvent::new(EventKind::KeyDown).with_key_code(0).is_tab());
        // Key info on a non-keyboard event is ignored.
        let mut click = DocumentEvent::click();
        click.key = Some("Tab".into());
        assert!(!click.is_tab());
    }
}
