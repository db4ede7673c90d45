//! A mounted focus ring: tracker and applier wired together.

use std::cell::Cell;
use std::rc::Rc;

use crate::applier::IndicatorApplier;
use crate::config::FocusRingConfig;
use crate::host::DocumentHost;
use crate::mode::InputMode;
use crate::tracker::{InputModeTracker, SubscriberId};

struct Attachment<H: DocumentHost> {
    tracker: InputModeTracker<H>,
    applier: Rc<IndicatorApplier>,
}

/// Keyboard-only focus ring bound to one document.
///
/// Mounting starts the tracker, injects the stylesheet and marks the root
/// container; every mode change re-marks it. Unmounting (explicitly or on
/// drop) detaches the listeners and reverts the document.
///
/// Rings with different stylesheet ids can share a document. Two rings
/// using the same id and root container will fight over the marker
/// classes; the last one applied wins.
pub struct FocusRing<H: DocumentHost> {
    default_enabled: bool,
    attachment: Option<Attachment<H>>,
    mounted: Cell<bool>,
}

impl<H: DocumentHost> FocusRing<H> {
    pub fn mount(host: H, config: &FocusRingConfig) -> Self {
        let applier = Rc::new(IndicatorApplier::new(config));
        let tracker = InputModeTracker::start(host, config.default_enabled);

        applier.mount(tracker.host());
        applier.apply(tracker.host(), tracker.enabled());

        // Registered first, so other subscribers see the document already updated.
        let host = tracker.host().clone();
        let on_change = applier.clone();
        tracker.on_change(move |enabled| on_change.apply(&host, enabled));

        tracing::debug!(
            stylesheet_id = %config.stylesheet_id,
            enabled = config.default_enabled,
            "focus ring mounted"
        );

        Self {
            default_enabled: config.default_enabled,
            attachment: Some(Attachment { tracker, applier }),
            mounted: Cell::new(true),
        }
    }

    /// A ring with no document behind it. Reports `default_enabled` forever
    /// and never touches anything.
    pub fn detached(config: &FocusRingConfig) -> Self {
        Self {
            default_enabled: config.default_enabled,
            attachment: None,
            mounted: Cell::new(false),
        }
    }

    /// Mount on `host` if there is one, otherwise return a detached ring.
    pub fn mount_on(host: Option<H>, config: &FocusRingConfig) -> Self {
        match host {
            Some(host) => Self::mount(host, config),
            None => {
                tracing::debug!("no document available, focus ring is inert");
                Self::detached(config)
            }
        }
    }

    /// `true` in keyboard mode.
    pub fn enabled(&self) -> bool {
        self.attachment
            .as_ref()
            .map_or(self.default_enabled, |a| a.tracker.enabled())
    }

    pub fn mode(&self) -> InputMode {
        InputMode::from_enabled(self.enabled())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn host(&self) -> Option<&H> {
        self.attachment.as_ref().map(|a| a.tracker.host())
    }

    /// Subscribe to mode changes. Returns `None` for a detached ring, which
    /// never changes.
    pub fn on_change(&self, callback: impl Fn(bool) + 'static) -> Option<SubscriberId> {
        self.attachment
            .as_ref()
            .map(|a| a.tracker.on_change(callback))
    }

    pub fn off_change(&self, id: SubscriberId) -> bool {
        self.attachment
            .as_ref()
            .is_some_and(|a| a.tracker.off_change(id))
    }

    /// Detach listeners, then remove the stylesheet and marker classes.
    /// Safe to call more than once.
    pub fn unmount(&self) {
        if !self.mounted.replace(false) {
            return;
        }
        if let Some(Attachment { tracker, applier }) = &self.attachment {
            tracker.stop();
            applier.unmount(tracker.host());
            tracing::debug!(stylesheet_id = %applier.stylesheet_id(), "focus ring unmounted");
        }
    }
}

impl<H: DocumentHost> Drop for FocusRing<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
