//! `DocumentHost` over the browser DOM.
//!
//! Listeners are `gloo_events::EventListener`s on the document itself, so
//! they see every bubbling click and keydown. The root container is
//! `document.body`; the stylesheet goes into `document.head`.

use focus_ring_core::{
    DocumentEvent, DocumentHost, EventHandler, EventKind, FocusRing, FocusRingConfig, HostError,
    RuleInsertion, parse_event_type,
};
use gloo_events::EventListener;
use smol_str::SmolStr;
use wasm_bindgen::{JsCast, JsValue};

/// Handle to a browser document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The global `window.document`, if there is one.
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        window.document().map(Self::new)
    }

    /// Always `None` on non-WASM targets.
    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    pub fn current() -> Option<Self> {
        None
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn body(&self) -> Result<web_sys::HtmlElement, HostError> {
        self.document.body().ok_or(HostError::MissingRoot)
    }
}

fn js_error(e: JsValue) -> HostError {
    HostError::Js(format!("{:?}", e))
}

/// Extract what the mode tracker needs from a DOM event.
///
/// Returns `None` for event types the tracker never listens to.
pub fn document_event_from_web(event: &web_sys::Event) -> Option<DocumentEvent> {
    let kind = parse_event_type(&event.type_())?;
    let mut out = DocumentEvent::new(kind);
    if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
        out.key = Some(key_event.key()).filter(|k| !k.is_empty()).map(SmolStr::from);
        out.code = Some(key_event.code()).filter(|c| !c.is_empty()).map(SmolStr::from);
        #[allow(deprecated)]
        let key_code = key_event.key_code();
        out = out.with_key_code(key_code);
    }
    Some(out)
}

impl DocumentHost for WebDocument {
    type Listener = EventListener;

    fn listen(&self, kind: EventKind, handler: EventHandler) -> Result<EventListener, HostError> {
        Ok(EventListener::new(&self.document, kind.as_str(), move |event| {
            if let Some(event) = document_event_from_web(event) {
                handler(&event);
            }
        }))
    }

    fn has_style(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn insert_style(&self, id: &str, rule: &str) -> Result<RuleInsertion, HostError> {
        let head = self.document.head().ok_or(HostError::MissingHead)?;

        let style = self.document.create_element("style").map_err(js_error)?;
        style.set_attribute("media", "screen").map_err(js_error)?;
        style.set_attribute("id", id).map_err(js_error)?;
        // WebKit won't create a sheet for an empty <style>.
        style
            .append_child(&self.document.create_text_node(""))
            .map_err(js_error)?;
        head.append_child(&style).map_err(js_error)?;

        let Some(sheet) = style
            .dyn_ref::<web_sys::HtmlStyleElement>()
            .and_then(|s| s.sheet())
        else {
            tracing::debug!(stylesheet_id = id, "style element has no sheet");
            return Ok(RuleInsertion::Unsupported);
        };

        // Not every engine exposes insertRule on the sheet object.
        let has_insert_rule =
            js_sys::Reflect::has(&sheet, &JsValue::from_str("insertRule")).unwrap_or(false);
        if !has_insert_rule {
            tracing::debug!(stylesheet_id = id, "sheet has no insertRule");
            return Ok(RuleInsertion::Unsupported);
        }

        let sheet: web_sys::CssStyleSheet = sheet.unchecked_into();
        sheet.insert_rule_with_index(rule, 0).map_err(js_error)?;
        Ok(RuleInsertion::Inserted)
    }

    fn remove_style(&self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }

    fn add_root_class(&self, class: &str) -> Result<(), HostError> {
        self.body()?.class_list().add_1(class).map_err(js_error)
    }

    fn remove_root_class(&self, class: &str) -> Result<(), HostError> {
        self.body()?.class_list().remove_1(class).map_err(js_error)
    }
}

/// Mount a focus ring on the global document.
///
/// Without a document (server rendering, native targets) the ring is
/// detached and just reports `config.default_enabled`.
pub fn mount_focus_ring(config: &FocusRingConfig) -> FocusRing<WebDocument> {
    FocusRing::mount_on(WebDocument::current(), config)
}
