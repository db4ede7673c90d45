//! Visual indicator applier: reflects the mode in the document.
//!
//! Owns one style element (the outline suppression rule) and the pair of
//! marker classes on the root container. Everything it does is safe to
//! repeat and fully reversed by [`IndicatorApplier::unmount`].

use smol_str::SmolStr;

use crate::HostError;
use crate::config::{FocusRingConfig, MarkerClasses};
use crate::host::{DocumentHost, RuleInsertion};

/// The CSS rule suppressing outlines under `disabled_class`.
pub fn outline_rule(disabled_class: &str) -> String {
    format!(".{disabled_class} * {{ outline: none; }}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorApplier {
    stylesheet_id: SmolStr,
    classes: MarkerClasses,
}

impl IndicatorApplier {
    pub fn new(config: &FocusRingConfig) -> Self {
        Self {
            stylesheet_id: config.stylesheet_id.clone(),
            classes: config.class_names.clone(),
        }
    }

    pub fn stylesheet_id(&self) -> &str {
        &self.stylesheet_id
    }

    pub fn classes(&self) -> &MarkerClasses {
        &self.classes
    }

    pub fn outline_rule(&self) -> String {
        outline_rule(&self.classes.disabled)
    }

    /// Ensure the style element exists. An existing element with the same id
    /// is left alone rather than duplicated.
    pub fn mount<H: DocumentHost>(&self, host: &H) {
        if host.has_style(&self.stylesheet_id) {
            tracing::debug!(stylesheet_id = %self.stylesheet_id, "focus ring stylesheet already present");
            return;
        }

        match host.insert_style(&self.stylesheet_id, &self.outline_rule()) {
            Ok(RuleInsertion::Inserted) => {
                tracing::trace!(stylesheet_id = %self.stylesheet_id, "focus ring stylesheet mounted");
            }
            Ok(RuleInsertion::Unsupported) => {
                tracing::debug!(
                    stylesheet_id = %self.stylesheet_id,
                    "style sheet has no insertRule, outline rule skipped"
                );
            }
            Err(e) => {
                tracing::warn!(stylesheet_id = %self.stylesheet_id, error = %e, "failed to mount focus ring stylesheet");
            }
        }
    }

    /// Mark the root container for `enabled`, clearing the opposite marker.
    pub fn apply<H: DocumentHost>(&self, host: &H, enabled: bool) {
        let (add, remove) = self.classes.select(enabled);
        let result = host
            .remove_root_class(remove)
            .and_then(|()| host.add_root_class(add));
        if let Err(e) = result {
            log_class_error(&e);
        }
    }

    /// Remove the style element and both marker classes. Safe to call when
    /// nothing is present.
    pub fn unmount<H: DocumentHost>(&self, host: &H) {
        if host.remove_style(&self.stylesheet_id) {
            tracing::trace!(stylesheet_id = %self.stylesheet_id, "focus ring stylesheet removed");
        }
        for class in [&self.classes.enabled, &self.classes.disabled] {
            if let Err(e) = host.remove_root_class(class) {
                log_class_error(&e);
                break;
            }
        }
    }
}

fn log_class_error(error: &HostError) {
    match error {
        // Happens before <body> exists; the next change tries again.
        HostError::MissingRoot => tracing::debug!("no root container, marker class skipped"),
        e => tracing::warn!(error = %e, "failed to update focus ring marker class"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;

    fn applier() -> IndicatorApplier {
        IndicatorApplier::new(&FocusRingConfig::default())
    }

    #[test]
    fn test_outline_rule() {
        insta::assert_snapshot!(applier().outline_rule(), @".js-no-focus-ring * { outline: none; }");
        assert_eq!(outline_rule("quiet"), ".quiet * { outline: none; }");
    }

    #[test]
    fn test_mount_does_not_duplicate() {
        let doc = MemoryDocument::new();
        let applier = applier();
        applier.mount(&doc);
        applier.mount(&doc);
        assert_eq!(doc.style_count_with_id(applier.stylesheet_id()), 1);
        assert_eq!(
            doc.style_rules(applier.stylesheet_id()),
            vec![applier.outline_rule()]
        );
    }

    #[test]
    fn test_mount_without_rule_insertion() {
        let doc = MemoryDocument::new().with_rule_insertion(false);
        let applier = applier();
        applier.mount(&doc);
        assert!(doc.has_style(applier.stylesheet_id()));
        assert!(doc.style_rules(applier.stylesheet_id()).is_empty());

        // Class toggling still works.
        applier.apply(&doc, false);
        assert_eq!(doc.root_class_name().as_deref(), Some("js-no-focus-ring"));
    }

    #[test]
    fn test_apply_swaps_classes() {
        let doc = MemoryDocument::new();
        let applier = applier();
        applier.apply(&doc, true);
        assert_eq!(doc.root_class_name().as_deref(), Some("js-focus-ring"));
        applier.apply(&doc, false);
        assert_eq!(doc.root_class_name().as_deref(), Some("js-no-focus-ring"));
        applier.apply(&doc, false);
        assert_eq!(doc.root_class_name().as_deref(), Some("js-no-focus-ring"));
        applier.apply(&doc, true);
        assert_eq!(doc.root_class_name().as_deref(), Some("js-focus-ring"));
    }

    #[test]
    fn test_apply_keeps_unrelated_classes() {
        let doc = MemoryDocument::new();
        doc.add_root_class("theme-dark").unwrap();
        let applier = applier();
        applier.apply(&doc, false);
        applier.unmount(&doc);
        assert_eq!(doc.root_class_name().as_deref(), Some("theme-dark"));
    }

    #[test]
    fn test_apply_without_root_is_skipped() {
        let doc = MemoryDocument::without_root();
        let applier = applier();
        applier.apply(&doc, true);
        assert_eq!(doc.root_class_name(), None);

        doc.attach_root();
        applier.apply(&doc, false);
        assert_eq!(doc.root_class_name().as_deref(), Some("js-no-focus-ring"));
    }

    #[test]
    fn test_unmount_is_idempotent() {
        let doc = MemoryDocument::new();
        let applier = applier();
        applier.mount(&doc);
        applier.apply(&doc, true);
        applier.unmount(&doc);
        applier.unmount(&doc);
        assert_eq!(doc.style_count(), 0);
        assert_eq!(doc.root_class_name().as_deref(), Some(""));

        let rootless = MemoryDocument::without_root();
        applier.unmount(&rootless);
    }

    #[test]
    fn test_custom_class_names() {
        let config = FocusRingConfig::default()
            .with_stylesheet_id("custom")
            .with_class_names(MarkerClasses::new("ring-on", "ring-off"));
        let applier = IndicatorApplier::new(&config);
        let doc = MemoryDocument::new();
        applier.mount(&doc);
        applier.apply(&doc, false);
        assert_eq!(doc.style_rules("custom"), vec![".ring-off * { outline: none; }".to_string()]);
        assert_eq!(doc.root_class_name().as_deref(), Some("ring-off"));
    }
}
