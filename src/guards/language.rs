use campusgate_core::{DenialReason, GuardDecision, routes};

use crate::providers::LocalizationProvider;

/// Validate the `language` route parameter. Missing or unsupported segments
/// redirect to the root, which serves the default language.
pub fn language_decision(language: Option<&str>, l10n: &LocalizationProvider) -> GuardDecision {
    match language {
        Some(code) if l10n.is_supported(code) => GuardDecision::Render,
        _ => GuardDecision::redirect(routes::ROOT, DenialReason::InvalidLanguageSegment),
    }
}

/// Language segment gate.
///
/// Remembers the last parameter it synchronized so the provider is updated
/// once per distinct value, and only after the value was validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageGate {
    synced: Option<String>,
}

impl LanguageGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, language: Option<&str>, l10n: &LocalizationProvider) -> GuardDecision {
        let decision = language_decision(language, l10n);
        if let (GuardDecision::Render, Some(code)) = (&decision, language) {
            if self.synced.as_deref() != Some(code) {
                l10n.set_language(code);
                self.synced = Some(code.to_string());
            }
        }
        decision
    }

    /// Last language pushed to the provider.
    pub fn synced_language(&self) -> Option<&str> {
        self.synced.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusgate_config::LocalizationConfig;
    use std::sync::Arc;

    fn provider() -> LocalizationProvider {
        LocalizationProvider::new(Arc::new(LocalizationConfig::default()))
    }

    #[test]
    fn test_invalid_segment_redirects_without_sync() {
        let l10n = provider();
        let mut gate = LanguageGate::new();

        let decision = gate.evaluate(Some("xx"), &l10n);
        assert_eq!(decision.redirect_target(), Some("/"));
        assert_eq!(gate.synced_language(), None);
        assert_eq!(l10n.active_language(), "es");

        assert_eq!(gate.evaluate(None, &l10n).redirect_target(), Some("/"));
    }

    #[test]
    fn test_valid_segment_syncs_once_per_value() {
        let l10n = provider();
        let mut rx = l10n.subscribe();
        let mut gate = LanguageGate::new();

        assert!(gate.evaluate(Some("en"), &l10n).is_render());
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        assert!(gate.evaluate(Some("en"), &l10n).is_render());
        assert!(!rx.has_changed().unwrap());

        assert!(gate.evaluate(Some("fr"), &l10n).is_render());
        assert_eq!(l10n.active_language(), "fr");
        assert_eq!(gate.synced_language(), Some("fr"));
    }
}
