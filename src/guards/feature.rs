use campusgate_core::{DenialReason, GuardDecision, routes};

use crate::providers::{FeatureFlagProvider, FeatureFlagState};

/// Decide access to a feature-flagged page.
///
/// `fallback` defaults to the feature-disabled page.
pub fn feature_decision(
    flags: &FeatureFlagState,
    feature: &str,
    fallback: Option<&str>,
) -> GuardDecision {
    if flags.is_loading {
        return GuardDecision::Loading;
    }
    if flags.is_enabled(feature) {
        return GuardDecision::Render;
    }
    GuardDecision::redirect(
        fallback.unwrap_or(routes::FEATURE_DISABLED),
        DenialReason::FeatureDisabled,
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGate {
    feature: String,
    fallback: Option<String>,
}

impl FeatureGate {
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn evaluate(&self, flags: &FeatureFlagProvider) -> GuardDecision {
        feature_decision(&flags.current(), &self.feature, self.fallback.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusgate_core::features::{COURSES, PAYMENTS};

    #[test]
    fn test_loading_flags() {
        let flags = FeatureFlagState::loading();
        assert!(feature_decision(&flags, COURSES, None).is_loading());
    }

    #[test]
    fn test_enabled_and_disabled() {
        let flags = FeatureFlagState::resolved([COURSES]);
        assert!(feature_decision(&flags, COURSES, None).is_render());
        assert_eq!(
            feature_decision(&flags, PAYMENTS, None).redirect_target(),
            Some("/feature-disabled")
        );
        assert_eq!(
            feature_decision(&flags, PAYMENTS, Some("/courses")).redirect_target(),
            Some("/courses")
        );
    }

    #[test]
    fn test_gate_with_provider() {
        let provider = FeatureFlagProvider::new();
        let gate = FeatureGate::new(PAYMENTS).with_fallback("/dashboard");
        assert!(gate.evaluate(&provider).is_loading());

        provider.resolve([COURSES]);
        let first = gate.evaluate(&provider);
        let second = gate.evaluate(&provider);
        assert_eq!(first.redirect_target(), Some("/dashboard"));
        assert_eq!(first, second);
    }
}
