//! Guard decisions.
//!
//! Every gate maps the current provider state to one [`GuardDecision`].
//! `Loading` is the only non-terminal outcome; `Render` and `Redirect` are
//! terminal for one evaluation but are recomputed from scratch on the next.

use serde::Serialize;

/// Why a gate refused to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    Unauthenticated,
    Unauthorized,
    AlreadyAuthenticated,
    FeatureDisabled,
    InvalidLanguageSegment,
}

impl DenialReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::Unauthenticated => "unauthenticated",
            DenialReason::Unauthorized => "unauthorized",
            DenialReason::AlreadyAuthenticated => "already_authenticated",
            DenialReason::FeatureDisabled => "feature_disabled",
            DenialReason::InvalidLanguageSegment => "invalid_language_segment",
        }
    }
}

/// A navigation instruction produced by a gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub to: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
    pub reason: DenialReason,
}

impl Redirect {
    pub fn replace(to: impl Into<String>, reason: DenialReason) -> Self {
        Self {
            to: to.into(),
            replace: true,
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    Loading,
    Redirect(Redirect),
    Render,
}

impl GuardDecision {
    pub fn redirect(to: impl Into<String>, reason: DenialReason) -> Self {
        GuardDecision::Redirect(Redirect::replace(to, reason))
    }

    pub fn is_render(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GuardDecision::Loading)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardDecision::Redirect(redirect) => Some(&redirect.to),
            _ => None,
        }
    }

    /// Chain gates: the next gate is consulted only when this one renders.
    pub fn and_then<F>(self, next: F) -> GuardDecision
    where
        F: FnOnce() -> GuardDecision,
    {
        match self {
            GuardDecision::Render => next(),
            other => other,
        }
    }

    /// Short label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            GuardDecision::Loading => "loading",
            GuardDecision::Redirect(redirect) => redirect.reason.as_str(),
            GuardDecision::Render => "render",
        }
    }
}
