use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use campusgate_config::LocalizationConfig;
use campusgate_core::GuardDecision;

/// Supported languages plus the currently active one.
///
/// The default language is served from unprefixed paths (`/login`); every
/// other language lives under its own segment (`/en/login`).
#[derive(Debug, Clone)]
pub struct LocalizationProvider {
    config: Arc<LocalizationConfig>,
    active: Arc<watch::Sender<String>>,
}

impl LocalizationProvider {
    pub fn new(config: Arc<LocalizationConfig>) -> Self {
        let (active, _) = watch::channel(config.default_language.clone());
        Self {
            config,
            active: Arc::new(active),
        }
    }

    pub fn supported_languages(&self) -> &[String] {
        &self.config.supported
    }

    pub fn default_language(&self) -> &str {
        &self.config.default_language
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.config.is_supported(code)
    }

    pub fn active_language(&self) -> String {
        self.active.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.active.subscribe()
    }

    /// Switch the active language.
    ///
    /// Returns `true` only when the language actually changed; setting the
    /// active language again, or an unsupported code, is a no-op.
    pub fn set_language(&self, code: &str) -> bool {
        if !self.is_supported(code) {
            debug!(language = code, "Ignoring unsupported language");
            return false;
        }
        self.active.send_if_modified(|active| {
            if active == code {
                return false;
            }
            *active = code.to_string();
            true
        })
    }

    /// Prefix `path` with the active language segment.
    ///
    /// A leading supported segment already on the path is replaced, and the
    /// default language maps to the unprefixed path.
    pub fn localize_url(&self, path: &str) -> String {
        let path = self.strip_language(path);
        let active = self.active_language();
        if active == self.config.default_language {
            return path;
        }
        if path == "/" {
            format!("/{}", active)
        } else {
            format!("/{}{}", active, path)
        }
    }

    /// Localize the target of a redirect decision; other decisions pass through.
    pub fn localize_decision(&self, decision: GuardDecision) -> GuardDecision {
        match decision {
            GuardDecision::Redirect(mut redirect) => {
                redirect.to = self.localize_url(&redirect.to);
                GuardDecision::Redirect(redirect)
            }
            other => other,
        }
    }

    fn strip_language(&self, path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        let (first, rest) = match trimmed.find(['/', '?', '#']) {
            Some(idx) => trimmed.split_at(idx),
            None => (trimmed, ""),
        };

        if self.is_supported(first) {
            match rest {
                "" => "/".to_string(),
                r if r.starts_with('/') => r.to_string(),
                r => format!("/{}", r),
            }
        } else {
            format!("/{}", trimmed)
        }
    }
}
