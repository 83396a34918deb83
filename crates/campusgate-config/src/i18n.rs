//! Supported languages.
//!
//! - `SUPPORTED_LANGUAGES`: comma separated language codes (default `es,en,pt,fr,de`)
//! - `DEFAULT_LANGUAGE`: language served at the unprefixed root (default `es`)
//!
//! Codes are lower-cased. A default outside the supported set is replaced by
//! the first supported code, and an empty list falls back to the defaults.

use std::env;

use crate::split_list;

const DEFAULT_SUPPORTED: &str = "es,en,pt,fr,de";
const DEFAULT_LANGUAGE: &str = "es";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalizationConfig {
    pub supported: Vec<String>,
    pub default_language: String,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            supported: split_list(DEFAULT_SUPPORTED),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl LocalizationConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("SUPPORTED_LANGUAGES").ok().as_deref(),
            env::var("DEFAULT_LANGUAGE").ok().as_deref(),
        )
    }

    #[must_use]
    pub fn from_values(supported: Option<&str>, default_language: Option<&str>) -> Self {
        let mut codes: Vec<String> = Vec::new();
        for code in split_list(supported.unwrap_or(DEFAULT_SUPPORTED)) {
            let code = code.to_ascii_lowercase();
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        if codes.is_empty() {
            codes = split_list(DEFAULT_SUPPORTED);
        }

        let requested = default_language
            .unwrap_or(DEFAULT_LANGUAGE)
            .trim()
            .to_ascii_lowercase();
        let default_language = if codes.contains(&requested) {
            requested
        } else {
            codes[0].clone()
        };

        Self {
            supported: codes,
            default_language,
        }
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|c| c == code)
    }
}
