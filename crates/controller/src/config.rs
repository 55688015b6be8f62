use serde::Deserialize;

use crate::parallax::ParallaxProfile;
use crate::reveal::RevealConfig;

/// Every selector the controller depends on, in one place.
///
/// This is the explicit form of the markup/script coupling: the page must
/// provide elements matching these selectors, and renaming a class or id in
/// the markup means changing it here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub nav_links: String,
    pub sections: String,
    pub cards: String,
    pub shapes: String,
    pub social_links: String,
    pub contact_form: String,
    pub submit_button: String,
    pub iframes: String,
    /// Attribute holding the withheld iframe URL.
    pub deferred_src_attr: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            nav_links: ".nav a".to_string(),
            sections: "section".to_string(),
            cards: ".card".to_string(),
            shapes: ".shape".to_string(),
            social_links: ".social-links a".to_string(),
            contact_form: ".contact-form".to_string(),
            submit_button: ".submit-btn".to_string(),
            iframes: "iframe".to_string(),
            deferred_src_attr: "data-src".to_string(),
        }
    }
}

/// Full controller configuration. Defaults reproduce the page's original
/// constants; the host may override any subset via `from_json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub selectors: SelectorConfig,
    /// Fixed-header compensation for smooth-scroll jumps.
    pub header_offset_px: f64,
    /// Activation threshold for the scroll-spy.
    pub spy_threshold_px: f64,
    pub reveal: RevealConfig,
    /// Pre-trigger distance for lazy iframe loading.
    pub lazy_root_margin: String,
    pub parallax: ParallaxProfile,
    pub form_restore_ms: u32,
    pub resize_quiet_ms: u32,
    pub busy_label: String,
    pub idle_label: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            selectors: SelectorConfig::default(),
            header_offset_px: 100.0,
            spy_threshold_px: 200.0,
            reveal: RevealConfig::default(),
            lazy_root_margin: "200px".to_string(),
            parallax: ParallaxProfile::default(),
            form_restore_ms: 3000,
            resize_quiet_ms: 500,
            busy_label: "SENDING...".to_string(),
            idle_label: "SEND MESSAGE".to_string(),
        }
    }
}

impl ControllerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "controller config parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_reproduce_the_original_constants() {
        let cfg = ControllerConfig::default();
        assert_eq!(cfg.header_offset_px, 100.0);
        assert_eq!(cfg.spy_threshold_px, 200.0);
        assert_eq!(cfg.lazy_root_margin, "200px");
        assert_eq!(cfg.form_restore_ms, 3000);
        assert_eq!(cfg.resize_quiet_ms, 500);
        assert_eq!(cfg.busy_label, "SENDING...");
        assert_eq!(cfg.idle_label, "SEND MESSAGE");
        assert_eq!(cfg.selectors.nav_links, ".nav a");
        assert_eq!(cfg.selectors.deferred_src_attr, "data-src");
    }

    #[test]
    fn partial_json_overrides_merge_onto_defaults() {
        let cfg = ControllerConfig::from_json(
            r#"{"header_offset_px": 80, "selectors": {"cards": ".tile"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.header_offset_px, 80.0);
        assert_eq!(cfg.selectors.cards, ".tile");
        // Untouched fields keep their defaults.
        assert_eq!(cfg.selectors.sections, "section");
        assert_eq!(cfg.spy_threshold_px, 200.0);
    }

    #[test]
    fn empty_object_is_the_default_config() {
        let cfg = ControllerConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ControllerConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ControllerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("config parse error"));
    }
}
