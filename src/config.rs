use log::{info, warn, Level};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dom;
use crate::error::LandingError;
use crate::visibility::VisibilityOptions;

/// Id of the optional `<script type="application/json">` block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub selectors: Selectors,
    pub timing: Timing,
    pub navbar: NavbarThresholds,
    pub reveal: VisibilityOptions,
    pub counters: VisibilityOptions,
    /// Degrees of rotation at the edge of the hero card.
    pub tilt_strength: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            timing: Timing::default(),
            navbar: NavbarThresholds::default(),
            reveal: VisibilityOptions {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px".to_string(),
            },
            counters: VisibilityOptions {
                threshold: 0.5,
                root_margin: "0px".to_string(),
            },
            tilt_strength: 12.0,
        }
    }
}

/// CSS selectors (and element ids) each controller resolves on install.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_links: String,
    pub header: String,
    pub menu_toggle: String,
    pub primary_nav_id: String,
    pub gallery_container: String,
    pub gallery_item: String,
    pub stat_number: String,
    pub animated_cards: String,
    pub cta_button: String,
    pub gallery_section_id: String,
    pub progress_bar: String,
    pub hero_container: String,
    pub hero_card: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_links: ".nav-link".to_string(),
            header: ".header".to_string(),
            menu_toggle: ".menu-toggle".to_string(),
            primary_nav_id: "primary-nav".to_string(),
            gallery_container: ".full-curved-container".to_string(),
            gallery_item: ".curved-item".to_string(),
            stat_number: ".stat-number".to_string(),
            animated_cards: ".feature-card, .stat-card, .testimonial-card, .stat-item, .nft-display"
                .to_string(),
            cta_button: ".cta-button".to_string(),
            gallery_section_id: "full-curved-gallery".to_string(),
            progress_bar: ".scroll-progress__bar".to_string(),
            hero_container: ".nft-display".to_string(),
            hero_card: ".nft-display .nft-card-inner".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub navbar_debounce_ms: u32,
    pub gallery_resize_debounce_ms: u32,
    pub progress_resize_debounce_ms: u32,
    pub gallery_stagger_ms: u32,
    pub zoom_ms: u32,
    pub ripple_ms: u32,
    pub counter_duration_ms: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            navbar_debounce_ms: 10,
            gallery_resize_debounce_ms: 200,
            progress_resize_debounce_ms: 100,
            gallery_stagger_ms: 150,
            zoom_ms: 1500,
            ripple_ms: 600,
            counter_duration_ms: 2000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarThresholds {
    /// Offset past which the header turns compact.
    pub compact_after: f64,
    /// Offset past which scrolling down hides the header.
    pub hide_after: f64,
}

impl Default for NavbarThresholds {
    fn default() -> Self {
        Self {
            compact_after: 50.0,
            hide_after: 200.0,
        }
    }
}

/// Overlays `raw` onto [`LandingConfig::default`]. Objects merge key by key,
/// so a nested override only replaces the fields it names.
pub fn parse(raw: &str) -> Result<LandingConfig, LandingError> {
    let overrides: Value = serde_json::from_str(raw)?;
    let mut merged = serde_json::to_value(LandingConfig::default())?;
    merge(&mut merged, overrides);
    Ok(serde_json::from_value(merged)?)
}

fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, value) => *base = value,
    }
}

/// Reads the config block from the host page, falling back to defaults.
pub fn load() -> LandingConfig {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return LandingConfig::default();
    };

    match parse(&raw) {
        Ok(config) => {
            info!("Loaded landing config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            LandingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LandingConfig::default();
        assert_eq!(config.timing.counter_duration_ms, 2000.0);
        assert_eq!(config.timing.zoom_ms, 1500);
        assert_eq!(config.timing.ripple_ms, 600);
        assert_eq!(config.timing.gallery_stagger_ms, 150);
        assert_eq!(config.navbar.compact_after, 50.0);
        assert_eq!(config.navbar.hide_after, 200.0);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.counters.threshold, 0.5);
        assert_eq!(config.tilt_strength, 12.0);
        assert_eq!(config.selectors.progress_bar, ".scroll-progress__bar");
    }

    #[test]
    fn test_partial_override() {
        let config = parse(r#"{"timing": {"zoom_ms": 900}, "tilt_strength": 8}"#).unwrap();
        assert_eq!(config.timing.zoom_ms, 900);
        assert_eq!(config.timing.ripple_ms, 600);
        assert_eq!(config.tilt_strength, 8.0);
        assert_eq!(config.selectors, Selectors::default());
        assert_eq!(config.reveal.threshold, 0.1);
    }

    #[test]
    fn test_reveal_threshold_keeps_default_margin() {
        let config = parse(r#"{"reveal": {"threshold": 0.2}}"#).unwrap();
        assert_eq!(config.reveal.threshold, 0.2);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.counters, LandingConfig::default().counters);
    }

    #[test]
    fn test_counter_margin_keeps_default_threshold() {
        let config = parse(r#"{"counters": {"root_margin": "10px"}}"#).unwrap();
        assert_eq!(config.counters.root_margin, "10px");
        assert_eq!(config.counters.threshold, 0.5);
    }

    #[test]
    fn test_single_selector_override() {
        let config = parse(r##"{"selectors": {"header": "#site-header"}, "unknown": true}"##).unwrap();
        assert_eq!(config.selectors.header, "#site-header");
        assert_eq!(config.selectors.nav_links, ".nav-link");
        assert_eq!(config.timing, Timing::default());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(matches!(parse(r#"{"timing": {"zoom_ms": "slow"}}"#), Err(LandingError::Config(_))));
        assert!(matches!(parse("[1, 2]"), Err(LandingError::Config(_))));
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(parse("{}").unwrap(), LandingConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse("{not json"), Err(LandingError::Config(_))));
    }
}
