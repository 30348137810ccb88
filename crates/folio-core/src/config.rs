use crate::constants::{
    CONTACT_SUBMIT_DELAY_MS, CONTACT_SUCCESS_WINDOW_MS, CURSOR_COLOR, CURSOR_DOT_SIZE_PX,
    CURSOR_RING_SIZE_PX, CURSOR_SMOOTHING, MAGNETIC_STRENGTH,
};
use crate::contact::ContactTiming;
use crate::cursor::CursorSettings;
use crate::error::Result;
use serde::Deserialize;
use std::time::Duration;

/// Site-wide tunables, read from the `data-config` JSON on the mount node.
/// Every field is optional.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub custom_cursor: bool,
    pub cursor_color: String,
    pub cursor_size: f32,
    pub cursor_smoothing: f32,
    pub magnetic_strength: f32,
    /// Opaque third-party scene id for the hero embed.
    pub spline_scene: Option<String>,
    pub lottie_speed: f32,
    pub lottie_loop: bool,
    /// Overrides the `prefers-reduced-motion` media query when set.
    pub reduced_motion: Option<bool>,
    pub contact_submit_delay_ms: u64,
    pub contact_success_window_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            custom_cursor: true,
            cursor_color: CURSOR_COLOR.to_string(),
            cursor_size: CURSOR_RING_SIZE_PX,
            cursor_smoothing: CURSOR_SMOOTHING,
            magnetic_strength: MAGNETIC_STRENGTH,
            spline_scene: None,
            lottie_speed: 1.0,
            lottie_loop: true,
            reduced_motion: None,
            contact_submit_delay_ms: CONTACT_SUBMIT_DELAY_MS,
            contact_success_window_ms: CONTACT_SUCCESS_WINDOW_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Missing attribute gives defaults; malformed JSON is logged and also
    /// gives defaults.
    pub fn load(attr: Option<&str>) -> Self {
        let Some(json) = attr.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(cfg) => {
                log::info!("[config] loaded site config");
                cfg
            }
            Err(e) => {
                log::warn!("[config] {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Present and non-blank; no other validation.
    pub fn scene_id(&self) -> Option<&str> {
        self.spline_scene
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn cursor_settings(&self) -> CursorSettings {
        CursorSettings {
            color: self.cursor_color.clone(),
            ring_size: self.cursor_size,
            dot_size: CURSOR_DOT_SIZE_PX,
            smoothing: self.cursor_smoothing.clamp(0.01, 1.0),
        }
    }

    pub fn contact_timing(&self) -> ContactTiming {
        ContactTiming {
            submit_delay: Duration::from_millis(self.contact_submit_delay_ms),
            success_window: Duration::from_millis(self.contact_success_window_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{"cursorSize": 32, "splineScene": "abc"}"#)
            .unwrap_or_default();
        assert_eq!(cfg.cursor_size, 32.0);
        assert_eq!(cfg.scene_id(), Some("abc"));
        assert_eq!(cfg.magnetic_strength, MAGNETIC_STRENGTH);
        assert_eq!(cfg.contact_timing(), ContactTiming::default());
    }

    #[test]
    fn malformed_or_missing_falls_back() {
        assert!(SiteConfig::from_json("{not json").is_err());
        assert_eq!(SiteConfig::load(Some("{not json")), SiteConfig::default());
        assert_eq!(SiteConfig::load(None), SiteConfig::default());
    }

    #[test]
    fn blank_scene_is_absent() {
        let cfg = SiteConfig {
            spline_scene: Some("   ".into()),
            ..SiteConfig::default()
        };
        assert_eq!(cfg.scene_id(), None);
    }
}
