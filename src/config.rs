//! Tunable thresholds for the page effects.
//!
//! Every field defaults to the value in [`crate::consts`], so an empty JSON
//! object (or no config at all) reproduces the stock page behavior. Element
//! IDs and class names are not configurable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::{FxError, FxResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FxConfig {
    pub scrolled_threshold_px: f64,
    pub active_section_offset_px: f64,
    pub tilt_damping: f64,
    pub tilt_lift_px: f64,
    pub tilt_perspective_px: f64,
    pub parallax_min_width_px: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: f64,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    /// Console greeting lines as `(text, css)` pairs. Empty disables the greeting.
    pub greeting: Vec<(String, String)>,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: consts::SCROLLED_THRESHOLD_PX,
            active_section_offset_px: consts::ACTIVE_SECTION_OFFSET_PX,
            tilt_damping: consts::TILT_DAMPING,
            tilt_lift_px: consts::TILT_LIFT_PX,
            tilt_perspective_px: consts::TILT_PERSPECTIVE_PX,
            parallax_min_width_px: consts::PARALLAX_MIN_WIDTH_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_bottom_margin_px: consts::REVEAL_BOTTOM_MARGIN_PX,
            log_level: "info".to_owned(),
            greeting: vec![
                ("\u{1f44b} Hey there!".to_owned(), "font-size: 20px; font-weight: bold;".to_owned()),
                ("Looking for an AI Developer?".to_owned(), "font-size: 14px;".to_owned()),
                ("vanshatarch@gmail.com".to_owned(), "font-size: 12px; color: #888;".to_owned()),
            ],
        }
    }
}

impl FxConfig {
    /// Parse and validate a JSON config. Missing fields fall back to
    /// defaults; an empty or whitespace-only string yields the defaults.
    pub fn from_json(raw: &str) -> FxResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce NaN transforms or a root margin
    /// the intersection observer refuses.
    pub fn validate(&self) -> FxResult<()> {
        let non_negative = [
            ("scrolled_threshold_px", self.scrolled_threshold_px),
            ("active_section_offset_px", self.active_section_offset_px),
            ("tilt_lift_px", self.tilt_lift_px),
            ("tilt_perspective_px", self.tilt_perspective_px),
            ("parallax_min_width_px", self.parallax_min_width_px),
            ("reveal_bottom_margin_px", self.reveal_bottom_margin_px),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FxError::ConfigValue { field, reason: "must be a finite number >= 0" });
            }
        }
        if !self.tilt_damping.is_finite() || self.tilt_damping <= 0.0 {
            return Err(FxError::ConfigValue { field: "tilt_damping", reason: "must be a finite number > 0" });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FxError::ConfigValue { field: "reveal_threshold", reason: "must be within 0..=1" });
        }
        Ok(())
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
