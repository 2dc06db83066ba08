#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_constants() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.scrolled_threshold_px, 20.0);
    assert_eq!(cfg.active_section_offset_px, 150.0);
    assert_eq!(cfg.tilt_damping, 20.0);
    assert_eq!(cfg.parallax_min_width_px, 768.0);
    assert_eq!(cfg.reveal_threshold, 0.1);
    assert_eq!(cfg.reveal_bottom_margin_px, 50.0);
}

#[test]
fn empty_string_yields_defaults() {
    let Ok(cfg) = FxConfig::from_json("  ") else {
        panic!("blank config should parse");
    };
    assert_eq!(cfg, FxConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let Ok(cfg) = FxConfig::from_json(r#"{"tilt_damping": 10, "log_level": "debug"}"#) else {
        panic!("partial config should parse");
    };
    assert_eq!(cfg.tilt_damping, 10.0);
    assert_eq!(cfg.level(), log::Level::Debug);
    assert_eq!(cfg.scrolled_threshold_px, 20.0);
}

#[test]
fn empty_greeting_is_allowed() {
    let Ok(cfg) = FxConfig::from_json(r#"{"greeting": []}"#) else {
        panic!("config should parse");
    };
    assert!(cfg.greeting.is_empty());
}

#[test]
fn invalid_json_is_a_config_error() {
    let result = FxConfig::from_json("{not json");
    assert!(matches!(result, Err(crate::error::FxError::Config(_))));
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let cfg = FxConfig { log_level: "chatty".to_owned(), ..FxConfig::default() };
    assert_eq!(cfg.level(), log::Level::Info);
}

#[test]
fn unknown_field_is_rejected() {
    assert!(FxConfig::from_json(r#"{"tilt_dampening": 10}"#).is_err());
}

// --- validation ---

fn rejected_field(json: &str) -> Option<&'static str> {
    match FxConfig::from_json(json) {
        Err(crate::error::FxError::ConfigValue { field, .. }) => Some(field),
        _ => None,
    }
}

#[test]
fn defaults_pass_validation() {
    assert!(FxConfig::default().validate().is_ok());
}

#[test]
fn zero_tilt_damping_is_rejected() {
    assert_eq!(rejected_field(r#"{"tilt_damping": 0}"#), Some("tilt_damping"));
    assert_eq!(rejected_field(r#"{"tilt_damping": -5}"#), Some("tilt_damping"));
}

#[test]
fn negative_reveal_margin_is_rejected() {
    assert_eq!(rejected_field(r#"{"reveal_bottom_margin_px": -50}"#), Some("reveal_bottom_margin_px"));
}

#[test]
fn negative_lengths_are_rejected() {
    assert_eq!(rejected_field(r#"{"parallax_min_width_px": -1}"#), Some("parallax_min_width_px"));
    assert_eq!(rejected_field(r#"{"tilt_perspective_px": -1000}"#), Some("tilt_perspective_px"));
    assert_eq!(rejected_field(r#"{"tilt_lift_px": -4}"#), Some("tilt_lift_px"));
    assert_eq!(rejected_field(r#"{"scrolled_threshold_px": -20}"#), Some("scrolled_threshold_px"));
    assert_eq!(rejected_field(r#"{"active_section_offset_px": -150}"#), Some("active_section_offset_px"));
}

#[test]
fn reveal_threshold_outside_unit_range_is_rejected() {
    assert_eq!(rejected_field(r#"{"reveal_threshold": 1.5}"#), Some("reveal_threshold"));
    assert_eq!(rejected_field(r#"{"reveal_threshold": -0.1}"#), Some("reveal_threshold"));
}

#[test]
fn non_finite_value_is_rejected() {
    let cfg = FxConfig { tilt_lift_px: f64::NAN, ..FxConfig::default() };
    assert!(cfg.validate().is_err());
    let cfg = FxConfig { tilt_damping: f64::INFINITY, ..FxConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn default_greeting_has_three_lines() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.greeting.len(), 3);
    assert_eq!(cfg.greeting[1].0, "Looking for an AI Developer?");
}
