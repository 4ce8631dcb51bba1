use super::*;
use crate::animation::ease::Ease;

#[test]
fn empty_object_is_the_default() {
    assert_eq!(EngineConfig::from_json_str("{}").unwrap(), EngineConfig::default());
}

#[test]
fn fields_override_defaults() {
    let config = EngineConfig::from_json_str(
        r#"{
            "scale_mode": "FIT_CENTER",
            "frame_delay_ms": 33,
            "restart_on_geometry_change": true,
            "generator": { "min_duration_ms": 4000, "max_duration_ms": 8000, "ease": "linear" }
        }"#,
    )
    .unwrap();
    assert_eq!(config.scale_mode, ScaleMode::FitCenter);
    assert_eq!(config.frame_delay_ms, 33);
    assert!(config.restart_on_geometry_change);
    assert_eq!(config.generator.min_duration_ms, 4_000);
    assert_eq!(config.generator.ease, Ease::Linear);
    assert_eq!(config.generator.max_zoom, 4.0 / 3.0);
}

#[test]
fn unsupported_scale_mode_fails_at_load() {
    let err = EngineConfig::from_json_str(r#"{ "scale_mode": "STRETCH" }"#).unwrap_err();
    assert!(matches!(err, KenBurnsError::Serde(ref msg) if msg.contains("STRETCH")));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(matches!(
        EngineConfig::from_json_str(r#"{ "fps": 60 }"#),
        Err(KenBurnsError::Serde(_))
    ));
}

#[test]
fn invalid_values_fail_validation() {
    assert!(matches!(
        EngineConfig::from_json_str(r#"{ "frame_delay_ms": 0 }"#),
        Err(KenBurnsError::Validation(_))
    ));
    assert!(matches!(
        EngineConfig::from_json_str(r#"{ "generator": { "max_zoom": 0.5 } }"#),
        Err(KenBurnsError::Validation(_))
    ));
}

#[test]
fn json_round_trip_preserves_config() {
    let config = EngineConfig {
        scale_mode: ScaleMode::FitCenter,
        ..EngineConfig::default()
    };
    let json = config.to_json_string().unwrap();
    assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
}
