use super::*;

#[test]
fn parses_common_spellings() {
    for s in ["CENTER_CROP", "center_crop", "centerCrop", " center-crop "] {
        assert_eq!(s.parse::<ScaleMode>().unwrap(), ScaleMode::CenterCrop);
    }
    for s in ["FIT_CENTER", "fit_center", "fitCenter", "fit center"] {
        assert_eq!(s.parse::<ScaleMode>().unwrap(), ScaleMode::FitCenter);
    }
}

#[test]
fn other_modes_are_unsupported() {
    for s in ["STRETCH", "MATRIX", "fit_xy", ""] {
        let err = s.parse::<ScaleMode>().unwrap_err();
        assert!(matches!(err, KenBurnsError::UnsupportedScaleMode(ref name) if name == s));
    }
}

#[test]
fn serde_goes_through_the_parser() {
    assert_eq!(
        serde_json::to_string(&ScaleMode::FitCenter).unwrap(),
        "\"FIT_CENTER\""
    );
    let mode: ScaleMode = serde_json::from_str("\"center_crop\"").unwrap();
    assert_eq!(mode, ScaleMode::CenterCrop);
    let err = serde_json::from_str::<ScaleMode>("\"STRETCH\"").unwrap_err();
    assert!(err.to_string().contains("unsupported scale mode"));
}

#[test]
fn multipliers_agree_for_matching_shapes() {
    let viewport = Rect::new(0.0, 0.0, 1000.0, 500.0);
    assert_eq!(ScaleMode::CenterCrop.multiplier(viewport, 2.0).unwrap(), 1.0);
    assert_eq!(ScaleMode::FitCenter.multiplier(viewport, 2.0).unwrap(), 1.0);
    assert_eq!(ScaleMode::CenterCrop.multiplier(viewport, 4.0).unwrap(), 2.0);
    assert_eq!(ScaleMode::FitCenter.multiplier(viewport, 1.0).unwrap(), 0.5);
}

#[test]
fn display_is_canonical() {
    assert_eq!(ScaleMode::CenterCrop.to_string(), "CENTER_CROP");
}
