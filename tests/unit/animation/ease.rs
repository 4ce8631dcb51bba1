use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.5), 1.0);
    }
}

#[test]
fn monotonic_sweep() {
    for ease in Ease::ALL {
        let mut prev = 0.0;
        for i in 1..=200 {
            let p = ease.apply(f64::from(i) / 200.0);
            assert!(p >= prev, "{ease:?} decreased at step {i}");
            prev = p;
        }
    }
}

#[test]
fn in_out_sine_is_symmetric_about_midpoint() {
    let e = Ease::InOutSine;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
    assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-12);
}

#[test]
fn default_is_ease_in_out() {
    assert_eq!(Ease::default(), Ease::InOutSine);
}

#[test]
fn serde_uses_snake_case() {
    let s = serde_json::to_string(&Ease::InOutCubic).unwrap();
    assert_eq!(s, "\"in_out_cubic\"");
    let e: Ease = serde_json::from_str("\"linear\"").unwrap();
    assert_eq!(e, Ease::Linear);
}
