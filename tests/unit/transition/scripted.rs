use super::*;

fn steps() -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            from: Rect::new(0.0, 0.0, 1.0, 1.0),
            to: Rect::new(0.25, 0.25, 0.75, 0.75),
            duration_ms: 1_000,
            ease: Ease::Linear,
        },
        ScriptStep {
            from: Rect::new(0.25, 0.25, 0.75, 0.75),
            to: Rect::new(0.5, 0.0, 1.0, 0.5),
            duration_ms: 2_000,
            ease: Ease::InOutSine,
        },
    ]
}

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);
const DRAWABLE: Rect = Rect::new(0.0, 0.0, 400.0, 200.0);

#[test]
fn steps_are_denormalized_into_the_drawable() {
    let mut g = ScriptedTransitionGenerator::new(steps(), ScriptEnd::Loop).unwrap();
    let t = g.generate_next(VIEWPORT, DRAWABLE).unwrap();
    assert_eq!(t.start(), DRAWABLE);
    assert_eq!(t.end(), Some(Rect::new(100.0, 50.0, 300.0, 150.0)));
    assert_eq!(t.duration_ms(), 1_000);
    assert_eq!(t.ease(), Ease::Linear);
}

#[test]
fn loop_wraps_around() {
    let mut g = ScriptedTransitionGenerator::new(steps(), ScriptEnd::Loop).unwrap();
    let durations: Vec<u64> = (0..5)
        .map(|_| g.generate_next(VIEWPORT, DRAWABLE).unwrap().duration_ms())
        .collect();
    assert_eq!(durations, vec![1_000, 2_000, 1_000, 2_000, 1_000]);
}

#[test]
fn stop_freezes_on_last_end_rect() {
    let mut g = ScriptedTransitionGenerator::new(steps(), ScriptEnd::Stop).unwrap();
    g.generate_next(VIEWPORT, DRAWABLE).unwrap();
    g.generate_next(VIEWPORT, DRAWABLE).unwrap();
    for _ in 0..3 {
        let t = g.generate_next(VIEWPORT, DRAWABLE).unwrap();
        assert!(t.is_stop());
        assert_eq!(t.start(), Rect::new(200.0, 0.0, 400.0, 100.0));
    }

    g.reset();
    assert!(!g.generate_next(VIEWPORT, DRAWABLE).unwrap().is_stop());
}

#[test]
fn invalid_scripts_are_rejected() {
    assert!(ScriptedTransitionGenerator::new(Vec::new(), ScriptEnd::Loop).is_err());

    let mut outside = steps();
    outside[1].to = Rect::new(0.5, 0.5, 1.5, 1.0);
    assert!(matches!(
        ScriptedTransitionGenerator::new(outside, ScriptEnd::Loop),
        Err(KenBurnsError::Validation(_))
    ));

    let mut flat = steps();
    flat[0].from = Rect::new(0.2, 0.2, 0.2, 0.8);
    assert!(matches!(
        ScriptedTransitionGenerator::new(flat, ScriptEnd::Loop),
        Err(KenBurnsError::DegenerateRect { .. })
    ));
}

#[test]
fn steps_deserialize_with_default_ease() {
    let json = r#"[{ "from": { "x0": 0.0, "y0": 0.0, "x1": 1.0, "y1": 1.0 },
                     "to": { "x0": 0.1, "y0": 0.1, "x1": 0.9, "y1": 0.9 },
                     "duration_ms": 500 }]"#;
    let steps: Vec<ScriptStep> = serde_json::from_str(json).unwrap();
    assert_eq!(steps[0].ease, Ease::InOutSine);
    assert!(ScriptedTransitionGenerator::new(steps, ScriptEnd::Stop).is_ok());
}
