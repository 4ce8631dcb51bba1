use super::*;
use crate::foundation::error::KenBurnsError;

fn pair() -> (Rect, Rect) {
    (
        Rect::new(0.1, 0.3, 1000.7, 500.9),
        Rect::new(333.3, 111.1, 1333.3, 611.1),
    )
}

#[test]
fn endpoints_are_exact() {
    let (a, b) = pair();
    for ease in Ease::ALL {
        let t = Transition::new(a, b, 7_000, ease).unwrap();
        assert_eq!(t.interpolated_rect(0), a);
        assert_eq!(t.interpolated_rect(7_000), b);
        assert_eq!(t.interpolated_rect(u64::MAX), b);
    }
}

#[test]
fn zero_duration_jumps_to_end() {
    let (a, b) = pair();
    let t = Transition::new(a, b, 0, Ease::Linear).unwrap();
    assert!(t.is_expired(0));
    assert_eq!(t.progress(0), 1.0);
    assert_eq!(t.interpolated_rect(0), b);
}

#[test]
fn linear_midpoint() {
    let a = Rect::new(0.0, 0.0, 100.0, 50.0);
    let b = Rect::new(100.0, 50.0, 300.0, 150.0);
    let t = Transition::new(a, b, 1_000, Ease::Linear).unwrap();
    assert_eq!(t.interpolated_rect(500), Rect::new(50.0, 25.0, 200.0, 100.0));
}

#[test]
fn center_moves_monotonically_along_the_segment() {
    let (a, b) = pair();
    for ease in Ease::ALL {
        let t = Transition::new(a, b, 3_000, ease).unwrap();
        let total = b.center() - a.center();
        let mut prev = 0.0;
        for ms in (0..=3_000).step_by(50) {
            let c = t.interpolated_rect(ms).center() - a.center();
            // Fraction of the way along the start->end center line.
            let along = c.dot(total) / total.hypot2();
            assert!(along >= prev - 1e-12, "{ease:?} moved backwards at {ms}ms");
            assert!((-1e-12..=1.0 + 1e-12).contains(&along));
            // No drift off the line.
            assert!(c.cross(total).abs() < 1e-6);
            prev = along;
        }
    }
}

#[test]
fn interpolated_rects_stay_non_degenerate() {
    let (a, b) = pair();
    let t = Transition::new(a, b, 1_000, Ease::InOutCubic).unwrap();
    for ms in (0..=1_000).step_by(10) {
        let r = t.interpolated_rect(ms);
        assert!(r.width() > 0.0 && r.height() > 0.0);
    }
}

#[test]
fn stop_sentinel_freezes_on_start() {
    let (a, _) = pair();
    let t = Transition::stop(a).unwrap();
    assert!(t.is_stop());
    assert_eq!(t.end(), None);
    assert_eq!(t.interpolated_rect(0), a);
    assert_eq!(t.interpolated_rect(10_000), a);
}

#[test]
fn degenerate_rects_are_rejected() {
    let (a, _) = pair();
    let flat = Rect::new(0.0, 0.0, 10.0, 0.0);
    assert!(matches!(
        Transition::new(a, flat, 100, Ease::Linear),
        Err(KenBurnsError::DegenerateRect { .. })
    ));
    assert!(Transition::stop(flat).is_err());
}
