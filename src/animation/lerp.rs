use crate::foundation::core::{Point, Rect};

/// Linear interpolation between two values at progress `t`.
pub trait Lerp: Sized {
    /// `a` at `t == 0`, `b` at `t == 1`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(f64::lerp(&a.x, &b.x, t), f64::lerp(&a.y, &b.y, t))
    }
}

impl Lerp for Rect {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rect::new(
            f64::lerp(&a.x0, &b.x0, t),
            f64::lerp(&a.y0, &b.y0, t),
            f64::lerp(&a.x1, &b.x1, t),
            f64::lerp(&a.y1, &b.y1, t),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
