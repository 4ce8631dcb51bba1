/// Monotonic easing curve mapping normalized time to normalized progress.
///
/// Every variant satisfies `apply(0) == 0`, `apply(1) == 1` and never decreases, so an
/// eased interpolation never overshoots its endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic acceleration.
    InQuad,
    /// Quadratic deceleration.
    OutQuad,
    /// Quadratic acceleration then deceleration.
    InOutQuad,
    /// Cubic acceleration.
    InCubic,
    /// Cubic deceleration.
    OutCubic,
    /// Cubic acceleration then deceleration.
    InOutCubic,
    /// Accelerate-decelerate: `0.5 - cos(pi * t) / 2`.
    #[default]
    InOutSine,
}

impl Ease {
    /// All variants, in declaration order.
    pub const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InOutSine,
    ];

    /// Map `t` (clamped to `[0, 1]`) to eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        // Exact endpoints regardless of the curve's float behavior.
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let p = match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutSine => 0.5 - (std::f64::consts::PI * t).cos() / 2.0,
        };
        p.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
