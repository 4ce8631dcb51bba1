pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Delay between a pair of frames at 60 FPS, in milliseconds.
pub const FRAME_DELAY_MS: u64 = 1000 / 60;

/// Wall-clock timestamp in milliseconds, as supplied by the host.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimestampMs(pub u64);

impl TimestampMs {
    /// Milliseconds elapsed since `earlier`. A clock that went backwards yields zero.
    pub fn since(self, earlier: TimestampMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Shift forward by `ms`, saturating at `u64::MAX`.
    pub fn shifted(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
