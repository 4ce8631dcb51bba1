use crate::{
    animation::ease::Ease,
    foundation::core::Rect,
    foundation::error::KenBurnsResult,
    geometry::rects::{lerp_rect, validate_rect},
};

/// An immutable timed interpolation between two crop rects.
///
/// A transition without an end rect is the stop sentinel: the engine freezes on its
/// current frame and asks for no further frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    start: Rect,
    end: Option<Rect>,
    duration_ms: u64,
    ease: Ease,
}

impl Transition {
    /// Build a transition from `start` to `end` over `duration_ms`.
    pub fn new(start: Rect, end: Rect, duration_ms: u64, ease: Ease) -> KenBurnsResult<Self> {
        validate_rect(start)?;
        validate_rect(end)?;
        Ok(Self {
            start,
            end: Some(end),
            duration_ms,
            ease,
        })
    }

    /// Build the stop sentinel, frozen on `start`.
    pub fn stop(start: Rect) -> KenBurnsResult<Self> {
        validate_rect(start)?;
        Ok(Self {
            start,
            end: None,
            duration_ms: 0,
            ease: Ease::Linear,
        })
    }

    pub fn start(&self) -> Rect {
        self.start
    }

    /// `None` for the stop sentinel.
    pub fn end(&self) -> Option<Rect> {
        self.end
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn is_stop(&self) -> bool {
        self.end.is_none()
    }

    pub fn is_expired(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Eased progress in `[0, 1]` after `elapsed_ms`. Zero-duration transitions are
    /// complete immediately.
    pub fn progress(&self, elapsed_ms: u64) -> f64 {
        if self.is_expired(elapsed_ms) {
            return 1.0;
        }
        let t = (elapsed_ms as f64) / (self.duration_ms as f64);
        self.ease.apply(t)
    }

    /// The crop rect after `elapsed_ms`.
    ///
    /// Returns `start` exactly at zero elapsed time and `end` exactly once expired. The
    /// stop sentinel always returns `start`.
    pub fn interpolated_rect(&self, elapsed_ms: u64) -> Rect {
        let Some(end) = self.end else {
            return self.start;
        };
        if self.is_expired(elapsed_ms) {
            return end;
        }
        if elapsed_ms == 0 {
            return self.start;
        }
        lerp_rect(self.start, end, self.progress(elapsed_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/value.rs"]
mod tests;
