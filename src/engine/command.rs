use crate::foundation::core::{Affine, Rect};

/// When the host should call `advance_frame` again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameSchedule {
    /// Request another frame after `delay_ms`.
    After { delay_ms: u64 },
    /// The output is frozen; no further frames are needed.
    Idle,
}

impl FrameSchedule {
    pub fn needs_frame(self) -> bool {
        matches!(self, Self::After { .. })
    }
}

/// Output of one engine tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RenderCommand {
    /// Maps intrinsic image pixels to viewport coordinates.
    pub transform: Affine,
    /// The crop rect shown, in drawable-bounds coordinates.
    pub crop_rect: Rect,
    pub schedule: FrameSchedule,
}
