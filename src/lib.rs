//! Kenburns computes Ken Burns pan/zoom animations over a still image.
//!
//! The crate is an embeddable engine: the host owns the drawing surface and the display
//! refresh loop, and the engine turns geometry plus a timestamp into an affine transform.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: a [`TransitionGenerator`] picks a start and end crop rect inside the
//!    image, shaped like the viewport.
//! 2. **Interpolate**: a [`Transition`] eases between the two rects over its duration.
//! 3. **Fit**: [`KenBurnsEngine::advance_frame`] maps the current crop rect onto the
//!    viewport under a [`ScaleMode`] and returns a [`RenderCommand`].
//!
//! The engine reads no clocks and spawns no threads; timestamps are passed in, which keeps
//! every frame a pure function of engine state and time.
//!
//! See [`crate::guide`] for a walkthrough of the host contract.
#![forbid(unsafe_code)]

mod animation;
mod engine;
mod foundation;
mod geometry;
mod transition;

/// Walkthrough of the host contract and engine lifecycle.
pub mod guide;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use engine::command::{FrameSchedule, RenderCommand};
pub use engine::config::EngineConfig;
pub use engine::listener::TransitionListener;
pub use engine::scale::ScaleMode;
pub use engine::view::{EngineState, KenBurnsEngine};
pub use foundation::core::{Affine, FRAME_DELAY_MS, Point, Rect, Size, TimestampMs, Vec2};
pub use foundation::error::{KenBurnsError, KenBurnsResult};
pub use geometry::rects::{
    aspect_ratio, center_crop_into, contains_rect, fit_center_into, fit_centered, lerp_rect,
    map_rect, max_crop, validate_rect,
};
pub use transition::generator::TransitionGenerator;
pub use transition::random::{RandomGeneratorConfig, RandomTransitionGenerator};
pub use transition::scripted::{ScriptEnd, ScriptStep, ScriptedTransitionGenerator};
pub use transition::value::Transition;
