//! # Kenburns guide
//!
//! ## Core concepts
//!
//! - **Viewport**: the host's display area, always anchored at `(0, 0)`.
//! - **Drawable rect**: the image's bounds in the host's layout. Crop rects are expressed
//!   in this frame.
//! - **Intrinsic size**: the image's natural pixel size. The returned transform maps
//!   intrinsic pixels to viewport coordinates.
//! - [`Transition`](crate::Transition): a start rect, an optional end rect, a duration and
//!   an [`Ease`](crate::Ease). No end rect means "stop".
//! - [`TransitionGenerator`](crate::TransitionGenerator): where transitions come from. The
//!   default is [`RandomTransitionGenerator`](crate::RandomTransitionGenerator);
//!   [`ScriptedTransitionGenerator`](crate::ScriptedTransitionGenerator) plays a fixed list
//!   and any `FnMut(Rect, Rect) -> KenBurnsResult<Transition>` closure works too.
//!
//! ## Host loop
//!
//! ```
//! use kenburns::{KenBurnsEngine, Rect, Size, TimestampMs};
//!
//! let mut engine = KenBurnsEngine::new();
//! engine.on_viewport_resized(1280.0, 720.0);
//! engine
//!     .on_image_changed(Size::new(4000.0, 3000.0), Rect::new(0.0, 0.0, 4000.0, 3000.0))
//!     .unwrap();
//!
//! let mut now = TimestampMs(0);
//! for _ in 0..3 {
//!     let Some(cmd) = engine.advance_frame(now).unwrap() else { break };
//!     // draw the image with `cmd.transform`
//!     if !cmd.schedule.needs_frame() {
//!         break;
//!     }
//!     now = now.shifted(16);
//! }
//! ```
//!
//! Calls must be serialized; a multi-threaded host funnels them through one queue.
//!
//! ## Lifecycle
//!
//! `NoImage -> Running` on the first frame with an image; a transition whose duration has
//! elapsed is replaced on the same tick; `Running -> Stopped` when a generator returns
//! [`Transition::stop`](crate::Transition::stop). Once stopped the engine keeps returning
//! the frozen frame with [`FrameSchedule::Idle`](crate::FrameSchedule::Idle) until
//! [`restart`](crate::KenBurnsEngine::restart).
//!
//! Viewport and image changes apply immediately to the transform, but the in-flight
//! transition keeps its rects until it expires. Set
//! [`EngineConfig::restart_on_geometry_change`](crate::EngineConfig::restart_on_geometry_change)
//! to drop it instead.
//!
//! ## Transform
//!
//! The crop rect is mapped from drawable-bounds space to intrinsic pixels, then
//!
//! ```text
//! T(viewport center) * S(viewport_w / crop_w * mode) * T(-crop center)
//! ```
//!
//! where `mode` is `1.0` when the crop already has the viewport's shape. Otherwise
//! [`ScaleMode::CenterCrop`](crate::ScaleMode::CenterCrop) grows it to cover the viewport
//! and [`ScaleMode::FitCenter`](crate::ScaleMode::FitCenter) shrinks it to fit.
//!
//! ## Errors
//!
//! - Unknown scale-mode names fail with `UnsupportedScaleMode` and leave the mode as it was.
//! - Degenerate rects fail fast with `DegenerateRect`.
//! - A random generator that cannot find a distinct rect pair logs a warning and plays a
//!   zero-motion transition instead of failing.
//! - Missing image or an empty viewport is not an error: `advance_frame` returns `None`.
