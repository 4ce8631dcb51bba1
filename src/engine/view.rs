use crate::{
    engine::{
        command::{FrameSchedule, RenderCommand},
        config::EngineConfig,
        listener::TransitionListener,
        scale::ScaleMode,
    },
    foundation::core::{Affine, Point, Rect, Size, TimestampMs},
    foundation::error::{KenBurnsError, KenBurnsResult},
    geometry::rects::{aspect_ratio, contains_rect, map_rect, validate_rect},
    transition::{
        generator::TransitionGenerator, random::RandomTransitionGenerator, value::Transition,
    },
};

/// Relative slack allowed when checking generated rects against the drawable.
const CONTAINMENT_EPS: f64 = 1e-6;

/// Lifecycle of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// No transition yet: no image, or no frame has run since one was set.
    NoImage,
    /// A transition is in flight.
    Running,
    /// A generator returned the stop sentinel; the output is frozen.
    Stopped,
}

/// Geometry of the current image as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ImageGeometry {
    /// Natural pixel size; the image occupies `(0, 0)..intrinsic` before transforming.
    intrinsic: Size,
    /// Bounds from the host's layout. Crop rects live in this frame.
    bounds: Rect,
}

impl ImageGeometry {
    fn intrinsic_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.intrinsic)
    }
}

#[derive(Clone, Debug)]
struct ActiveTransition {
    transition: Transition,
    started: TimestampMs,
    /// Geometry epoch the transition was generated against.
    epoch: u64,
}

/// Ken Burns transition engine.
///
/// The host owns drawing and frame scheduling. It reports geometry through
/// [`on_viewport_resized`](Self::on_viewport_resized) and
/// [`on_image_changed`](Self::on_image_changed), calls
/// [`advance_frame`](Self::advance_frame) on every display refresh and applies the
/// returned transform to the image. All calls must be serialized by the host.
///
/// A geometry change does not interrupt the in-flight transition unless
/// [`EngineConfig::restart_on_geometry_change`] is set; it keeps its old rects until it
/// expires so the picture does not jump.
pub struct KenBurnsEngine {
    config: EngineConfig,
    viewport: Rect,
    image: Option<ImageGeometry>,
    generator: Box<dyn TransitionGenerator + Send>,
    listener: Option<Box<dyn TransitionListener + Send>>,
    current: Option<ActiveTransition>,
    stopped: bool,
    paused_at: Option<TimestampMs>,
    /// Last crop rect shown; the frozen frame once stopped.
    last_crop: Option<Rect>,
    geometry_epoch: u64,
}

impl Default for KenBurnsEngine {
    fn default() -> Self {
        Self::from_parts(EngineConfig::default(), RandomTransitionGenerator::new())
    }
}

impl KenBurnsEngine {
    /// Engine with default settings and an entropy-seeded random generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose random generator is tuned by `config.generator`.
    pub fn with_config(config: EngineConfig) -> KenBurnsResult<Self> {
        config.validate()?;
        let generator = RandomTransitionGenerator::with_config(config.generator.clone())?;
        Ok(Self::from_parts(config, generator))
    }

    /// Engine driven by a custom generator. `config.generator` is unused.
    pub fn with_generator(
        config: EngineConfig,
        generator: impl TransitionGenerator + Send + 'static,
    ) -> KenBurnsResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, generator))
    }

    fn from_parts(
        config: EngineConfig,
        generator: impl TransitionGenerator + Send + 'static,
    ) -> Self {
        Self {
            config,
            viewport: Rect::ZERO,
            image: None,
            generator: Box::new(generator),
            listener: None,
            current: None,
            stopped: false,
            paused_at: None,
            last_crop: None,
            geometry_epoch: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        if self.stopped {
            EngineState::Stopped
        } else if self.current.is_some() {
            EngineState::Running
        } else {
            EngineState::NoImage
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// The in-flight transition, or the stop sentinel once stopped.
    pub fn current_transition(&self) -> Option<&Transition> {
        self.current.as_ref().map(|a| &a.transition)
    }

    /// The viewport rect, always anchored at the origin.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// The current image's layout bounds.
    pub fn drawable(&self) -> Option<Rect> {
        self.image.map(|img| img.bounds)
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.config.scale_mode
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.config.scale_mode = mode;
    }

    /// Set the scale mode by name. Anything other than center-crop or fit-center fails
    /// with [`KenBurnsError::UnsupportedScaleMode`] and keeps the previous mode.
    pub fn set_scale_mode_named(&mut self, name: &str) -> KenBurnsResult<()> {
        self.config.scale_mode = name.parse()?;
        Ok(())
    }

    /// Replace the generator. The in-flight transition finishes undisturbed.
    pub fn set_transition_generator(
        &mut self,
        generator: impl TransitionGenerator + Send + 'static,
    ) {
        self.generator = Box::new(generator);
    }

    pub fn set_transition_listener(
        &mut self,
        listener: Option<Box<dyn TransitionListener + Send>>,
    ) {
        self.listener = listener;
    }

    /// Record a new viewport size. Zero or invalid sizes leave the engine quiescent.
    pub fn on_viewport_resized(&mut self, width: f64, height: f64) {
        let viewport = Rect::new(0.0, 0.0, width, height);
        if viewport != self.viewport {
            self.viewport = viewport;
            self.geometry_changed("viewport");
        }
    }

    /// Record the current image's natural size and layout bounds.
    pub fn on_image_changed(&mut self, intrinsic: Size, bounds: Rect) -> KenBurnsResult<()> {
        validate_rect(Rect::from_origin_size(Point::ORIGIN, intrinsic))?;
        validate_rect(bounds)?;
        let image = Some(ImageGeometry { intrinsic, bounds });
        if image != self.image {
            self.image = image;
            self.geometry_changed("image");
        }
        Ok(())
    }

    /// Forget the image. The next frame renders nothing.
    pub fn on_image_cleared(&mut self) {
        tracing::debug!("image cleared");
        self.image = None;
        self.current = None;
        self.stopped = false;
        self.last_crop = None;
        self.geometry_epoch += 1;
    }

    /// Freeze progress at `now`. Frames keep rendering the paused rect with
    /// [`FrameSchedule::Idle`] until [`resume`](Self::resume).
    pub fn pause(&mut self, now: TimestampMs) {
        if self.paused_at.is_none() {
            tracing::debug!(?now, "paused");
            self.paused_at = Some(now);
        }
    }

    /// Continue from where [`pause`](Self::pause) froze progress.
    pub fn resume(&mut self, now: TimestampMs) {
        let Some(paused_at) = self.paused_at.take() else {
            return;
        };
        let paused_for = now.since(paused_at);
        if let Some(active) = self.current.as_mut() {
            active.started = active.started.shifted(paused_for);
        }
        tracing::debug!(?now, paused_for, "resumed");
    }

    /// Drop the current transition, leaving the stopped state if in it. The next frame
    /// generates a fresh transition.
    pub fn restart(&mut self) {
        tracing::debug!("restart requested");
        self.current = None;
        self.stopped = false;
    }

    /// Compute the frame for `now`.
    ///
    /// Returns `None` while there is nothing to render (no image or an empty viewport).
    /// Timestamps earlier than the transition start are treated as its start.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn advance_frame(&mut self, now: TimestampMs) -> KenBurnsResult<Option<RenderCommand>> {
        let Some(image) = self.image else {
            return Ok(None);
        };
        if validate_rect(self.viewport).is_err() {
            return Ok(None);
        }
        if self.stopped {
            return self.frozen_frame(image);
        }

        let clock = self.paused_at.unwrap_or(now);
        if self.current.is_none() {
            self.begin_transition(clock, None, image)?;
            if self.stopped {
                return self.frozen_frame(image);
            }
        }
        let Some(active) = self.current.clone() else {
            return Ok(None);
        };

        let elapsed = clock.since(active.started);
        let crop = active.transition.interpolated_rect(elapsed);
        let mut schedule = if self.paused_at.is_some() {
            FrameSchedule::Idle
        } else {
            FrameSchedule::After {
                delay_ms: self.config.frame_delay_ms,
            }
        };
        let transform = self.transform_for(crop, image)?;
        self.last_crop = Some(crop);

        if self.paused_at.is_none() && active.transition.is_expired(elapsed) {
            if let Some(listener) = self.listener.as_mut() {
                listener.on_transition_end(&active.transition);
            }
            let previous_end = if active.epoch == self.geometry_epoch {
                active.transition.end()
            } else {
                None
            };
            self.begin_transition(now, previous_end, image)?;
            if self.stopped {
                schedule = FrameSchedule::Idle;
            }
        }

        Ok(Some(RenderCommand {
            transform,
            crop_rect: crop,
            schedule,
        }))
    }

    fn frozen_frame(&mut self, image: ImageGeometry) -> KenBurnsResult<Option<RenderCommand>> {
        let crop = match (self.last_crop, self.current.as_ref()) {
            (Some(crop), _) => crop,
            (None, Some(active)) => active.transition.start(),
            (None, None) => return Ok(None),
        };
        self.last_crop = Some(crop);
        Ok(Some(RenderCommand {
            transform: self.transform_for(crop, image)?,
            crop_rect: crop,
            schedule: FrameSchedule::Idle,
        }))
    }

    fn begin_transition(
        &mut self,
        at: TimestampMs,
        previous_end: Option<Rect>,
        image: ImageGeometry,
    ) -> KenBurnsResult<()> {
        let transition = match previous_end {
            Some(end) => self
                .generator
                .generate_from(end, self.viewport, image.bounds),
            None => self.generator.generate_next(self.viewport, image.bounds),
        };
        let transition = match transition {
            Ok(t) => t,
            Err(err) => {
                self.current = None;
                return Err(err);
            }
        };
        if let Err(err) = Self::check_contained(&transition, image.bounds) {
            self.current = None;
            return Err(err);
        }

        if transition.is_stop() {
            tracing::debug!(frozen = ?transition.start(), "generator requested stop");
            self.stopped = true;
        } else {
            tracing::debug!(
                start = ?transition.start(),
                end = ?transition.end(),
                duration_ms = transition.duration_ms(),
                "transition started"
            );
            if let Some(listener) = self.listener.as_mut() {
                listener.on_transition_start(&transition);
            }
        }
        self.current = Some(ActiveTransition {
            transition,
            started: at,
            epoch: self.geometry_epoch,
        });
        Ok(())
    }

    fn check_contained(transition: &Transition, drawable: Rect) -> KenBurnsResult<()> {
        let eps = CONTAINMENT_EPS * drawable.width().abs().max(drawable.height().abs());
        for r in std::iter::once(transition.start()).chain(transition.end()) {
            if !contains_rect(drawable, r, eps) {
                return Err(KenBurnsError::validation(format!(
                    "generated rect {r:?} escapes drawable {drawable:?}"
                )));
            }
        }
        Ok(())
    }

    /// Transform that maps the crop rect, taken from drawable-bounds space into intrinsic
    /// pixels, onto the viewport.
    ///
    /// The order is fixed: move the crop center to the origin, scale, then move it to the
    /// viewport center.
    fn transform_for(&self, crop: Rect, image: ImageGeometry) -> KenBurnsResult<Affine> {
        let crop_px = map_rect(crop, image.bounds, image.intrinsic_rect())?;
        let mode_scale = self
            .config
            .scale_mode
            .multiplier(self.viewport, aspect_ratio(crop_px)?)?;
        let scale = (self.viewport.width() / crop_px.width()) * mode_scale;

        let to_origin = Affine::translate(-crop_px.center().to_vec2());
        let zoom = Affine::scale(scale);
        let to_viewport = Affine::translate(self.viewport.center().to_vec2());
        Ok(to_viewport * zoom * to_origin)
    }

    fn geometry_changed(&mut self, what: &'static str) {
        self.geometry_epoch += 1;
        tracing::debug!(what, viewport = ?self.viewport, "geometry changed");
        if self.config.restart_on_geometry_change && !self.stopped && self.current.is_some() {
            tracing::debug!("dropping in-flight transition for new geometry");
            self.current = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/view.rs"]
mod tests;
