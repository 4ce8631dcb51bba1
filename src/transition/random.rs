use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    animation::ease::Ease,
    foundation::core::{Rect, Size},
    foundation::error::{KenBurnsError, KenBurnsResult},
    geometry::rects::{aspect_ratio, contains_rect, max_crop, validate_rect},
    transition::{generator::TransitionGenerator, value::Transition},
};

/// Slack allowed when checking that a chained start rect is still a legal crop.
const CHAIN_EPS: f64 = 1e-6;

/// Tuning for [`RandomTransitionGenerator`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomGeneratorConfig {
    /// Shortest transition duration.
    pub min_duration_ms: u64,
    /// Longest transition duration (inclusive).
    pub max_duration_ms: u64,
    /// Smallest zoom relative to the largest viewport-shaped crop. `1.0` is the whole crop.
    pub min_zoom: f64,
    /// Largest zoom relative to the largest viewport-shaped crop.
    pub max_zoom: f64,
    /// Easing applied to every generated transition.
    pub ease: Ease,
    /// Attempts at finding an end rect distinct from the start before falling back.
    pub max_attempts: u32,
    /// Minimum center travel or size change, as a fraction of the largest crop width.
    pub min_motion: f64,
    /// Start each transition where the previous one ended when the geometry allows it.
    pub continuous: bool,
}

impl Default for RandomGeneratorConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: 10_000,
            max_duration_ms: 10_000,
            min_zoom: 1.0,
            max_zoom: 4.0 / 3.0,
            ease: Ease::InOutSine,
            max_attempts: 16,
            min_motion: 0.02,
            continuous: true,
        }
    }
}

impl RandomGeneratorConfig {
    pub fn validate(&self) -> KenBurnsResult<()> {
        if self.min_duration_ms > self.max_duration_ms {
            return Err(KenBurnsError::validation(
                "min_duration_ms must be <= max_duration_ms",
            ));
        }
        if !self.min_zoom.is_finite() || self.min_zoom < 1.0 {
            return Err(KenBurnsError::validation("min_zoom must be finite and >= 1"));
        }
        if !self.max_zoom.is_finite() || self.max_zoom < self.min_zoom {
            return Err(KenBurnsError::validation(
                "max_zoom must be finite and >= min_zoom",
            ));
        }
        if self.max_attempts == 0 {
            return Err(KenBurnsError::validation("max_attempts must be > 0"));
        }
        if !self.min_motion.is_finite() || self.min_motion < 0.0 {
            return Err(KenBurnsError::validation(
                "min_motion must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Default generator: random viewport-shaped crops inside the drawable.
///
/// Each rect has the viewport's aspect ratio, is scaled down from the largest such crop
/// by a random zoom in `[min_zoom, max_zoom]` and placed at a random offset that keeps
/// it inside the drawable.
pub struct RandomTransitionGenerator {
    config: RandomGeneratorConfig,
    rng: StdRng,
}

impl Default for RandomTransitionGenerator {
    fn default() -> Self {
        Self {
            config: RandomGeneratorConfig::default(),
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomTransitionGenerator {
    /// Entropy-seeded generator with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entropy-seeded generator with custom tuning.
    pub fn with_config(config: RandomGeneratorConfig) -> KenBurnsResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Reproducible generator.
    pub fn seeded(config: RandomGeneratorConfig, seed: u64) -> KenBurnsResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &RandomGeneratorConfig {
        &self.config
    }

    fn random_rect(&mut self, drawable: Rect, crop: Size) -> Rect {
        let zoom = if self.config.min_zoom < self.config.max_zoom {
            self.rng
                .random_range(self.config.min_zoom..=self.config.max_zoom)
        } else {
            self.config.min_zoom
        };
        let size = Size::new(crop.width / zoom, crop.height / zoom);
        let slack_x = (drawable.width() - size.width).max(0.0);
        let slack_y = (drawable.height() - size.height).max(0.0);
        let x0 = drawable.x0 + self.rng.random::<f64>() * slack_x;
        let y0 = drawable.y0 + self.rng.random::<f64>() * slack_y;
        Rect::from_origin_size((x0, y0), size)
    }

    fn random_duration(&mut self) -> u64 {
        let (min, max) = (self.config.min_duration_ms, self.config.max_duration_ms);
        if min < max {
            self.rng.random_range(min..=max)
        } else {
            min
        }
    }

    fn is_distinct(&self, a: Rect, b: Rect, crop: Size) -> bool {
        let travel = (a.center() - b.center()).hypot() / crop.width;
        let resize = (a.width() - b.width()).abs() / crop.width;
        travel >= self.config.min_motion || resize >= self.config.min_motion
    }

    fn is_legal_start(r: Rect, drawable: Rect, aspect: f64) -> bool {
        validate_rect(r).is_ok()
            && contains_rect(drawable, r, CHAIN_EPS)
            && (r.width() / r.height() - aspect).abs() <= CHAIN_EPS * aspect
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn build(
        &mut self,
        chained_start: Option<Rect>,
        viewport: Rect,
        drawable: Rect,
    ) -> KenBurnsResult<Transition> {
        let aspect = aspect_ratio(viewport)?;
        validate_rect(drawable)?;
        let crop = max_crop(drawable, aspect)?;

        let start = match chained_start {
            Some(r) if Self::is_legal_start(r, drawable, aspect) => r,
            _ => self.random_rect(drawable, crop),
        };
        let duration_ms = self.random_duration();
        let ease = self.config.ease;

        for _ in 0..self.config.max_attempts {
            let end = self.random_rect(drawable, crop);
            if self.is_distinct(start, end, crop) {
                return Transition::new(start, end, duration_ms, ease);
            }
        }

        let err = KenBurnsError::GeneratorExhausted {
            attempts: self.config.max_attempts,
        };
        tracing::warn!(%err, "falling back to a zero-motion transition");
        Transition::new(start, start, duration_ms, ease)
    }
}

impl TransitionGenerator for RandomTransitionGenerator {
    fn generate_next(&mut self, viewport: Rect, drawable: Rect) -> KenBurnsResult<Transition> {
        self.build(None, viewport, drawable)
    }

    fn generate_from(
        &mut self,
        previous_end: Rect,
        viewport: Rect,
        drawable: Rect,
    ) -> KenBurnsResult<Transition> {
        let chained = self.config.continuous.then_some(previous_end);
        self.build(chained, viewport, drawable)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/random.rs"]
mod tests;
