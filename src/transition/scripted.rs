use crate::{
    animation::ease::Ease,
    foundation::core::Rect,
    foundation::error::{KenBurnsError, KenBurnsResult},
    geometry::rects::{contains_rect, map_rect, validate_rect},
    transition::{generator::TransitionGenerator, value::Transition},
};

const UNIT: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// One scripted move. Rects are normalized to the drawable: `(0, 0, 1, 1)` is the
/// whole image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptStep {
    pub from: Rect,
    pub to: Rect,
    pub duration_ms: u64,
    #[serde(default)]
    pub ease: Ease,
}

/// What happens after the last step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEnd {
    /// Start over from the first step.
    #[default]
    Loop,
    /// Emit the stop sentinel, freezing on the last step's end rect.
    Stop,
}

/// Plays a fixed list of moves in order.
#[derive(Clone, Debug)]
pub struct ScriptedTransitionGenerator {
    steps: Vec<ScriptStep>,
    end: ScriptEnd,
    cursor: usize,
}

impl ScriptedTransitionGenerator {
    pub fn new(steps: Vec<ScriptStep>, end: ScriptEnd) -> KenBurnsResult<Self> {
        if steps.is_empty() {
            return Err(KenBurnsError::validation("script must have at least one step"));
        }
        for (i, step) in steps.iter().enumerate() {
            for r in [step.from, step.to] {
                validate_rect(r)?;
                if !contains_rect(UNIT, r, 0.0) {
                    return Err(KenBurnsError::validation(format!(
                        "script step {i} rect {r:?} is outside the unit square"
                    )));
                }
            }
        }
        Ok(Self {
            steps,
            end,
            cursor: 0,
        })
    }

    /// Rewind to the first step.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl TransitionGenerator for ScriptedTransitionGenerator {
    fn generate_next(&mut self, _viewport: Rect, drawable: Rect) -> KenBurnsResult<Transition> {
        validate_rect(drawable)?;
        if self.cursor >= self.steps.len() {
            match self.end {
                ScriptEnd::Loop => self.cursor = 0,
                ScriptEnd::Stop => {
                    let last = &self.steps[self.steps.len() - 1];
                    return Transition::stop(map_rect(last.to, UNIT, drawable)?);
                }
            }
        }
        let step = &self.steps[self.cursor];
        self.cursor += 1;
        Transition::new(
            map_rect(step.from, UNIT, drawable)?,
            map_rect(step.to, UNIT, drawable)?,
            step.duration_ms,
            step.ease,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/scripted.rs"]
mod tests;
