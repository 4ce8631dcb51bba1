use crate::{
    foundation::core::Rect, foundation::error::KenBurnsResult, transition::value::Transition,
};

/// Strategy producing the next [`Transition`] for a viewport and drawable.
///
/// Every rect a generator produces must be non-degenerate and contained in `drawable`.
/// Returning [`Transition::stop`] tells the engine to stop animating.
pub trait TransitionGenerator {
    /// Produce a transition for the current geometry.
    fn generate_next(&mut self, viewport: Rect, drawable: Rect) -> KenBurnsResult<Transition>;

    /// Produce a transition following one that ended on `previous_end`.
    ///
    /// The engine only calls this while the geometry is unchanged since the previous
    /// transition started. The default ignores `previous_end`.
    fn generate_from(
        &mut self,
        previous_end: Rect,
        viewport: Rect,
        drawable: Rect,
    ) -> KenBurnsResult<Transition> {
        let _ = previous_end;
        self.generate_next(viewport, drawable)
    }
}

impl<F> TransitionGenerator for F
where
    F: FnMut(Rect, Rect) -> KenBurnsResult<Transition>,
{
    fn generate_next(&mut self, viewport: Rect, drawable: Rect) -> KenBurnsResult<Transition> {
        self(viewport, drawable)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/generator.rs"]
mod tests;
