use crate::transition::value::Transition;

/// Observer for transition lifecycle events. Both hooks default to no-ops.
pub trait TransitionListener {
    /// A transition became current.
    fn on_transition_start(&mut self, transition: &Transition) {
        let _ = transition;
    }

    /// A transition ran to the end of its duration.
    fn on_transition_end(&mut self, transition: &Transition) {
        let _ = transition;
    }
}
