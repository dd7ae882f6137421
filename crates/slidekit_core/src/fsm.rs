//! Engine phase transitions
//!
//! Each engine keeps its phase as a small enum and moves it through
//! `on_event`, so illegal combinations of flags cannot be represented.

/// A phase enum with an explicit transition table
pub trait StateTransitions: Sized + Copy {
    type Event;

    /// Next phase for `event`, or `None` if the event does not apply here
    fn on_event(&self, event: Self::Event) -> Option<Self>;

    /// Apply `event` in place, returning whether the phase changed
    fn apply(&mut self, event: Self::Event) -> bool {
        match self.on_event(event) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }
}
