//! The two-state lifecycle every producer goes through.
//!
//! `Active` -> `Exhausted` happens at most once. Nothing leaves `Exhausted`;
//! a producer that has finished must not pull its upstream again.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    Active,
    Exhausted,
}

impl State {
    pub const fn is_active(self) -> bool {
        matches!(self, State::Active)
    }

    pub const fn is_exhausted(self) -> bool {
        matches!(self, State::Exhausted)
    }

    /// Move to `Exhausted`. `op` names the producer for the trace event, which
    /// fires only on the actual transition.
    pub fn finish(&mut self, op: &'static str) {
        if self.is_active() {
            *self = State::Exhausted;
            #[cfg(feature = "tracing")]
            tracing::trace!(op, "producer exhausted");
            #[cfg(not(feature = "tracing"))]
            let _ = op;
        }
    }
}
