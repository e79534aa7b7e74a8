//! Pairwise combination of two sources.

use lazyseq_core::{IntoProducer, Producer, Restart, State};

/// Yields `(a, b)` pairs until either source exhausts.
///
/// Each pull advances *both* sources before checking for exhaustion, including
/// the terminating pull: when `a` runs out, `b` has still been pulled once more
/// and that element is dropped. Side-effecting sources observe this extra pull.
pub fn zip<A, B>(a: A, b: B) -> Zip<A::Producer, B::Producer>
where
    A: IntoProducer,
    B: IntoProducer,
{
    Zip {
        a: a.into_producer(),
        b: b.into_producer(),
        state: State::Active,
    }
}

#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
    state: State,
}

impl<A: Producer, B: Producer> Producer for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn pull(&mut self) -> Option<Self::Item> {
        if self.state.is_exhausted() {
            return None;
        }
        let a = self.a.pull();
        let b = self.b.pull();
        match (a, b) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => {
                self.state.finish("zip");
                None
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl<A: Restart, B: Restart> Restart for Zip<A, B> {
    fn restart(&self) -> Self {
        zip(self.a.restart(), self.b.restart())
    }
}
