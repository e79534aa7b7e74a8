//! Element-wise transform.

use lazyseq_core::{IntoProducer, Producer, Restart, State};

/// Pulls one element from `source` per pull and yields `f(element)`.
///
/// `f` runs exactly once per upstream element, in upstream order.
pub fn map<S, B, F>(source: S, f: F) -> Map<S::Producer, F>
where
    S: IntoProducer,
    F: FnMut(S::Item) -> B,
{
    Map {
        source: source.into_producer(),
        f,
        state: State::Active,
    }
}

#[derive(Clone)]
pub struct Map<P, F> {
    source: P,
    f: F,
    state: State,
}

impl<B, P, F> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> B,
{
    type Item = B;

    fn pull(&mut self) -> Option<B> {
        if self.state.is_exhausted() {
            return None;
        }
        match self.source.pull() {
            Some(item) => Some((self.f)(item)),
            None => {
                self.state.finish("map");
                None
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl<B, P, F> Restart for Map<P, F>
where
    P: Restart,
    F: FnMut(P::Item) -> B + Clone,
{
    fn restart(&self) -> Self {
        map(self.source.restart(), self.f.clone())
    }
}
