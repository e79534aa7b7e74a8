//! Predicate filter.

use lazyseq_core::{IntoProducer, Producer, Restart, State};

/// Yields the upstream elements for which `pred` holds, in upstream order.
///
/// Every upstream element is inspected exactly once. A pull that finds no
/// match before the upstream ends exhausts this producer.
pub fn filter<S, F>(source: S, pred: F) -> Filter<S::Producer, F>
where
    S: IntoProducer,
    F: FnMut(&S::Item) -> bool,
{
    Filter {
        source: source.into_producer(),
        pred,
        state: State::Active,
    }
}

#[derive(Clone)]
pub struct Filter<P, F> {
    source: P,
    pred: F,
    state: State,
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        if self.state.is_exhausted() {
            return None;
        }
        while let Some(item) = self.source.pull() {
            if (self.pred)(&item) {
                return Some(item);
            }
        }
        self.state.finish("filter");
        None
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl<P, F> Restart for Filter<P, F>
where
    P: Restart,
    F: FnMut(&P::Item) -> bool + Clone,
{
    fn restart(&self) -> Self {
        filter(self.source.restart(), self.pred.clone())
    }
}
