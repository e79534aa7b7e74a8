//! Sequential concatenation of zero or more sources.

use lazyseq_core::{IntoProducer, Producer, Restart, State};

/// Drains each source completely, in order, then exhausts.
///
/// All sources must convert to the same producer type; use
/// [`Producer::boxed`] to concatenate producers of different types. With zero
/// sources the result exhausts on the first pull.
pub fn concat<I>(sources: I) -> Concat<<I::Item as IntoProducer>::Producer>
where
    I: IntoIterator,
    I::Item: IntoProducer,
{
    Concat {
        sources: sources
            .into_iter()
            .map(IntoProducer::into_producer)
            .collect(),
        index: 0,
        state: State::Active,
    }
}

#[derive(Debug, Clone)]
pub struct Concat<P> {
    sources: Vec<P>,
    index: usize,
    state: State,
}

impl<P: Producer> Producer for Concat<P> {
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        if self.state.is_exhausted() {
            return None;
        }
        while let Some(current) = self.sources.get_mut(self.index) {
            if let Some(item) = current.pull() {
                return Some(item);
            }
            self.index += 1;
        }
        self.state.finish("concat");
        None
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl<P: Restart> Restart for Concat<P> {
    fn restart(&self) -> Self {
        concat(self.sources.iter().map(Restart::restart))
    }
}
