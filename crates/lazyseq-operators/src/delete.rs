//! Positional removal.

use lazyseq_core::{IntoProducer, Producer, Restart, State};

/// Yields every upstream element whose zero-based position is *not* in
/// `first..=last`.
///
/// Elements after `last` pass through unchanged, so unlike `slice` this always
/// traverses the whole upstream. `last < first` deletes nothing.
pub fn delete<S: IntoProducer>(source: S, first: usize, last: usize) -> Delete<S::Producer> {
    Delete {
        source: source.into_producer(),
        first,
        last,
        pos: 0,
        state: State::Active,
    }
}

#[derive(Debug, Clone)]
pub struct Delete<P> {
    source: P,
    first: usize,
    last: usize,
    pos: usize,
    state: State,
}

impl<P: Producer> Producer for Delete<P> {
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        if self.state.is_exhausted() {
            return None;
        }
        while let Some(item) = self.source.pull() {
            let pos = self.pos;
            self.pos = self.pos.saturating_add(1);
            if !(self.first..=self.last).contains(&pos) {
                return Some(item);
            }
        }
        self.state.finish("delete");
        None
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl<P: Restart> Restart for Delete<P> {
    fn restart(&self) -> Self {
        delete(self.source.restart(), self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazyseq_core::from_range;

    #[test]
    fn removes_positions_not_values() {
        let out: Vec<_> = delete(1..=10, 4, 8).into_items().collect();
        assert_eq!(out, vec![1, 2, 3, 4, 10]);
    }

    #[test]
    fn reversed_bounds_delete_nothing() {
        let out: Vec<_> = delete(from_range(1, 5), 3, 1).into_items().collect();
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn bounds_past_the_end() {
        let out: Vec<_> = delete(from_range(1, 5), 3, 100).into_items().collect();
        assert_eq!(out, vec![1, 2, 3]);
    }
}
