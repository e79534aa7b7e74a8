//! Positional selection with early termination.
//!
//! Positions are zero-based over the *upstream* sequence. Once the position
//! passes `last` the producer exhausts without pulling upstream again, so a
//! slice can cut an infinite source short.

use lazyseq_core::{Error, IntoProducer, Producer, Restart, Result, State};

/// Yields upstream positions `first..=last`.
///
/// `last < first` selects nothing: the producer starts exhausted and never
/// pulls upstream.
pub fn slice<S: IntoProducer>(source: S, first: usize, last: usize) -> Slice<S::Producer> {
    Slice::new(source.into_producer(), first, last, 1)
}

/// Yields upstream positions `p` in `first..=last` with `(p - first) % step == 0`.
///
/// Returns [`Error::InvalidParameter`] when `step` is zero.
pub fn slice_by<S: IntoProducer>(
    source: S,
    first: usize,
    last: usize,
    step: usize,
) -> Result<Slice<S::Producer>> {
    if step == 0 {
        return Err(Error::InvalidParameter("slice step must be positive".into()));
    }
    Ok(Slice::new(source.into_producer(), first, last, step))
}

#[derive(Debug, Clone)]
pub struct Slice<P> {
    source: P,
    first: usize,
    last: usize,
    step: usize,
    /// Position of the next upstream element; `None` once past `usize::MAX`.
    next_pos: Option<usize>,
    state: State,
}

impl<P> Slice<P> {
    fn new(source: P, first: usize, last: usize, step: usize) -> Self {
        let mut state = State::Active;
        if last < first {
            state.finish("slice");
        }
        Self {
            source,
            first,
            last,
            step,
            next_pos: Some(0),
            state,
        }
    }

    fn selects(&self, pos: usize) -> bool {
        pos >= self.first && (pos - self.first) % self.step == 0
    }
}

impl<P: Producer> Producer for Slice<P> {
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        while self.state.is_active() {
            let pos = match self.next_pos {
                Some(pos) if pos <= self.last => pos,
                _ => break,
            };
            let Some(item) = self.source.pull() else {
                break;
            };
            self.next_pos = pos.checked_add(1);
            if self.selects(pos) {
                return Some(item);
            }
        }
        self.state.finish("slice");
        None
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl<P: Restart> Restart for Slice<P> {
    fn restart(&self) -> Self {
        Slice::new(self.source.restart(), self.first, self.last, self.step)
    }
}
