//! Source adapters: everything a combinator accepts as input.
//!
//! [`IntoProducer`] is the "source-like" capability. It is resolved once, when
//! a combinator is constructed, never per pull. Every producer converts to
//! itself, so combinators accept raw ranges and composed chains uniformly.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::ordinal::Ordinal;
use crate::producer::{Producer, Restart};
use crate::state::State;

/// Types that can be converted into a producer.
///
/// This mirrors `IntoIterator` for `Iterator`.
pub trait IntoProducer {
    /// The type of element emitted by the producer.
    type Item;
    /// The producer built from `Self`.
    type Producer: Producer<Item = Self::Item>;

    fn into_producer(self) -> Self::Producer;
}

impl<P: Producer> IntoProducer for P {
    type Item = P::Item;
    type Producer = P;

    fn into_producer(self) -> P {
        self
    }
}

/// An immutable inclusive range `[first, last]` of an ordinal type.
///
/// Not a producer itself; it converts into a fresh [`FromRange`] each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span<T> {
    first: T,
    last: T,
}

impl<T: Ordinal> Span<T> {
    pub const fn new(first: T, last: T) -> Self {
        Self { first, last }
    }

    pub fn first(&self) -> T {
        self.first
    }

    pub fn last(&self) -> T {
        self.last
    }

    /// `true` when `first > last`.
    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn producer(&self) -> FromRange<T> {
        from_range(self.first, self.last)
    }
}

impl<T: Ordinal> IntoProducer for Span<T> {
    type Item = T;
    type Producer = FromRange<T>;

    fn into_producer(self) -> FromRange<T> {
        self.producer()
    }
}

/// Uses the range's original bounds, even if it was partially iterated.
impl<T: Ordinal> IntoProducer for RangeInclusive<T> {
    type Item = T;
    type Producer = FromRange<T>;

    fn into_producer(self) -> FromRange<T> {
        let (first, last) = self.into_inner();
        from_range(first, last)
    }
}

impl<'a, T: Clone> IntoProducer for &'a [T] {
    type Item = T;
    type Producer = FromSlice<'a, T>;

    fn into_producer(self) -> FromSlice<'a, T> {
        from_slice(self)
    }
}

impl<T> IntoProducer for Vec<T> {
    type Item = T;
    type Producer = FromIter<std::vec::IntoIter<T>>;

    fn into_producer(self) -> Self::Producer {
        from_iter(self)
    }
}

/// Yields `a, a+1, ..., b` inclusive, or nothing when `a > b`.
pub fn from_range<T: Ordinal>(a: T, b: T) -> FromRange<T> {
    FromRange {
        first: a,
        last: b,
        next: Some(a),
        state: State::Active,
    }
}

/// Producer over an inclusive ordinal range. See [`from_range`].
#[derive(Debug, Clone)]
pub struct FromRange<T> {
    first: T,
    last: T,
    next: Option<T>,
    state: State,
}

impl<T: Ordinal> Producer for FromRange<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.state.is_exhausted() {
            return None;
        }
        match self.next {
            Some(cur) if cur <= self.last => {
                self.next = if cur == self.last { None } else { cur.succ() };
                Some(cur)
            }
            _ => {
                self.state.finish("range");
                None
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl<T: Ordinal> Restart for FromRange<T> {
    fn restart(&self) -> Self {
        from_range(self.first, self.last)
    }
}

/// Yields clones of the slice elements in index order.
pub fn from_slice<T: Clone>(items: &[T]) -> FromSlice<'_, T> {
    FromSlice {
        items,
        pos: 0,
        state: State::Active,
    }
}

/// Producer over a borrowed slice. See [`from_slice`].
#[derive(Debug, Clone)]
pub struct FromSlice<'a, T> {
    items: &'a [T],
    pos: usize,
    state: State,
}

impl<T: Clone> Producer for FromSlice<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.state.is_exhausted() {
            return None;
        }
        match self.items.get(self.pos) {
            Some(item) => {
                self.pos += 1;
                Some(item.clone())
            }
            None => {
                self.state.finish("slice_source");
                None
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl<T: Clone> Restart for FromSlice<'_, T> {
    fn restart(&self) -> Self {
        from_slice(self.items)
    }
}

/// Adapt any std iterator. The result is fused even if the iterator is not.
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iter.into_iter(),
        state: State::Active,
    }
}

/// Producer over a std iterator. See [`from_iter`].
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: I,
    state: State,
}

impl<I: Iterator> Producer for FromIter<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        if self.state.is_exhausted() {
            return None;
        }
        let item = self.iter.next();
        if item.is_none() {
            self.state.finish("iter");
        }
        item
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}
