//! The `Producer` trait and its std bridges.
//!
//! A producer owns its position and its upstream handles exclusively. Pulling
//! mutates that state, so producers are single-owner and single-threaded; no
//! synchronization is provided.

use std::iter::FusedIterator;

/// A resumable, stateful sequence generator.
///
/// Contract:
/// - `pull` returns `Some(item)` for the next element or `None` once exhausted.
/// - After the first `None`, every subsequent `pull` returns `None` and has no
///   side effects on upstream producers.
/// - A panic raised by a user closure inside `pull` propagates to the caller.
pub trait Producer {
    /// The type of element emitted by this producer.
    type Item;

    /// Emit the next element, or `None` when exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Whether this producer has already reported exhaustion.
    ///
    /// `false` does not promise that the next `pull` yields an element.
    fn is_exhausted(&self) -> bool;

    /// Wrap this producer as a std `Iterator` so it can drive a `for` loop or
    /// `collect()`.
    fn into_items(self) -> Items<Self>
    where
        Self: Sized,
    {
        Items { producer: self }
    }

    /// Erase the concrete type, e.g. to concatenate producers of different types.
    fn boxed<'a>(self) -> BoxProducer<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// Explicit replay: build a fresh, independent producer that starts from the
/// beginning of the same logical sequence.
///
/// The receiver is left untouched. This is the only way to consume a sequence
/// twice; producers never share state implicitly.
pub trait Restart: Producer {
    fn restart(&self) -> Self
    where
        Self: Sized;
}

/// A type-erased producer.
pub type BoxProducer<'a, T> = Box<dyn Producer<Item = T> + 'a>;

impl<P: Producer + ?Sized> Producer for &mut P {
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        (**self).pull()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        (**self).pull()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

/// Iterator view of a producer. See [`Producer::into_items`].
#[derive(Debug, Clone)]
pub struct Items<P> {
    producer: P,
}

impl<P> Items<P> {
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P: Producer> Iterator for Items<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.producer.pull()
    }
}

impl<P: Producer> FusedIterator for Items<P> {}
