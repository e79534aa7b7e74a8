//! Method-chaining surface over producers.
//!
//! Each method forwards to the free function of the same name, so
//! `from_range(1, 10).filter(..).map(..)` and `map(filter(1..=10, ..), ..)`
//! build the same producer. Raw sources (ranges, slices, vectors) enter a
//! chain through the free functions or `into_producer()`.

use lazyseq_core::{DrainConfig, IntoProducer, Producer, Result};

use crate::concat::{concat, Concat};
use crate::delete::{delete, Delete};
use crate::filter::{filter, Filter};
use crate::map::{map, Map};
use crate::slice::{slice, slice_by, Slice};
use crate::zip::{zip, Zip};

pub trait ProducerExt: Producer + Sized {
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> B,
    {
        map(self, f)
    }

    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        filter(self, pred)
    }

    /// Concatenate `self` with `rest`, which must convert to the same
    /// producer type.
    fn concat<I>(self, rest: I) -> Concat<Self>
    where
        I: IntoIterator,
        I::Item: IntoProducer<Producer = Self>,
    {
        concat(std::iter::once(self).chain(rest.into_iter().map(IntoProducer::into_producer)))
    }

    fn zip<S: IntoProducer>(self, other: S) -> Zip<Self, S::Producer> {
        zip(self, other)
    }

    fn slice(self, first: usize, last: usize) -> Slice<Self> {
        slice(self, first, last)
    }

    fn slice_by(self, first: usize, last: usize, step: usize) -> Result<Slice<Self>> {
        slice_by(self, first, last, step)
    }

    fn delete(self, first: usize, last: usize) -> Delete<Self> {
        delete(self, first, last)
    }

    fn foldl<B, F>(self, seed: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        crate::fold::foldl(self, seed, f)
    }

    fn foldl1<F>(self, f: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        crate::fold::foldl1(self, f)
    }

    fn to_vec(self) -> Vec<Self::Item> {
        crate::drain::to_vec(self)
    }

    fn drain(self, cfg: &DrainConfig) -> Result<Vec<Self::Item>> {
        crate::drain::drain(self, cfg)
    }
}

impl<P: Producer> ProducerExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use lazyseq_core::from_range;

    #[test]
    fn chains_read_left_to_right() {
        let out = from_range(1, 20)
            .filter(|x| x % 2 == 0)
            .map(|x| x * x)
            .filter(|x| x % 3 != 0)
            .to_vec();
        assert_eq!(out, vec![4, 16, 64, 100, 196, 256, 400]);
    }

    #[test]
    fn chain_matches_nested_calls() {
        let chained = from_range(1, 10).map(|x| x + 1).slice(2, 5).to_vec();
        let nested = crate::to_vec(slice(map(1..=10, |x| x + 1), 2, 5));
        assert_eq!(chained, nested);
    }

    #[test]
    fn concat_method_takes_same_typed_rest() {
        let out = from_range(1, 2)
            .concat([from_range(5, 5), from_range(8, 9)])
            .to_vec();
        assert_eq!(out, vec![1, 2, 5, 8, 9]);
    }

    #[test]
    fn zip_with_raw_source() {
        let out = from_range(1, 3).zip(vec!["a", "b"]).to_vec();
        assert_eq!(out, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn terminal_methods() {
        assert_eq!(from_range(1, 10).foldl(0, |a, b| a + b), 55);
        assert_eq!(from_range(1, 10).delete(4, 8).foldl1(|a, b| a + b), Ok(20));
    }
}
