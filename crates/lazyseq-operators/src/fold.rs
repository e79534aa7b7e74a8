//! Left folds. These are terminal: they drain the source completely.

use lazyseq_core::{Error, IntoProducer, Producer, Result};

use crate::metrics::emit_consumed;

/// Reduce `source` left to right starting from `seed`.
///
/// Returns `seed` unchanged when `source` is empty.
pub fn foldl<S, B, F>(source: S, seed: B, f: F) -> B
where
    S: IntoProducer,
    F: FnMut(B, S::Item) -> B,
{
    let (acc, consumed) = fold_counting(source.into_producer(), seed, f);
    emit_consumed("foldl", consumed);
    acc
}

/// Reduce `source` left to right, using its first element as the initial
/// accumulator.
///
/// Returns [`Error::EmptySequence`] when `source` yields nothing.
pub fn foldl1<S, F>(source: S, f: F) -> Result<S::Item>
where
    S: IntoProducer,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut producer = source.into_producer();
    let first = producer
        .pull()
        .ok_or(Error::EmptySequence("foldl1 needs at least one element"))?;
    let (acc, consumed) = fold_counting(producer, first, f);
    emit_consumed("foldl1", consumed + 1);
    Ok(acc)
}

/// Drain `producer` into `seed`, returning the result and the number of
/// elements pulled.
fn fold_counting<P, B, F>(mut producer: P, seed: B, mut f: F) -> (B, usize)
where
    P: Producer,
    F: FnMut(B, P::Item) -> B,
{
    let mut acc = seed;
    let mut consumed = 0usize;
    while let Some(item) = producer.pull() {
        acc = f(acc, item);
        consumed += 1;
    }
    (acc, consumed)
}
