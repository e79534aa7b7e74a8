//! Materializing a producer into a `Vec`.

use lazyseq_core::{DrainConfig, Error, IntoProducer, Producer, Result};

use crate::metrics::emit_consumed;

/// Collect every element of `source`. Never returns for an infinite source;
/// use [`drain`] with a cap for untrusted chains.
pub fn to_vec<S: IntoProducer>(source: S) -> Vec<S::Item> {
    let out: Vec<_> = source.into_producer().into_items().collect();
    emit_consumed("to_vec", out.len());
    out
}

/// Collect `source` under the limits in `cfg`.
///
/// With `max_items = Some(n)`, a source holding exactly `n` elements drains
/// fine; finding an `n + 1`-th element returns [`Error::LimitExceeded`]. That
/// check pulls the extra element, which is then dropped.
pub fn drain<S: IntoProducer>(source: S, cfg: &DrainConfig) -> Result<Vec<S::Item>> {
    let mut producer = source.into_producer();
    let mut out = Vec::with_capacity(cfg.size_hint);
    while let Some(item) = producer.pull() {
        if let Some(limit) = cfg.max_items {
            if out.len() == limit {
                return Err(Error::LimitExceeded { limit });
            }
        }
        out.push(item);
    }
    emit_consumed("drain", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazyseq_core::from_range;

    #[test]
    fn to_vec_collects_everything() {
        assert_eq!(to_vec(from_range(1, 4)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn drain_without_limit() {
        let cfg = DrainConfig::default();
        assert_eq!(drain(1..=3, &cfg).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn drain_at_exactly_the_limit() {
        let cfg = DrainConfig::default().with_max_items(3);
        assert_eq!(drain(1..=3, &cfg).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn drain_caps_infinite_sources() {
        let cfg = DrainConfig::default().with_max_items(100);
        let err = drain(from_range(0u64, u64::MAX), &cfg).unwrap_err();
        assert_eq!(err, Error::LimitExceeded { limit: 100 });
    }
}
