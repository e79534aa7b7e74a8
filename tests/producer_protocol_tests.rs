//! Exhaustion and replay guarantees that every producer upholds.


use lazyseq::prelude::*;
use test_data_gen::{Probe, Resurrecting};

fn assert_sticky<P: Producer>(mut p: P, label: &str) {
    while p.pull().is_some() {}
    assert!(p.is_exhausted(), "{label}: not marked exhausted");
    for _ in 0..5 {
        assert!(p.pull().is_none(), "{label}: resurrected");
    }
}

#[test]
fn test_exhaustion_is_idempotent_for_every_producer() {
    assert_sticky(from_range(1, 3), "range");
    assert_sticky(from_slice(&[1, 2]), "slice source");
    assert_sticky(from_iter(vec![1, 2]), "iter source");
    assert_sticky(map(1..=3, |x| x), "map");
    assert_sticky(filter(1..=3, |x| *x > 1), "filter");
    assert_sticky(concat([1..=2, 3..=4]), "concat");
    assert_sticky(zip(1..=3, 1..=2), "zip");
    assert_sticky(slice(1..=10, 2, 4), "slice");
    assert_sticky(delete(1..=10, 2, 4), "delete");
}

#[test]
fn test_no_resurrection_over_misbehaving_upstream() {
    let up = || Resurrecting::new(vec![1, 2, 3], 99);

    assert_sticky(map(up(), |x| x), "map");
    assert_sticky(filter(up(), |_| true), "filter");
    assert_sticky(concat([up(), up()]), "concat");
    assert_sticky(zip(up(), 1..=10), "zip");
    assert_sticky(slice(up(), 0, 100), "slice");
    assert_sticky(delete(up(), 0, 0), "delete");

    assert_eq!(to_vec(concat([up(), up()])), vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn test_exhausted_producer_stops_pulling_upstream() {
    let (probe, pulls) = Probe::new(3);
    let mut p = map(probe, |x| x);
    while p.pull().is_some() {}
    let after = pulls.get();
    for _ in 0..3 {
        assert_eq!(p.pull(), None);
    }
    assert_eq!(pulls.get(), after);
}

#[test]
fn test_zip_advances_both_sides_on_terminating_pull() {
    let (left, left_pulls) = Probe::new(2);
    let (right, right_pulls) = Probe::new(10);
    let out = to_vec(zip(left, right));
    assert_eq!(out, vec![(0, 0), (1, 1)]);
    assert_eq!(left_pulls.get(), 3);
    assert_eq!(right_pulls.get(), 3);
}

#[test]
fn test_restart_yields_independent_replay() {
    let mut chain = from_range(1, 10)
        .filter(|x| x % 2 == 1)
        .map(|x| x * 10)
        .slice(1, 3);

    assert_eq!(chain.pull(), Some(30));
    let replay = chain.restart();
    assert_eq!(to_vec(replay), vec![30, 50, 70]);
    assert_eq!(to_vec(chain), vec![50, 70]);
}

#[test]
fn test_clone_snapshots_current_position() {
    let mut p = zip(from_range(1, 4), from_range(10, 13));
    assert_eq!(p.pull(), Some((1, 10)));
    let snapshot = p.clone();
    assert_eq!(to_vec(p), vec![(2, 11), (3, 12), (4, 13)]);
    assert_eq!(to_vec(snapshot), vec![(2, 11), (3, 12), (4, 13)]);
}

#[test]
fn test_span_is_reusable_source() {
    let span = Span::new(3, 6);
    let total = foldl(span, 0, |a, b| a + b);
    let doubled = to_vec(map(span, |x| x * 2));
    assert_eq!(total, 18);
    assert_eq!(doubled, vec![6, 8, 10, 12]);
}

#[test]
fn test_items_is_a_fused_iterator() {
    let mut it = slice(from_range(1, 100), 0, 1).into_items();
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
    assert!(it.into_inner().is_exhausted());
}
