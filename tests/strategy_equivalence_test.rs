// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! All four membership strategies give the same answers; they differ only
//! in how much work they do.

mod common;

use euler_search::membership::{
    BitmapFiltered, BucketHash, ExactMap, MembershipIndex, Probe, RangeScan,
};
use euler_search::{
    search, Enumerator, NoProgress, PowerTable, SearchConfig, Strategy, WidePower, Width,
};
use strum::IntoEnumIterator;

fn all_indexes<W: WidePower>(
    table: &PowerTable<W>,
    bits: usize,
) -> Vec<Box<dyn MembershipIndex<W> + '_>> {
    vec![
        Box::new(ExactMap::new(table)),
        Box::new(BitmapFiltered::new(table, bits).unwrap()),
        Box::new(BucketHash::new(table, bits).unwrap()),
        Box::new(RangeScan::new(table)),
    ]
}

/// Every quadruple sum, probed with a fresh hint.
#[test]
fn test_agree_on_every_enumerated_sum() {
    let table = PowerTable::<u64>::build(40).unwrap();
    let indexes = all_indexes(&table, 256);
    let mut e = Enumerator::new(&table);
    while e.current().is_some() {
        let sum = e.current_sum();
        let answers: Vec<_> = indexes.iter().map(|i| i.lookup(sum, &mut 0)).collect();
        assert!(answers.windows(2).all(|w| w[0] == w[1]), "{sum}: {answers:?}");
        e.advance();
    }
}

/// Range scan with the enumerator's hint agrees with the exact map.
#[test]
fn test_range_scan_with_running_hint() {
    let table = PowerTable::<u128>::build(150).unwrap();
    let exact = ExactMap::new(&table);
    let range = RangeScan::new(&table);
    let mut e = Enumerator::new(&table);
    let mut hits = 0;
    while e.current().is_some() {
        let sum = e.current_sum();
        let expected = exact.get(sum);
        assert_eq!(range.lookup(sum, e.hint_mut()), expected);
        hits += usize::from(expected.is_some());
        e.advance();
    }
    assert_eq!(hits, 1);
}

#[test]
fn test_agree_on_wide_values() {
    let table = PowerTable::<u128>::build(3000).unwrap();
    let indexes = all_indexes(&table, 1 << 12);
    for (base, power) in table.iter().skip(2).step_by(7) {
        for sum in [power - 1, power, power + 1] {
            let expected = if sum == power { Some(base) } else { None };
            for index in &indexes {
                assert_eq!(index.lookup(sum, &mut 0), expected, "{:?}", index.strategy());
            }
        }
    }
}

/// Powers above 2^64 exercise the high word of every strategy.
#[test]
fn test_agree_above_sixty_four_bits() {
    let table = PowerTable::<u128>::build(9000).unwrap();
    let indexes = all_indexes(&table, 1 << 12);
    let mut checked = 0;
    for (base, power) in table.iter().skip(7200).step_by(13) {
        assert!(power > u64::MAX as u128);
        for sum in [power - 1, power, power + 1, power + (1 << 64)] {
            let expected = if sum == power { Some(base) } else { None };
            for index in &indexes {
                assert_eq!(index.lookup(sum, &mut 0), expected, "{:?}", index.strategy());
            }
        }
        checked += 1;
    }
    assert!(checked > 100);
}

/// Frye's 1988 counterexample: 55^5 + 3183^5 + 28969^5 + 85282^5 = 85359^5.
#[test]
fn test_every_strategy_finds_frye_root() {
    let table = PowerTable::<u128>::build(85_360).unwrap();
    let sum = [55, 3183, 28_969, 85_282]
        .iter()
        .map(|&b| table.get(b))
        .fold(0u128, |acc, p| acc + p);
    assert!(sum >> 64 > 0);
    for index in all_indexes(&table, 1 << 17) {
        let mut hint = 85_282;
        assert_eq!(index.lookup(sum, &mut hint), Some(85_359), "{:?}", index.strategy());
        assert_eq!(index.lookup(sum + 1, &mut 0), None, "{:?}", index.strategy());
    }
}

#[test]
fn test_hashed_filters_reject() {
    let table = PowerTable::<u64>::build(100).unwrap();
    let bitmap = BitmapFiltered::new(&table, 1 << 14).unwrap();
    let bucket = BucketHash::new(&table, 1 << 14).unwrap();
    for index in [&bitmap as &dyn MembershipIndex<u64>, &bucket] {
        let mut rejected = 0;
        for (_, power) in table.iter().skip(2) {
            let probe = index.probe(power + 1, &mut 0);
            assert_eq!(probe.base(), None, "{:?}", index.strategy());
            rejected += usize::from(probe == Probe::Rejected);
        }
        // 100 occupied slots out of 2^14: nearly every neighbour is filtered.
        assert!(rejected > 90, "{:?} rejected {rejected}", index.strategy());
    }
}

#[test]
fn test_search_summaries_agree() {
    let mut summaries = Vec::new();
    for strategy in Strategy::iter() {
        let config = SearchConfig::new(60)
            .with_strategy(strategy)
            .with_width(Width::U64)
            .with_bitmap_bits(1 << 10);
        let mut sink = common::RecordingSink::default();
        let summary = search(&config, &mut sink, &mut NoProgress).unwrap();
        summaries.push((summary.iterations(), summary.hits(), summary.roots));
    }
    assert!(summaries.windows(2).all(|w| w[0] == w[1]));
}
