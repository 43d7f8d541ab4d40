//! Generic aggregation primitives shared by the statistics and relation
//! analyzers. Pure, total functions: empty input yields empty or zero-filled
//! output, never an error.

use chrono::{Duration, NaiveDate};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of each key produced by `key_fn`.
///
/// The returned map carries no ordering guarantee; consumers sort explicitly.
pub fn frequency_count<I, K, F>(items: I, mut key_fn: F) -> HashMap<K, usize>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(I::Item) -> K,
{
    items.into_iter().fold(HashMap::new(), |mut acc, item| {
        *acc.entry(key_fn(item)).or_insert(0) += 1;
        acc
    })
}

/// Stable descending sort by `cmp` (an ascending comparator), truncated to `n`.
///
/// Stability means equal elements keep their relative input order, which is
/// what makes every top-N tie-break in this crate deterministic.
pub fn top_n_by<T, F>(mut entries: Vec<T>, n: usize, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    entries.sort_by(|a, b| cmp(b, a));
    entries.truncate(n);
    entries
}

/// Buckets items into a contiguous daily series ending at `today` inclusive.
///
/// The series is always exactly `window_days` long, oldest to newest, with
/// zero counts for days no `date_fn(item)` falls on. Items dated outside the
/// window are ignored.
pub fn bucket_by_day<T, F>(
    items: &[T],
    date_fn: F,
    window_days: usize,
    today: NaiveDate,
) -> Vec<(NaiveDate, usize)>
where
    F: Fn(&T) -> Option<NaiveDate>,
{
    if window_days == 0 {
        return Vec::new();
    }

    let start = today - Duration::days(window_days as i64 - 1);
    let mut counts = vec![0usize; window_days];

    for item in items {
        if let Some(date) = date_fn(item) {
            let offset = (date - start).num_days();
            if offset >= 0 && (offset as usize) < window_days {
                counts[offset as usize] += 1;
            }
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (start + Duration::days(i as i64), count))
        .collect()
}
