//! Puts results from parallel workers back into (year, day, part) order
//!
//! Two min-heaps: the keys still owed, and results that arrived early.
//! A result is released only once every smaller key has been released.

use crate::executor::{SolverResult, WorkItem};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Key for ordering results, ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Min-heap adapter keyed on [`ResultKey`]
struct Early(SolverResult);

impl Early {
    fn key(&self) -> ResultKey {
        ResultKey::from(&self.0)
    }
}

impl Ord for Early {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Early {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Early {}

impl PartialEq for Early {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

pub struct ResultAggregator {
    owed: BinaryHeap<Reverse<ResultKey>>,
    early: BinaryHeap<Early>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            owed: expected_keys.into_iter().map(Reverse).collect(),
            early: BinaryHeap::new(),
        }
    }

    /// Expect one result per part of every work item
    pub fn for_work_items(work_items: &[WorkItem]) -> Self {
        Self::new(work_items.iter().flat_map(|w| {
            w.parts.clone().map(move |part| ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        }))
    }

    /// Accept a result and release everything now in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.early.push(Early(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(top)) = (self.owed.peek(), self.early.peek()) {
            if top.key() != *next {
                break;
            }
            self.owed.pop();
            if let Some(Early(result)) = self.early.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.early.drain().map(|e| e.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    /// Keys never received, ascending
    pub fn missing(&self) -> Vec<ResultKey> {
        let mut keys: Vec<_> = self.owed.iter().map(|Reverse(k)| *k).collect();
        keys.sort();
        keys
    }

    pub fn is_complete(&self) -> bool {
        self.owed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn make_result(k: ResultKey) -> SolverResult {
        SolverResult {
            year: k.year,
            day: k.day,
            part: k.part,
            answer: Ok(format!("{}_{}_{}", k.year, k.day, k.part)),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: TimeDelta::milliseconds(10),
        }
    }

    fn keys_of(results: &[SolverResult]) -> Vec<ResultKey> {
        results.iter().map(ResultKey::from).collect()
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg = ResultAggregator::new([key(2021, 9, 1), key(2021, 9, 2), key(2021, 11, 1)]);

        assert!(agg.add(make_result(key(2021, 9, 2))).is_empty());
        assert!(agg.add(make_result(key(2021, 11, 1))).is_empty());

        let ready = agg.add(make_result(key(2021, 9, 1)));
        assert_eq!(
            keys_of(&ready),
            vec![key(2021, 9, 1), key(2021, 9, 2), key(2021, 11, 1)]
        );
        assert!(agg.is_complete());
    }

    #[test]
    fn test_for_work_items() {
        let work = [
            WorkItem {
                year: 2021,
                day: 9,
                parts: 1..=2,
            },
            WorkItem {
                year: 2021,
                day: 15,
                parts: 2..=2,
            },
        ];
        let agg = ResultAggregator::for_work_items(&work);
        assert_eq!(
            agg.missing(),
            vec![key(2021, 9, 1), key(2021, 9, 2), key(2021, 15, 2)]
        );
    }

    #[test]
    fn test_drain_and_missing() {
        let mut agg = ResultAggregator::new([key(2021, 11, 1), key(2021, 11, 2)]);

        agg.add(make_result(key(2021, 11, 2)));
        assert!(!agg.is_complete());
        assert_eq!(agg.missing(), vec![key(2021, 11, 1), key(2021, 11, 2)]);

        let remaining = agg.drain();
        assert_eq!(keys_of(&remaining), vec![key(2021, 11, 2)]);
    }

    #[test]
    fn test_drain_sorts_buffered_results() {
        let mut agg = ResultAggregator::new([
            key(2021, 9, 1),
            key(2021, 9, 2),
            key(2021, 11, 1),
            key(2021, 15, 2),
        ]);

        for k in [key(2021, 15, 2), key(2021, 9, 2), key(2021, 11, 1)] {
            assert!(agg.add(make_result(k)).is_empty());
        }

        assert_eq!(
            keys_of(&agg.drain()),
            vec![key(2021, 9, 2), key(2021, 11, 1), key(2021, 15, 2)]
        );
        assert!(agg.drain().is_empty());
    }

    proptest! {
        /// **Property 1: Arrival order never changes output order**
        /// *For any* permutation of the expected keys, the concatenated
        /// output of `add` is the keys in ascending order.
        #[test]
        fn prop_any_arrival_order_sorted(
            keys in prop::collection::btree_set((2015u16..2035, 1u8..=25, 1u8..=2), 1..40)
                .prop_map(|s| s.into_iter().map(|(y, d, p)| key(y, d, p)).collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let mut agg = ResultAggregator::new(keys.clone());
            let mut released = Vec::new();
            for k in &keys {
                released.extend(agg.add(make_result(*k)));
            }

            let mut sorted = keys;
            sorted.sort();
            prop_assert_eq!(keys_of(&released), sorted);
            prop_assert!(agg.is_complete());
        }
    }
}
