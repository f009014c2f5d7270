//! Property-based tests for the step-trace engine.
//!
//! ## Properties Verified
//!
//! - Folding a sort trace's mutations over the input yields the sorted input
//! - A search on sorted input reports `found` at an index holding the target,
//!   or `not_found` only when the target is absent
//! - Folding Hanoi moves ends with every disk on peg C
//! - Every trace ends on its terminal step or is a single `error` step

use algoviz_core::action::{Peg, Towers};
use algoviz_core::{Action, AlgorithmInput, RecursionAction, SearchAction, SortAction, Trace};
use algoviz_engine::{recursion, Registry};
use proptest::prelude::*;

const SORTS: [&str; 5] = [
    "bubble_sort",
    "selection_sort",
    "insertion_sort",
    "merge_sort",
    "quick_sort",
];

const SEARCHES: [&str; 4] = [
    "linear_search",
    "binary_search",
    "jump_search",
    "interpolation_search",
];

/// Replays the mutating sort steps over a copy of `input`.
fn fold_sort(input: &[i64], trace: &Trace) -> Vec<i64> {
    let mut arr = input.to_vec();
    for step in trace {
        match &step.action {
            Action::Sort(SortAction::Swap { indices }) => arr.swap(indices[0], indices[1]),
            Action::Sort(SortAction::ShiftRight { to, value, .. }) => arr[*to] = *value,
            Action::Sort(SortAction::InsertKey { index, key }) => arr[*index] = *key,
            Action::Sort(SortAction::UpdateRange {
                range_start,
                values,
            }) => arr[*range_start..*range_start + values.len()].copy_from_slice(values),
            _ => {}
        }
    }
    arr
}

fn search_outcome(trace: &Trace) -> Option<usize> {
    trace.steps().iter().find_map(|step| match &step.action {
        Action::Search(SearchAction::Found { indices }) => Some(indices[0]),
        _ => None,
    })
}

/// Searches end on their outcome, the XOR swap on `final_state`, and
/// everything else on `complete`.
fn ends_on_terminal(trace: &Trace) -> bool {
    trace.last().is_some_and(|step| {
        matches!(
            step.name(),
            "complete" | "found" | "not_found" | "final_state"
        )
    })
}

fn sorted_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..40).prop_map(|mut v| {
        v.sort();
        v
    })
}

// ============================================================================
// Sorting
// ============================================================================

proptest! {
    /// Property: replaying mutations reproduces the sorted array
    #[test]
    fn prop_sort_fold_matches_sorted_input(data in prop::collection::vec(-100i64..100, 0..40)) {
        let registry = Registry::builtin();
        let input = AlgorithmInput::Array { data: data.clone() };
        let mut expected = data.clone();
        expected.sort();

        for key in SORTS {
            let trace = registry.run(key, &input).unwrap();
            prop_assert!(trace.last().unwrap().is_complete(), "{} must end complete", key);
            prop_assert_eq!(fold_sort(&data, &trace), expected.clone(), "{} fold mismatch", key);
        }
    }
}

// ============================================================================
// Searching
// ============================================================================

proptest! {
    /// Property: found indices hold the target; not_found means it is absent
    #[test]
    fn prop_search_on_sorted_input(data in sorted_vec(), target in -60i64..60) {
        let registry = Registry::builtin();
        let input = AlgorithmInput::Search { data: data.clone(), target };

        for key in SEARCHES {
            let trace = registry.run(key, &input).unwrap();
            prop_assert!(!trace.is_error(), "{} rejected sorted input", key);
            let last = trace.last().unwrap().name();
            prop_assert!(last == "found" || last == "not_found", "{} ended on {}", key, last);
            prop_assert_eq!(trace.count("complete"), 0);
            match search_outcome(&trace) {
                Some(index) => prop_assert_eq!(data[index], target, "{} wrong index", key),
                None => {
                    prop_assert!(!data.contains(&target), "{} missed {}", key, target);
                    prop_assert_eq!(trace.count("not_found"), 1);
                }
            }
        }
    }

    /// Property: order-dependent searches reject unsorted input
    #[test]
    fn prop_unsorted_input_is_rejected(mut data in prop::collection::vec(0i64..100, 2..20)) {
        data.sort();
        data.reverse();
        prop_assume!(data.first() != data.last());
        let input = AlgorithmInput::Search { data, target: 1 };
        let registry = Registry::builtin();

        for key in ["binary_search", "jump_search", "interpolation_search"] {
            prop_assert!(registry.run(key, &input).unwrap().is_error());
        }
    }
}

// ============================================================================
// Recursion and lifecycle
// ============================================================================

proptest! {
    /// Property: 2^n - 1 moves land every disk on peg C
    #[test]
    fn prop_hanoi_fold_reaches_peg_c(n in 0u32..=6) {
        let trace = recursion::hanoi(n);
        let mut towers = Towers::stacked(n);
        let mut moves = 0;
        for step in &trace {
            if let Action::Recursion(RecursionAction::MoveDisk { disk_id, from_peg, to_peg, .. }) =
                &step.action
            {
                let top = towers.peg_mut(*from_peg).pop();
                prop_assert_eq!(top, Some(*disk_id));
                if let Some(&under) = towers.peg(*to_peg).last() {
                    prop_assert!(under > *disk_id, "larger disk placed on smaller");
                }
                towers.peg_mut(*to_peg).push(*disk_id);
                moves += 1;
            }
        }
        prop_assert_eq!(moves, (1u32 << n) - 1);
        prop_assert_eq!(towers.peg(Peg::C).len(), n as usize);
    }

    /// Property: traces end complete or are a lone error step
    #[test]
    fn prop_traces_are_well_formed(n in 0u32..20, a in -10i64..300, b in 0i64..300) {
        let registry = Registry::builtin();
        let inputs = [
            ("fib_dp", AlgorithmInput::Fibonacci { n }),
            ("hanoi", AlgorithmInput::Hanoi { n_disks: n }),
            ("count_set_bits", AlgorithmInput::BitCount { n: u64::from(n) * 997 }),
            ("bitwise_swap", AlgorithmInput::BitwisePair { a, b }),
            ("linear_search", AlgorithmInput::Search { data: vec![a, b], target: a }),
        ];
        for (key, input) in &inputs {
            let trace = registry.run(key, input).unwrap();
            let well_formed = trace.is_error() || ends_on_terminal(&trace);
            prop_assert!(well_formed, "{} produced a malformed trace", key);
        }
    }
}
