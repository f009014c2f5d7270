//! Dynamic programming: memoized Fibonacci and the 0/1 knapsack table.

use algoviz_core::action::{ExcludedOption, IncludedOption, MemoTable};
use algoviz_core::{DpAction, KnapsackItem, Trace};

/// Largest `n` accepted by [`fib_dp`].
pub const MAX_FIB_N: u32 = 12;

/// State owned by one top-level Fibonacci run.
struct FibRun {
    trace: Trace,
    memo: MemoTable,
    next_id: u32,
}

impl FibRun {
    fn fib(&mut self, n: u32, parent_id: Option<u32>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.trace.emit(
            DpAction::Call { id, parent_id, n },
            format!("Calling fib({n})."),
        );
        self.trace.emit(
            DpAction::CheckMemo {
                id,
                n,
                memo_state: self.memo.clone(),
            },
            format!("Is fib({n}) in memo table?"),
        );

        if let Some(&value) = self.memo.get(&n) {
            self.trace.emit(
                DpAction::MemoHit { id, n, value },
                format!("Yes! fib({n}) = {value}. Returning stored value."),
            );
            return value;
        }

        if n <= 1 {
            let value = u64::from(n);
            self.trace.emit(
                DpAction::BaseCase { id, n, value },
                format!("Base case reached. fib({n}) = {value}."),
            );
            self.store(id, n, value);
            return value;
        }

        let val1 = self.fib(n - 1, Some(id));
        let val2 = self.fib(n - 2, Some(id));
        let result = val1 + val2;
        self.trace.emit(
            DpAction::Calculate {
                id,
                n,
                val1,
                val2,
                result,
            },
            format!("Calculating fib({n}) = {val1} + {val2} = {result}."),
        );
        self.store(id, n, result);
        result
    }

    fn store(&mut self, id: u32, n: u32, value: u64) {
        self.memo.insert(n, value);
        self.trace.emit(
            DpAction::StoreMemo {
                id,
                n,
                value,
                memo_state: self.memo.clone(),
            },
            format!("Storing result fib({n}) = {value} in memo."),
        );
    }
}

/// Top-down memoized Fibonacci. Call ids increase monotonically from 0 and
/// every call records its parent's id, so the steps describe the call tree.
pub fn fib_dp(n: u32) -> Trace {
    if n > MAX_FIB_N {
        return Trace::error(format!(
            "Input is too large for animation. Please choose a number <= {MAX_FIB_N}."
        ));
    }

    let mut run = FibRun {
        trace: Trace::new(),
        memo: MemoTable::new(),
        next_id: 0,
    };
    let result = run.fib(n, None);

    let mut trace = run.trace;
    trace.emit(
        DpAction::FibComplete { result },
        format!("Final result for fib({n}) is {result}."),
    );
    trace
}

/// Bottom-up 0/1 knapsack over an `(n + 1) x (capacity + 1)` table.
pub fn knapsack_01(capacity: usize, items: &[KnapsackItem]) -> Trace {
    let weights: Vec<usize> = items.iter().map(|item| item.weight).collect();
    let values: Vec<u64> = items.iter().map(|item| item.value).collect();
    let n = items.len();
    let mut dp = vec![vec![0u64; capacity + 1]; n + 1];
    let mut trace = Trace::new();

    trace.emit(
        DpAction::InitTable {
            rows: n + 1,
            cols: capacity + 1,
            weights: weights.clone(),
            values: values.clone(),
        },
        "Initializing DP table for Knapsack problem.",
    );

    for i in 1..=n {
        let (item_weight, item_value) = (weights[i - 1], values[i - 1]);
        for w in 1..=capacity {
            trace.emit(
                DpAction::HighlightCell { cell: (i, w) },
                format!(
                    "Calculating value for item {i} (w:{item_weight}, v:{item_value}) at capacity {w}."
                ),
            );

            if item_weight > w {
                dp[i][w] = dp[i - 1][w];
                trace.emit(
                    DpAction::CopyAbove {
                        from_cell: (i - 1, w),
                        to_cell: (i, w),
                        value: dp[i][w],
                    },
                    format!("Item {i} is too heavy. Value is same as above: {}.", dp[i][w]),
                );
            } else {
                let without = dp[i - 1][w];
                let with = item_value + dp[i - 1][w - item_weight];
                dp[i][w] = with.max(without);
                trace.emit(
                    DpAction::CompareOptions {
                        cell: (i, w),
                        option_without: ExcludedOption {
                            cell: (i - 1, w),
                            value: without,
                        },
                        option_with: IncludedOption {
                            cell: (i - 1, w - item_weight),
                            value: with,
                            item_value,
                        },
                        result: dp[i][w],
                    },
                    format!(
                        "Choose max between excluding ({without}) and including ({with}). Max is {}.",
                        dp[i][w]
                    ),
                );
            }
        }
    }

    let result = dp[n][capacity];
    trace.emit(
        DpAction::KnapsackComplete {
            result,
            final_cell: (n, capacity),
        },
        format!("Knapsack calculation complete. Maximum value is {result}."),
    );
    trace
}
