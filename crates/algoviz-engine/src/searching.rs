//! Searching family: linear, binary, jump and interpolation search.
//!
//! Every search ends on the first `found` step, or on `not_found` once the
//! candidates are exhausted.
//! Order-dependent searches first check that `data` is non-decreasing and
//! return a single `error` step otherwise.

use smallvec::smallvec;

use algoviz_core::action::SearchPointers;
use algoviz_core::{SearchAction, Trace};

pub fn linear_search(data: &[i64], target: i64) -> Trace {
    let mut trace = Trace::new();
    for (i, &value) in data.iter().enumerate() {
        trace.emit(
            SearchAction::Compare { indices: smallvec![i] },
            format!("Comparing target ({target}) with array[{i}] which is {value}."),
        );
        if value == target {
            return found(trace, target, i);
        }
    }
    not_found(trace, target)
}

pub fn binary_search(data: &[i64], target: i64) -> Trace {
    if !is_sorted(data) {
        return Trace::error("Error: Binary Search requires a sorted array!");
    }

    let mut trace = Trace::new();
    // Signed bounds so `high` may drop below zero when the target is smaller
    // than every element.
    let mut low: isize = 0;
    let mut high: isize = data.len() as isize - 1;

    while low <= high {
        let mid = ((low + high) / 2) as usize;
        let (lo, hi) = (low as usize, high as usize);
        trace.emit(
            SearchAction::HighlightPointers {
                pointers: SearchPointers {
                    low: lo,
                    high: hi,
                    mid: Some(mid),
                    pos: None,
                },
            },
            format!("Searching in range [{lo}, {hi}]. Middle is at index {mid}."),
        );
        trace.emit(
            SearchAction::Compare { indices: smallvec![mid] },
            format!(
                "Comparing target ({target}) with array[{mid}] which is {}.",
                data[mid]
            ),
        );

        if data[mid] == target {
            return found(trace, target, mid);
        } else if data[mid] < target {
            trace.emit(
                SearchAction::Eliminate { range: (lo, mid) },
                format!(
                    "Target ({target}) > {}. Discarding the left half.",
                    data[mid]
                ),
            );
            low = mid as isize + 1;
        } else {
            trace.emit(
                SearchAction::Eliminate { range: (mid, hi) },
                format!(
                    "Target ({target}) < {}. Discarding the right half.",
                    data[mid]
                ),
            );
            high = mid as isize - 1;
        }
    }

    not_found(trace, target)
}

/// Jump search with block size `floor(sqrt(n))`.
pub fn jump_search(data: &[i64], target: i64) -> Trace {
    if !is_sorted(data) {
        return Trace::error("Error: Jump Search requires a sorted array!");
    }

    let n = data.len();
    let mut trace = Trace::new();
    if n == 0 {
        return not_found(trace, target);
    }

    let block = floor_sqrt(n).max(1);
    let mut start = 0;
    let mut end = block.min(n);

    while data[end - 1] < target {
        trace.emit(
            SearchAction::CompareBlock {
                indices: (start..end).collect(),
                last_index: end - 1,
            },
            format!(
                "Block [{start}, {}] ends with {} < {target}. Jumping ahead by {block}.",
                end - 1,
                data[end - 1]
            ),
        );
        start = end;
        if start >= n {
            return not_found(trace, target);
        }
        end = (end + block).min(n);
    }

    trace.emit(
        SearchAction::SearchBlock {
            range: (start, end - 1),
        },
        format!(
            "Target {target} can only be in block [{start}, {}]. Scanning it linearly.",
            end - 1
        ),
    );
    for i in start..end {
        trace.emit(
            SearchAction::Compare { indices: smallvec![i] },
            format!(
                "Comparing target ({target}) with array[{i}] which is {}.",
                data[i]
            ),
        );
        if data[i] == target {
            return found(trace, target, i);
        }
        if data[i] > target {
            break;
        }
    }

    not_found(trace, target)
}

/// Interpolation search.
///
/// A window whose end values are equal probes `low` directly instead of
/// dividing by a zero-width value range.
pub fn interpolation_search(data: &[i64], target: i64) -> Trace {
    if !is_sorted(data) {
        return Trace::error("Error: Interpolation Search requires a sorted array!");
    }

    let mut trace = Trace::new();
    if data.is_empty() {
        return not_found(trace, target);
    }

    let mut low = 0usize;
    let mut high = data.len() - 1;

    while low <= high && target >= data[low] && target <= data[high] {
        let pos = probe_position(data, low, high, target);
        trace.emit(
            SearchAction::Probe {
                pointers: SearchPointers {
                    low,
                    high,
                    mid: None,
                    pos: Some(pos),
                },
            },
            format!("Estimating position in range [{low}, {high}]. Probe lands at index {pos}."),
        );
        trace.emit(
            SearchAction::Compare { indices: smallvec![pos] },
            format!(
                "Comparing target ({target}) with array[{pos}] which is {}.",
                data[pos]
            ),
        );

        if data[pos] == target {
            return found(trace, target, pos);
        }
        if data[pos] < target {
            trace.emit(
                SearchAction::Eliminate { range: (low, pos) },
                format!(
                    "Target ({target}) > {}. Discarding [{low}, {pos}].",
                    data[pos]
                ),
            );
            low = pos + 1;
        } else {
            trace.emit(
                SearchAction::Eliminate { range: (pos, high) },
                format!(
                    "Target ({target}) < {}. Discarding [{pos}, {high}].",
                    data[pos]
                ),
            );
            if pos == 0 {
                break;
            }
            high = pos - 1;
        }
    }

    not_found(trace, target)
}

fn probe_position(data: &[i64], low: usize, high: usize, target: i64) -> usize {
    let span = data[high] as f64 - data[low] as f64;
    if span == 0.0 {
        return low;
    }
    let offset = ((high - low) as f64 / span * (target as f64 - data[low] as f64)).floor();
    (low + offset as usize).min(high)
}

fn found(mut trace: Trace, target: i64, index: usize) -> Trace {
    trace.emit(
        SearchAction::Found {
            indices: smallvec![index],
        },
        format!("Target {target} found at index {index}!"),
    );
    trace
}

fn not_found(mut trace: Trace, target: i64) -> Trace {
    trace.emit(
        SearchAction::NotFound,
        format!("Target {target} not found in the array."),
    );
    trace
}

pub(crate) fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

fn floor_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
