//! Sorting family: bubble, selection, insertion, merge and quick sort.
//!
//! Each function copies its input on entry and sorts the copy, echoing every
//! mutation (`swap`, `shift_right`, `insert_key`, `update_range`) as it
//! happens. Folding those steps over the original input reproduces the
//! sorted sequence.

use smallvec::smallvec;

use algoviz_core::{SortAction, Trace};

const SORTED: &str = "Array is fully sorted.";

pub fn bubble_sort(data: &[i64]) -> Trace {
    let mut trace = Trace::new();
    let mut arr = data.to_vec();
    let n = arr.len();

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            trace.emit(
                SortAction::Compare {
                    indices: smallvec![j, j + 1],
                },
                format!("Comparing {} and {}.", arr[j], arr[j + 1]),
            );
            if arr[j] > arr[j + 1] {
                trace.emit(
                    SortAction::Swap {
                        indices: smallvec![j, j + 1],
                    },
                    format!("{} > {}. Swapping.", arr[j], arr[j + 1]),
                );
                arr.swap(j, j + 1);
                swapped = true;
            }
        }

        let fixed = n - 1 - i;
        trace.emit(
            SortAction::SortedElement {
                indices: smallvec![fixed],
            },
            format!("Element {} is now in its final sorted position.", arr[fixed]),
        );

        if !swapped {
            // Nothing moved, so every remaining prefix element is already placed.
            for k in 0..fixed {
                trace.emit(
                    SortAction::SortedElement {
                        indices: smallvec![k],
                    },
                    format!("No swaps in this pass. Element {} is sorted.", arr[k]),
                );
            }
            break;
        }
    }

    trace.complete(SORTED)
}

pub fn selection_sort(data: &[i64]) -> Trace {
    let mut trace = Trace::new();
    let mut arr = data.to_vec();
    let n = arr.len();

    for i in 0..n {
        let mut min_idx = i;
        trace.emit(
            SortAction::HighlightMin {
                indices: smallvec![min_idx],
            },
            format!(
                "Finding the minimum in the unsorted part (from index {i}). Current minimum is {}.",
                arr[min_idx]
            ),
        );

        for j in i + 1..n {
            trace.emit(
                SortAction::Compare {
                    indices: smallvec![j, min_idx],
                },
                format!("Comparing {} with current minimum {}.", arr[j], arr[min_idx]),
            );
            if arr[j] < arr[min_idx] {
                min_idx = j;
                trace.emit(
                    SortAction::HighlightMin {
                        indices: smallvec![min_idx],
                    },
                    format!("Found a new minimum: {}.", arr[min_idx]),
                );
            }
        }

        trace.emit(
            SortAction::Swap {
                indices: smallvec![i, min_idx],
            },
            format!(
                "Swapping minimum element {} with element at index {i} ({}).",
                arr[min_idx], arr[i]
            ),
        );
        arr.swap(i, min_idx);

        trace.emit(
            SortAction::SortedElement {
                indices: smallvec![i],
            },
            format!("Element {} is now in its final sorted position.", arr[i]),
        );
    }

    trace.complete(SORTED)
}

pub fn insertion_sort(data: &[i64]) -> Trace {
    let mut trace = Trace::new();
    let mut arr = data.to_vec();

    for i in 1..arr.len() {
        let key = arr[i];
        trace.emit(
            SortAction::HighlightKey { index: i, key },
            format!("Selecting {key} as the key to insert."),
        );

        let mut j = i;
        while j > 0 && key < arr[j - 1] {
            let from = j - 1;
            trace.emit(
                SortAction::CompareShift {
                    indices: smallvec![from, j],
                },
                format!("{key} < {}. Shifting {} to the right.", arr[from], arr[from]),
            );
            arr[j] = arr[from];
            trace.emit(
                SortAction::ShiftRight {
                    from,
                    to: j,
                    value: arr[from],
                },
                format!("Moved {} from index {from} to {j}.", arr[from]),
            );
            j -= 1;
        }

        arr[j] = key;
        trace.emit(
            SortAction::InsertKey { index: j, key },
            format!("Inserting key {key} at position {j}."),
        );
    }

    trace.complete(SORTED)
}

pub fn merge_sort(data: &[i64]) -> Trace {
    let mut trace = Trace::new();
    let mut arr = data.to_vec();
    merge_sort_range(&mut arr, 0, &mut trace);
    trace.complete(SORTED)
}

/// Sorts `sub` in place. `offset` is the absolute index of `sub[0]` in the
/// original array; every emitted index is absolute.
fn merge_sort_range(sub: &mut [i64], offset: usize, trace: &mut Trace) {
    if sub.len() <= 1 {
        return;
    }

    let mid = sub.len() / 2;
    let last = offset + sub.len() - 1;
    trace.emit(
        SortAction::Divide {
            range: (offset, last),
            mid: offset + mid,
        },
        format!("Dividing array at index {}.", offset + mid),
    );

    merge_sort_range(&mut sub[..mid], offset, trace);
    merge_sort_range(&mut sub[mid..], offset + mid, trace);

    let left = sub[..mid].to_vec();
    let right = sub[mid..].to_vec();
    trace.emit(
        SortAction::MergeStart {
            range: (offset, last),
        },
        format!("Merging subarrays [{offset}, {}] and [{}, {last}].", offset + mid - 1, offset + mid),
    );

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        trace.emit(
            SortAction::MergeCompare {
                left_index: offset + i,
                right_index: offset + mid + j,
            },
            format!("Comparing {} and {}.", left[i], right[j]),
        );
        // Strict `<`: on a tie the right element is taken first.
        if left[i] < right[j] {
            sub[k] = left[i];
            i += 1;
        } else {
            sub[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    for &value in left[i..].iter().chain(&right[j..]) {
        sub[k] = value;
        k += 1;
    }

    trace.emit(
        SortAction::UpdateRange {
            range_start: offset,
            values: sub.to_vec(),
        },
        "Subarray sorted and merged.",
    );
}

pub fn quick_sort(data: &[i64]) -> Trace {
    let mut trace = Trace::new();
    let mut arr = data.to_vec();
    if !arr.is_empty() {
        let high = arr.len() - 1;
        quick_sort_range(&mut arr, 0, high, &mut trace);
    }
    trace.complete(SORTED)
}

fn quick_sort_range(arr: &mut [i64], low: usize, high: usize, trace: &mut Trace) {
    if low >= high {
        return;
    }
    let pivot = partition(arr, low, high, trace);
    if pivot > low {
        quick_sort_range(arr, low, pivot - 1, trace);
    }
    quick_sort_range(arr, pivot + 1, high, trace);
}

/// Lomuto partition around `arr[high]`. Returns the pivot's final index.
fn partition(arr: &mut [i64], low: usize, high: usize, trace: &mut Trace) -> usize {
    let pivot = arr[high];
    trace.emit(
        SortAction::Pivot { index: high },
        format!("Choosing {pivot} as pivot for range [{low}, {high}]."),
    );

    // Next slot of the "less than pivot" region.
    let mut store = low;
    for j in low..high {
        trace.emit(
            SortAction::Compare {
                indices: smallvec![j, high],
            },
            format!("Comparing {} with pivot {pivot}.", arr[j]),
        );
        if arr[j] < pivot {
            trace.emit(
                SortAction::Swap {
                    indices: smallvec![store, j],
                },
                format!("{} < {pivot}. Swapping {} and {}.", arr[j], arr[store], arr[j]),
            );
            arr.swap(store, j);
            store += 1;
        }
    }

    trace.emit(
        SortAction::Swap {
            indices: smallvec![store, high],
        },
        format!("Placing pivot. Swapping {} and {}.", arr[store], arr[high]),
    );
    arr.swap(store, high);
    trace.emit(
        SortAction::SortedElement {
            indices: smallvec![store],
        },
        format!("Pivot {pivot} is now in its final sorted position."),
    );
    store
}
