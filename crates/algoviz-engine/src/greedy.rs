//! Greedy fractional knapsack.

use algoviz_core::action::RatedItem;
use algoviz_core::{FractionalItem, GreedyAction, ItemId, Trace};

/// Takes items by descending value/weight ratio, splitting the first item
/// that no longer fits. Equal ratios keep their input order.
pub fn fractional_knapsack(capacity: f64, items: &[FractionalItem]) -> Trace {
    if capacity.is_nan() || capacity < 0.0 {
        return Trace::error("Capacity must be a non-negative number.");
    }
    if items
        .iter()
        .any(|item| item.weight.is_nan() || item.weight <= 0.0)
    {
        return Trace::error("Every item needs a positive weight.");
    }

    let mut trace = Trace::new();
    let mut rated: Vec<RatedItem> = items
        .iter()
        .enumerate()
        .map(|(position, item)| RatedItem {
            id: item
                .id
                .clone()
                .unwrap_or(ItemId::Number(position as i64)),
            weight: item.weight,
            value: item.value,
            ratio: item.value / item.weight,
        })
        .collect();
    trace.emit(
        GreedyAction::CalculateRatios {
            items: rated.clone(),
        },
        "Calculated value-to-weight ratio for each item.",
    );

    rated.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    trace.emit(
        GreedyAction::SortItems {
            items: rated.clone(),
        },
        "Sorted items by ratio in descending order.",
    );

    let mut total_value = 0.0;
    let mut remaining = capacity;

    for item in &rated {
        trace.emit(
            GreedyAction::SelectItem {
                item_id: item.id.clone(),
            },
            format!(
                "Considering item {} (w:{}, v:{})",
                item.id, item.weight, item.value
            ),
        );

        if remaining == 0.0 {
            trace.emit(
                GreedyAction::KnapsackFull {
                    item_id: item.id.clone(),
                },
                "Knapsack is full. Cannot add more items.",
            );
            break;
        }

        if item.weight <= remaining {
            remaining -= item.weight;
            total_value += item.value;
            trace.emit(
                GreedyAction::TakeWhole {
                    item_id: item.id.clone(),
                    capacity_left: remaining,
                    total_value,
                },
                format!("Took all of item {}. Capacity left: {remaining:.2}.", item.id),
            );
        } else {
            let fraction = remaining / item.weight;
            total_value += item.value * fraction;
            remaining = 0.0;
            trace.emit(
                GreedyAction::TakeFraction {
                    item_id: item.id.clone(),
                    fraction,
                    capacity_left: remaining,
                    total_value,
                },
                format!(
                    "Took {:.1}% of item {}. Knapsack is now full.",
                    fraction * 100.0,
                    item.id
                ),
            );
        }
    }

    trace.emit(
        GreedyAction::Complete {
            result: total_value,
        },
        format!("Greedy knapsack complete. Total value is {total_value:.2}."),
    );
    trace
}
