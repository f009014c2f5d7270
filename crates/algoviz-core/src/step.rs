//! The unit of a trace: one tagged action plus a human-readable message.

use serde::Serialize;

use crate::action::{
    BitwiseAction, DpAction, GraphAction, GreedyAction, Lifecycle, RecursionAction, SearchAction,
    SortAction, TreeAction,
};

/// Any family's action.
///
/// Untagged on the wire: the inner family enum already writes the `action`
/// tag, so a wrapped action serializes exactly like the family enum alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Action {
    Lifecycle(Lifecycle),
    Search(SearchAction),
    Sort(SortAction),
    Graph(GraphAction),
    Tree(TreeAction),
    Dp(DpAction),
    Greedy(GreedyAction),
    Recursion(RecursionAction),
    Bitwise(BitwiseAction),
}

macro_rules! impl_from_family {
    ($($family:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$family> for Action {
                fn from(action: $family) -> Self {
                    Action::$variant(action)
                }
            }
        )*
    };
}

impl_from_family! {
    Lifecycle => Lifecycle,
    SearchAction => Search,
    SortAction => Sort,
    GraphAction => Graph,
    TreeAction => Tree,
    DpAction => Dp,
    GreedyAction => Greedy,
    RecursionAction => Recursion,
    BitwiseAction => Bitwise,
}

impl Action {
    /// The wire tag of this action (`"swap"`, `"complete"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Action::Lifecycle(a) => match a {
                Lifecycle::Error => "error",
                Lifecycle::Complete => "complete",
            },
            Action::Search(a) => match a {
                SearchAction::HighlightPointers { .. } => "highlight_pointers",
                SearchAction::Probe { .. } => "probe",
                SearchAction::Compare { .. } => "compare",
                SearchAction::Eliminate { .. } => "eliminate",
                SearchAction::CompareBlock { .. } => "compare_block",
                SearchAction::SearchBlock { .. } => "search_block",
                SearchAction::Found { .. } => "found",
                SearchAction::NotFound => "not_found",
            },
            Action::Sort(a) => match a {
                SortAction::Compare { .. } => "compare",
                SortAction::Swap { .. } => "swap",
                SortAction::SortedElement { .. } => "sorted_element",
                SortAction::HighlightMin { .. } => "highlight_min",
                SortAction::HighlightKey { .. } => "highlight_key",
                SortAction::CompareShift { .. } => "compare_shift",
                SortAction::ShiftRight { .. } => "shift_right",
                SortAction::InsertKey { .. } => "insert_key",
                SortAction::Divide { .. } => "divide",
                SortAction::MergeStart { .. } => "merge_start",
                SortAction::MergeCompare { .. } => "merge_compare",
                SortAction::UpdateRange { .. } => "update_range",
                SortAction::Pivot { .. } => "pivot",
            },
            Action::Graph(a) => match a {
                GraphAction::Enqueue { .. } => "enqueue",
                GraphAction::Dequeue { .. } => "dequeue",
                GraphAction::Push { .. } => "push",
                GraphAction::Pop { .. } => "pop",
                GraphAction::ExploreEdge { .. } => "explore_edge",
                GraphAction::NeighborVisited { .. } => "neighbor_visited",
                GraphAction::SkipVisited { .. } => "skip_visited",
                GraphAction::VisitNode { .. } => "visit_node",
                GraphAction::InitDistances { .. } => "init_distances",
                GraphAction::UpdateDistance { .. } => "update_distance",
                GraphAction::SkipUpdate { .. } => "skip_update",
                GraphAction::HighlightPath { .. } => "highlight_path",
                GraphAction::PathNotFound { .. } => "path_not_found",
            },
            Action::Tree(a) => match a {
                TreeAction::Insert { .. } => "insert",
                TreeAction::Compare { .. } => "compare",
                TreeAction::Traverse { .. } => "traverse",
                TreeAction::Duplicate { .. } => "duplicate",
            },
            Action::Dp(a) => match a {
                DpAction::Call { .. } => "call",
                DpAction::CheckMemo { .. } => "check_memo",
                DpAction::MemoHit { .. } => "memo_hit",
                DpAction::BaseCase { .. } => "base_case",
                DpAction::Calculate { .. } => "calculate",
                DpAction::StoreMemo { .. } => "store_memo",
                DpAction::InitTable { .. } => "init_table",
                DpAction::HighlightCell { .. } => "highlight_cell",
                DpAction::CopyAbove { .. } => "copy_above",
                DpAction::CompareOptions { .. } => "compare_options",
                DpAction::FibComplete { .. } | DpAction::KnapsackComplete { .. } => "complete",
            },
            Action::Greedy(a) => match a {
                GreedyAction::CalculateRatios { .. } => "calculate_ratios",
                GreedyAction::SortItems { .. } => "sort_items",
                GreedyAction::SelectItem { .. } => "select_item",
                GreedyAction::TakeWhole { .. } => "take_whole",
                GreedyAction::TakeFraction { .. } => "take_fraction",
                GreedyAction::KnapsackFull { .. } => "knapsack_full",
                GreedyAction::Complete { .. } => "complete",
            },
            Action::Recursion(a) => match a {
                RecursionAction::MoveDisk { .. } => "move_disk",
            },
            Action::Bitwise(a) => match a {
                BitwiseAction::SwapInitial { .. } | BitwiseAction::CountInitial { .. } => {
                    "initial_state"
                }
                BitwiseAction::XorOperation { .. } => "xor_operation",
                BitwiseAction::FinalState { .. } => "final_state",
                BitwiseAction::CheckLastBit { .. } => "check_last_bit",
                BitwiseAction::IncrementCount { .. } => "increment_count",
                BitwiseAction::RightShift { .. } => "right_shift",
                BitwiseAction::CountComplete { .. } => "complete",
            },
        }
    }
}

/// One externally observable unit of an algorithm's execution.
///
/// Serializes flat: `{"action": ..., <fields>, "message": ...}`. A step owns
/// every snapshot it carries, so later mutation of the algorithm's working
/// state cannot alter it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    #[serde(flatten)]
    pub action: Action,
    pub message: String,
}

impl Step {
    pub fn new(action: impl Into<Action>, message: impl Into<String>) -> Self {
        Step {
            action: action.into(),
            message: message.into(),
        }
    }

    /// Shorthand for `self.action.name()`.
    pub fn name(&self) -> &'static str {
        self.action.name()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.action, Action::Lifecycle(Lifecycle::Error))
    }

    pub fn is_complete(&self) -> bool {
        self.name() == "complete"
    }
}
