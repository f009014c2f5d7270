//! Closed action vocabularies, one enum per algorithm family.
//!
//! Each enum is internally tagged on `action`, so a variant serializes as
//! `{"action": "<tag>", ...fields}`. The surrounding [`Step`](crate::Step)
//! appends the human-readable `message`.
//!
//! Several families reuse a tag with a family-specific payload (for example
//! `complete` carrying a result). Those variants are renamed explicitly; the
//! enums are output-only and never deserialized, so the shared tag is
//! unambiguous on the wire.

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::graph::NodeId;
use crate::input::ItemId;

/// Array positions touched by a step. Almost always one or two entries.
pub type Indices = SmallVec<[usize; 2]>;

/// Snapshot of a distance table, in graph node order.
pub type DistanceMap = IndexMap<NodeId, f64>;

/// Snapshot of a memo table, in insertion order.
pub type MemoTable = IndexMap<u32, u64>;

/// A `(row, column)` cell in a DP table.
pub type Cell = (usize, usize);

/// Steps shared by every family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Lifecycle {
    /// Precondition failure. Always the only step in its trace.
    Error,
    /// Terminal step for algorithms whose result is implicit in the trace.
    Complete,
}

// ---------------------------------------------------------------------------
// Searching
// ---------------------------------------------------------------------------

/// Search window pointers echoed by binary and interpolation search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchPointers {
    pub low: usize,
    pub high: usize,
    /// Midpoint for binary search, probe position for interpolation search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SearchAction {
    HighlightPointers { pointers: SearchPointers },
    /// Interpolation search probe position.
    Probe { pointers: SearchPointers },
    Compare { indices: Indices },
    /// Discarded range, boundaries as computed before `low`/`high` move.
    Eliminate { range: (usize, usize) },
    /// One jump over a block whose last element is below the target.
    CompareBlock { indices: Vec<usize>, last_index: usize },
    /// The block a jump search will scan linearly.
    SearchBlock { range: (usize, usize) },
    Found { indices: Indices },
    NotFound,
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SortAction {
    Compare { indices: Indices },
    Swap { indices: Indices },
    SortedElement { indices: Indices },
    HighlightMin { indices: Indices },
    HighlightKey { index: usize, key: i64 },
    CompareShift { indices: Indices },
    ShiftRight { from: usize, to: usize, value: i64 },
    InsertKey { index: usize, key: i64 },
    Divide { range: (usize, usize), mid: usize },
    MergeStart { range: (usize, usize) },
    MergeCompare { left_index: usize, right_index: usize },
    /// Fully merged sub-range, written starting at `range_start`.
    UpdateRange { range_start: usize, values: Vec<i64> },
    Pivot { index: usize },
}

// ---------------------------------------------------------------------------
// Graphs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GraphAction {
    Enqueue { node: NodeId, queue_state: Vec<NodeId> },
    Dequeue { node: NodeId, queue_state: Vec<NodeId> },
    Push { node: NodeId, stack_state: Vec<NodeId> },
    Pop { node: NodeId, stack_state: Vec<NodeId> },
    ExploreEdge {
        from: NodeId,
        to: NodeId,
        #[serde(skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
    },
    NeighborVisited { node: NodeId },
    SkipVisited { node: NodeId },
    VisitNode {
        node: NodeId,
        #[serde(skip_serializing_if = "Option::is_none")]
        distance: Option<f64>,
    },
    InitDistances { distances: DistanceMap },
    UpdateDistance {
        node: NodeId,
        new_dist: f64,
        distances: DistanceMap,
    },
    SkipUpdate {
        node: NodeId,
        candidate: f64,
        current: f64,
    },
    HighlightPath { path: Vec<NodeId>, distance: f64 },
    PathNotFound { start: NodeId, end: NodeId },
}

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

/// Where a value hangs relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Root,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TreeAction {
    Insert {
        value: i64,
        parent: Option<i64>,
        direction: Direction,
    },
    Compare {
        value: i64,
        #[serde(rename = "newValue")]
        new_value: i64,
    },
    Traverse { from: i64, direction: Direction },
    Duplicate { value: i64 },
}

// ---------------------------------------------------------------------------
// Dynamic programming
// ---------------------------------------------------------------------------

/// The "exclude this item" candidate of a knapsack cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExcludedOption {
    pub cell: Cell,
    pub value: u64,
}

/// The "include this item" candidate of a knapsack cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncludedOption {
    pub cell: Cell,
    pub value: u64,
    pub item_value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DpAction {
    Call {
        id: u32,
        parent_id: Option<u32>,
        n: u32,
    },
    CheckMemo {
        id: u32,
        n: u32,
        memo_state: MemoTable,
    },
    MemoHit { id: u32, n: u32, value: u64 },
    BaseCase { id: u32, n: u32, value: u64 },
    Calculate {
        id: u32,
        n: u32,
        val1: u64,
        val2: u64,
        result: u64,
    },
    StoreMemo {
        id: u32,
        n: u32,
        value: u64,
        memo_state: MemoTable,
    },
    #[serde(rename = "complete")]
    FibComplete { result: u64 },
    InitTable {
        rows: usize,
        cols: usize,
        weights: Vec<usize>,
        values: Vec<u64>,
    },
    HighlightCell { cell: Cell },
    CopyAbove {
        from_cell: Cell,
        to_cell: Cell,
        value: u64,
    },
    CompareOptions {
        cell: Cell,
        option_without: ExcludedOption,
        option_with: IncludedOption,
        result: u64,
    },
    #[serde(rename = "complete")]
    KnapsackComplete { result: u64, final_cell: Cell },
}

// ---------------------------------------------------------------------------
// Greedy
// ---------------------------------------------------------------------------

/// A fractional-knapsack item annotated with its value/weight ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedItem {
    pub id: ItemId,
    pub weight: f64,
    pub value: f64,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GreedyAction {
    CalculateRatios { items: Vec<RatedItem> },
    SortItems { items: Vec<RatedItem> },
    SelectItem { item_id: ItemId },
    TakeWhole {
        item_id: ItemId,
        capacity_left: f64,
        total_value: f64,
    },
    TakeFraction {
        item_id: ItemId,
        fraction: f64,
        capacity_left: f64,
        total_value: f64,
    },
    KnapsackFull { item_id: ItemId },
    #[serde(rename = "complete")]
    Complete { result: f64 },
}

// ---------------------------------------------------------------------------
// Recursion
// ---------------------------------------------------------------------------

/// One of the three Hanoi pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Peg {
    A,
    B,
    C,
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        };
        f.write_str(name)
    }
}

/// Full tower state. Disks are listed bottom to top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Towers {
    #[serde(rename = "A")]
    pub a: Vec<u32>,
    #[serde(rename = "B")]
    pub b: Vec<u32>,
    #[serde(rename = "C")]
    pub c: Vec<u32>,
}

impl Towers {
    /// All `n` disks stacked on peg A, largest at the bottom.
    pub fn stacked(n: u32) -> Self {
        Towers {
            a: (1..=n).rev().collect(),
            ..Towers::default()
        }
    }

    pub fn peg(&self, peg: Peg) -> &Vec<u32> {
        match peg {
            Peg::A => &self.a,
            Peg::B => &self.b,
            Peg::C => &self.c,
        }
    }

    pub fn peg_mut(&mut self, peg: Peg) -> &mut Vec<u32> {
        match peg {
            Peg::A => &mut self.a,
            Peg::B => &mut self.b,
            Peg::C => &mut self.c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RecursionAction {
    MoveDisk {
        disk_id: u32,
        from_peg: Peg,
        to_peg: Peg,
        towers_state: Towers,
    },
}

// ---------------------------------------------------------------------------
// Bitwise
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BitwiseAction {
    #[serde(rename = "initial_state")]
    SwapInitial {
        a: u64,
        b: u64,
        bin_a: String,
        bin_b: String,
    },
    XorOperation {
        var1: &'static str,
        val1: u64,
        bin1: String,
        var2: &'static str,
        val2: u64,
        bin2: String,
        result_var: &'static str,
        result_val: u64,
        result_bin: String,
    },
    FinalState {
        a: u64,
        b: u64,
        bin_a: String,
        bin_b: String,
    },
    #[serde(rename = "initial_state")]
    CountInitial { n: u64, bin_n: String, count: u32 },
    CheckLastBit { n: u64, bin_n: String, last_bit: u64 },
    IncrementCount { count: u32 },
    RightShift {
        n_before: u64,
        bin_before: String,
        n_after: u64,
        bin_after: String,
    },
    #[serde(rename = "complete")]
    CountComplete { result: u32, n: u64 },
}

/// Renders a value as binary, zero-padded to at least eight digits.
pub fn bin8(value: u64) -> String {
    format!("{value:08b}")
}
