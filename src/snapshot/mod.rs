// Snapshot value types consumed read-only by the render layer

/// One observable instant of a sorting run.
///
/// `values` is the full working array at this instant; `highlighted` holds
/// the 0–3 indices currently under comparison or mutation.  The terminal
/// snapshot of a run always carries an empty `highlighted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSnapshot {
    pub values: Vec<i32>,
    pub highlighted: Vec<usize>,
    pub terminal: bool,
}

/// One observable instant of a graph run.
///
/// `visited` lists vertex ids in visitation (settle) order, without
/// duplicates and append-only across a run.  `frontier` is the path or tree
/// built so far; for the MST algorithms it is the flattened endpoint list
/// of accepted edges.  `active` holds the 0–2 vertices being examined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSnapshot {
    pub visited: Vec<usize>,
    pub frontier: Vec<usize>,
    pub active: Vec<usize>,
    pub terminal: bool,
}

/// A frame of algorithm progress, sufficient to render one visualization
/// frame.  Immutable once produced; the stepper only ever hands out copies
/// of its working state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Sorting(SortSnapshot),
    Graph(GraphSnapshot),
}

impl Snapshot {
    /// Whether this is the final snapshot of its run.
    pub fn is_terminal(&self) -> bool {
        match self {
            Snapshot::Sorting(s) => s.terminal,
            Snapshot::Graph(s) => s.terminal,
        }
    }

    /// The sorting view of this snapshot, if any.
    pub fn as_sorting(&self) -> Option<&SortSnapshot> {
        match self {
            Snapshot::Sorting(s) => Some(s),
            Snapshot::Graph(_) => None,
        }
    }

    /// The graph view of this snapshot, if any.
    pub fn as_graph(&self) -> Option<&GraphSnapshot> {
        match self {
            Snapshot::Graph(s) => Some(s),
            Snapshot::Sorting(_) => None,
        }
    }
}
