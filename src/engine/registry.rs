//! Static per-algorithm metadata for the info pane

use crate::engine::stepper::AlgorithmId;

/// Human-facing description of one algorithm.  All data is `'static`;
/// [`describe`] is a total function over [`AlgorithmId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
}

/// Metadata for `id`.
pub fn describe(id: AlgorithmId) -> &'static AlgorithmInfo {
    match id {
        AlgorithmId::BubbleSort => &BUBBLE_SORT,
        AlgorithmId::SelectionSort => &SELECTION_SORT,
        AlgorithmId::InsertionSort => &INSERTION_SORT,
        AlgorithmId::MergeSort => &MERGE_SORT,
        AlgorithmId::QuickSort => &QUICK_SORT,
        AlgorithmId::HeapSort => &HEAP_SORT,
        AlgorithmId::ShellSort => &SHELL_SORT,
        AlgorithmId::CountingSort => &COUNTING_SORT,
        AlgorithmId::RadixSort => &RADIX_SORT,
        AlgorithmId::Bfs => &BFS,
        AlgorithmId::Dfs => &DFS,
        AlgorithmId::Dijkstra => &DIJKSTRA,
        AlgorithmId::AStar => &A_STAR,
        AlgorithmId::Prim => &PRIM,
        AlgorithmId::Kruskal => &KRUSKAL,
    }
}

static BUBBLE_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    description: "Repeatedly compares adjacent elements and swaps them when \
                  out of order, floating the largest remaining element to the \
                  end of each pass.",
    steps: &[
        "Compare each adjacent pair from the front",
        "Swap the pair if the left element is larger",
        "After each pass the largest unsorted element is in place",
        "Repeat until a full pass needs no swaps",
    ],
};

static SELECTION_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    description: "Selects the minimum of the unsorted suffix on every pass \
                  and swaps it into the next sorted position.",
    steps: &[
        "Scan the unsorted suffix for its minimum",
        "Swap the minimum with the first unsorted element",
        "Grow the sorted prefix by one",
        "Repeat until the suffix is empty",
    ],
};

static INSERTION_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    description: "Builds the sorted prefix one element at a time, shifting \
                  larger elements right to open the insertion slot.",
    steps: &[
        "Take the first element of the unsorted suffix",
        "Shift larger prefix elements one position right",
        "Insert the element into the opened slot",
        "Repeat for each remaining element",
    ],
};

static MERGE_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
    description: "Recursively splits the array in half, then merges the \
                  sorted halves back together smallest-first.",
    steps: &[
        "Split the array into halves until single elements remain",
        "Merge pairs of sorted halves front to back",
        "Copy the smaller head element on each comparison",
        "Continue until one sorted array remains",
    ],
};

static QUICK_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    time_complexity: "O(n log n) average, O(n²) worst",
    space_complexity: "O(log n)",
    description: "Partitions around the last element as pivot, placing \
                  smaller values left and larger right, then sorts each side.",
    steps: &[
        "Choose the last element of the range as pivot",
        "Move elements smaller than the pivot to the left",
        "Swap the pivot into its final position",
        "Recurse into the left and right partitions",
    ],
};

static HEAP_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Heap Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(1)",
    description: "Builds a max-heap in place, then repeatedly swaps the root \
                  to the end and restores the heap over the shrinking prefix.",
    steps: &[
        "Heapify the array bottom-up into a max-heap",
        "Swap the root with the last unsorted element",
        "Shrink the heap and sift the new root down",
        "Repeat until the heap is empty",
    ],
};

static SHELL_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Shell Sort",
    time_complexity: "O(n²) worst, gap-sequence dependent",
    space_complexity: "O(1)",
    description: "Insertion-sorts elements a gap apart, halving the gap each \
                  round so the final pass is a nearly-sorted insertion sort.",
    steps: &[
        "Start with a gap of half the array length",
        "Insertion-sort each gap-separated subsequence",
        "Halve the gap and repeat",
        "Finish with a gap of one",
    ],
};

static COUNTING_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Counting Sort",
    time_complexity: "O(n + k)",
    space_complexity: "O(n + k)",
    description: "Counts occurrences of each value, accumulates the counts \
                  into positions, and places elements directly into an output \
                  array without comparisons.",
    steps: &[
        "Count occurrences of each value",
        "Accumulate counts into ending positions",
        "Place each element at its counted position, scanning backwards",
        "Copy the output back over the input",
    ],
};

static RADIX_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Radix Sort",
    time_complexity: "O(d · (n + 10))",
    space_complexity: "O(n)",
    description: "Counting-sorts the array by each base-10 digit from least \
                  to most significant; stability of each pass keeps earlier \
                  digits ordered.",
    steps: &[
        "Count occurrences of the current digit",
        "Accumulate counts into ending positions",
        "Place elements stably by the current digit",
        "Advance to the next digit until the maximum is exhausted",
    ],
};

static BFS: AlgorithmInfo = AlgorithmInfo {
    name: "Breadth-First Search",
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    description: "Explores vertices in waves of increasing distance from the \
                  start, so the first arrival at the target uses the fewest \
                  edges.",
    steps: &[
        "Enqueue the start vertex",
        "Dequeue a vertex and settle it",
        "Enqueue undiscovered neighbors, recording parents",
        "On reaching the target, walk parents back for the path",
    ],
};

static DFS: AlgorithmInfo = AlgorithmInfo {
    name: "Depth-First Search",
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    description: "Follows one branch as deep as possible before backtracking, \
                  using a stack of vertices still to visit.",
    steps: &[
        "Push the start vertex",
        "Pop a vertex and settle it if unvisited",
        "Push its unvisited neighbors",
        "Repeat until the stack is empty",
    ],
};

static DIJKSTRA: AlgorithmInfo = AlgorithmInfo {
    name: "Dijkstra's Algorithm",
    time_complexity: "O((V + E) log V)",
    space_complexity: "O(V)",
    description: "Settles vertices in order of shortest known distance, \
                  relaxing outgoing edges as each vertex is fixed.",
    steps: &[
        "Set the start distance to zero, all others to infinity",
        "Settle the unvisited vertex with the smallest distance",
        "Relax its edges, updating shorter tentative distances",
        "Repeat until the target settles or no vertex remains",
    ],
};

static A_STAR: AlgorithmInfo = AlgorithmInfo {
    name: "A* Search",
    time_complexity: "O((V + E) log V)",
    space_complexity: "O(V)",
    description: "Dijkstra ordered by distance-so-far plus a heuristic \
                  estimate of the remaining cost, steering the search toward \
                  the target.",
    steps: &[
        "Score each candidate by distance plus heuristic",
        "Settle the candidate with the lowest score",
        "Relax edges, rescoring improved neighbors",
        "Stop when the target settles",
    ],
};

static PRIM: AlgorithmInfo = AlgorithmInfo {
    name: "Prim's Algorithm",
    time_complexity: "O(E log V)",
    space_complexity: "O(V)",
    description: "Grows a spanning tree from the start vertex, always \
                  attaching the cheapest edge that reaches a new vertex.",
    steps: &[
        "Start the tree at one vertex",
        "Track the cheapest edge to each outside vertex",
        "Attach the cheapest crossing edge",
        "Repeat until every vertex joins the tree",
    ],
};

static KRUSKAL: AlgorithmInfo = AlgorithmInfo {
    name: "Kruskal's Algorithm",
    time_complexity: "O(E log E)",
    space_complexity: "O(V)",
    description: "Considers edges lightest-first, accepting each edge whose \
                  endpoints are not already connected, tracked with a \
                  disjoint-set union.",
    steps: &[
        "Sort edges by ascending weight",
        "Take the lightest remaining edge",
        "Accept it unless it closes a cycle",
        "Stop after V - 1 accepted edges",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_has_metadata() {
        for &id in AlgorithmId::all() {
            let info = describe(id);
            assert!(!info.name.is_empty());
            assert!(!info.description.is_empty());
            assert!(!info.steps.is_empty());
        }
    }
}
