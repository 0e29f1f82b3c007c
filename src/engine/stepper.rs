//! Stepper façade over the per-algorithm state machines
//!
//! [`Stepper::new`] validates input eagerly and builds the matching state
//! machine; [`Stepper::next`] is the single pull point the playback driver
//! calls.  Every `next()` consults the shared [`ExecutionControl`] token
//! first, so pause and stop take effect between whole algorithmic steps:
//! a paused stepper returns [`Step::Idle`] without touching the machine,
//! and a stopped one synthesizes a terminal snapshot from the current
//! working state.  Once a terminal snapshot has been produced, `next()`
//! keeps returning it; finishing is not an error.

use crate::engine::control::{ExecutionControl, RunState};
use crate::engine::errors::EngineError;
use crate::engine::graph::{
    AStarSearch, BfsTraversal, DfsTraversal, DijkstraSearch, GraphMachine, KruskalMst, PrimMst,
};
use crate::engine::sorting::{
    BubbleSort, CountingSort, HeapSort, InsertionSort, MergeSort, QuickSort, RadixSort,
    SelectionSort, ShellSort, SortMachine,
};
use crate::input::Graph;
use crate::snapshot::Snapshot;
use std::fmt;
use std::sync::Arc;

/// Every algorithm the engine can replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    ShellSort,
    CountingSort,
    RadixSort,
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    Prim,
    Kruskal,
}

impl AlgorithmId {
    /// All known algorithms, sorting family first.
    pub fn all() -> &'static [AlgorithmId] {
        &[
            AlgorithmId::BubbleSort,
            AlgorithmId::SelectionSort,
            AlgorithmId::InsertionSort,
            AlgorithmId::MergeSort,
            AlgorithmId::QuickSort,
            AlgorithmId::HeapSort,
            AlgorithmId::ShellSort,
            AlgorithmId::CountingSort,
            AlgorithmId::RadixSort,
            AlgorithmId::Bfs,
            AlgorithmId::Dfs,
            AlgorithmId::Dijkstra,
            AlgorithmId::AStar,
            AlgorithmId::Prim,
            AlgorithmId::Kruskal,
        ]
    }

    /// Whether this algorithm consumes array input.
    pub fn is_sorting(self) -> bool {
        !matches!(
            self,
            AlgorithmId::Bfs
                | AlgorithmId::Dfs
                | AlgorithmId::Dijkstra
                | AlgorithmId::AStar
                | AlgorithmId::Prim
                | AlgorithmId::Kruskal
        )
    }

    /// Canonical command-line token for this algorithm.
    pub fn token(self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::SelectionSort => "selection-sort",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::MergeSort => "merge-sort",
            AlgorithmId::QuickSort => "quick-sort",
            AlgorithmId::HeapSort => "heap-sort",
            AlgorithmId::ShellSort => "shell-sort",
            AlgorithmId::CountingSort => "counting-sort",
            AlgorithmId::RadixSort => "radix-sort",
            AlgorithmId::Bfs => "bfs",
            AlgorithmId::Dfs => "dfs",
            AlgorithmId::Dijkstra => "dijkstra",
            AlgorithmId::AStar => "a-star",
            AlgorithmId::Prim => "prim",
            AlgorithmId::Kruskal => "kruskal",
        }
    }

    /// Parse a command-line token.
    pub fn parse(token: &str) -> Option<AlgorithmId> {
        AlgorithmId::all()
            .iter()
            .copied()
            .find(|id| id.token() == token)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Graph input bundle: the graph plus the start vertex and optional target.
#[derive(Debug, Clone)]
pub struct GraphInput {
    pub graph: Graph,
    pub start: usize,
    pub end: Option<usize>,
}

/// Input for one run; the variant must match the algorithm family.
#[derive(Debug, Clone)]
pub enum StepperInput {
    Array(Vec<i32>),
    Graph(GraphInput),
}

/// Result of one [`Stepper::next`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The run advanced by one unit of work; `finished` marks the terminal
    /// snapshot (and every repeat of it after the run ends).
    Snapshot { snapshot: Snapshot, finished: bool },

    /// The control token is paused; no work was performed.
    Idle,
}

#[derive(Debug)]
enum Machine {
    Sort(SortMachine),
    Graph(GraphMachine),
}

/// A single prepared run of one algorithm over a private copy of its input.
#[derive(Debug)]
pub struct Stepper {
    machine: Machine,
    control: Arc<ExecutionControl>,
    terminal: Option<Snapshot>,
}

impl Stepper {
    /// Validate `input` against `id` and build the run.
    ///
    /// All input errors surface here, before any snapshot is produced.
    pub fn new(
        id: AlgorithmId,
        input: StepperInput,
        control: Arc<ExecutionControl>,
    ) -> Result<Stepper, EngineError> {
        let machine = match (id, input) {
            (id, StepperInput::Array(values)) if id.is_sorting() => {
                Machine::Sort(Self::sort_machine(id, values)?)
            }
            (id, StepperInput::Graph(graph)) if !id.is_sorting() => {
                Machine::Graph(Self::graph_machine(id, graph)?)
            }
            (id, _) => {
                let expected = if id.is_sorting() { "array" } else { "graph" };
                return Err(EngineError::InputMismatch {
                    algorithm: id,
                    expected,
                });
            }
        };
        Ok(Stepper {
            machine,
            control,
            terminal: None,
        })
    }

    fn sort_machine(id: AlgorithmId, values: Vec<i32>) -> Result<SortMachine, EngineError> {
        if values.is_empty() {
            return Err(EngineError::EmptyArray);
        }
        if id == AlgorithmId::RadixSort {
            if let Some((index, &value)) = values.iter().enumerate().find(|&(_, &v)| v < 0) {
                return Err(EngineError::NegativeValue { index, value });
            }
        }
        Ok(match id {
            AlgorithmId::BubbleSort => SortMachine::Bubble(BubbleSort::new(values)),
            AlgorithmId::SelectionSort => SortMachine::Selection(SelectionSort::new(values)),
            AlgorithmId::InsertionSort => SortMachine::Insertion(InsertionSort::new(values)),
            AlgorithmId::MergeSort => SortMachine::Merge(MergeSort::new(values)),
            AlgorithmId::QuickSort => SortMachine::Quick(QuickSort::new(values)),
            AlgorithmId::HeapSort => SortMachine::Heap(HeapSort::new(values)),
            AlgorithmId::ShellSort => SortMachine::Shell(ShellSort::new(values)),
            AlgorithmId::CountingSort => SortMachine::Counting(CountingSort::new(values)),
            AlgorithmId::RadixSort => SortMachine::Radix(RadixSort::new(values)),
            _ => unreachable!("guarded by is_sorting"),
        })
    }

    fn graph_machine(id: AlgorithmId, input: GraphInput) -> Result<GraphMachine, EngineError> {
        let GraphInput { graph, start, end } = input;
        let n = graph.vertex_count();
        if start >= n {
            return Err(EngineError::VertexOutOfRange {
                vertex: start,
                vertex_count: n,
            });
        }
        if let Some(end) = end {
            if end >= n {
                return Err(EngineError::VertexOutOfRange {
                    vertex: end,
                    vertex_count: n,
                });
            }
        }
        Ok(match id {
            AlgorithmId::Bfs => GraphMachine::Bfs(BfsTraversal::new(graph, start, end)),
            AlgorithmId::Dfs => GraphMachine::Dfs(DfsTraversal::new(graph, start, end)),
            AlgorithmId::Dijkstra => {
                GraphMachine::Dijkstra(DijkstraSearch::new(graph, start, end))
            }
            AlgorithmId::AStar => {
                let end = end.ok_or(EngineError::MissingTarget { algorithm: id })?;
                GraphMachine::AStar(AStarSearch::new(graph, start, end))
            }
            AlgorithmId::Prim => GraphMachine::Prim(PrimMst::new(graph, start)),
            AlgorithmId::Kruskal => GraphMachine::Kruskal(KruskalMst::new(graph)),
            _ => unreachable!("guarded by is_sorting"),
        })
    }

    /// Whether the terminal snapshot has been produced.
    pub fn is_finished(&self) -> bool {
        self.terminal.is_some()
    }

    /// Pull the next step.
    ///
    /// Paused returns [`Step::Idle`].  Stopped produces one synthesized
    /// terminal snapshot from the current working state.  After the run has
    /// finished, the terminal snapshot is returned again on every call.
    pub fn next(&mut self) -> Step {
        if let Some(snapshot) = &self.terminal {
            return Step::Snapshot {
                snapshot: snapshot.clone(),
                finished: true,
            };
        }
        match self.control.state() {
            RunState::Paused => Step::Idle,
            RunState::Stopped => self.finish(self.halt_snapshot()),
            RunState::Running => match self.advance() {
                Some(snapshot) if snapshot.is_terminal() => self.finish(snapshot),
                Some(snapshot) => Step::Snapshot {
                    snapshot,
                    finished: false,
                },
                None => self.finish(self.halt_snapshot()),
            },
        }
    }

    fn advance(&mut self) -> Option<Snapshot> {
        match &mut self.machine {
            Machine::Sort(m) => m.advance().map(Snapshot::Sorting),
            Machine::Graph(m) => m.advance().map(Snapshot::Graph),
        }
    }

    fn halt_snapshot(&self) -> Snapshot {
        match &self.machine {
            Machine::Sort(m) => Snapshot::Sorting(m.halt()),
            Machine::Graph(m) => Snapshot::Graph(m.halt()),
        }
    }

    fn finish(&mut self, snapshot: Snapshot) -> Step {
        self.terminal = Some(snapshot.clone());
        Step::Snapshot {
            snapshot,
            finished: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Edge;

    fn array_stepper(id: AlgorithmId, values: Vec<i32>) -> (Stepper, Arc<ExecutionControl>) {
        let control = ExecutionControl::new();
        let stepper = Stepper::new(id, StepperInput::Array(values), Arc::clone(&control))
            .expect("valid input");
        (stepper, control)
    }

    #[test]
    fn first_bubble_step_compares_leading_pair() {
        let (mut stepper, _control) = array_stepper(AlgorithmId::BubbleSort, vec![5, 3, 8, 1]);
        let Step::Snapshot { snapshot, finished } = stepper.next() else {
            panic!("running stepper must produce a snapshot");
        };
        assert!(!finished);
        let sort = snapshot.as_sorting().expect("sorting snapshot");
        assert_eq!(sort.values, vec![5, 3, 8, 1]);
        assert_eq!(sort.highlighted, vec![0, 1]);
    }

    #[test]
    fn paused_stepper_idles_without_progress() {
        let (mut stepper, control) = array_stepper(AlgorithmId::BubbleSort, vec![3, 1, 2]);
        let before = stepper.next();
        control.pause();
        assert_eq!(stepper.next(), Step::Idle);
        assert_eq!(stepper.next(), Step::Idle);
        control.resume();
        let after = stepper.next();
        assert_ne!(before, after);
    }

    #[test]
    fn stopped_stepper_synthesizes_one_terminal_snapshot() {
        let (mut stepper, control) = array_stepper(AlgorithmId::BubbleSort, vec![4, 3, 2, 1]);
        // Compare (4, 3), then swap them.
        stepper.next();
        stepper.next();
        control.stop();
        let Step::Snapshot { snapshot, finished } = stepper.next() else {
            panic!("stopped stepper must produce a terminal snapshot");
        };
        assert!(finished);
        assert!(snapshot.is_terminal());
        // Working state is frozen as-is, not magically sorted.
        let sort = snapshot.as_sorting().expect("sorting snapshot");
        assert_eq!(sort.values, vec![3, 4, 2, 1]);
        // Further calls keep returning the same terminal snapshot.
        assert_eq!(
            stepper.next(),
            Step::Snapshot {
                snapshot,
                finished: true
            }
        );
    }

    #[test]
    fn finished_run_repeats_its_terminal_snapshot() {
        let (mut stepper, _control) = array_stepper(AlgorithmId::BubbleSort, vec![2, 1]);
        let mut terminal = None;
        for _ in 0..16 {
            if let Step::Snapshot { snapshot, finished } = stepper.next() {
                if finished {
                    terminal = Some(snapshot);
                    break;
                }
            }
        }
        let terminal = terminal.expect("run must finish");
        assert_eq!(
            stepper.next(),
            Step::Snapshot {
                snapshot: terminal,
                finished: true
            }
        );
        assert!(stepper.is_finished());
    }

    #[test]
    fn empty_array_is_rejected() {
        let control = ExecutionControl::new();
        let err = Stepper::new(AlgorithmId::QuickSort, StepperInput::Array(vec![]), control)
            .expect_err("empty array");
        assert_eq!(err, EngineError::EmptyArray);
    }

    #[test]
    fn radix_rejects_negative_values() {
        let control = ExecutionControl::new();
        let err = Stepper::new(
            AlgorithmId::RadixSort,
            StepperInput::Array(vec![3, -7, 1]),
            control,
        )
        .expect_err("negative value");
        assert_eq!(err, EngineError::NegativeValue { index: 1, value: -7 });
    }

    #[test]
    fn a_star_requires_a_target() {
        let graph = Graph::new(2, vec![Edge::new(0, 1, 1)]).expect("valid graph");
        let err = Stepper::new(
            AlgorithmId::AStar,
            StepperInput::Graph(GraphInput {
                graph,
                start: 0,
                end: None,
            }),
            ExecutionControl::new(),
        )
        .expect_err("missing target");
        assert_eq!(
            err,
            EngineError::MissingTarget {
                algorithm: AlgorithmId::AStar
            }
        );
    }

    #[test]
    fn input_shape_must_match_family() {
        let err = Stepper::new(
            AlgorithmId::Bfs,
            StepperInput::Array(vec![1, 2, 3]),
            ExecutionControl::new(),
        )
        .expect_err("mismatched input");
        assert_eq!(
            err,
            EngineError::InputMismatch {
                algorithm: AlgorithmId::Bfs,
                expected: "graph"
            }
        );
    }
}
