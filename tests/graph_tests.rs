//! End-to-end runs of every graph algorithm through the public stepper API

use algoscope::engine::{
    AlgorithmId, ExecutionControl, GraphInput, Step, Stepper, StepperInput,
};
use algoscope::input::{Edge, Graph};
use algoscope::snapshot::GraphSnapshot;

fn run_to_completion(
    id: AlgorithmId,
    graph: Graph,
    start: usize,
    end: Option<usize>,
) -> Vec<GraphSnapshot> {
    let control = ExecutionControl::new();
    let mut stepper = Stepper::new(
        id,
        StepperInput::Graph(GraphInput { graph, start, end }),
        control,
    )
    .expect("valid input");
    let mut snapshots = Vec::new();
    loop {
        match stepper.next() {
            Step::Snapshot { snapshot, finished } => {
                let graph = snapshot.as_graph().expect("graph snapshot").clone();
                snapshots.push(graph);
                if finished {
                    return snapshots;
                }
            }
            Step::Idle => panic!("unpaused stepper must not idle"),
        }
    }
}

/// 0 - 1 - 2 - 3 in a line, unit weights.
fn line_graph() -> Graph {
    Graph::new(
        4,
        vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(2, 3, 1)],
    )
    .expect("valid graph")
}

/// Two routes from 0 to 3: cheap detour 0-1-2-3 (total 3) and a direct
/// heavy edge 0-3 (weight 10).
fn detour_graph() -> Graph {
    Graph::new(
        4,
        vec![
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 1),
            Edge::new(2, 3, 1),
            Edge::new(0, 3, 10),
        ],
    )
    .expect("valid graph")
}

#[test]
fn bfs_reconstructs_the_line_path() {
    let snapshots = run_to_completion(AlgorithmId::Bfs, line_graph(), 0, Some(3));
    let last = snapshots.last().expect("terminal");
    assert!(last.terminal);
    assert_eq!(last.frontier, vec![0, 1, 2, 3]);
    assert_eq!(last.active, vec![3]);
}

#[test]
fn bfs_visits_in_distance_waves() {
    // Star with an extra rim edge: 0 at the center.
    let graph = Graph::new(
        5,
        vec![
            Edge::new(0, 1, 1),
            Edge::new(0, 2, 1),
            Edge::new(0, 3, 1),
            Edge::new(3, 4, 1),
        ],
    )
    .expect("valid graph");
    let snapshots = run_to_completion(AlgorithmId::Bfs, graph, 0, None);
    let last = snapshots.last().expect("terminal");
    // 4 is two hops out, so it settles last.
    assert_eq!(last.visited, vec![0, 1, 2, 3, 4]);
}

#[test]
fn visited_grows_append_only_without_duplicates() {
    let algorithms = [
        (AlgorithmId::Bfs, Some(3)),
        (AlgorithmId::Dfs, None),
        (AlgorithmId::Dijkstra, Some(3)),
        (AlgorithmId::AStar, Some(3)),
        (AlgorithmId::Prim, None),
        (AlgorithmId::Kruskal, None),
    ];
    for (id, end) in algorithms {
        let snapshots = run_to_completion(id, detour_graph(), 0, end);
        let mut prev: Vec<usize> = Vec::new();
        for snapshot in &snapshots {
            assert!(
                snapshot.visited.starts_with(&prev),
                "{} visited must be append-only",
                id
            );
            let mut dedup = snapshot.visited.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), snapshot.visited.len(), "{} duplicates", id);
            assert!(snapshot.active.len() <= 2, "{} active set size", id);
            prev = snapshot.visited.clone();
        }
    }
}

#[test]
fn dfs_explores_depth_first() {
    // 0 - 1 - 3 and 0 - 2; neighbor order follows edge insertion.
    let graph = Graph::new(
        4,
        vec![Edge::new(0, 1, 1), Edge::new(0, 2, 1), Edge::new(1, 3, 1)],
    )
    .expect("valid graph");
    let snapshots = run_to_completion(AlgorithmId::Dfs, graph, 0, None);
    let last = snapshots.last().expect("terminal");
    assert_eq!(last.visited, vec![0, 1, 3, 2]);
}

#[test]
fn dijkstra_takes_the_cheap_detour() {
    let snapshots = run_to_completion(AlgorithmId::Dijkstra, detour_graph(), 0, Some(3));
    let last = snapshots.last().expect("terminal");
    assert_eq!(last.frontier, vec![0, 1, 2, 3]);
}

#[test]
fn a_star_reaches_the_target() {
    let snapshots = run_to_completion(AlgorithmId::AStar, detour_graph(), 0, Some(3));
    let last = snapshots.last().expect("terminal");
    assert!(last.terminal);
    assert_eq!(last.active, vec![3]);
    assert_eq!(last.frontier.first(), Some(&0));
    assert_eq!(last.frontier.last(), Some(&3));
}

#[test]
fn unreachable_target_yields_a_degenerate_path() {
    // 3 is isolated from the component of 0.
    let graph = Graph::new(4, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1)])
        .expect("valid graph");
    let snapshots = run_to_completion(AlgorithmId::Bfs, graph, 0, Some(3));
    let last = snapshots.last().expect("terminal");
    assert!(last.terminal);
    assert_eq!(last.frontier, vec![3]);
    assert_eq!(last.visited, vec![0, 1, 2]);
}

#[test]
fn prim_and_kruskal_agree_on_tree_size() {
    let snapshots = run_to_completion(AlgorithmId::Prim, detour_graph(), 0, None);
    let prim_last = snapshots.last().expect("terminal");
    // N-1 edges, flattened to endpoint pairs.
    assert_eq!(prim_last.frontier.len(), 6);
    assert_eq!(prim_last.visited, vec![0, 1, 2, 3]);

    let snapshots = run_to_completion(AlgorithmId::Kruskal, detour_graph(), 0, None);
    let kruskal_last = snapshots.last().expect("terminal");
    assert_eq!(kruskal_last.frontier.len(), 6);
    // The heavy 0-3 edge closes a cycle and is rejected.
    assert!(!kruskal_last
        .frontier
        .chunks(2)
        .any(|edge| edge == [0, 3]));
}

#[test]
fn prim_skips_the_heavy_cycle_edge() {
    let snapshots = run_to_completion(AlgorithmId::Prim, detour_graph(), 0, None);
    let last = snapshots.last().expect("terminal");
    assert!(!last.frontier.chunks(2).any(|edge| edge == [0, 3]));
}

#[test]
fn single_vertex_graph_terminates_immediately() {
    let graph = || Graph::new(1, Vec::new()).expect("valid graph");
    for id in [AlgorithmId::Bfs, AlgorithmId::Dfs, AlgorithmId::Dijkstra] {
        let snapshots = run_to_completion(id, graph(), 0, None);
        let last = snapshots.last().expect("terminal");
        assert!(last.terminal, "{}", id);
        assert_eq!(last.visited, vec![0], "{}", id);
    }
    let snapshots = run_to_completion(AlgorithmId::Prim, graph(), 0, None);
    assert!(snapshots.last().expect("terminal").terminal);
    let snapshots = run_to_completion(AlgorithmId::Kruskal, graph(), 0, None);
    let last = snapshots.last().expect("terminal");
    assert!(last.terminal);
    assert!(last.frontier.is_empty());
}
