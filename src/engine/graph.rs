//! Graph algorithm state machines
//!
//! Traversals (BFS, DFS) and shortest-path searches (Dijkstra, A*) yield a
//! snapshot each time a vertex is settled; the minimum-spanning-tree
//! machines (Prim, Kruskal) yield per accepted edge.  Entries popped for
//! already-settled vertices are lazily discarded without a snapshot, and
//! Kruskal's cycle-forming edges advance silently, so every `advance` call
//! reflects one externally meaningful unit of work.
//!
//! When an end vertex is supplied, BFS, Dijkstra, and A* terminate early on
//! reaching it and emit a final snapshot whose `frontier` is the path
//! reconstructed through parent pointers (end back to start, reversed).

use crate::input::{Edge, Graph};
use crate::snapshot::GraphSnapshot;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

fn step(visited: Vec<usize>, frontier: Vec<usize>, active: Vec<usize>) -> GraphSnapshot {
    GraphSnapshot {
        visited,
        frontier,
        active,
        terminal: false,
    }
}

fn terminal(visited: Vec<usize>, frontier: Vec<usize>, active: Vec<usize>) -> GraphSnapshot {
    GraphSnapshot {
        visited,
        frontier,
        active,
        terminal: true,
    }
}

/// Walk parent pointers from `end` back to the source and reverse.  An end
/// vertex that was never discovered yields just `[end]`.
fn reconstruct_path(parent: &[Option<usize>], end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    path
}

fn flatten(edges: &[(usize, usize)]) -> Vec<usize> {
    edges.iter().flat_map(|&(u, v)| [u, v]).collect()
}

/// Closed dispatch over the graph machines.
#[derive(Debug)]
pub(crate) enum GraphMachine {
    Bfs(BfsTraversal),
    Dfs(DfsTraversal),
    Dijkstra(DijkstraSearch),
    AStar(AStarSearch),
    Prim(PrimMst),
    Kruskal(KruskalMst),
}

impl GraphMachine {
    pub(crate) fn advance(&mut self) -> Option<GraphSnapshot> {
        match self {
            GraphMachine::Bfs(m) => m.advance(),
            GraphMachine::Dfs(m) => m.advance(),
            GraphMachine::Dijkstra(m) => m.advance(),
            GraphMachine::AStar(m) => m.advance(),
            GraphMachine::Prim(m) => m.advance(),
            GraphMachine::Kruskal(m) => m.advance(),
        }
    }

    pub(crate) fn halt(&self) -> GraphSnapshot {
        match self {
            GraphMachine::Bfs(m) => terminal(m.order.clone(), m.order.clone(), Vec::new()),
            GraphMachine::Dfs(m) => terminal(m.order.clone(), m.order.clone(), Vec::new()),
            GraphMachine::Dijkstra(m) => terminal(m.order.clone(), m.order.clone(), Vec::new()),
            GraphMachine::AStar(m) => terminal(m.order.clone(), m.order.clone(), Vec::new()),
            GraphMachine::Prim(m) => terminal(m.order.clone(), flatten(&m.mst), Vec::new()),
            GraphMachine::Kruskal(m) => {
                terminal(m.touched.clone(), flatten(&m.mst), Vec::new())
            }
        }
    }
}

#[derive(Debug)]
enum Phase {
    Run,
    Finish,
    Done,
}

// ---------------------------------------------------------------------------
// Breadth-first search

#[derive(Debug)]
pub(crate) struct BfsTraversal {
    graph: Graph,
    end: Option<usize>,
    discovered: Vec<bool>,
    parent: Vec<Option<usize>>,
    queue: VecDeque<usize>,
    order: Vec<usize>,
    phase: Phase,
}

impl BfsTraversal {
    pub(crate) fn new(graph: Graph, start: usize, end: Option<usize>) -> Self {
        let n = graph.vertex_count();
        let mut discovered = vec![false; n];
        discovered[start] = true;
        BfsTraversal {
            graph,
            end,
            discovered,
            parent: vec![None; n],
            queue: VecDeque::from([start]),
            order: Vec::new(),
            phase: Phase::Run,
        }
    }

    fn advance(&mut self) -> Option<GraphSnapshot> {
        loop {
            match self.phase {
                Phase::Run => {
                    let Some(current) = self.queue.pop_front() else {
                        self.phase = Phase::Finish;
                        continue;
                    };
                    self.order.push(current);
                    let snap = step(self.order.clone(), self.order.clone(), vec![current]);
                    if self.end == Some(current) {
                        self.phase = Phase::Finish;
                    } else {
                        for &(neighbor, _) in self.graph.neighbors(current) {
                            if !self.discovered[neighbor] {
                                self.discovered[neighbor] = true;
                                self.parent[neighbor] = Some(current);
                                self.queue.push_back(neighbor);
                            }
                        }
                    }
                    return Some(snap);
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(match self.end {
                        Some(end) => terminal(
                            self.order.clone(),
                            reconstruct_path(&self.parent, end),
                            vec![end],
                        ),
                        None => terminal(self.order.clone(), self.order.clone(), Vec::new()),
                    });
                }
                Phase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Depth-first search

#[derive(Debug)]
pub(crate) struct DfsTraversal {
    graph: Graph,
    end: Option<usize>,
    visited: Vec<bool>,
    stack: Vec<usize>,
    order: Vec<usize>,
    phase: Phase,
}

impl DfsTraversal {
    pub(crate) fn new(graph: Graph, start: usize, end: Option<usize>) -> Self {
        let n = graph.vertex_count();
        DfsTraversal {
            graph,
            end,
            visited: vec![false; n],
            stack: vec![start],
            order: Vec::new(),
            phase: Phase::Run,
        }
    }

    fn advance(&mut self) -> Option<GraphSnapshot> {
        loop {
            match self.phase {
                Phase::Run => {
                    // Skip stale stack entries for vertices visited since push.
                    let current = loop {
                        match self.stack.pop() {
                            None => break None,
                            Some(v) if self.visited[v] => continue,
                            Some(v) => break Some(v),
                        }
                    };
                    let Some(current) = current else {
                        self.phase = Phase::Finish;
                        continue;
                    };
                    self.visited[current] = true;
                    self.order.push(current);
                    let snap = step(self.order.clone(), self.order.clone(), vec![current]);
                    if self.end == Some(current) {
                        self.phase = Phase::Finish;
                    } else {
                        // Reverse push order so pop order follows
                        // adjacency-list insertion order.
                        for &(neighbor, _) in self.graph.neighbors(current).iter().rev() {
                            if !self.visited[neighbor] {
                                self.stack.push(neighbor);
                            }
                        }
                    }
                    return Some(snap);
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(terminal(
                        self.order.clone(),
                        self.order.clone(),
                        Vec::new(),
                    ));
                }
                Phase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dijkstra shortest path

#[derive(Debug)]
pub(crate) struct DijkstraSearch {
    graph: Graph,
    end: Option<usize>,
    dist: Vec<u64>,
    visited: Vec<bool>,
    parent: Vec<Option<usize>>,
    // Min-heap by (distance, vertex); stale entries discarded lazily.
    heap: BinaryHeap<Reverse<(u64, usize)>>,
    order: Vec<usize>,
    phase: Phase,
}

impl DijkstraSearch {
    pub(crate) fn new(graph: Graph, start: usize, end: Option<usize>) -> Self {
        let n = graph.vertex_count();
        let mut dist = vec![u64::MAX; n];
        dist[start] = 0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, start)));
        DijkstraSearch {
            graph,
            end,
            dist,
            visited: vec![false; n],
            parent: vec![None; n],
            heap,
            order: Vec::new(),
            phase: Phase::Run,
        }
    }

    fn advance(&mut self) -> Option<GraphSnapshot> {
        loop {
            match self.phase {
                Phase::Run => {
                    while let Some(Reverse((d, current))) = self.heap.pop() {
                        if self.visited[current] {
                            continue;
                        }
                        self.visited[current] = true;
                        self.order.push(current);
                        let snap =
                            step(self.order.clone(), self.order.clone(), vec![current]);
                        if self.end == Some(current) {
                            self.phase = Phase::Finish;
                        } else {
                            for &(neighbor, weight) in self.graph.neighbors(current) {
                                if !self.visited[neighbor] {
                                    let next = d + weight;
                                    if next < self.dist[neighbor] {
                                        self.dist[neighbor] = next;
                                        self.parent[neighbor] = Some(current);
                                        self.heap.push(Reverse((next, neighbor)));
                                    }
                                }
                            }
                        }
                        return Some(snap);
                    }
                    self.phase = Phase::Finish;
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(match self.end {
                        Some(end) => terminal(
                            self.order.clone(),
                            reconstruct_path(&self.parent, end),
                            vec![end],
                        ),
                        None => terminal(self.order.clone(), self.order.clone(), Vec::new()),
                    });
                }
                Phase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// A* shortest path

/// Placeholder heuristic carried over from the reference implementation:
/// a constant estimate of one remaining edge.  Not admissible for general
/// weighted graphs, so the found path is not guaranteed optimal; it is
/// kept for faithful visualization rather than silently corrected.
const ASTAR_HEURISTIC: u64 = 1;

#[derive(Debug)]
pub(crate) struct AStarSearch {
    graph: Graph,
    end: usize,
    dist: Vec<u64>,
    visited: Vec<bool>,
    parent: Vec<Option<usize>>,
    // Min-heap by (f, g, vertex) where f = g + h.
    heap: BinaryHeap<Reverse<(u64, u64, usize)>>,
    order: Vec<usize>,
    phase: Phase,
}

impl AStarSearch {
    pub(crate) fn new(graph: Graph, start: usize, end: usize) -> Self {
        let n = graph.vertex_count();
        let mut dist = vec![u64::MAX; n];
        dist[start] = 0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((ASTAR_HEURISTIC, 0, start)));
        AStarSearch {
            graph,
            end,
            dist,
            visited: vec![false; n],
            parent: vec![None; n],
            heap,
            order: Vec::new(),
            phase: Phase::Run,
        }
    }

    fn advance(&mut self) -> Option<GraphSnapshot> {
        loop {
            match self.phase {
                Phase::Run => {
                    while let Some(Reverse((_, g, current))) = self.heap.pop() {
                        if self.visited[current] {
                            continue;
                        }
                        self.visited[current] = true;
                        self.order.push(current);
                        let snap =
                            step(self.order.clone(), self.order.clone(), vec![current]);
                        if current == self.end {
                            self.phase = Phase::Finish;
                        } else {
                            for &(neighbor, weight) in self.graph.neighbors(current) {
                                if !self.visited[neighbor] {
                                    let next = g + weight;
                                    if next < self.dist[neighbor] {
                                        self.dist[neighbor] = next;
                                        self.parent[neighbor] = Some(current);
                                        self.heap.push(Reverse((
                                            next + ASTAR_HEURISTIC,
                                            next,
                                            neighbor,
                                        )));
                                    }
                                }
                            }
                        }
                        return Some(snap);
                    }
                    self.phase = Phase::Finish;
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(terminal(
                        self.order.clone(),
                        reconstruct_path(&self.parent, self.end),
                        vec![self.end],
                    ));
                }
                Phase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Prim minimum spanning tree

#[derive(Debug)]
pub(crate) struct PrimMst {
    graph: Graph,
    visited: Vec<bool>,
    // Best crossing-edge weight seen per vertex; avoids flooding the heap.
    best: Vec<u64>,
    // Min-heap by (weight, vertex, origin); ties break by vertex id.
    heap: BinaryHeap<Reverse<(u64, usize, Option<usize>)>>,
    order: Vec<usize>,
    mst: Vec<(usize, usize)>,
    phase: Phase,
}

impl PrimMst {
    pub(crate) fn new(graph: Graph, start: usize) -> Self {
        let n = graph.vertex_count();
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, start, None)));
        PrimMst {
            graph,
            visited: vec![false; n],
            best: vec![u64::MAX; n],
            heap,
            order: Vec::new(),
            mst: Vec::new(),
            phase: Phase::Run,
        }
    }

    fn advance(&mut self) -> Option<GraphSnapshot> {
        loop {
            match self.phase {
                Phase::Run => {
                    while let Some(Reverse((_, current, from))) = self.heap.pop() {
                        if self.visited[current] {
                            continue;
                        }
                        self.visited[current] = true;
                        self.order.push(current);
                        if let Some(origin) = from {
                            self.mst.push((origin, current));
                        }
                        let snap =
                            step(self.order.clone(), flatten(&self.mst), vec![current]);
                        if self.order.len() == self.graph.vertex_count() {
                            // Tree complete: N-1 edges accepted.
                            self.phase = Phase::Finish;
                        } else {
                            for &(neighbor, weight) in self.graph.neighbors(current) {
                                if !self.visited[neighbor] && weight < self.best[neighbor] {
                                    self.best[neighbor] = weight;
                                    self.heap.push(Reverse((
                                        weight,
                                        neighbor,
                                        Some(current),
                                    )));
                                }
                            }
                        }
                        return Some(snap);
                    }
                    self.phase = Phase::Finish;
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(terminal(
                        self.order.clone(),
                        flatten(&self.mst),
                        Vec::new(),
                    ));
                }
                Phase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Kruskal minimum spanning tree

#[derive(Debug)]
pub(crate) struct KruskalMst {
    vertex_count: usize,
    // Edges ascending by weight; the sort is stable, so equal weights keep
    // their input order.
    edges: Vec<Edge>,
    cursor: usize,
    dsu: Vec<usize>,
    touched_mark: Vec<bool>,
    touched: Vec<usize>,
    mst: Vec<(usize, usize)>,
    phase: Phase,
}

impl KruskalMst {
    pub(crate) fn new(graph: Graph) -> Self {
        let n = graph.vertex_count();
        let mut edges = graph.edges().to_vec();
        edges.sort_by_key(|e| e.weight);
        KruskalMst {
            vertex_count: n,
            edges,
            cursor: 0,
            dsu: (0..n).collect(),
            touched_mark: vec![false; n],
            touched: Vec::new(),
            mst: Vec::new(),
            phase: Phase::Run,
        }
    }

    /// Find with full path compression.
    fn find(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.dsu[root] != root {
            root = self.dsu[root];
        }
        let mut cursor = v;
        while self.dsu[cursor] != root {
            let next = self.dsu[cursor];
            self.dsu[cursor] = root;
            cursor = next;
        }
        root
    }

    fn union(&mut self, u: usize, v: usize) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);
        if root_u == root_v {
            return false;
        }
        self.dsu[root_v] = root_u;
        true
    }

    fn touch(&mut self, v: usize) {
        if !self.touched_mark[v] {
            self.touched_mark[v] = true;
            self.touched.push(v);
        }
    }

    fn advance(&mut self) -> Option<GraphSnapshot> {
        loop {
            match self.phase {
                Phase::Run => {
                    while self.cursor < self.edges.len() {
                        let edge = self.edges[self.cursor];
                        self.cursor += 1;
                        // Cycle-forming edges are rejected without a snapshot.
                        if self.union(edge.u, edge.v) {
                            self.mst.push((edge.u, edge.v));
                            self.touch(edge.u);
                            self.touch(edge.v);
                            let snap = step(
                                self.touched.clone(),
                                flatten(&self.mst),
                                vec![edge.u, edge.v],
                            );
                            if self.mst.len() + 1 == self.vertex_count {
                                self.phase = Phase::Finish;
                            }
                            return Some(snap);
                        }
                    }
                    self.phase = Phase::Finish;
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(terminal(
                        self.touched.clone(),
                        flatten(&self.mst),
                        Vec::new(),
                    ));
                }
                Phase::Done => return None,
            }
        }
    }
}
