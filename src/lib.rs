//! # Introduction
//!
//! Algoscope replays classical sorting and graph algorithms as an animated
//! sequence of state snapshots.  Each algorithm runs as a suspendable state
//! machine that yields one snapshot per meaningful unit of work (a
//! comparison, a swap, a vertex settle), pauses and resumes under external
//! control, and terminates with a uniquely flagged terminal snapshot.  The
//! snapshot stream is then driven at a configurable cadence into a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Stepper → Snapshots → PlaybackController → Sink → TUI
//! ```
//!
//! 1. [`input`] — validated arrays and undirected weighted graphs, plus
//!    random generation for the front-end.
//! 2. [`engine`] — the stepwise execution engine: per-algorithm state
//!    machines behind [`engine::Stepper`], the [`engine::ExecutionControl`]
//!    pause/stop token, the [`engine::PlaybackController`] transport, and
//!    static [`engine::registry`] metadata.
//! 3. [`snapshot`] — immutable value types describing one observable
//!    instant of a run.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, selection, insertion, merge, quick, heap, shell,
//! counting, radix.
//! Graph: breadth-first search, depth-first search, Dijkstra, A*, Prim,
//! Kruskal.

pub mod engine;
pub mod input;
pub mod snapshot;
pub mod ui;
