//! Error types for the execution engine
//!
//! Two failure families exist: invalid input (malformed array or graph,
//! missing A* target) surfaced synchronously at stepper construction before
//! any snapshot is produced, and invalid transition (controller API misuse)
//! rejected without side effects.  Calling `next()` on a finished stepper
//! is deliberately *not* an error; it keeps returning the terminal
//! snapshot.

use crate::engine::controller::Transport;
use crate::engine::stepper::AlgorithmId;
use std::fmt;

/// Errors produced by stepper construction and the playback controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Sorting input was an empty array
    EmptyArray,

    /// Radix sort rejects negative values (digit extraction is base-10 on
    /// non-negative integers)
    NegativeValue { index: usize, value: i32 },

    /// Graph had no vertices
    NoVertices,

    /// An edge endpoint was outside `0..vertex_count`
    EdgeOutOfRange {
        u: usize,
        v: usize,
        vertex_count: usize,
    },

    /// An edge connected a vertex to itself
    SelfLoop { vertex: usize },

    /// An edge carried weight zero
    ZeroWeight { u: usize, v: usize },

    /// A start or end vertex was outside `0..vertex_count`
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// The algorithm requires a target vertex and none was supplied
    MissingTarget { algorithm: AlgorithmId },

    /// The input shape does not match the algorithm family
    InputMismatch {
        algorithm: AlgorithmId,
        expected: &'static str,
    },

    /// A transport action was invoked from a state that does not allow it
    InvalidTransition {
        from: Transport,
        action: &'static str,
    },

    /// `start()` was called while a run was already active
    RunInProgress,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptyArray => {
                write!(f, "Sorting input must contain at least one element")
            }
            EngineError::NegativeValue { index, value } => {
                write!(
                    f,
                    "Radix sort requires non-negative values, found {} at index {}",
                    value, index
                )
            }
            EngineError::NoVertices => {
                write!(f, "Graph must contain at least one vertex")
            }
            EngineError::EdgeOutOfRange { u, v, vertex_count } => {
                write!(
                    f,
                    "Edge ({}, {}) references a vertex outside 0..{}",
                    u, v, vertex_count
                )
            }
            EngineError::SelfLoop { vertex } => {
                write!(f, "Edge connects vertex {} to itself", vertex)
            }
            EngineError::ZeroWeight { u, v } => {
                write!(f, "Edge ({}, {}) must carry a positive weight", u, v)
            }
            EngineError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => {
                write!(f, "Vertex {} is outside 0..{}", vertex, vertex_count)
            }
            EngineError::MissingTarget { algorithm } => {
                write!(f, "{} requires an end vertex", algorithm)
            }
            EngineError::InputMismatch {
                algorithm,
                expected,
            } => {
                write!(f, "{} expects {} input", algorithm, expected)
            }
            EngineError::InvalidTransition { from, action } => {
                write!(f, "Cannot {} while transport is {:?}", action, from)
            }
            EngineError::RunInProgress => {
                write!(f, "A run is already active; stop it before starting another")
            }
        }
    }
}

impl std::error::Error for EngineError {}
