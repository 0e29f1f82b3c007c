//! Stepwise algorithm execution engine
//!
//! This module provides the core replay logic:
//! - [`stepper`]: the [`Stepper`] façade and the closed [`AlgorithmId`]
//!   dispatch over all known algorithms
//! - [`sorting`] / [`graph`]: per-algorithm explicit state machines
//! - [`control`]: the Running/Paused/Stopped token shared between a driver
//!   and a running stepper
//! - [`controller`]: the playback transport (start, pause, resume, stop,
//!   single-step, speed)
//! - [`registry`]: static name/complexity/description metadata
//! - [`errors`]: construction and transition error types
//!
//! # Execution model
//!
//! A stepper is created fresh for every run over a private copy of its
//! input.  Each `next()` call advances the algorithm by exactly one
//! externally meaningful unit of work (one comparison or element move for
//! sorting, one vertex settle or accepted edge for graphs) and returns the
//! snapshot capturing it.  Suspension is cooperative: the stepper checks
//! [`ExecutionControl`] before producing each snapshot and never blocks,
//! so pause/stop take effect between whole algorithmic steps and resumption
//! never observes a torn mutation.

pub mod control;
pub mod controller;
pub mod errors;
pub mod graph;
pub mod registry;
pub mod sorting;
pub mod stepper;

pub use control::{ExecutionControl, RunState};
pub use controller::{frame_delay, PlaybackController, SnapshotSink, Transport};
pub use errors::EngineError;
pub use stepper::{AlgorithmId, GraphInput, Step, Stepper, StepperInput};
