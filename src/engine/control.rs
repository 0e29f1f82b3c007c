//! Cooperative pause/resume/stop signaling
//!
//! [`ExecutionControl`] is a three-state token shared between the playback
//! driver and a running stepper: `Running ⇄ Paused` is reversible and
//! driver-initiated, `Stopped` is terminal and one-way.  The stepper only
//! ever reads the state at its suspension points (before producing each
//! snapshot); it never spins or blocks, so a transition taken "between"
//! two checks is picked up at the next whole-step boundary.
//!
//! The flag is a single atomic byte, safe to read from the stepper's
//! execution context and write from the driver's even when both run as
//! independently scheduled threads.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

const RUNNING: u8 = 0;
const PAUSED: u8 = 1;
const STOPPED: u8 = 2;

/// Observable state of an [`ExecutionControl`] token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    Stopped,
}

/// Shared tri-state cancellation/suspension token for one run.
///
/// Created by the playback controller alongside a fresh stepper; the
/// stepper holds a clone of the `Arc` and only reads.
#[derive(Debug)]
pub struct ExecutionControl {
    state: AtomicU8,
}

impl ExecutionControl {
    /// New token in the `Running` state.
    pub fn new() -> Arc<Self> {
        Arc::new(ExecutionControl {
            state: AtomicU8::new(RUNNING),
        })
    }

    pub fn state(&self) -> RunState {
        match self.state.load(Ordering::Acquire) {
            PAUSED => RunState::Paused,
            STOPPED => RunState::Stopped,
            _ => RunState::Running,
        }
    }

    /// `Running → Paused`.  No effect from `Paused` or `Stopped`.
    pub fn pause(&self) {
        let _ = self
            .state
            .compare_exchange(RUNNING, PAUSED, Ordering::AcqRel, Ordering::Acquire);
    }

    /// `Paused → Running`.  No effect from `Running` or `Stopped`.
    pub fn resume(&self) {
        let _ = self
            .state
            .compare_exchange(PAUSED, RUNNING, Ordering::AcqRel, Ordering::Acquire);
    }

    /// `* → Stopped`.  One-way; idempotent.
    pub fn stop(&self) {
        self.state.store(STOPPED, Ordering::Release);
    }
}
