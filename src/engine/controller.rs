//! Playback transport over a stepper
//!
//! [`PlaybackController`] owns at most one active run and drives it
//! cooperatively: the host loop calls [`tick`](PlaybackController::tick)
//! at its own cadence and the controller decides, from the speed setting,
//! whether enough time has elapsed to pull the next snapshot.  Nothing here
//! blocks or spawns; the control token is shared with the stepper so pause
//! and stop land between whole algorithmic steps.
//!
//! Transport states: `Idle → Running ⇄ Paused → Finished`, with `stop`
//! returning to `Idle` from anywhere and clearing the sink.

use crate::engine::control::ExecutionControl;
use crate::engine::errors::EngineError;
use crate::engine::stepper::{AlgorithmId, Step, Stepper, StepperInput};
use crate::snapshot::Snapshot;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Lifecycle state of the playback transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// No run loaded
    Idle,
    /// Auto-advancing on each due tick
    Running,
    /// Run loaded but held; only `step` or `resume` make progress
    Paused,
    /// Terminal snapshot delivered; run discarded
    Finished,
}

/// Receiver for snapshots as playback produces them.
///
/// The render layer implements this; `clear` is called when a run is
/// stopped so stale frames do not outlive their run.
pub trait SnapshotSink {
    fn accept(&mut self, snapshot: &Snapshot);
    fn clear(&mut self);
}

/// Delay between auto-play frames for a speed in `1..=100`.
///
/// Linear mapping: speed 1 is 100ms per frame, speed 100 is 1ms.
/// Out-of-range speeds are clamped.
pub fn frame_delay(speed: u8) -> Duration {
    let speed = speed.clamp(1, 100);
    Duration::from_millis(101 - u64::from(speed))
}

struct ActiveRun {
    stepper: Stepper,
    control: Arc<ExecutionControl>,
}

/// Drives one run at a time through start, pause, resume, single-step,
/// stop, and speed changes.
pub struct PlaybackController {
    run: Option<ActiveRun>,
    transport: Transport,
    speed: u8,
    last_emit: Option<Instant>,
}

impl PlaybackController {
    pub fn new() -> Self {
        PlaybackController {
            run: None,
            transport: Transport::Idle,
            speed: 50,
            last_emit: None,
        }
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Set the playback speed, clamped to `1..=100`.  Takes effect from the
    /// next frame; never skips or repeats snapshots.
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.clamp(1, 100);
    }

    /// Begin a new run.
    ///
    /// Rejected with [`EngineError::RunInProgress`] while a run is loaded;
    /// input validation errors from [`Stepper::new`] pass through.  Frames
    /// from any previous finished run are cleared from the sink.
    pub fn start(
        &mut self,
        id: AlgorithmId,
        input: StepperInput,
        sink: &mut impl SnapshotSink,
    ) -> Result<(), EngineError> {
        if matches!(self.transport, Transport::Running | Transport::Paused) {
            return Err(EngineError::RunInProgress);
        }
        let control = ExecutionControl::new();
        let stepper = Stepper::new(id, input, Arc::clone(&control))?;
        sink.clear();
        self.run = Some(ActiveRun { stepper, control });
        self.transport = Transport::Running;
        self.last_emit = None;
        Ok(())
    }

    /// Advance playback if a frame is due.  Returns `true` when a snapshot
    /// was delivered to the sink.
    ///
    /// Call freely from the host loop; off-cadence and non-running calls
    /// are cheap no-ops.
    pub fn tick(&mut self, sink: &mut impl SnapshotSink) -> bool {
        if self.transport != Transport::Running {
            return false;
        }
        if let Some(last) = self.last_emit {
            if last.elapsed() < frame_delay(self.speed) {
                return false;
            }
        }
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        match run.stepper.next() {
            Step::Snapshot { snapshot, finished } => {
                sink.accept(&snapshot);
                self.last_emit = Some(Instant::now());
                if finished {
                    self.run = None;
                    self.transport = Transport::Finished;
                }
                true
            }
            Step::Idle => false,
        }
    }

    /// `Running → Paused`.
    pub fn pause(&mut self) -> Result<(), EngineError> {
        let Some(run) = self.run.as_ref() else {
            return Err(self.bad_transition("pause"));
        };
        if self.transport != Transport::Running {
            return Err(self.bad_transition("pause"));
        }
        run.control.pause();
        self.transport = Transport::Paused;
        Ok(())
    }

    /// `Paused → Running`.  The next frame is due immediately.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        let Some(run) = self.run.as_ref() else {
            return Err(self.bad_transition("resume"));
        };
        if self.transport != Transport::Paused {
            return Err(self.bad_transition("resume"));
        }
        run.control.resume();
        self.transport = Transport::Running;
        self.last_emit = None;
        Ok(())
    }

    /// Deliver exactly one snapshot, then hold.
    ///
    /// Valid from `Paused` and from `Running` (where it also pauses).  If
    /// the delivered snapshot is terminal the run finishes instead.
    pub fn step(&mut self, sink: &mut impl SnapshotSink) -> Result<(), EngineError> {
        if !matches!(self.transport, Transport::Running | Transport::Paused) {
            return Err(self.bad_transition("step"));
        }
        let Some(run) = self.run.as_mut() else {
            return Err(self.bad_transition("step"));
        };
        run.control.resume();
        match run.stepper.next() {
            Step::Snapshot { snapshot, finished } => {
                sink.accept(&snapshot);
                if finished {
                    self.run = None;
                    self.transport = Transport::Finished;
                } else {
                    run.control.pause();
                    self.transport = Transport::Paused;
                }
                Ok(())
            }
            // Unreachable after resume, but harmless to hold position.
            Step::Idle => {
                self.transport = Transport::Paused;
                Ok(())
            }
        }
    }

    /// Abandon the current run and clear the sink.  Idempotent: stopping
    /// from `Idle` does nothing.
    pub fn stop(&mut self, sink: &mut impl SnapshotSink) {
        if self.transport == Transport::Idle {
            return;
        }
        if let Some(run) = self.run.take() {
            run.control.stop();
        }
        self.transport = Transport::Idle;
        self.last_emit = None;
        sink.clear();
    }

    fn bad_transition(&self, action: &'static str) -> EngineError {
        EngineError::InvalidTransition {
            from: self.transport,
            action,
        }
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        PlaybackController::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct VecSink {
        frames: Vec<Snapshot>,
        clears: usize,
    }

    impl SnapshotSink for VecSink {
        fn accept(&mut self, snapshot: &Snapshot) {
            self.frames.push(snapshot.clone());
        }

        fn clear(&mut self) {
            self.frames.clear();
            self.clears += 1;
        }
    }

    fn start_bubble(controller: &mut PlaybackController, sink: &mut VecSink) {
        controller
            .start(
                AlgorithmId::BubbleSort,
                StepperInput::Array(vec![3, 1, 2]),
                sink,
            )
            .expect("start");
    }

    #[test]
    fn frame_delay_maps_speed_linearly() {
        assert_eq!(frame_delay(1), Duration::from_millis(100));
        assert_eq!(frame_delay(50), Duration::from_millis(51));
        assert_eq!(frame_delay(100), Duration::from_millis(1));
        // Clamped
        assert_eq!(frame_delay(0), Duration::from_millis(100));
        assert_eq!(frame_delay(255), Duration::from_millis(1));
    }

    #[test]
    fn only_one_run_at_a_time() {
        let mut controller = PlaybackController::new();
        let mut sink = VecSink::default();
        start_bubble(&mut controller, &mut sink);
        let err = controller
            .start(
                AlgorithmId::BubbleSort,
                StepperInput::Array(vec![1]),
                &mut sink,
            )
            .expect_err("second start");
        assert_eq!(err, EngineError::RunInProgress);
    }

    #[test]
    fn first_tick_emits_immediately() {
        let mut controller = PlaybackController::new();
        let mut sink = VecSink::default();
        start_bubble(&mut controller, &mut sink);
        assert!(controller.tick(&mut sink));
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn pause_blocks_ticks_and_step_advances_one() {
        let mut controller = PlaybackController::new();
        let mut sink = VecSink::default();
        start_bubble(&mut controller, &mut sink);
        controller.tick(&mut sink);
        controller.pause().expect("pause");
        assert!(!controller.tick(&mut sink));
        assert_eq!(sink.frames.len(), 1);
        controller.step(&mut sink).expect("step");
        assert_eq!(sink.frames.len(), 2);
        assert_eq!(controller.transport(), Transport::Paused);
    }

    #[test]
    fn stepping_through_terminal_finishes() {
        let mut controller = PlaybackController::new();
        let mut sink = VecSink::default();
        controller
            .start(
                AlgorithmId::BubbleSort,
                StepperInput::Array(vec![1]),
                &mut sink,
            )
            .expect("start");
        controller.pause().expect("pause");
        // Singleton input: the only snapshot is the terminal one.
        controller.step(&mut sink).expect("step");
        assert_eq!(controller.transport(), Transport::Finished);
        assert!(sink.frames[0].is_terminal());
        // A new run may start now without stopping first.
        start_bubble(&mut controller, &mut sink);
    }

    #[test]
    fn stop_clears_sink_and_is_idempotent() {
        let mut controller = PlaybackController::new();
        let mut sink = VecSink::default();
        start_bubble(&mut controller, &mut sink);
        controller.tick(&mut sink);
        controller.stop(&mut sink);
        assert_eq!(controller.transport(), Transport::Idle);
        assert!(sink.frames.is_empty());
        let clears = sink.clears;
        // Stop from Idle is a no-op, not an error.
        controller.stop(&mut sink);
        assert_eq!(sink.clears, clears);
    }

    #[test]
    fn transitions_from_idle_are_rejected() {
        let mut controller = PlaybackController::new();
        let mut sink = VecSink::default();
        assert_eq!(
            controller.pause(),
            Err(EngineError::InvalidTransition {
                from: Transport::Idle,
                action: "pause"
            })
        );
        assert_eq!(
            controller.resume(),
            Err(EngineError::InvalidTransition {
                from: Transport::Idle,
                action: "resume"
            })
        );
        assert_eq!(
            controller.step(&mut sink),
            Err(EngineError::InvalidTransition {
                from: Transport::Idle,
                action: "step"
            })
        );
    }
}
