//! Playback transport behavior driven through the public controller API

use algoscope::engine::{
    AlgorithmId, EngineError, PlaybackController, SnapshotSink, StepperInput, Transport,
};
use algoscope::snapshot::Snapshot;

#[derive(Default)]
struct RecordingSink {
    frames: Vec<Snapshot>,
    clears: usize,
}

impl SnapshotSink for RecordingSink {
    fn accept(&mut self, snapshot: &Snapshot) {
        self.frames.push(snapshot.clone());
    }

    fn clear(&mut self) {
        self.frames.clear();
        self.clears += 1;
    }
}

fn start(controller: &mut PlaybackController, sink: &mut RecordingSink, values: Vec<i32>) {
    controller
        .start(AlgorithmId::BubbleSort, StepperInput::Array(values), sink)
        .expect("start");
}

/// Step a paused run all the way to its terminal snapshot.
fn step_to_end(controller: &mut PlaybackController, sink: &mut RecordingSink) {
    while controller.transport() != Transport::Finished {
        controller.step(sink).expect("step");
    }
}

#[test]
fn pause_then_tick_makes_no_progress() {
    let mut controller = PlaybackController::new();
    let mut sink = RecordingSink::default();
    start(&mut controller, &mut sink, vec![5, 3, 8, 1]);
    assert!(controller.tick(&mut sink));
    controller.pause().expect("pause");

    let frames_before = sink.frames.len();
    for _ in 0..10 {
        assert!(!controller.tick(&mut sink));
    }
    assert_eq!(sink.frames.len(), frames_before);
    assert_eq!(controller.transport(), Transport::Paused);
}

#[test]
fn step_delivers_exactly_one_snapshot_and_holds() {
    let mut controller = PlaybackController::new();
    let mut sink = RecordingSink::default();
    start(&mut controller, &mut sink, vec![5, 3, 8, 1]);
    controller.pause().expect("pause");

    controller.step(&mut sink).expect("step");
    assert_eq!(sink.frames.len(), 1);
    assert_eq!(controller.transport(), Transport::Paused);

    controller.step(&mut sink).expect("step");
    assert_eq!(sink.frames.len(), 2);
    assert_ne!(sink.frames[0], sink.frames[1]);
}

#[test]
fn stepped_run_reaches_the_sorted_terminal_state() {
    let mut controller = PlaybackController::new();
    let mut sink = RecordingSink::default();
    start(&mut controller, &mut sink, vec![5, 3, 8, 1]);
    controller.pause().expect("pause");
    step_to_end(&mut controller, &mut sink);

    let last = sink.frames.last().expect("terminal frame");
    assert!(last.is_terminal());
    let sort = last.as_sorting().expect("sorting snapshot");
    assert_eq!(sort.values, vec![1, 3, 5, 8]);
    // Exactly one terminal frame was delivered.
    assert_eq!(sink.frames.iter().filter(|f| f.is_terminal()).count(), 1);
}

#[test]
fn finished_transport_allows_a_fresh_start() {
    let mut controller = PlaybackController::new();
    let mut sink = RecordingSink::default();
    start(&mut controller, &mut sink, vec![2, 1]);
    controller.pause().expect("pause");
    step_to_end(&mut controller, &mut sink);
    assert_eq!(controller.transport(), Transport::Finished);

    // Starting a new run clears the previous run's frames.
    start(&mut controller, &mut sink, vec![3, 2, 1]);
    assert!(sink.frames.is_empty());
    assert_eq!(controller.transport(), Transport::Running);
}

#[test]
fn stop_discards_the_run_and_clears_frames() {
    let mut controller = PlaybackController::new();
    let mut sink = RecordingSink::default();
    start(&mut controller, &mut sink, vec![5, 3, 8, 1]);
    controller.tick(&mut sink);
    assert!(!sink.frames.is_empty());

    controller.stop(&mut sink);
    assert_eq!(controller.transport(), Transport::Idle);
    assert!(sink.frames.is_empty());

    // Stopping twice is a no-op.
    let clears = sink.clears;
    controller.stop(&mut sink);
    assert_eq!(sink.clears, clears);
}

#[test]
fn start_is_rejected_while_a_run_is_loaded() {
    let mut controller = PlaybackController::new();
    let mut sink = RecordingSink::default();
    start(&mut controller, &mut sink, vec![3, 1, 2]);

    let err = controller
        .start(
            AlgorithmId::BubbleSort,
            StepperInput::Array(vec![1]),
            &mut sink,
        )
        .expect_err("second start while running");
    assert_eq!(err, EngineError::RunInProgress);

    controller.pause().expect("pause");
    let err = controller
        .start(
            AlgorithmId::BubbleSort,
            StepperInput::Array(vec![1]),
            &mut sink,
        )
        .expect_err("second start while paused");
    assert_eq!(err, EngineError::RunInProgress);
}

#[test]
fn invalid_input_leaves_the_transport_idle() {
    let mut controller = PlaybackController::new();
    let mut sink = RecordingSink::default();
    let err = controller
        .start(AlgorithmId::MergeSort, StepperInput::Array(vec![]), &mut sink)
        .expect_err("empty array");
    assert_eq!(err, EngineError::EmptyArray);
    assert_eq!(controller.transport(), Transport::Idle);
    // A valid start still works afterwards.
    start(&mut controller, &mut sink, vec![2, 1]);
}

#[test]
fn speed_changes_mid_run_never_lose_frames() {
    let mut controller = PlaybackController::new();
    let mut sink = RecordingSink::default();
    start(&mut controller, &mut sink, vec![4, 3, 2, 1]);
    controller.pause().expect("pause");

    controller.step(&mut sink).expect("step");
    controller.set_speed(100);
    controller.step(&mut sink).expect("step");
    controller.set_speed(1);
    controller.step(&mut sink).expect("step");

    // Three steps, three frames, no skips or repeats.
    assert_eq!(sink.frames.len(), 3);
    assert_eq!(controller.speed(), 1);
}

#[test]
fn graph_runs_drive_through_the_same_transport() {
    use algoscope::engine::GraphInput;
    use algoscope::input::{Edge, Graph};

    let graph = Graph::new(
        4,
        vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(2, 3, 1)],
    )
    .expect("valid graph");
    let mut controller = PlaybackController::new();
    let mut sink = RecordingSink::default();
    controller
        .start(
            AlgorithmId::Bfs,
            StepperInput::Graph(GraphInput {
                graph,
                start: 0,
                end: Some(3),
            }),
            &mut sink,
        )
        .expect("start");
    controller.pause().expect("pause");
    step_to_end(&mut controller, &mut sink);

    let last = sink.frames.last().expect("terminal frame");
    let graph = last.as_graph().expect("graph snapshot");
    assert_eq!(graph.frontier, vec![0, 1, 2, 3]);
}
