//! Main TUI application state and logic

use crate::engine::registry;
use crate::engine::{AlgorithmId, PlaybackController, SnapshotSink, StepperInput, Transport};
use crate::snapshot::Snapshot;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Sink keeping only the most recent snapshot; the render loop never needs
/// history, just the latest frame and how many came before it.
#[derive(Default)]
pub struct LatestFrame {
    current: Option<Snapshot>,
    count: usize,
}

impl LatestFrame {
    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl SnapshotSink for LatestFrame {
    fn accept(&mut self, snapshot: &Snapshot) {
        self.current = Some(snapshot.clone());
        self.count += 1;
    }

    fn clear(&mut self) {
        self.current = None;
        self.count = 0;
    }
}

/// The main application state
pub struct App {
    /// Which algorithm this session replays
    algorithm: AlgorithmId,

    /// Input template; each run gets its own copy
    input: StepperInput,

    /// Playback transport driving the current run
    controller: PlaybackController,

    /// Latest delivered snapshot
    frame: LatestFrame,

    /// Whether the app should quit
    should_quit: bool,

    /// Status message to display
    status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    pub fn new(algorithm: AlgorithmId, input: StepperInput) -> Self {
        App {
            algorithm,
            input,
            controller: PlaybackController::new(),
            frame: LatestFrame::default(),
            should_quit: false,
            status_message: String::from("Ready! Press ⎵ to start."),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.controller.tick(&mut self.frame) {
                if self.controller.transport() == Transport::Finished {
                    self.status_message = "Playback complete".to_string();
                }
            }

            // Poll with a short timeout so auto-play keeps its cadence
            if event::poll(Duration::from_millis(10))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        if self.algorithm.is_sorting() {
            super::panes::render_sorting_pane(
                frame,
                columns[0],
                self.frame.current().and_then(Snapshot::as_sorting),
            );
        } else {
            super::panes::render_graph_pane(
                frame,
                columns[0],
                self.vertex_count(),
                self.frame.current().and_then(Snapshot::as_graph),
            );
        }

        super::panes::render_info_pane(frame, columns[1], registry::describe(self.algorithm));

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.controller.transport(),
            self.controller.speed(),
            self.frame.count(),
        );
    }

    fn vertex_count(&self) -> usize {
        match &self.input {
            StepperInput::Graph(input) => input.graph.vertex_count(),
            StepperInput::Array(_) => 0,
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat spam
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_playback();
                }
            }
            KeyCode::Char('s') => {
                self.step_once();
            }
            KeyCode::Char('x') => {
                self.controller.stop(&mut self.frame);
                self.status_message = "Stopped".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.controller.speed().saturating_add(5);
                self.controller.set_speed(speed);
                self.status_message = format!("Speed {}", self.controller.speed());
            }
            KeyCode::Char('-') => {
                let speed = self.controller.speed().saturating_sub(5);
                self.controller.set_speed(speed);
                self.status_message = format!("Speed {}", self.controller.speed());
            }
            _ => {}
        }
    }

    fn toggle_playback(&mut self) {
        match self.controller.transport() {
            Transport::Idle | Transport::Finished => self.start_run(),
            Transport::Running => match self.controller.pause() {
                Ok(()) => self.status_message = "Paused".to_string(),
                Err(e) => self.status_message = format!("Error: {}", e),
            },
            Transport::Paused => match self.controller.resume() {
                Ok(()) => self.status_message = "Playing...".to_string(),
                Err(e) => self.status_message = format!("Error: {}", e),
            },
        }
    }

    fn start_run(&mut self) {
        match self
            .controller
            .start(self.algorithm, self.input.clone(), &mut self.frame)
        {
            Ok(()) => self.status_message = "Playing...".to_string(),
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    fn step_once(&mut self) {
        // Stepping from a cold transport loads the run paused first.
        if matches!(
            self.controller.transport(),
            Transport::Idle | Transport::Finished
        ) {
            self.start_run();
            if self.controller.pause().is_err() {
                return;
            }
        }
        match self.controller.step(&mut self.frame) {
            Ok(()) => {
                self.status_message = if self.controller.transport() == Transport::Finished {
                    "Playback complete".to_string()
                } else {
                    "Stepped".to_string()
                };
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }
}
