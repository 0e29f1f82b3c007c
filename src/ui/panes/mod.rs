//! TUI pane rendering modules
//!
//! Stateless render functions, one module per visible pane:
//!
//! - [`sorting`]: the working array as a bar chart, highlights included
//! - [`graph`]: vertex states and the visited/frontier/active sets
//! - [`info`]: static name/complexity/description metadata
//! - [`status`]: status bar with keybindings and transport state
//!
//! Each function takes the current frame data by reference and draws into
//! the [`Rect`](ratatui::layout::Rect) it is given; no pane owns state.

pub mod graph;
pub mod info;
pub mod sorting;
pub mod status;

pub use graph::render_graph_pane;
pub use info::render_info_pane;
pub use sorting::render_sorting_pane;
pub use status::render_status_bar;
