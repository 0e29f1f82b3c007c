//! Graph pane: per-vertex state cells plus the three tracked sets

use crate::snapshot::GraphSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use rustc_hash::FxHashSet;

fn join(ids: &[usize]) -> String {
    ids.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the graph pane.  The top rows show one cell per vertex colored by
/// its state (active over frontier over visited); below them the visited,
/// frontier, and active sequences are listed in order.
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    vertex_count: usize,
    snapshot: Option<&GraphSnapshot>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title(" Graph ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = snapshot else {
        let placeholder = Paragraph::new("No run loaded. Press ⎵ to start.")
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(placeholder, inner);
        return;
    };

    let visited: FxHashSet<usize> = snapshot.visited.iter().copied().collect();
    let frontier: FxHashSet<usize> = snapshot.frontier.iter().copied().collect();
    let active: FxHashSet<usize> = snapshot.active.iter().copied().collect();

    let mut cells = Vec::with_capacity(vertex_count);
    for v in 0..vertex_count {
        let style = if active.contains(&v) {
            Style::default()
                .fg(DEFAULT_THEME.active)
                .add_modifier(Modifier::BOLD)
        } else if frontier.contains(&v) {
            Style::default().fg(DEFAULT_THEME.frontier)
        } else if visited.contains(&v) {
            Style::default().fg(DEFAULT_THEME.visited)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        cells.push(Span::styled(format!(" {:>2} ", v), style));
    }

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let lines = vec![
        Line::from(cells),
        Line::default(),
        Line::from(vec![
            Span::styled("Visited:  ", label),
            Span::styled(
                join(&snapshot.visited),
                Style::default().fg(DEFAULT_THEME.visited),
            ),
        ]),
        Line::from(vec![
            Span::styled("Frontier: ", label),
            Span::styled(
                join(&snapshot.frontier),
                Style::default().fg(DEFAULT_THEME.frontier),
            ),
        ]),
        Line::from(vec![
            Span::styled("Active:   ", label),
            Span::styled(
                join(&snapshot.active),
                Style::default().fg(DEFAULT_THEME.active),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
