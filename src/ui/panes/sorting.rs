//! Sorting pane: the working array as horizontal bars

use crate::snapshot::SortSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Render the array pane.  Each element is one row: its value followed by a
/// bar proportional to the largest value in the frame.  Highlighted indices
/// draw in the highlight color; a terminal frame draws everything green.
pub fn render_sorting_pane(frame: &mut Frame, area: Rect, snapshot: Option<&SortSnapshot>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title(" Array ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = snapshot else {
        let placeholder = Paragraph::new("No run loaded. Press ⎵ to start.")
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(placeholder, inner);
        return;
    };

    let highlighted: FxHashSet<usize> = snapshot.highlighted.iter().copied().collect();
    let max = i64::from(snapshot.values.iter().copied().max().unwrap_or(1).max(1));
    let bar_width = i64::from(inner.width.saturating_sub(6));

    let mut lines = Vec::with_capacity(snapshot.values.len());
    for (i, &value) in snapshot
        .values
        .iter()
        .enumerate()
        .take(inner.height as usize)
    {
        let len = if value > 0 && bar_width > 0 {
            (i64::from(value) * bar_width / max).max(1) as usize
        } else {
            0
        };
        let color = if snapshot.terminal {
            DEFAULT_THEME.success
        } else if highlighted.contains(&i) {
            DEFAULT_THEME.bar_highlight
        } else {
            DEFAULT_THEME.bar
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>4} ", value),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled("█".repeat(len), Style::default().fg(color)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
