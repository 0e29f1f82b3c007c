//! Info pane: static algorithm metadata

use crate::engine::registry::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_info_pane(frame: &mut Frame, area: Rect, info: &AlgorithmInfo) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title(format!(" {} ", info.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Time:  ", label),
            Span::styled(
                info.time_complexity,
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
        ]),
        Line::from(vec![
            Span::styled("Space: ", label),
            Span::styled(
                info.space_complexity,
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Steps",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for (i, step) in info.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", i + 1), label),
            Span::styled(*step, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
