//! Color legend pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the bar color legend
pub fn render_legend_pane(frame: &mut Frame, area: Rect, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Legend ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let entries = [
        (DEFAULT_THEME.bar_default, "unsorted"),
        (DEFAULT_THEME.bar_comparing, "comparing"),
        (DEFAULT_THEME.bar_selected, "swapped / written"),
        (DEFAULT_THEME.bar_pivot, "pivot / boundary"),
        (DEFAULT_THEME.bar_sorted, "sorted"),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .map(|&(color, label)| {
            Line::from(vec![
                Span::styled("██ ", Style::default().fg(color)),
                Span::styled(label, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
