//! Algorithm info pane rendering
//!
//! Shows the selected algorithm's display name, description, complexity
//! table, and the operation counters accumulated up to the current
//! playback position.  The description wraps and the pane scrolls when
//! the text does not fit.

use crate::engine::{AlgorithmInfo, RunStats};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the algorithm info pane
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    info: &AlgorithmInfo,
    stats: RunStats,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(Span::styled(
            info.display_name,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(info.description, value_style)),
        Line::from(""),
        Line::from(Span::styled(
            "Complexity",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let complexity_rows = [
        ("Best:    ", info.complexity.best),
        ("Average: ", info.complexity.average),
        ("Worst:   ", info.complexity.worst),
        ("Space:   ", info.complexity.space),
    ];
    for (label, value) in complexity_rows {
        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(value, value_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Comparisons: ", label_style),
        Span::styled(
            stats.comparisons.to_string(),
            Style::default().fg(DEFAULT_THEME.success),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Swaps:       ", label_style),
        Span::styled(
            stats.swaps.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        ),
    ]));

    // Clamp scroll so the pane cannot run past the content.
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
