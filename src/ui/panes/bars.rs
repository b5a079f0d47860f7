//! Bar chart pane rendering
//!
//! This module renders the main visual: the current step's array as
//! vertical bars, one per element, colored by the element's state in the
//! step.  When a state applies to an index from several sets at once, the
//! priority is pivot, then selected, then comparing, then sorted, then
//! default.
//!
//! # Rendering
//!
//! Bar heights are scaled to the pane height over the step's value range.
//! A row of value labels is added under the bars when every label fits in
//! its bar's width.  If the array is wider than the pane, the overflow is
//! cut off on the right.

use crate::engine::SortingStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Per-index display state, lowest to highest priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarState {
    Default,
    Sorted,
    Comparing,
    Selected,
    Pivot,
}

impl BarState {
    fn color(self) -> Color {
        match self {
            BarState::Default => DEFAULT_THEME.bar_default,
            BarState::Sorted => DEFAULT_THEME.bar_sorted,
            BarState::Comparing => DEFAULT_THEME.bar_comparing,
            BarState::Selected => DEFAULT_THEME.bar_selected,
            BarState::Pivot => DEFAULT_THEME.bar_pivot,
        }
    }
}

/// State of one index in a step, by mark-set priority
fn bar_state(step: &SortingStep, index: usize) -> BarState {
    if step.pivot.contains(&index) {
        BarState::Pivot
    } else if step.selected.contains(&index) {
        BarState::Selected
    } else if step.comparing.contains(&index) {
        BarState::Comparing
    } else if step.sorted.contains(&index) {
        BarState::Sorted
    } else {
        BarState::Default
    }
}

/// Render the bar chart pane for the current step
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: &SortingStep, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if step.array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    if inner_width == 0 || inner_height == 0 {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    }

    let n = step.array.len();

    // Pick a bar width (1..=4 columns) and a gap that fit the pane.
    let mut bar_width = (inner_width / n).min(4).max(1);
    let mut gap = 1;
    if (bar_width + gap) * n > inner_width + gap {
        gap = 0;
        bar_width = (inner_width / n).max(1);
    }
    let capacity = (inner_width + gap) / (bar_width + gap);
    let shown = n.min(capacity.max(1));

    // Value labels get a dedicated bottom row when they all fit.
    let widest_label = step.array[..shown]
        .iter()
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(0);
    let labels_fit = widest_label <= bar_width && inner_height > 2;
    let bar_rows = if labels_fit {
        inner_height - 1
    } else {
        inner_height
    };

    let vmin = *step.array.iter().min().unwrap_or(&0);
    let vmax = *step.array.iter().max().unwrap_or(&0);

    let heights: Vec<usize> = step.array[..shown]
        .iter()
        .map(|&value| scale_height(value, vmin, vmax, bar_rows))
        .collect();

    let mut lines: Vec<Line> = Vec::with_capacity(inner_height);
    for row in 0..bar_rows {
        // Rows render top-down; a bar occupies the bottom `height` rows.
        let threshold = bar_rows - row;
        let mut spans: Vec<Span> = Vec::with_capacity(shown * 2);
        for (index, &height) in heights.iter().enumerate() {
            if index > 0 && gap > 0 {
                spans.push(Span::raw(" ".repeat(gap)));
            }
            if height >= threshold {
                spans.push(Span::styled(
                    "█".repeat(bar_width),
                    Style::default().fg(bar_state(step, index).color()),
                ));
            } else {
                spans.push(Span::raw(" ".repeat(bar_width)));
            }
        }
        lines.push(Line::from(spans));
    }

    if labels_fit {
        let mut spans: Vec<Span> = Vec::with_capacity(shown * 2);
        for (index, value) in step.array[..shown].iter().enumerate() {
            if index > 0 && gap > 0 {
                spans.push(Span::raw(" ".repeat(gap)));
            }
            spans.push(Span::styled(
                format!("{:^width$}", value, width = bar_width),
                Style::default().fg(bar_state(step, index).color()),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Scale a value into a bar height in `1..=rows`
fn scale_height(value: i64, vmin: i64, vmax: i64, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    if vmin == vmax {
        return rows;
    }
    let span = (vmax as i128 - vmin as i128) as f64;
    let offset = (value as i128 - vmin as i128) as f64;
    1 + (offset / span * (rows - 1) as f64).round() as usize
}
