//! Scrollable grid of colored state pairs.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use gibcalc_core::grid::StateGrid;

use crate::styles::cell_style;

/// Display width of a `a,b` label for modulus `m`.
#[must_use]
pub fn label_width(m: u64) -> usize {
    let digits = m.saturating_sub(1).max(1).ilog10() as usize + 1;
    2 * digits + 1
}

/// How many cells fit on one line of `width` columns.
#[must_use]
pub fn columns_for_width(width: u16, m: u64) -> usize {
    // " label " plus one separator.
    let cell = label_width(m) + 3;
    (usize::from(width) / cell).max(1)
}

/// Largest useful scroll offset for a viewport of `visible` rows.
#[must_use]
pub fn max_scroll(grid: &StateGrid, columns: usize, visible: usize) -> usize {
    grid.row_count(columns).saturating_sub(visible)
}

/// Render the grid starting at row `scroll`.
pub fn render_grid(frame: &mut Frame, area: Rect, grid: &StateGrid, scroll: usize) {
    let inner_width = area.width.saturating_sub(2);
    let visible = usize::from(area.height.saturating_sub(2));
    let columns = columns_for_width(inner_width, grid.modulus());
    let scroll = scroll.min(max_scroll(grid, columns, visible));
    let width = label_width(grid.modulus());

    let lines: Vec<Line> = grid
        .rows(columns)
        .skip(scroll)
        .take(visible)
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for cell in row {
                spans.push(Span::styled(
                    format!(" {:<width$} ", cell.label()),
                    cell_style(cell.color),
                ));
                spans.push(Span::styled(" ", Style::default()));
            }
            Line::from(spans)
        })
        .collect();

    let title = format!(
        " G0, G1 state pairs mod {} colored by sequence ({} orbits) ",
        grid.modulus(),
        grid.orbit_count()
    );
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
