//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use gibcalc_core::report::ModulusReport;

use crate::styles::ColorTheme;

/// Render the header panel: modulus, factorization, Pisano period and cycle count.
pub fn render_header(frame: &mut Frame, area: Rect, report: &ModulusReport, max_modulus: u64) {
    let theme = ColorTheme::default();
    let text = vec![Line::from(vec![
        Span::styled("GibCalc-rs", theme.header_style()),
        Span::raw(format!(
            " | m: {} | Pisano period: {} | cycles: {} | max m: {max_modulus}",
            report.factorization,
            report.pisano_period,
            report.cycles.len(),
        )),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Gibonacci period calculators ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
