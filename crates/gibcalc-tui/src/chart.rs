//! Histogram of cycle lengths.

use std::collections::BTreeMap;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

/// Bars for `length -> count`, ascending by length.
#[must_use]
pub fn frequency_bars(frequencies: &BTreeMap<usize, usize>) -> Vec<Bar<'static>> {
    frequencies
        .iter()
        .map(|(&length, &count)| {
            Bar::default()
                .value(u64::try_from(count).unwrap_or(u64::MAX))
                .label(Line::from(length.to_string()))
        })
        .collect()
}

/// Render the frequency chart.
pub fn render_frequencies(frame: &mut Frame, area: Rect, frequencies: &BTreeMap<usize, usize>) {
    let bars = frequency_bars(frequencies);
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" Frequencies "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gibcalc_core::cycles::CycleTable;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn one_bar_per_length() {
        let table = CycleTable::enumerate(5).unwrap();
        let bars = frequency_bars(&table.length_frequencies());
        assert_eq!(bars.len(), 3);
    }

    #[test]
    fn render_does_not_panic() {
        let table = CycleTable::enumerate(10).unwrap();
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_frequencies(frame, area, &table.length_frequencies());
            })
            .unwrap();
    }

    #[test]
    fn render_empty() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_frequencies(frame, area, &BTreeMap::new());
            })
            .unwrap();
    }
}
