//! Tail of recent log lines.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Style for a log line by its level prefix.
#[must_use]
pub fn line_style(line: &str) -> Style {
    if line.starts_with("[ERROR]") {
        Style::default().fg(Color::Red)
    } else if line.starts_with("[WARN]") {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Render the most recent lines that fit in `area`.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String]) {
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = logs.len().saturating_sub(visible);

    let items: Vec<ListItem> = logs[skip..]
        .iter()
        .map(|log| ListItem::new(Line::raw(log.as_str())).style(line_style(log)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Logs ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn level_styles() {
        assert_eq!(line_style("[ERROR] x").fg, Some(Color::Red));
        assert_eq!(line_style("[WARN] x").fg, Some(Color::Yellow));
        assert_eq!(line_style("solved").fg, None);
    }

    #[test]
    fn shows_newest_lines() {
        let logs: Vec<String> = (0..10).map(|i| format!("line {i}")).collect();
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let frame = terminal
            .draw(|frame| {
                let area = frame.area();
                render_logs(frame, area, &logs);
            })
            .unwrap();
        let last: String = (0..frame.area.width)
            .map(|x| frame.buffer[(x, 3)].symbol().to_string())
            .collect();
        assert!(last.contains("line 9"));
    }

    #[test]
    fn empty_logs() {
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_logs(frame, area, &[]);
            })
            .unwrap();
    }
}
