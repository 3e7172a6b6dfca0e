//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 7] = [
    ("q", "quit"),
    ("+/-", "modulus"),
    ("Tab", "field"),
    ("←/→", "adjust"),
    ("Enter", "solve"),
    ("↑/↓", "scroll"),
    ("l", "logs"),
];

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(SHORTCUTS.len() * 2);
    for (i, (key, label)) in SHORTCUTS.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 == SHORTCUTS.len() { "" } else { " | " };
        spans.push(Span::raw(format!(": {label}{sep}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
