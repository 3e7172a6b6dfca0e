//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

use gibcalc_core::palette::Rgba;

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub error: Color,
    pub muted: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style of the focused form field.
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}

/// Terminal color for a palette entry.
#[must_use]
pub fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Background in the cell color with a readable foreground.
#[must_use]
pub fn cell_style(color: Rgba) -> Style {
    let fg = if color.is_dark() {
        Color::White
    } else {
        Color::Black
    };
    Style::default().bg(to_color(color)).fg(fg)
}

/// Style for a cycle table row; the zero cycle stays unstyled.
#[must_use]
pub fn row_style(color: Option<Rgba>) -> Style {
    color.map_or_else(Style::default, cell_style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_cell_gets_white_text() {
        let style = cell_style(Rgba::new(0, 0, 0, 0xff));
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn light_cell_gets_black_text() {
        let style = cell_style(Rgba::new(250, 250, 200, 0xaa));
        assert_eq!(style.fg, Some(Color::Black));
    }

    #[test]
    fn zero_row_unstyled() {
        assert_eq!(row_style(None), Style::default());
    }

    #[test]
    fn theme_styles() {
        let theme = ColorTheme::default();
        assert_eq!(theme.header_style().fg, Some(Color::Cyan));
        assert_eq!(theme.error_style().fg, Some(Color::Red));
        assert!(theme.focus_style().add_modifier.contains(Modifier::REVERSED));
    }
}
