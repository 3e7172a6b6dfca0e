//! UI helpers for CLI display.

use console::{style, Color, Style};

use gibcalc_core::palette::Rgba;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render the page title.
#[must_use]
pub fn title(text: &str, color: bool) -> String {
    if color {
        style(format!("=== {text} ==="))
            .bold()
            .cyan()
            .force_styling(true)
            .to_string()
    } else {
        format!("=== {text} ===")
    }
}

/// Render a section heading.
#[must_use]
pub fn heading(text: &str, color: bool) -> String {
    if color {
        style(format!("#### {text}"))
            .bold()
            .force_styling(true)
            .to_string()
    } else {
        format!("#### {text}")
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Render `text` on the given background, or bracketed when color is off.
#[must_use]
pub fn paint_cell(text: &str, color: Rgba, enabled: bool) -> String {
    if !enabled {
        return format!("[{text}]");
    }
    let fg = if color.is_dark() {
        Color::White
    } else {
        Color::Black
    };
    Style::new()
        .bg(Color::Color256(color.to_ansi256()))
        .fg(fg)
        .force_styling(true)
        .apply_to(format!(" {text} "))
        .to_string()
}

/// Render a small color swatch followed by its hex code.
#[must_use]
pub fn swatch(color: Option<Rgba>, enabled: bool) -> String {
    match color {
        None => "-".to_string(),
        Some(c) if enabled => format!(
            "{} {}",
            Style::new()
                .bg(Color::Color256(c.to_ansi256()))
                .force_styling(true)
                .apply_to("  "),
            c.to_hex()
        ),
        Some(c) => c.to_hex(),
    }
}
