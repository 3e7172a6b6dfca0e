//! Solver input form.

use gibcalc_core::constants::{MAX_INDEX, MAX_SEED};
use gibcalc_core::solver::SolverQuery;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Editable field of the solver form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    A,
    B,
    N,
}

impl Field {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::N,
            Self::N => Self::A,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::A => Self::N,
            Self::B => Self::A,
            Self::N => Self::B,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::A => "G0=a",
            Self::B => "G1=b",
            Self::N => "n",
        }
    }

    fn bounds(self) -> (u64, u64) {
        match self {
            Self::A | Self::B => (0, MAX_SEED),
            Self::N => (1, MAX_INDEX),
        }
    }
}

/// Seeds, index and focused field; values always stay within their bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverForm {
    pub a: u64,
    pub b: u64,
    pub n: u64,
    pub focus: Field,
    start: u64,
    limit: u64,
    reduce_seeds: bool,
}

impl SolverForm {
    /// Form seeded from a query; out-of-range values are clamped.
    #[must_use]
    pub fn new(query: SolverQuery) -> Self {
        let mut form = Self {
            a: query.a,
            b: query.b,
            n: query.n,
            focus: Field::A,
            start: query.start,
            limit: query.limit,
            reduce_seeds: query.reduce_seeds,
        };
        for field in [Field::A, Field::B, Field::N] {
            let (lo, hi) = field.bounds();
            let v = form.value_mut(field);
            *v = (*v).clamp(lo, hi);
        }
        form
    }

    fn value_mut(&mut self, field: Field) -> &mut u64 {
        match field {
            Field::A => &mut self.a,
            Field::B => &mut self.b,
            Field::N => &mut self.n,
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> u64 {
        match field {
            Field::A => self.a,
            Field::B => self.b,
            Field::N => self.n,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Increment the focused field, saturating at its maximum.
    pub fn increment(&mut self) {
        let (_, hi) = self.focus.bounds();
        let v = self.value_mut(self.focus);
        *v = (*v + 1).min(hi);
    }

    /// Decrement the focused field, saturating at its minimum.
    pub fn decrement(&mut self) {
        let (lo, _) = self.focus.bounds();
        let v = self.value_mut(self.focus);
        *v = v.saturating_sub(1).max(lo);
    }

    /// Query for the current values over the configured search range.
    #[must_use]
    pub fn query(&self) -> SolverQuery {
        SolverQuery::new(self.a, self.b, self.n)
            .with_range(self.start, self.limit)
            .with_reduced_seeds(self.reduce_seeds)
    }
}

/// Render the form with its latest result line; a pending error replaces
/// the result.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &SolverForm,
    result: &str,
    error: Option<&str>,
) {
    let theme = ColorTheme::default();
    let mut fields = Vec::new();
    for field in [Field::A, Field::B, Field::N] {
        let style = if field == form.focus {
            theme.focus_style()
        } else {
            ratatui::style::Style::default()
        };
        fields.push(Span::styled(
            format!(" {}={} ", field.label(), form.value(field)),
            style,
        ));
        fields.push(Span::raw(" "));
    }

    let text = vec![
        Line::from(fields),
        Line::styled("G_n ≡ a, G_(n+1) ≡ b (mod m)", theme.muted_style()),
        match error {
            Some(err) => Line::styled(format!("Error: {err}"), theme.error_style()),
            None => Line::raw(result.to_string()),
        },
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Modular equation solver ");
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        area,
    );
}
