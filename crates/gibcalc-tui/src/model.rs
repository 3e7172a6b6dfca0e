//! TUI application model (Elm architecture).

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use gibcalc_core::constants::MIN_MODULUS;
use gibcalc_core::error::GibError;
use gibcalc_core::report::ModulusReport;
use gibcalc_core::solver::{solve, Solution, SolverQuery};

use crate::chart::render_frequencies;
use crate::footer::render_footer;
use crate::form::{render_form, SolverForm};
use crate::grid::{columns_for_width, max_scroll, render_grid};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::render_logs;
use crate::messages::TuiMessage;
use crate::table::render_cycle_table;

const MAX_LOGS: usize = 500;

/// Startup values for the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct TuiSettings {
    pub modulus: u64,
    pub max_modulus: u64,
    pub query: SolverQuery,
}

/// Rectangles of the right-hand column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideLayout {
    pub table: Rect,
    pub chart: Rect,
    pub form: Rect,
    pub logs: Option<Rect>,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Report for the modulus on screen.
    pub report: ModulusReport,
    pub max_modulus: u64,
    pub form: SolverForm,
    /// Latest solver outcome, shown under the form.
    pub result: String,
    /// Whether a background search is running.
    pub solving: bool,
    /// First grid row on screen.
    pub grid_scroll: usize,
    pub logs: Vec<String>,
    pub show_logs: bool,
    /// Latest error, shown in place of the result until the next success.
    pub error: Option<String>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    tx: Sender<TuiMessage>,
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create the app and build the report for the starting modulus.
    pub fn new(settings: TuiSettings) -> Result<Self, GibError> {
        let report = ModulusReport::build(settings.modulus, settings.max_modulus)?;
        settings.query.validate()?;
        let (tx, rx) = unbounded();
        Ok(Self {
            should_quit: false,
            report,
            max_modulus: settings.max_modulus,
            form: SolverForm::new(settings.query),
            result: "Press Enter to search.".to_string(),
            solving: false,
            grid_scroll: 0,
            logs: Vec::new(),
            show_logs: true,
            error: None,
            terminal_width: 80,
            terminal_height: 24,
            tx,
            rx,
        })
    }

    /// Sender for feeding messages into the update loop.
    #[must_use]
    pub fn sender(&self) -> Sender<TuiMessage> {
        self.tx.clone()
    }

    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.report.modulus()
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::ModulusChanged(m) => self.set_modulus(m),
            TuiMessage::Solved { solution, duration } => self.finish_solve(&solution, duration),
            TuiMessage::Log(line) => self.push_log(line),
            TuiMessage::Error(err) => {
                self.solving = false;
                self.push_log(format!("[ERROR] {err}"));
                self.error = Some(err);
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                self.grid_scroll = self.grid_scroll.min(self.max_grid_scroll());
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Tick => {}
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        let m = self.modulus();
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ModulusUp if m < self.max_modulus => self.set_modulus(m + 1),
            KeyAction::ModulusDown if m > MIN_MODULUS => self.set_modulus(m - 1),
            KeyAction::NextField => self.form.focus_next(),
            KeyAction::PrevField => self.form.focus_prev(),
            KeyAction::Increment => self.form.increment(),
            KeyAction::Decrement => self.form.decrement(),
            KeyAction::Solve => self.start_solve(),
            KeyAction::ToggleLogs => self.show_logs = !self.show_logs,
            KeyAction::ScrollUp => self.scroll_by(-1),
            KeyAction::ScrollDown => self.scroll_by(1),
            KeyAction::PageUp => self.scroll_by(-self.page_size()),
            KeyAction::PageDown => self.scroll_by(self.page_size()),
            KeyAction::Home => self.grid_scroll = 0,
            KeyAction::End => self.grid_scroll = self.max_grid_scroll(),
            KeyAction::ModulusUp | KeyAction::ModulusDown | KeyAction::None => {}
        }
    }

    /// Rebuild the report for `m`; invalid moduli are logged and ignored.
    pub fn set_modulus(&mut self, m: u64) {
        match ModulusReport::build(m, self.max_modulus) {
            Ok(report) => {
                tracing::debug!(modulus = m, cycles = report.cycles.len(), "modulus changed");
                self.push_log(format!(
                    "m={m}: {} cycles, Pisano period {}",
                    report.cycles.len(),
                    report.pisano_period
                ));
                self.report = report;
                self.grid_scroll = 0;
                self.error = None;
            }
            Err(err) => self.handle_message(TuiMessage::Error(err.to_string())),
        }
    }

    /// Run the search for the form's query on a background thread.
    pub fn start_solve(&mut self) {
        if self.solving {
            return;
        }
        let query = self.form.query();
        if let Err(err) = query.validate() {
            self.handle_message(TuiMessage::Error(err.to_string()));
            return;
        }

        self.solving = true;
        self.error = None;
        self.result = "Searching...".to_string();
        self.push_log(format!(
            "solving G0={} G1={} n={} over {}..{}",
            query.a, query.b, query.n, query.start, query.limit
        ));

        let tx = self.tx.clone();
        thread::spawn(move || {
            let start = Instant::now();
            let msg = match solve(&query) {
                Ok(solution) => TuiMessage::Solved {
                    solution,
                    duration: start.elapsed(),
                },
                Err(err) => TuiMessage::Error(err.to_string()),
            };
            // The receiver is gone only when the app has exited.
            let _ = tx.send(msg);
        });
    }

    fn finish_solve(&mut self, solution: &Solution, duration: Duration) {
        self.solving = false;
        self.error = None;
        self.result = if solution.is_empty() {
            "No solutions found.".to_string()
        } else {
            let list: Vec<String> = solution.moduli().iter().map(u64::to_string).collect();
            format!("Solutions for m: [{}]", list.join(", "))
        };
        self.push_log(format!(
            "found {} moduli in {:.1} ms",
            solution.len(),
            duration.as_secs_f64() * 1000.0
        ));
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
        }
    }

    fn grid_area(&self) -> Rect {
        let area = Rect::new(0, 0, self.terminal_width, self.terminal_height);
        Self::compute_layout(area).1
    }

    fn page_size(&self) -> isize {
        let rows = self.grid_area().height.saturating_sub(2).max(1);
        isize::from(i16::try_from(rows).unwrap_or(i16::MAX))
    }

    /// Largest grid scroll for the current terminal size.
    #[must_use]
    pub fn max_grid_scroll(&self) -> usize {
        let area = self.grid_area();
        let columns = columns_for_width(area.width.saturating_sub(2), self.modulus());
        let visible = usize::from(area.height.saturating_sub(2));
        max_scroll(&self.report.grid, columns, visible)
    }

    fn scroll_by(&mut self, delta: isize) {
        self.grid_scroll = self
            .grid_scroll
            .saturating_add_signed(delta)
            .min(self.max_grid_scroll());
    }

    /// Split the screen into header, grid, side column and footer.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer[1]);

        (outer[0], main[0], main[1], outer[2])
    }

    /// Stack the cycle table, chart, form and optional logs.
    #[must_use]
    pub fn compute_side_layout(side: Rect, show_logs: bool) -> SideLayout {
        let mut constraints = vec![
            Constraint::Min(4),
            Constraint::Length(8),
            Constraint::Length(6),
        ];
        if show_logs {
            constraints.push(Constraint::Length(6));
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(side);

        SideLayout {
            table: chunks[0],
            chart: chunks[1],
            form: chunks[2],
            logs: chunks.get(3).copied(),
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header, grid, side, footer) = Self::compute_layout(frame.area());
        let side = Self::compute_side_layout(side, self.show_logs);

        render_header(frame, header, &self.report, self.max_modulus);
        render_grid(frame, grid, &self.report.grid, self.grid_scroll);
        render_cycle_table(frame, side.table, &self.report.cycles);
        render_frequencies(frame, side.chart, &self.report.cycles.length_frequencies());
        render_form(
            frame,
            side.form,
            &self.form,
            &self.result,
            self.error.as_deref(),
        );
        if let Some(area) = side.logs {
            render_logs(frame, area, &self.logs);
        }
        render_footer(frame, footer);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_message(TuiMessage::KeyPress(map_key(key)));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            } else {
                self.handle_message(TuiMessage::Tick);
            }

            self.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gibcalc_core::DEFAULT_MAX_MODULUS;
    use ratatui::backend::TestBackend;

    fn make_app(modulus: u64) -> TuiApp {
        TuiApp::new(TuiSettings {
            modulus,
            max_modulus: DEFAULT_MAX_MODULUS,
            query: SolverQuery::default(),
        })
        .unwrap()
    }

    fn wait_for_result(app: &mut TuiApp) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while app.solving && Instant::now() < deadline {
            app.update();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn initial_state() {
        let app = make_app(5);
        assert!(!app.should_quit);
        assert_eq!(app.modulus(), 5);
        assert_eq!(app.grid_scroll, 0);
        assert!(app.show_logs);
        assert!(!app.solving);
    }

    #[test]
    fn rejects_bad_settings() {
        let err = TuiApp::new(TuiSettings {
            modulus: 1,
            max_modulus: DEFAULT_MAX_MODULUS,
            query: SolverQuery::default(),
        });
        assert!(matches!(err, Err(GibError::ModulusOutOfRange { .. })));
    }

    #[test]
    fn modulus_keys_stay_in_bounds() {
        let mut app = make_app(2);
        app.handle_key_action(KeyAction::ModulusDown);
        assert_eq!(app.modulus(), 2);
        app.handle_key_action(KeyAction::ModulusUp);
        assert_eq!(app.modulus(), 3);

        let mut app = make_app(DEFAULT_MAX_MODULUS);
        app.handle_key_action(KeyAction::ModulusUp);
        assert_eq!(app.modulus(), DEFAULT_MAX_MODULUS);
    }

    #[test]
    fn modulus_message_rebuilds_report() {
        let mut app = make_app(2);
        app.sender().send(TuiMessage::ModulusChanged(5)).unwrap();
        app.update();
        assert_eq!(app.modulus(), 5);
        assert_eq!(app.report.pisano_period, 20);
        assert!(app.logs.iter().any(|l| l.starts_with("m=5")));
    }

    #[test]
    fn invalid_modulus_is_logged() {
        let mut app = make_app(4);
        app.handle_message(TuiMessage::ModulusChanged(DEFAULT_MAX_MODULUS + 1));
        assert_eq!(app.modulus(), 4);
        assert!(app.error.as_deref().is_some_and(|e| e.contains("out of range")));
        assert!(app.logs.iter().any(|l| l.starts_with("[ERROR]")));

        app.handle_message(TuiMessage::ModulusChanged(5));
        assert!(app.error.is_none());
    }

    #[test]
    fn form_keys_edit_query() {
        let mut app = make_app(2);
        app.handle_key_action(KeyAction::Increment);
        app.handle_key_action(KeyAction::Increment);
        app.handle_key_action(KeyAction::NextField);
        app.handle_key_action(KeyAction::Decrement);
        let query = app.form.query();
        assert_eq!((query.a, query.b), (2, 0));
    }

    #[test]
    fn solve_runs_in_background() {
        let mut app = make_app(2);
        app.form = SolverForm::new(SolverQuery::new(2, 1, 4).with_range(3, 50));
        app.handle_key_action(KeyAction::Solve);
        assert!(app.solving);
        wait_for_result(&mut app);
        assert!(!app.solving);
        assert_eq!(app.result, "Solutions for m: [5]");
    }

    #[test]
    fn solve_without_results() {
        let mut app = make_app(2);
        app.form = SolverForm::new(SolverQuery::new(1, 2, 1).with_range(3, 50));
        app.start_solve();
        wait_for_result(&mut app);
        assert_eq!(app.result, "No solutions found.");
    }

    #[test]
    fn error_message_stops_solving() {
        let mut app = make_app(2);
        app.solving = true;
        app.handle_message(TuiMessage::Error("boom".to_string()));
        assert!(!app.solving);
        assert_eq!(app.error.as_deref(), Some("boom"));

        app.handle_message(TuiMessage::Error("again".to_string()));
        assert_eq!(app.error.as_deref(), Some("again"));
    }

    #[test]
    fn toggle_logs_and_quit() {
        let mut app = make_app(2);
        app.handle_key_action(KeyAction::ToggleLogs);
        assert!(!app.show_logs);
        app.handle_message(TuiMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn grid_scroll_is_clamped() {
        let mut app = make_app(40);
        app.handle_key_action(KeyAction::ScrollUp);
        assert_eq!(app.grid_scroll, 0);
        app.handle_key_action(KeyAction::End);
        let max = app.max_grid_scroll();
        assert!(max > 0);
        assert_eq!(app.grid_scroll, max);
        app.handle_key_action(KeyAction::PageDown);
        assert_eq!(app.grid_scroll, max);
        app.handle_key_action(KeyAction::Home);
        assert_eq!(app.grid_scroll, 0);
        app.handle_key_action(KeyAction::ScrollDown);
        assert_eq!(app.grid_scroll, 1);
    }

    #[test]
    fn log_cap() {
        let mut app = make_app(2);
        for i in 0..MAX_LOGS + 10 {
            app.handle_message(TuiMessage::Log(format!("msg {i}")));
        }
        assert_eq!(app.logs.len(), MAX_LOGS);
    }

    #[test]
    fn layout_computation() {
        let area = Rect::new(0, 0, 100, 40);
        let (header, grid, side, footer) = TuiApp::compute_layout(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(footer.y + footer.height, area.height);
        assert_eq!(grid.width + side.width, area.width);

        let with_logs = TuiApp::compute_side_layout(side, true);
        assert!(with_logs.logs.is_some());
        let without = TuiApp::compute_side_layout(side, false);
        assert!(without.logs.is_none());
        assert!(without.table.height > with_logs.table.height);
    }

    fn screen_text(app: &TuiApp) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal.draw(|frame| app.render(frame)).unwrap().buffer.clone();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn render_full_view() {
        let app = make_app(7);
        let text = screen_text(&app);
        assert!(text.contains("Modular equation solver"));
        assert!(text.contains("Press Enter to search."));
    }

    #[test]
    fn error_visible_with_logs_hidden() {
        let mut app = make_app(2);
        app.handle_key_action(KeyAction::ToggleLogs);
        app.result = "Solutions for m: [5]".to_string();
        app.handle_message(TuiMessage::Error("boom".to_string()));

        let text = screen_text(&app);
        assert!(text.contains("Error: boom"));
        assert!(!text.contains("Solutions for m: [5]"));
    }

    #[test]
    fn solve_clears_error() {
        let mut app = make_app(2);
        app.handle_message(TuiMessage::Error("boom".to_string()));
        app.form = SolverForm::new(SolverQuery::new(2, 1, 4).with_range(3, 50));
        app.start_solve();
        wait_for_result(&mut app);
        assert!(app.error.is_none());
        app.handle_key_action(KeyAction::ToggleLogs);
        let text = screen_text(&app);
        assert!(text.contains("Solutions for m: [5]"));
        assert!(!text.contains("boom"));
    }
}
