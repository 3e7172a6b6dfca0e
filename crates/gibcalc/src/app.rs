//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};

use gibcalc_cli::output::write_to_file;
use gibcalc_cli::{CliPresenter, JsonPresenter, Presenter};
use gibcalc_core::report::ModulusReport;
use gibcalc_core::solver::solve;
use gibcalc_tui::{TuiApp, TuiSettings};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        gibcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;

    if config.tui {
        return run_tui(config);
    }

    run_cli(config)
}

/// Select the presenter for the configured output mode.
fn presenter(config: &AppConfig) -> Box<dyn Presenter> {
    if config.json {
        Box::new(JsonPresenter::new(!config.no_grid))
    } else {
        let presenter =
            CliPresenter::new(config.verbose, config.quiet, !config.no_grid, config.columns);
        if config.output.is_some() {
            Box::new(presenter.with_color(false))
        } else {
            Box::new(presenter)
        }
    }
}

/// Render the requested report to a string.
pub fn render(config: &AppConfig) -> Result<String> {
    let presenter = presenter(config);

    if config.solve {
        let query = config.query();
        let start = Instant::now();
        let solution = solve(&query)?;
        let elapsed = start.elapsed();
        tracing::info!(
            a = query.a,
            b = query.b,
            n = query.n,
            solutions = solution.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "solver finished"
        );
        return Ok(presenter.render_solution(&solution, elapsed));
    }

    let start = Instant::now();
    let report = ModulusReport::build(config.modulus, config.max_modulus)?;
    tracing::info!(
        modulus = config.modulus,
        cycles = report.cycles.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "modulus report built"
    );
    Ok(presenter.render_modulus(&report))
}

/// Report a failed run on stderr in the configured output mode.
pub fn present_error(config: &AppConfig, err: &anyhow::Error) {
    presenter(config).present_error(&format!("{err:#}"));
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let text = render(config)?;

    match &config.output {
        Some(path) => {
            write_to_file(path, &text).with_context(|| format!("writing {path}"))?;
            tracing::info!(path = %path, bytes = text.len(), "output written");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = TuiApp::new(TuiSettings {
        modulus: config.modulus,
        max_modulus: config.max_modulus,
        query: config.query(),
    })?;
    app.run().context("terminal UI failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("gibcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn render_quiet_report() {
        let text = render(&config(&["-m", "2", "-q"])).unwrap();
        assert_eq!(text, "1\t(0)\n3\t(0, 1, 1)\n");
    }

    #[test]
    fn render_quiet_solution() {
        let text = render(&config(&["--solve", "-q"])).unwrap();
        assert_eq!(text, "[3, 4, 6, 8, 9, 12, 16, 18, 24, 36, 48, 72, 144]\n");
    }

    #[test]
    fn render_json_report() {
        let text = render(&config(&["-m", "5", "--json", "--no-grid"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["pisano_period"], 20);
        assert!(value.get("cells").is_none());
    }

    #[test]
    fn render_solution_keeps_raw_seeds() {
        let text = render(&config(&["--solve", "-q", "-a", "5", "-b", "0", "-n", "1"])).unwrap();
        assert_eq!(text, "[]\n");
        let text = render(&config(&[
            "--solve", "-q", "-a", "5", "-b", "0", "-n", "1", "--reduce-seeds",
        ]))
        .unwrap();
        assert_eq!(text, "[5]\n");
    }

    #[test]
    fn run_rejects_bad_modulus() {
        let err = run(&config(&["-m", "1"])).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 4);
    }

    #[test]
    fn run_writes_output_file() {
        let dir = std::env::temp_dir().join(format!("gibcalc-app-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.txt");
        let path_str = path.to_str().unwrap();
        run(&config(&["-m", "3", "-o", path_str])).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Pisano period: 8"));
        assert!(!text.contains('\u{1b}'));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
