//! Application configuration from CLI flags and environment.

use clap::Parser;

use gibcalc_core::constants::{
    DEFAULT_GRID_COLUMNS, DEFAULT_INDEX, DEFAULT_MAX_MODULUS, DEFAULT_MODULUS,
    DEFAULT_SEARCH_LIMIT, DEFAULT_SEARCH_START, DEFAULT_SEED_A, DEFAULT_SEED_B,
    HARD_MAX_MODULUS, MIN_MODULUS,
};
use gibcalc_core::error::{check_modulus, GibError};
use gibcalc_core::solver::SolverQuery;

/// GibCalc-rs: Gibonacci period explorer.
///
/// Shows every state pair mod m colored by the sequence it belongs to,
/// the canonical cycles with their lengths, and searches for moduli in
/// which a Gibonacci sequence repeats after n steps.
#[derive(Parser, Debug, Clone)]
#[command(name = "gibcalc", version, about)]
pub struct AppConfig {
    /// Modulus to explore.
    #[arg(short, long, default_value_t = DEFAULT_MODULUS, env = "GIBCALC_MODULUS")]
    pub modulus: u64,

    /// Largest modulus accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_MODULUS)]
    pub max_modulus: u64,

    /// Cells per grid row.
    #[arg(long, default_value_t = DEFAULT_GRID_COLUMNS)]
    pub columns: usize,

    /// Skip the colored state grid.
    #[arg(long)]
    pub no_grid: bool,

    /// Run the modular equation solver instead of the modulus report.
    #[arg(long)]
    pub solve: bool,

    /// Seed G0 for the solver.
    #[arg(short = 'a', long = "g0", default_value_t = DEFAULT_SEED_A)]
    pub a: u64,

    /// Seed G1 for the solver.
    #[arg(short = 'b', long = "g1", default_value_t = DEFAULT_SEED_B)]
    pub b: u64,

    /// Step count n after which the seed pair must recur.
    #[arg(short = 'n', long = "index", default_value_t = DEFAULT_INDEX)]
    pub n: u64,

    /// First modulus searched.
    #[arg(long, default_value_t = DEFAULT_SEARCH_START)]
    pub search_start: u64,

    /// End of the searched moduli (exclusive).
    #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub search_limit: u64,

    /// Reduce the seeds mod m before comparing, so moduli at or below the
    /// seeds can solve the query.
    #[arg(long)]
    pub reduce_seeds: bool,

    /// Emit JSON instead of text.
    #[arg(long, conflicts_with = "tui")]
    pub json: bool,

    /// Quiet mode (only the essential values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Launch the interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Solver query built from the seed, index and range flags.
    #[must_use]
    pub fn query(&self) -> SolverQuery {
        SolverQuery::new(self.a, self.b, self.n)
            .with_range(self.search_start, self.search_limit)
            .with_reduced_seeds(self.reduce_seeds)
    }

    /// Reject out-of-range values before any work starts.
    pub fn validate(&self) -> Result<(), GibError> {
        if self.max_modulus < MIN_MODULUS || self.max_modulus > HARD_MAX_MODULUS {
            return Err(GibError::Config(format!(
                "--max-modulus must be in [{MIN_MODULUS}, {HARD_MAX_MODULUS}], got {}",
                self.max_modulus
            )));
        }
        if self.columns == 0 {
            return Err(GibError::Config("--columns must be at least 1".into()));
        }
        if self.quiet && self.verbose {
            return Err(GibError::Config(
                "--quiet and --verbose are mutually exclusive".into(),
            ));
        }
        check_modulus(self.modulus, MIN_MODULUS, self.max_modulus)?;
        self.query().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("gibcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.max_modulus, 100);
        assert_eq!(config.columns, 15);
        assert_eq!((config.a, config.b, config.n), (0, 1, 24));
        assert_eq!((config.search_start, config.search_limit), (3, 3000));
        assert!(!config.solve && !config.json && !config.tui);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn solver_flags() {
        let config = parse(&["--solve", "-a", "2", "-b", "1", "-n", "4", "--search-limit", "50"]);
        let query = config.query();
        assert_eq!((query.a, query.b, query.n), (2, 1, 4));
        assert_eq!((query.start, query.limit), (3, 50));
        assert!(!query.reduce_seeds);
        assert!(parse(&["--reduce-seeds"]).query().reduce_seeds);
    }

    #[test]
    fn long_seed_flags() {
        let config = parse(&["--g0", "3", "--g1", "4", "--index", "8"]);
        assert_eq!((config.a, config.b, config.n), (3, 4, 8));
    }

    #[test]
    fn modulus_out_of_range() {
        assert!(matches!(
            parse(&["-m", "1"]).validate(),
            Err(GibError::ModulusOutOfRange { .. })
        ));
        assert!(parse(&["-m", "101"]).validate().is_err());
        assert!(parse(&["-m", "101", "--max-modulus", "200"]).validate().is_ok());
    }

    #[test]
    fn max_modulus_is_capped() {
        let err = parse(&["--max-modulus", "5000"]).validate();
        assert!(matches!(err, Err(GibError::Config(_))));
    }

    #[test]
    fn rejects_zero_columns() {
        assert!(parse(&["--columns", "0"]).validate().is_err());
    }

    #[test]
    fn rejects_quiet_and_verbose() {
        assert!(parse(&["-q", "-v"]).validate().is_err());
    }

    #[test]
    fn rejects_bad_query() {
        assert!(parse(&["-n", "0"]).validate().is_err());
        assert!(parse(&["-a", "31"]).validate().is_err());
    }

    #[test]
    fn json_conflicts_with_tui() {
        let result =
            AppConfig::try_parse_from(["gibcalc", "--json", "--tui"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_is_well_formed() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
