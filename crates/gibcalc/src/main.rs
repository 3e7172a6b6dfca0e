//! GibCalc-rs: Gibonacci period explorer.

use gibcalc_lib::{app, config, errors};

fn main() {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        app::present_error(&config, &err);
        std::process::exit(errors::exit_code(&err));
    }
}
