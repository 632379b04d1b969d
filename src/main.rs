use std::env;

use tracing_subscriber::{fmt, EnvFilter};

/// Log filter, in `EnvFilter` syntax. Defaults to `info`.
const LOG_ENV: &str = "TEAMCOVER_LOG";

fn main() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stdout)
        .init();

    let args: Vec<String> = env::args().collect();
    std::process::exit(teamcover::cli::run_with_args(&args));
}
