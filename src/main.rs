//! Writes the standard fixture suite.
//!
//! ```text
//! trifixture                          # full-size suite into the current directory
//! trifixture fixtures --verify        # verify ground truth before writing
//! trifixture tmp --shrink 100         # quick, small suite
//! ```

use std::process::ExitCode;

use tracing::error;
use trifixture::suite::{SuiteConfig, USAGE};

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for trifixture.
    // Override with RUST_LOG (e.g. RUST_LOG=trifixture=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("trifixture=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match SuiteConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match config.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "fixture generation failed");
            ExitCode::FAILURE
        }
    }
}
