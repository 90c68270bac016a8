//! Sextant pipeline planner CLI.
//!
//! Prints the execution plan and the positioned graph of a plugin catalog
//! as JSON.
//!
//! # Usage
//!
//! ```bash
//! sextant-plan <catalog.json> [layout.json]
//! ```
//!
//! # Example
//!
//! ```bash
//! SEXTANT_LOG=sextant_graph=debug sextant-plan ./catalog.json
//! ```

use std::process::ExitCode;

use example::run;
use sextant_core::TracingSetup;

#[expect(
    clippy::print_stderr,
    reason = "CLI errors go to stderr regardless of the log filter"
)]
fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let setup = TracingSetup::from_env().unwrap_or_else(|e| {
        eprintln!("Warning: {e}");
        TracingSetup::default()
    });
    setup.init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "planning failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
