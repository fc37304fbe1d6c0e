use sbu_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    let target = logging::init_logging();
    tracing::debug!(?target, "logging ready");

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("sbu error: {:#}", err);
            std::process::exit(1);
        }
    }
}
