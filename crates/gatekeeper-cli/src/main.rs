#![forbid(unsafe_code)]

use std::process::ExitCode;

use gatekeeper_cli::{GateConfig, ScanArgs, execute, logging, output};

fn main() -> ExitCode {
    logging::init_from_env();

    let verdict = execute(&ScanArgs::from_env(), GateConfig::from_env);
    if let Err(err) = output::write_verdict(&mut std::io::stdout().lock(), &verdict) {
        tracing::error!(%err, "failed to write verdict");
        return ExitCode::FAILURE;
    }

    if verdict.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
