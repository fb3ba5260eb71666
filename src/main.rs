// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use cloc_lines::{app, args::Args, config::RunConfig};
use cloc_lines_infra::measurement::classifier::TRACE_TARGET;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    let result = RunConfig::try_from(args).map_err(anyhow::Error::from).and_then(app::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// 既定は warn。`--debug` でトレースターゲットを debug に上げる（RUST_LOG が優先）。
fn init_logging(debug: bool) {
    let default_filter = if debug { format!("warn,{TRACE_TARGET}=debug") } else { "warn".to_string() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
