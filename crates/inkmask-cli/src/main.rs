//! Replay a recorded pointer trace and write the resulting mask PNG.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Inkmask headless trace replay.
///
/// Replays a recorded pointer trace against the mask engine and writes the
/// resulting binary black/white mask PNG — no GUI required.
#[derive(Parser, Debug)]
#[command(name = "inkmask", about = "Replay a pointer trace into a mask PNG")]
struct CliArgs {
    /// Recorded pointer trace (JSON).
    #[arg(value_name = "TRACE.json")]
    trace: PathBuf,

    /// Path the mask PNG is written to.
    #[arg(value_name = "MASK.png")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    log::info!("replaying {}", args.trace.display());

    match inkmask_cli::replay_file(&args.trace, &args.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("replay failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
