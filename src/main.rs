// HitMapper - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Optional config.toml loading
// 3. Logging initialisation (stderr only)
// 4. Running the mapper over stdin -> stdout

use clap::Parser;
use hitmapper::app::runner::run_mapper;
use hitmapper::core::filter::IpFilter;
use hitmapper::platform::config::{load_config, MapperConfig};
use hitmapper::util;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

/// HitMapper - MapReduce streaming mapper for access-log hit counting.
///
/// Reads access-log lines on stdin and writes `<ip>\t1` to stdout for every
/// request made by the targeted client address. Pair it with any summing
/// reducer to count hits per address.
#[derive(Parser, Debug)]
#[command(name = "hitmapper", version, about)]
struct Cli {
    /// Optional config file (only the [logging] section is read).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_warnings) = match cli.config.as_deref() {
        Some(path) => match load_config(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => (MapperConfig::default(), Vec::new()),
    };

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::debug!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "HitMapper starting"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_mapper(
        stdin.lock(),
        BufWriter::new(stdout.lock()),
        &IpFilter::default(),
    );

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Mapper aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
