use std::path::PathBuf;

use clap::Parser;
use logcheck::check::{check_file, status_for_error};
use logcheck::{Clock, Status};

#[derive(Parser)]
#[command(name = "logcheck", about = "Sensu-compatible log freshness and severity check")]
struct Cli {
    /// Path to the log file to inspect.
    logfile: Option<PathBuf>,

    /// Write debug traces to stderr. Stdout stays reserved for the
    /// status line the monitoring system parses.
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    // A missing path is a WARNING for the monitoring system, not a usage
    // error, so the positional stays optional and clap never exits for us.
    let Some(path) = cli.logfile else {
        report(Status::warning("No PATH argument provided"));
    };

    let clock = Clock::system();
    let status = match check_file(&path, &clock) {
        Ok(status) => status,
        Err(err) => status_for_error(&err),
    };
    report(status);
}

/// Print the status line and terminate with its severity's exit code.
fn report(status: Status) -> ! {
    println!("{status}");
    std::process::exit(status.severity.exit_code());
}
