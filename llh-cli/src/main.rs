mod args;
mod error;
mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use llh_core::llh_to_ecef;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::{Args, Invocation};
use error::Result;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let program = args::program_name(std::env::args_os().next().as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run(&args, &program, &mut out);
    ExitCode::from(exit_status(result, &mut io::stderr().lock()))
}

/// Report a failed run on `err_out` and pick the process exit status
fn exit_status<E: Write>(result: Result<()>, err_out: &mut E) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            // Nothing left to report to if stderr itself is gone.
            let _ = writeln!(err_out, "error: {err}");
            1
        }
    }
}

fn run<W: Write>(args: &Args, program: &str, out: &mut W) -> Result<()> {
    let llh = match args.invocation()? {
        Invocation::Usage => {
            debug!(count = args.values.len(), "wrong argument count");
            writeln!(out, "{}", args::usage(program))?;
            return Ok(());
        }
        Invocation::Convert(llh) => llh,
    };

    debug!(?llh, "parsed input");
    let ecef = llh_to_ecef(&llh);
    debug!(?ecef, "computed ecef");

    if args.json {
        report::write_json(out, &ecef)
    } else {
        report::write_text(out, &ecef)
    }
}
