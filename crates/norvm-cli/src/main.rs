#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use norvm_cli::{Engine, Report};

#[derive(Debug, Parser)]
#[command(
    name = "norvm",
    about = "Generate or check a login serial with native and gate-level arithmetic"
)]
struct Args {
    /// Login string the serial is derived from.
    login: String,

    /// Serial to check (8 uppercase hex digits). Generated from the login when omitted.
    #[arg(long)]
    serial: Option<String>,

    /// Which implementation runs the check: `native`, `gated` or `both`.
    #[arg(long, default_value = "both")]
    engine: Engine,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<bool> {
    let report = Report::run(&args.login, args.serial.as_deref(), args.engine)
        .with_context(|| format!("failed to check serial for login {:?}", args.login))?;
    tracing::info!(
        login = %report.login,
        serial = %report.serial,
        engine = %report.engine,
        passed = report.passed(),
        "serial checked"
    );

    if args.json {
        let out = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{out}");
    } else {
        let label = if report.generated { "generated" } else { "given" };
        println!("serial ({label}): {}", report.serial);
        if let Some(ok) = report.native {
            println!("native: {ok}");
        }
        if let Some(ok) = report.gated {
            println!("gated: {ok}");
        }
    }
    Ok(report.passed())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
