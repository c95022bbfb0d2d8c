use anyhow::Context;
use annotation_body::{intake, report, IntakeError};
use annotation_body_core::RequestConfig;
use clap::Parser;
use std::{io::Read, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(
    name = "annotation-body",
    about = "Parse, default and validate an annotation search request body"
)]
struct Cli {
    /// JSON payload to check. Reads stdin when omitted or `-`.
    payload: Option<PathBuf>,

    /// Request configuration file overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/annotation-body-debug.log.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/annotation-body-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("annotation-body debug log started");
    }

    let config = RequestConfig::load(cli.config.as_deref())
        .context("failed to load request configuration")?;
    let payload = read_payload(cli.payload.as_deref())?;

    match intake::process(&payload, &config.defaults) {
        Ok(body) => {
            println!("{}", report::render_body(&body)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(IntakeError::Invalid(err)) => {
            eprintln!("{}", report::render_violations(&err.violations));
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn read_payload(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload {}", path.display())),
        _ => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .context("failed to read payload from stdin")?;
            Ok(payload)
        }
    }
}
