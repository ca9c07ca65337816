//! comm-info-validate - command-line host for the communication info validator.
//!
//! Usage:
//!
//! ```text
//! comm-info-validate [PATH|-]   validate a JSON document (stdin when omitted)
//! comm-info-validate --schema   print the JSON Schema of the normalized output
//! ```
//!
//! The normalized payload is written to stdout. Logs and errors go to stderr.

use anyhow::{Context, Result};
use comm_info_validator::input::read_payload;
use comm_info_validator::{validate_communication_info, CommunicationInfo, Config};
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let config = Config::from_env()?;

    // Logging goes to stderr so stdout carries only the JSON output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?config, "Configuration loaded");

    let arg = std::env::args().nth(1);

    if arg.as_deref() == Some("--schema") {
        let schema = schemars::schema_for!(CommunicationInfo);
        write_json(&schema, true)?;
        return Ok(ExitCode::SUCCESS);
    }

    let payload = match arg.as_deref() {
        None | Some("-") => read_payload(io::stdin().lock(), config.max_input_bytes)
            .context("Failed to load payload from stdin")?,
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            read_payload(file, config.max_input_bytes)
                .with_context(|| format!("Failed to load payload from {}", path))?
        }
    };

    match validate_communication_info(&payload) {
        Ok(info) => {
            write_json(&info, config.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            info!("Invalid communication info: {}", e);
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn write_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}
