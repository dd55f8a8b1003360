use anyhow::Context;
use care_cli::{command, execute, logging, CliConfig};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let matches = command().get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CliConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CliConfig::default(),
    };
    logging::init(&config);

    let output = execute(&matches, &config)?;
    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("writing output")?;
    Ok(())
}
