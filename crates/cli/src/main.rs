//! `prep` binary: stdin in, processed document out.

use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use prep::cli::Cli;
use prep::config::Settings;
use prep::error::ExitCode;
use prep::engine::universal_newlines;
use prep::{IoSink, Prep, RhaiEnvironment, logging};

fn main() -> std::process::ExitCode {
    let settings = Settings::from_env();
    logging::init(&settings);

    match run(&settings) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::Failed.into()
        }
    }
}

fn run(settings: &Settings) -> anyhow::Result<ExitCode> {
    if let Err(err) = Cli::try_parse() {
        // Help is only a successful invocation when it is the sole argument.
        if err.kind() == ErrorKind::DisplayHelp && std::env::args_os().len() != 2 {
            eprintln!("{}", Cli::command().render_usage());
            return Ok(ExitCode::Usage);
        }
        err.print()?;
        return Ok(match err.kind() {
            ErrorKind::DisplayHelp => ExitCode::Success,
            _ => ExitCode::Usage,
        });
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let stdout = io::stdout().lock();
    let mut prep = Prep::new(RhaiEnvironment::new(), IoSink::new(BufWriter::new(stdout)));
    prep.set_debug(settings.debug);
    let result = prep.process(&universal_newlines(&input));

    // Output produced before a failure is still delivered.
    let (_, sink) = prep.into_parts();
    sink.into_inner().flush().context("failed to write output")?;
    result?;

    Ok(ExitCode::Success)
}
