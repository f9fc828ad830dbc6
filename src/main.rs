use std::{
    io::{stdin, stdout},
    process::ExitCode,
};

use clap::Parser;
use sum_numbers::{cli::Cli, Collector, Error};

fn main() -> anyhow::Result<ExitCode> {
    let mut builder = env_logger::Builder::from_env("SUM_NUMBERS_LOG");
    builder.format_timestamp(None);
    builder.init();

    let cli = Cli::parse();
    let mut collector = Collector::new(stdin().lock(), stdout().lock(), cli.settings());

    match collector.run() {
        Ok(summary) => {
            log::debug!("summed {} numbers", summary.count);
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::Io(err)) => Err(err.into()),
        Err(err) => {
            match &err {
                Error::CountUnavailable => eprintln!("Failed to read number, exiting..."),
                other => eprintln!("error: {other}"),
            }
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
