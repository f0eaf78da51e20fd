use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod errors;

/// Exit status for invalid input, kept apart from a negative answer (1).
const ERROR_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    log::debug!("Running {:?}", cli.command);

    match commands::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
