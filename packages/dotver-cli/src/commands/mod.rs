use std::process::ExitCode;

use dotver_utils::AbstractValue;

use crate::{cli::{Cli, Commands}, errors::Error};

pub mod compare;
pub mod components;
pub mod includes;
pub mod list;
pub mod normalize;

/// What a command reports back: the value to print, and whether the process
/// should exit successfully.
pub struct Outcome {
    pub value: AbstractValue<'static>,
    pub success: bool,
}

impl Outcome {
    pub fn success(value: AbstractValue<'static>) -> Self {
        Outcome {
            value,
            success: true,
        }
    }
}

pub trait Command {
    fn execute(&self) -> Result<Outcome, Error>;
}

pub fn run(cli: &Cli) -> Result<ExitCode, Error> {
    let command: &dyn Command = match &cli.command {
        Commands::Normalize(command) => command,
        Commands::Components(command) => command,
        Commands::Compare(command) => command,
        Commands::Includes(command) => command,
        Commands::List(command) => command,
    };

    let Outcome {value, success}
        = command.execute()?;

    println!("{}", value.export(cli.json)?);

    Ok(match success {
        true => ExitCode::SUCCESS,
        false => ExitCode::FAILURE,
    })
}
