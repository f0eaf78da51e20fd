use clap::Args;
use dotver::Range;
use dotver_utils::AbstractValue;

use crate::errors::Error;

use super::{Command, Outcome};

/// Exits with a failure status when the version is outside of the range.
#[derive(Args, Debug)]
pub struct IncludesCommand {
    lower: String,
    upper: String,
    version: String,
}

impl Command for IncludesCommand {
    fn execute(&self) -> Result<Outcome, Error> {
        let range
            = Range::new(&self.lower, &self.upper)?;

        let included
            = range.includes(&self.version)?;

        Ok(Outcome {
            value: AbstractValue::new(included),
            success: included,
        })
    }
}
