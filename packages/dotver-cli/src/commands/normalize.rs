use clap::Args;
use dotver::Version;
use dotver_utils::{AbstractValue, FromFileString};

use crate::errors::Error;

use super::{Command, Outcome};

#[derive(Args, Debug)]
pub struct NormalizeCommand {
    version: String,
}

impl Command for NormalizeCommand {
    fn execute(&self) -> Result<Outcome, Error> {
        let version
            = Version::from_file_string(&self.version)?;

        Ok(Outcome::success(AbstractValue::new(version)))
    }
}
