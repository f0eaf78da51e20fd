use clap::Args;
use dotver::IntoVersion;
use dotver_utils::AbstractValue;

use crate::errors::Error;

use super::{Command, Outcome};

#[derive(Args, Debug)]
pub struct CompareCommand {
    left: String,
    right: String,
}

impl Command for CompareCommand {
    fn execute(&self) -> Result<Outcome, Error> {
        let left
            = self.left.as_str().into_version()?;
        let right
            = self.right.as_str().into_version()?;

        let ordering
            = left.cmp(&right) as i8;

        Ok(Outcome::success(AbstractValue::new(ordering)))
    }
}
