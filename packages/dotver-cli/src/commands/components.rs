use clap::Args;
use dotver::Version;
use dotver_utils::{AbstractValue, FromFileString};

use crate::errors::Error;

use super::{Command, Outcome};

#[derive(Args, Debug)]
pub struct ComponentsCommand {
    version: String,

    /// Truncate or zero-pad the components to this length
    #[arg(long)]
    len: Option<usize>,
}

impl Command for ComponentsCommand {
    fn execute(&self) -> Result<Outcome, Error> {
        let version
            = Version::from_file_string(&self.version)?;

        let components = match self.len {
            Some(len) => version.resized_components(len),
            None => version.components(),
        };

        Ok(Outcome::success(AbstractValue::new(components)))
    }
}
