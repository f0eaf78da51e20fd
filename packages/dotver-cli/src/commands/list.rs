use clap::Args;
use dotver::{Range, Version};
use dotver_utils::AbstractValue;

use crate::errors::Error;

use super::{Command, Outcome};

#[derive(Args, Debug)]
pub struct ListCommand {
    lower: String,
    upper: String,

    /// Maximum number of versions to print
    #[arg(long, env = "DOTVER_SEQUENCE_LIMIT", default_value_t = 1000)]
    limit: usize,
}

impl Command for ListCommand {
    fn execute(&self) -> Result<Outcome, Error> {
        let range
            = Range::new(&self.lower, &self.upper)?;

        let mut versions: Vec<Version>
            = range.to_sequence().take(self.limit.saturating_add(1)).collect();

        if versions.len() > self.limit {
            log::warn!("Stopped listing {} after {} versions; use --limit to see more", range, self.limit);
            versions.truncate(self.limit);
        }

        Ok(Outcome::success(AbstractValue::new(versions)))
    }
}
