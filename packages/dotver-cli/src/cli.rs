use clap::{Parser, Subcommand};

use crate::commands::{
    compare::CompareCommand,
    components::ComponentsCommand,
    includes::IncludesCommand,
    list::ListCommand,
    normalize::NormalizeCommand,
};

#[derive(Parser, Debug)]
#[command(name = "dotver", version)]
#[command(about = "Inspect dotted versions and version ranges", long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical form of a version
    Normalize(NormalizeCommand),
    /// Print the components of a version
    Components(ComponentsCommand),
    /// Compare two versions, printing -1, 0 or 1
    Compare(CompareCommand),
    /// Check whether a version lies within [LOWER, UPPER)
    Includes(IncludesCommand),
    /// List the patch releases within [LOWER, UPPER)
    List(ListCommand),
}
