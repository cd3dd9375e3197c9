use clap::{Parser, Subcommand};

use crate::utils::error::Result;
use crate::utils::validation::{validate_min_count, validate_non_empty_string, Validate};

#[derive(Debug, Parser)]
#[command(name = "small-katas")]
#[command(about = "Solvers for small standalone coding katas")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print the result as JSON")]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find two positions in a number sequence whose values sum to a target.
    PairSum {
        #[arg(long, value_delimiter = ',')]
        nums: Vec<i64>,

        #[arg(long)]
        target: i64,
    },

    /// Compare two dot-separated version strings numerically.
    CompareVersions { v1: String, v2: String },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::PairSum { nums, .. } => validate_min_count("nums", nums, 2),
            Command::CompareVersions { v1, v2 } => {
                validate_non_empty_string("v1", v1)?;
                validate_non_empty_string("v2", v2)
            }
        }
    }
}
