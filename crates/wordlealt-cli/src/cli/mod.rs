use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;
mod parsers;

#[cfg(test)]
mod tests;

pub use args::{DescribeArgs, GridArgs, OutputFormat, SourceArgs, ThemeArg};

#[derive(Debug, Parser)]
#[command(name = "wordlealt")]
#[command(about = "Alt text and grids for pasted Wordle results", version)]
pub struct Cli {
    /// Optional TOML file with `max_length`, `max_aggression` and `length_unit`.
    /// Only `describe` and `grid` read it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Describe every guess row, compressed to fit the length budget.
    Describe(DescribeArgs),
    /// Re-draw the result grid from the decoded rows.
    Grid(GridArgs),
    /// Show how each transcript line was classified.
    Classify(SourceArgs),
    /// Show the day and score found on the first line.
    Header(SourceArgs),
}

impl Commands {
    pub fn source(&self) -> &SourceArgs {
        match self {
            Self::Describe(args) => &args.source,
            Self::Grid(args) => &args.source,
            Self::Classify(source) | Self::Header(source) => source,
        }
    }

    pub const fn uses_config(&self) -> bool {
        matches!(self, Self::Describe(_) | Self::Grid(_))
    }
}
