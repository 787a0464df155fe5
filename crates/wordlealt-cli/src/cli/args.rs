use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::parsers::parse_min_one_usize;

/// Exactly one of these must be given.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Transcript text passed inline.
    #[arg(long, allow_hyphen_values = true)]
    pub content: Option<String>,
    /// Read the transcript from a file.
    #[arg(long)]
    pub from: Option<PathBuf>,
    /// Read the transcript from standard input.
    #[arg(long, default_value_t = false)]
    pub stdin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

#[derive(Debug, Args)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Override the length budget for this run.
    #[arg(long, value_parser = parse_min_one_usize)]
    pub max_length: Option<usize>,
    #[arg(long)]
    pub max_aggression: Option<u8>,
}

#[derive(Debug, Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    pub theme: ThemeArg,
    /// Use the orange/blue palette instead of green/yellow.
    #[arg(long, default_value_t = false)]
    pub high_contrast: bool,
}
