use std::path::Path;

use anyhow::{Result, anyhow};
use tracing::debug;
use wordlealt_core::classify::split_lines;
use wordlealt_core::{
    AltTextConfig, BlankStyle, GlyphTheme, build_alt_text, classify_transcript, extract_header,
    render_grid,
};

use crate::cli::{Commands, DescribeArgs, OutputFormat, ThemeArg};

mod support;

use self::support::{print_text, read_source, to_pretty_json, validate_source_selection};

pub(crate) fn run(config_path: Option<&Path>, command: Commands) -> Result<()> {
    validate_command_preflight(&command)?;
    let config = resolve_config(config_path, &command)?;
    let input = read_source(command.source())?;
    let output = render_command(&config, &command, &input)?;
    print_text(&output)
}

fn validate_command_preflight(command: &Commands) -> Result<()> {
    validate_source_selection(command.source())
}

fn resolve_config(config_path: Option<&Path>, command: &Commands) -> Result<AltTextConfig> {
    if !command.uses_config() {
        return Ok(AltTextConfig::default());
    }
    let mut config = AltTextConfig::load(config_path)
        .map_err(|err| anyhow!("failed to load config [{}]: {err}", err.code()))?;
    if let Commands::Describe(args) = command {
        apply_describe_overrides(&mut config, args);
    }
    debug!(?config, "resolved alt text config");
    Ok(config)
}

fn apply_describe_overrides(config: &mut AltTextConfig, args: &DescribeArgs) {
    if let Some(max_length) = args.max_length {
        config.max_length = max_length;
    }
    if let Some(max_aggression) = args.max_aggression {
        config.max_aggression = max_aggression;
    }
}

const fn glyph_theme(theme: ThemeArg, high_contrast: bool) -> GlyphTheme {
    GlyphTheme {
        blank: match theme {
            ThemeArg::Dark => BlankStyle::Dark,
            ThemeArg::Light => BlankStyle::Light,
        },
        high_contrast,
    }
}

fn render_command(config: &AltTextConfig, command: &Commands, input: &str) -> Result<String> {
    match command {
        Commands::Describe(args) => {
            let report = build_alt_text(input, config);
            match args.format {
                OutputFormat::Text => Ok(report.description),
                OutputFormat::Json => Ok(report.to_json_pretty()?),
            }
        }
        Commands::Grid(args) => {
            let report = build_alt_text(input, config);
            let theme = glyph_theme(args.theme, args.high_contrast);
            Ok(render_grid(&report.header, &report.rows, theme))
        }
        Commands::Classify(_) => to_pretty_json(&classify_transcript(input)),
        Commands::Header(_) => {
            let first_line = split_lines(input).next().unwrap_or_default();
            to_pretty_json(&extract_header(first_line))
        }
    }
}
