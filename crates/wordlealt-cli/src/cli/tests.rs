use super::*;
use clap::Parser;

#[test]
fn describe_defaults_to_text_format_without_overrides() {
    let cli = Cli::try_parse_from(["wordlealt", "describe", "--stdin"]).expect("parse");
    match cli.command {
        Commands::Describe(DescribeArgs {
            source,
            format,
            max_length,
            max_aggression,
        }) => {
            assert!(source.stdin);
            assert_eq!(format, OutputFormat::Text);
            assert_eq!(max_length, None);
            assert_eq!(max_aggression, None);
        }
        _ => panic!("expected describe command"),
    }
}

#[test]
fn describe_parses_format_and_budget_overrides() {
    let cli = Cli::try_parse_from([
        "wordlealt",
        "describe",
        "--content",
        "Wordle 900 3/6*",
        "--format",
        "json",
        "--max-length",
        "280",
        "--max-aggression",
        "8",
    ])
    .expect("parse");
    match cli.command {
        Commands::Describe(args) => {
            assert_eq!(args.source.content.as_deref(), Some("Wordle 900 3/6*"));
            assert_eq!(args.format, OutputFormat::Json);
            assert_eq!(args.max_length, Some(280));
            assert_eq!(args.max_aggression, Some(8));
        }
        _ => panic!("expected describe command"),
    }
}

#[test]
fn describe_rejects_zero_max_length() {
    let parsed = Cli::try_parse_from(["wordlealt", "describe", "--stdin", "--max-length", "0"]);
    assert!(parsed.is_err(), "zero budget must be rejected");
}

#[test]
fn grid_parses_theme_and_contrast() {
    let cli = Cli::try_parse_from([
        "wordlealt",
        "grid",
        "--from",
        "result.txt",
        "--theme",
        "light",
        "--high-contrast",
    ])
    .expect("parse");
    match cli.command {
        Commands::Grid(GridArgs {
            source,
            theme,
            high_contrast,
        }) => {
            assert_eq!(source.from, Some(PathBuf::from("result.txt")));
            assert_eq!(theme, ThemeArg::Light);
            assert!(high_contrast);
        }
        _ => panic!("expected grid command"),
    }
}

#[test]
fn config_flag_is_accepted_after_subcommand() {
    let cli = Cli::try_parse_from([
        "wordlealt",
        "header",
        "--stdin",
        "--config",
        "wordlealt.toml",
    ])
    .expect("parse");
    assert_eq!(cli.config, Some(PathBuf::from("wordlealt.toml")));
    assert!(matches!(cli.command, Commands::Header(_)));
}

#[test]
fn content_accepts_leading_hyphen_text() {
    let cli =
        Cli::try_parse_from(["wordlealt", "classify", "--content", "-3 today"]).expect("parse");
    assert_eq!(cli.command.source().content.as_deref(), Some("-3 today"));
}
