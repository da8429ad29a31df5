//! Tests for CLI subcommand parsing.

use clap::Parser;
use disavow_generator::config::{
    Cli, Command, InputsAction, LogFormat, LogLevel, OutputsAction, WhitelistAction,
};
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args.iter()).expect("Should parse command line")
}

#[test]
fn test_cli_process_defaults() {
    let cli = parse(&["disavow_generator", "process"]);

    match cli.command {
        Command::Process { json } => assert!(!json),
        other => panic!("Expected process command, got {:?}", other),
    }
    // LogLevel and LogFormat don't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(cli.log_level.clone()),
        log::LevelFilter::from(LogLevel::Info)
    );
    assert!(matches!(cli.log_format, LogFormat::Plain));
}

#[test]
fn test_cli_global_paths_after_subcommand() {
    let cli = parse(&[
        "disavow_generator",
        "process",
        "--json",
        "--input-dir",
        "/tmp/in",
        "--output-dir",
        "/tmp/out",
        "--whitelist-file",
        "/tmp/wl.txt",
    ]);

    assert!(matches!(cli.command, Command::Process { json: true }));
    let config = cli.to_config();
    assert_eq!(config.input_dir, PathBuf::from("/tmp/in"));
    assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    assert_eq!(config.whitelist_file, PathBuf::from("/tmp/wl.txt"));
}

#[test]
fn test_cli_log_options() {
    let cli = parse(&[
        "disavow_generator",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "stats",
    ]);

    assert!(matches!(cli.command, Command::Stats { json: false }));
    assert_eq!(
        log::LevelFilter::from(cli.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(cli.log_format, LogFormat::Json));
}

#[test]
fn test_cli_whitelist_actions() {
    let cli = parse(&["disavow_generator", "whitelist", "add", "partner.com"]);
    match cli.command {
        Command::Whitelist {
            action: WhitelistAction::Add { domain },
        } => assert_eq!(domain, "partner.com"),
        other => panic!("Expected whitelist add, got {:?}", other),
    }

    let cli = parse(&["disavow_generator", "whitelist", "replace", "list.txt"]);
    match cli.command {
        Command::Whitelist {
            action: WhitelistAction::Replace { file },
        } => assert_eq!(file, PathBuf::from("list.txt")),
        other => panic!("Expected whitelist replace, got {:?}", other),
    }

    let cli = parse(&["disavow_generator", "whitelist", "list"]);
    assert!(matches!(
        cli.command,
        Command::Whitelist {
            action: WhitelistAction::List
        }
    ));
}

#[test]
fn test_cli_file_management_actions() {
    let cli = parse(&["disavow_generator", "inputs", "rm", "links.csv"]);
    match cli.command {
        Command::Inputs {
            action: InputsAction::Rm { name },
        } => assert_eq!(name, "links.csv"),
        other => panic!("Expected inputs rm, got {:?}", other),
    }

    let cli = parse(&[
        "disavow_generator",
        "outputs",
        "show",
        "disavow_0a1b2c3d_20260101_120000.txt",
    ]);
    match cli.command {
        Command::Outputs {
            action: OutputsAction::Show { name },
        } => assert_eq!(name, "disavow_0a1b2c3d_20260101_120000.txt"),
        other => panic!("Expected outputs show, got {:?}", other),
    }
}

#[test]
fn test_cli_rejects_missing_subcommand_and_bad_values() {
    assert!(Cli::try_parse_from(["disavow_generator"]).is_err());
    assert!(Cli::try_parse_from(["disavow_generator", "--log-level", "loud", "process"]).is_err());
    assert!(Cli::try_parse_from(["disavow_generator", "whitelist", "add"]).is_err());
}
