//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `disavow_generator` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger and workspace initialization
//! - User-facing output formatting

use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use disavow_generator::app::{
    print_input_files, print_output_files, print_process_json, print_process_report,
    print_workspace_stats,
};
use disavow_generator::config::{Cli, Command, InputsAction, OutputsAction, WhitelistAction};
use disavow_generator::initialization::{init_logger_with, init_workspace};
use disavow_generator::{
    add_to_whitelist, delete_input_file, delete_output_file, list_input_files, list_output_files,
    load_whitelist, read_output_file, remove_from_whitelist, save_whitelist, workspace_stats,
    Config, DisavowEngine,
};

fn main() {
    // Directory settings may live in a .env file next to the working directory
    // or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.to_config();

    if let Err(e) = run(cli.command, &config) {
        eprintln!("disavow_generator error: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Command, config: &Config) -> Result<()> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    init_workspace(config).context("Failed to prepare data directories")?;

    match command {
        Command::Process { json } => {
            let result = DisavowEngine::new(config).process();
            if json {
                print_process_json(&result)?;
                if result.is_err() {
                    process::exit(1);
                }
                return Ok(());
            }
            let report = result?;
            print_process_report(&report);
        }
        Command::Stats { json } => {
            print_workspace_stats(&workspace_stats(config), json)?;
        }
        Command::Whitelist { action } => run_whitelist(action, config)?,
        Command::Inputs { action } => match action {
            InputsAction::List => print_input_files(&list_input_files(&config.input_dir)?),
            InputsAction::Rm { name } => {
                delete_input_file(&config.input_dir, &name)?;
                println!("Deleted {name}");
            }
        },
        Command::Outputs { action } => match action {
            OutputsAction::List => print_output_files(&list_output_files(&config.output_dir)?),
            OutputsAction::Show { name } => {
                print!("{}", read_output_file(&config.output_dir, &name)?);
            }
            OutputsAction::Rm { name } => {
                delete_output_file(&config.output_dir, &name)?;
                println!("Deleted {name}");
            }
        },
    }

    Ok(())
}

fn run_whitelist(action: WhitelistAction, config: &Config) -> Result<()> {
    let path = &config.whitelist_file;
    match action {
        WhitelistAction::List => {
            for entry in load_whitelist(path) {
                println!("{entry}");
            }
        }
        WhitelistAction::Add { domain } => {
            if add_to_whitelist(path, &domain)? {
                println!("Added {domain}");
            } else {
                println!("{domain} is already whitelisted or not a valid entry");
            }
        }
        WhitelistAction::Remove { domain } => {
            if remove_from_whitelist(path, &domain)? {
                println!("Removed {domain}");
            } else {
                println!("{domain} is not whitelisted");
            }
        }
        WhitelistAction::Replace { file } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let saved = save_whitelist(path, content.lines())?;
            println!("Whitelist now holds {} entries", saved.len());
        }
    }
    Ok(())
}
