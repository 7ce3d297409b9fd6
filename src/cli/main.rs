//! Command-line interface entry point for `shotlog`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use shotlog::config::Config;
use shotlog::info;
use shotlog::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            // Persist edits against the file as written, not this run's overrides
            let mut stored = Config::load();
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Record(record) => commands::record::run(&record, &config),
        Command::List {
            mode,
            club,
            limit,
            all,
            oldest_first,
        } => {
            let limit = if all { None } else { Some(limit) };
            commands::list::run(mode, club, limit, oldest_first, &config);
        }
        Command::Stats { json } => commands::stats::run(json, &config),
        Command::Report {
            format,
            output,
            title,
        } => commands::report::run(&format, output.as_deref(), &title, &config),
        Command::Export { format, output } => {
            commands::export::run(&format, output.as_deref(), &config);
        }
        Command::Import { file } => commands::import::run(&file, &config),
        Command::Glossary { field } => commands::glossary::run(field.as_deref()),
    }
}
