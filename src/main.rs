//! CLI entry point for tmux-keys
//!
//! Provides command-line interface for printing generated bind commands,
//! applying them to a running tmux server, and checking a config.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tmux_keys::{
    config::{Config, DEFAULT_CONFIG_PATH},
    generate,
    tmux::{ExecMode, TmuxExecutor},
    BindCommand,
};

#[derive(Parser)]
#[command(name = "tmux-keys")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tmux commands for every binding
    Generate {
        /// Path to key table config file
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Set keybindings on the running tmux server
    Bind {
        /// Path to key table config file
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Show what would be run without running it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Validate a config without printing or applying it
    Check {
        /// Path to key table config file
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Generate { config } => print_commands(&config)?,
        Commands::Bind { config, dry_run } => bind_keys(&config, dry_run)?,
        Commands::Check { config } => check_config(&config)?,
    }

    Ok(())
}

/// Load a config and generate its bind commands
fn load_commands(config_path: &Path) -> anyhow::Result<(Config, Vec<BindCommand>)> {
    let config = Config::load(config_path)
        .with_context(|| format!("could not load config {}", config_path.display()))?;

    let commands = generate(config.tables()).context("could not generate keybinds")?;

    Ok((config, commands))
}

/// Print each generated command on its own line
fn print_commands(config_path: &Path) -> anyhow::Result<()> {
    let (_, commands) = load_commands(config_path)?;

    for command in commands {
        println!("{}", command);
    }

    Ok(())
}

/// Run each generated command against tmux
fn bind_keys(config_path: &Path, dry_run: bool) -> anyhow::Result<()> {
    let (_, commands) = load_commands(config_path)?;

    let mode = if dry_run { ExecMode::DryRun } else { ExecMode::Live };
    let executor = TmuxExecutor::new(mode);

    if dry_run {
        for command in &commands {
            println!("{} {}", "→".cyan(), command);
        }
    }

    let report = executor.apply(&commands);

    for failure in &report.failures {
        eprintln!(
            "{} error while executing command: {} ({})",
            "✗".red().bold(),
            failure.command,
            failure.error.to_string().dimmed()
        );
    }

    if report.is_success() {
        println!(
            "{} {} {} binding command{}",
            "✓".green().bold(),
            if dry_run { "Checked" } else { "Applied" },
            report.applied,
            if report.applied == 1 { "" } else { "s" }
        );
    } else {
        eprintln!(
            "{} {} of {} commands failed",
            "⚠".yellow(),
            report.failures.len(),
            report.attempted()
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Validate a config and summarise what it would bind
fn check_config(config_path: &Path) -> anyhow::Result<()> {
    println!("{} Checking config: {}", "→".cyan(), config_path.display());

    let (config, commands) = load_commands(config_path)?;

    println!(
        "{} {} table{}, {} binding{}, {} bind command{}",
        "✓".green().bold(),
        config.tables().len(),
        if config.tables().len() == 1 { "" } else { "s" },
        config.binding_count(),
        if config.binding_count() == 1 { "" } else { "s" },
        commands.len(),
        if commands.len() == 1 { "" } else { "s" }
    );

    for table in config.tables() {
        println!("  {} {}", table.name.magenta(), format!("({})", table.bindings.len()).dimmed());
    }

    Ok(())
}
