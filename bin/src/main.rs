//! deskshift CLI - Helpdesk migration timeline and risk estimator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use deskshift_lib::DeskshiftConfig;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod display;

use commands::estimate::EstimateArgs;

#[derive(Parser)]
#[command(name = "deskshift")]
#[command(about = "Helpdesk migration timeline and risk estimator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file path. Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported helpdesk platforms
    Platforms {
        /// Search pattern (id or name)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show plans, limits, and capabilities of a platform
    Info {
        /// Platform identifier (e.g., zendesk, freshdesk)
        platform: String,
    },

    /// Show which entities can move between two platforms
    Compare {
        /// Source platform identifier
        source: String,

        /// Destination platform identifier
        destination: String,
    },

    /// Estimate a migration timeline
    Estimate(EstimateArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for managing the configuration file.
#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,
}

/// Maps the verbosity flags to a default filter directive.
const fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, quiet)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config_path = cli.config.unwrap_or_else(DeskshiftConfig::default_path);

    match command {
        Commands::Platforms { search } => {
            let (_, catalog) = display::load_context(&config_path)?;
            commands::platforms::list_platforms(&catalog, search.as_deref())
        }
        Commands::Info { platform } => {
            let (_, catalog) = display::load_context(&config_path)?;
            commands::info::show_info(&catalog, &platform)
        }
        Commands::Compare {
            source,
            destination,
        } => {
            let (_, catalog) = display::load_context(&config_path)?;
            commands::compare::compare(&catalog, &source, &destination)
        }
        Commands::Estimate(args) => {
            let (config, catalog) = display::load_context(&config_path)?;
            commands::estimate::estimate(&catalog, &config, &args)
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
            ConfigAction::Show => commands::config::show(&config_path),
            ConfigAction::Path => commands::config::path(&config_path),
        },
    }
}
