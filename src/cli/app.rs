//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use super::commands;
use projcheck::output::OutputMode;

/// projcheck - Android project structure and lint validator
#[derive(Parser, Debug)]
#[command(
    name = "projcheck",
    version,
    about = "Android project structure and lint validator",
    long_about = "Validate an Android application project without building it.\n\n\
                  Checks that expected files and directories exist, scans Kotlin sources\n\
                  for crude syntax red flags, and checks the build descriptor for\n\
                  required plugins and dependencies."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/.projcheck.toml, then built-in defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every check and exit non-zero if any fails
    Validate {
        #[command(flatten)]
        target: TargetArgs,

        /// Also scan every source file found under the source root
        #[arg(long)]
        discover: bool,
    },

    /// Only check that expected paths exist
    Structure {
        #[command(flatten)]
        target: TargetArgs,

        /// Exit non-zero when any expected path is missing
        #[arg(long)]
        strict: bool,
    },

    /// Write the default configuration to .projcheck.toml
    Init {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Validate { target, discover }) => {
            commands::validate(&target, discover, output_mode)
        },
        Some(Command::Structure { target, strict }) => {
            commands::structure(&target, strict, output_mode)
        },
        Some(Command::Init { root, force }) => commands::init(root.as_deref(), force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("projcheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("projcheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'projcheck --help' for usage");
                println!("Run 'projcheck validate' to check the current project");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
