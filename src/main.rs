//! odometry-sim - drive the differential-drive odometry engine from the
//! command line.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

use diffdrive_odometry::api::{format_key_help, format_replay, format_snapshot};
use diffdrive_odometry::control::{Command, CommandOutcome, Session};
use diffdrive_odometry::processing::{parse_tick_log, replay};
use diffdrive_odometry::utils::SimulatorConfig;
use diffdrive_odometry::OutputFormat;

/// Differential-drive odometry simulator
#[derive(Parser, Debug)]
#[command(name = "odometry-sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format: text, json or csv
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply a sequence of key commands (W S A D Q E P R)
    Drive {
        /// Keys to apply in order, e.g. "WWWAQE"
        keys: String,
    },

    /// Replay a recorded tick log
    Replay {
        /// Tick log file
        file: PathBuf,
    },

    /// List the command key bindings
    Keys,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write the default configuration to a file
    Init {
        path: PathBuf,
    },
    /// Print the effective configuration
    Show,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Drive { keys } => run_drive(&config, &keys, cli.format),
        Commands::Replay { file } => run_replay(&config, &file, cli.format),
        Commands::Keys => {
            print!("{}", format_key_help());
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { path } => {
                SimulatorConfig::default()
                    .save_to_file(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                info!("Wrote default configuration to {}", path.display());
                Ok(())
            }
            ConfigAction::Show => {
                println!("{}", config.to_json()?);
                Ok(())
            }
        },
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SimulatorConfig> {
    match path {
        Some(path) => Ok(SimulatorConfig::from_file(path)?),
        None => Ok(SimulatorConfig::default()),
    }
}

fn run_drive(config: &SimulatorConfig, keys: &str, format: OutputFormat) -> anyhow::Result<()> {
    let commands = keys
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|key| Command::from_key(key).with_context(|| format!("unknown command key '{}'", key)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if commands.is_empty() {
        bail!("no commands given");
    }

    let mut session = Session::from_config(config)?;
    for command in commands {
        if let CommandOutcome::Blocked(rejection) = session.dispatch(command) {
            info!("{} ({}) blocked: {}", command, command.key(), rejection);
        }
    }

    print!("{}", format_snapshot(&session.snapshot(), format)?);
    Ok(())
}

fn run_replay(config: &SimulatorConfig, file: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let entries = parse_tick_log(&text).with_context(|| format!("parsing {}", file.display()))?;

    let mut session = Session::from_config(config)?;
    let report = replay(&mut session, &entries);

    print!("{}", format_replay(&report, &session.snapshot(), format)?);
    Ok(())
}
