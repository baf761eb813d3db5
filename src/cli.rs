use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use xconfig::{
    Config,
    env::{DotenvEnv, SystemEnv},
};

/// The default log level.
///
/// 2 corresponds to the level INFO.
const DEFAULT_LOG_LEVEL: usize = 2;

#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Silence all output
    #[arg(short, long)]
    quiet: bool,
    /// Verbose mode (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// The directory where the search for a .env file starts
    #[arg(short, long, env = "XCONFIG_DIRECTORY")]
    directory: Option<PathBuf>,
    /// Read this .env file instead of searching for one
    ///
    /// Unlike a discovered file, this file has to exist and has to parse.
    #[arg(long)]
    env_file: Option<PathBuf>,
    #[clap(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that all required variables are set
    Check,
    /// Show which variables are set without revealing their values
    Show(ShowArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    pub fn init(module: &str) -> ExitCode {
        let cli = Self::parse();

        let _ = stderrlog::new()
            .module(module)
            .show_level(false)
            .quiet(cli.quiet)
            .verbosity(DEFAULT_LOG_LEVEL + usize::from(cli.verbose))
            .init();

        let result = load(cli.directory.as_deref(), cli.env_file.as_deref())
            .and_then(|config| cli.commands.call(&config));

        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                // When at least one -v is added, the source of the error is also printed.
                if DEFAULT_LOG_LEVEL + usize::from(cli.verbose) >= 3 {
                    log::error!("{err:#}");
                } else {
                    log::error!("{err}");
                }
                ExitCode::FAILURE
            }
        }
    }
}

impl Commands {
    pub fn call(self, config: &Config) -> Result<()> {
        match self {
            Self::Check => check(config),
            Self::Show(args) => show(config, &args),
        }
    }
}

/// Load the configuration.
///
/// Without `--env-file` or `--directory` this is exactly what the library does on its own.
fn load(directory: Option<&Path>, env_file: Option<&Path>) -> Result<Config> {
    let env = match (env_file, directory) {
        (Some(path), _) => DotenvEnv::from_file(path, SystemEnv)?,
        (None, Some(directory)) => DotenvEnv::discover(directory, SystemEnv),
        (None, None) => return Ok(Config::load()),
    };

    if let Some(path) = env.path() {
        log::debug!("Using {}", path.display());
    }

    Ok(Config::from_env(&env))
}

fn check(config: &Config) -> Result<()> {
    config.validate()?;
    log::info!("Configuration is valid");
    Ok(())
}

fn show(config: &Config, args: &ShowArgs) -> Result<()> {
    let status = config.status();
    if args.json {
        let json =
            serde_json::to_string_pretty(&status).context("Failed to serialize status report")?;
        println!("{json}");
    } else {
        print!("{status}");
    }
    Ok(())
}
