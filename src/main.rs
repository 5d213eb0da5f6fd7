use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fcrypto::cli::{handle_config_command, handle_file_command, FileCommands};
use fcrypto::config::{FcryptoPaths, Settings};

#[derive(Parser)]
#[command(
    name = "fcrypto",
    version,
    about = "Password-based encryption for small configuration files",
    long_about = "fcrypto keeps configuration files encrypted at rest. Files are sealed \
                  with a key derived from your password and stored in a text container \
                  that starts with a short banner."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    File(FileCommands),

    /// Show current configuration and paths
    Config {
        /// Remember this file as the default for other commands
        #[arg(long)]
        default_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FcryptoPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    match cli.command {
        Commands::File(cmd) => handle_file_command(&settings, cmd)?,
        Commands::Config { default_file } => {
            handle_config_command(&paths, &mut settings, default_file)?
        }
    }

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
