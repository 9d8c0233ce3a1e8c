use crate::commands::{run_apply, run_jobs, run_rotation, ApplyArgs, RotationArgs};
use campus_core::config::AppConfig;
use campus_core::error::AppError;
use campus_core::telemetry;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "campus-preview",
    about = "Exercise the site's rotation engine and application wizard against a backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List open positions from the careers feed
    Jobs,
    /// Mount a carousel and print each frame as the timer advances it
    Rotation(RotationArgs),
    /// Walk the application wizard and submit once
    Apply(ApplyArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Jobs => run_jobs(&config).await,
        Command::Rotation(args) => run_rotation(&config, args).await,
        Command::Apply(args) => run_apply(&config, args).await,
    }
}
