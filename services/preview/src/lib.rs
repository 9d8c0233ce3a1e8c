mod cli;
mod commands;
mod infra;

use campus_core::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
