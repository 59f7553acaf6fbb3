mod cli;
mod infra;
mod report;
mod routes;
mod server;

use life_direction::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
