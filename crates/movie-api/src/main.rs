//! Lambda entrypoint for `GET /movies/{movieId}`.
//!
//! Configuration is read and the DynamoDB client is built once, at cold
//! start. Every invocation then borrows the same handler.

use lambda_http::{Error, Request, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_api::{Config, MovieLookupHandler, handle_request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch adds its own timestamps and does not render colours
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .without_time()
        .init();

    let config = Config::from_env()?;
    info!(
        table = %config.table_name,
        cast_table = %config.cast_table_name,
        "Starting get-movie-by-id"
    );

    let handler = MovieLookupHandler::new(config.build_store().await);

    run(service_fn(|event: Request| handle_request(&handler, event))).await
}
