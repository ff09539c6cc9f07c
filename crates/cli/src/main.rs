use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use movie_api::{ApiResponse, Config, MovieLookupHandler, MovieRequest};
use movie_store::{InMemoryMovieStore, MovieStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// movie-lookup - run the get-movie-by-id handler locally
#[derive(Parser)]
#[command(name = "movie-lookup")]
#[command(about = "Look up movies the same way the Lambda handler does", long_about = None)]
struct Cli {
    /// Serve lookups from a JSON fixture file instead of DynamoDB
    #[arg(short, long)]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a movie by id
    Get {
        /// Movie id, passed through as the raw path parameter
        movie_id: String,

        /// Attach cast records
        #[arg(long)]
        cast: bool,
    },

    /// Replay a raw API Gateway event through the handler
    Invoke {
        /// Path to the event JSON
        #[arg(long)]
        event: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let store = build_store(cli.fixtures.as_deref()).await?;
    let handler = MovieLookupHandler::new(store);

    let request = match cli.command {
        Commands::Get { movie_id, cast } => {
            let request = MovieRequest::new(movie_id);
            if cast { request.with_cast("true") } else { request }
        }
        Commands::Invoke { event } => read_event(&event)?,
    };

    let start = Instant::now();
    let response = handler.handle(&request).await;
    info!("Handled request in {:?}", start.elapsed());

    print_response(&response)
}

/// Pick the store: a fixture file when given, DynamoDB from the environment otherwise
async fn build_store(fixtures: Option<&Path>) -> Result<Arc<dyn MovieStore>> {
    match fixtures {
        Some(path) => {
            let store = InMemoryMovieStore::load_from_file(path)
                .with_context(|| format!("Failed to load fixtures from {}", path.display()))?;
            let (movies, cast) = store.counts();
            eprintln!(
                "{} Loaded {} movies and {} cast records from {}",
                "✓".green(),
                movies,
                cast,
                path.display()
            );
            Ok(Arc::new(store))
        }
        None => {
            let config = Config::from_env().context("DynamoDB mode needs TABLE_NAME")?;
            eprintln!(
                "{} Using DynamoDB table {} (cast: {})",
                "✓".green(),
                config.table_name,
                config.cast_table_name
            );
            Ok(Arc::new(config.build_store().await))
        }
    }
}

/// Read an API Gateway event file and extract the request descriptor
fn read_event(path: &Path) -> Result<MovieRequest> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event {}", path.display()))?;
    let event = lambda_http::request::from_str(&contents)
        .with_context(|| format!("{} is not an API Gateway event", path.display()))?;
    Ok(MovieRequest::from_lambda(&event))
}

/// Status goes to stderr so stdout carries only the JSON body
fn print_response(response: &ApiResponse) -> Result<()> {
    let status = response.status.to_string();
    let status = match response.status {
        200..=299 => status.green(),
        400..=499 => status.yellow(),
        _ => status.red(),
    };
    eprintln!("{} {}", "Status:".bold(), status.bold());
    println!("{}", render_body(response)?);
    Ok(())
}

fn render_body(response: &ApiResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_rendered_body_is_plain_json() {
        let rendered = render_body(&ApiResponse::missing_movie_id()).unwrap();

        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, json!({"Message": "Missing movie Id"}));
    }

    #[test]
    fn test_read_event_extracts_request() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../movie-api/tests/data/apigw_v2_get_movie.json");

        let request = read_event(&path).unwrap();
        assert_eq!(request.movie_id.as_deref(), Some("7"));
        assert!(request.wants_cast());
    }

    #[test]
    fn test_read_event_missing_file() {
        let err = read_event(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read event"));
    }
}
