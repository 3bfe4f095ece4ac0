use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use article_core::{ArticleStore, CoreConfig, Environment, config::DEFAULT_PORT};

/// Command-line flags for the article API server
///
/// Each flag can also be supplied through its environment variable (or a `.env` file).
#[derive(Parser, Debug)]
#[command(name = "article-api")]
#[command(about = "In-memory article API server", version)]
struct Cli {
    /// API server port
    #[arg(long, env = "ARTICLE_API_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Environment (development|staging|production|test)
    #[arg(long = "env", env = "ARTICLE_API_ENV", default_value = "development")]
    environment: String,
}

/// Main entry point for the article API
///
/// Resolves configuration once, builds the single article store the process owns, and serves
/// the REST API until Ctrl-C.
///
/// # Environment Variables
/// - `ARTICLE_API_PORT`: server port (default: 4000)
/// - `ARTICLE_API_ENV`: operating environment (default: "development")
/// - `RUST_LOG`: log filter (default directive: `article_api=info`)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a flag value is invalid, or
/// - the server fails to bind or while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("article_api=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let environment: Environment = cli.environment.parse()?;
    let cfg = Arc::new(CoreConfig::new(cli.port, environment)?);

    tracing::info!("++ Starting article API ({})", environment);

    let store = Arc::new(ArticleStore::new());
    api_rest::serve(cfg, store).await
}
