/// TuneLoop Server - music-discovery REST API
use axum::http::{header, HeaderValue, Method};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tuneloop_server::{api, config::ServerConfig, state::AppState};

#[derive(Parser)]
#[command(name = "tuneloop-server")]
#[command(about = "TuneLoop music-discovery API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run database migrations and exit
    Migrate {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run migrations, then load the built-in song catalogue
    Seed {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tuneloop_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Migrate { config } => {
            migrate(config.as_deref()).await?;
        }
        Commands::Seed { config } => {
            seed(config.as_deref()).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting TuneLoop API");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = tuneloop_storage::create_pool(&config.database.url).await?;
    tuneloop_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Build application state and router
    let state = AppState::new(pool);
    let app = api::router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(cors_layer(&config));

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // No configured origins means a local experiment; open everything up
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

async fn migrate(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    let pool = tuneloop_storage::create_pool(&config.database.url).await?;
    tuneloop_storage::run_migrations(&pool).await?;

    tracing::info!("Database migrated");
    Ok(())
}

async fn seed(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    let pool = tuneloop_storage::create_pool(&config.database.url).await?;
    tuneloop_storage::run_migrations(&pool).await?;

    let inserted = tuneloop_storage::songs::seed_catalog(&pool).await?;
    tracing::info!("Seeded {} new songs into the catalogue", inserted);
    Ok(())
}
