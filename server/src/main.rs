mod config;
mod graphql;
mod http;
mod persistence;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use persistence::sqlite::{Database, Repositories};

/// GraphQL service for sample packets and sampling records.
#[derive(Parser)]
#[command(name = "sachet-server", about = "GraphQL CRUD service for sachets and echantionnages")]
struct Cli {
    /// Address to listen on. Overrides `SACHET_BIND`.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// SQLite database file. Overrides `SACHET_DATABASE_PATH`.
    #[arg(long)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the GraphQL schema (SDL) and exit.
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Schema) = cli.command {
        print!("{}", graphql::schema_sdl());
        return Ok(());
    }

    // Initialize tracing with span durations
    use tracing_subscriber::fmt::format::FmtSpan;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!("Starting sachet GraphQL server");

    let database_path = cli.database.unwrap_or_else(config::get_database_path);
    tracing::info!("Using database: {}", database_path.display());
    let db = Database::open(&database_path).await?;

    let schema = graphql::build_schema(Repositories::new(&db));
    let app = http::router(schema);

    let addr = cli.bind.unwrap_or_else(config::get_bind_addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("GraphQL endpoint at http://{}{}", addr, http::GRAPHQL_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.pool().close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
