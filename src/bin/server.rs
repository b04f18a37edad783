use clap::Parser;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::net::SocketAddr;
use tracing::{error, info};

use todo_web::db::schema::ensure_schema;
use todo_web::server::config::ServerConfig;
use todo_web::server::logging::init_logging;
use todo_web::version::VERSION;
use todo_web::web::{create_axum_router, views::load_templates};

#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C.");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, draining connections.");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let server_config = ServerConfig::load(args.config.as_deref())?;
    let _log_guard = init_logging(&server_config.log_dir);
    info!("Starting todo-web, version: {}", VERSION);

    // --- Database Setup ---
    let mut opt = ConnectOptions::new(server_config.database_url.clone());
    opt.max_connections(server_config.max_connections)
        .sqlx_logging(false);

    let db_pool: DatabaseConnection = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Failed to connect to the database.");
        e
    })?;
    ensure_schema(&db_pool).await?;

    // --- HTTP Server Setup ---
    let templates = load_templates()?;
    let app = create_axum_router(db_pool, templates);

    let addr: SocketAddr = server_config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "HTTP server listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}
