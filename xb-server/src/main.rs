use xb_auth::{GoogleIdentityProvider, IdentityProvider, SessionManager, StaticIdentityProvider};
use xb_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = xb_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = xb_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting xb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/xb-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Session signing secret: configured, or ephemeral for this process
    let secret: Vec<u8> = match config.session.secret {
        Some(ref secret) => secret.as_bytes().to_vec(),
        None => {
            warn!("No session secret configured; using an ephemeral secret (sessions reset on restart)");
            rand::random::<[u8; 32]>().to_vec()
        }
    };
    let sessions = Arc::new(SessionManager::with_hs256(&secret, config.session.ttl_secs));

    // Identity provider selection is configuration, not a code path bypass
    let identity: Arc<dyn IdentityProvider> = if config.identity.is_google() {
        info!("Identity provider: google");
        let client_id = config.identity.google_client_id.clone();
        match config.identity.tokeninfo_url {
            Some(ref url) => Arc::new(GoogleIdentityProvider::with_endpoint(
                url.clone(),
                client_id,
            )),
            None => Arc::new(GoogleIdentityProvider::new(client_id)),
        }
    } else {
        warn!("Identity provider: static - development mode, do not expose publicly");
        Arc::new(StaticIdentityProvider::default())
    };

    // Build application state
    let app_state = AppState {
        pool,
        sessions,
        identity,
        admin_token: config.server.admin_token.clone(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
