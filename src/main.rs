use actix_web::{web, App, HttpServer};
use chrono::Duration;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use job_board::auth::jwt::TokenIssuer;
use job_board::shutdown::ShutdownCoordinator;
use job_board::{api, config, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration from environment
    let config::Config {
        database_url,
        host,
        port,
        jwt_secret,
        token_ttl_days,
        max_payload_size,
        max_db_connections,
        log_dir,
    } = config::Config::from_env().expect("Failed to load configuration");

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&log_dir).expect("Failed to create logs directory");

    // File-based logging with daily rotation and level separation,
    // plus console output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(&log_dir, "info.log");
    let error_file = tracing_appender::rolling::daily(&log_dir, "error.log");

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(error_layer)
        .init();

    // Database pool + schema
    let pool = db::connection::get_connection(&database_url, max_db_connections)
        .await
        .expect("Failed to connect to database");

    db::migrations::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let issuer = TokenIssuer::new(&jwt_secret, Duration::days(token_ttl_days));

    info!("Starting job-board application");
    info!("  - Max payload size: {} bytes", max_payload_size);
    info!("  - Max database connections: {}", max_db_connections);
    info!("  - Token lifetime: {} days", token_ttl_days);

    let server_pool = pool.clone();
    let server = HttpServer::new(move || {
        let payload_config = web::PayloadConfig::default().limit(max_payload_size);

        App::new()
            .app_data(payload_config)
            .configure(api::app_config(server_pool.clone(), issuer.clone()))
    });

    info!("Server starting on http://{}:{}", host, port);

    let server = server.bind((host.as_str(), port))?.run();

    // Run the server in the background so the coordinator can react to
    // shutdown signals
    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task, pool)
        .wait_for_shutdown()
        .await
}
