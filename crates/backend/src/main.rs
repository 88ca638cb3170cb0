pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    let log_file = shared::logging::initialize()?;
    tracing::info!("Writing logs to {}", log_file.display());

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config);
    let db = shared::data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    if config.database.seed && shared::data::seed::seed_master_data(&db, &config).await? {
        tracing::info!("Seeded master data for user '{}'", config.auth.username);
    }

    let port = config.server.port;
    let state = shared::state::AppState::new(db, config);

    // Multipart posts come from the dashboard on another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state.clone())
        .layer(middleware::from_fn_with_state(
            state,
            shared::request_logger::request_logger,
        ))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Dashboard API listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
