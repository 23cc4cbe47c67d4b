mod config;
mod db;
mod error;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::load();

    let pool = db::init_pool(&config.database_url)
        .await
        .expect("database init failed");

    tokio::spawn(services::session::purge_loop(pool.clone()));

    let port = config.port;
    let state = state::AppState::new(pool, config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "forkline listening");
    axum::serve(listener, app).await.expect("server failed");
}
