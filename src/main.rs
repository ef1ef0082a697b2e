use tracing_subscriber::EnvFilter;

use veranda::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::session_layer();
    let db = startup::connect_to_database(&config).await.unwrap();

    tracing::info!("Starting server");

    let app = router::routes().with_state(AppState { db }).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .unwrap();

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await.unwrap();
}
