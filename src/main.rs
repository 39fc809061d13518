use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use quickvids::server::{
    bot::commands, config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let registry = commands::registry();

    if config.register_commands {
        startup::register_commands(&http_client, &config, &registry).await;
    }

    tracing::info!("Starting server");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router::router(&config.rate_limit)?.with_state(AppState::new(
        db,
        http_client,
        config,
        registry,
    ));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening for requests at {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await?;

    Ok(())
}
