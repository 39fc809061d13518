use std::time::Duration;

use crate::server::{
    bot::command::CommandRegistry, config::Config, error::AppError,
    service::discord::DiscordRestService,
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client for outbound REST calls.
///
/// Redirects are not followed so requests cannot be bounced to other hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Overwrites the global command list with the registry's definitions.
///
/// Failure is logged and startup continues with whatever Discord already has.
pub async fn register_commands(
    http_client: &reqwest::Client,
    config: &Config,
    registry: &CommandRegistry,
) {
    let rest = DiscordRestService::new(http_client, config);

    match rest
        .bulk_overwrite_global_commands(&registry.definitions())
        .await
    {
        Some(registered) => tracing::info!("Registered {} global commands", registered.len()),
        None => tracing::error!("Failed to register {} global commands", registry.len()),
    }
}

/// Resolves on Ctrl+C so in-flight requests can finish.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
