use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations. Must complete before anything touches the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application's SQLite pool.
///
/// Creates the session table if needed. Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Creates the reqwest client used for OAuth2.
///
/// Redirects are disabled to prevent SSRF during the token exchange.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the Discord OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(AppError::ConfigErr(InvalidUrl))` - One of the URLs failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str| {
        let name = name.to_string();
        move |e: url::ParseError| ConfigError::InvalidUrl {
            name,
            reason: e.to_string(),
        }
    };

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone()).map_err(invalid("discord_auth_url"))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone())
                .map_err(invalid("discord_token_url"))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(invalid("DISCORD_REDIRECT_URL"))?,
        );

    Ok(client)
}
