mod model;
mod server;

use crate::server::{
    bot, config::Config, error::AppError, router, scheduler, startup, state::AppState,
    util::queue::TaskQueue,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sea_orm=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let task_queue = TaskQueue::new();

    tracing::info!("Starting server");

    let (bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), task_queue.clone()).await?;

    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    scheduler::start_scheduler(db.clone(), discord_http.clone(), task_queue.clone()).await?;

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            discord_http,
            task_queue,
        ))
        .layer(session);
    let app = match &config.cors_origin {
        Some(origin) => app.layer(router::cors_layer(origin)?),
        None => app,
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("API listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
