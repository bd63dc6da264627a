//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every Axum handler. It holds the
//! database pool, the HTTP and OAuth2 clients for the login flow, the bot's Discord HTTP
//! client, and the task queue shared with the bot so bulk Discord operations started from the
//! API never overlap with those started from slash commands.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::server::util::queue::TaskQueue;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: the database pool, reqwest client and `Arc`s share their
/// inner state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for the OAuth2 token exchange and Discord user lookups.
    ///
    /// Redirects are disabled to prevent SSRF.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord login flow.
    pub oauth_client: OAuth2Client,

    /// Discord HTTP client owned by the bot.
    ///
    /// Used for permission checks and for moderation actions started through the API.
    pub discord_http: Arc<Http>,

    /// Single-slot queue for bulk Discord operations.
    pub task_queue: TaskQueue,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        task_queue: TaskQueue,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_http,
            task_queue,
        }
    }
}
