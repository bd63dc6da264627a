use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{audit_log, auth, guild, moderation, tag, ticket},
    error::config::ConfigError,
    state::AppState,
};

/// OpenAPI document served by Swagger UI at `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Lisbeth", description = "Moderation API of the Lisbeth Discord bot"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        guild::get_guild,
        moderation::get_mutes,
        moderation::create_mute,
        moderation::delete_mute,
        moderation::get_bans,
        moderation::create_ban,
        moderation::delete_ban,
        moderation::create_prune,
        ticket::get_tickets,
        tag::get_tags,
        audit_log::get_audit_log,
    ),
    tags(
        (name = "auth", description = "Discord OAuth2 login"),
        (name = "guild", description = "Guild settings"),
        (name = "moderation", description = "Mutes, bans and prunes"),
        (name = "ticket", description = "Support tickets"),
        (name = "tag", description = "Canned responses"),
        (name = "audit-log", description = "Moderation history"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/guilds/{guild_id}", get(guild::get_guild))
        .route(
            "/api/guilds/{guild_id}/mutes",
            get(moderation::get_mutes).post(moderation::create_mute),
        )
        .route(
            "/api/guilds/{guild_id}/mutes/{user_id}",
            delete(moderation::delete_mute),
        )
        .route(
            "/api/guilds/{guild_id}/bans",
            get(moderation::get_bans).post(moderation::create_ban),
        )
        .route(
            "/api/guilds/{guild_id}/bans/{user_id}",
            delete(moderation::delete_ban),
        )
        .route(
            "/api/guilds/{guild_id}/prunes",
            post(moderation::create_prune),
        )
        .route("/api/guilds/{guild_id}/tickets", get(ticket::get_tickets))
        .route("/api/guilds/{guild_id}/tags", get(tag::get_tags))
        .route(
            "/api/guilds/{guild_id}/audit-log",
            get(audit_log::get_audit_log),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

/// Lets a dashboard served from `origin` call the API with its session cookie.
///
/// Without this layer browsers only allow same-origin requests.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing exactly `origin`, with credentials
/// - `Err(ConfigError::InvalidUrl)` - `origin` is a wildcard or not a valid header value
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidUrl {
        name: "CORS_ORIGIN".to_string(),
        reason: reason.to_string(),
    };
    if origin.trim() == "*" {
        return Err(invalid("wildcard origins cannot carry session cookies"));
    }
    let origin = HeaderValue::from_str(origin.trim()).map_err(|e| invalid(&e.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_allows_single_configured_origin() {
        assert!(cors_layer("https://dashboard.example.com").is_ok());
        assert!(matches!(
            cors_layer("*"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            cors_layer("https://dash\nboard"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    /// Expected: Every routed endpoint is documented
    #[test]
    fn openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/api/auth/login",
            "/api/auth/user",
            "/api/guilds/{guild_id}",
            "/api/guilds/{guild_id}/mutes",
            "/api/guilds/{guild_id}/mutes/{user_id}",
            "/api/guilds/{guild_id}/bans/{user_id}",
            "/api/guilds/{guild_id}/prunes",
            "/api/guilds/{guild_id}/audit-log",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == path),
                "{} missing from OpenAPI document",
                path
            );
        }
    }
}
