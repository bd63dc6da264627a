use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::OAuth2Client,
};

/// Service for the Discord OAuth2 login flow.
///
/// Only identifies the user. Guild permissions are checked per request through the bot,
/// so no user data is stored.
pub struct AuthService<'a> {
    /// HTTP client for Discord API requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - The authorization URL and the CSRF state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Exchanges the authorization code and fetches the Discord user it belongs to.
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - The authenticated user
    /// - `Err(AuthError::TokenExchange)` - Discord rejected the code
    /// - `Err(AppError::ReqwestErr)` - Fetching the user failed
    pub async fn callback(&self, authorization_code: String) -> Result<DiscordUser, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user = self.fetch_discord_user(&token).await?;

        tracing::info!("User {} ({}) logged in", user.name, user.id);

        Ok(user)
    }

    /// Fetches the Discord user a token was issued to.
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }
}
