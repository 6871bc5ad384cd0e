//! # Google OAuth 2.0 identity provider
//!
//! Authorization Code flow against Google's OpenID endpoints.
//!
//! 1. [`begin_handshake`](IdentityProvider::begin_handshake) builds the
//!    authorization URL for the requested scopes.
//! 2. [`complete_handshake`](IdentityProvider::complete_handshake) exchanges
//!    the callback `code` for an access token, then fetches the OpenID
//!    userinfo document and maps it to a [`ProviderProfile`].

use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::provider::{CallbackParams, HandshakeError, IdentityProvider, ProviderProfile};
use crate::domain::value_object::provider_name::ProviderName;
use crate::error::{AuthError, AuthResult};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Google client registration
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Absolute URL of `/auth/google/callback` as registered with Google
    pub callback_url: String,
}

/// Google userinfo document (OpenID Connect standard claims).
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    sub: String,
    name: Option<String>,
    email: Option<String>,
    picture: Option<String>,
}

impl GoogleUserInfo {
    fn into_profile(self, raw: Value) -> ProviderProfile {
        let display_name = self
            .name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_default();

        ProviderProfile {
            external_id: self.sub,
            display_name,
            emails: self.email.into_iter().collect(),
            photos: self.picture.into_iter().collect(),
            raw,
        }
    }
}

/// Google identity provider adapter
#[derive(Clone)]
pub struct GoogleIdentityProvider {
    client: ConfiguredClient,
    http: reqwest::Client,
}

impl GoogleIdentityProvider {
    pub fn new(config: GoogleConfig) -> AuthResult<Self> {
        let auth_url = AuthUrl::new(GOOGLE_AUTH_URL.to_string())
            .map_err(|e| AuthError::Internal(format!("Invalid auth URL: {e}")))?;
        let token_url = TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
            .map_err(|e| AuthError::Internal(format!("Invalid token URL: {e}")))?;
        let redirect_url = RedirectUrl::new(config.callback_url)
            .map_err(|e| AuthError::Internal(format!("Invalid callback URL: {e}")))?;

        let client = BasicClient::new(ClientId::new(config.client_id))
            .set_client_secret(ClientSecret::new(config.client_secret))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url);

        // The token endpoint must not be allowed to redirect (SSRF)
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AuthError::Internal(format!("HTTP client: {e}")))?;

        Ok(Self { client, http })
    }

    async fn fetch_userinfo(&self, access_token: &str) -> Result<Value, HandshakeError> {
        let response = self
            .http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| HandshakeError::ProviderRejected(format!("userinfo request: {e}")))?
            .error_for_status()
            .map_err(|e| HandshakeError::ProviderRejected(format!("userinfo status: {e}")))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| HandshakeError::Malformed(format!("userinfo body: {e}")))
    }
}

impl IdentityProvider for GoogleIdentityProvider {
    fn name(&self) -> ProviderName {
        ProviderName::Google
    }

    fn begin_handshake(&self, scopes: &[String]) -> AuthResult<String> {
        // `state` is required by the protocol; it is not checked on return
        let (auth_url, _state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(scopes.iter().cloned().map(Scope::new))
            .url();

        Ok(auth_url.to_string())
    }

    async fn complete_handshake(
        &self,
        params: &CallbackParams,
    ) -> Result<ProviderProfile, HandshakeError> {
        let code = params.authorization_code()?;

        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| HandshakeError::ProviderRejected(format!("token exchange: {e}")))?;

        let raw = self.fetch_userinfo(token.access_token().secret()).await?;

        let info: GoogleUserInfo = serde_json::from_value(raw.clone())
            .map_err(|e| HandshakeError::Malformed(format!("userinfo fields: {e}")))?;

        Ok(info.into_profile(raw))
    }
}
