use crate::auth::application::domain::entities::OAuthIdentity;
use crate::auth::application::ports::outgoing::{OAuthProvider, OAuthProviderError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const ACCESS_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const USER_URL: &str = "https://api.github.com/user";
const USER_AGENT: &str = concat!("portfolio-api/", env!("CARGO_PKG_VERSION"));

/// GitHub OAuth adapter: authorization-code exchange plus a `/user` lookup
/// to learn the authenticated login.
#[derive(Debug, Clone)]
pub struct GitHubOAuthProvider {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_url: String,
}

#[derive(Serialize)]
struct AccessTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    redirect_uri: &'a str,
}

#[derive(Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
    error_description: Option<String>,
}

#[derive(Deserialize)]
struct GitHubUser {
    login: String,
}

impl GitHubOAuthProvider {
    pub fn new(client_id: String, client_secret: String, redirect_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            client_secret,
            redirect_url,
        }
    }
}

#[async_trait]
impl OAuthProvider for GitHubOAuthProvider {
    fn authorize_url(&self, state: &str) -> String {
        let url = reqwest::Url::parse_with_params(
            AUTHORIZE_URL,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("scope", "read:user"),
                ("state", state),
            ],
        )
        .unwrap_or_else(|_| reqwest::Url::parse(AUTHORIZE_URL).unwrap());
        url.to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<OAuthIdentity, OAuthProviderError> {
        let token_response: AccessTokenResponse = self
            .http
            .post(ACCESS_TOKEN_URL)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&AccessTokenRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                code,
                redirect_uri: &self.redirect_url,
            })
            .send()
            .await
            .map_err(|err| OAuthProviderError::ExchangeFailed(err.to_string()))?
            .json()
            .await
            .map_err(|err| OAuthProviderError::ExchangeFailed(err.to_string()))?;

        let access_token = token_response.access_token.ok_or_else(|| {
            OAuthProviderError::ExchangeFailed(
                token_response
                    .error_description
                    .unwrap_or_else(|| "provider returned no access token".to_string()),
            )
        })?;

        let user: GitHubUser = self
            .http
            .get(USER_URL)
            .bearer_auth(&access_token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|err| OAuthProviderError::IdentityLookupFailed(err.to_string()))?
            .json()
            .await
            .map_err(|err| OAuthProviderError::IdentityLookupFailed(err.to_string()))?;

        Ok(OAuthIdentity {
            username: user.login,
        })
    }
}
