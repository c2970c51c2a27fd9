use chrono::{Duration, Utc};
use oauth2::basic::BasicClient;
use oauth2::url::Url;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, RedirectUrl, Scope,
    TokenResponse, TokenUrl,
};

use crate::auth::Credential;
use crate::config::Config;
use crate::error::Error;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// The single scope needed to manage video comments.
pub const YOUTUBE_SCOPE: &str = "https://www.googleapis.com/auth/youtube.force-ssl";

/// The code exchange gets the same explicit timeout as the content API;
/// without one a stalled token endpoint would pin the callback forever.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Wraps the OAuth2 authorization-code flow against Google. Carries no
/// credential state of its own: exchanged credentials go to the session
/// store and are passed explicitly to outbound calls.
pub struct IdentityClient {
    inner: BasicClient,
    scopes: Vec<String>,
    http: reqwest::Client,
}

impl IdentityClient {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoints(config, GOOGLE_AUTH_URL, GOOGLE_TOKEN_URL)
    }

    /// Builds a client against explicit endpoints. Tests use this to point
    /// the exchange at a mock server.
    pub fn with_endpoints(config: &Config, auth_url: &str, token_url: &str) -> Self {
        let auth_url = AuthUrl::new(auth_url.to_string())
            .expect("Invalid authorization endpoint URL");
        let token_url =
            TokenUrl::new(token_url.to_string()).expect("Invalid token endpoint URL");

        let inner = BasicClient::new(
            ClientId::new(config.client_id.clone()),
            Some(ClientSecret::new(config.client_secret.clone())),
            auth_url,
            Some(token_url),
        )
        .set_redirect_uri(
            RedirectUrl::new(config.redirect_uri.clone()).expect("Invalid redirect URL"),
        );

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Unable to construct the HTTP client!");

        IdentityClient {
            inner,
            scopes: vec![YOUTUBE_SCOPE.to_string()],
            http,
        }
    }

    /// The consent URL the browser is redirected to. Requests offline
    /// access so the provider includes a refresh token in the exchange.
    pub fn authorize_url(&self) -> Url {
        let mut authorization_request = self
            .inner
            .authorize_url(CsrfToken::new_random)
            .add_extra_param("access_type", "offline");

        for scope in self.scopes.as_slice() {
            authorization_request = authorization_request.add_scope(Scope::new(scope.to_string()));
        }

        let (authorize_url, _csrf_token) = authorization_request.url();
        authorize_url
    }

    /// Exchanges an authorization code for a credential. One round-trip to
    /// the provider over the timeout-bounded transport; no retry.
    pub async fn exchange_code(&self, code: &str) -> Result<Credential, Error> {
        let response = self
            .inner
            .exchange_code(AuthorizationCode::new(code.to_owned()))
            .request_async(|request| self.send(request))
            .await?;

        let expires_at = response
            .expires_in()
            .and_then(|ttl| Duration::from_std(ttl).ok())
            .map(|ttl| Utc::now() + ttl);

        Ok(Credential {
            access_token: response.access_token().secret().clone(),
            refresh_token: response.refresh_token().map(|token| token.secret().clone()),
            expires_at,
        })
    }

    /// Transport for the oauth2 crate backed by the client's own
    /// timeout-configured `reqwest::Client`.
    async fn send(
        &self,
        request: oauth2::HttpRequest,
    ) -> Result<oauth2::HttpResponse, oauth2::reqwest::Error<reqwest::Error>> {
        let mut request_builder = self
            .http
            .request(request.method, request.url.as_str())
            .body(request.body);
        for (name, value) in &request.headers {
            request_builder = request_builder.header(name.as_str(), value.as_bytes());
        }
        let request = request_builder
            .build()
            .map_err(oauth2::reqwest::Error::Reqwest)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(oauth2::reqwest::Error::Reqwest)?;

        let status_code = response.status();
        let headers = response.headers().to_owned();
        let body = response
            .bytes()
            .await
            .map_err(oauth2::reqwest::Error::Reqwest)?;

        Ok(oauth2::HttpResponse {
            status_code,
            headers,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            client_id: "test-client".into(),
            client_secret: "test-secret".into(),
            redirect_uri: "http://localhost:3000/oauth2callback".into(),
            session_secret: "secret".into(),
            port: 3000,
        }
    }

    #[test]
    fn authorize_url_requests_the_comment_scope() {
        let client = IdentityClient::new(&test_config());
        let url = client.authorize_url();

        let scope = url
            .query_pairs()
            .find(|(key, _)| key == "scope")
            .map(|(_, value)| value.into_owned())
            .expect("authorize URL should carry a scope parameter");
        assert_eq!(scope, YOUTUBE_SCOPE);
    }

    #[test]
    fn authorize_url_requests_offline_access() {
        let client = IdentityClient::new(&test_config());
        let url = client.authorize_url();

        assert!(url
            .query_pairs()
            .any(|(key, value)| key == "access_type" && value == "offline"));
    }

    #[test]
    fn authorize_url_points_at_the_configured_endpoint() {
        let client = IdentityClient::new(&test_config());
        let url = client.authorize_url();
        assert_eq!(url.host_str(), Some("accounts.google.com"));
        assert_eq!(url.path(), "/o/oauth2/v2/auth");
    }
}
