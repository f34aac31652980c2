//! HTTP client for the Pinterest v1 API.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    codec,
    config::ClientConfig,
    controllers::{BoardsController, MeController, OAuthController, PinsController, UsersController},
    errors::check_response,
    request::Request,
    types::Paginated,
    Error,
};

const USER_AGENT: &str = concat!("pinterest_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Pinterest v1 API.
///
/// Holds the transport, base URL and access token; every controller
/// borrows it, so they all share one transport and one credential.
///
/// ```no_run
/// # async fn run() -> Result<(), pinterest_api::Error> {
/// let client = pinterest_api::Client::new()?.register_access_token("token");
/// let me = client.me().fetch().await?;
/// println!("{}", me.username);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://api.pinterest.com/v1`.
    base_api_url: String,
    access_token: Option<String>,
}

impl Client {
    /// Creates a client for the production API, without an access token.
    pub fn new() -> Result<Self, Error> {
        Self::from_config(ClientConfig::default())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            http,
            base_api_url: config.base_url,
            access_token: config.access_token,
        })
    }

    /// Sets the access token sent with every request.
    pub fn register_access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.to_string());
        self
    }

    /// Replaces the underlying transport, e.g. with one using a different timeout.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// `/users/` endpoints.
    pub fn users(&self) -> UsersController<'_> {
        UsersController::new(self)
    }

    /// `/boards/` endpoints.
    pub fn boards(&self) -> BoardsController<'_> {
        BoardsController::new(self)
    }

    /// `/pins/` endpoints.
    pub fn pins(&self) -> PinsController<'_> {
        PinsController::new(self)
    }

    /// `/me/` endpoints, acting as the owner of the access token.
    pub fn me(&self) -> MeController<'_> {
        MeController::new(self)
    }

    /// `/oauth/` endpoints.
    pub fn oauth(&self) -> OAuthController<'_> {
        OAuthController::new(self)
    }

    /// Sends one request and returns the body of a successful response.
    /// Non-2xx responses are turned into errors here and nowhere else.
    async fn send(&self, request: Request) -> Result<String, Error> {
        let url = request.to_url(&self.base_api_url, self.access_token.as_deref())?;
        tracing::debug!("{} {}", request.method(), request.path());

        let mut builder = self.http.request(request.method().clone(), url);
        if !request.form_pairs().is_empty() {
            builder = builder.form(request.form_pairs());
        }
        // The URL carries the access token (and the client secret on the
        // OAuth exchange), so it is stripped before the error goes anywhere.
        let resp = builder.send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to send {} {}: {}", request.method(), request.path(), e);
            Error::Transport(e)
        })?;

        let status: StatusCode = resp.status();
        let headers: HeaderMap = resp.headers().clone();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;
        tracing::debug!("{} {} -> {}", request.method(), request.path(), status);

        check_response(status, &headers, &body)?;
        Ok(body)
    }

    pub(crate) async fn fetch_object<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<T, Error> {
        let body = self.send(request).await?;
        codec::decode_object(&body)
    }

    pub(crate) async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<Paginated<T>, Error> {
        let body = self.send(request).await?;
        codec::decode_list(&body)
    }

    /// For endpoints whose body is not wrapped in an envelope.
    pub(crate) async fn fetch_top_level<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<T, Error> {
        let body = self.send(request).await?;
        codec::decode_top_level(&body)
    }

    /// For endpoints where only success matters (deletes, follows).
    pub(crate) async fn execute(&self, request: Request) -> Result<(), Error> {
        self.send(request).await.map(|_| ())
    }
}
