use url::Url;

use crate::{
    request::Request,
    types::{AccessToken, Scope},
    Client, Error,
};

/// Page where users grant an application access to their account.
pub const AUTHORIZATION_URL: &str = "https://api.pinterest.com/oauth/";

/// `/oauth/` endpoints.
pub struct OAuthController<'a> {
    client: &'a Client,
}

impl<'a> OAuthController<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn token(&self) -> OAuthTokenController<'a> {
        OAuthTokenController {
            client: self.client,
        }
    }

    /// Builds the URL to send a user to so they can authorize the application.
    /// The authorization code delivered to `redirect_uri` is then exchanged
    /// through [`OAuthTokenController::create`].
    pub fn authorization_url(
        &self,
        client_id: &str,
        redirect_uri: &str,
        scopes: &[Scope],
        state: Option<&str>,
    ) -> Result<Url, Error> {
        let mut url = Url::parse(AUTHORIZATION_URL)?;
        let scope = scopes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("response_type", "code")
                .append_pair("client_id", client_id)
                .append_pair("redirect_uri", redirect_uri)
                .append_pair("scope", &scope);
            if let Some(state) = state.filter(|s| !s.is_empty()) {
                pairs.append_pair("state", state);
            }
        }
        Ok(url)
    }
}

/// `/oauth/token` endpoint.
pub struct OAuthTokenController<'a> {
    client: &'a Client,
}

impl OAuthTokenController<'_> {
    /// Exchanges an authorization code for an access token.
    ///
    /// `POST /oauth/token`
    pub async fn create(
        &self,
        client_id: &str,
        client_secret: &str,
        authorization_code: &str,
    ) -> Result<AccessToken, Error> {
        let request = Request::post("/oauth/token")
            .with_query("grant_type", "authorization_code")
            .with_query("client_id", client_id)
            .with_query("client_secret", client_secret)
            .with_query("code", authorization_code);
        self.client.fetch_top_level(request).await
    }
}
