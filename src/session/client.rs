//! HTTP wrappers over the Authentication Service endpoints. These helpers
//! centralize request construction, timeouts, and error mapping so session
//! logic stays free of wire details. Credential payloads are never logged.

use crate::session::{
    error::Error,
    types::{TokenResponse, UserProfile},
};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Timeout applied to every request against the service.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn detail_message(json_response: &Value) -> Option<&str> {
    json_response.get("detail").and_then(Value::as_str)
}

/// Turn a non-success response into [`Error::Rejected`], keeping the
/// service's `detail` message when the body carries one.
async fn rejected(response: reqwest::Response, fallback: &str) -> Error {
    let status = response.status().as_u16();
    let message = match response.json::<Value>().await {
        Ok(body) => detail_message(&body).unwrap_or(fallback).to_string(),
        Err(_) => fallback.to_string(),
    };

    Error::Rejected { status, message }
}

/// Stateless client for the three Authentication Service endpoints.
#[derive(Debug)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// # Errors
    /// Returns an error if `base_url` cannot be parsed, uses an unsupported
    /// scheme, or the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, Error> {
        let url = Url::parse(base_url)
            .map_err(|err| Error::Config(format!("invalid base URL {base_url}: {err}")))?;

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(Error::Config(format!(
                "invalid base URL {base_url}: unsupported scheme {scheme}"
            )));
        }

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| Error::Network(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Exchange an email and password for a bearer token. The token endpoint
    /// speaks the OAuth2 password form, so the email travels as `username`.
    /// # Errors
    /// Returns an error if the request fails or the service rejects the
    /// credentials. No session state is touched either way.
    pub async fn exchange_credentials(
        &self,
        email: &str,
        secret: &SecretString,
    ) -> Result<String, Error> {
        let url = self.endpoint("/token");

        let span = info_span!(
            "auth.token",
            http.method = "POST",
            url = %url
        );
        let response = self
            .client
            .post(&url)
            .form(&[("username", email), ("password", secret.expose_secret())])
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            return Err(rejected(response, "Login failed").await);
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Create an account. The registration endpoint takes its fields as
    /// query parameters and answers with the created profile.
    /// # Errors
    /// Returns an error if the request fails or the service rejects the
    /// registration, carrying the service's `detail` message when present.
    pub async fn register(
        &self,
        email: &str,
        secret: &SecretString,
        full_name: Option<&str>,
    ) -> Result<UserProfile, Error> {
        let url = self.endpoint("/users/register");

        let mut query: Vec<(&str, &str)> = vec![("email", email)];
        if let Some(name) = full_name {
            query.push(("full_name", name));
        }
        query.push(("password", secret.expose_secret()));

        let span = info_span!(
            "auth.register",
            http.method = "POST",
            url = %url
        );
        let response = self
            .client
            .post(&url)
            .query(&query)
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            return Err(rejected(response, "Registration failed").await);
        }

        Ok(response.json().await?)
    }

    /// Resolve a bearer token to the profile it belongs to. Any non-success
    /// status means the token is no longer good.
    /// # Errors
    /// Returns [`Error::SessionInvalid`] when the service rejects the token,
    /// or a network error if the request cannot complete.
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, Error> {
        let url = self.endpoint("/users/me");

        let span = info_span!(
            "auth.me",
            http.method = "GET",
            url = %url
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            debug!("profile lookup rejected: {}", response.status());
            return Err(Error::SessionInvalid);
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_message_present() {
        let body = json!({"detail": "Incorrect email or password"});
        assert_eq!(detail_message(&body), Some("Incorrect email or password"));
    }

    #[test]
    fn test_detail_message_missing_or_not_a_string() {
        assert_eq!(detail_message(&json!({})), None);
        assert_eq!(detail_message(&json!({"detail": 42})), None);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = AuthClient::new("http://localhost:8080/", "test-suite").unwrap();
        assert_eq!(client.endpoint("/token"), "http://localhost:8080/token");
    }

    #[test]
    fn test_new_rejects_unsupported_scheme() {
        let err = AuthClient::new("ftp://localhost:8080", "test-suite").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = AuthClient::new("not a url", "test-suite").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
